//! Best-effort removal of installed artifacts.
//!
//! Deletion here treats an already-absent target as a satisfied goal, and any
//! other filesystem failure as non-fatal: an uninstall never fails merely
//! because one of several candidate paths was already gone. The single
//! exception is interruption, which always propagates out of the cleanup
//! loop.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::SetupError;
use crate::output::SetupOutput;

fn swallow_unless_interrupted(result: io::Result<()>) -> Result<(), SetupError> {
    match result {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::Interrupted => Err(SetupError::Interrupted),
        Err(_) => Ok(()),
    }
}

/// Recursively deletes a directory tree, best-effort.
pub(crate) fn remove_tree(path: &Path) -> Result<(), SetupError> {
    swallow_unless_interrupted(fs::remove_dir_all(path))
}

/// Deletes a single file, best-effort.
pub(crate) fn remove_file(path: &Path) -> Result<(), SetupError> {
    swallow_unless_interrupted(fs::remove_file(path))
}

/// Removes a located installation: zero or more package directories plus an
/// optional executable.
///
/// The executable removal is announced before the attempt so the operator
/// sees the exact path, matching the behaviour users rely on in scripts.
pub(crate) fn remove_installation<W: Write, E: Write>(
    package_dirs: &[PathBuf],
    executable: Option<&Path>,
    output: &mut SetupOutput<W, E>,
) -> Result<(), SetupError> {
    for dir in package_dirs {
        remove_tree(dir)?;
    }
    if let Some(executable) = executable {
        output.stdout_line(format_args!("removing '{}'", executable.display()))?;
        remove_file(executable)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interruption_propagates_out_of_best_effort_cleanup() {
        let result =
            swallow_unless_interrupted(Err(io::Error::from(io::ErrorKind::Interrupted)));
        assert!(matches!(result, Err(SetupError::Interrupted)));
    }

    #[test]
    fn ordinary_filesystem_errors_are_swallowed() {
        let result =
            swallow_unless_interrupted(Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        assert!(matches!(result, Ok(())));
    }

    #[test]
    fn nonexistent_paths_are_already_satisfied_goals() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut output = SetupOutput::new(&mut stdout, &mut stderr);

        remove_installation(
            &[PathBuf::from("/nonexistent/fathom-install")],
            Some(Path::new("/nonexistent/bin/fathom")),
            &mut output,
        )
        .expect("removal never fails for missing targets");

        assert!(stderr.is_empty(), "no failure diagnostics expected");
    }

    #[test]
    fn removes_directories_and_announces_the_executable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let package_dir = dir.path().join("fathom");
        fs::create_dir_all(package_dir.join("core")).expect("create package dir");
        fs::write(package_dir.join("core").join("version.cfg"), "version")
            .expect("write artifact");
        let executable = dir.path().join("fathom-bin");
        fs::write(&executable, "#!/bin/sh\n").expect("write executable");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut output = SetupOutput::new(&mut stdout, &mut stderr);
        remove_installation(
            &[package_dir.clone()],
            Some(executable.as_path()),
            &mut output,
        )
        .expect("removal succeeds");

        assert!(!package_dir.exists());
        assert!(!executable.exists());
        let announced = String::from_utf8(stdout).expect("stdout utf8");
        assert_eq!(
            announced,
            format!("removing '{}'\n", executable.display())
        );
    }

    #[test]
    fn repeated_removal_succeeds_with_nothing_left_to_delete() {
        let dir = tempfile::tempdir().expect("temp dir");
        let package_dir = dir.path().join("fathom");
        fs::create_dir_all(&package_dir).expect("create package dir");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut output = SetupOutput::new(&mut stdout, &mut stderr);
        remove_installation(&[package_dir.clone()], None, &mut output).expect("first removal");
        remove_installation(&[package_dir.clone()], None, &mut output).expect("second removal");

        assert!(!package_dir.exists());
    }
}
