//! Package version baked at build time and the generated runtime artifact.
//!
//! The build script resolves the version once per tool build; at run time the
//! tool regenerates the version artifact inside the payload package so an
//! installed copy always reports the version it was installed from.

use std::io::Write;

use fathom_build_util::write_version_file;

use crate::errors::SetupError;
use crate::layout::SourceTree;
use crate::output::SetupOutput;

/// Version string resolved by the build script.
pub(crate) const PACKAGE_VERSION: &str = env!("FATHOM_VERSION");

/// Regenerates the version artifact under the payload package directory.
///
/// Runs before every operation. A checkout without the payload package (for
/// example when the tool is invoked outside a source tree) is silently
/// skipped; the artifact only makes sense next to the code that reads it.
pub(crate) fn refresh_artifact<W: Write, E: Write>(
    tree: &SourceTree,
    output: &mut SetupOutput<W, E>,
) -> Result<(), SetupError> {
    if !tree.package_dir().is_dir() {
        return Ok(());
    }
    let path = tree.version_file();
    output.stdout_line(format_args!("creating {path}"))?;
    write_version_file(path.as_std_path(), PACKAGE_VERSION)
        .map_err(|source| SetupError::WriteVersionArtifact { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use camino::Utf8PathBuf;

    fn temp_tree() -> (tempfile::TempDir, SourceTree) {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir");
        let tree = SourceTree::new(root);
        (dir, tree)
    }

    #[test]
    fn writes_artifact_when_package_dir_exists() {
        let (_dir, tree) = temp_tree();
        fs::create_dir_all(tree.package_dir()).expect("create package dir");
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut output = SetupOutput::new(&mut stdout, &mut stderr);

        refresh_artifact(&tree, &mut output).expect("refresh succeeds");

        let contents = fs::read_to_string(tree.version_file()).expect("read artifact");
        assert!(contents.contains(&format!("version = \"{PACKAGE_VERSION}\"")));
        let announced = String::from_utf8(stdout).expect("stdout utf8");
        assert!(announced.starts_with("creating "));
    }

    #[test]
    fn skips_silently_without_a_payload_package() {
        let (_dir, tree) = temp_tree();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut output = SetupOutput::new(&mut stdout, &mut stderr);

        refresh_artifact(&tree, &mut output).expect("refresh succeeds");

        assert!(stdout.is_empty());
        assert!(!tree.version_file().exists());
    }
}
