//! Installs and removes the host-application plugin bundle.
//!
//! The bundle is a pair: the loader file the host picks up from its
//! `plugins` directory, and the support module tree it loads from its
//! `modules` directory. Install preconditions are all checked before the
//! first filesystem mutation so a misconfigured `--host-dir` never leaves a
//! half-copied bundle behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::SetupError;
use crate::layout::{LOADER_FILE_NAME, PACKAGE_NAME, SourceTree};
use crate::output::SetupOutput;
use crate::remove;

/// Host subdirectory the loader file is installed into.
const HOST_PLUGIN_DIR: &str = "plugins";

/// Host subdirectory the support module tree is installed into.
const HOST_MODULE_DIR: &str = "modules";

/// Resolved source and destination paths for one plugin bundle.
struct BundlePaths {
    loader_src: PathBuf,
    loader_dst: PathBuf,
    module_src: PathBuf,
    module_dst: PathBuf,
}

impl BundlePaths {
    fn resolve(tree: &SourceTree, host_dir: &Path) -> Self {
        Self {
            loader_src: tree.loader_path().into_std_path_buf(),
            loader_dst: host_dir.join(HOST_PLUGIN_DIR).join(LOADER_FILE_NAME),
            module_src: tree.package_dir().into_std_path_buf(),
            module_dst: host_dir.join(HOST_MODULE_DIR).join(PACKAGE_NAME),
        }
    }
}

/// Copies the plugin bundle into the host directory.
///
/// Aborts with a diagnostic naming the missing path, and without mutating
/// anything, when a required source artifact or destination directory is
/// absent. A pre-existing bundle copy at the destination is replaced.
pub(crate) fn install<W: Write, E: Write>(
    tree: &SourceTree,
    host_dir: &Path,
    output: &mut SetupOutput<W, E>,
) -> Result<(), SetupError> {
    let paths = BundlePaths::resolve(tree, host_dir);
    let loader_dst_dir = host_dir.join(HOST_PLUGIN_DIR);
    let module_dst_dir = host_dir.join(HOST_MODULE_DIR);

    if !paths.loader_src.is_file() {
        return output.stderr_line(format_args!(
            "ERROR: could not locate the plugin loader file '{}'!",
            paths.loader_src.display()
        ));
    }
    if !loader_dst_dir.is_dir() {
        return output.stderr_line(format_args!(
            "ERROR: could not locate the host plugins directory '{}'! Check your --host-dir option.",
            loader_dst_dir.display()
        ));
    }
    if !paths.module_src.is_dir() {
        return output.stderr_line(format_args!(
            "ERROR: could not locate the fathom module directory '{}'!",
            paths.module_src.display()
        ));
    }
    if !module_dst_dir.is_dir() {
        return output.stderr_line(format_args!(
            "ERROR: could not locate the host modules directory '{}'! Check your --host-dir option.",
            module_dst_dir.display()
        ));
    }

    // Replace any previous copy. The loader file is a direct overwrite; the
    // module tree is removed first so stale files never survive an upgrade.
    if paths.loader_dst.exists() {
        fs::remove_file(&paths.loader_dst).map_err(|source| SetupError::RemoveArtifact {
            path: paths.loader_dst.clone(),
            source,
        })?;
    }
    if paths.module_dst.exists() {
        fs::remove_dir_all(&paths.module_dst).map_err(|source| SetupError::RemoveArtifact {
            path: paths.module_dst.clone(),
            source,
        })?;
    }

    output.stdout_line(format_args!(
        "copying {} -> {}",
        paths.loader_src.display(),
        paths.loader_dst.display()
    ))?;
    fs::copy(&paths.loader_src, &paths.loader_dst).map_err(|source| SetupError::CopyArtifact {
        src: paths.loader_src.clone(),
        dst: paths.loader_dst.clone(),
        source,
    })?;

    output.stdout_line(format_args!(
        "copying {} -> {}",
        paths.module_src.display(),
        paths.module_dst.display()
    ))?;
    copy_tree(&paths.module_src, &paths.module_dst).map_err(|source| SetupError::CopyArtifact {
        src: paths.module_src.clone(),
        dst: paths.module_dst.clone(),
        source,
    })?;

    Ok(())
}

/// Removes the plugin bundle from the host directory.
///
/// Absence of either bundle part is not an error; each removal is announced
/// so the operator sees exactly what was deleted.
pub(crate) fn uninstall<W: Write, E: Write>(
    tree: &SourceTree,
    host_dir: &Path,
    output: &mut SetupOutput<W, E>,
) -> Result<(), SetupError> {
    let paths = BundlePaths::resolve(tree, host_dir);

    if paths.loader_dst.exists() {
        output.stdout_line(format_args!("removing {}", paths.loader_dst.display()))?;
        remove::remove_file(&paths.loader_dst)?;
    }
    if paths.module_dst.exists() {
        output.stdout_line(format_args!("removing {}", paths.module_dst.display()))?;
        remove::remove_tree(&paths.module_dst)?;
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
