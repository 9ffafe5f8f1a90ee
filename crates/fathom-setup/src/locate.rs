//! Discovery of installed fathom artifacts.
//!
//! Uninstall needs to know where a prior installation lives. The capability
//! is a trait so the dispatcher can select between the conventional
//! filesystem probe and explicit operator-supplied overrides; discovery never
//! errors, it simply reports what exists.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::layout::PACKAGE_NAME;

/// Conventional install path for the executable when it is not on `PATH`.
const FALLBACK_BIN_DIR: &str = "/usr/local/bin";

/// Locates prior installation artifacts on disk.
pub(crate) trait InstallLocator {
    /// Directories believed to hold the installed package; empty when no
    /// installation can be found.
    fn package_dirs(&self) -> Vec<PathBuf>;
    /// Path of the installed executable, when one can be found.
    fn executable(&self) -> Option<PathBuf>;
}

/// Probes the conventional installation locations.
#[derive(Debug, Default)]
pub(crate) struct ConventionalLocator;

impl ConventionalLocator {
    fn package_candidates() -> Vec<PathBuf> {
        let mut candidates = vec![
            PathBuf::from("/usr/local/lib").join(PACKAGE_NAME),
            PathBuf::from("/usr/lib").join(PACKAGE_NAME),
        ];
        if let Some(data_dir) = dirs::data_local_dir() {
            candidates.push(data_dir.join(PACKAGE_NAME));
        }
        candidates
    }
}

impl InstallLocator for ConventionalLocator {
    fn package_dirs(&self) -> Vec<PathBuf> {
        existing_dirs(Self::package_candidates())
    }

    fn executable(&self) -> Option<PathBuf> {
        search_path(
            PACKAGE_NAME,
            env::var_os("PATH").as_deref(),
            Path::new(FALLBACK_BIN_DIR),
        )
    }
}

/// Reports exactly the paths the operator named on the command line.
#[derive(Debug)]
pub(crate) struct ExplicitLocator {
    pub(crate) package_dir: Option<PathBuf>,
    pub(crate) executable: Option<PathBuf>,
}

impl InstallLocator for ExplicitLocator {
    fn package_dirs(&self) -> Vec<PathBuf> {
        self.package_dir.clone().into_iter().collect()
    }

    fn executable(&self) -> Option<PathBuf> {
        self.executable.clone()
    }
}

/// Resolves the uninstall target set from the operator's overrides.
///
/// Fallback is per field: an override pins its own artifact and leaves
/// discovery of the other one to `discovery`, so `--package-dir` alone still
/// finds and removes an installed executable (and vice versa).
pub(crate) fn resolve_targets(
    package_dir: Option<PathBuf>,
    executable: Option<PathBuf>,
    discovery: &dyn InstallLocator,
) -> (Vec<PathBuf>, Option<PathBuf>) {
    let explicit = ExplicitLocator {
        package_dir,
        executable,
    };
    let named_dirs = explicit.package_dirs();
    let package_dirs = if named_dirs.is_empty() {
        discovery.package_dirs()
    } else {
        named_dirs
    };
    let executable = explicit.executable().or_else(|| discovery.executable());
    (package_dirs, executable)
}

fn existing_dirs(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.is_dir())
        .collect()
}

/// Searches the active executable search path for `name`, falling back to the
/// conventional install directory.
fn search_path(name: &str, search: Option<&OsStr>, fallback_dir: &Path) -> Option<PathBuf> {
    if let Some(search) = search {
        for dir in env::split_paths(search) {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    let fallback = fallback_dir.join(name);
    fallback.is_file().then_some(fallback)
}
