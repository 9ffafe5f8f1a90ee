//! Fixed relative layout of the fathom source tree.
//!
//! The tool operates on a checkout with a known shape: the payload package
//! under `src/fathom`, the executable entry point and plugin loader under
//! `src/scripts`, and `build`/`dist` output directories at the root.

use camino::Utf8PathBuf;

/// Name of the payload package and of its installed executable.
pub(crate) const PACKAGE_NAME: &str = "fathom";

/// File name of the plugin loader the host application picks up.
pub(crate) const LOADER_FILE_NAME: &str = "fathom-loader.py";

/// Resolves paths inside a fathom source checkout.
#[derive(Debug, Clone)]
pub(crate) struct SourceTree {
    root: Utf8PathBuf,
}

impl SourceTree {
    pub(crate) fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// The payload package directory copied verbatim into installations.
    pub(crate) fn package_dir(&self) -> Utf8PathBuf {
        self.root.join("src").join(PACKAGE_NAME)
    }

    /// The generated version artifact inside the payload package.
    pub(crate) fn version_file(&self) -> Utf8PathBuf {
        self.package_dir().join("core").join("version.cfg")
    }

    /// The plugin loader file shipped alongside the scripts.
    pub(crate) fn loader_path(&self) -> Utf8PathBuf {
        self.root.join("src").join("scripts").join(LOADER_FILE_NAME)
    }

    pub(crate) fn build_dir(&self) -> Utf8PathBuf {
        self.root.join("build")
    }

    pub(crate) fn dist_dir(&self) -> Utf8PathBuf {
        self.root.join("dist")
    }
}
