//! Build script: resolve the package version once per tool build and bake it
//! into the binary as `FATHOM_VERSION`.

use std::env;
use std::path::PathBuf;

use fathom_build_util::resolve_version_in;

/// Static base version of the fathom package.
const BASE_VERSION: &str = "0.6.1b";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());

    // Rebuild when the checkout's recorded revision moves so the baked
    // version tracks the repository state.
    let git_head = manifest_dir.join("../../.git/HEAD");
    if git_head.exists() {
        println!("cargo:rerun-if-changed={}", git_head.display());
    }

    let version = resolve_version_in(BASE_VERSION, &manifest_dir);
    println!("cargo:rustc-env=FATHOM_VERSION={version}");
}
