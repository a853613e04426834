//! vcpkg root discovery.
//!
//! Resolution order: an explicit path (the `--vcpkg-root` flag, which also
//! absorbs `$VCPKG_ROOT`), then a `vcpkg` binary on `$PATH` whose parent
//! looks like a bootstrap checkout, then `~/vcpkg` as the conventional
//! manual-clone location.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::UserDirs;

/// Resolve the vcpkg root the prebuilt packages are read from.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        if !root.is_dir() {
            bail!("vcpkg root does not exist: {}", root.display());
        }
        return Ok(root.to_path_buf());
    }

    if let Some(root) = detect_from_path() {
        return Ok(root);
    }

    let home = UserDirs::new()
        .context("could not determine the home directory")?
        .home_dir()
        .to_path_buf();
    let root = home.join("vcpkg");
    if !root.is_dir() {
        bail!(
            "no vcpkg installation found; pass --vcpkg-root or set VCPKG_ROOT \
             (looked for {})",
            root.display()
        );
    }
    Ok(root)
}

/// Find vcpkg in PATH and derive the root from the binary location.
fn detect_from_path() -> Option<PathBuf> {
    let vcpkg_exe = if cfg!(windows) { "vcpkg.exe" } else { "vcpkg" };
    let vcpkg_path = which::which(vcpkg_exe).ok()?;

    // vcpkg binary sits at <root>/vcpkg[.exe]
    let root = vcpkg_path.parent()?;
    if is_valid_vcpkg_root(root) {
        tracing::debug!("found vcpkg in PATH: {}", root.display());
        return Some(root.to_path_buf());
    }

    None
}

/// Validate that a directory is a vcpkg root.
fn is_valid_vcpkg_root(path: &Path) -> bool {
    // .vcpkg-root marker file is created by the vcpkg bootstrap
    if path.join(".vcpkg-root").exists() {
        return true;
    }

    let vcpkg_exe = if cfg!(windows) { "vcpkg.exe" } else { "vcpkg" };
    path.join(vcpkg_exe).exists() && path.join("scripts").is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_root_is_used_verbatim() {
        let tmp = TempDir::new().unwrap();
        let root = resolve_root(Some(tmp.path())).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn test_missing_explicit_root_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(resolve_root(Some(&missing)).is_err());
    }

    #[test]
    fn test_marker_file_validates_root() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_valid_vcpkg_root(tmp.path()));

        std::fs::write(tmp.path().join(".vcpkg-root"), "").unwrap();
        assert!(is_valid_vcpkg_root(tmp.path()));
    }
}
