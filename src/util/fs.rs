//! Filesystem utilities.
//!
//! Thin wrappers around `std::fs` with the merge/copy semantics the export
//! needs. All functions return plain `io::Result`; the caller attaches the
//! failing path when converting into the export error taxonomy.

use std::fs;
use std::io;
use std::path::Path;

/// Remove a directory and all its contents, if it exists.
pub fn remove_dir_all_if_exists(path: &Path) -> io::Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it and any missing parents.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Write a string to a file, overwriting any previous contents.
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}

/// Copy a single file, carrying permissions and, where the platform
/// supports it, the modification time.
pub fn copy_file_preserving(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;

    // Timestamp preservation is best-effort; permissions already travel
    // with fs::copy.
    if let Ok(mtime) = fs::metadata(src).and_then(|m| m.modified()) {
        if let Ok(file) = fs::File::options().write(true).open(dst) {
            let _ = file.set_modified(mtime);
        }
    }

    Ok(())
}

/// Recursively copy a directory tree into `dst`, merging with existing
/// contents. Files already present under `dst` are overwritten on name
/// collision; everything else is left in place.
pub fn copy_dir_merged(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if ty.is_dir() {
            copy_dir_merged(&src_path, &dst_path)?;
        } else {
            copy_file_preserving(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_dir_merged_copies_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");

        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.h"), "a").unwrap();
        fs::write(src.join("nested/b.h"), "b").unwrap();

        copy_dir_merged(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.h")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dst.join("nested/b.h")).unwrap(), "b");
    }

    #[test]
    fn test_copy_dir_merged_keeps_existing_files() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");

        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("new.h"), "new").unwrap();
        fs::write(dst.join("old.h"), "old").unwrap();

        copy_dir_merged(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("old.h")).unwrap(), "old");
        assert_eq!(fs::read_to_string(dst.join("new.h")).unwrap(), "new");
    }

    #[test]
    fn test_copy_dir_merged_last_writer_wins() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");

        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("shared.h"), "from src").unwrap();
        fs::write(dst.join("shared.h"), "from dst").unwrap();

        copy_dir_merged(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("shared.h")).unwrap(), "from src");
    }

    #[test]
    fn test_remove_dir_all_if_exists_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("gone");

        fs::create_dir_all(dir.join("inner")).unwrap();
        remove_dir_all_if_exists(&dir).unwrap();
        assert!(!dir.exists());

        // second removal is a no-op, not an error
        remove_dir_all_if_exists(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_preserving_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("libx.so");
        let dst = tmp.path().join("copy.so");

        fs::write(&src, "elf").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();

        copy_file_preserving(&src, &dst).unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
