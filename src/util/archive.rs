//! Archive writing.
//!
//! The AAR is an ordinary zip container. Writing goes through the
//! [`ArchiveWriter`] capability so the export step does not care how the
//! bytes are produced; [`ZipArchiveWriter`] is the in-process implementation
//! backed by the `zip` crate.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Capability for building the output archive.
pub trait ArchiveWriter {
    /// Add every file and directory under `root`, with entry names relative
    /// to `root` itself (the root directory name is not a path prefix).
    fn add_dir_tree(&mut self, root: &Path) -> Result<()>;

    /// Finalize the archive. No further additions are accepted.
    fn finish(&mut self) -> Result<()>;
}

/// Zip-backed [`ArchiveWriter`].
pub struct ZipArchiveWriter {
    path: PathBuf,
    inner: Option<ZipWriter<File>>,
}

impl ZipArchiveWriter {
    /// Create the archive file, truncating any previous one.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create archive: {}", path.display()))?;
        Ok(ZipArchiveWriter {
            path: path.to_path_buf(),
            inner: Some(ZipWriter::new(file)),
        })
    }

    fn entry_options(path: &Path) -> FileOptions {
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(meta) = std::fs::metadata(path) {
                return options.unix_permissions(meta.permissions().mode());
            }
        }

        options
    }

    /// Zip entry name for `path` relative to `root`, always '/'-separated.
    fn entry_name(root: &Path, path: &Path) -> Result<String> {
        let rel = path
            .strip_prefix(root)
            .with_context(|| format!("path escapes archive root: {}", path.display()))?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(parts.join("/"))
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn add_dir_tree(&mut self, root: &Path) -> Result<()> {
        let writer = self
            .inner
            .as_mut()
            .context("archive has already been finalized")?;

        // Sorted traversal keeps the entry order stable between runs.
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("failed to walk archive root: {}", root.display()))?;
            let name = Self::entry_name(root, entry.path())?;
            let options = Self::entry_options(entry.path());

            if entry.file_type().is_dir() {
                writer
                    .add_directory(name.as_str(), options)
                    .with_context(|| format!("failed to add directory entry: {}", name))?;
            } else {
                writer
                    .start_file(name.as_str(), options)
                    .with_context(|| format!("failed to add file entry: {}", name))?;
                let mut file = File::open(entry.path())
                    .with_context(|| format!("failed to open: {}", entry.path().display()))?;
                io::copy(&mut file, writer)
                    .with_context(|| format!("failed to compress: {}", name))?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(mut writer) = self.inner.take() {
            writer
                .finish()
                .with_context(|| format!("failed to finalize archive: {}", self.path.display()))?;
        }
        Ok(())
    }
}
