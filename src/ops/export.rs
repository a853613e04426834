//! The export operation.
//!
//! Fixed sequence, no branching: clean and recreate the prefab tree, write
//! the top-level metadata, copy each declared module per architecture, zip
//! the result. Fully sequential and blocking; any failure aborts the run and
//! leaves the partially written tree in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::ExportConfig;
use crate::core::module::ModuleDescriptor;
use crate::core::AndroidAbi;
use crate::metadata::{self, AbiMetadata, AndroidManifest, ModuleMetadata, PackageMetadata};
use crate::ops::errors::ExportError;
use crate::util::archive::{ArchiveWriter, ZipArchiveWriter};
use crate::util::fs as fsutil;
use crate::util::shell::{Shell, Status};

/// Summary of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Path of the produced archive
    pub aar_path: PathBuf,
    /// Number of modules packaged
    pub modules: usize,
}

/// Run the full export against the given configuration.
pub fn export(config: &ExportConfig, shell: &Shell) -> Result<ExportReport, ExportError> {
    init_tree(config, shell)?;
    write_package_metadata(config, shell)?;
    write_manifest(config, shell)?;

    for module in &config.modules {
        copy_module(config, module, shell)?;
    }

    build_archive(config, shell)?;

    Ok(ExportReport {
        aar_path: config.aar_path(),
        modules: config.modules.len(),
    })
}

/// Remove any previous prefab tree and create the modules directory skeleton.
fn init_tree(config: &ExportConfig, shell: &Shell) -> Result<(), ExportError> {
    let prefab_root = config.prefab_root();

    if prefab_root.exists() {
        fsutil::remove_dir_all_if_exists(&prefab_root)
            .map_err(|e| ExportError::fs(&prefab_root, e))?;
        shell.status(Status::Removed, config.display_path(&prefab_root));
    }

    let modules_dir = config.modules_dir();
    fsutil::ensure_dir(&modules_dir).map_err(|e| ExportError::fs(&modules_dir, e))?;
    Ok(())
}

/// Write `prefab.json` one level above the modules directory.
fn write_package_metadata(config: &ExportConfig, shell: &Shell) -> Result<(), ExportError> {
    let path = config.prefab_root().join("prefab").join("prefab.json");
    let json = metadata::to_json(&PackageMetadata::new(config))
        .map_err(|e| ExportError::fs(&path, e.into()))?;
    fsutil::write_string(&path, &json).map_err(|e| ExportError::fs(&path, e))?;

    shell.status(Status::Created, config.display_path(&path));
    Ok(())
}

/// Write `AndroidManifest.xml` at the prefab root.
fn write_manifest(config: &ExportConfig, shell: &Shell) -> Result<(), ExportError> {
    let path = config.prefab_root().join("AndroidManifest.xml");
    let xml = AndroidManifest::new(config)
        .render()
        .map_err(|e| ExportError::fs(&path, io::Error::other(e)))?;
    fsutil::write_string(&path, &xml).map_err(|e| ExportError::fs(&path, e))?;

    shell.status(Status::Created, config.display_path(&path));
    Ok(())
}

/// Copy one module's headers and binaries for every architecture, then write
/// its metadata.
fn copy_module(
    config: &ExportConfig,
    module: &ModuleDescriptor,
    shell: &Shell,
) -> Result<(), ExportError> {
    let module_dir = config.module_dir(module);

    for abi in AndroidAbi::ALL {
        let arch = abi.vcpkg_arch();
        let package_dir = config.package_dir(&module.package_name, arch);
        if !package_dir.is_dir() {
            return Err(ExportError::source_not_found(
                &module.package_name,
                arch,
                &package_dir,
            ));
        }

        let libs_dir = module_dir.join("libs").join(format!("android.{}", abi));
        fsutil::ensure_dir(&libs_dir).map_err(|e| ExportError::fs(&libs_dir, e))?;

        if module.copy_headers {
            let include_dir = package_dir.join("include");
            if !include_dir.is_dir() {
                return Err(ExportError::source_not_found(
                    &module.package_name,
                    arch,
                    &include_dir,
                ));
            }
            fsutil::copy_dir_merged(&include_dir, &libs_dir)
                .map_err(|e| ExportError::fs(&include_dir, e))?;
        }

        copy_libraries(module, &package_dir, arch, &libs_dir)?;
        write_abi_metadata(config, &libs_dir, abi, shell)?;
    }

    shell.status(
        Status::Copied,
        format!(
            "module {} (package {})",
            module.module_name, module.package_name
        ),
    );

    let path = module_dir.join("module.json");
    let json = metadata::to_json(&ModuleMetadata::default())
        .map_err(|e| ExportError::fs(&path, e.into()))?;
    fsutil::write_string(&path, &json).map_err(|e| ExportError::fs(&path, e))?;
    shell.status(Status::Created, config.display_path(&path));

    Ok(())
}

/// Copy every `lib<module>.a` / `lib<module>.so` from the package's `lib/`
/// directory. Both static and shared variants are copied when present.
fn copy_libraries(
    module: &ModuleDescriptor,
    package_dir: &Path,
    arch: &str,
    libs_dir: &Path,
) -> Result<(), ExportError> {
    let lib_dir = package_dir.join("lib");
    if !lib_dir.is_dir() {
        return Err(ExportError::source_not_found(
            &module.package_name,
            arch,
            &lib_dir,
        ));
    }

    let pattern = module.lib_file_pattern();

    let mut entries = fs::read_dir(&lib_dir)
        .and_then(|iter| iter.collect::<io::Result<Vec<_>>>())
        .map_err(|e| ExportError::fs(&lib_dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !pattern.is_match(name) || !entry.path().is_file() {
            continue;
        }

        let dst = libs_dir.join(name);
        fsutil::copy_file_preserving(&entry.path(), &dst)
            .map_err(|e| ExportError::fs(entry.path(), e))?;
        debug!("copied {} -> {}", entry.path().display(), dst.display());
    }

    Ok(())
}

/// Write `abi.json` into one ABI directory.
fn write_abi_metadata(
    config: &ExportConfig,
    libs_dir: &Path,
    abi: AndroidAbi,
    shell: &Shell,
) -> Result<(), ExportError> {
    let path = libs_dir.join("abi.json");
    let json = metadata::to_json(&AbiMetadata::new(config, abi))
        .map_err(|e| ExportError::fs(&path, e.into()))?;
    fsutil::write_string(&path, &json).map_err(|e| ExportError::fs(&path, e))?;

    shell.status(Status::Created, config.display_path(&path));
    Ok(())
}

/// Zip the prefab root's contents into the versioned AAR next to it.
fn build_archive(config: &ExportConfig, shell: &Shell) -> Result<(), ExportError> {
    let aar_path = config.aar_path();
    let archive_err = |e: anyhow::Error| ExportError::Archive {
        path: aar_path.clone(),
        message: format!("{:#}", e),
    };

    let mut writer = ZipArchiveWriter::create(&aar_path).map_err(archive_err)?;
    writer.add_dir_tree(&config.prefab_root()).map_err(archive_err)?;
    writer.finish().map_err(archive_err)?;

    shell.status(Status::Packaged, config.display_path(&aar_path));
    Ok(())
}
