//! Prefab metadata descriptors.
//!
//! Four small write-once records, serialized exactly as the Android Gradle
//! plugin expects them: `prefab.json` at the package level, `module.json` per
//! module, `abi.json` per (module, ABI) pair, and the `AndroidManifest.xml`
//! document handled by [`manifest`].

pub mod manifest;

use serde::{Deserialize, Serialize};

use crate::core::config::ExportConfig;
use crate::core::AndroidAbi;

pub use manifest::AndroidManifest;

/// Top-level `prefab.json` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Prefab package name
    pub name: String,
    /// Prefab schema version; always 1
    pub schema_version: u32,
    /// Package-level dependencies; always empty for this artifact
    pub dependencies: Vec<String>,
    /// Prefab package version
    pub version: String,
}

impl PackageMetadata {
    pub fn new(config: &ExportConfig) -> Self {
        PackageMetadata {
            name: config.name.clone(),
            schema_version: 1,
            dependencies: Vec::new(),
            version: config.version.clone(),
        }
    }
}

/// Per-module `module.json` record.
///
/// All fields stay at their null/empty defaults: the modules neither rename
/// their library nor re-export other libraries, and the consuming build
/// system derives everything else from the directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    pub export_libraries: Vec<String>,
    pub library_name: Option<String>,
    pub android: AndroidModuleMetadata,
}

/// Android-specific overrides inside `module.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidModuleMetadata {
    pub export_libraries: Option<Vec<String>>,
    pub library_name: Option<String>,
}

impl Default for ModuleMetadata {
    fn default() -> Self {
        ModuleMetadata {
            export_libraries: Vec::new(),
            library_name: None,
            android: AndroidModuleMetadata {
                export_libraries: None,
                library_name: None,
            },
        }
    }
}

/// Per-ABI `abi.json` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiMetadata {
    /// Android ABI string, e.g. `arm64-v8a`
    pub abi: String,
    /// Android API level the binaries target (minSdkVersion)
    pub api: u32,
    /// NDK major version the binaries were built with
    pub ndk: u32,
    /// STL variant the binaries link against
    pub stl: String,
}

impl AbiMetadata {
    pub fn new(config: &ExportConfig, abi: AndroidAbi) -> Self {
        AbiMetadata {
            abi: abi.abi_string().to_string(),
            api: config.min_sdk_version,
            ndk: config.ndk_version,
            stl: config.stl.clone(),
        }
    }
}

/// Pretty-print a metadata record with a trailing newline.
pub fn to_json<T: Serialize>(record: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    Ok(json)
}
