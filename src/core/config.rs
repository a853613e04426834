//! Export configuration.
//!
//! The packaged artifact is fully described by compile-time constants; the
//! only runtime inputs are the vcpkg root the binaries are read from and the
//! output directory the prefab tree and archive are written to. Everything is
//! gathered into one immutable [`ExportConfig`] constructed at startup and
//! passed by reference into each step.

use std::path::{Path, PathBuf};

use crate::core::module::{default_modules, ModuleDescriptor};

/// Name of the packaged Prefab artifact.
pub const PACKAGE_NAME: &str = "native-libs";

/// Version of the packaged Prefab artifact.
pub const PACKAGE_VERSION: &str = "1.0.0";

/// Minimum Android SDK level the binaries were built against.
pub const MIN_SDK_VERSION: u32 = 25;

/// Target Android SDK level declared in the manifest.
pub const TARGET_SDK_VERSION: u32 = 31;

/// Major version of the NDK used to build the binaries.
pub const NDK_MAJOR_VERSION: u32 = 25;

/// C++ standard library the binaries link against.
pub const STL: &str = "c++_static";

/// Java package id declared in the generated AndroidManifest.xml.
pub const MANIFEST_PACKAGE_ID: &str = "com.vcpkg.ndk.support.nativelibs";

/// Resolved settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Prefab package name
    pub name: String,
    /// Prefab package version
    pub version: String,
    /// minSdkVersion; also the `api` field of every abi.json
    pub min_sdk_version: u32,
    /// targetSdkVersion declared in the manifest
    pub target_sdk_version: u32,
    /// NDK major version recorded in every abi.json
    pub ndk_version: u32,
    /// STL variant recorded in every abi.json
    pub stl: String,
    /// Java package id for the manifest
    pub manifest_package: String,
    /// Modules to package, in order
    pub modules: Vec<ModuleDescriptor>,
    /// vcpkg installation root the prebuilt packages are read from
    pub vcpkg_root: PathBuf,
    /// Directory the prefab tree and archive are written to
    pub out_dir: PathBuf,
}

impl ExportConfig {
    /// Build the configuration for a run against the given roots.
    pub fn new(vcpkg_root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        ExportConfig {
            name: PACKAGE_NAME.to_string(),
            version: PACKAGE_VERSION.to_string(),
            min_sdk_version: MIN_SDK_VERSION,
            target_sdk_version: TARGET_SDK_VERSION,
            ndk_version: NDK_MAJOR_VERSION,
            stl: STL.to_string(),
            manifest_package: MANIFEST_PACKAGE_ID.to_string(),
            modules: default_modules(),
            vcpkg_root: vcpkg_root.into(),
            out_dir: out_dir.into(),
        }
    }

    /// The prefab root, which is also the archive root:
    /// `<out-dir>/prefab/<name>`.
    pub fn prefab_root(&self) -> PathBuf {
        self.out_dir.join("prefab").join(&self.name)
    }

    /// The modules directory inside the prefab root:
    /// `<prefab-root>/prefab/modules`.
    pub fn modules_dir(&self) -> PathBuf {
        self.prefab_root().join("prefab").join("modules")
    }

    /// The directory of a single module: `<modules-dir>/<module>`.
    pub fn module_dir(&self, module: &ModuleDescriptor) -> PathBuf {
        self.modules_dir().join(&module.module_name)
    }

    /// vcpkg's per-port install tree: `<vcpkg-root>/packages`.
    pub fn packages_dir(&self) -> PathBuf {
        self.vcpkg_root.join("packages")
    }

    /// The install location of one port for one architecture:
    /// `<packages-dir>/<package>_<arch>-android`.
    pub fn package_dir(&self, package: &str, arch: &str) -> PathBuf {
        self.packages_dir().join(format!("{}_{}-android", package, arch))
    }

    /// Where the archive is written: `<out-dir>/prefab/<name>-<version>.aar`,
    /// a sibling of the prefab root.
    pub fn aar_path(&self) -> PathBuf {
        self.out_dir
            .join("prefab")
            .join(format!("{}-{}.aar", self.name, self.version))
    }

    /// Display a produced artifact relative to the output root.
    pub fn display_path(&self, path: &Path) -> String {
        pathdiff::diff_paths(path, &self.out_dir)
            .unwrap_or_else(|| path.to_path_buf())
            .display()
            .to_string()
    }
}
