//! Android ABI identities and their vcpkg architecture counterparts.
//!
//! vcpkg names Android cross-compilation targets by a short architecture id
//! (`arm64-android`, `x64-android`, ...), while Prefab metadata and the AAR
//! layout use the Android ABI strings (`arm64-v8a`, `x86_64`, ...). Every
//! exported module is packaged once per entry in this mapping.

use std::fmt;

/// An Android ABI targeted by the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AndroidAbi {
    /// 32-bit ARM (vcpkg `arm`)
    ArmeabiV7a,
    /// 64-bit ARM (vcpkg `arm64`)
    Arm64V8a,
    /// 32-bit x86 (vcpkg `x86`)
    X86,
    /// 64-bit x86 (vcpkg `x64`)
    X86_64,
}

impl AndroidAbi {
    /// All ABIs, in the order they are processed.
    pub const ALL: [AndroidAbi; 4] = [
        AndroidAbi::ArmeabiV7a,
        AndroidAbi::Arm64V8a,
        AndroidAbi::X86,
        AndroidAbi::X86_64,
    ];

    /// The vcpkg architecture id, as used in package directory names.
    pub fn vcpkg_arch(&self) -> &'static str {
        match self {
            AndroidAbi::ArmeabiV7a => "arm",
            AndroidAbi::Arm64V8a => "arm64",
            AndroidAbi::X86 => "x86",
            AndroidAbi::X86_64 => "x64",
        }
    }

    /// The Android ABI string, as used in `abi.json` and directory names.
    pub fn abi_string(&self) -> &'static str {
        match self {
            AndroidAbi::ArmeabiV7a => "armeabi-v7a",
            AndroidAbi::Arm64V8a => "arm64-v8a",
            AndroidAbi::X86 => "x86",
            AndroidAbi::X86_64 => "x86_64",
        }
    }

    /// Look up an ABI from a vcpkg architecture id.
    pub fn from_vcpkg_arch(arch: &str) -> Option<Self> {
        match arch {
            "arm" => Some(AndroidAbi::ArmeabiV7a),
            "arm64" => Some(AndroidAbi::Arm64V8a),
            "x86" => Some(AndroidAbi::X86),
            "x64" => Some(AndroidAbi::X86_64),
            _ => None,
        }
    }

    /// Look up an ABI from its Android ABI string.
    pub fn from_abi_string(abi: &str) -> Option<Self> {
        match abi {
            "armeabi-v7a" => Some(AndroidAbi::ArmeabiV7a),
            "arm64-v8a" => Some(AndroidAbi::Arm64V8a),
            "x86" => Some(AndroidAbi::X86),
            "x86_64" => Some(AndroidAbi::X86_64),
            _ => None,
        }
    }
}

impl fmt::Display for AndroidAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abi_string())
    }
}
