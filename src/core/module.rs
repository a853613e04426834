//! Module descriptors: what gets packaged, and from which vcpkg port.

use regex::Regex;

/// A Prefab module exported from a prebuilt vcpkg package.
///
/// `package_name` is the vcpkg port that produced the binaries;
/// `module_name` is both the Prefab module id and the library stem
/// (binaries named `lib<module_name>.a` / `lib<module_name>.so` are
/// picked up from the port's `lib/` directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// vcpkg port the binaries come from (e.g. `openssl`)
    pub package_name: String,

    /// Prefab module id and library stem (e.g. `ssl`)
    pub module_name: String,

    /// Copy the port's `include/` tree into each ABI directory
    pub copy_headers: bool,
}

impl ModuleDescriptor {
    /// Create a descriptor that copies headers.
    pub fn new(package_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        ModuleDescriptor {
            package_name: package_name.into(),
            module_name: module_name.into(),
            copy_headers: true,
        }
    }

    /// Skip the header copy for this module.
    ///
    /// Used when another module of the same port already exports the headers.
    pub fn without_headers(mut self) -> Self {
        self.copy_headers = false;
        self
    }

    /// Pattern matching this module's library filenames.
    ///
    /// Anchored at both ends: `libfoo.also.txt` must not match module `foo`.
    pub fn lib_file_pattern(&self) -> Regex {
        Regex::new(&format!(r"^lib{}\.(a|so)$", regex::escape(&self.module_name)))
            .expect("escaped module name forms a valid pattern")
    }
}

/// The fixed set of modules this tool packages, in processing order.
///
/// `crypto` skips the header copy: the OpenSSL headers are already exported
/// by the `ssl` module of the same port.
pub fn default_modules() -> Vec<ModuleDescriptor> {
    vec![
        ModuleDescriptor::new("bzip2", "bz2"),
        ModuleDescriptor::new("libffi", "ffi"),
        ModuleDescriptor::new("libuuid", "uuid"),
        ModuleDescriptor::new("sqlite3", "sqlite3"),
        ModuleDescriptor::new("openssl", "ssl"),
        ModuleDescriptor::new("openssl", "crypto").without_headers(),
        ModuleDescriptor::new("python3", "python3.10"),
    ]
}
