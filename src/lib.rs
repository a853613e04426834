//! vcpkg-prefab - Packages vcpkg-built Android native libraries into a Prefab AAR
//!
//! This crate provides the library functionality behind the `vcpkg-prefab`
//! binary: the Prefab directory layout, the JSON/XML metadata descriptors,
//! and the AAR archive assembly.

pub mod core;
pub mod metadata;
pub mod ops;
pub mod util;

pub use crate::core::{abi::AndroidAbi, config::ExportConfig, module::ModuleDescriptor};
pub use crate::ops::errors::ExportError;
pub use crate::ops::export::{export, ExportReport};
