//! Core domain types: ABI mapping, module descriptors, export configuration.

pub mod abi;
pub mod config;
pub mod module;

pub use abi::AndroidAbi;
pub use config::ExportConfig;
pub use module::ModuleDescriptor;
