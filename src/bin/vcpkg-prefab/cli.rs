//! CLI definitions using clap.
//!
//! The tool is single-purpose, so there are no subcommands. What gets
//! packaged — the module list, versions, SDK levels — is fixed in the
//! program body; the flags only locate the vcpkg installation and the
//! output directory.

use std::path::PathBuf;

use clap::Parser;

/// Packages vcpkg-built Android native libraries into a Prefab AAR
#[derive(Parser)]
#[command(name = "vcpkg-prefab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the prefab tree and archive are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// vcpkg installation root (defaults to auto-detection)
    #[arg(long, env = "VCPKG_ROOT")]
    pub vcpkg_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
