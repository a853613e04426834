//! vcpkg-prefab CLI - packages vcpkg-built Android native libraries into a
//! Prefab AAR.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use vcpkg_prefab::core::config::ExportConfig;
use vcpkg_prefab::ops;
use vcpkg_prefab::util::{vcpkg, Shell};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("vcpkg_prefab=debug")
    } else {
        EnvFilter::new("vcpkg_prefab=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let vcpkg_root = vcpkg::resolve_root(cli.vcpkg_root.as_deref())?;
    let config = ExportConfig::new(vcpkg_root, cli.out_dir);
    let shell = Shell::new(cli.no_color);

    let report = ops::export(&config, &shell)?;
    tracing::debug!(
        "packaged {} modules into {}",
        report.modules,
        report.aar_path.display()
    );

    Ok(())
}
