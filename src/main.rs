//! Command-line SDF to URDF converter.
//!
//! Reads an SDF document from a file argument or standard input, writes the
//! converted URDF to standard output, and reports diagnostics on standard
//! error.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sdf2urdf::{convert_sdf_file, convert_sdf_str};

/// Convert an SDF robot model to URDF.
#[derive(Parser)]
#[command(name = "sdf2urdf")]
#[command(about = "Convert SDF robot model descriptions to URDF", long_about = None)]
#[command(version)]
struct Cli {
    /// SDF input file (standard input when omitted).
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let converted = match &cli.input {
        Some(path) => convert_sdf_file(path)
            .with_context(|| format!("failed to convert '{}'", path.display()))?,
        None => {
            let xml = io::read_to_string(io::stdin()).context("failed to read standard input")?;
            convert_sdf_str(&xml).context("failed to convert standard input")?
        }
    };

    println!("{}", converted.to_xml_string()?);

    Ok(())
}
