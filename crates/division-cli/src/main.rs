//! division — command-line access to the division code index
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ division stats
//!
//! - List all provinces, then the cities of one, as JSON
//!   $ division children
//!   $ division children 440000
//!
//! - Resolve a full name
//!   $ division name 440304 --sep /
//!
//! Logs go to stderr and are controlled with `RUST_LOG` (default `warn`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use division_core::{DivisionIndex, DivisionSearch};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let input_path = args
        .input
        .map(PathBuf::from)
        .unwrap_or_else(DivisionIndex::default_dataset_path);

    let open = || -> anyhow::Result<DivisionIndex> {
        let index = DivisionIndex::load_from_path(&input_path)
            .with_context(|| format!("failed to load {}", input_path.display()))?;
        let stats = index.stats();
        debug!(
            provinces = stats.provinces,
            cities = stats.cities,
            areas = stats.areas,
            "division index ready"
        );
        Ok(index)
    };

    match args.command {
        Commands::Stats => {
            let stats = open()?.stats();
            println!("Division statistics:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Cities: {}", stats.cities);
            println!("  Areas: {}", stats.areas);
        }

        Commands::Children { code } => {
            let index = open()?;
            let code = code.unwrap_or_default();
            match index.children(&code) {
                Some(bytes) => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(bytes)?;
                    writeln!(stdout)?;
                }
                None => eprintln!("No children for: {code:?}"),
            }
        }

        Commands::Name { code, sep } => {
            let name = open()?.name(&code, &sep);
            if name.is_empty() {
                eprintln!("No division found for: {code:?}");
            } else {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
