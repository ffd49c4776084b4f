//! Basic usage example for division-rs
//!
//! This example demonstrates how to:
//! - Load the bundled division dataset
//! - List provinces and walk down to cities and areas
//! - Resolve full names with and without a separator
//! - See how unknown codes degrade

use division_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Division-RS Basic Usage Example ===\n");

    println!("Loading division dataset...");
    let index = DivisionIndex::load_from_path(DivisionIndex::default_dataset_path())?;
    let stats = index.stats();
    println!(
        "✓ Loaded {} provinces, {} cities, {} areas\n",
        stats.provinces, stats.cities, stats.areas
    );

    // Example 1: Top-level list
    println!("--- Example 1: All provinces ---");
    let provinces: Vec<Record> =
        serde_json::from_slice(index.children("").unwrap_or(&b"[]"[..]))?;
    for p in &provinces {
        println!("{} {}", p.code(), p.name());
    }
    println!();

    // Example 2: Walk down one branch
    println!("--- Example 2: Guangdong → cities → areas ---");
    if let Some(bytes) = index.children("440000") {
        let cities: Vec<Record> = serde_json::from_slice(bytes)?;
        for city in &cities {
            println!("{} {}", city.code(), city.name());
            if let Some(bytes) = index.children(city.code()) {
                let areas: Vec<Record> = serde_json::from_slice(bytes)?;
                for area in &areas {
                    println!("    {} {}", area.code(), area.name());
                }
            }
        }
    }
    println!();

    // Example 3: Full names
    println!("--- Example 3: Full names ---");
    for code in ["440304", "110105", "130000"] {
        println!("{code}: {} | {}", index.full_name(code), index.name(code, " / "));
    }
    println!();

    // Example 4: Unknown and malformed codes
    println!("--- Example 4: Unknown codes ---");
    for code in ["999999", "000000", "12", "440399"] {
        println!(
            "{code:?}: name={:?} children={}",
            index.full_name(code),
            index.children(code).map_or("none".to_string(), |b| format!("{} bytes", b.len()))
        );
    }

    Ok(())
}
