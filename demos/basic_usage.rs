//! Basic usage example for isocodes-rs
//!
//! This example demonstrates how to:
//! - Access the shared dataset instances
//! - Look records up by exact field value
//! - Search with case-insensitive criteria
//! - Walk sorted views and `(code, name)` pairs

use isocodes_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== isocodes-rs Basic Usage Example ===\n");

    let countries = countries()?;
    println!("✓ {} countries loaded\n", countries.len());

    // Exact lookups go through a per-field index
    println!("--- Exact lookups ---");
    if let Some(de) = countries.find("alpha_2", "DE") {
        println!(
            "DE -> {} {} ({})",
            de.flag().unwrap_or(""),
            de.name().unwrap_or(""),
            de.official_name().unwrap_or("-")
        );
    }
    if let Some(us) = countries.find("numeric", "840") {
        println!("840 -> {}", us.name().unwrap_or(""));
    }
    println!();

    // Every criterion must match as a case-insensitive substring
    println!("--- Countries containing 'island' ---");
    for country in countries.search(&[("name", "island")]) {
        println!("- {} ({})", country.name().unwrap_or(""), country.alpha_2().unwrap_or(""));
    }
    println!();

    println!("--- Ranked search for 'turkiye' ---");
    for hit in countries.smart_search("turkiye").into_iter().take(3) {
        println!("{:>3}  {}", hit.score, hit.record.name().unwrap_or(""));
    }
    println!();

    println!("--- First five currencies by code ---");
    for (code, currency) in currencies()?.by_alpha_3().into_iter().take(5) {
        println!("{code}  {}", currency.name().unwrap_or(""));
    }
    println!();

    println!("--- First five scripts ---");
    for (code, name) in scripts()?.names().take(5) {
        println!("{code}  {name}");
    }
    println!();

    println!("--- Swiss cantons ---");
    let cantons = subdivisions()?.for_country("CH");
    println!("{} subdivisions, e.g. {}", cantons.len(), cantons[0].name().unwrap_or(""));
    println!();

    println!("--- Dataset stats ---");
    for key in DatasetKey::ALL {
        let stats = load(key.as_str())?.stats();
        println!("{:<8} {:>5} records, {} fields", key, stats.records, stats.fields.len());
    }

    Ok(())
}
