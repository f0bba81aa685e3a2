//! Former-name example for isocodes-rs
//!
//! Resolves historical country names (renames and ISO 3166-3 withdrawals)
//! to current ISO 3166-1 records.

use isocodes_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== isocodes-rs Former Names Example ===\n");

    let countries = countries()?;

    for name in ["Swaziland", "Burma", "Zaire", "East Timor", "Atlantis"] {
        match countries.get_by_former_name(name) {
            Some(current) => println!(
                "{name:<12} -> {} ({})",
                current.name().unwrap_or(""),
                current.alpha_2().unwrap_or("")
            ),
            None => println!("{name:<12} -> no current country"),
        }
    }
    println!();

    println!("--- Details for 'Upper Volta' ---");
    if let Some(info) = countries.get_former_names_info("Upper Volta") {
        println!("former name:  {}", info.former_name);
        println!("former codes: {}/{}", info.alpha_2, info.alpha_3);
        println!("current name: {}", info.current_name.as_deref().unwrap_or("-"));
        println!("changed:      {}", info.change_date);
    }
    println!();

    println!("--- All known former names ---");
    for name in countries.former_names() {
        println!("- {name}");
    }

    Ok(())
}
