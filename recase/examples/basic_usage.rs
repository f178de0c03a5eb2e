//! Basic usage example

use recase::{convert, Case, Casing, Config, Converter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "parseXMLHttpRequest v2";

    // Method 1: one-off conversion
    println!("=== Every case ===");
    for case in Case::ALL {
        println!("  {:<10} {}", case, convert(input, case));
    }

    // Method 2: extension trait
    println!("\n=== Extension trait ===");
    println!("  {}", "user_id".to_case(Case::Pascal));
    println!("  is snake: {}", "user_id".is_case(Case::Snake));

    // Method 3: configured converter
    println!("\n=== Configured converter ===");
    let config = Config::builder()
        .case_name("path")?
        .separator("::")
        .build()?;
    let converter = Converter::with_config(config)?;
    for module in converter.convert_all(["recaseCore", "BoundaryKind"]) {
        println!("  {module}");
    }

    Ok(())
}
