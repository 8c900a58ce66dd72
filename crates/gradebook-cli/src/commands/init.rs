//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradebook.toml
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    // Create example sheet
    std::fs::create_dir_all("sheets")?;
    let example_path = std::path::Path::new("sheets/example.toml");
    if example_path.exists() {
        println!("sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SHEET)?;
        println!("Created sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook evaluate 5 6.5 4 7 3 5 6");
    println!("  2. Edit sheets/example.toml with your students' grades");
    println!("  3. Run: gradebook sheet --path sheets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Default output format: "text" or "json"
format = "text"

# Show the per-slot breakdown on `gradebook evaluate`
breakdown = false
"#;

const EXAMPLE_SHEET: &str = r#"[sheet]
name = "Example Course"
description = "Scores in slot order: Evaluation 1-6, then the final exam"

[[students]]
name = "Ana"
scores = ["5", "6.5", "4", "7", "3", "5", "6"]

[[students]]
name = "Luis"
scores = ["3", "3.5", "2", "4", "3", "3", "2.5"]
"#;
