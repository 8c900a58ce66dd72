//! The `gradebook slots` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::model::{MAX_GRADE, MIN_GRADE, PASSING_GRADE, SLOTS};

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Slot", "Weight"]);

    for slot in &SLOTS {
        table.add_row(vec![
            Cell::new(slot.index + 1),
            Cell::new(slot.label),
            Cell::new(format!("{}%", slot.weight_percent())),
        ]);
    }

    println!("{table}");
    println!(
        "Grades range from {MIN_GRADE:.1} to {MAX_GRADE:.1}; a final grade of {PASSING_GRADE:.1} or more passes."
    );

    Ok(())
}
