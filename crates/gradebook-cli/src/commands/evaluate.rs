//! The `gradebook evaluate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use gradebook_core::engine::evaluate_detailed;
use gradebook_core::model::{GradeReport, SLOT_COUNT};

use crate::config::{load_config_from, OutputFormat};

/// Exit code for entries that fail validation.
pub const EXIT_INVALID_INPUT: i32 = 2;

pub fn execute(
    scores: Vec<String>,
    breakdown: bool,
    format: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let format = config.resolve_format(format.as_deref())?;
    let breakdown = breakdown || config.breakdown;

    let count = scores.len();
    let raw: [String; SLOT_COUNT] = scores
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected {SLOT_COUNT} scores, got {count}"))?;

    match evaluate_detailed(&raw) {
        Ok(report) => {
            tracing::debug!(final_grade = report.result.final_grade, "evaluation succeeded");
            match format {
                OutputFormat::Json => {
                    if breakdown {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!("{}", serde_json::to_string_pretty(&report.result)?);
                    }
                }
                OutputFormat::Text => {
                    if breakdown {
                        println!("{}", breakdown_table(&report));
                    }
                    println!("{}", report.result);
                }
            }
            Ok(())
        }
        Err(failure) => {
            match format {
                OutputFormat::Json => {
                    let body = json!({ "error": failure, "message": failure.message() });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Text => {
                    eprintln!("Invalid input: {failure}");
                }
            }
            std::process::exit(EXIT_INVALID_INPUT);
        }
    }
}

fn breakdown_table(report: &GradeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Slot", "Score", "Contribution"]);

    for c in &report.contributions {
        table.add_row(vec![
            Cell::new(c.slot),
            Cell::new(c.score),
            Cell::new(format!("{:.3}", c.contribution)),
        ]);
    }

    table
}
