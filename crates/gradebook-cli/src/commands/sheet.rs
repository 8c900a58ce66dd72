//! The `gradebook sheet` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use gradebook_core::model::{GradeSheet, SLOT_COUNT};
use gradebook_core::parser;
use gradebook_core::statistics::{
    evaluate_sheet, summarize, SheetOutcome, SheetSummary, StudentOutcome,
};

use crate::config::{load_config_from, OutputFormat};

pub fn execute(path: PathBuf, format: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;
    let format = config.resolve_format(format.as_deref())?;

    let sheets = if path.is_dir() {
        parser::load_sheet_directory(&path)?
    } else {
        vec![parser::parse_sheet(&path)?]
    };

    match format {
        OutputFormat::Json => {
            let body: Vec<_> = sheets
                .iter()
                .map(|sheet| {
                    let outcomes = evaluate_sheet(sheet);
                    let summary = summarize(&outcomes);
                    json!({
                        "sheet": sheet.name,
                        "outcomes": outcomes,
                        "summary": summary,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            for sheet in &sheets {
                print_sheet(sheet);
            }
        }
    }

    Ok(())
}

fn print_sheet(sheet: &GradeSheet) {
    println!("Sheet: {} ({} students)", sheet.name, sheet.students.len());

    for w in parser::validate_sheet(sheet) {
        let prefix = w
            .student
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    let outcomes = evaluate_sheet(sheet);
    println!("{}", outcome_table(&outcomes));
    println!("{}\n", summary_line(&summarize(&outcomes)));
}

fn outcome_table(outcomes: &[StudentOutcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Student", "Final Grade", "Verdict", "Note"]);

    for o in outcomes {
        let row = match &o.outcome {
            SheetOutcome::Evaluated(r) => vec![
                Cell::new(&o.student),
                Cell::new(format!("{:.2}", r.final_grade)),
                Cell::new(r.verdict),
                Cell::new(""),
            ],
            SheetOutcome::Invalid(failure) => vec![
                Cell::new(&o.student),
                Cell::new("-"),
                Cell::new("INVALID"),
                Cell::new(failure),
            ],
            SheetOutcome::Malformed { found } => vec![
                Cell::new(&o.student),
                Cell::new("-"),
                Cell::new("INVALID"),
                Cell::new(format!("expected {SLOT_COUNT} scores, found {found}")),
            ],
        };
        table.add_row(row);
    }

    table
}

fn summary_line(summary: &SheetSummary) -> String {
    let mut line = format!(
        "Passed: {}  Failed: {}  Invalid: {}",
        summary.passed, summary.failed, summary.invalid
    );
    if let (Some(mean), Some(high), Some(low)) =
        (summary.mean_grade, summary.highest_grade, summary.lowest_grade)
    {
        line.push_str(&format!("  Mean: {mean:.2}  High: {high:.2}  Low: {low:.2}"));
    }
    line
}
