//! TOML grade sheet parser.
//!
//! Loads grade sheets from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{GradeSheet, StudentEntry, SLOT_COUNT};

/// Intermediate TOML structure for parsing sheet files.
#[derive(Debug, Deserialize)]
struct TomlSheetFile {
    sheet: TomlSheetHeader,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlSheetHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
    #[serde(default)]
    scores: Vec<TomlScore>,
}

/// Entries may be written as TOML strings or bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlScore {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl TomlScore {
    fn into_raw(self) -> String {
        match self {
            TomlScore::Text(s) => s,
            TomlScore::Integer(n) => n.to_string(),
            TomlScore::Float(x) => x.to_string(),
        }
    }
}

/// Parse a single TOML file into a `GradeSheet`.
pub fn parse_sheet(path: &Path) -> Result<GradeSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read grade sheet: {}", path.display()))?;

    parse_sheet_str(&content, path)
}

/// Parse a TOML string into a `GradeSheet` (useful for testing).
pub fn parse_sheet_str(content: &str, source_path: &Path) -> Result<GradeSheet> {
    let parsed: TomlSheetFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| StudentEntry {
            name: s.name,
            scores: s.scores.into_iter().map(TomlScore::into_raw).collect(),
        })
        .collect();

    Ok(GradeSheet {
        name: parsed.sheet.name,
        description: parsed.sheet.description,
        students,
    })
}

/// Recursively load all `.toml` sheets from a directory.
pub fn load_sheet_directory(dir: &Path) -> Result<Vec<GradeSheet>> {
    let mut sheets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sheets.extend(load_sheet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sheets)
}

/// A warning from sheet validation.
#[derive(Debug, Clone)]
pub struct SheetWarning {
    /// The student name (if applicable).
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a sheet for structural problems.
///
/// Score contents are not checked here; that is the engine's job.
pub fn validate_sheet(sheet: &GradeSheet) -> Vec<SheetWarning> {
    let mut warnings = Vec::new();

    if sheet.students.is_empty() {
        warnings.push(SheetWarning {
            student: None,
            message: "sheet lists no students".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for student in &sheet.students {
        if student.name.trim().is_empty() {
            warnings.push(SheetWarning {
                student: None,
                message: "student with an empty name".into(),
            });
        } else if !seen.insert(student.name.as_str()) {
            warnings.push(SheetWarning {
                student: Some(student.name.clone()),
                message: format!("duplicate student: {}", student.name),
            });
        }
    }

    for student in &sheet.students {
        if student.scores.len() != SLOT_COUNT {
            warnings.push(SheetWarning {
                student: Some(student.name.clone()),
                message: format!(
                    "expected {SLOT_COUNT} scores, found {}",
                    student.scores.len()
                ),
            });
        }
    }

    warnings
}
