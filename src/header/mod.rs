use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

pub mod validator;

// Re-export from validator
pub use validator::{HeaderTemplate, DEFAULT_COPYRIGHT_HOLDER, DEFAULT_TEMPLATE};

/// Validation outcome for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileCheck {
    pub path: String,
    pub valid: bool,
}

#[derive(Debug, Serialize, Default)]
pub struct CheckSummary {
    pub total_files: usize,
    pub valid: usize,
    pub invalid: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub files: Vec<FileCheck>,
    pub summary: CheckSummary,
    pub generated_at: DateTime<Utc>,
}

/// Validate a batch of `(path, contents)` pairs against one template.
///
/// Files are independent, so validation runs in parallel; the result vector
/// keeps the input order.
pub fn check_files(template: &HeaderTemplate, files: &[(String, String)]) -> Vec<FileCheck> {
    files
        .par_iter()
        .map(|(path, contents)| FileCheck {
            path: path.clone(),
            valid: template.is_valid_header(contents),
        })
        .collect()
}

pub fn create_report(files: Vec<FileCheck>) -> CheckReport {
    let total_files = files.len();
    let valid = files.iter().filter(|f| f.valid).count();

    CheckReport {
        files,
        summary: CheckSummary {
            total_files,
            valid,
            invalid: total_files - valid,
        },
        generated_at: Utc::now(),
    }
}
