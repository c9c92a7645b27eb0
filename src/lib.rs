pub mod config;
pub mod header;
pub mod output;
pub mod walker;

// Re-export main types for easy access
pub use header::{CheckReport, CheckSummary, FileCheck, HeaderTemplate};
