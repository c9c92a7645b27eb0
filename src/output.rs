use crate::header::CheckReport;

/// Tool name prefixed to every warning line, mirroring compiler diagnostics.
pub const TOOL_NAME: &str = "license-header-lint";

/// Line number reported for header violations. The header belongs at the top
/// of the file, so the warning always points there.
pub const VIOLATION_LINE: usize = 1;

/// One warning in the `<tool>: <file>:<line>: warning: <message>` shape that
/// CI log scrapers and editors understand.
pub fn format_warning(filename: &str, line: usize, message: &str) -> String {
    format!("{}: {}:{}: warning: {}", TOOL_NAME, filename, line, message)
}

pub fn format_text_output(report: &CheckReport, verbose: bool, quiet: bool) -> String {
    let mut output = String::new();

    for file in &report.files {
        if !file.valid {
            output.push_str(&format_warning(
                &file.path,
                VIOLATION_LINE,
                "no valid license found",
            ));
            output.push('\n');
        } else if verbose {
            output.push_str(&format!("{}: ok\n", file.path));
        }
    }

    if !quiet {
        output.push_str(&format!(
            "Checked {} files: {} valid, {} without a valid license\n",
            report.summary.total_files, report.summary.valid, report.summary.invalid
        ));
    }

    output
}
