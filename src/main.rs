use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::debug;
use std::fs;

use license_header_lint::config::load_config;
use license_header_lint::header::{
    check_files, create_report, HeaderTemplate, DEFAULT_TEMPLATE,
};
use license_header_lint::output::format_text_output;
use license_header_lint::walker::{collect_files, compile_exclude_patterns, read_contents};

mod cli;
use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.paths.is_empty() {
        // No input: explain usage and succeed. The tool reports, it does not
        // fail the build.
        Cli::command().print_help()?;
        return Ok(());
    }

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;

    // CLI arguments extend/override config values
    let mut exclude = config.exclude.clone();
    exclude.extend(cli.exclude.iter().cloned());
    let excludes = compile_exclude_patterns(&exclude);

    let files = collect_files(&cli.paths, &excludes)?;
    debug!("Checking {} files", files.len());

    let contents: Vec<(String, String)> = files
        .iter()
        .map(|path| Ok((path.display().to_string(), read_contents(path)?)))
        .collect::<Result<_>>()?;

    let holder = cli.copyright_holder.or(config.copyright_holder);
    let custom_template = holder.as_deref().map(HeaderTemplate::new);
    let template = custom_template.as_ref().unwrap_or(&*DEFAULT_TEMPLATE);

    let checks = check_files(template, &contents);
    let mut report = create_report(checks);

    let strict = cli.strict || config.strict.unwrap_or(false);
    let format = cli.format.unwrap_or(match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    let output_content = match format {
        OutputFormat::Json => {
            if !cli.verbose {
                report.files.retain(|f| !f.valid);
            }
            serde_json::to_string_pretty(&report)?
        }
        OutputFormat::Text => format_text_output(&report, cli.verbose, cli.quiet),
    };

    match cli.output {
        Some(path) => fs::write(path, output_content)?,
        None => print!("{}", output_content),
    }

    if strict && report.summary.invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}
