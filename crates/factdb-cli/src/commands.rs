//! Command implementations shared by both binaries

use crate::cli::{CheckArgs, ConvertArgs, ReportFormat, TablesArgs, TablesFormat};
use crate::config::load_schema;
use crate::io::{open_input, write_output};
use anyhow::Context;
use factdb_core::{ConversionStats, Converter, render_database};
use std::fs;
use tracing::info;

/// Render a run report
pub fn format_report(stats: &ConversionStats, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Text => Ok(stats.to_string()),
        ReportFormat::Json => stats.to_json().context("failed to serialize run report"),
    }
}

/// Convert the input fact file into the output database.
///
/// The output is only touched once the whole input has converted.
pub fn run_convert(args: &ConvertArgs) -> anyhow::Result<ConversionStats> {
    let schema = load_schema(args.tables.tables.as_deref())?;
    let converter = Converter::new(schema).context("invalid table configuration")?;

    let reader = open_input(&args.input)?;
    let (db, stats) = converter
        .accumulate(reader)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    write_output(&args.output, &render_database(&db))
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        facts = stats.facts_parsed,
        entities = stats.entities,
        "Conversion complete"
    );

    if let Some(format) = args.report {
        eprintln!("{}", format_report(&stats, format)?);
    }
    Ok(stats)
}

/// Parse and classify without writing a database
pub fn run_check(args: &CheckArgs) -> anyhow::Result<ConversionStats> {
    let schema = load_schema(args.tables.tables.as_deref())?;
    let converter = Converter::new(schema).context("invalid table configuration")?;

    let reader = open_input(&args.input)?;
    let (_, stats) = converter
        .accumulate(reader)
        .with_context(|| format!("check failed for {}", args.input.display()))?;

    println!("{}", format_report(&stats, args.report)?);
    Ok(stats)
}

/// Print or write the active tables
pub fn run_tables(args: &TablesArgs) -> anyhow::Result<()> {
    let schema = load_schema(args.tables.tables.as_deref())?;

    let content = match args.format {
        TablesFormat::Yaml => schema.to_yaml()?,
        TablesFormat::Json => schema.to_json()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "Tables written");
        }
        None => print!("{content}"),
    }
    Ok(())
}
