// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use name_census_core::{Census, ReportEntry};
use name_census_engine::options::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

/// Serialised shape of a report (json / yaml).
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    scanned: usize,
    kept: usize,
    total_groups: usize,
    groups: &'a [ReportEntry],
}

/// Write the report to stdout.
///
/// # Errors
/// Returns an error if stdout cannot be written. Lines already written stay
/// written.
pub fn print_report(census: &Census, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, census, config)?;
    out.flush()?;
    Ok(())
}

/// Write the report in the configured format.
///
/// # Errors
/// Returns an error if writing or serialising fails.
pub fn write_report<W: Write>(out: &mut W, census: &Census, config: &Config) -> Result<()> {
    let entries = visible(&census.entries, config.top_n);

    match config.format {
        OutputFormat::Plain => write_plain(out, entries)?,
        OutputFormat::Table => write_table(out, census, entries)?,
        OutputFormat::Csv => write_csv(out, entries)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view(census, entries))?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => write_jsonl(out, census, entries)?,
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &view(census, entries))?,
    }
    Ok(())
}

fn visible(entries: &[ReportEntry], top_n: Option<usize>) -> &[ReportEntry] {
    match top_n {
        Some(n) => &entries[..n.min(entries.len())],
        None => entries,
    }
}

fn view<'a>(census: &Census, groups: &'a [ReportEntry]) -> ReportView<'a> {
    ReportView {
        scanned: census.scanned,
        kept: census.kept,
        total_groups: census.entries.len(),
        groups,
    }
}

fn write_plain<W: Write>(out: &mut W, entries: &[ReportEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.representative)?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, census: &Census, entries: &[ReportEntry]) -> io::Result<()> {
    let suffix_width = entries
        .iter()
        .map(|e| e.suffix.chars().count())
        .max()
        .unwrap_or(0)
        .max("SUFFIX".len());

    writeln!(out, "name_census v{}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:>7}  {:<suffix_width$}  REPRESENTATIVE",
        "RANK", "SIZE", "SUFFIX"
    )?;
    writeln!(out, "{}", "-".repeat(5 + 2 + 7 + 2 + suffix_width + 2 + 14))?;

    for (rank, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:>5}  {:>7}  {:<suffix_width$}  {}",
            rank + 1,
            entry.size,
            entry.suffix,
            entry.representative
        )?;
    }

    writeln!(out, "---")?;
    writeln!(
        out,
        "{} of {} names kept, {} groups",
        census.kept,
        census.scanned,
        census.entries.len()
    )
}

fn write_csv<W: Write>(out: &mut W, entries: &[ReportEntry]) -> io::Result<()> {
    writeln!(out, "suffix,size,representative")?;
    for entry in entries {
        writeln!(
            out,
            "{},{},{}",
            csv_field(&entry.suffix),
            entry.size,
            csv_field(&entry.representative)
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_jsonl<W: Write>(out: &mut W, census: &Census, entries: &[ReportEntry]) -> Result<()> {
    for (rank, entry) in entries.iter().enumerate() {
        let line = serde_json::json!({
            "type": "group",
            "rank": rank + 1,
            "suffix": entry.suffix,
            "size": entry.size,
            "representative": entry.representative,
        });
        writeln!(out, "{line}")?;
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "scanned": census.scanned,
        "kept": census.kept,
        "groups": census.entries.len(),
    });
    writeln!(out, "{total}")?;
    Ok(())
}
