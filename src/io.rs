use crate::category::QualityCategory;
use crate::convert::{ExportRow, PositionResult};
use crate::encoding::Encoding;
use crate::validate::ValidationReport;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use indoc::writedoc;
use std::io::Write;

/// Output layouts for a converted quality string.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// tab-separated table with a header row
    Tsv,

    /// comma-separated table with a header row
    Csv,

    /// a JSON array of records
    Json,

    /// a plain-text report with per-position lines and summary statistics
    Summary,

    /// a worked explanation of the calculation at every position
    Steps,
}

/// Writes conversion results to `writer` in the requested format.
///
/// # Arguments
///
/// * `writer` - Any `std::io::Write` sink; a `std::io::Cursor` works for in-memory output.
/// * `quality` - The original quality string, echoed by the summary format.
/// * `encoding` - The encoding the results were computed under.
/// * `results` - The output of `convert`.
/// * `format` - The layout to produce.
pub fn write_results(
    writer: &mut impl Write,
    quality: &str,
    encoding: Encoding,
    results: &[PositionResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Tsv => write_delimited(writer, results, b'\t'),
        OutputFormat::Csv => write_delimited(writer, results, b','),
        OutputFormat::Json => write_json(writer, results),
        OutputFormat::Summary => crate::summary::write_summary(writer, quality, encoding, results),
        OutputFormat::Steps => write_steps(writer, encoding, results),
    }
}

/// Writes one row per position with the export column names as the header.
pub fn write_delimited(
    writer: &mut impl Write,
    results: &[PositionResult],
    delimiter: u8,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    for r in results {
        wtr.serialize(ExportRow::from(r))
            .with_context(|| format!("Could not write row for position {}", r.position))?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_json(writer: &mut impl Write, results: &[PositionResult]) -> Result<()> {
    let rows: Vec<ExportRow> = results.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &rows).context("Could not serialize results")?;
    writeln!(writer)?;
    Ok(())
}

/// Explains, for each position, how the character becomes an error probability.
pub fn write_steps(
    writer: &mut impl Write,
    encoding: Encoding,
    results: &[PositionResult],
) -> Result<()> {
    for r in results {
        let category = QualityCategory::of(r.phred_score);
        writedoc!(
            writer,
            "
            Position {position} - Character '{character}'
              Step 1: ASCII Character = {character}
              Step 2: ASCII Value = {ascii}
              Step 3: Phred Score = ASCII Value - {offset} = {ascii} - {offset} = {phred}
              Step 4: Error Probability = 10^(-Q/10) = 10^(-{phred}/10) = {prob:.2e}
              Step 5: Accuracy = 1 - Error Probability = 1 - {prob:.2e} = {acc:.6} ({pct:.4}%)
              Category: {label} (Q{range}, error rate {rate}, accuracy {expected}): {recommendation}

            ",
            position = r.position,
            offset = encoding.offset(),
            character = r.character,
            ascii = r.ascii_value,
            phred = r.phred_score,
            prob = r.error_probability,
            acc = r.accuracy,
            pct = r.accuracy_percent(),
            label = category.label(),
            range = category.score_range(),
            rate = category.error_rate(),
            expected = category.accuracy(),
            recommendation = category.recommendation(),
        )?;
    }

    Ok(())
}

/// Writes a validation report as labelled lines, errors first.
pub fn write_report(
    writer: &mut impl Write,
    encoding: Encoding,
    report: &ValidationReport,
) -> std::io::Result<()> {
    let verdict = if report.is_valid { "valid" } else { "invalid" };
    writeln!(writer, "{} ({})", verdict, encoding.name())?;

    for e in &report.errors {
        writeln!(writer, "error: {e}")?;
    }
    for w in &report.warnings {
        writeln!(writer, "warning: {w}")?;
    }
    for i in &report.info {
        writeln!(writer, "info: {i}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use std::io::Cursor;

    fn render(quality: &str, format: OutputFormat) -> String {
        let results = convert(quality, Encoding::Phred33).unwrap();
        let mut buf = Cursor::new(Vec::new());
        write_results(&mut buf, quality, Encoding::Phred33, &results, format).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn csv_header_and_rows() {
        let out = render("I+", OutputFormat::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Position,ASCII Character,ASCII Value,Phred Score,Error Probability,Accuracy,Accuracy (%)"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("2,+,43,10,"));
    }

    #[test]
    fn tsv_uses_tabs() {
        let out = render("I", OutputFormat::Tsv);
        assert!(out.starts_with("Position\tASCII Character\t"));
    }

    #[test]
    fn json_records() {
        let out = render("II?+", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2]["ASCII Character"], "?");
        assert_eq!(rows[2]["Phred Score"], 30);
    }

    #[test]
    fn steps_walkthrough() {
        let out = render("+", OutputFormat::Steps);
        assert!(out.contains("Position 1 - Character '+'"));
        assert!(out.contains("Phred Score = ASCII Value - 33 = 43 - 33 = 10"));
        assert!(out.contains("Category: Low Quality (Q10-20, error rate 1-10%, accuracy 90-99%)"));
    }

    #[test]
    fn report_lines() {
        let report = crate::validate("!", Encoding::Phred64);
        let mut buf = Vec::new();
        write_report(&mut buf, Encoding::Phred64, &report).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("invalid (Phred+64 (Illumina 1.3+))"));
        assert!(out.contains("error: Character '!' at position 1"));
    }
}
