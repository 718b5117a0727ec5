use crate::convert::PositionResult;
use crate::encoding::Encoding;
use crate::stats::summarise;

use anyhow::{ensure, Context, Result};
use serde_json::json;
use std::io::Write;

// encode the template file at compile time as a string literal
const TEMPLATE: &str = include_str!("summary_template.txt");

/// Renders a plain-text report of a conversion: the input, every position, and summary
/// statistics.
///
/// # Arguments
///
/// * `writer` - The sink for the rendered report.
/// * `quality` - The quality string that produced `results`.
/// * `encoding` - The encoding used for the conversion.
/// * `results` - The non-empty output of `convert`.
///
/// # Returns
///
/// * `Result<()>` - Returns an `Ok(())` if successful, or an `anyhow::Error` if rendering fails.
pub fn write_summary(
    writer: &mut impl Write,
    quality: &str,
    encoding: Encoding,
    results: &[PositionResult],
) -> Result<()> {
    ensure!(!results.is_empty(), "Cannot summarise an empty conversion");

    let stats = summarise(results, encoding);

    let rows: Vec<_> = results
        .iter()
        .map(|r| {
            json!({
                "position": r.position,
                "character": r.character.to_string(),
                "phred": r.phred_score,
                "error_prob": format!("{:.2e}", r.error_probability),
            })
        })
        .collect();

    let data = json!({
        "quality": quality,
        "encoding": encoding.name(),
        "total_bases": stats.total_bases,
        "generated": chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "rows": rows,
        "mean_phred": format!("{:.2}", stats.mean_phred),
        "min_phred": stats.min_phred,
        "max_phred": stats.max_phred,
        "mean_error_prob": format!("{:.2e}", stats.mean_error_prob),
        "percent_above_q20": format!("{:.1}", stats.percent_above_q20),
        "percent_above_q30": format!("{:.1}", stats.percent_above_q30),
    });

    let mut reg = handlebars::Handlebars::new();
    // plain text, so quality characters such as `&` and `'` are written verbatim
    reg.register_escape_fn(handlebars::no_escape);
    reg.render_template_to_write(TEMPLATE, &data, writer)
        .context("Could not render summary")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    #[test]
    fn renders_positions_and_statistics() {
        let quality = "!\"#$%&'(";
        let results = convert(quality, Encoding::Phred33).unwrap();

        let mut buf = Vec::new();
        write_summary(&mut buf, quality, Encoding::Phred33, &results).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("Input Quality String: !\"#$%&'("));
        assert!(out.contains("Encoding Standard: Phred+33 (Sanger)"));
        assert!(out.contains("Total Bases: 8"));
        assert!(out.contains("Position 6: '&' -> Phred 5"));
        assert!(out.contains("Average Phred Score: 3.50"));
        assert!(out.contains("Minimum Phred Score: 0"));
        assert!(out.contains("Maximum Phred Score: 7"));
    }

    #[test]
    fn empty_results_rejected() {
        let mut buf = Vec::new();
        assert!(write_summary(&mut buf, "", Encoding::Phred33, &[]).is_err());
    }
}
