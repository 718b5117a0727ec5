use crate::encoding::Encoding;
use crate::stats::statistics;

use serde::Serialize;

/// Diagnostics describing whether a quality string fits an encoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

/// Describes every problem with `quality` under `encoding` without failing.
///
/// Unlike [`crate::convert`], every out-of-range character is reported, not only the first.
/// When the string is valid, summary statistics are appended as warnings and info lines.
pub fn validate(quality: &str, encoding: Encoding) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        ..Default::default()
    };

    if quality.is_empty() {
        report.is_valid = false;
        report.errors.push("Quality string is empty".to_string());
        return report;
    }

    let profile = encoding.profile();
    let (min_ascii, max_ascii) = profile.ascii_range;

    for (i, c) in quality.chars().enumerate() {
        let ascii_value = c as u32;
        if !profile.accepts(ascii_value) {
            report.is_valid = false;
            report.errors.push(format!(
                "Character '{c}' at position {} (ASCII {ascii_value}) is outside valid range \
                {min_ascii}-{max_ascii} for {}",
                i + 1,
                profile.name
            ));
        }
    }

    if quality.chars().any(|c| (c as u32) < 32) {
        report
            .warnings
            .push("Quality string contains control characters".to_string());
    }

    if !report.is_valid {
        debug!(
            "{} invalid character(s) under {}",
            report.errors.len(),
            profile.name
        );
        return report;
    }

    match statistics(quality, encoding) {
        Ok(stats) => {
            if stats.mean_phred < 20.0 {
                report.warnings.push(format!(
                    "Average quality score ({:.1}) is below 20",
                    stats.mean_phred
                ));
            }

            if stats.percent_above_q20 < 50.0 {
                report.warnings.push(format!(
                    "Only {:.1}% of bases have quality ≥ 20",
                    stats.percent_above_q20
                ));
            }

            report.info.push(format!("Total bases: {}", stats.total_bases));
            report
                .info
                .push(format!("Average Phred score: {:.2}", stats.mean_phred));
            report
                .info
                .push(format!("Bases with Q≥20: {:.1}%", stats.percent_above_q20));
            report
                .info
                .push(format!("Bases with Q≥30: {:.1}%", stats.percent_above_q30));
        }
        Err(e) => {
            // the range scan above passed, so conversion should not be able to fail here
            warn!("Statistics failed for a string that passed validation: {e}");
            report.is_valid = false;
            report
                .errors
                .push(format!("Error calculating statistics: {e}"));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string() {
        let report = validate("", Encoding::Phred33);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Quality string is empty"]);
        assert!(report.warnings.is_empty());
        assert!(report.info.is_empty());
    }

    #[test]
    fn below_phred64_minimum() {
        let report = validate("!", Encoding::Phred64);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Character '!' at position 1 (ASCII 33) is outside valid range 64-126 for Phred+64 (Illumina 1.3+)"]
        );
        assert!(report.info.is_empty());
    }

    #[test]
    fn collects_every_bad_character() {
        let report = validate("h5h+", Encoding::Phred64);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("position 2"));
        assert!(report.errors[1].contains("position 4"));
    }

    #[test]
    fn control_characters_warned() {
        let report = validate("II\tI", Encoding::Phred33);
        assert!(!report.is_valid);
        assert!(report
            .warnings
            .contains(&"Quality string contains control characters".to_string()));
    }

    #[test]
    fn high_quality_has_info_only() {
        let report = validate("IIIIIIIIIIIIIIII", Encoding::Phred33);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(
            report.info,
            vec![
                "Total bases: 16",
                "Average Phred score: 40.00",
                "Bases with Q≥20: 100.0%",
                "Bases with Q≥30: 100.0%",
            ]
        );
    }

    #[test]
    fn low_quality_warnings() {
        let report = validate("##########", Encoding::Phred33);
        assert!(report.is_valid);
        assert_eq!(
            report.warnings,
            vec![
                "Average quality score (2.0) is below 20",
                "Only 0.0% of bases have quality ≥ 20",
            ]
        );
    }
}
