use crate::convert::{convert, PositionResult};
use crate::encoding::Encoding;
use crate::error::ConversionError;
use crate::stats::{statistics, QualityStatistics};
use crate::validate::validate;

use indexmap::IndexMap;
use serde::Serialize;

/// How one encoding interprets a quality string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodingComparison {
    pub encoding: &'static str,
    pub valid: bool,
    #[serde(flatten)]
    pub outcome: ComparisonOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComparisonOutcome {
    Valid {
        results: Vec<PositionResult>,
        statistics: QualityStatistics,
    },
    Invalid {
        errors: Vec<String>,
    },
}

/// Interprets the same raw string under every supported encoding.
///
/// The returned map always holds one entry per encoding, keyed by offset (33 then 64). A
/// failure in one branch never prevents the other from being computed.
pub fn compare_encodings(quality: &str) -> IndexMap<u32, EncodingComparison> {
    Encoding::ALL
        .into_iter()
        .map(|encoding| {
            let outcome = match interpret(quality, encoding) {
                Ok(outcome) => outcome,
                Err(e) => ComparisonOutcome::Invalid {
                    errors: vec![e.to_string()],
                },
            };

            let comparison = EncodingComparison {
                encoding: encoding.name(),
                valid: matches!(outcome, ComparisonOutcome::Valid { .. }),
                outcome,
            };

            (encoding.offset(), comparison)
        })
        .collect()
}

fn interpret(quality: &str, encoding: Encoding) -> Result<ComparisonOutcome, ConversionError> {
    let report = validate(quality, encoding);
    if !report.is_valid {
        return Ok(ComparisonOutcome::Invalid {
            errors: report.errors,
        });
    }

    Ok(ComparisonOutcome::Valid {
        results: convert(quality, encoding)?,
        statistics: statistics(quality, encoding)?,
    })
}
