use crate::encoding::{Encoding, EncodingProfile};
use crate::error::ConversionError;
use serde::Serialize;

/// The decoded quality of a single base call.
///
/// # Fields
///
/// * `position` - 1-based index of the character within the quality string
/// * `character` - The raw quality character
/// * `ascii_value` - The ASCII code of `character`
/// * `phred_score` - `ascii_value - offset`
/// * `error_probability` - `10^(-phred_score / 10)`
/// * `accuracy` - `1 - error_probability`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionResult {
    pub position: usize,
    pub character: char,
    pub ascii_value: u32,
    pub phred_score: u32,
    pub error_probability: f64,
    pub accuracy: f64,
}

impl PositionResult {
    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy * 100.0
    }
}

/// A `PositionResult` flattened into the fixed column layout used by CSV and JSON exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Position")]
    pub position: usize,
    #[serde(rename = "ASCII Character")]
    pub character: char,
    #[serde(rename = "ASCII Value")]
    pub ascii_value: u32,
    #[serde(rename = "Phred Score")]
    pub phred_score: u32,
    #[serde(rename = "Error Probability")]
    pub error_probability: f64,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "Accuracy (%)")]
    pub accuracy_percent: f64,
}

impl From<&PositionResult> for ExportRow {
    fn from(r: &PositionResult) -> Self {
        ExportRow {
            position: r.position,
            character: r.character,
            ascii_value: r.ascii_value,
            phred_score: r.phred_score,
            error_probability: r.error_probability,
            accuracy: r.accuracy,
            accuracy_percent: r.accuracy_percent(),
        }
    }
}

/// Converts a single quality character to its Phred score under the given encoding.
///
/// # Errors
///
/// * `InvalidInput` if `character` is not exactly one character long.
/// * `OutOfRange` if its ASCII value lies outside the encoding's `ascii_range`.
pub fn score_character(character: &str, encoding: Encoding) -> Result<u32, ConversionError> {
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => score_with_profile(c, encoding.profile()),
        _ => Err(ConversionError::invalid("Input must be a single character")),
    }
}

/// Converts a quality character to a Phred score against an arbitrary profile. The supported
/// encodings never yield a negative score once the range check passes, but a lenient profile
/// (e.g. an `ascii_range` starting below the offset) can, and that is still rejected.
pub fn score_with_profile(c: char, profile: &EncodingProfile) -> Result<u32, ConversionError> {
    let ascii_value = c as u32;

    if !profile.accepts(ascii_value) {
        let (min, max) = profile.ascii_range;
        return Err(ConversionError::OutOfRange {
            character: c,
            ascii_value,
            min,
            max,
            encoding: profile.name,
        });
    }

    let score = i64::from(ascii_value) - i64::from(profile.offset);
    if score < 0 {
        return Err(ConversionError::NegativeScore {
            character: c,
            score,
        });
    }

    Ok(score as u32)
}

/// Returns `10^(-phred_score / 10)`, the modelled probability that a base call is wrong.
///
/// # Errors
///
/// `InvalidInput` if `phred_score` is negative.
pub fn error_probability(phred_score: i64) -> Result<f64, ConversionError> {
    if phred_score < 0 {
        return Err(ConversionError::invalid(format!(
            "Phred score {phred_score} cannot be negative"
        )));
    }

    Ok(10f64.powf(-(phred_score as f64) / 10.0))
}

/// Converts every character of a quality string, in order.
///
/// Conversion is fail-fast: the first bad character aborts the call, and the returned error
/// is wrapped with that character and its 1-based position.
///
/// # Example
///
/// ```
/// use qualdecode::{convert, Encoding};
///
/// let results = convert("II?+", Encoding::Phred33).unwrap();
/// let scores: Vec<u32> = results.iter().map(|r| r.phred_score).collect();
/// assert_eq!(scores, vec![40, 40, 30, 10]);
/// ```
pub fn convert(quality: &str, encoding: Encoding) -> Result<Vec<PositionResult>, ConversionError> {
    if quality.is_empty() {
        return Err(ConversionError::invalid("Quality string cannot be empty"));
    }

    let profile = encoding.profile();

    let results = quality
        .chars()
        .enumerate()
        .map(|(i, c)| {
            position_result(i + 1, c, profile).map_err(|e| ConversionError::AtPosition {
                character: c,
                position: i + 1,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Converted {} bases under {}", results.len(), profile.name);

    Ok(results)
}

fn position_result(
    position: usize,
    c: char,
    profile: &EncodingProfile,
) -> Result<PositionResult, ConversionError> {
    let phred_score = score_with_profile(c, profile)?;
    let error_probability = error_probability(i64::from(phred_score))?;

    Ok(PositionResult {
        position,
        character: c,
        ascii_value: c as u32,
        phred_score,
        error_probability,
        accuracy: 1.0 - error_probability,
    })
}
