use thiserror::Error;

/// The two classes of failure a conversion can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty input, a multi-character argument, a negative score, or an unsupported offset
    InvalidInput,
    /// An ASCII value or Phred score outside the active encoding's bounds
    Range,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error(
        "ASCII value {ascii_value} of character '{character}' is outside valid range \
        {min}-{max} for {encoding}"
    )]
    OutOfRange {
        character: char,
        ascii_value: u32,
        min: u32,
        max: u32,
        encoding: &'static str,
    },

    #[error("Negative Phred score {score} for character '{character}' is not allowed")]
    NegativeScore { character: char, score: i64 },

    #[error("Error processing character '{character}' at position {position}: {source}")]
    AtPosition {
        character: char,
        position: usize,
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ConversionError::OutOfRange { .. } | ConversionError::NegativeScore { .. } => {
                ErrorKind::Range
            }
            ConversionError::AtPosition { source, .. } => source.kind(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_kind_follows_source() {
        let err = ConversionError::AtPosition {
            character: '!',
            position: 3,
            source: Box::new(ConversionError::OutOfRange {
                character: '!',
                ascii_value: 33,
                min: 64,
                max: 126,
                encoding: "Phred+64 (Illumina 1.3+)",
            }),
        };
        assert_eq!(err.kind(), ErrorKind::Range);

        let msg = err.to_string();
        assert!(msg.contains("'!'"));
        assert!(msg.contains("position 3"));
        assert!(msg.contains("64-126"));
    }

    #[test]
    fn invalid_input_message() {
        let err = ConversionError::invalid("Quality string cannot be empty");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Quality string cannot be empty");
    }
}
