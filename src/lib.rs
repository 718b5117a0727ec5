//! Conversion of FASTQ quality strings into per-base Phred scores, error probabilities and
//! accuracies, under either the Phred+33 or Phred+64 encoding.
//!
//! Every operation is a pure function of its arguments:
//!
//! * [`convert`] and [`statistics`] fail fast on the first bad character.
//! * [`validate`] never fails and collects every problem into a [`ValidationReport`].
//! * [`compare_encodings`] evaluates both encodings independently.

#[macro_use]
extern crate log;

pub mod category;
pub mod compare;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod io;
pub mod samples;
pub mod stats;
pub mod summary;
pub mod validate;

pub use compare::{compare_encodings, ComparisonOutcome, EncodingComparison};
pub use convert::{
    convert, error_probability, score_character, score_with_profile, ExportRow, PositionResult,
};
pub use encoding::{Encoding, EncodingProfile, PHRED33, PHRED64};
pub use error::{ConversionError, ErrorKind};
pub use stats::{statistics, QualityStatistics};
pub use validate::{validate, ValidationReport};
