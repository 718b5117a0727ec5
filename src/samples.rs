use serde::Serialize;

/// A demonstration read with a characteristic quality profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleEntry {
    pub description: &'static str,
    pub seq_id: &'static str,
    pub sequence: &'static str,
    pub quality_string: &'static str,
    pub notes: &'static str,
}

pub const SAMPLES: &[SampleEntry] = &[
    SampleEntry {
        description: "High Quality Read",
        seq_id: "SEQ_HIGH_QUALITY",
        sequence: "ATCGATCGATCGATCG",
        quality_string: "IIIIIIIIIIIIIIII",
        notes: "All bases have high quality scores (Phred ~40)",
    },
    SampleEntry {
        description: "Mixed Quality Read",
        seq_id: "SEQ_MIXED_QUALITY",
        sequence: "GATCTGAACTG",
        quality_string: "II?+",
        notes: "Quality decreases toward the end (common in sequencing)",
    },
    SampleEntry {
        description: "Low Quality Read",
        seq_id: "SEQ_LOW_QUALITY",
        sequence: "NNNNNNNNNN",
        quality_string: "##########",
        notes: "Very low quality bases (Phred ~2)",
    },
    SampleEntry {
        description: "Illumina Style Quality",
        seq_id: "SEQ_ILLUMINA",
        sequence: "ACGTACGTACGTACGT",
        quality_string: "BBBBFFFFFHHHHHJJ",
        notes: "Typical Illumina quality profile",
    },
    SampleEntry {
        description: "Variable Quality",
        seq_id: "SEQ_VARIABLE",
        sequence: "TTTTAAAACCCCGGGG",
        quality_string: "IIAA++??BBBBFFFF",
        notes: "Highly variable quality across positions",
    },
    SampleEntry {
        description: "Short Read",
        seq_id: "SEQ_SHORT",
        sequence: "ATCG",
        quality_string: "IIBF",
        notes: "Short read with decreasing quality",
    },
    SampleEntry {
        description: "Quality Decline",
        seq_id: "SEQ_DECLINE",
        sequence: "ATCGATCGATCGATCGATCGATCG",
        quality_string: "IIIIHHHHGGGGFFFFDDDDCCCC",
        notes: "Gradual quality decline (typical of longer reads)",
    },
    SampleEntry {
        description: "Edge Case Characters",
        seq_id: "SEQ_EDGE_CASE",
        sequence: "ATCGATCG",
        quality_string: "!\"#$%&'(",
        notes: "Low ASCII values (testing edge cases)",
    },
];

/// Looks up a sample by its 1-based number, as listed by `qualdecode samples`.
pub fn sample(number: usize) -> Option<&'static SampleEntry> {
    number.checked_sub(1).and_then(|i| SAMPLES.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, Encoding};

    #[test]
    fn every_sample_is_phred33() {
        for s in SAMPLES {
            assert!(
                convert(s.quality_string, Encoding::Phred33).is_ok(),
                "{}",
                s.seq_id
            );
        }
    }

    #[test]
    fn one_based_lookup() {
        assert_eq!(sample(0), None);
        assert_eq!(sample(2).map(|s| s.quality_string), Some("II?+"));
        assert_eq!(sample(SAMPLES.len() + 1), None);
    }
}
