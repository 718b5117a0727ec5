use crate::convert::{convert, PositionResult};
use crate::encoding::Encoding;
use crate::error::ConversionError;

use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate quality figures over a whole quality string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityStatistics {
    pub total_bases: usize,
    pub encoding: &'static str,
    pub min_phred: u32,
    pub max_phred: u32,
    pub mean_phred: f64,
    pub median_phred: f64,
    /// Sample standard deviation; absent for a single base
    pub std_phred: Option<f64>,
    pub min_error_prob: f64,
    pub max_error_prob: f64,
    pub mean_error_prob: f64,
    pub mean_accuracy: f64,
    pub bases_above_q20: usize,
    pub bases_above_q30: usize,
    pub percent_above_q20: f64,
    pub percent_above_q30: f64,
    /// Phred score -> number of bases with that score
    pub quality_distribution: BTreeMap<u32, usize>,
}

/// Converts `quality` and summarises the result.
///
/// # Errors
///
/// Fails with the same error as [`convert`]; statistics are never computed over a partially
/// valid string.
pub fn statistics(quality: &str, encoding: Encoding) -> Result<QualityStatistics, ConversionError> {
    let results = convert(quality, encoding)?;
    Ok(summarise(&results, encoding))
}

/// Aggregates already-converted results. `results` must be non-empty, which `convert` ensures.
pub(crate) fn summarise(results: &[PositionResult], encoding: Encoding) -> QualityStatistics {
    let n = results.len();
    let total = n as f64;

    let mut scores: Vec<u32> = results.iter().map(|r| r.phred_score).collect();
    scores.sort_unstable();

    let mean_phred = scores.iter().map(|&q| f64::from(q)).sum::<f64>() / total;

    let median_phred = if n % 2 == 1 {
        f64::from(scores[n / 2])
    } else {
        (f64::from(scores[n / 2 - 1]) + f64::from(scores[n / 2])) / 2.0
    };

    let std_phred = (n > 1).then(|| {
        let ss: f64 = scores
            .iter()
            .map(|&q| (f64::from(q) - mean_phred).powi(2))
            .sum();
        (ss / (total - 1.0)).sqrt()
    });

    let probs = results.iter().map(|r| r.error_probability);
    let min_error_prob = probs.clone().fold(f64::INFINITY, f64::min);
    let max_error_prob = probs.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean_error_prob = probs.sum::<f64>() / total;
    let mean_accuracy = results.iter().map(|r| r.accuracy).sum::<f64>() / total;

    let bases_above_q20 = scores.iter().filter(|&&q| q >= 20).count();
    let bases_above_q30 = scores.iter().filter(|&&q| q >= 30).count();

    let mut quality_distribution = BTreeMap::new();
    for q in &scores {
        *quality_distribution.entry(*q).or_insert(0) += 1;
    }

    QualityStatistics {
        total_bases: n,
        encoding: encoding.name(),
        min_phred: scores[0],
        max_phred: scores[n - 1],
        mean_phred,
        median_phred,
        std_phred,
        min_error_prob,
        max_error_prob,
        mean_error_prob,
        mean_accuracy,
        bases_above_q20,
        bases_above_q30,
        percent_above_q20: (bases_above_q20 as f64 / total) * 100.0,
        percent_above_q30: (bases_above_q30 as f64 / total) * 100.0,
        quality_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn uniform_low_quality() {
        let s = statistics("##########", Encoding::Phred33).unwrap();
        assert_eq!(s.total_bases, 10);
        assert_eq!(s.min_phred, 2);
        assert_eq!(s.max_phred, 2);
        assert!(close(s.mean_phred, 2.0));
        assert!(close(s.median_phred, 2.0));
        assert!(close(s.std_phred.unwrap(), 0.0));
        assert_eq!(s.bases_above_q20, 0);
        assert_eq!(s.percent_above_q20, 0.0);
        assert_eq!(s.quality_distribution, BTreeMap::from([(2, 10)]));
    }

    #[test]
    fn mixed_quality() {
        // 40, 40, 30, 10
        let s = statistics("II?+", Encoding::Phred33).unwrap();
        assert_eq!(s.min_phred, 10);
        assert_eq!(s.max_phred, 40);
        assert!(close(s.mean_phred, 30.0));
        assert!(close(s.median_phred, 35.0));
        assert!(close(s.std_phred.unwrap(), (600.0f64 / 3.0).sqrt()));
        assert!(close(s.min_error_prob, 0.0001));
        assert!(close(s.max_error_prob, 0.1));
        assert!(close(s.mean_error_prob, (0.0001 + 0.0001 + 0.001 + 0.1) / 4.0));
        assert!(close(s.mean_accuracy, 1.0 - s.mean_error_prob));
        assert_eq!(s.bases_above_q20, 3);
        assert_eq!(s.bases_above_q30, 3);
        assert!(close(s.percent_above_q20, 75.0));
        assert_eq!(
            s.quality_distribution,
            BTreeMap::from([(10, 1), (30, 1), (40, 2)])
        );
        assert_eq!(s.encoding, "Phred+33 (Sanger)");
    }

    #[test]
    fn single_base_has_no_deviation() {
        let s = statistics("I", Encoding::Phred33).unwrap();
        assert_eq!(s.std_phred, None);
        assert!(close(s.median_phred, 40.0));
    }

    #[test]
    fn failure_propagates() {
        let err = statistics("II!I", Encoding::Phred64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            statistics("", Encoding::Phred33).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }
}
