use serde::Serialize;

/// Broad interpretation buckets for Phred scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum QualityCategory {
    VeryLow,
    Low,
    Good,
    High,
    VeryHigh,
}

impl QualityCategory {
    pub const ALL: [QualityCategory; 5] = [
        QualityCategory::VeryLow,
        QualityCategory::Low,
        QualityCategory::Good,
        QualityCategory::High,
        QualityCategory::VeryHigh,
    ];

    pub fn of(phred_score: u32) -> Self {
        match phred_score {
            0..=9 => QualityCategory::VeryLow,
            10..=19 => QualityCategory::Low,
            20..=29 => QualityCategory::Good,
            30..=39 => QualityCategory::High,
            _ => QualityCategory::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityCategory::VeryLow => "Very Low Quality",
            QualityCategory::Low => "Low Quality",
            QualityCategory::Good => "Good Quality",
            QualityCategory::High => "High Quality",
            QualityCategory::VeryHigh => "Very High Quality",
        }
    }

    pub fn score_range(&self) -> &'static str {
        match self {
            QualityCategory::VeryLow => "0-10",
            QualityCategory::Low => "10-20",
            QualityCategory::Good => "20-30",
            QualityCategory::High => "30-40",
            QualityCategory::VeryHigh => "40+",
        }
    }

    pub fn error_rate(&self) -> &'static str {
        match self {
            QualityCategory::VeryLow => ">10%",
            QualityCategory::Low => "1-10%",
            QualityCategory::Good => "0.1-1%",
            QualityCategory::High => "0.01-0.1%",
            QualityCategory::VeryHigh => "<0.01%",
        }
    }

    pub fn accuracy(&self) -> &'static str {
        match self {
            QualityCategory::VeryLow => "<90%",
            QualityCategory::Low => "90-99%",
            QualityCategory::Good => "99-99.9%",
            QualityCategory::High => "99.9-99.99%",
            QualityCategory::VeryHigh => ">99.99%",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            QualityCategory::VeryLow => "Consider filtering out these bases",
            QualityCategory::Low => "Use with caution",
            QualityCategory::Good => "Generally acceptable",
            QualityCategory::High => "Very reliable",
            QualityCategory::VeryHigh => "Excellent quality",
        }
    }
}

impl std::fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
