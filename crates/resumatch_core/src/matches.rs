//! Job-match records and the styling tiers derived from them.

/// One job match as reported by the analysis service.
///
/// `level` is free text chosen by the service ("Excellent Match" and
/// friends); styling never depends on it, only on `percentage`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub job: String,
    pub percentage: f64,
    pub level: String,
}

/// Styling bucket for a match card, derived from the percentage alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    VeryHigh,
    High,
    Good,
    Moderate,
}

impl MatchTier {
    /// Buckets a 0–100 percentage. Out-of-range or NaN input lands in the
    /// lowest tier rather than panicking.
    pub fn for_percentage(percentage: f64) -> MatchTier {
        if percentage >= 85.0 {
            MatchTier::Excellent
        } else if percentage >= 80.0 {
            MatchTier::VeryHigh
        } else if percentage >= 75.0 {
            MatchTier::High
        } else if percentage >= 70.0 {
            MatchTier::Good
        } else {
            MatchTier::Moderate
        }
    }
}
