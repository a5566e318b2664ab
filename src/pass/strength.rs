//! Strength estimation and severity buckets.

use std::fmt;

use crate::error::EstimateError;

/// Guessability score in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 4;

    pub fn new(score: u8) -> Result<Self, EstimateError> {
        if score > Self::MAX {
            return Err(EstimateError::ScoreOutOfRange(score));
        }
        Ok(Self(score))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Anything that can score a password. Substitutable, so tests can stub it.
pub trait StrengthEstimator {
    fn estimate(&self, password: &str) -> Result<Score, EstimateError>;
}

impl<F> StrengthEstimator for F
where
    F: Fn(&str) -> Result<Score, EstimateError>,
{
    fn estimate(&self, password: &str) -> Result<Score, EstimateError> {
        self(password)
    }
}

/// Estimator backed by the `zxcvbn` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zxcvbn;

impl StrengthEstimator for Zxcvbn {
    fn estimate(&self, password: &str) -> Result<Score, EstimateError> {
        let entropy =
            zxcvbn::zxcvbn(password, &[]).map_err(|e| EstimateError::Failed(e.to_string()))?;
        Score::new(entropy.score())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Weak",
            Severity::Medium => "Medium",
            Severity::High => "Strong",
        }
    }
}

/// Score mapped onto the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: Score,
    pub severity: Severity,
    /// Filled steps out of [`Strength::METER_MAX`].
    pub meter: u8,
}

impl Strength {
    pub const METER_MAX: u8 = 8;
}

impl From<Score> for Strength {
    fn from(score: Score) -> Self {
        let (severity, meter) = match score.get() {
            0 => (Severity::Low, 1),
            1 | 2 => (Severity::Low, 3),
            3 => (Severity::Medium, 5),
            _ => (Severity::High, 8),
        };
        Self {
            score,
            severity,
            meter,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.severity.label(), self.score.get(), Score::MAX)
    }
}

/// Password entropy in bits for a uniformly drawn password.
pub fn entropy_bits(length: usize, pool_len: usize) -> f64 {
    if pool_len == 0 {
        return 0.0;
    }
    length as f64 * (pool_len as f64).log2()
}

/// Entropy strength description.
pub fn entropy_label(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(score: u8) -> Strength {
        Strength::from(Score::new(score).unwrap())
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(strength(0).severity, Severity::Low);
        assert_eq!(strength(0).meter, 1);
        assert_eq!(strength(1).severity, Severity::Low);
        assert_eq!(strength(2).severity, Severity::Low);
        assert_eq!(strength(2).meter, 3);
        assert_eq!(strength(3).severity, Severity::Medium);
        assert_eq!(strength(3).meter, 5);
        assert_eq!(strength(4).severity, Severity::High);
        assert_eq!(strength(4).meter, Strength::METER_MAX);
    }

    #[test]
    fn score_above_four_is_rejected() {
        assert_eq!(Score::new(5), Err(EstimateError::ScoreOutOfRange(5)));
    }

    #[test]
    fn zxcvbn_scores_extremes() {
        let weak = Zxcvbn.estimate("password").unwrap();
        let strong = Zxcvbn.estimate("vT7#qLm9!xR2@wZp4&kN").unwrap();
        assert_eq!(weak.get(), 0);
        assert_eq!(strong.get(), 4);
    }

    #[test]
    fn zxcvbn_blank_password_is_an_error() {
        assert!(matches!(Zxcvbn.estimate(""), Err(EstimateError::Failed(_))));
    }

    #[test]
    fn entropy_matches_pool_size() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert!((entropy_bits(8, 24) - 8.0 * 24f64.log2()).abs() < 1e-9);
        assert_eq!(entropy_label(entropy_bits(8, 24)), "Fair");
        assert_eq!(entropy_label(entropy_bits(30, 57)), "Very Strong");
    }

    #[test]
    fn display_shows_label_and_score() {
        assert_eq!(strength(3).to_string(), "Medium (3/4)");
    }
}
