use thiserror::Error;

/// Configuration problems detected before any trial runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("number of trials must be positive")]
    ZeroTrials,
    #[error("papers per trial must be positive")]
    ZeroPapers,
    #[error("reviewers per paper must be at least 1")]
    ZeroReviewers,
    #[error("acceptance quota must be positive")]
    ZeroQuota,
    #[error("acceptance quota {quota} exceeds {papers} papers per trial")]
    QuotaExceedsPapers { quota: usize, papers: usize },
    #[error("{name} must be finite and non-negative (got {value})")]
    InvalidErrorSd { name: &'static str, value: f64 },
    #[error("quality distribution bounds are inverted or equal ({low} vs {high})")]
    InvalidQualityBounds { low: f64, high: f64 },
    #[error("quality mean must be finite (got {mean})")]
    InvalidQualityMean { mean: f64 },
    #[error("quality standard deviation must be finite and positive (got {sd})")]
    InvalidQualitySd { sd: f64 },
    #[error("acceptance threshold must be finite (got {threshold})")]
    InvalidThreshold { threshold: f64 },
}

/// A strategy was asked to accept more papers than exist in the trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quota {quota} exceeds population of {available} papers")]
pub struct InvalidQuota {
    pub quota: usize,
    pub available: usize,
}

impl From<InvalidQuota> for ConfigError {
    fn from(err: InvalidQuota) -> Self {
        ConfigError::QuotaExceedsPapers {
            quota: err.quota,
            papers: err.available,
        }
    }
}
