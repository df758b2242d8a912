use serde::Serialize;

use crate::error::ConfigError;
use crate::review::paper::{NoiseModel, QualityDistribution};

/// Full configuration for one study. Validated eagerly before any trial runs;
/// a study is deterministic given these fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudySettings {
    pub trials: usize,
    pub papers: usize,
    pub quota: usize,
    pub reviewers_per_paper: usize,
    pub quality: QualityDistribution,
    pub noise: NoiseModel,
    /// Acceptance threshold for the decision-accuracy processes.
    pub threshold: f64,
    pub seed: u64,
}

impl Default for StudySettings {
    /// Reference experiment defaults: 1-10 integer quality scale, imprecision
    /// sd 0.5, other-error sd 0.25, threshold 7.
    fn default() -> Self {
        Self {
            trials: 1000,
            papers: 100,
            quota: 20,
            reviewers_per_paper: 3,
            quality: QualityDistribution::UniformInt { low: 1, high: 10 },
            noise: NoiseModel {
                imprecision_sd: 0.5,
                other_sd: 0.25,
            },
            threshold: 7.0,
            seed: 0,
        }
    }
}

impl StudySettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.papers == 0 {
            return Err(ConfigError::ZeroPapers);
        }
        if self.reviewers_per_paper == 0 {
            return Err(ConfigError::ZeroReviewers);
        }
        if self.quota == 0 {
            return Err(ConfigError::ZeroQuota);
        }
        if self.quota > self.papers {
            return Err(ConfigError::QuotaExceedsPapers {
                quota: self.quota,
                papers: self.papers,
            });
        }
        validate_quality(&self.quality)?;
        validate_sd("imprecision error sd", self.noise.imprecision_sd)?;
        validate_sd("other error sd", self.noise.other_sd)?;
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

fn validate_quality(quality: &QualityDistribution) -> Result<(), ConfigError> {
    match *quality {
        QualityDistribution::Uniform { low, high } => {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(ConfigError::InvalidQualityBounds { low, high });
            }
        }
        QualityDistribution::UniformInt { low, high } => {
            if low >= high {
                return Err(ConfigError::InvalidQualityBounds {
                    low: low as f64,
                    high: high as f64,
                });
            }
        }
        QualityDistribution::Normal { mean, sd } => {
            if !mean.is_finite() {
                return Err(ConfigError::InvalidQualityMean { mean });
            }
            if !sd.is_finite() || sd <= 0.0 {
                return Err(ConfigError::InvalidQualitySd { sd });
            }
        }
    }
    Ok(())
}

fn validate_sd(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidErrorSd { name, value });
    }
    Ok(())
}
