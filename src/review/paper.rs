use serde::Serialize;

use crate::review::rng::Rng;

/// Distribution the latent paper quality is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualityDistribution {
    /// Continuous uniform on [low, high).
    Uniform { low: f64, high: f64 },
    /// Integer uniform on low..=high, the referenced experiment's 1-10 scale.
    UniformInt { low: i64, high: i64 },
    Normal { mean: f64, sd: f64 },
}

impl QualityDistribution {
    pub fn sample(&self, rng: &mut Rng) -> f64 {
        match *self {
            Self::Uniform { low, high } => rng.next_range(low, high),
            Self::UniformInt { low, high } => rng.next_int_inclusive(low, high) as f64,
            Self::Normal { mean, sd } => rng.next_normal(mean, sd),
        }
    }

    /// Hard score bounds, when the distribution has them. Observed scores are
    /// clipped back into these bounds the way the reference experiment clips
    /// reviews into [1, 10]; an unbounded quality scale leaves scores unclipped.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Uniform { low, high } => Some((low, high)),
            Self::UniformInt { low, high } => Some((low as f64, high as f64)),
            Self::Normal { .. } => None,
        }
    }

    pub fn population_mean(&self) -> f64 {
        match *self {
            Self::Uniform { low, high } => (low + high) / 2.0,
            Self::UniformInt { low, high } => (low as f64 + high as f64) / 2.0,
            Self::Normal { mean, .. } => mean,
        }
    }
}

/// Per-review error model: two independent zero-mean normal components, the
/// reviewer's imprecision and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoiseModel {
    pub imprecision_sd: f64,
    pub other_sd: f64,
}

impl NoiseModel {
    pub fn sample_error(&self, rng: &mut Rng) -> f64 {
        rng.next_normal(0.0, self.imprecision_sd) + rng.next_normal(0.0, self.other_sd)
    }
}

/// One submitted paper for one trial: a latent true quality and the noisy
/// scores its reviewers reported. Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    pub true_quality: f64,
    pub scores: Vec<f64>,
}

impl Paper {
    /// Panel estimate: mean of all reported scores.
    pub fn mean_score(&self) -> f64 {
        if self.scores.is_empty() {
            return f64::NEG_INFINITY;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    /// Triage estimate: the first reviewer's score alone.
    pub fn first_score(&self) -> f64 {
        self.scores.first().copied().unwrap_or(f64::NEG_INFINITY)
    }
}

/// Generate `n` papers, each with `reviewers_per_paper` independent noisy
/// scores. Scores are clipped to the quality distribution's bounds when it has
/// any. Deterministic given the rng state.
pub fn generate_papers(
    n: usize,
    quality: QualityDistribution,
    noise: NoiseModel,
    reviewers_per_paper: usize,
    rng: &mut Rng,
) -> Vec<Paper> {
    let bounds = quality.bounds();
    (0..n)
        .map(|_| {
            let true_quality = quality.sample(rng);
            let scores = (0..reviewers_per_paper)
                .map(|_| {
                    let raw = true_quality + noise.sample_error(rng);
                    match bounds {
                        Some((low, high)) => raw.clamp(low, high),
                        None => raw,
                    }
                })
                .collect();
            Paper {
                true_quality,
                scores,
            }
        })
        .collect()
}
