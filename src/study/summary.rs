use serde::Serialize;

use crate::config::StudySettings;
use crate::review::decision::DecisionProcess;
use crate::review::engine::TrialOutcome;
use crate::review::strategy::Strategy;

/// Streaming mean/variance accumulator (Welford). Aggregation order is fixed
/// by the caller, so summaries are reproducible bit for bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (n - 1 denominator); zero below two samples.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        self.m2 / (self.count - 1) as f64
    }

    /// Standard error of the mean.
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.variance() / self.count as f64).sqrt()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub mean_accepted_quality: f64,
    pub variance: f64,
    pub std_error: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub process: DecisionProcess,
    pub mean_accuracy: f64,
    pub variance: f64,
    pub std_error: f64,
}

/// How much accepted quality an informed strategy gains over the random
/// baseline, with the two standard errors combined in quadrature.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineUplift {
    pub strategy: Strategy,
    pub uplift: f64,
    pub combined_std_error: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySummary {
    pub settings: StudySettings,
    pub strategies: Vec<StrategySummary>,
    pub processes: Vec<ProcessSummary>,
    pub baseline_uplift: Vec<BaselineUplift>,
}

/// Fold per-trial outcomes (in trial order) into the study summary.
pub fn summarize(
    settings: &StudySettings,
    strategies: &[Strategy],
    outcomes: &[TrialOutcome],
) -> StudySummary {
    let mut strategy_stats = vec![RunningStats::default(); strategies.len()];
    let mut process_stats = vec![RunningStats::default(); DecisionProcess::ALL.len()];

    for outcome in outcomes {
        for (stats, value) in strategy_stats.iter_mut().zip(&outcome.accepted_quality) {
            stats.push(*value);
        }
        for (stats, value) in process_stats.iter_mut().zip(&outcome.process_accuracy) {
            stats.push(*value);
        }
    }

    let strategy_summaries: Vec<StrategySummary> = strategies
        .iter()
        .zip(&strategy_stats)
        .map(|(strategy, stats)| StrategySummary {
            strategy: *strategy,
            mean_accepted_quality: stats.mean(),
            variance: stats.variance(),
            std_error: stats.std_error(),
        })
        .collect();

    let process_summaries: Vec<ProcessSummary> = DecisionProcess::ALL
        .iter()
        .zip(&process_stats)
        .map(|(process, stats)| ProcessSummary {
            process: *process,
            mean_accuracy: stats.mean(),
            variance: stats.variance(),
            std_error: stats.std_error(),
        })
        .collect();

    let baseline_uplift = baseline_uplifts(strategies, &strategy_stats);

    StudySummary {
        settings: settings.clone(),
        strategies: strategy_summaries,
        processes: process_summaries,
        baseline_uplift,
    }
}

fn baseline_uplifts(strategies: &[Strategy], stats: &[RunningStats]) -> Vec<BaselineUplift> {
    let Some(baseline) = strategies.iter().position(|s| *s == Strategy::Random) else {
        return Vec::new();
    };
    let baseline_stats = stats[baseline];
    strategies
        .iter()
        .zip(stats)
        .filter(|(strategy, _)| **strategy != Strategy::Random)
        .map(|(strategy, strategy_stats)| BaselineUplift {
            strategy: *strategy,
            uplift: strategy_stats.mean() - baseline_stats.mean(),
            combined_std_error: (strategy_stats.std_error().powi(2)
                + baseline_stats.std_error().powi(2))
            .sqrt(),
        })
        .collect()
}
