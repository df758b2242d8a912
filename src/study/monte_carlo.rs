use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::StudySettings;
use crate::error::{ConfigError, InvalidQuota};
use crate::review::engine::{run_trial, TrialOutcome};
use crate::review::strategy::Strategy;
use crate::study::summary::{summarize, StudySummary};

/// Run the full study sequentially.
pub fn run_study(
    settings: &StudySettings,
    strategies: &[Strategy],
) -> Result<StudySummary, ConfigError> {
    run_study_with_parallelism(settings, strategies, false)
}

/// Like [run_study] but distributes trials across all CPU cores via Rayon.
/// Trial outcomes are collected in trial order before aggregation, so the
/// summary is bit-identical to the sequential run.
pub fn run_study_parallel(
    settings: &StudySettings,
    strategies: &[Strategy],
) -> Result<StudySummary, ConfigError> {
    run_study_with_parallelism(settings, strategies, true)
}

fn run_study_with_parallelism(
    settings: &StudySettings,
    strategies: &[Strategy],
    parallel: bool,
) -> Result<StudySummary, ConfigError> {
    settings.validate()?;
    debug!(
        trials = settings.trials,
        papers = settings.papers,
        quota = settings.quota,
        reviewers = settings.reviewers_per_paper,
        seed = settings.seed,
        parallel,
        "starting review study"
    );
    let started = Instant::now();

    let run_one = |trial: usize| -> Result<TrialOutcome, InvalidQuota> {
        run_trial(settings, strategies, settings.seed.wrapping_add(trial as u64))
    };

    let outcomes: Result<Vec<TrialOutcome>, InvalidQuota> = if parallel {
        (0..settings.trials).into_par_iter().map(run_one).collect()
    } else {
        (0..settings.trials).map(run_one).collect()
    };
    let outcomes = outcomes?;

    let summary = summarize(settings, strategies, &outcomes);
    info!(
        trials = settings.trials,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "review study complete"
    );
    Ok(summary)
}
