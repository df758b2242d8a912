//! Batch distribution for parallel trial execution.
//!
//! The study runner hands one trial per Rayon task; this module provides
//! helpers for batch boundaries (progress reporting, chunked runs) and a
//! convenience for running a study on a configured worker pool.

use crate::config::StudySettings;
use crate::error::ConfigError;
use crate::parallel::pool::WorkerPool;
use crate::review::strategy::Strategy;
use crate::study::monte_carlo::run_study_parallel;
use crate::study::summary::StudySummary;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run the parallel study inside [WorkerPool::install] so a custom worker
/// count applies to the whole trial sweep.
pub fn run_study_batches(
    settings: &StudySettings,
    strategies: &[Strategy],
    pool: &WorkerPool,
) -> Result<StudySummary, ConfigError> {
    pool.install(|| run_study_parallel(settings, strategies))
}
