use crate::config::StudySettings;
use crate::error::InvalidQuota;
use crate::review::decision::{accuracy_against_truth, true_decisions, DecisionProcess};
use crate::review::paper::{generate_papers, Paper};
use crate::review::rng::Rng;
use crate::review::strategy::{apply_strategy, Strategy};

/// One trial's measurements: average accepted true quality per strategy
/// (parallel to the strategy list) and decision accuracy per process
/// (parallel to [DecisionProcess::ALL]).
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    pub accepted_quality: Vec<f64>,
    pub process_accuracy: Vec<f64>,
}

/// Run a single trial: generate one cohort of papers, apply every strategy at
/// the shared quota, and score both decision processes against ground truth.
/// Deterministic given `trial_seed`.
pub fn run_trial(
    settings: &StudySettings,
    strategies: &[Strategy],
    trial_seed: u64,
) -> Result<TrialOutcome, InvalidQuota> {
    let mut rng = Rng::new(trial_seed);
    let papers = generate_papers(
        settings.papers,
        settings.quality,
        settings.noise,
        settings.reviewers_per_paper,
        &mut rng,
    );

    let mut accepted_quality = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let picked = apply_strategy(&papers, *strategy, settings.quota, &mut rng)?;
        accepted_quality.push(mean_true_quality(&papers, &picked));
    }

    let truth = true_decisions(&papers, settings.threshold);
    let process_accuracy = DecisionProcess::ALL
        .iter()
        .map(|process| {
            accuracy_against_truth(&process.decide(&papers, settings.threshold), &truth)
        })
        .collect();

    Ok(TrialOutcome {
        accepted_quality,
        process_accuracy,
    })
}

fn mean_true_quality(papers: &[Paper], picked: &[usize]) -> f64 {
    if picked.is_empty() {
        return 0.0;
    }
    picked
        .iter()
        .map(|&index| papers[index].true_quality)
        .sum::<f64>()
        / picked.len() as f64
}
