pub mod decision;
pub mod engine;
pub mod paper;
pub mod rng;
pub mod strategy;

pub use decision::{
    accuracy_against_truth, count_votes, decide_by_average, decide_by_vote, true_decisions,
    DecisionProcess,
};
pub use engine::{run_trial, TrialOutcome};
pub use paper::{generate_papers, NoiseModel, Paper, QualityDistribution};
pub use rng::Rng;
pub use strategy::{apply_strategy, Strategy};
