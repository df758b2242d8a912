//! Threshold accept/reject processes and their accuracy against ground truth.
//!
//! These mirror the referenced experiment's second framing: instead of a fixed
//! quota, each paper is accepted when its score estimate clears a threshold,
//! and a process is judged by how often its decision matches the decision an
//! error-free reviewer would make.

use serde::Serialize;

use crate::review::paper::Paper;

/// Ground truth: accept exactly the papers whose latent quality clears the
/// threshold.
pub fn true_decisions(papers: &[Paper], threshold: f64) -> Vec<bool> {
    papers
        .iter()
        .map(|paper| paper.true_quality >= threshold)
        .collect()
}

/// Accept when the mean of all reviewer scores clears the threshold.
pub fn decide_by_average(papers: &[Paper], threshold: f64) -> Vec<bool> {
    papers
        .iter()
        .map(|paper| paper.mean_score() >= threshold)
        .collect()
}

/// Votes in favour per paper: reviewers whose individual score clears the
/// threshold.
pub fn count_votes(papers: &[Paper], threshold: f64) -> Vec<usize> {
    papers
        .iter()
        .map(|paper| paper.scores.iter().filter(|score| **score >= threshold).count())
        .collect()
}

/// Accept when at least half the panel votes in favour (votes >= reviewers / 2,
/// integer division, so a single reviewer always accepts).
pub fn decide_by_vote(papers: &[Paper], threshold: f64) -> Vec<bool> {
    papers
        .iter()
        .zip(count_votes(papers, threshold))
        .map(|(paper, votes)| votes >= paper.scores.len() / 2)
        .collect()
}

/// Fraction of papers whose decision matches the ground truth.
pub fn accuracy_against_truth(decisions: &[bool], truth: &[bool]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let matching = decisions
        .iter()
        .zip(truth)
        .filter(|(decision, expected)| decision == expected)
        .count();
    matching as f64 / truth.len() as f64
}

/// The two review processes whose decision accuracy the study compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionProcess {
    AverageScore,
    MajorityVote,
}

impl DecisionProcess {
    pub const ALL: [DecisionProcess; 2] = [DecisionProcess::AverageScore, DecisionProcess::MajorityVote];

    pub fn name(self) -> &'static str {
        match self {
            Self::AverageScore => "average_score",
            Self::MajorityVote => "majority_vote",
        }
    }

    pub fn decide(self, papers: &[Paper], threshold: f64) -> Vec<bool> {
        match self {
            Self::AverageScore => decide_by_average(papers, threshold),
            Self::MajorityVote => decide_by_vote(papers, threshold),
        }
    }
}
