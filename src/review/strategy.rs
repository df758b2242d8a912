use serde::Serialize;

use crate::error::InvalidQuota;
use crate::review::paper::Paper;
use crate::review::rng::Rng;

/// Acceptance strategy under comparison. Each accepts exactly the quota so
/// accepted-quality averages stay comparable across strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Rank by the mean of all reviewer scores, accept the top of the list.
    ExpertPanel,
    /// Rank by the first reviewer's score alone.
    SingleReviewer,
    /// Accept a uniformly random subset; uses no score information.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::ExpertPanel, Strategy::SingleReviewer, Strategy::Random];

    pub fn name(self) -> &'static str {
        match self {
            Self::ExpertPanel => "expert_panel",
            Self::SingleReviewer => "single_reviewer",
            Self::Random => "random",
        }
    }

    /// Indices of the accepted papers. Ranking ties break by generation order,
    /// so a fixed seed reproduces the same acceptance set.
    pub fn select(
        self,
        papers: &[Paper],
        quota: usize,
        rng: &mut Rng,
    ) -> Result<Vec<usize>, InvalidQuota> {
        if quota > papers.len() {
            return Err(InvalidQuota {
                quota,
                available: papers.len(),
            });
        }
        Ok(match self {
            Self::ExpertPanel => ranked_by(papers, quota, Paper::mean_score),
            Self::SingleReviewer => ranked_by(papers, quota, Paper::first_score),
            Self::Random => rng.pick_indices(papers.len(), quota),
        })
    }
}

pub fn apply_strategy(
    papers: &[Paper],
    strategy: Strategy,
    quota: usize,
    rng: &mut Rng,
) -> Result<Vec<usize>, InvalidQuota> {
    strategy.select(papers, quota, rng)
}

fn ranked_by<F>(papers: &[Paper], quota: usize, score: F) -> Vec<usize>
where
    F: Fn(&Paper) -> f64,
{
    let mut order: Vec<usize> = (0..papers.len()).collect();
    // Stable sort: equal scores keep ascending generation order.
    order.sort_by(|&left, &right| score(&papers[right]).total_cmp(&score(&papers[left])));
    order.truncate(quota);
    order
}
