//! Monte Carlo model of the academic peer review process.
//!
//! Synthetic papers carry a latent true quality; reviewers report noisy
//! scores. Acceptance strategies (expert panel, single reviewer, random) pick
//! a fixed quota per trial, and threshold decision processes (averaged score,
//! majority vote) are scored for accuracy against ground truth. Aggregating
//! over many trials quantifies how much real information multi-reviewer
//! averaging adds over cheaper selection rules.

pub mod cli;
pub mod config;
pub mod error;
pub mod parallel;
pub mod review;
pub mod study;

pub use config::StudySettings;
pub use error::{ConfigError, InvalidQuota};
