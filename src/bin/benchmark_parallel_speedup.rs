//! Run the study once sequentially and once in parallel, then print timings and speedup.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup

use std::process::ExitCode;
use std::time::Instant;

use peersim::config::StudySettings;
use peersim::review::strategy::Strategy;
use peersim::study::monte_carlo::{run_study, run_study_parallel};

fn main() -> ExitCode {
    let settings = StudySettings {
        trials: 5000,
        seed: 12345,
        ..StudySettings::default()
    };

    println!(
        "review study: {} trials x {} papers x {} reviewers (quota {})",
        settings.trials, settings.papers, settings.reviewers_per_paper, settings.quota
    );
    println!();

    // Sequential
    let t0 = Instant::now();
    let sequential = match run_study(&settings, &Strategy::ALL) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::from(1);
        }
    };
    let elapsed_seq = t0.elapsed();
    let seq_ms = elapsed_seq.as_secs_f64() * 1000.0;
    println!(
        "Sequential:  {:.2} ms  ({:.1} trials/s)",
        seq_ms,
        settings.trials as f64 / elapsed_seq.as_secs_f64()
    );

    // Parallel
    let t0 = Instant::now();
    let parallel = match run_study_parallel(&settings, &Strategy::ALL) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::from(1);
        }
    };
    let elapsed_par = t0.elapsed();
    let par_ms = elapsed_par.as_secs_f64() * 1000.0;
    println!(
        "Parallel:    {:.2} ms  ({:.1} trials/s)",
        par_ms,
        settings.trials as f64 / elapsed_par.as_secs_f64()
    );

    let speedup = seq_ms / par_ms;
    println!();
    println!("Speedup:     {speedup:.2}x faster (parallel vs sequential)");

    for (seq, par) in sequential.strategies.iter().zip(&parallel.strategies) {
        assert!(
            (seq.mean_accepted_quality - par.mean_accepted_quality).abs() < 1e-12,
            "{} mean mismatch",
            seq.strategy.name()
        );
    }
    println!("(Results match sequential vs parallel)");
    ExitCode::SUCCESS
}
