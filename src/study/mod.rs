pub mod monte_carlo;
pub mod report;
pub mod summary;

pub use monte_carlo::{run_study, run_study_parallel};
pub use report::{render_accuracy_table, render_table, to_csv_string, write_csv};
pub use summary::{
    summarize, BaselineUplift, ProcessSummary, RunningStats, StrategySummary, StudySummary,
};
