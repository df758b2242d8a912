//! Render a study summary as plain text, CSV, or JSON-friendly structures.

use std::fmt::Write as _;
use std::io;

use crate::study::summary::StudySummary;

fn settings_line(summary: &StudySummary) -> String {
    let settings = &summary.settings;
    format!(
        "review study: {} trials x {} papers, quota {}, {} reviewers, seed {}",
        settings.trials, settings.papers, settings.quota, settings.reviewers_per_paper, settings.seed
    )
}

/// Plain-text table of the full study: strategy comparison, uplift over the
/// random baseline, and decision-process accuracy.
pub fn render_table(summary: &StudySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "{}", settings_line(summary));
    let _ = writeln!(&mut out);
    let _ = writeln!(
        &mut out,
        "{:<18} {:>22} {:>12} {:>12}",
        "strategy", "mean accepted quality", "variance", "std error"
    );
    for row in &summary.strategies {
        let _ = writeln!(
            &mut out,
            "{:<18} {:>22.4} {:>12.6} {:>12.6}",
            row.strategy.name(),
            row.mean_accepted_quality,
            row.variance,
            row.std_error
        );
    }
    if !summary.baseline_uplift.is_empty() {
        let _ = writeln!(&mut out);
        let _ = writeln!(&mut out, "uplift vs random baseline");
        for row in &summary.baseline_uplift {
            let _ = writeln!(
                &mut out,
                "{:<18} {:>+8.4}  (se {:.6})",
                row.strategy.name(),
                row.uplift,
                row.combined_std_error
            );
        }
    }
    let _ = writeln!(&mut out);
    out.push_str(&render_process_rows(summary));
    out
}

/// Plain-text table for the threshold-accuracy experiment alone.
pub fn render_accuracy_table(summary: &StudySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "{}", settings_line(summary));
    let _ = writeln!(
        &mut out,
        "acceptance threshold: {}",
        summary.settings.threshold
    );
    let _ = writeln!(&mut out);
    out.push_str(&render_process_rows(summary));
    out
}

fn render_process_rows(summary: &StudySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        "{:<18} {:>14} {:>12} {:>12}",
        "decision process", "mean accuracy", "variance", "std error"
    );
    for row in &summary.processes {
        let _ = writeln!(
            &mut out,
            "{:<18} {:>14.4} {:>12.6} {:>12.6}",
            row.process.name(),
            row.mean_accuracy,
            row.variance,
            row.std_error
        );
    }
    out
}

/// CSV export: one row per strategy and per decision process, tagged by
/// section.
pub fn write_csv<W: io::Write>(summary: &StudySummary, writer: W) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["section", "name", "mean", "variance", "std_error"])?;
    for row in &summary.strategies {
        out.write_record([
            "strategy".to_string(),
            row.strategy.name().to_string(),
            format!("{:.6}", row.mean_accepted_quality),
            format!("{:.6}", row.variance),
            format!("{:.6}", row.std_error),
        ])?;
    }
    for row in &summary.processes {
        out.write_record([
            "process".to_string(),
            row.process.name().to_string(),
            format!("{:.6}", row.mean_accuracy),
            format!("{:.6}", row.variance),
            format!("{:.6}", row.std_error),
        ])?;
    }
    for row in &summary.baseline_uplift {
        out.write_record([
            "uplift_vs_random".to_string(),
            row.strategy.name().to_string(),
            format!("{:.6}", row.uplift),
            String::new(),
            format!("{:.6}", row.combined_std_error),
        ])?;
    }
    out.flush()?;
    Ok(())
}

pub fn to_csv_string(summary: &StudySummary) -> Result<String, String> {
    let mut buffer = Vec::new();
    write_csv(summary, &mut buffer).map_err(|err| format!("unable to encode csv: {err}"))?;
    String::from_utf8(buffer).map_err(|err| format!("csv output was not utf-8: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudySettings;
    use crate::review::strategy::Strategy;
    use crate::study::monte_carlo::run_study;

    fn summary() -> StudySummary {
        let settings = StudySettings {
            trials: 20,
            papers: 25,
            quota: 5,
            seed: 7,
            ..StudySettings::default()
        };
        run_study(&settings, &Strategy::ALL).unwrap()
    }

    #[test]
    fn table_lists_every_strategy_and_process() {
        let rendered = render_table(&summary());
        assert!(rendered.contains("mean accepted quality"));
        for strategy in Strategy::ALL {
            assert!(rendered.contains(strategy.name()), "missing {}", strategy.name());
        }
        assert!(rendered.contains("uplift vs random baseline"));
        assert!(rendered.contains("average_score"));
        assert!(rendered.contains("majority_vote"));
    }

    #[test]
    fn accuracy_table_reports_the_threshold() {
        let rendered = render_accuracy_table(&summary());
        assert!(rendered.contains("acceptance threshold: 7"));
        assert!(rendered.contains("decision process"));
    }

    #[test]
    fn csv_round_trips_through_a_reader() {
        let payload = to_csv_string(&summary()).unwrap();
        let mut reader = csv::Reader::from_reader(payload.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers,
            csv::StringRecord::from(vec!["section", "name", "mean", "variance", "std_error"])
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
        // 3 strategies + 2 processes + 2 uplift rows.
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().any(|row| &row[1] == "expert_panel"));
    }
}
