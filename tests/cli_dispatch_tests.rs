use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_peersim")
}

#[test]
fn simulate_command_dispatches_and_emits_json() {
    let output = Command::new(bin())
        .args([
            "simulate", "--trials", "40", "--papers", "30", "--quota", "6", "--seed", "7",
        ])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("simulate should emit json");
    assert_eq!(payload["strategies"].as_array().map(Vec::len), Some(3));
    assert!(payload["strategies"][0]["mean_accepted_quality"].is_number());
    assert_eq!(payload["settings"]["seed"], 7);
    assert_eq!(payload["processes"].as_array().map(Vec::len), Some(2));
}

#[test]
fn simulate_table_output_lists_strategies() {
    let output = Command::new(bin())
        .args([
            "simulate", "--trials", "20", "--papers", "25", "--quota", "5", "--seed", "1",
            "--table",
        ])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mean accepted quality"));
    assert!(stdout.contains("expert_panel"));
    assert!(stdout.contains("uplift vs random baseline"));
}

#[test]
fn simulate_csv_output_has_the_summary_header() {
    let output = Command::new(bin())
        .args([
            "simulate", "--trials", "20", "--papers", "25", "--quota", "5", "--seed", "1",
            "--csv",
        ])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("section,name,mean,variance,std_error"));
    assert!(stdout.contains("strategy,random,"));
}

#[test]
fn accuracy_command_reports_decision_processes_only() {
    let output = Command::new(bin())
        .args(["accuracy", "--trials", "30", "--seed", "5"])
        .output()
        .expect("accuracy should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("accuracy should emit json");
    assert_eq!(payload["processes"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["strategies"].as_array().map(Vec::len), Some(0));
}

#[test]
fn oversized_quota_is_a_configuration_error() {
    let output = Command::new(bin())
        .args([
            "simulate", "--trials", "10", "--papers", "5", "--quota", "9", "--seed", "1",
        ])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
    assert!(stderr.contains("quota 9 exceeds 5 papers"));
}

#[test]
fn zero_trials_is_a_configuration_error() {
    let output = Command::new(bin())
        .args(["simulate", "--trials", "0", "--seed", "1"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("number of trials must be positive"));
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("serve")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: peersim <simulate|accuracy>"));
}

#[test]
fn missing_flag_value_is_a_usage_error() {
    let output = Command::new(bin())
        .args(["simulate", "--trials"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expects a value"));
}

#[test]
fn fixed_seed_reproduces_identical_output() {
    let args = [
        "simulate", "--trials", "25", "--papers", "20", "--quota", "4", "--seed", "31",
    ];
    let first = Command::new(bin())
        .args(args)
        .output()
        .expect("simulate should run");
    let second = Command::new(bin())
        .args(args)
        .output()
        .expect("simulate should run");

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn parallel_flag_does_not_change_the_result() {
    let base = [
        "simulate", "--trials", "25", "--papers", "20", "--quota", "4", "--seed", "31",
    ];
    let sequential = Command::new(bin())
        .args(base)
        .output()
        .expect("simulate should run");
    let parallel = Command::new(bin())
        .args(base.iter().chain(&["--parallel", "--workers", "2"]))
        .output()
        .expect("simulate should run");

    assert_eq!(sequential.status.code(), Some(0));
    assert_eq!(parallel.status.code(), Some(0));
    assert_eq!(sequential.stdout, parallel.stdout);
}
