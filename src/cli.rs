use crate::config::StudySettings;
use crate::parallel::pool::WorkerPool;
use crate::review::paper::QualityDistribution;
use crate::review::strategy::Strategy;
use crate::study::monte_carlo::{run_study, run_study_parallel};
use crate::study::report::{render_accuracy_table, render_table, to_csv_string};
use crate::study::summary::StudySummary;

const USAGE: &str = "usage: peersim <simulate|accuracy> [flags]";
const FLAGS_HELP: &str = "flags:
  --trials N           number of trials (default 1000)
  --papers N           papers per trial (default 100)
  --quota N            papers each strategy accepts (default 20)
  --reviewers N        reviewers per paper (default 3)
  --imprecision-sd X   reviewer imprecision error sd (default 0.5)
  --other-sd X         other review error sd (default 0.25)
  --quality SPEC       uniform:LO:HI | uniform-int:LO:HI | normal:MEAN:SD
  --threshold X        acceptance threshold for decision accuracy (default 7)
  --seed N             random seed (default: OS entropy)
  --table | --csv      output format (default: json)
  --parallel           distribute trials across CPU cores
  --workers N          worker thread count with --parallel (default: all cores)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simulate,
    Accuracy,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("simulate") => Some(Command::Simulate),
        Some("accuracy") => Some(Command::Accuracy),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Accuracy) => handle_accuracy(args),
        None => {
            eprintln!("{USAGE}");
            eprintln!("{FLAGS_HELP}");
            2
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Json,
    Table,
    Csv,
}

#[derive(Debug, Clone)]
struct RunOptions {
    settings: StudySettings,
    output: OutputMode,
    parallel: bool,
    workers: usize,
}

fn handle_simulate(args: &[String]) -> i32 {
    let options = match parse_run_options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return 2;
        }
    };
    let summary = match execute(&options, &Strategy::ALL) {
        Ok(summary) => summary,
        Err(code) => return code,
    };
    emit(&summary, options.output, render_table)
}

fn handle_accuracy(args: &[String]) -> i32 {
    let options = match parse_run_options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return 2;
        }
    };
    // Accuracy runs measure the threshold processes only; no quota strategies.
    let summary = match execute(&options, &[]) {
        Ok(summary) => summary,
        Err(code) => return code,
    };
    emit(&summary, options.output, render_accuracy_table)
}

fn execute(options: &RunOptions, strategies: &[Strategy]) -> Result<StudySummary, i32> {
    let result = if options.parallel {
        let pool = WorkerPool::with_workers(options.workers);
        pool.install(|| run_study_parallel(&options.settings, strategies))
    } else {
        run_study(&options.settings, strategies)
    };
    result.map_err(|err| {
        eprintln!("invalid configuration: {err}");
        1
    })
}

fn emit(
    summary: &StudySummary,
    output: OutputMode,
    render: fn(&StudySummary) -> String,
) -> i32 {
    match output {
        OutputMode::Json => match serde_json::to_string_pretty(summary) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize study summary: {err}");
                return 1;
            }
        },
        OutputMode::Table => print!("{}", render(summary)),
        OutputMode::Csv => match to_csv_string(summary) {
            Ok(payload) => print!("{payload}"),
            Err(err) => {
                eprintln!("{err}");
                return 1;
            }
        },
    }
    0
}

fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut settings = StudySettings::default();
    let mut output = OutputMode::Json;
    let mut parallel = false;
    let mut workers = 0usize;
    let mut seeded = false;

    let mut index = 2;
    while index < args.len() {
        let flag = args[index].as_str();
        match flag {
            "--trials" => settings.trials = parse_usize(take_value(args, &mut index, flag)?, flag)?,
            "--papers" => settings.papers = parse_usize(take_value(args, &mut index, flag)?, flag)?,
            "--quota" => settings.quota = parse_usize(take_value(args, &mut index, flag)?, flag)?,
            "--reviewers" => {
                settings.reviewers_per_paper =
                    parse_usize(take_value(args, &mut index, flag)?, flag)?
            }
            "--imprecision-sd" => {
                settings.noise.imprecision_sd =
                    parse_f64(take_value(args, &mut index, flag)?, flag)?
            }
            "--other-sd" => {
                settings.noise.other_sd = parse_f64(take_value(args, &mut index, flag)?, flag)?
            }
            "--quality" => {
                settings.quality = parse_quality(take_value(args, &mut index, flag)?)?
            }
            "--threshold" => {
                settings.threshold = parse_f64(take_value(args, &mut index, flag)?, flag)?
            }
            "--seed" => {
                settings.seed = parse_u64(take_value(args, &mut index, flag)?, flag)?;
                seeded = true;
            }
            "--workers" => workers = parse_usize(take_value(args, &mut index, flag)?, flag)?,
            "--parallel" => parallel = true,
            "--table" => output = OutputMode::Table,
            "--csv" => output = OutputMode::Csv,
            "--json" => output = OutputMode::Json,
            _ => return Err(format!("unknown flag '{flag}'")),
        }
        index += 1;
    }

    if !seeded {
        settings.seed = entropy_seed()?;
    }

    Ok(RunOptions {
        settings,
        output,
        parallel,
        workers,
    })
}

fn take_value<'a>(args: &'a [String], index: &mut usize, flag: &str) -> Result<&'a str, String> {
    *index += 1;
    args.get(*index)
        .map(String::as_str)
        .ok_or_else(|| format!("flag '{flag}' expects a value"))
}

fn parse_usize(raw: &str, flag: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("invalid {flag} '{raw}': expected a non-negative integer"))
}

fn parse_u64(raw: &str, flag: &str) -> Result<u64, String> {
    raw.parse()
        .map_err(|_| format!("invalid {flag} '{raw}': expected a non-negative integer"))
}

fn parse_f64(raw: &str, flag: &str) -> Result<f64, String> {
    raw.parse()
        .map_err(|_| format!("invalid {flag} '{raw}': expected a number"))
}

/// Quality spec grammar: `uniform:LO:HI`, `uniform-int:LO:HI`, `normal:MEAN:SD`.
fn parse_quality(raw: &str) -> Result<QualityDistribution, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let &[kind, first, second] = parts.as_slice() else {
        return Err(format!(
            "invalid --quality '{raw}': expected KIND:A:B (e.g. uniform-int:1:10)"
        ));
    };
    let parse = |value: &str| -> Result<f64, String> {
        value
            .parse()
            .map_err(|_| format!("invalid --quality '{raw}': '{value}' is not a number"))
    };
    match kind {
        "uniform" => Ok(QualityDistribution::Uniform {
            low: parse(first)?,
            high: parse(second)?,
        }),
        "uniform-int" => {
            let parse_int = |value: &str| -> Result<i64, String> {
                value
                    .parse()
                    .map_err(|_| format!("invalid --quality '{raw}': '{value}' is not an integer"))
            };
            Ok(QualityDistribution::UniformInt {
                low: parse_int(first)?,
                high: parse_int(second)?,
            })
        }
        "normal" => Ok(QualityDistribution::Normal {
            mean: parse(first)?,
            sd: parse(second)?,
        }),
        _ => Err(format!(
            "invalid --quality '{raw}': unknown distribution '{kind}'"
        )),
    }
}

fn entropy_seed() -> Result<u64, String> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).map_err(|err| format!("unable to read OS entropy: {err}"))?;
    Ok(u64::from_le_bytes(buf))
}
