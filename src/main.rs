use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};

use medscreen::error::RequestError;
use medscreen::evaluation::EvaluationReport;
use medscreen::inference::ScreeningSession;
use medscreen::store::ModelStore;
use medscreen::ui::cli::args::{Cli, Command, EvaluateArgs, PredictArgs, parse_disease};
use medscreen::ui::cli::prompts::prompt_fields;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "{BOLD}{FG_CYAN}▶ Patient Sickness Screening{RESET}  {}",
        timestamp_now()
    );
    println!("{FG_GREY}────────────────────────────────────────────────────────{RESET}");

    let store = ModelStore::open(&cli.models_dir).with_context(|| {
        format!(
            "failed to load model artifacts from {}",
            cli.models_dir.display()
        )
    })?;
    let session = ScreeningSession::new(&store);

    match cli.command {
        Command::Predict(args) => run_predict(&session, args),
        Command::Evaluate(args) => run_evaluate(&session, args),
    }
}

fn run_predict(session: &ScreeningSession<'_>, args: PredictArgs) -> Result<()> {
    let kind = parse_disease(&args.disease)?;
    let raw = match &args.input {
        Some(path) => read_field_map(path)?,
        None => prompt_fields(session.schema(kind))
            .context("failed while prompting for field values")?,
    };

    let outcome = if args.probability {
        session.predict_with_probability(kind, &raw)
    } else {
        session.predict(kind, &raw)
    };

    match outcome {
        Ok(result) => {
            println!("{FG_GREEN}{BOLD}✔ {}{RESET}", result.diagnosis());
            if let Some(p) = result.probability {
                println!("  {DIM}positive-class probability{RESET} {p:.4}");
            }
            if args.report {
                match session.evaluate(kind) {
                    Ok(report) => print_report(&report),
                    Err(err) => print_request_error(&err),
                }
            }
        }
        Err(err) => print_request_error(&err),
    }
    Ok(())
}

fn run_evaluate(session: &ScreeningSession<'_>, args: EvaluateArgs) -> Result<()> {
    let kind = parse_disease(&args.disease)?;
    match session.evaluate(kind) {
        Ok(report) => print_report(&report),
        Err(err) => print_request_error(&err),
    }
    Ok(())
}

fn read_field_map(path: &Path) -> Result<Map<String, Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read field map {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON object of field values", path.display()))
}

/// Per-request failures are rendered and swallowed; the process stays up
/// for other requests and exits cleanly.
fn print_request_error(err: &RequestError) {
    println!("{FG_RED}✗ {err}{RESET}");
}

fn print_report(report: &EvaluationReport) {
    use strum::EnumMessage;

    let cells = report.confusion.cells();
    println!();
    println!(
        "{BOLD}{} held-out evaluation{RESET}",
        report.disease.get_message().unwrap_or("Model")
    );
    println!("{BOLD}Confusion Matrix{RESET}  {DIM}rows = truth, cols = predicted{RESET}");
    println!("{DIM}          pred 0   pred 1{RESET}");
    println!("  true 0  {:>7}  {:>7}", cells[0][0], cells[0][1]);
    println!("  true 1  {:>7}  {:>7}", cells[1][0], cells[1][1]);
    println!(
        "  {DIM}samples{RESET} {}  {DIM}accuracy{RESET} {:.4}",
        report.confusion.total(),
        report.confusion.accuracy()
    );
    println!();
    println!(
        "{BOLD}Precision-Recall{RESET}  {DIM}{} points{RESET}  AUC {FG_CYAN}{:.4}{RESET}",
        report.curve.points.len(),
        report.curve.auc
    );
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
