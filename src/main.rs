#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # notas
//!
//! Command line front end for the grading calculator. Computes final grades
//! and statuses, class statistics, and evaluates whole classes from a JSON
//! file of student records.
//!
//! Negative numbers are read as flags by the argument parser; pass them after
//! `--`, eg. `notas status -- -1`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use colored::{ColoredString, Colorize};
use dotenvy::dotenv;
use notas::{
    Grade, StudentStatus, batch_calculate_grades, calculate_class_statistics,
    calculate_final_grade, class_statistics_for,
    config::{self, OutputFormat},
    load_records, report, status_for, validate_grade,
};
use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Final grade and status from component scores
    Final {
        /// First partial exam
        np1: Option<f64>,
        /// Second partial exam
        np2: Option<f64>,
        /// Continuous assessment
        ava: Option<f64>,
        /// Integrative project
        pim: Option<f64>,
    },
    /// Status for a final grade
    Status(f64),
    /// Check a single score
    Validate(f64),
    /// Statistics over a list of final grades
    Stats(Vec<f64>),
    /// Evaluate a JSON file of student records
    Batch(PathBuf),
    /// Run the two sample scenarios
    Demo,
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Opts {
    /// Print JSON instead of tables
    json: bool,
    /// What to do
    cmd:  Cmd,
}

/// Parse the command line arguments and return the `Opts`
fn options() -> Opts {
    /// parses an optional component score
    fn component(name: &'static str, help: &'static str) -> impl Parser<Option<f64>> {
        long(name).help(help).argument::<f64>("SCORE").optional()
    }

    /// parses a single grade
    fn g() -> impl Parser<f64> {
        positional::<f64>("GRADE").help("A grade between 0 and 10")
    }

    let np1 = component("np1", "First partial exam score");
    let np2 = component("np2", "Second partial exam score");
    let ava = component("ava", "Continuous assessment score");
    let pim = component("pim", "Integrative project score");
    let final_grade = construct!(Cmd::Final { np1, np2, ava, pim })
        .to_options()
        .command("final")
        .help("Compute a final grade from up to four component scores");

    let status = construct!(Cmd::Status(g()))
        .to_options()
        .command("status")
        .help("Classify a final grade");

    let validate = construct!(Cmd::Validate(g()))
        .to_options()
        .command("validate")
        .help("Check whether a score is a finite number between 0 and 10");

    let grades = positional::<f64>("GRADE")
        .help("Final grades of the class")
        .many();
    let stats = construct!(Cmd::Stats(grades))
        .to_options()
        .command("stats")
        .help("Summarize a list of final grades");

    let file = positional::<PathBuf>("FILE").help("JSON array of student records");
    let batch = construct!(Cmd::Batch(file))
        .to_options()
        .command("batch")
        .help("Compute final grades and statuses for a whole class");

    let demo = pure(Cmd::Demo)
        .to_options()
        .command("demo")
        .help("Run the built-in sample scenarios");

    let json = long("json").help("Print JSON instead of tables").switch();
    let cmd = construct!([final_grade, status, validate, stats, batch, demo]);

    construct!(Opts { json, cmd })
        .to_options()
        .descr("Grading calculator: final grades, student status and class statistics")
        .run()
}

/// Colors a status label for terminal output.
fn colored_status(status: StudentStatus) -> ColoredString {
    match status {
        StudentStatus::Aprovado => status.as_str().green(),
        StudentStatus::Recuperacao => status.as_str().yellow(),
        StudentStatus::Reprovado => status.as_str().red(),
        StudentStatus::EmAndamento => status.as_str().blue(),
    }
}

/// Prints a final grade and the matching status.
fn print_final(label: &str, final_grade: f64, output: OutputFormat) -> Result<()> {
    let final_grade = (final_grade >= 0.0).then_some(final_grade);
    let status = status_for(final_grade);

    match output {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "final_grade": final_grade,
                "status": status,
            }))?
        ),
        OutputFormat::Table => {
            match final_grade {
                Some(g) => println!("{label}: {g:.2}"),
                None => println!("{label}: not enough components"),
            }
            println!("Status: {}", colored_status(status));
        }
    }
    Ok(())
}

/// Runs the two fixed sample scenarios.
fn demo(output: OutputFormat) -> Result<()> {
    let ava = Grade::valid(9.0);
    let pim = Grade::valid(8.0);

    let complete = calculate_final_grade(Grade::valid(8.5), Grade::valid(7.0), ava, pim);
    print_final("Final grade", complete, output)?;

    let with_invalid =
        calculate_final_grade(Grade::new(-1.0, false), Grade::new(11.0, true), ava, pim);
    print_final("Final grade with invalid components", with_invalid, output)
}

fn main() -> Result<()> {
    dotenv().ok();

    let config = config::get().context("Could not read configuration")?;

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(fmt)
        .with(config.log_level())
        .init();

    let opts = options();
    let output = if opts.json {
        OutputFormat::Json
    } else {
        config.output()
    };

    match opts.cmd {
        Cmd::Final { np1, np2, ava, pim } => {
            let final_grade =
                calculate_final_grade(np1.into(), np2.into(), ava.into(), pim.into());
            print_final("Final grade", final_grade, output)?;
        }
        Cmd::Status(g) => {
            let status = notas::get_student_status(g);
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string(&status)?),
                OutputFormat::Table => println!("{}", colored_status(status)),
            }
        }
        Cmd::Validate(g) => println!("{}", validate_grade(g)),
        Cmd::Stats(grades) => {
            let stats = calculate_class_statistics(&grades, grades.len() as i64);
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json!({
                    "stats": stats,
                    "approval_rate": stats.approval_rate(),
                }))?),
                OutputFormat::Table => println!("{}", report::stats_table(&stats)),
            }
        }
        Cmd::Batch(path) => {
            let records = load_records(&path)
                .with_context(|| format!("Failed to evaluate {}", path.display()))?;
            let results = batch_calculate_grades(&records);
            let stats = class_statistics_for(&results);
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json!({
                    "results": results,
                    "stats": stats,
                    "approval_rate": stats.approval_rate(),
                }))?),
                OutputFormat::Table => {
                    println!("{}", report::results_table(&results));
                    println!("{}", report::stats_table(&stats));
                }
            }
        }
        Cmd::Demo => demo(output)?,
    };

    Ok(())
}
