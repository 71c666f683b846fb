use std::env;
use std::error::Error;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use txtsim::{compare_files, ComparisonReport, TxtsimConfig};

fn print_usage() {
    eprintln!("usage: txtsim <file1> <file2> [--config <config.yaml>] [--json]");
}

fn print_report(report: &ComparisonReport) {
    println!("similarity: {:.2}%", report.aggregate);
    println!("  word likeness:      {:.2}%", report.scores.word_likeness);
    println!("  jaccard:            {:.2}%", report.scores.jaccard);
    println!("  cosine:             {:.2}%", report.scores.cosine);
    match report.scores.token_closeness {
        Some(score) => println!("  token closeness:    {score:.2}%"),
        None => println!("  token closeness:    unavailable"),
    }
    match report.scores.raw_text_closeness {
        Some(score) => println!("  raw text closeness: {score:.2}%"),
        None => println!("  raw text closeness: unavailable"),
    }
    if let Some(score) = report.line_likeness {
        println!("  line likeness:      {score:.2}%");
    }
    if report.embedding_degraded {
        println!("note: embedding backend unavailable, aggregate uses lexical metrics only");
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut files: Vec<String> = Vec::new();
    let mut config_path: Option<String> = None;
    let mut as_json = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().ok_or("--config requires a path")?);
            }
            "--json" => as_json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => files.push(arg),
        }
    }

    let [left, right] = files.as_slice() else {
        print_usage();
        return Err("expected exactly two input files".into());
    };

    let cfg = match config_path {
        Some(path) => TxtsimConfig::from_file(path)?,
        None => TxtsimConfig::default(),
    };

    let report = compare_files(left, right, &cfg)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
