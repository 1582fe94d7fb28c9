//! asymmetric-error main module.

#![deny(warnings)]
#![deny(missing_docs)]

mod cli;

use asymmetric_error::{summarize, Distribution};
use std::error::Error;
use std::io::Read;
use tracing::{debug, error};

fn main() {
    init_logger();
    if let Err(err) = execute(cli::application()) {
        error!("{}", err);
        std::process::exit(1);
    }
}

/// Initializes the logger.
fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    // stdout carries the summary itself
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Summarizes the samples named on the command line or piped through stdin.
fn execute(app: cli::Application) -> Result<(), Box<dyn Error>> {
    let tokens = if app.values.is_empty() {
        read_stdin()?
    } else {
        app.values.clone()
    };
    debug!("Read {} samples", tokens.len());

    let distribution = Distribution::parse(&tokens)?;
    let result = summarize(&distribution, &app.options())?;
    println!("{}", result);
    Ok(())
}

/// Reads all of stdin as sample tokens.
fn read_stdin() -> std::io::Result<Vec<String>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(split_samples(&input))
}

/// Splits text into sample tokens on whitespace and commas.
fn split_samples(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
