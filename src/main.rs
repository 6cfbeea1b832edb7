//! when-then - runs a declarative When/Then test case
//!
//! Takes the path of a YAML descriptor, executes its trigger, evaluates its
//! assertion and prints the result.

use clap::Parser;
use colored::Colorize;
use std::error::Error as _;
use when_then::commands::RunOptions;
use when_then::{cli, common::logging};

#[derive(Parser)]
#[command(name = "when-then", about = "Runs declarative When/Then test cases")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: RunOptions,
}

fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.options.verbose);

    if let Err(e) = cli::dispatch(cli.options) {
        let message = e.to_string();
        eprintln!("{} {message}", "Error:".red().bold());

        // Causes already embedded in the message are not repeated
        let mut source = e.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                eprintln!("  caused by: {cause_text}");
            }
            source = cause.source();
        }
        std::process::exit(1);
    }
}
