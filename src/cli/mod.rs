//! CLI command handling
//!
//! Runs a descriptor and prints the result, or lists the registry.

use colored::Colorize;

use crate::behavior::registry::{self, Registration};
use crate::commands::RunOptions;
use crate::common::config::{Config, OutputFormat};
use crate::common::{Error, Result};
use crate::testing::{self, TestResult};

/// Dispatch the parsed command line
pub fn dispatch(options: RunOptions) -> Result<()> {
    if options.list_behaviors {
        print_behaviors();
        return Ok(());
    }

    let path = options.descriptor.ok_or(Error::DescriptorPathMissing)?;

    let config = match &options.config {
        Some(config_path) => Config::load_from(config_path)?,
        None => Config::load()?,
    };
    let format = options.format.unwrap_or(config.output.format);

    let result = testing::run_descriptor(&path, &config.workspace)?;
    print_result(&result, format)
}

fn print_result(result: &TestResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", result.passed),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn print_behaviors() {
    println!("{}", "Triggers:".cyan());
    print_table(registry::triggers());
    println!("\n{}", "Assertions:".cyan());
    print_table(registry::assertions());
}

fn print_table<B: ?Sized>(table: &[Registration<B>]) {
    for entry in table {
        println!(
            "  {:<16} {:<22} {}",
            entry.identifier.bold(),
            entry.name.dimmed(),
            entry.description
        );
    }
}
