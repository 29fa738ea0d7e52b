//! # zod-openapi
//!
//! CLI tool for converting serialized Zod model documents into OpenAPI schemas.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a model and print the schema
//! zod-openapi convert model.json
//!
//! # Write to a file as compact JSON
//! zod-openapi convert model.json --output schema.json --compact
//!
//! # Preview what would be written
//! zod-openapi convert model.json --output schema.json --dry-run
//!
//! # Initialize configuration
//! zod-openapi init
//!
//! # Check a committed schema is up-to-date
//! zod-openapi check model.json --against schema.json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use zod_openapi_cli::{
    check_file,
    config::{CliArgs, ConfigManager, CONFIG_FILENAME},
    convert_to_string,
    error::CliError,
    logging,
    writer::{FileWriter, WriteResult},
    CheckOutcome,
};

#[derive(Parser)]
#[command(name = "zod-openapi")]
#[command(author, version, about = "Convert Zod model schemas to OpenAPI schemas", long_about = None)]
struct Cli {
    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a model document to an OpenAPI schema
    Convert {
        /// Model document (JSON with `schema` and `properties`)
        input: PathBuf,

        /// Output file for the schema (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Nesting depth beyond which nodes are emitted as {}
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Initialize a new zod-openapi configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Check that an existing schema matches the model
    Check {
        /// Model document
        input: PathBuf,

        /// Existing OpenAPI schema to compare against
        #[arg(short, long)]
        against: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
            dry_run,
            config,
            max_depth,
        } => cmd_convert(input, output, compact, dry_run, config, max_depth),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Check {
            input,
            against,
            config,
        } => cmd_check(input, against, config),
    }
}

/// Convert command implementation.
fn cmd_convert(
    input: PathBuf,
    output: Option<PathBuf>,
    compact: bool,
    dry_run: bool,
    config_path: Option<PathBuf>,
    max_depth: Option<usize>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            pretty: compact.then_some(false),
            max_depth,
        },
    );

    let content = convert_to_string(&input, &config)?;

    let Some(output_path) = config.output.file.as_deref() else {
        print!("{}", content);
        return Ok(());
    };

    let writer = FileWriter::new(dry_run);
    match writer.write(output_path, &content)? {
        WriteResult::Written { path, bytes } => {
            eprintln!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            print!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(format!(
            "Configuration file already exists: {}",
            output.display()
        )));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Check command implementation.
fn cmd_check(
    input: PathBuf,
    against: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;

    match check_file(&input, &against, &config)? {
        CheckOutcome::UpToDate => {
            println!("{} Schema is up-to-date", "✓".green());
            Ok(())
        }
        CheckOutcome::OutOfDate { .. } => {
            println!("{} Schema is out of date", "✗".red());
            println!("  Run 'zod-openapi convert' to update");
            Err(CliError::Validation(format!(
                "{} does not match {}",
                against.display(),
                input.display()
            )))
        }
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
