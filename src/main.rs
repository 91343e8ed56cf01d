//! Heroes of Cordan content template generator.
//!
//! Usage:
//!   cordan [OPTIONS]
//!
//! Examples:
//!   cordan                          # Write heroes_of_cordan.json
//!   cordan -o content/tiers.json    # Write somewhere else
//!   cordan --stdout --summary       # Print the template, summary on stderr
//!   cordan --check                  # Validate the assignment tables only

use cordan::build_info;
use cordan::content::tables::{self, ALL_TABLES};
use cordan::content::{self, ContentSummary};
use cordan::core::constants::DEFAULT_OUTPUT_FILE;
use cordan::TemplateError;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

struct CliConfig {
    output: PathBuf,
    stdout: bool,
    check_only: bool,
    summary: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            stdout: false,
            check_only: false,
            summary: false,
        }
    }
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config.output = PathBuf::from(path),
                    None => {
                        eprintln!("--output requires a file name");
                        process::exit(1);
                    }
                }
            }
            "--stdout" => config.stdout = true,
            "--check" => config.check_only = true,
            "--summary" => config.summary = true,
            "-v" | "--version" => {
                println!(
                    "cordan {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                process::exit(0);
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Heroes of Cordan Content Template Generator\n\
         \n\
         Usage: cordan [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -o, --output FILE   Write the template to FILE (default: {DEFAULT_OUTPUT_FILE})\n\
         \x20 --stdout            Print the template instead of writing a file\n\
         \x20 --check             Validate the assignment tables only\n\
         \x20 --summary           Print the resource distribution summary\n\
         \x20 -v, --version       Show version information\n\
         \x20 -h, --help          Show this help"
    );
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "cordan=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &CliConfig) -> Result<(), TemplateError> {
    if config.check_only {
        tables::validate_all()?;
        for table in ALL_TABLES {
            println!(
                "  {:<12} ok  (modulus {}, {} rules)",
                table.group,
                table.modulus,
                table.rules().count()
            );
        }
        return Ok(());
    }

    let template = content::build()?;

    if config.stdout {
        println!("{}", content::to_json(&template)?);
    } else {
        content::write_template(&config.output, &template)?;
        println!("Template saved to: {}", config.output.display());
    }

    if config.summary {
        let report = ContentSummary::from_content(&template).to_text();
        // Keep stdout clean when it carries the template
        if config.stdout {
            eprintln!("{report}");
        } else {
            println!("{report}");
        }
    }

    Ok(())
}

fn main() {
    init_logging();
    let config = parse_args();

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
