//! Command-line interface implementation for Kiln.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::TEMPLATE_DIR_ENV;
use crate::parser::parse_var;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for Kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kiln: project scaffolding tool", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding template definitions (default: ~/.config/kiln/templates)
    #[arg(long, global = true, value_name = "DIR", env = TEMPLATE_DIR_ENV)]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print plain output without decoration
    #[arg(long, global = true)]
    pub dont_prettify: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the kiln version information
    Version,

    /// Render a single template against a data mapping
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Template file path (absolute, relative, or under the template directory)
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Treat TEMPLATE as template text instead of a path
    #[arg(short, long)]
    pub inline: bool,

    /// JSON or YAML file with the data mapping
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Read the data mapping as JSON from stdin
    #[arg(short, long, conflicts_with = "data")]
    pub stdin: bool,

    /// Set a single data key; repeatable, overrides --data/--stdin
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, serde_json::Value)>,

    /// Write the rendered output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 after printing help if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
