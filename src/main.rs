//! showcase - command-line companion for the extension showcase
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ext_showcase::commands::{self, Project};

/// Inspect and validate the extension showcase data
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Inspect and validate the extension showcase data", long_about = None)]
struct Args {
    /// Project root containing showcase.toml and data/
    #[arg(long, value_name = "DIR", global = true)]
    root: Option<PathBuf>,

    /// Data file to read instead of the configured one
    #[arg(long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every extension in data order
    List,
    /// Show one extension's details
    Show {
        /// Slug of the extension
        slug: String,
    },
    /// Print the JSON-LD block emitted on an extension's detail page
    JsonLd {
        /// Slug of the extension
        slug: String,
    },
    /// Validate the data file and its screenshots
    Check,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    ext_showcase::logging::init(args.verbose);

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let project = Project::open(&root, args.data.as_deref());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let ok = match args.command {
        Command::List => {
            commands::list(&project.catalog(), &mut out)?;
            true
        }
        Command::Show { slug } => commands::show(&project.catalog(), &slug, &mut out)?,
        Command::JsonLd { slug } => {
            commands::json_ld(&project.catalog(), &slug, &project.settings, &mut out)?
        }
        Command::Check => commands::check(&project, &mut out)?,
    };
    out.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
