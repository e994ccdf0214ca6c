//! CLI definitions and entry point

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands;
use relman::core::models::MessageKind;
use relman::core::services::parse_iso_date;
use relman::output::OutputMode;

/// relman - Release messages and checklist for release managers
#[derive(Parser, Debug)]
#[command(
    name = "relman",
    version,
    about = "Release messages and checklist for release managers",
    long_about = "Fill in the release form once, then generate the security review and\n\
                  approval messages and work through the release checklist.\n\n\
                  Form values and checklist progress are kept between runs."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update form values
    Set {
        /// Release version (digits.digits.digits)
        #[arg(long = "version", value_name = "VERSION")]
        release_version: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// JSMOPS ticket number (digits only)
        #[arg(short, long)]
        jsmops: Option<String>,

        /// Project name
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Clear all form values
    Clear,

    /// Show form values and whether the messages are ready
    Show {
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Print the composed messages
    Messages {
        /// Print only one message: security, approval
        #[arg(short, long)]
        kind: Option<MessageKind>,

        /// Print even when the form is invalid
        #[arg(long)]
        draft: bool,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Print the next release date
    NextDate {
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Show the release checklist
    Checklist {
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Check or uncheck a checklist item or sub-item
    Toggle {
        /// Item or sub-item ID
        id: String,
    },

    /// Uncheck every checklist item and sub-item
    Reset,

    /// Show configured URLs
    Env,

    /// Show version
    Version,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_iso_date(raw).map_err(|e| e.to_string())
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Set {
            release_version,
            date,
            jsmops,
            project,
        }) => commands::set(
            commands::FormUpdate {
                version: release_version,
                date,
                jsmops,
                project,
            },
            output_mode,
        ),
        Some(Command::Clear) => commands::clear(output_mode),
        Some(Command::Show { today }) => commands::show(today, output_mode),
        Some(Command::Messages { kind, draft, today }) => {
            commands::messages(kind, draft, today, output_mode)
        },
        Some(Command::NextDate { today }) => commands::next_date(today, output_mode),
        Some(Command::Checklist { today }) => commands::checklist(today, output_mode),
        Some(Command::Toggle { id }) => commands::toggle(&id, output_mode),
        Some(Command::Reset) => commands::reset(output_mode),
        Some(Command::Env) => commands::env(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": relman::VERSION
                    })
                );
            } else {
                println!("relman v{}", relman::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": relman::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("relman v{}", relman::VERSION);
                println!("\nRun 'relman --help' for usage");
                println!("Run 'relman set --version <X.Y.Z> --jsmops <N>' to get started");
            }
            Ok(())
        },
    }
}
