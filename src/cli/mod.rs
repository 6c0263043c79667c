use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::calendar::ViewMode;

pub mod agenda;
pub mod serve;
pub mod validate;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,

        /// Seed the server with events from a JSON file
        #[arg(long)]
        events: Option<String>,

        /// Default IANA timezone for requests that don't name one
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Print the expanded and laid out view for a date as JSON
    Agenda {
        #[arg(long, value_enum, default_value = "week")]
        view: ViewMode,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        events: Option<String>,

        #[arg(long)]
        timezone: Option<String>,
    },
    /// Check every event in a JSON file
    Validate {
        #[arg(long)]
        events: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

// Logs go to stderr so command output stays parseable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve {
            host,
            port,
            events,
            timezone,
        }) => {
            serve::run(host, port, events, timezone).await?;
        }
        Some(Command::Agenda {
            view,
            date,
            events,
            timezone,
        }) => {
            init_tracing();
            agenda::run(view, date, events, timezone)?;
        }
        Some(Command::Validate { events }) => {
            init_tracing();
            validate::run(&events)?;
        }
        None => {}
    }

    Ok(())
}
