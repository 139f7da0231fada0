mod commands;
mod prompt;
mod report;
mod tui;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use attendance_core::{load_config, AppConfig, AppContext, AttendanceError};
use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::prompt::Prompter;

#[derive(Parser)]
#[command(name = "attendance")]
#[command(about = "Track class attendance against your weekly schedule", long_about = None)]
struct Cli {
    /// Directory for the database, log and config.toml (default: ~/.attendance)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write an empty weekly schedule sheet (Day, Class1..Class6)
    Template {
        path: Option<PathBuf>,
    },
    /// Register classes from a filled-in schedule sheet
    Register {
        path: Option<PathBuf>,
    },
    /// Show today's classes
    Today {
        /// Weekday to show instead of today (e.g. "mon", "tomorrow")
        #[arg(long)]
        day: Option<String>,
    },
    /// Mark absences for today's classes
    Absent {
        #[arg(long)]
        day: Option<String>,
        /// Classes missed; asks per class when omitted
        classes: Vec<String>,
    },
    /// Mark cancelled classes for today
    Cancel {
        #[arg(long)]
        day: Option<String>,
        /// Classes cancelled; asks per class when omitted
        classes: Vec<String>,
    },
    /// Show attendance percentages
    Report {
        #[arg(long)]
        json: bool,
    },
    /// Export attendance to CSV
    Export {
        path: Option<PathBuf>,
    },
    /// Delete every class, absence and cancellation
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn init_logging(config: &AppConfig, verbose: bool, console: bool) -> Result<()> {
    let log_path = config.log_path();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let file_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    let console_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // The TUI owns the terminal, so it only logs to the file.
    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_filter(console_filter)
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .with(console_layer)
        .init();
    Ok(())
}

fn run(command: Option<Commands>, ctx: &mut AppContext) -> Result<()> {
    let Some(command) = command else {
        return tui::run(ctx);
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match command {
        Commands::Template { path } => commands::template(&mut prompter, path),
        Commands::Register { path } => commands::register(ctx, &mut prompter, path),
        Commands::Today { day } => commands::today(ctx, &mut prompter, day.as_deref()),
        Commands::Absent { day, classes } => {
            commands::absent(ctx, &mut prompter, day.as_deref(), classes)
        }
        Commands::Cancel { day, classes } => {
            commands::cancel(ctx, &mut prompter, day.as_deref(), classes)
        }
        Commands::Report { json } => commands::show_report(ctx, &mut prompter, json),
        Commands::Export { path } => commands::export(ctx, &mut prompter, path),
        Commands::Reset { yes } => commands::reset(ctx, &mut prompter, yes),
        Commands::Tui => tui::run(ctx),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.data_dir)?;

    let console = !matches!(cli.command, Some(Commands::Tui) | None);
    init_logging(&config, cli.verbose, console)?;

    let mut ctx = AppContext::open(config).context("opening attendance database")?;

    match run(cli.command, &mut ctx) {
        Err(e) if e.downcast_ref::<AttendanceError>().is_some_and(AttendanceError::is_no_selection) => {
            warn!("No file selected. Operation cancelled.");
            println!("No file selected. Operation cancelled.");
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
        ok => ok,
    }
}
