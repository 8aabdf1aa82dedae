mod cmd;
mod logging;

use clap::{Parser, Subcommand};
use scrollcal::{CalendarDate, SelectionMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrollcal", version, about = "Scrolling month calendar")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default config.yaml and events.json
    Init,
    /// Print the loaded months
    Show {
        /// Pages of earlier months to load first
        #[arg(long, default_value_t = 0)]
        before: u32,
        /// Pages of later months to load first
        #[arg(long, default_value_t = 0)]
        after: u32,
    },
    /// Click one or more dates (YYYY-MM-DD)
    Click {
        #[arg(required = true)]
        dates: Vec<CalendarDate>,
    },
    /// Jump to the month of a date (YYYY-MM-DD)
    Goto { date: CalendarDate },
    /// Clear the selection
    Clear,
    /// Switch selection mode: none, single, multiple or range
    Mode { mode: SelectionMode },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Resolve data_dir to an absolute path so file I/O is unaffected by later
    // directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    scrollcal::data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::show::run(0, 0),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Show { before, after }) => cmd::show::run(before, after),
        Some(Commands::Click { dates }) => cmd::select::click(&dates),
        Some(Commands::Goto { date }) => cmd::goto::run(date),
        Some(Commands::Clear) => cmd::select::clear(),
        Some(Commands::Mode { mode }) => cmd::select::mode(mode),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
