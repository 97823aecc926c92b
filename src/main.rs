use std::{env, fmt, path::PathBuf, process::ExitCode};

use clap::Parser;

use crate::{
    model::summoner::Region,
    output::sink::{OutputError, OutputSink},
    service::{
        aggregate::{aggregate_masteries, aggregate_runes},
        classify::InvalidSlotIndex,
        data_manager::{DataManager, DataManagerInitError, DataRetrievalError},
        format::format_build,
    },
};

mod model;
mod output;
mod service;

const API_KEY_VAR: &str = "RIOT_API_KEY";

/// Summarizes a summoner's currently equipped rune and mastery build into
/// short lines for a stream overlay.
#[derive(Parser)]
#[command(name = "leaguefriend", version)]
struct Args {
    /// Summoner to look up
    summoner_name: String,
    /// Platform region: EUW, EUNE, NA, TR, RU, OCE, LAS, LAN or BR
    region: Region,
    /// Existing directory the text files and overlay page are written to
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Ok(api_key) = env::var(API_KEY_VAR) else {
        eprintln!("You must put your api key in the {} environment variable.", API_KEY_VAR);
        return ExitCode::FAILURE;
    };

    if !args.output_dir.is_dir() {
        eprintln!("Output directory does not exist: {}", args.output_dir.display());
        return ExitCode::FAILURE;
    }

    match run(&args, api_key) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Run failed for {} on {}: {}", args.summoner_name, args.region, error);
            ExitCode::FAILURE
        }
    }
}

/// One full pipeline pass: summoner lookup, liveness probe, fetches,
/// aggregation, formatting, output. Strictly sequential; the first failed
/// step ends the run before anything is written.
fn run(args: &Args, api_key: String) -> Result<(), RunError> {
    let sink = OutputSink::new(&args.output_dir);
    let manager = DataManager::new(api_key, args.region, &args.summoner_name)?;

    if !manager.is_game_active()? {
        sink.reset_outputs()?;
        println!("No active game for {}; outputs reset.", manager.get_summoner().name);
        return Ok(());
    }

    let rune_pages = manager.get_rune_pages()?;
    let mastery_pages = manager.get_mastery_pages()?;
    let catalog = manager.get_mastery_tree_catalog()?;

    let aggregates = aggregate_runes(rune_pages)?;
    let counts = aggregate_masteries(mastery_pages, catalog);
    let summary = format_build(&aggregates, &counts);

    sink.write_summary(&summary)?;
    for (_, line) in &summary.lines {
        println!("{}", line);
    }

    Ok(())
}

#[derive(Debug)]
enum RunError {
    Init(DataManagerInitError),
    Data(DataRetrievalError),
    BadSlot(InvalidSlotIndex),
    Output(OutputError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Init(err) => write!(f, "{}", err),
            RunError::Data(err) => write!(f, "{}", err),
            RunError::BadSlot(err) => write!(f, "{}", err),
            RunError::Output(err) => write!(f, "{}", err),
        }
    }
}

impl From<DataManagerInitError> for RunError {
    fn from(error: DataManagerInitError) -> Self {
        RunError::Init(error)
    }
}

impl From<DataRetrievalError> for RunError {
    fn from(error: DataRetrievalError) -> Self {
        RunError::Data(error)
    }
}

impl From<InvalidSlotIndex> for RunError {
    fn from(error: InvalidSlotIndex) -> Self {
        RunError::BadSlot(error)
    }
}

impl From<OutputError> for RunError {
    fn from(error: OutputError) -> Self {
        RunError::Output(error)
    }
}
