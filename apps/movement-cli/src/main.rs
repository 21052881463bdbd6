//! Movement CLI - query and import bridge pairs movements.
//!
//! The built-in catalog plus every file in `MOVEMENT_DIR` is loaded on each
//! run. `import --save` copies a file into that folder so later runs see it.

mod error;
mod output;
mod types;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use error::CliError;
use movements::domain::importer::MOVEMENT_FILE_EXTENSION;
use movements::domain::{import_dir, import_file, write_movement};
use movements::{Catalog, Decoder, MovementConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use types::{MovementSummary, OutputFormat, PairRound};

#[derive(Parser)]
#[command(name = "movement")]
#[command(about = "Bridge pairs movement catalog")]
struct Args {
    /// Output format for query commands
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List movements, optionally only those for a field size
    List {
        #[arg(long, requires = "pairs")]
        rounds: Option<u32>,
        #[arg(long, requires = "rounds")]
        pairs: Option<u32>,
    },
    /// Show the games of one round or of the whole movement
    Show {
        /// Movement name (defaults to MOVEMENT_DEFAULT)
        #[arg(short, long)]
        movement: Option<String>,
        #[arg(long)]
        round: Option<u32>,
        /// Order each round by board instead of NS pair
        #[arg(long)]
        by_board: bool,
    },
    /// Every game that plays a board
    Board {
        #[arg(short, long)]
        movement: Option<String>,
        board: u32,
    },
    /// Table, side and opponent of a pair in every round
    Pair {
        #[arg(short, long)]
        movement: Option<String>,
        pair: u32,
    },
    /// Import a movement file
    Import {
        file: PathBuf,
        /// Replace a movement with the same name
        #[arg(long)]
        replace: bool,
        /// Copy the file into MOVEMENT_DIR
        #[arg(long)]
        save: bool,
    },
    /// Write a movement in the interchange text format
    Export {
        #[arg(short, long)]
        movement: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Silent by default; RUST_LOG wins over --verbose
    let fallback = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = MovementConfig::from_env()?;
    let mut catalog = load_catalog(&config)?;
    let format = args.format;

    match args.command {
        Command::List { rounds, pairs } => {
            let rows: Vec<MovementSummary> = catalog
                .iter()
                .filter(|(_, record)| match (rounds, pairs) {
                    (Some(r), Some(p)) => record.rounds() == r && record.pairs() == p,
                    _ => true,
                })
                .map(|(id, record)| MovementSummary {
                    id,
                    name: record.name().to_string(),
                    rounds: record.rounds(),
                    tables: record.tables(),
                    pairs: record.pairs(),
                })
                .collect();
            print(&output::movements(format, &rows)?)
        }
        Command::Show {
            movement,
            round,
            by_board,
        } => {
            let d = decoder(&catalog, &config, movement)?;
            let rounds = match round {
                Some(round) => {
                    check_range(&d, "round", round, d.rounds())?;
                    round..=round
                }
                None => 1..=d.rounds(),
            };
            let games: Vec<_> = rounds.flat_map(|r| d.round_info(r, by_board)).collect();
            print(&output::games(format, &games)?)
        }
        Command::Board { movement, board } => {
            let d = decoder(&catalog, &config, movement)?;
            print(&output::games(format, &d.board_info(board))?)
        }
        Command::Pair { movement, pair } => {
            let d = decoder(&catalog, &config, movement)?;
            check_range(&d, "pair", pair, d.pairs())?;
            let rows: Vec<PairRound> = (1..=d.rounds())
                .map(|round| {
                    let seat = d.seat_of(pair, round);
                    PairRound {
                        round,
                        table: seat.table(),
                        orientation: seat.orientation(),
                        opponent: d.opponent_of(pair, round),
                        board: d.board_at(seat.table(), round),
                    }
                })
                .collect();
            print(&output::pair_rounds(format, &rows)?)
        }
        Command::Import {
            file,
            replace,
            save,
        } => {
            // Checked before importing.
            let target = save.then(|| save_target(&config, &file)).transpose()?;
            let id = import_file(&mut catalog, &file, replace)?;
            let name = catalog.name_of(id).unwrap_or_default();
            println!("imported '{name}' as movement {id}");
            if let Some(target) = target {
                fs::copy(&file, &target).map_err(|source| CliError::Write {
                    path: target.clone(),
                    source,
                })?;
                info!(file = %target.display(), "Saved movement file");
                println!("saved to {}", target.display());
            }
            Ok(())
        }
        Command::Export { movement, output } => {
            let d = decoder(&catalog, &config, movement)?;
            match output {
                Some(path) => {
                    let file = fs::File::create(&path).map_err(|source| CliError::Write {
                        path: path.clone(),
                        source,
                    })?;
                    write_movement(&d, file).map_err(|source| CliError::Write { path, source })
                }
                None => write_movement(&d, io::stdout().lock()).map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                }),
            }
        }
    }
}

fn load_catalog(config: &MovementConfig) -> Result<Catalog, CliError> {
    let mut catalog = Catalog::with_builtins();
    if let Some(dir) = &config.movement_dir {
        let outcome = import_dir(&mut catalog, dir)?;
        for (path, err) in &outcome.failed {
            warn!(file = %path.display(), code = %err.code(), "Skipped movement file: {err}");
        }
    }
    debug!(movements = catalog.len(), "Catalog ready");
    Ok(catalog)
}

fn decoder(
    catalog: &Catalog,
    config: &MovementConfig,
    movement: Option<String>,
) -> Result<Decoder, CliError> {
    let name = movement.unwrap_or_else(|| config.default_movement.clone());
    let d = Decoder::from_name(catalog, &name);
    if d.is_ok() {
        Ok(d)
    } else {
        Err(CliError::UnknownMovement(name))
    }
}

fn check_range(d: &Decoder, what: &'static str, value: u32, max: u32) -> Result<(), CliError> {
    if (1..=max).contains(&value) {
        return Ok(());
    }
    Err(CliError::OutOfRange {
        what,
        value,
        max,
        movement: d.name().to_string(),
    })
}

/// Where `--save` puts `file`: the movement folder, under the file's stem
/// with the movement extension so the next run loads it.
fn save_target(config: &MovementConfig, file: &Path) -> Result<PathBuf, CliError> {
    let dir = config.movement_dir.as_ref().ok_or(CliError::NoMovementDir)?;
    let mut file_name = file.file_stem().unwrap_or(file.as_os_str()).to_os_string();
    file_name.push(".");
    file_name.push(MOVEMENT_FILE_EXTENSION);

    let same_folder = match (fs::canonicalize(file), fs::canonicalize(dir)) {
        (Ok(file), Ok(dir)) => file.parent() == Some(dir.as_path()),
        _ => false,
    };
    if same_folder {
        return Err(CliError::AlreadySaved(file.to_path_buf()));
    }
    Ok(dir.join(file_name))
}

fn print(text: &str) -> Result<(), CliError> {
    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .map_err(|source| CliError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
