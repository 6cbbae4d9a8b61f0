use std::io;
use std::time::Duration;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pymines_core::{Board, CellCount, Coord, DEFAULT_CONFIG, GameConfig, RandomMineGenerator};
use tracing_subscriber::filter::LevelFilter;

use crate::game::RoundPolicy;
use crate::render::Renderer;

mod command;
mod game;
mod render;

/// Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_CONFIG.rows)]
    rows: Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_CONFIG.cols)]
    cols: Coord,

    /// Number of hidden mines
    #[arg(long, default_value_t = DEFAULT_CONFIG.mines)]
    mines: CellCount,

    /// Seed for mine placement; each following round uses the next seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// How long a finished board stays up before the next round, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pause_ms: u64,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn init_logging(filter: log::LevelFilter) {
    let level = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let config = GameConfig::new(args.rows, args.cols, args.mines)?;
    log::info!("Starting with {:?}", config);

    let new_board = |round: u32| match args.seed {
        Some(seed) => Board::with_generator(
            config,
            RandomMineGenerator::new(seed.wrapping_add(round.into())),
        ),
        None => Board::new(config.rows, config.cols, config.mines),
    };
    let policy = RoundPolicy {
        rounds: args.rounds,
        pause: Duration::from_millis(args.pause_ms),
    };

    let mut renderer = Renderer::new(io::stdout().lock());
    renderer.message("Welcome to Minesweeper! Type `h` for help.")?;
    let summary = game::run(new_board, io::stdin().lock(), &mut renderer, &policy)?;
    renderer.message(format_args!(
        "Rounds won: {}, rounds lost: {}",
        summary.won, summary.lost
    ))?;

    Ok(())
}
