use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minesweep_core::*;

use command::{Command, HELP};

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => Difficulty::Beginner,
            Preset::Intermediate => Difficulty::Intermediate,
            Preset::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, individual values can be overridden below
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    difficulty: Preset,

    /// Number of columns
    #[arg(long)]
    width: Option<Coord>,

    /// Number of rows
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines
    #[arg(long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Resume a game saved with the `s` command
    #[arg(short, long, conflicts_with_all = ["width", "height", "mines", "seed"])]
    load: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let preset = Difficulty::from(self.difficulty).config();
        GameConfig::new(
            self.width.unwrap_or(preset.width),
            self.height.unwrap_or(preset.height),
            self.mines.unwrap_or(preset.mines),
        )
        .context("Board needs at least one row and column and fewer mines than cells")
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
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

fn load_game(path: &Path) -> Result<GameState> {
    let bytes = fs::read(path).with_context(|| format!("Could not read {}", path.display()))?;
    GameState::deserialize(&bytes).with_context(|| format!("Could not load {}", path.display()))
}

fn save_game(game: &GameState, path: &Path) -> Result<()> {
    let bytes = game.serialize()?;
    fs::write(path, bytes).with_context(|| format!("Could not write {}", path.display()))
}

/// Applies one command. Returns `false` when the player wants to stop.
fn apply(game: &mut GameState, command: Command) -> bool {
    let outcome = match command {
        Command::Reveal(coords) => game.reveal(coords).map(|outcome| {
            if outcome.is_blocked() {
                println!("You must unflag this cell before revealing it.");
            }
        }),
        Command::Flag(coords) => game.toggle_flag(coords).map(|outcome| {
            if !outcome.has_update() {
                println!("Only unrevealed cells can be flagged.");
            }
        }),
        Command::Save(path) => {
            match save_game(game, &path) {
                Ok(()) => println!("Saved to {}.", path.display()),
                Err(err) => println!("{err:#}"),
            }
            Ok(())
        }
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Quit => return false,
    };

    if let Err(GameError::OutOfBounds) = outcome {
        let (rows, cols) = game.size();
        println!(
            "Rows go from 0 to {} and columns from 0 to {}.",
            rows - 1,
            cols - 1
        );
    } else if let Err(err) = outcome {
        println!("{err}");
    }
    true
}

fn run(mut game: GameState) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Minesweeper!");
    println!("{HELP}");
    print!("{}", render::board(&game));

    while !game.done() {
        println!("{}", render::status(&game));
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("Could not read input")?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        if !apply(&mut game, command) {
            return Ok(());
        }
        print!("{}", render::board(&game));
    }

    if game.lost() {
        println!("You lost!");
        game.reveal_all_mines();
    } else {
        println!("You won!");
    }
    print!("{}", render::board(&game));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let game = match &args.load {
        Some(path) => load_game(path)?,
        None => {
            let config = args.game_config()?;
            let seed = args.seed.unwrap_or_else(rand::random);
            log::info!("seed: {}", seed);
            GameState::generate(config, seed)?
        }
    };

    run(game)
}
