//! `bao`: play, record, and replay games from the command line.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bao_engine::game::replay;
use bao_engine::{GameConfig, Greedy, MovePolicy, PitId, Session, UniformRandom};

/// Bao rule engine
#[derive(Parser, Debug)]
#[command(name = "bao")]
#[command(about = "Play, record, and replay bao games", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML game config; defaults apply if the file is missing
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play self-play games and print their scores
    Random {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: usize,

        /// Seed for move choice
        #[arg(short, long, default_value = "0")]
        seed: u64,

        #[arg(short, long, value_enum, default_value = "random")]
        policy: PolicyKind,

        /// Print the board after every move
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write random games as test vectors
    Generate {
        #[arg(short = 'n', long, default_value = "50")]
        games: usize,

        #[arg(short, long, default_value = "0")]
        seed: u64,

        #[arg(short, long, default_value = "test_vectors.json")]
        output: PathBuf,
    },

    /// Replay test vectors and check their scores
    Verify {
        #[arg(default_value = "test_vectors.json")]
        path: PathBuf,
    },

    /// Replay a move list and print the final position
    Replay {
        /// Pits to sow, in order
        #[arg(required = true, num_args = 1..)]
        moves: Vec<u16>,

        /// Also draw every pit's slot grid
        #[arg(long)]
        slots: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Random,
    Greedy,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path)?,
        None => GameConfig::default(),
    };
    config.validate()?;

    match cli.command {
        Command::Random {
            games,
            seed,
            policy,
            verbose,
        } => run_random(&config, games, seed, policy, verbose),
        Command::Generate { games, seed, output } => {
            replay::generate_test_vectors(&config, games, seed, &output)?;
            println!("wrote {} games to {}", games, output.display());
            Ok(())
        }
        Command::Verify { path } => {
            let count = replay::verify_test_vectors(&config, &path)?;
            println!("{} games verified", count);
            Ok(())
        }
        Command::Replay { moves, slots } => {
            let moves: Vec<PitId> = moves.into_iter().map(PitId).collect();
            let session = replay::play_game(config, &moves)?;
            replay::check_game(&session)?;
            if slots {
                for pit in session.board().pits() {
                    println!("{}\n", pit.render());
                }
            }
            println!("{}", session);
            println!("Score: {}", session.score());
            if session.is_game_over() {
                match session.score().leader() {
                    Some(winner) => println!("{} wins", winner),
                    None => println!("Draw"),
                }
            }
            Ok(())
        }
    }
}

fn run_random(config: &GameConfig, games: usize, seed: u64, kind: PolicyKind, verbose: bool) -> Result<()> {
    for game in 0..games {
        let game_seed = seed.wrapping_add(game as u64);
        let mut policy: Box<dyn MovePolicy> = match kind {
            PolicyKind::Random => Box::new(UniformRandom::new(game_seed)),
            PolicyKind::Greedy => Box::new(Greedy),
        };

        let mut session = Session::new(config.clone())?;
        session.initial_place()?;
        if verbose {
            println!("{}", session);
        }

        while !session.is_game_over() {
            let player = session.current_player();
            let Some(pit) = policy.choose_move(&session) else {
                bail!("{} has no move in an unfinished game", player);
            };
            session.play(pit)?;
            if verbose {
                println!("Move {}: {} sows {}", session.moves().len(), player, pit.0);
                println!("{}", session);
            }
        }

        replay::check_game(&session)?;
        info!(game, policy = policy.name(), moves = session.moves().len(), "finished");
        println!("game {}: {} after {} moves", game, session.score(), session.moves().len());
    }
    Ok(())
}
