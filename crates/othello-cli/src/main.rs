mod game;
mod ui;

use clap::{Parser, ValueEnum};
use othello_core::level::Difficulty;
use othello_core::player::Player;
use tracing_subscriber::EnvFilter;

/// Who controls each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Human against human.
    Pvp,
    /// Human against the computer.
    Pvc,
    /// Computer against computer.
    Cvc,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Pvp => "pvp",
            Mode::Pvc => "pvc",
            Mode::Cvc => "cvc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play Othello in the terminal")]
struct Cli {
    #[arg(long, value_enum, default_value = "pvc")]
    mode: Mode,

    /// Computer strength: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Side played by the computer in pvc mode
    #[arg(long, value_enum, default_value = "white")]
    ai_color: Side,

    /// Seed for the easy tier's random moves
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    ui::ui_loop(ui::Config {
        mode: args.mode,
        difficulty: args.difficulty,
        ai_color: args.ai_color.into(),
        seed: args.seed,
    })
}
