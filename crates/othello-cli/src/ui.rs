//! Line-oriented game loop.

use anyhow::Context;
use othello_core::game_state::MoveOutcome;
use othello_core::level::Difficulty;
use othello_core::player::Player;
use othello_core::selector::select_move;
use othello_core::square::Square;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::Mode;
use crate::game::GameState;

/// Settings taken from the command line.
pub struct Config {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub ai_color: Player,
    pub seed: Option<u64>,
}

fn is_computer(mode: Mode, ai_color: Player, player: Player) -> bool {
    match mode {
        Mode::Pvp => false,
        Mode::Pvc => player == ai_color,
        Mode::Cvc => true,
    }
}

fn parse_mode(s: &str) -> Option<Mode> {
    [Mode::Pvp, Mode::Pvc, Mode::Cvc]
        .into_iter()
        .find(|mode| mode.name() == s)
}

fn report(player: Player, sq: Square, outcome: &MoveOutcome) {
    println!("{player} plays {sq} ({} flipped)", outcome.flips.len());
    if let Some(passed) = outcome.passed {
        println!("{passed} has no legal move and passes");
    }
    println!();
}

pub fn ui_loop(config: Config) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to start line editor")?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = GameState::new();
    let mut mode = config.mode;
    let mut difficulty = config.difficulty;

    loop {
        game.print();
        println!();

        if let Some(player) = game.side_to_move()
            && is_computer(mode, config.ai_color, player)
            && let Some(sq) = select_move(game.board(), player, difficulty, &mut rng)
        {
            debug!(%player, %sq, %difficulty, "computer move");
            let outcome = game.make_move(sq)?;
            report(player, sq, &outcome);
            continue;
        }

        if let Some(text) = game.result_text() {
            println!("Game over: {text}");
            println!("Type 'new' to play again or 'quit' to exit.\n");
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        };
        let _ = rl.add_history_entry(&line);
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        println!();

        match cmd {
            "new" | "n" => game = GameState::new(),
            "mode" | "m" => match parts.next().map(parse_mode) {
                Some(Some(m)) => {
                    mode = m;
                    println!("Mode changed to {}\n", mode.name());
                }
                Some(None) => println!("Invalid mode. Use pvp, pvc or cvc.\n"),
                None => println!("Current mode: {}\n", mode.name()),
            },
            "level" | "l" => match parts.next().map(str::parse::<Difficulty>) {
                Some(Ok(level)) => {
                    difficulty = level;
                    println!("Difficulty set to {difficulty}\n");
                }
                Some(Err(err)) => println!("{err}\n"),
                None => println!("Current difficulty: {difficulty}\n"),
            },
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(Square::to_string).collect();
                println!("Legal moves: {}\n", moves.join(" "));
            }
            "quit" | "q" => break,
            _ => match cmd.parse::<Square>() {
                Ok(sq) => {
                    let Some(player) = game.side_to_move() else {
                        println!("The game is over.\n");
                        continue;
                    };
                    match game.make_move(sq) {
                        Ok(outcome) => report(player, sq, &outcome),
                        Err(err) => println!("{err}\n"),
                    }
                }
                Err(_) => println!("Unknown command: {cmd}\n"),
            },
        }
    }

    Ok(())
}
