//! Fair RPS command-line player
//!
//! Plays one game of rock-paper-scissors over any odd number of moves. The
//! computer's move is committed with HMAC-SHA3-256 before you choose, and the
//! key is revealed afterwards so the commitment can be checked.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fair_rps_core::{verify_reveal, GameSession, MoveSet, RngSource};
use std::io::{self, Write};
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod console;
mod game;

use config::{CliConfig, Mode, VerifyRequest};
use game::SessionEnd;

#[derive(Parser)]
#[command(name = "fair-rps")]
#[command(about = "Rock-paper-scissors for any odd number of moves, with a verifiable HMAC commitment")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Moves in cycle order; each beats the half of the moves before it.
    /// Put `--` before the moves if the first one is named `verify`.
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Check a revealed key and computer move against the HMAC shown before play
    Verify {
        /// HMAC key printed after the game
        #[arg(long)]
        key: String,

        /// Computer move printed after the game
        #[arg(long = "move")]
        chosen_move: String,

        /// HMAC printed before the game
        #[arg(long)]
        hmac: String,
    },
}

impl Cli {
    fn into_mode(self) -> Mode {
        match self.command {
            Some(Command::Verify {
                key,
                chosen_move,
                hmac,
            }) => Mode::Verify(VerifyRequest {
                key,
                chosen_move,
                hmac,
            }),
            None => Mode::Play { moves: self.moves },
        }
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = CliConfig::new(Cli::parse().into_mode());
    init_tracing(&config.log_filter);

    match config.mode {
        Mode::Play { moves } => play(moves).await,
        Mode::Verify(request) => Ok(if verify(&request) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
    }
}

async fn play(raw_moves: Vec<String>) -> Result<ExitCode> {
    let moves = match MoveSet::validate(raw_moves) {
        Ok(moves) => moves,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let session = GameSession::start(moves, &mut RngSource::thread())?;
    info!(session = %session.id(), "Waiting for player move");

    let input = BufReader::new(tokio::io::stdin());
    let mut out = io::stdout().lock();

    let end = game::run_session(session, input, &mut out).await?;
    out.flush()?;
    debug!(?end, "Session finished");

    Ok(match end {
        SessionEnd::Resolved(_) | SessionEnd::Exited | SessionEnd::InputClosed => ExitCode::SUCCESS,
        SessionEnd::InvalidChoice(e) => {
            debug!(error = %e, "Session ended on an invalid choice");
            ExitCode::FAILURE
        }
    })
}

/// Print the verification verdict, returning whether the reveal matched
fn verify(request: &VerifyRequest) -> bool {
    match verify_reveal(&request.key, &request.chosen_move, &request.hmac) {
        Ok(true) => {
            println!("HMAC verified");
            true
        }
        Ok(false) => {
            println!("HMAC mismatch");
            false
        }
        Err(e) => {
            println!("{}", e);
            false
        }
    }
}
