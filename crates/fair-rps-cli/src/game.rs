//! Interactive read loop for a single session.

use crate::console;
use anyhow::Result;
use fair_rps_core::{Choice, GameSession, ResolutionError, Reveal};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// How a session ended
#[derive(Debug)]
pub enum SessionEnd {
    Resolved(Reveal),
    Exited,
    InvalidChoice(ResolutionError),
    InputClosed,
}

/// Show the commitment, then read lines until one ends the session
///
/// `?` prints the payoff table and keeps waiting. Any other line ends the
/// session: `0` exits, a valid number resolves, anything else is rejected.
/// Lines that are not valid UTF-8 are decoded lossily and rejected like any
/// other non-number.
pub async fn run_session<R, W>(session: GameSession, mut input: R, out: &mut W) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console::write_menu(out, &session.digest(), session.moves())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            debug!(session = %session.id(), "Input closed");
            writeln!(out)?;
            return Ok(SessionEnd::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);

        match Choice::parse(&line) {
            Ok(Choice::Help) => {
                debug!(session = %session.id(), "Help requested");
                console::write_help(out, session.moves(), &session.payoff_table())?;
                console::write_prompt(out)?;
            }
            Ok(Choice::Exit) => {
                debug!(session = %session.id(), "Exit requested");
                writeln!(out, "Exiting game.")?;
                return Ok(SessionEnd::Exited);
            }
            Ok(Choice::Pick(choice)) => {
                return match session.resolve(choice) {
                    Ok(reveal) => {
                        console::write_result(out, &reveal)?;
                        Ok(SessionEnd::Resolved(reveal))
                    }
                    Err(e) => {
                        warn!(error = %e, "Rejected choice");
                        writeln!(out, "Invalid choice.")?;
                        Ok(SessionEnd::InvalidChoice(e))
                    }
                };
            }
            Err(e) => {
                warn!(session = %session.id(), error = %e, "Rejected choice");
                writeln!(out, "Invalid choice.")?;
                return Ok(SessionEnd::InvalidChoice(e));
            }
        }
    }
}
