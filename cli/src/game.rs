use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use pymines_core::{Board, RevealOutcome};

use crate::command::Command;
use crate::render::Renderer;

/// When a session stops starting new rounds and how long a finished round stays on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundPolicy {
    pub rounds: Option<u32>,
    pub pause: Duration,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub won: u32,
    pub lost: u32,
}

/// Plays rounds until input runs out, the player quits or the round cap is hit.
///
/// `new_board` is called with the zero-based round number every time a fresh board is needed.
pub fn run<R, W, F>(
    mut new_board: F,
    input: R,
    renderer: &mut Renderer<W>,
    policy: &RoundPolicy,
) -> anyhow::Result<Summary>
where
    R: BufRead,
    W: Write,
    F: FnMut(u32) -> pymines_core::Result<Board>,
{
    let mut lines = input.lines();
    let mut summary = Summary::default();
    let mut round = 0;

    'rounds: while policy.rounds.is_none_or(|max| round < max) {
        let mut board = new_board(round).context("could not set up a new board")?;
        round += 1;
        log::info!(
            "Round {} started on a {}x{} board with {} mines",
            round,
            board.rows(),
            board.cols(),
            board.mine_count()
        );
        renderer.board(&board)?;

        let outcome = loop {
            renderer.prompt()?;
            let Some(line) = lines.next() else {
                break 'rounds;
            };
            let line = line.context("could not read input")?;

            let coords = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break 'rounds,
                Ok(Some(Command::Help)) => {
                    renderer.help()?;
                    continue;
                }
                Ok(Some(Command::Reveal(coords))) => coords,
                Err(err) => {
                    renderer.error(err)?;
                    continue;
                }
            };

            match board.reveal(coords) {
                Ok(RevealOutcome::Continue) => renderer.board(&board)?,
                Ok(outcome) => break outcome,
                Err(err) => {
                    log::debug!("Rejected reveal at {:?}: {}", coords, err);
                    renderer.error(err)?;
                }
            }
        };

        renderer.board(&board)?;
        if outcome == RevealOutcome::Won {
            summary.won += 1;
            renderer.message("You won!")?;
        } else {
            summary.lost += 1;
            renderer.message("Boom! You lose.")?;
        }
        log::info!("Round {} finished: {:?}", round, board.state());

        thread::sleep(policy.pause);
    }

    Ok(summary)
}
