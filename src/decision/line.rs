//! Decisions typed by a person, one line at a time.
//!
//! Any `BufRead` works: stdin for a terminal seat, a socket or a pipe for a
//! remote one. The turn prompt goes to the paired writer and each input
//! line is read with the same grammar as free-text replies.

use std::io::{BufRead, Write};
use std::sync::Mutex;

use super::parse::parse_decision;
use super::prompt::decision_prompt;
use super::{DecisionError, DecisionProvider, DecisionView};
use crate::core::Action;

/// Unreadable lines tolerated per turn before giving up.
const DEFAULT_ATTEMPTS: usize = 3;

struct Io<R, W> {
    input: R,
    output: W,
}

/// Line-oriented decision provider.
pub struct LineProvider<R, W> {
    io: Mutex<Io<R, W>>,
    attempts: usize,
}

impl<R, W> LineProvider<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    /// Read decisions from `input`, writing prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new(Io { input, output }),
            attempts: DEFAULT_ATTEMPTS,
        }
    }

    /// Lines to read per turn before reporting a parse failure.
    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }
}

impl<R, W> DecisionProvider for LineProvider<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn decide(&self, view: &DecisionView) -> Result<Action, DecisionError> {
        let mut io = self
            .io
            .lock()
            .map_err(|_| DecisionError::Unavailable("input lock poisoned".into()))?;
        let Io { input, output } = &mut *io;

        write!(output, "{}", decision_prompt(view))?;
        writeln!(output, "Your move, {} (BID <quantity> <face> or CHALLENGE):", view.player_name)?;
        output.flush()?;

        let mut last_error = None;
        for _ in 0..self.attempts {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(DecisionError::Unavailable("input closed".into()));
            }
            match parse_decision(&line) {
                Ok(action) => return Ok(action),
                Err(err) => {
                    writeln!(output, "Could not read that: {err}. Try again:")?;
                    output.flush()?;
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.map_or_else(
            || DecisionError::Unavailable("no input".into()),
            DecisionError::Parse,
        ))
    }
}
