//! Line-based human input.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::core::{GameState, Player, BOARD_SIZE};
use crate::error::{Error, Result};

use super::{MoveChoice, Strategy};

/// Reads positions (0-8) from `input`, prompting on `output`.
///
/// Invalid input re-prompts without ending the game, for as long as it takes.
/// `q` / `quit` or end of input abstain, as does reaching an attempt cap
/// set with [`InteractiveStrategy::with_max_attempts`].
///
/// ```
/// use std::io::Cursor;
/// use tictactoe_engine::{GameState, InteractiveStrategy, MoveChoice, Player, Strategy};
///
/// let input = Cursor::new("nine\n4\n");
/// let mut human = InteractiveStrategy::new("Alice", input, Vec::new());
/// let state = GameState::new(Player::X, None);
///
/// assert_eq!(human.select_move(&state, Player::X).unwrap(), MoveChoice::Play(4));
/// ```
pub struct InteractiveStrategy<R, W> {
    name: String,
    input: R,
    output: W,
    max_attempts: Option<usize>,
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    /// Create an interactive player over the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            max_attempts: None,
        }
    }

    /// Abstain after `attempts` prompts without a valid entry (at least 1).
    ///
    /// Without a cap the player is re-prompted until it enters a valid
    /// position, quits, or input ends.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    /// The output stream, e.g. to inspect prompts in tests.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").map_err(|e| Error::io("write prompt", e))
    }

    fn read_entry(&mut self) -> Result<Option<String>> {
        write!(self.output, "Enter position (0-8) or 'q' to quit: ")
            .and_then(|()| self.output.flush())
            .map_err(|e| Error::io("write prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("read move", e))?;

        Ok((read > 0).then(|| line.trim().to_lowercase()))
    }

    fn parse_entry(entry: &str, state: &GameState) -> std::result::Result<usize, &'static str> {
        let position: usize = entry
            .parse()
            .map_err(|_| "Invalid input. Please enter a number between 0 and 8.")?;

        if position >= BOARD_SIZE {
            return Err("Invalid input. Please enter a number between 0 and 8.");
        }
        if !state.is_position_empty(position) {
            return Err("Position is already occupied.");
        }
        Ok(position)
    }
}

impl<R: BufRead, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, state: &GameState, player: Player) -> Result<MoveChoice> {
        self.write_line(&format!("Player {player}'s turn"))?;

        let mut attempts = 0;
        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                warn!(player = %self.name, attempts, "too many invalid entries");
                return Ok(MoveChoice::Abstain);
            }
            attempts += 1;

            let Some(entry) = self.read_entry()? else {
                debug!(player = %self.name, "input closed");
                return Ok(MoveChoice::Abstain);
            };

            if entry == "q" || entry == "quit" {
                debug!(player = %self.name, "player quit");
                return Ok(MoveChoice::Abstain);
            }

            match Self::parse_entry(&entry, state) {
                Ok(position) => return Ok(MoveChoice::Play(position as i32)),
                Err(message) => self.write_line(&format!("Error: {message}"))?,
            }
        }
    }
}
