//! Guess sources.
//!
//! A guess source sees only the defender's shot overlay and must return a
//! coordinate that is on the board and not yet shot. Two implementations:
//! - RandomTargeting: uniform choice among unshot cells
//! - CliTargeting: prompts a human, re-prompting until the input is legal

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Coord, GuessError, Shots};
use crate::config::BOARD_SIZE;

/// Interface implemented by the different guess sources.
pub trait Targeting {
    /// Choose the next coordinate to fire at, given the defender's shot overlay.
    fn select_target(&mut self, rng: &mut SmallRng, shots: &Shots) -> Result<Coord, GuessError>;

    /// Inform the source of the outcome of its last shot.
    fn handle_guess_result(&mut self, _coord: Coord, _hit: bool) {}

    /// Inform the source of an opponent shot against its own board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _hit: bool) {}
}

/// Automated opponent that fires uniformly at random among unshot cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for RandomTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, shots: &Shots) -> Result<Coord, GuessError> {
        let open: Vec<Coord> = (!*shots).iter_set_bits().collect();
        if open.is_empty() {
            return Err(GuessError::NoTargets);
        }
        Ok(open[rng.random_range(0..open.len())])
    }
}

/// Human player reading coordinates from a line-based input.
pub struct CliTargeting<R, W> {
    input: R,
    output: W,
}

impl CliTargeting<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliTargeting<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse `"row col"` or `"row,col"` into an on-board coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Enter two numbers: row and column (e.g. 3 7)".to_string());
    };
    let n = BOARD_SIZE as usize;
    let parse = |s: &str| -> Result<usize, String> {
        s.parse::<usize>()
            .map_err(|_| format!("Invalid number '{}' - please enter numbers", s))
    };
    let (row, col) = (parse(row)?, parse(col)?);
    if row >= n || col >= n {
        return Err(format!("Out of range, please use 0-{}", n - 1));
    }
    Ok((row, col))
}

impl<R: BufRead, W: Write> Targeting for CliTargeting<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, shots: &Shots) -> Result<Coord, GuessError> {
        loop {
            write!(
                self.output,
                "Enter row and column (0-{}) or 'q' to quit: ",
                BOARD_SIZE - 1
            )?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GuessError::Quit);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                writeln!(self.output, "Exiting game.")?;
                return Err(GuessError::Quit);
            }
            match parse_coord(line) {
                Ok((r, c)) if shots.get(r, c).unwrap_or(true) => {
                    writeln!(self.output, "You already shot there. Try again.")?;
                }
                Ok(coord) => return Ok(coord),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coord, hit: bool) {
        let _ = writeln!(
            self.output,
            "You shot ({}, {}) -> {}",
            coord.0,
            coord.1,
            if hit { "HIT!" } else { "MISS" }
        );
    }

    fn handle_opponent_guess(&mut self, coord: Coord, hit: bool) {
        let _ = writeln!(
            self.output,
            "Opponent shot ({}, {}) -> {}",
            coord.0,
            coord.1,
            if hit { "HIT!" } else { "MISS" }
        );
    }
}
