//! Line-oriented terminal front-end for a human-versus-computer game.
//!
//! Reads commands or moves from stdin, drives a `GameSession`, and runs the
//! engine's turns through the background search. It exercises the session
//! exactly the way a graphical front-end would.

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessError;
use crate::game_state::game_status::GameStatus;
use crate::session::background_search::{spawn_search, SearchOutcome};
use crate::session::game_session::{GameSession, SelectionOutcome};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::notation::format_move_list;
use crate::utils::render_game_state::render_position;

const HELP_TEXT: &str = "\
commands:
  e2e4 / e7e8q   play a move (long algebraic, promotion letter last)
  e2             select a square; a second square moves the selected piece
  moves [sq]     list legal moves, optionally from one square
  undo           take back your last move and the reply
  go             let the engine retry a failed turn
  new            start a new game
  board | fen | log | help | quit";

pub fn run_stdio_loop(session: GameSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut terminal = TerminalState::new(session);

    terminal.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct TerminalState {
    session: GameSession,
}

impl TerminalState {
    fn new(session: GameSession) -> Self {
        Self { session }
    }

    /// Prints the opening board and lets the engine move first if it is White.
    fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{HELP_TEXT}")?;
        writeln!(out, "{}", render_position(self.session.position()))?;
        self.run_engine_turns(out)
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => writeln!(out, "{}", render_position(self.session.position()))?,
            "fen" => writeln!(out, "{}", self.session.position().state.to_fen())?,
            "log" => writeln!(out, "{}", format_move_list(self.session.move_log()))?,
            "moves" => self.print_moves(parts.next(), out)?,
            "new" => match self.session.new_game() {
                Ok(()) => self.start(out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "go" => {
                if self.session.is_engine_turn() {
                    self.run_engine_turns(out)?;
                } else {
                    writeln!(out, "error: {}", ChessError::NoEngineTurnPending)?;
                }
            }
            "undo" => match self.session.undo() {
                Ok(()) => writeln!(out, "{}", render_position(self.session.position()))?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            text if text.len() == 2 => self.handle_square(text, out)?,
            text => self.handle_move(text, out)?,
        }

        Ok(false)
    }

    fn handle_square(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let outcome = algebraic_to_square(text).and_then(|sq| self.session.select_square(sq));
        match outcome {
            Ok(SelectionOutcome::Selected { from, moves }) => {
                let targets: Vec<String> = moves.iter().map(|m| square_to_algebraic(m.to)).collect();
                writeln!(
                    out,
                    "selected {}: {}",
                    square_to_algebraic(from),
                    targets.join(" ")
                )?;
            }
            Ok(SelectionOutcome::SelectionCleared) => writeln!(out, "selection cleared")?,
            Ok(SelectionOutcome::MoveExecuted(_)) => self.after_human_move(out)?,
            Err(err) => self.report(err, out)?,
        }
        Ok(())
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        match long_algebraic_to_move(text).and_then(|mv| self.session.play_move(mv)) {
            Ok(_) => self.after_human_move(out),
            Err(err) => self.report(err, out),
        }
    }

    fn after_human_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_position(self.session.position()))?;
        self.run_engine_turns(out)
    }

    fn run_engine_turns(&mut self, out: &mut impl Write) -> io::Result<()> {
        while self.session.is_engine_turn() {
            let request = match self.session.begin_engine_turn() {
                Ok(request) => request,
                Err(err) => return self.report(err, out),
            };
            writeln!(out, "thinking (depth {})...", request.depth)?;
            out.flush()?;

            let outcome = spawn_search(request).wait();
            if !self.resolve_engine_turn(outcome, out)? {
                break;
            }
        }
        self.print_status(out)
    }

    /// Hands a finished search back to the session. Returns true when the
    /// engine moved.
    fn resolve_engine_turn(
        &mut self,
        outcome: Option<SearchOutcome>,
        out: &mut impl Write,
    ) -> io::Result<bool> {
        let best_move = match outcome.map(|outcome| outcome.result) {
            Some(Ok(result)) => result.best_move,
            Some(Err(ChessError::NoLegalMoves)) => None,
            Some(Err(err)) => {
                self.abandon_engine_turn(out)?;
                self.report(err, out)?;
                return Ok(false);
            }
            None => {
                self.abandon_engine_turn(out)?;
                writeln!(out, "error: the search worker stopped without a result")?;
                writeln!(out, "type 'go' to let the engine try again")?;
                return Ok(false);
            }
        };

        match self.session.finish_engine_turn(best_move) {
            Ok(Some(_)) => {
                let last = self.session.move_log().last().cloned().unwrap_or_default();
                writeln!(out, "engine plays {last}")?;
                writeln!(out, "{}", render_position(self.session.position()))?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => {
                self.report(err, out)?;
                Ok(false)
            }
        }
    }

    fn abandon_engine_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.session.abort_engine_turn() {
            Ok(()) => Ok(()),
            Err(err) => self.report(err, out),
        }
    }

    fn print_moves(&self, from: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let from = match from.map(algebraic_to_square).transpose() {
            Ok(from) => from,
            Err(err) => return writeln!(out, "error: {err}"),
        };
        let moves: Vec<String> = self
            .session
            .position()
            .legal_moves(from)
            .iter()
            .map(|m| m.to_string())
            .collect();
        writeln!(out, "{}", moves.join(" "))
    }

    fn print_status(&self, out: &mut impl Write) -> io::Result<()> {
        match self.session.status() {
            GameStatus::Ongoing => Ok(()),
            status => writeln!(out, "{status}. Type 'new' to play again or 'undo'."),
        }
    }

    fn report(&self, err: ChessError, out: &mut impl Write) -> io::Result<()> {
        match err {
            ChessError::PromotionChoiceRequired => {
                writeln!(out, "choose a promotion piece: append q, r, b or n (e.g. e7e8q)")
            }
            err => writeln!(out, "error: {err}"),
        }
    }
}
