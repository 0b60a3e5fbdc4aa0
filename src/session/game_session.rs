//! Human-versus-computer game session.
//!
//! `GameSession` is the single mutable owner of the game: current position,
//! undo history, move log, piece selection and the engine-busy flag. Search
//! runs on a copy of the position handed out by `begin_engine_turn`, and the
//! chosen move comes back through `finish_engine_turn`. While a search is
//! outstanding all human input is rejected with `ChessError::EngineBusy`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::config::SessionConfig;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;
use crate::moves::move_descriptions::Move;
use crate::utils::notation::move_to_notation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    WaitingForSelection,
    PieceSelected {
        from: Square,
        moves: Vec<Move>,
    },
}

/// What a click on a square did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected { from: Square, moves: Vec<Move> },
    MoveExecuted(Move),
    SelectionCleared,
}

/// Everything a worker needs to pick the engine's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub state: GameState,
    pub depth: u8,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    history: Vec<Position>,
    move_log: Vec<String>,
    selection: SelectionState,
    status: GameStatus,
    config: SessionConfig,
    engine_busy: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_position(config, Position::new_game())
    }

    /// Starts from an arbitrary position, e.g. one parsed from FEN.
    pub fn from_position(config: SessionConfig, position: Position) -> Self {
        let status = position.status();
        Self {
            position,
            history: Vec::new(),
            move_log: Vec::new(),
            selection: SelectionState::WaitingForSelection,
            status,
            config,
            engine_busy: false,
        }
    }

    /// Resets to the initial position. Allowed at any time except while the
    /// engine is thinking.
    pub fn new_game(&mut self) -> ChessResult<()> {
        if self.engine_busy {
            return Err(ChessError::EngineBusy);
        }
        *self = Self::new(self.config);
        log::info!("new game, human plays {:?}", self.config.human_color);
        Ok(())
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_engine_busy(&self) -> bool {
        self.engine_busy
    }

    pub fn is_human_turn(&self) -> bool {
        self.position.side_to_move() == self.config.human_color
    }

    /// True when the engine should be asked for a move.
    pub fn is_engine_turn(&self) -> bool {
        !self.is_human_turn() && !self.status.is_over() && !self.engine_busy
    }

    /// Handles a click on `square`.
    ///
    /// With a piece selected, clicking one of its destinations plays the move,
    /// clicking another own piece re-selects, and anything else clears the
    /// selection. With nothing selected, clicking an own piece selects it.
    pub fn select_square(&mut self, square: Square) -> ChessResult<SelectionOutcome> {
        self.guard_human_input()?;

        if let SelectionState::PieceSelected { from, moves } = &self.selection {
            let from = *from;
            if moves.iter().any(|m| m.to == square) {
                if self.position.needs_promotion_choice(from, square) {
                    return Err(ChessError::PromotionChoiceRequired);
                }
                let played = self.commit_move(Move::new(from, square))?;
                return Ok(SelectionOutcome::MoveExecuted(played));
            }
        }

        if self
            .position
            .board()
            .has_piece_of(square, self.position.side_to_move())
        {
            let moves = self.position.legal_moves(Some(square));
            self.selection = SelectionState::PieceSelected {
                from: square,
                moves: moves.clone(),
            };
            return Ok(SelectionOutcome::Selected {
                from: square,
                moves,
            });
        }

        self.selection = SelectionState::WaitingForSelection;
        Ok(SelectionOutcome::SelectionCleared)
    }

    /// Plays the selected piece to `to`, with `promotion` for a pawn reaching
    /// the last rank.
    pub fn move_selected_to(
        &mut self,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        self.guard_human_input()?;
        let SelectionState::PieceSelected { from, .. } = self.selection else {
            return Err(ChessError::NoPieceSelected);
        };
        let mv = match promotion {
            Some(kind) => Move::with_promotion(from, to, kind),
            None => Move::new(from, to),
        };
        self.play_move(mv)
    }

    /// Plays a human move given directly, bypassing selection.
    pub fn play_move(&mut self, mv: Move) -> ChessResult<Move> {
        self.guard_human_input()?;
        if mv.promotion.is_none() && self.position.needs_promotion_choice(mv.from, mv.to) {
            return Err(ChessError::PromotionChoiceRequired);
        }
        self.commit_move(mv)
    }

    /// Takes back the last human move and the engine reply to it.
    ///
    /// Two snapshots are popped so the human is on move again. When the game
    /// ended on the human's own move only that move is taken back. Allowed
    /// after the game is over.
    pub fn undo(&mut self) -> ChessResult<()> {
        if self.engine_busy {
            return Err(ChessError::EngineBusy);
        }
        let plies = if self.is_human_turn() {
            2
        } else if self.status.is_over() {
            1
        } else {
            return Err(ChessError::NotHumanTurn);
        };
        if self.history.len() < plies {
            return Err(ChessError::NothingToUndo);
        }

        let keep = self.history.len() - plies;
        if let Some(restored) = self.history.drain(keep..).next() {
            self.position = restored;
        }
        self.move_log.truncate(self.move_log.len().saturating_sub(plies));
        self.selection = SelectionState::WaitingForSelection;
        self.status = self.position.status();
        log::info!("undid {plies} plies, {} left in history", self.history.len());
        Ok(())
    }

    /// Marks the engine busy and hands out the position to search.
    pub fn begin_engine_turn(&mut self) -> ChessResult<SearchRequest> {
        if self.engine_busy {
            return Err(ChessError::EngineBusy);
        }
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        if self.is_human_turn() {
            return Err(ChessError::NoEngineTurnPending);
        }
        self.engine_busy = true;
        self.selection = SelectionState::WaitingForSelection;
        Ok(SearchRequest {
            state: self.position.state,
            depth: self.config.search_depth,
        })
    }

    /// Applies the engine's choice and clears the busy flag. `None` means the
    /// engine found no legal move; the status is recomputed to record the
    /// game end. If the game is in fact still going, the turn stays with the
    /// engine and `ChessError::EngineFailed` is returned so it can be retried.
    pub fn finish_engine_turn(&mut self, best_move: Option<Move>) -> ChessResult<Option<Move>> {
        if !self.engine_busy {
            return Err(ChessError::NoEngineTurnPending);
        }
        self.engine_busy = false;

        match best_move {
            Some(mv) => self.commit_move(mv).map(Some),
            None => {
                self.status = self.position.status();
                if !self.status.is_over() {
                    log::warn!("engine returned no move in an ongoing game");
                    return Err(ChessError::EngineFailed);
                }
                log::info!("engine has no move: {}", self.status);
                Ok(None)
            }
        }
    }

    /// Drops a pending engine turn without a move, e.g. after the search
    /// worker died. The position is unchanged and the engine is on move.
    pub fn abort_engine_turn(&mut self) -> ChessResult<()> {
        if !self.engine_busy {
            return Err(ChessError::NoEngineTurnPending);
        }
        self.engine_busy = false;
        log::warn!("engine turn aborted");
        Ok(())
    }

    fn guard_human_input(&self) -> ChessResult<()> {
        if self.engine_busy {
            return Err(ChessError::EngineBusy);
        }
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        if !self.is_human_turn() {
            return Err(ChessError::NotHumanTurn);
        }
        Ok(())
    }

    fn commit_move(&mut self, mv: Move) -> ChessResult<Move> {
        let notation = move_to_notation(&self.position, mv)?;
        let next = self.position.apply_move(mv)?;
        let played = next.last_move.unwrap_or(mv);

        let previous = std::mem::replace(&mut self.position, next);
        self.history.push(previous);
        self.move_log.push(notation);
        self.selection = SelectionState::WaitingForSelection;
        self.status = self.position.status();

        log::info!(
            "{:?} played {played} ({})",
            self.position.side_to_move().opposite(),
            self.move_log.last().map(String::as_str).unwrap_or_default()
        );
        if self.status.is_over() {
            log::info!("game over: {}", self.status);
        }
        Ok(played)
    }
}
