//! Runs an engine search on a worker thread so the caller stays responsive.
//!
//! The worker owns its engine and a copy of the position; the result comes
//! back over an `mpsc` channel. There is no cancellation: a search always
//! runs to its fixed depth.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::chess_errors::ChessResult;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::moves::move_descriptions::Move;
use crate::search::minimax::SearchResult;
use crate::session::game_session::SearchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub request: SearchRequest,
    pub result: ChessResult<SearchResult>,
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// The move to hand to `GameSession::finish_engine_turn`.
    pub fn best_move(&self) -> Option<Move> {
        self.result.as_ref().ok().and_then(|result| result.best_move)
    }
}

pub struct SearchHandle {
    receiver: Receiver<SearchOutcome>,
    worker: Option<JoinHandle<()>>,
    finished: Option<SearchOutcome>,
}

impl SearchHandle {
    /// Non-blocking poll. Returns the outcome once, when it is ready.
    pub fn try_result(&mut self) -> Option<SearchOutcome> {
        if let Some(outcome) = self.finished.take() {
            return Some(outcome);
        }
        if self.worker.is_none() {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.join_worker();
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("search worker exited without a result");
                self.join_worker();
                None
            }
        }
    }

    pub fn is_finished(&mut self) -> bool {
        if self.finished.is_none() && self.worker.is_some() {
            if let Ok(outcome) = self.receiver.try_recv() {
                self.finished = Some(outcome);
                self.join_worker();
            }
        }
        self.finished.is_some()
    }

    /// Blocks until the search completes. `None` if the worker died.
    pub fn wait(mut self) -> Option<SearchOutcome> {
        if let Some(outcome) = self.finished.take() {
            return Some(outcome);
        }
        let outcome = self.receiver.recv().ok();
        if outcome.is_none() {
            log::error!("search worker exited without a result");
        }
        self.join_worker();
        outcome
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("search worker panicked");
            }
        }
    }
}

/// Searches `request` with the default minimax engine.
pub fn spawn_search(request: SearchRequest) -> SearchHandle {
    spawn_search_with(MinimaxEngine::new(request.depth), request)
}

pub fn spawn_search_with<E: Engine + 'static>(mut engine: E, request: SearchRequest) -> SearchHandle {
    let (sender, receiver) = channel();

    let worker = thread::spawn(move || {
        let started = Instant::now();
        let result = engine.choose_move(&request.state, &GoParams::with_depth(request.depth));
        let elapsed = started.elapsed();
        log::debug!(
            "{} finished depth {} in {:?}",
            engine.name(),
            request.depth,
            elapsed
        );
        // The handle may have been dropped; nobody is waiting then.
        let _ = sender.send(SearchOutcome {
            request,
            result,
            elapsed,
        });
    });

    SearchHandle {
        receiver,
        worker: Some(worker),
        finished: None,
    }
}
