//! Background solving for interactive callers.
//!
//! The solver itself is a plain blocking call. `SolveTask` runs it on its own
//! thread and forwards progress and the final report over a channel so a UI
//! loop can poll without blocking. Cancelling detaches the worker and drops
//! the receiving end; the search runs to completion and its result is
//! discarded.
//!
//! Typical usage:
//! - `SolveTask::spawn(board, inventory, config)`.
//! - Each frame, call `poll` and read `latest_progress` for feedback.
//! - Once `poll` returns a report, display it. Or call `wait` to block.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::puzzle::board::Board;
use crate::puzzle::inventory::Inventory;
use crate::puzzle::puzzle_types::Placement;
use crate::puzzle_errors::PuzzleError;
use crate::search::beam_search::{BeamSearchSolver, SearchOutcome};
use crate::search::progress::SearchProgress;
use crate::search::solver_config::SolverConfig;

/// What the caller shows once a task is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveReport {
    /// Placements to make, in order.
    Solved(Vec<Placement>),
    /// The search ran but found nothing; carries the diagnostic outcome.
    NoSolution(SearchOutcome),
    /// Board had no skulls; the solver was not started.
    NothingToSolve,
    /// Inventory was empty; the solver was not started.
    NoPieces,
    /// Input rejected by the solver.
    Failed(PuzzleError),
    /// The worker thread ended without reporting (it panicked).
    Aborted,
}

#[derive(Debug, Clone)]
pub enum SolveEvent {
    Progress(SearchProgress),
    Finished(SolveReport),
}

/// Checks made before a worker is spawned. `None` means the solver should run.
pub fn precheck(board: &Board, inventory: &Inventory) -> Option<SolveReport> {
    if board.remaining_health() == 0 {
        return Some(SolveReport::NothingToSolve);
    }
    if inventory.is_empty() {
        return Some(SolveReport::NoPieces);
    }
    None
}

fn report_from(result: Result<SearchOutcome, PuzzleError>) -> SolveReport {
    match result {
        Ok(SearchOutcome::Solved { history, .. }) => SolveReport::Solved(history),
        Ok(outcome) => SolveReport::NoSolution(outcome),
        Err(PuzzleError::InvalidPuzzle) => SolveReport::NothingToSolve,
        Err(error) => SolveReport::Failed(error),
    }
}

/// Handle to one background solve.
pub struct SolveTask {
    events: Option<Receiver<SolveEvent>>,
    worker: Option<JoinHandle<()>>,
    latest_progress: Option<SearchProgress>,
    report: Option<SolveReport>,
}

impl SolveTask {
    /// Start solving on a new thread, unless the pre-checks already decide
    /// the report.
    pub fn spawn(board: Board, inventory: Inventory, config: SolverConfig) -> Self {
        if let Some(report) = precheck(&board, &inventory) {
            debug!("solve task not started: {:?}", report);
            return Self {
                events: None,
                worker: None,
                latest_progress: None,
                report: Some(report),
            };
        }

        let (sender, receiver) = channel::<SolveEvent>();
        let worker = thread::spawn(move || {
            let solver = BeamSearchSolver::new(config);
            let progress_sender = sender.clone();
            let mut forward = |progress: &SearchProgress| {
                // receiver may already be gone after a cancel
                let _ = progress_sender.send(SolveEvent::Progress(*progress));
            };
            let result = solver.search(&board, &inventory, &mut forward);
            let _ = sender.send(SolveEvent::Finished(report_from(result)));
        });

        Self {
            events: Some(receiver),
            worker: Some(worker),
            latest_progress: None,
            report: None,
        }
    }

    /// Drain pending events without blocking. Returns the report once known.
    pub fn poll(&mut self) -> Option<&SolveReport> {
        if self.report.is_none() {
            self.drain();
        }
        self.report.as_ref()
    }

    pub fn is_done(&mut self) -> bool {
        self.poll().is_some()
    }

    /// Most recent round reported by the worker.
    #[inline]
    pub fn latest_progress(&self) -> Option<SearchProgress> {
        self.latest_progress
    }

    /// Block until the worker reports.
    pub fn wait(mut self) -> SolveReport {
        if let Some(report) = self.report.take() {
            return report;
        }
        let Some(events) = self.events.take() else {
            return SolveReport::Aborted;
        };
        for event in events.iter() {
            match event {
                SolveEvent::Progress(progress) => self.latest_progress = Some(progress),
                SolveEvent::Finished(report) => {
                    self.join_worker();
                    return report;
                }
            }
        }
        self.join_worker();
        SolveReport::Aborted
    }

    /// Abandon the task. The worker keeps running until the search ends, but
    /// nothing it produces is observed.
    pub fn cancel(mut self) {
        self.events = None;
        if self.worker.take().is_some() {
            debug!("solve task cancelled; worker detached");
        }
    }

    fn drain(&mut self) {
        let Some(events) = self.events.as_ref() else {
            return;
        };
        loop {
            match events.try_recv() {
                Ok(SolveEvent::Progress(progress)) => self.latest_progress = Some(progress),
                Ok(SolveEvent::Finished(report)) => {
                    self.report = Some(report);
                    self.events = None;
                    self.join_worker();
                    return;
                }
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.report = Some(SolveReport::Aborted);
                    self.events = None;
                    self.join_worker();
                    return;
                }
            }
        }
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("solve worker panicked");
            }
        }
    }
}
