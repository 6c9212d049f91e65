//! Beam search over placement sequences.
//!
//! Each round expands every beam state by its best few candidate moves, pools
//! the children, ranks the pool by `(remaining health, pieces used, insertion
//! index)` and keeps the first `beam_width`. The search stops as soon as a beam
//! state is solved, when no state has an improving move, or after `max_depth`
//! rounds. It is single-threaded and has no cancellation; callers who need to
//! abandon a run do so from outside (see `task::solve_task`).

use std::time::Instant;

use log::{debug, info, trace};

use crate::puzzle::board::Board;
use crate::puzzle::inventory::Inventory;
use crate::puzzle::puzzle_state::PuzzleState;
use crate::puzzle::puzzle_types::Placement;
use crate::puzzle_errors::PuzzleError;
use crate::search::efficiency::rank_candidate_moves;
use crate::search::progress::{ProgressSink, SearchProgress};
use crate::search::solver_config::SolverConfig;

/// Terminal result of one search run.
///
/// `Exhausted` and `DepthLimitReached` both mean "no solution found"; they
/// are kept apart for diagnostics and carry the best partial state's figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved {
        history: Vec<Placement>,
        /// Rounds completed when the solved state was found.
        depth: usize,
    },
    Exhausted {
        depth: usize,
        best_health: i64,
        best_moves: usize,
    },
    DepthLimitReached {
        depth: usize,
        best_health: i64,
        best_moves: usize,
    },
}

impl SearchOutcome {
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    pub fn solution(&self) -> Option<&[Placement]> {
        match self {
            SearchOutcome::Solved { history, .. } => Some(history),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Vec<Placement>> {
        match self {
            SearchOutcome::Solved { history, .. } => Some(history),
            _ => None,
        }
    }
}

/// A pooled child with its ranking key.
struct RankedState {
    health: i64,
    moves: usize,
    insertion: usize,
    state: PuzzleState,
}

#[derive(Debug, Clone, Default)]
pub struct BeamSearchSolver {
    config: SolverConfig,
}

impl BeamSearchSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the search to completion.
    ///
    /// Fails with `PuzzleError::InvalidPuzzle` when the board has nothing to
    /// clear; every other result is a `SearchOutcome`.
    pub fn search<P: ProgressSink + ?Sized>(
        &self,
        board: &Board,
        inventory: &Inventory,
        progress: &mut P,
    ) -> Result<SearchOutcome, PuzzleError> {
        let root = PuzzleState::new(board.clone(), *inventory);
        if root.remaining_health() == 0 {
            return Err(PuzzleError::InvalidPuzzle);
        }

        let started = Instant::now();
        let mut beam = vec![root];

        for depth in 0..self.config.max_depth {
            if let Some(index) = beam.iter().position(PuzzleState::is_solved) {
                let solved = beam.swap_remove(index);
                info!(
                    "beam search solved at depth {} using {} pieces ({:.2?})",
                    depth,
                    solved.moves_used(),
                    started.elapsed()
                );
                return Ok(SearchOutcome::Solved {
                    history: solved.into_history(),
                    depth,
                });
            }

            let mut pool = self.expand(&beam);
            if pool.is_empty() {
                let best = &beam[0];
                info!(
                    "beam search exhausted at depth {}: best remaining health {} after {} pieces",
                    depth,
                    best.remaining_health(),
                    best.moves_used()
                );
                return Ok(SearchOutcome::Exhausted {
                    depth,
                    best_health: best.remaining_health(),
                    best_moves: best.moves_used(),
                });
            }

            let pool_size = pool.len();
            pool.sort_unstable_by_key(|ranked| (ranked.health, ranked.moves, ranked.insertion));
            let round = SearchProgress {
                depth: depth + 1,
                best_health: pool[0].health,
                best_moves: pool[0].moves,
                pool_size,
            };
            pool.truncate(self.config.beam_width);
            beam = pool.into_iter().map(|ranked| ranked.state).collect();

            debug!(
                "depth {}: best remaining health {}, pieces used {}, pool {} ({:.2?})",
                round.depth,
                round.best_health,
                round.best_moves,
                round.pool_size,
                started.elapsed()
            );
            progress.on_round(&round);

            if beam.is_empty() {
                info!(
                    "beam search kept no states at depth {} (beam width 0)",
                    round.depth
                );
                return Ok(SearchOutcome::Exhausted {
                    depth: round.depth,
                    best_health: round.best_health,
                    best_moves: round.best_moves,
                });
            }
        }

        if let Some(index) = beam.iter().position(PuzzleState::is_solved) {
            let solved = beam.swap_remove(index);
            info!(
                "beam search solved at depth limit using {} pieces ({:.2?})",
                solved.moves_used(),
                started.elapsed()
            );
            return Ok(SearchOutcome::Solved {
                history: solved.into_history(),
                depth: self.config.max_depth,
            });
        }

        let best = &beam[0];
        info!(
            "beam search hit depth limit {}: best remaining health {} after {} pieces",
            self.config.max_depth,
            best.remaining_health(),
            best.moves_used()
        );
        Ok(SearchOutcome::DepthLimitReached {
            depth: self.config.max_depth,
            best_health: best.remaining_health(),
            best_moves: best.moves_used(),
        })
    }

    /// Children of every unsolved beam state, tagged with insertion order.
    fn expand(&self, beam: &[PuzzleState]) -> Vec<RankedState> {
        let mut pool = Vec::with_capacity(beam.len() * self.config.moves_per_state);

        for state in beam.iter().filter(|state| !state.is_solved()) {
            let candidates = rank_candidate_moves(state, self.config.moves_per_state);
            trace!(
                "expanding state with {} pieces used: {} candidates",
                state.moves_used(),
                candidates.len()
            );

            for candidate in candidates {
                let placement = candidate.placement;
                if let Some(child) = state.place(placement.kind, placement.cell) {
                    pool.push(RankedState {
                        health: child.remaining_health(),
                        moves: child.moves_used(),
                        insertion: pool.len(),
                        state: child,
                    });
                }
            }
        }

        pool
    }
}

/// Blocking solve: the placement sequence, or `None` if no solution was found.
pub fn solve<P: ProgressSink + ?Sized>(
    board: &Board,
    inventory: &Inventory,
    config: &SolverConfig,
    progress: &mut P,
) -> Result<Option<Vec<Placement>>, PuzzleError> {
    BeamSearchSolver::new(*config)
        .search(board, inventory, progress)
        .map(SearchOutcome::into_solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::puzzle_types::{Cell, PieceKind};
    use crate::search::progress::NoProgress;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(row, col).expect("test cell should be in bounds")
    }

    #[test]
    fn single_skull_is_cleared_by_adjacent_king() {
        let board = Board::with_skulls(&[(cell(0, 0), 1)]).expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::King, 1)]);

        let solution = solve(&board, &inventory, &SolverConfig::default(), &mut NoProgress)
            .expect("puzzle is valid");
        assert_eq!(
            solution,
            Some(vec![Placement::new(PieceKind::King, cell(0, 1))])
        );
    }

    #[test]
    fn lone_pawn_cannot_clear_five_hit_points() {
        let board = Board::with_skulls(&[(cell(4, 4), 5)]).expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::Pawn, 1)]);

        let outcome = BeamSearchSolver::default()
            .search(&board, &inventory, &mut NoProgress)
            .expect("puzzle is valid");
        assert_eq!(
            outcome,
            SearchOutcome::Exhausted {
                depth: 1,
                best_health: 4,
                best_moves: 1
            }
        );
        assert_eq!(outcome.into_solution(), None);
    }

    #[test]
    fn empty_board_is_rejected_before_search() {
        let inventory = Inventory::from_counts(&[(PieceKind::Queen, 3)]);
        let mut rounds = 0;
        let result = solve(
            &Board::new_empty(),
            &inventory,
            &SolverConfig::default(),
            &mut |_: &SearchProgress| rounds += 1,
        );
        assert_eq!(result, Err(PuzzleError::InvalidPuzzle));
        assert_eq!(rounds, 0);
    }

    #[test]
    fn depth_limit_is_reported_separately() {
        // Three separate 1 HP skulls far apart need at least two kings.
        let board = Board::with_skulls(&[(cell(0, 0), 1), (cell(7, 7), 1), (cell(0, 7), 1)])
            .expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::King, 3)]);
        let config = SolverConfig {
            max_depth: 1,
            ..SolverConfig::default()
        };

        let outcome = BeamSearchSolver::new(config)
            .search(&board, &inventory, &mut NoProgress)
            .expect("puzzle is valid");
        assert_eq!(
            outcome,
            SearchOutcome::DepthLimitReached {
                depth: 1,
                best_health: 2,
                best_moves: 1
            }
        );
    }

    #[test]
    fn zero_depth_runs_no_rounds() {
        let board = Board::with_skulls(&[(cell(0, 0), 1)]).expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::King, 1)]);
        let config = SolverConfig {
            max_depth: 0,
            ..SolverConfig::default()
        };
        let mut rounds = 0;

        let outcome = BeamSearchSolver::new(config)
            .search(&board, &inventory, &mut |_: &SearchProgress| rounds += 1)
            .expect("puzzle is valid");
        assert_eq!(
            outcome,
            SearchOutcome::DepthLimitReached {
                depth: 0,
                best_health: 1,
                best_moves: 0
            }
        );
        assert_eq!(rounds, 0);
        assert_eq!(
            solve(&board, &inventory, &config, &mut NoProgress),
            Ok(None)
        );
    }

    #[test]
    fn zero_beam_width_keeps_nothing() {
        let board = Board::with_skulls(&[(cell(0, 0), 1)]).expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::King, 1)]);
        let config = SolverConfig {
            beam_width: 0,
            ..SolverConfig::default()
        };

        let outcome = BeamSearchSolver::new(config)
            .search(&board, &inventory, &mut NoProgress)
            .expect("puzzle is valid");
        assert_eq!(
            outcome,
            SearchOutcome::Exhausted {
                depth: 1,
                best_health: 0,
                best_moves: 1
            }
        );
        assert_eq!(
            solve(&board, &inventory, &config, &mut NoProgress),
            Ok(None)
        );
    }

    #[test]
    fn zero_moves_per_state_is_exhausted_at_the_root() {
        let board = Board::with_skulls(&[(cell(0, 0), 1)]).expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::King, 1)]);
        let config = SolverConfig {
            moves_per_state: 0,
            ..SolverConfig::default()
        };

        let outcome = BeamSearchSolver::new(config)
            .search(&board, &inventory, &mut NoProgress)
            .expect("puzzle is valid");
        assert_eq!(
            outcome,
            SearchOutcome::Exhausted {
                depth: 0,
                best_health: 1,
                best_moves: 0
            }
        );
    }

    #[test]
    fn progress_is_reported_once_per_round() {
        let board = Board::with_skulls(&[(cell(0, 0), 1), (cell(7, 7), 1), (cell(0, 7), 1)])
            .expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::King, 3)]);
        let mut seen = Vec::new();

        let outcome = BeamSearchSolver::default()
            .search(&board, &inventory, &mut |p: &SearchProgress| seen.push(*p))
            .expect("puzzle is valid");

        assert!(outcome.is_solved());
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen.iter().map(|p| p.depth).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            seen.iter().map(|p| p.best_health).collect::<Vec<_>>(),
            vec![2, 1, 0]
        );
    }

    #[test]
    fn solution_found_on_last_round_is_returned() {
        let board = Board::with_skulls(&[(cell(3, 3), 2)]).expect("valid skulls");
        let inventory = Inventory::from_counts(&[(PieceKind::Rook, 2)]);
        let config = SolverConfig {
            max_depth: 2,
            ..SolverConfig::default()
        };

        let outcome = BeamSearchSolver::new(config)
            .search(&board, &inventory, &mut NoProgress)
            .expect("puzzle is valid");
        match outcome {
            SearchOutcome::Solved { history, depth } => {
                assert_eq!(depth, 2);
                assert_eq!(history.len(), 2);
            }
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn returned_solution_replays_to_a_solved_state() {
        let board = Board::with_skulls(&[
            (cell(1, 1), 2),
            (cell(1, 6), 1),
            (cell(4, 3), 3),
            (cell(6, 0), 1),
            (cell(6, 6), 2),
        ])
        .expect("valid skulls");
        let inventory = Inventory::from_counts(&[
            (PieceKind::Queen, 2),
            (PieceKind::Rook, 2),
            (PieceKind::Bishop, 2),
            (PieceKind::Knight, 2),
        ]);

        let solution = solve(&board, &inventory, &SolverConfig::default(), &mut NoProgress)
            .expect("puzzle is valid")
            .expect("puzzle should be solvable");
        let replayed = PuzzleState::new(board, inventory)
            .replay(&solution)
            .expect("solution should replay");
        assert!(replayed.is_solved());
    }
}
