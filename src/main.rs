use anyhow::Context;
use clap::Parser;
use log::info;

use chess_bomb::search::beam_search::{BeamSearchSolver, SearchOutcome};
use chess_bomb::search::progress::SearchProgress;
use chess_bomb::search::solver_config::SolverConfig;
use chess_bomb::task::solve_task::{precheck, SolveReport};
use chess_bomb::utils::board_notation::{
    inventory_to_notation, parse_board_notation, parse_inventory_notation,
};
use chess_bomb::utils::render_puzzle_state::render_puzzle_state;
use chess_bomb::utils::solution_text::describe_solution;
use chess_bomb::PuzzleState;

/// Solve one Chess Bomb puzzle.
#[derive(Debug, Parser)]
#[command(name = "chess_bomb", version)]
struct Cli {
    /// Board notation: 8 ranks separated by '/', top row first.
    /// '.' empty, 1-9 hit points, w/g/b skull shorthands.
    #[arg(long)]
    board: String,

    /// Pieces available, e.g. "Q=1,R=2,K".
    #[arg(long)]
    pieces: String,

    /// States kept between rounds.
    #[arg(long, default_value_t = SolverConfig::default().beam_width)]
    beam_width: usize,

    /// Maximum rounds (and pieces) searched.
    #[arg(long, default_value_t = SolverConfig::default().max_depth)]
    max_depth: usize,

    /// Candidate moves expanded per state each round.
    #[arg(long, default_value_t = SolverConfig::default().moves_per_state)]
    moves_per_state: usize,

    /// Print the board before and after the solution.
    #[arg(long)]
    render: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let board = parse_board_notation(&cli.board).context("reading --board")?;
    let inventory = parse_inventory_notation(&cli.pieces).context("reading --pieces")?;
    let config = SolverConfig {
        beam_width: cli.beam_width,
        max_depth: cli.max_depth,
        moves_per_state: cli.moves_per_state,
    };

    let root = PuzzleState::new(board.clone(), inventory);
    if cli.render {
        println!("{}", render_puzzle_state(&root));
    }

    match precheck(&board, &inventory) {
        Some(SolveReport::NothingToSolve) => {
            println!("No skulls on the board.");
            return Ok(());
        }
        Some(SolveReport::NoPieces) => {
            println!("No pieces available.");
            return Ok(());
        }
        _ => {}
    }

    info!(
        "solving: remaining health {}, pieces {}",
        root.remaining_health(),
        inventory_to_notation(&inventory)
    );

    let mut log_round = |progress: &SearchProgress| {
        info!(
            "depth {}: best remaining health {}, pieces used {}",
            progress.depth, progress.best_health, progress.best_moves
        );
    };
    let outcome = BeamSearchSolver::new(config).search(&board, &inventory, &mut log_round)?;

    match outcome {
        SearchOutcome::Solved { history, .. } => {
            println!("Solved using {} pieces:", history.len());
            for line in describe_solution(&history) {
                println!("{line}");
            }
            if cli.render {
                let solved = root
                    .replay(&history)
                    .context("solution failed to replay")?;
                println!("{}", render_puzzle_state(&solved));
            }
        }
        SearchOutcome::Exhausted {
            best_health,
            best_moves,
            ..
        }
        | SearchOutcome::DepthLimitReached {
            best_health,
            best_moves,
            ..
        } => {
            println!("No solution found.");
            println!(
                "Best attempt left {best_health} hit points after {best_moves} pieces; \
                 try more pieces or a wider beam."
            );
        }
    }

    Ok(())
}
