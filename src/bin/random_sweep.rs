//! Seeded sweep over random puzzles, printing one CSV row per beam width.

use std::time::Instant;

use chrono::Local;
use clap::Parser;

use chess_bomb::search::beam_search::{BeamSearchSolver, SearchOutcome};
use chess_bomb::search::progress::NoProgress;
use chess_bomb::search::solver_config::SolverConfig;
use chess_bomb::task::solve_task::precheck;
use chess_bomb::utils::puzzle_generator::{GeneratorConfig, PuzzleGenerator};
use chess_bomb::PuzzleState;

#[derive(Debug, Parser)]
#[command(name = "random_sweep")]
struct Cli {
    /// Largest beam width tried; widths run 1..=max.
    #[arg(long, default_value_t = 16)]
    max_beam_width: usize,

    /// Puzzles per width.
    #[arg(long, default_value_t = 50)]
    puzzles: usize,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    #[arg(long, default_value_t = 6)]
    skulls: usize,

    #[arg(long, default_value_t = 3)]
    max_hit_points: i32,

    #[arg(long, default_value_t = 8)]
    pieces: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    let generator_config = GeneratorConfig {
        skulls: cli.skulls,
        max_hit_points: cli.max_hit_points,
        pieces: cli.pieces,
    };

    println!(
        "# random_sweep started={} seed={} skulls={} max_hp={} pieces={}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        cli.seed,
        cli.skulls,
        cli.max_hit_points,
        cli.pieces
    );
    println!("beam_width,solved,exhausted,depth_limited,skipped,avg_pieces,total_ms");

    for beam_width in 1..=cli.max_beam_width.max(1) {
        let solver = BeamSearchSolver::new(SolverConfig {
            beam_width,
            ..SolverConfig::default()
        });
        let mut generator = PuzzleGenerator::new(cli.seed, generator_config);
        let (mut solved, mut exhausted, mut depth_limited, mut skipped) = (0usize, 0, 0, 0);
        let mut pieces_used = 0usize;
        let start = Instant::now();

        for _ in 0..cli.puzzles {
            let (board, inventory) = generator.next_puzzle();
            if precheck(&board, &inventory).is_some() {
                skipped += 1;
                continue;
            }
            match solver.search(&board, &inventory, &mut NoProgress)? {
                SearchOutcome::Solved { history, .. } => {
                    let replayed = PuzzleState::new(board, inventory).replay(&history);
                    anyhow::ensure!(
                        replayed.is_some_and(|state| state.is_solved()),
                        "solution did not replay at beam width {beam_width}"
                    );
                    solved += 1;
                    pieces_used += history.len();
                }
                SearchOutcome::Exhausted { .. } => exhausted += 1,
                SearchOutcome::DepthLimitReached { .. } => depth_limited += 1,
            }
        }

        let avg_pieces = if solved == 0 {
            0.0
        } else {
            pieces_used as f64 / solved as f64
        };
        println!(
            "{},{},{},{},{},{:.2},{}",
            beam_width,
            solved,
            exhausted,
            depth_limited,
            skipped,
            avg_pieces,
            start.elapsed().as_millis()
        );
    }

    Ok(())
}
