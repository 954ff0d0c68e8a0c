//! Solver benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example solve_bench -p nogo_core -- [size] [diagram]
//!
//! Examples:
//!   # Default: the standard positions below
//!   cargo flamegraph --example solve_bench -p nogo_core
//!
//!   # Empty 4x4 board
//!   cargo flamegraph --example solve_bench -p nogo_core -- 4
//!
//!   # Custom position, rows separated by '/', Black to play
//!   cargo flamegraph --example solve_bench -p nogo_core -- 4 "..../.XO./.OX./...."

use nogo_core::{GoBoard, Solver, Stone};
use std::env;
use std::time::Instant;

/// Standard positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Empty 3x3", ".../.../..."),
    ("Center 3x3", ".../.X./..."),
    ("Empty 4x4", "..../..../..../...."),
    ("Diagonal 4x4", "X.../.O../..X./...O"),
    ("Edge 4x4", ".XO./..../..../.OX."),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let size: Option<usize> = args.get(1).and_then(|s| s.parse().ok());

    match (size, args.get(2)) {
        (_, Some(diagram)) => run_single_position(diagram),
        (Some(size), None) => run_single_position(&vec![".".repeat(size); size].join("/")),
        (None, None) => run_all_positions(),
    }
}

fn parse(diagram: &str) -> GoBoard {
    match GoBoard::from_diagram(&diagram.replace('/', "\n"), Stone::Black) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("bad diagram {diagram:?}: {e}");
            std::process::exit(1);
        }
    }
}

fn run_single_position(diagram: &str) {
    let board = parse(diagram);
    println!("{board}");
    println!();

    let mut solver = Solver::default();
    let start = Instant::now();
    let outcome = solver.solve(&board);
    let elapsed = start.elapsed();
    let nodes = solver.nodes();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Winner: {}", outcome.winner.symbol());
    println!("First move: {:?}", outcome.first_move);
    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_positions() {
    println!("=== Solve Benchmark Suite ===");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, diagram) in TEST_POSITIONS {
        let board = parse(diagram);

        print!("{name:.<30}");

        let mut solver = Solver::default();
        let start = Instant::now();
        let outcome = solver.solve(&board);
        let elapsed = start.elapsed();
        let nodes = solver.nodes();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(
            " {} wins, {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)",
            outcome.winner.symbol()
        );
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
