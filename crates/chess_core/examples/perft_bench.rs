//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth]
//!
//! Examples:
//!   # Default: depth 4 from the starting position
//!   cargo flamegraph --example perft_bench -p chess_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p chess_core -- 5

use chess_core::{perft, Board, Color};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    println!("Perft benchmark from the starting position");
    println!("{:<8} {:>12} {:>10} {:>12}", "Depth", "Nodes", "Time(ms)", "NPS");
    println!("{}", "-".repeat(46));

    for d in 1..=depth {
        let mut board = Board::new();
        let start = Instant::now();
        let nodes = perft(&mut board, Color::White, d);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            (nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        println!(
            "{:<8} {:>12} {:>10} {:>12}",
            d,
            nodes,
            elapsed.as_millis(),
            nps
        );
    }
}
