//! Throughput benchmark for the sparse generation engine.
//!
//! The engine's cost tracks the living population, not the board area, so
//! the interesting axis is population size. Each run seeds a random soup,
//! advances it repeatedly, and reports generations per second for the
//! serial and parallel engines under both edge policies.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use life_board::domain::{
    BoardConfig, Cell, LivingSet, next_generation, next_generation_parallel,
};

fn random_soup(board_size: i32, density: f64, seed: u64) -> LivingSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..board_size)
        .flat_map(|y| (0..board_size).map(move |x| (x, y)))
        .filter(|_| rng.random_bool(density))
        .map(|(x, y)| Cell::new(x, y))
        .collect()
}

fn benchmark(
    label: &str,
    soup: &LivingSet,
    config: &BoardConfig,
    iterations: u32,
    engine: fn(&LivingSet, &BoardConfig) -> LivingSet,
) {
    let mut current = soup.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        current = engine(&current, config);
    }
    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "  {label:<12} {:>8.1} gen/s  (final population {})",
        iterations as f64 / elapsed,
        current.len()
    );
}

fn main() {
    let iterations = 200;

    for board_size in [50, 100, 250] {
        let soup = random_soup(board_size, 0.3, 0xC0FFEE);
        println!(
            "board {board_size}x{board_size}, initial population {}:",
            soup.len()
        );

        for wrap in [false, true] {
            let config = BoardConfig {
                board_size,
                wrap,
                ..BoardConfig::default()
            };
            let policy = if wrap { "wrap" } else { "bounded" };

            benchmark(
                &format!("serial/{policy}"),
                &soup,
                &config,
                iterations,
                next_generation,
            );
            benchmark(
                &format!("rayon/{policy}"),
                &soup,
                &config,
                iterations,
                next_generation_parallel,
            );
        }
        println!();
    }
}
