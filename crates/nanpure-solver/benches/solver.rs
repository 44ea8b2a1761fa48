//! Benchmarks for the backtracking solver.
//!
//! Run with `cargo bench --bench solver`.

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use nanpure_core::Grid;
use nanpure_solver::PuzzleSolver;

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("empty", Grid::new()),
        (
            "easy_30_clues",
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .parse()
                .unwrap(),
        ),
        (
            "hard_16_clues",
            ".3..1.......4..1...5.....9.2.....6.4....35...1........4..6............5..9......."
                .parse()
                .unwrap(),
        ),
    ];

    for (name, puzzle) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", name), &puzzle, |b, puzzle| {
            b.iter_batched_ref(
                || PuzzleSolver::new(hint::black_box(puzzle.clone())).unwrap(),
                |solver| {
                    let solution = solver.solve().unwrap();
                    hint::black_box(solution)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
