#[macro_use]
extern crate criterion;

use classical_search::{
    games::TicTacToe, problems::Sudoku, AlphaBeta, BacktrackingSolver, MinimaxConfig,
    SolverConfig, VariableOrdering,
};
use criterion::{black_box, BenchmarkId, Criterion};
use std::time::Duration;

const EASY: &str =
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
const HARD: &str =
    "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4..";

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.measurement_time(Duration::from_secs(10));

    let empty = TicTacToe::new();
    for use_pruning in [true, false] {
        let config = MinimaxConfig::default().with_pruning(use_pruning);

        group.bench_with_input(
            BenchmarkId::new("full_depth/pruning", use_pruning),
            &use_pruning,
            |b, &_| {
                b.iter(|| {
                    let mut engine = AlphaBeta::new(config.clone());
                    black_box(engine.best_move(&empty, 9))
                })
            },
        );
    }

    // Shallower searches from the empty board
    for depth in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut engine = AlphaBeta::new(MinimaxConfig::default());
                black_box(engine.best_move(&empty, depth))
            })
        });
    }

    group.finish();
}

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");

    for (name, input) in [("easy", EASY), ("hard", HARD)] {
        let puzzle = Sudoku::parse(input).unwrap();

        group.bench_with_input(BenchmarkId::new("mrv", name), &puzzle, |b, puzzle| {
            b.iter(|| {
                let mut puzzle = puzzle.clone();
                let mut solver = BacktrackingSolver::default();
                black_box(solver.solve(&mut puzzle))
            })
        });
    }

    // Natural ordering is far slower on hard puzzles, compare on the easy one
    let puzzle = Sudoku::parse(EASY).unwrap();
    group.bench_function("natural/easy", |b| {
        b.iter(|| {
            let mut puzzle = puzzle.clone();
            let mut solver = BacktrackingSolver::new(
                SolverConfig::default().with_variable_ordering(VariableOrdering::Natural),
            );
            black_box(solver.solve(&mut puzzle))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_minimax, bench_backtracking);
criterion_main!(benches);
