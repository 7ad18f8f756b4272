use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use cnf_nexus::core::demos::puzzle;
use cnf_nexus::core::{to_cnf, to_dimacs, Expr, Result};

/// `x1 = (x2 = (... = xn))`, doubling in clause count with each link.
fn equivalence_chain(n: i64) -> Expr {
    (1..n).rev().fold(Expr::from(n), |acc, v| Expr::equivalent(v, acc))
}

/// `(x1 /\ y1) \/ ... \/ (xn /\ yn)`, with `2^n` clauses after distribution.
fn or_of_ands(n: i64) -> Result<Expr> {
    let args = (0..n)
        .map(|i| Expr::and([2 * i + 1, 2 * i + 2]))
        .collect::<Result<Vec<_>>>()?;
    Expr::or(args)
}

fn my_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conversion");

    let puzzle = puzzle().unwrap();
    group.bench_function("puzzle to_cnf", |b| {
        b.iter_batched(|| puzzle.clone(), |e| to_cnf(e).unwrap(), BatchSize::SmallInput)
    });

    let chain = equivalence_chain(6);
    group.bench_function("equivalence chain to_cnf", |b| {
        b.iter_batched(|| chain.clone(), |e| to_cnf(e).unwrap(), BatchSize::SmallInput)
    });

    let wide = or_of_ands(10).unwrap();
    group.bench_function("or of ands to_cnf", |b| {
        b.iter_batched(|| wide.clone(), |e| to_cnf(e).unwrap(), BatchSize::SmallInput)
    });

    let cnf = to_cnf(puzzle).unwrap();
    group.bench_with_input("puzzle to_dimacs", &cnf, |b, cnf| b.iter(|| to_dimacs(cnf).unwrap()));

    group.finish();
}

criterion_group!(benches, my_benches);
criterion_main!(benches);
