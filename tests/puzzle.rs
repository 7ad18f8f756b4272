use itertools::Itertools;

use cnf_nexus::core::demos::puzzle;
use cnf_nexus::core::{to_clauses, to_cnf, Expr};

fn satisfies(model: &[i64], clauses: &[Vec<i64>]) -> bool {
    clauses.iter().all(|clause| clause.iter().any(|lit| model.contains(lit)))
}

/// All models over variables `1..=n`, found by enumeration.
fn models(n: usize, clauses: &[Vec<i64>]) -> Vec<Vec<i64>> {
    (0..1u32 << n)
        .map(|bits| {
            (1..=n as i64)
                .map(|v| if bits & (1 << (v - 1)) != 0 { v } else { -v })
                .collect_vec()
        })
        .filter(|model| satisfies(model, clauses))
        .collect()
}

#[test]
fn puzzle_has_unique_answer() -> color_eyre::Result<()> {
    let cnf = to_cnf(puzzle()?)?;
    assert!(cnf.is_cnf());
    assert_eq!(cnf.num_vars(), 6);

    let clauses = to_clauses(&cnf)?;
    assert_eq!(models(6, &clauses), vec![vec![-1, -2, -3, -4, 5, -6]]);
    Ok(())
}

#[test]
fn puzzle_conjuncts_convert_independently() -> color_eyre::Result<()> {
    let whole = to_clauses(&to_cnf(puzzle()?)?)?;
    let part = to_clauses(&to_cnf(Expr::equivalent(3, Expr::and([1, 2])?))?)?;
    assert!(part.iter().all(|clause| whole.contains(clause)));
    Ok(())
}
