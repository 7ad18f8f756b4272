use cnf_nexus::core::{to_clauses, to_cnf, to_dimacs, Expr};
use dimacs::{parse_dimacs, Instance, Sign};

fn parsed_clauses(text: &str) -> (u64, Vec<Vec<i64>>) {
    match parse_dimacs(text).unwrap() {
        Instance::Cnf { num_vars, clauses } => {
            let clauses = clauses
                .iter()
                .map(|clause| {
                    clause
                        .lits()
                        .iter()
                        .map(|lit| {
                            let v = lit.var().to_u64() as i64;
                            match lit.sign() {
                                Sign::Pos => v,
                                Sign::Neg => -v,
                            }
                        })
                        .collect()
                })
                .collect();
            (num_vars, clauses)
        }
        _ => panic!("expected a CNF instance"),
    }
}

#[test]
fn dimacs_is_readable_by_parser() -> color_eyre::Result<()> {
    let e = Expr::and([Expr::or([1, 3])?, Expr::or([-1, 2])?, Expr::or([2, 3, -4])?])?;
    let text = to_dimacs(&e)?;
    let (num_vars, clauses) = parsed_clauses(&text);
    assert_eq!(num_vars, 4);
    assert_eq!(clauses, to_clauses(&e)?);
    Ok(())
}

#[test]
fn dimacs_of_converted_equivalence() -> color_eyre::Result<()> {
    let cnf = to_cnf(Expr::equivalent(3, Expr::equivalent(1, -2)))?;
    let text = to_dimacs(&cnf)?;
    assert!(text.starts_with("p cnf 3 6\n"));
    let (num_vars, clauses) = parsed_clauses(&text);
    assert_eq!(num_vars, 3);
    assert_eq!(clauses, to_clauses(&cnf)?);
    Ok(())
}
