//! Elimination of derived connectives and negation push-down.
//!
//! The passes run in a fixed order, each over the whole tree:
//! equivalences, then implications, then negations. After [`eliminate`] the tree
//! contains only `And`, `Or` and literals.

use log::debug;

use crate::error::{InternalSnafu, Result};
use crate::formula::expr::{Expr, Op};
use crate::formula::rewrite::rewrite_bottom_up;

/// Equivalence: `(a = b) |- (a -> b) /\ (b -> a)`
pub fn eliminate_equivalences(expr: Expr) -> Result<Expr> {
    rewrite_bottom_up(expr, |node| match node {
        Expr::Equivalent { lhs, rhs } => {
            let forward = Expr::Implies {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
            };
            let backward = Expr::Implies { lhs: rhs, rhs: lhs };
            Expr::And {
                args: vec![forward, backward],
            }
        }
        node => node,
    })
}

/// Implication: `(a -> b) |- -a \/ b`
pub fn eliminate_implications(expr: Expr) -> Result<Expr> {
    rewrite_bottom_up(expr, |node| match node {
        Expr::Implies { lhs, rhs } => Expr::Or {
            args: vec![Expr::Not { arg: lhs }, *rhs],
        },
        node => node,
    })
}

enum Task {
    Visit { expr: Expr, negated: bool },
    Assemble(Op, usize),
}

/// Pushes every negation down to the literals (negation-normal form).
///
/// - Double negation: `--a |- a`
/// - De Morgan: `-(a /\ b) |- -a \/ -b` and `-(a \/ b) |- -a /\ -b`
/// - Literal: `-(v) |- (-v)`
///
/// The input must be free of `Implies` and `Equivalent`, otherwise [`Error::Internal`] is
/// returned.
///
/// [`Error::Internal`]: crate::error::Error::Internal
pub fn push_negations(expr: Expr) -> Result<Expr> {
    let mut tasks = vec![Task::Visit { expr, negated: false }];
    let mut done: Vec<Expr> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit { expr, negated } => match expr {
                Expr::Lit(lit) => done.push(Expr::Lit(if negated { -lit } else { lit })),
                Expr::Not { arg } => tasks.push(Task::Visit {
                    expr: *arg,
                    negated: !negated,
                }),
                Expr::And { args } => schedule(&mut tasks, Op::And, args, negated),
                Expr::Or { args } => schedule(&mut tasks, Op::Or, args, negated),
                Expr::Implies { .. } => return InternalSnafu { op: Op::Implies }.fail(),
                Expr::Equivalent { .. } => return InternalSnafu { op: Op::Equivalent }.fail(),
            },
            Task::Assemble(op, n) => {
                let args = done.split_off(done.len() - n);
                done.push(Expr::from_op(op, args)?);
            }
        }
    }

    debug_assert_eq!(done.len(), 1);
    Ok(done.pop().unwrap_or_else(|| unreachable!("negation push-down yields one expression")))
}

fn schedule(tasks: &mut Vec<Task>, op: Op, args: Vec<Expr>, negated: bool) {
    let op = if negated { op.dual() } else { op };
    tasks.push(Task::Assemble(op, args.len()));
    tasks.extend(args.into_iter().rev().map(|expr| Task::Visit { expr, negated }));
}

/// Rewrites `expr` into negation-normal form over `And`, `Or` and literals.
pub fn eliminate(expr: Expr) -> Result<Expr> {
    let expr = eliminate_equivalences(expr)?;
    debug!("eliminate: {} node(s) without equivalences", expr.iter().count());
    let expr = eliminate_implications(expr)?;
    debug!("eliminate: {} node(s) without implications", expr.iter().count());
    let expr = push_negations(expr)?;
    debug!("eliminate: {} node(s) in negation-normal form", expr.iter().count());
    Ok(expr)
}
