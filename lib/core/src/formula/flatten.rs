use crate::error::Result;
use crate::formula::expr::{Expr, Op};
use crate::formula::rewrite::rewrite_bottom_up;

/// Merges nested same-operator `And`/`Or` nodes into single n-ary nodes.
pub fn flatten(expr: Expr) -> Result<Expr> {
    rewrite_bottom_up(expr, |node| match node {
        Expr::And { args } => Expr::And {
            args: consolidate(Op::And, args),
        },
        Expr::Or { args } => Expr::Or {
            args: consolidate(Op::Or, args),
        },
        node => node,
    })
}

// Consolidate: AND(x1,AND(x2,x3)) |- AND(x1,x2,x3)
// Consolidate: OR(x1,OR(x2,x3)) |- OR(x1,x2,x3)
fn consolidate(op: Op, args: Vec<Expr>) -> Vec<Expr> {
    let mut new_args = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Expr::And { args: sub_args } if op == Op::And => new_args.extend(sub_args),
            Expr::Or { args: sub_args } if op == Op::Or => new_args.extend(sub_args),
            _ => new_args.push(arg),
        }
    }
    new_args
}
