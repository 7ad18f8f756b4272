use log::trace;

use crate::error::Result;
use crate::formula::expr::Expr;
use crate::formula::rewrite::rewrite_bottom_up;

/// Distributes `Or` over `And` at every depth of the tree.
///
/// Every `Or` holding an `And` operand is expanded into an `And` of `Or`s. Operands keep
/// their relative order around the split position. The result may still contain nested
/// same-operator nodes, which [`flatten`](crate::formula::flatten::flatten) merges.
pub fn distribute(expr: Expr) -> Result<Expr> {
    rewrite_bottom_up(expr, |node| match node {
        Expr::Or { args } => distribute_or(args),
        node => node,
    })
}

fn is_and(expr: &Expr) -> bool {
    matches!(expr, Expr::And { .. })
}

// Distribution: (x1 \/ (a1 /\ ... /\ am) \/ x2) |- (x1 \/ a1 \/ x2) /\ ... /\ (x1 \/ am \/ x2)
//
// The first `And` operand is split. Each resulting disjunction is split again until none of
// its operands is an `And`; pending disjunctions are kept on a stack, pushed in reverse so
// that the output follows the left-to-right order of the conjuncts.
fn distribute_or(args: Vec<Expr>) -> Expr {
    if !args.iter().any(is_and) {
        return Expr::Or { args };
    }

    let mut pending = vec![args];
    let mut clauses = Vec::new();
    while let Some(mut args) = pending.pop() {
        let pos = match args.iter().position(is_and) {
            Some(pos) => pos,
            None => {
                clauses.push(Expr::Or { args });
                continue;
            }
        };
        let conjuncts = match args.remove(pos) {
            Expr::And { args } => args,
            _ => unreachable!("operand at {pos} is an And"),
        };
        let (before, after) = args.split_at(pos);
        for conjunct in conjuncts.into_iter().rev() {
            let mut split = Vec::with_capacity(args.len() + 1);
            split.extend_from_slice(before);
            split.push(conjunct);
            split.extend_from_slice(after);
            pending.push(split);
        }
    }

    trace!("distribute_or: produced {} disjunction(s)", clauses.len());
    Expr::And { args: clauses }
}
