use log::debug;

use crate::error::Result;
use crate::formula::distribute::distribute;
use crate::formula::eliminate::eliminate;
use crate::formula::expr::Expr;
use crate::formula::flatten::flatten;

pub mod distribute;
pub mod eliminate;
pub mod expr;
pub mod flatten;
mod rewrite;
pub mod shape;
pub mod var;

/// Converts `expr` into an equivalent formula in conjunctive normal form.
///
/// Derived connectives are eliminated and negations pushed to the literals, then
/// flattening and distribution alternate until the result is structurally CNF. No
/// auxiliary variables are introduced, so the output may be exponentially larger than the
/// input.
pub fn to_cnf(expr: Expr) -> Result<Expr> {
    debug!("-> to_cnf: {} node(s)", expr.iter().count());
    let mut expr = eliminate(expr)?;
    let mut round = 0usize;
    while !expr.is_cnf() {
        round += 1;
        expr = flatten(expr)?;
        expr = distribute(expr)?;
        debug!("to_cnf: round {round}: {} node(s)", expr.iter().count());
    }
    debug!("<- to_cnf: {} node(s) after {round} round(s)", expr.iter().count());
    Ok(expr)
}

impl Expr {
    pub fn to_cnf(self) -> Result<Expr> {
        to_cnf(self)
    }
}
