//! Sample formulas used by the command-line tool, the integration tests and the benches.

use crate::error::Result;
use crate::formula::expr::Expr;

/// Which answer is correct?
///
/// 1. All of the below.
/// 2. None of the below.
/// 3. All of the above.
/// 4. At least one of the above.
/// 5. None of the above.
/// 6. None of the above.
///
/// Variable `i` stands for "answer `i` is correct".
pub fn puzzle() -> Result<Expr> {
    let e1 = Expr::equivalent(1, Expr::and([2, 3, 4, 5, 6])?);
    let e2 = Expr::equivalent(2, Expr::not(Expr::or([3, 4, 5, 6])?));
    let e3 = Expr::equivalent(3, Expr::and([1, 2])?);
    let e4 = Expr::equivalent(4, Expr::or([1, 2, 3])?);
    let e5 = Expr::equivalent(5, Expr::not(Expr::or([1, 2, 3, 4])?));
    let e6 = Expr::equivalent(6, Expr::not(Expr::or([1, 2, 3, 4, 5])?));
    Expr::and([e1, e2, e3, e4, e5, e6])
}

/// `(2 = 3) = ((-2 \/ 3) /\ (-3 \/ 2))`, valid but kept unsimplified by the conversion.
pub fn tautology() -> Result<Expr> {
    let s = Expr::equivalent(2, 3);
    let c = Expr::and([Expr::or([-2, 3])?, Expr::or([-3, 2])?])?;
    Ok(Expr::equivalent(s, c))
}
