use snafu::Snafu;

use crate::formula::expr::{Arity, Op};
use crate::formula::var::Var;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Operator `{}` expects {} operand(s), got {}", op, expected, actual))]
    Arity { op: Op, expected: Arity, actual: usize },

    #[snafu(display("Invalid literal value: {}", value))]
    InvalidLiteral { value: i64 },

    #[snafu(display("Expression is not in CNF"))]
    NotCnf,

    /// Negation push-down met an operator which must already be eliminated.
    #[snafu(display("Operator `{}` should have been eliminated before pushing negations", op))]
    Internal { op: Op },

    #[snafu(display("Assignment does not contain variable {:#}", var))]
    Unassigned { var: Var },
}
