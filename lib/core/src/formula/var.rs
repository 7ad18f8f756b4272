use std::fmt::{Display, Formatter};
use std::ops;

use crate::formula::expr::Expr;
use crate::lit::Lit;

/// Propositional variable, the magnitude of a [`Lit`].
#[derive(Debug, Copy, Clone, Ord, PartialOrd, PartialEq, Eq, Hash)]
pub struct Var(pub u64);

impl Var {
    /// Positive literal of this variable.
    pub const fn lit(self) -> Lit {
        debug_assert!(self.0 != 0 && self.0 <= i64::MAX as u64, "variable index out of range");
        Lit::new(self.0 as i64)
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "x{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// !Var
impl ops::Not for Var {
    type Output = Expr;

    fn not(self) -> Self::Output {
        !Expr::from(self)
    }
}

// Var & Var
// Var & Expr
impl<T> ops::BitAnd<T> for Var
where
    T: Into<Expr>,
{
    type Output = Expr;

    fn bitand(self, rhs: T) -> Self::Output {
        Expr::from(self) & rhs
    }
}

// Var | Var
// Var | Expr
impl<T> ops::BitOr<T> for Var
where
    T: Into<Expr>,
{
    type Output = Expr;

    fn bitor(self, rhs: T) -> Self::Output {
        Expr::from(self) | rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_display() {
        assert_eq!(format!("{}", Var(3)), "3");
        assert_eq!(format!("{:#}", Var(3)), "x3");
    }

    #[test]
    fn test_var_ops() {
        let (x1, x2) = (Var(1), Var(2));
        assert_eq!(!x1, Expr::not(1));
        assert_eq!(x1 & x2, Expr::And { args: vec![Expr::from(1), Expr::from(2)] });
        assert_eq!(x1 | !x2, Expr::Or { args: vec![Expr::from(1), Expr::not(2)] });
    }
}
