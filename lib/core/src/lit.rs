use std::fmt::{Display, Formatter};
use std::ops::Neg;

use snafu::ensure;

use crate::error::{InvalidLiteralSnafu, Result};
use crate::formula::var::Var;

/// Signed propositional literal: the magnitude is the variable, the sign is the polarity.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Lit(i64);

impl Lit {
    pub const fn new(val: i64) -> Self {
        debug_assert!(val != 0 && val != i64::MIN, "literal must be non-zero and negatable");
        Lit(val)
    }

    /// Fallible counterpart of [`Lit::new`]: rejects `0` and `i64::MIN`.
    pub fn try_new(val: i64) -> Result<Self> {
        ensure!(val != 0 && val != i64::MIN, InvalidLiteralSnafu { value: val });
        Ok(Lit(val))
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn var(self) -> Var {
        Var(self.get().unsigned_abs())
    }

    pub const fn sign(self) -> i64 {
        self.get().signum()
    }

    pub const fn is_negated(self) -> bool {
        self.get() < 0
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl<L> From<&L> for Lit
where
    L: Into<Lit> + Copy,
{
    fn from(val: &L) -> Self {
        (*val).into()
    }
}

impl From<i64> for Lit {
    fn from(val: i64) -> Self {
        Self::new(val)
    }
}

impl From<i32> for Lit {
    fn from(val: i32) -> Self {
        Self::new(val as i64)
    }
}

impl From<Var> for Lit {
    fn from(var: Var) -> Self {
        var.lit()
    }
}

// Into<i64>
impl From<Lit> for i64 {
    fn from(lit: Lit) -> Self {
        lit.get()
    }
}

// -Lit
impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit(-self.0)
    }
}
