//! Conversion of propositional formulas into conjunctive normal form.
//!
//! Formulas are built from literals with [`Expr`] constructors, converted with
//! [`to_cnf`], and exported as a clause list ([`to_clauses`]) or DIMACS text
//! ([`to_dimacs`]).
//!
//! ```
//! use cnf_nexus_core::{to_cnf, to_dimacs, Expr};
//!
//! let formula = Expr::equivalent(2, 3);
//! let cnf = to_cnf(formula)?;
//! assert_eq!(cnf, Expr::and([Expr::or([-2, 3])?, Expr::or([-3, 2])?])?);
//! assert_eq!(to_dimacs(&cnf)?, "p cnf 2 2\n-2 3 0\n-3 2 0\n");
//! # Ok::<(), cnf_nexus_core::Error>(())
//! ```

pub mod cnf;
pub mod demos;
pub mod error;
pub mod formula;
pub mod lit;

pub use crate::cnf::{to_clauses, to_dimacs, Cnf};
pub use crate::error::{Error, Result};
pub use crate::formula::expr::{Arity, Expr, Op};
pub use crate::formula::to_cnf;
pub use crate::formula::var::Var;
pub use crate::lit::Lit;
