pub use cnf_nexus_core as core;

pub use cnf_nexus_core::{to_clauses, to_cnf, to_dimacs, Cnf, Error, Expr, Lit, Result, Var};
