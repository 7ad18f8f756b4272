use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::io;
use std::slice::Iter;

use log::debug;
use snafu::{ensure, OptionExt};

use crate::error::{NotCnfSnafu, Result};
use crate::formula::expr::Expr;
use crate::formula::var::Var;
use crate::lit::Lit;

use clause::Clause;

pub mod clause;

/// Clause list ready to be handed over to a SAT solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cnf {
    pub clauses: Vec<Clause>,
}

impl Cnf {
    pub fn iter(&self) -> Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl Cnf {
    pub fn new() -> Self {
        Self { clauses: Vec::new() }
    }

    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        self.clauses.push(clause.into());
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn variables(&self) -> BTreeSet<Var> {
        self.iter().flat_map(Clause::iter).map(|lit| lit.var()).collect()
    }

    /// Number of distinct variables, as reported in the DIMACS header.
    pub fn num_vars(&self) -> usize {
        self.variables().len()
    }

    /// DIMACS rendering of this clause list, see [`Dimacs`].
    pub fn dimacs(&self) -> Dimacs<'_> {
        Dimacs(self)
    }

    /// Writes the DIMACS rendering into `writer`.
    pub fn write_dimacs<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self.dimacs())
    }

    pub fn into_vecs(self) -> Vec<Vec<i64>> {
        self.clauses.into_iter().map(Vec::<i64>::from).collect()
    }
}

impl<I> From<I> for Cnf
where
    I: IntoIterator,
    I::Item: Into<Clause>,
{
    fn from(iter: I) -> Self {
        let mut cnf = Self::new();
        for clause in iter.into_iter() {
            cnf.add_clause(clause)
        }
        cnf
    }
}

fn clause_of(expr: &Expr) -> Result<Clause> {
    match expr {
        Expr::Lit(lit) => Ok(Clause::new(vec![*lit])),
        Expr::Or { args } => {
            let lits = args
                .iter()
                .map(|arg| arg.as_lit().context(NotCnfSnafu))
                .collect::<Result<Vec<Lit>>>()?;
            Ok(Clause::new(lits))
        }
        _ => NotCnfSnafu.fail(),
    }
}

impl Cnf {
    /// Clause list of a structurally CNF expression, [`Error::NotCnf`](crate::error::Error::NotCnf) otherwise.
    pub fn from_expr(expr: &Expr) -> Result<Self> {
        ensure!(expr.is_cnf(), NotCnfSnafu);
        let clauses = match expr {
            Expr::And { args } => args.iter().map(clause_of).collect::<Result<Vec<_>>>()?,
            _ => vec![clause_of(expr)?],
        };
        debug!("Cnf::from_expr: {} clause(s)", clauses.len());
        Ok(Cnf { clauses })
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for clause in self.clauses.iter() {
            list.entry(&format_args!("{}", clause));
        }
        list.finish()
    }
}

/// DIMACS view of a [`Cnf`]: the `p cnf <vars> <clauses>` header followed by one
/// `0`-terminated line per clause.
pub struct Dimacs<'a>(&'a Cnf);

impl Display for Dimacs<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cnf = self.0;
        writeln!(f, "p cnf {} {}", cnf.num_vars(), cnf.num_clauses())?;
        for clause in cnf.iter() {
            for lit in clause.iter() {
                write!(f, "{} ", lit)?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}

/// Clause list of a CNF expression, e.g. for an in-process solver taking `Vec<Vec<i64>>`.
pub fn to_clauses(expr: &Expr) -> Result<Vec<Vec<i64>>> {
    Ok(Cnf::from_expr(expr)?.into_vecs())
}

/// DIMACS text of a CNF expression.
pub fn to_dimacs(expr: &Expr) -> Result<String> {
    Ok(Cnf::from_expr(expr)?.dimacs().to_string())
}
