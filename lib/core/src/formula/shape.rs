use std::collections::BTreeSet;

use crate::formula::expr::{Expr, Op};
use crate::formula::var::Var;
use crate::lit::Lit;

impl Expr {
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Lit(_))
    }

    /// A literal, or an `Or` of at least two literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Expr::Lit(_) => true,
            Expr::Or { args } => Op::Or.arity().admits(args.len()) && args.iter().all(Expr::is_literal),
            _ => false,
        }
    }

    /// Structural CNF: a literal, a clause, or an `And` of literals and clauses.
    pub fn is_cnf(&self) -> bool {
        match self {
            Expr::And { args } => Op::And.arity().admits(args.len()) && args.iter().all(Expr::is_clause),
            _ => self.is_clause(),
        }
    }

    /// Pre-order traversal over this expression and all of its sub-expressions.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Literals in left-to-right order, with repetitions.
    pub fn lits(&self) -> impl Iterator<Item = Lit> + '_ {
        self.iter().filter_map(Expr::as_lit)
    }

    /// Distinct variables referenced anywhere in the expression.
    pub fn variables(&self) -> BTreeSet<Var> {
        self.lits().map(Lit::var).collect()
    }

    pub fn num_vars(&self) -> usize {
        self.variables().len()
    }
}

/// See [`Expr::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        match expr {
            Expr::Lit(_) => {}
            Expr::Not { arg } => self.stack.push(arg),
            Expr::Implies { lhs, rhs } | Expr::Equivalent { lhs, rhs } => {
                self.stack.push(rhs);
                self.stack.push(lhs);
            }
            Expr::And { args } | Expr::Or { args } => self.stack.extend(args.iter().rev()),
        }
        Some(expr)
    }
}
