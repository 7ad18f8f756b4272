use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::ops;

use itertools::Itertools;
use log::trace;
use snafu::{ensure, OptionExt};
use tap::Tap;

use crate::error::{AritySnafu, Result, UnassignedSnafu};
use crate::formula::var::Var;
use crate::lit::Lit;

/// Propositional formula.
///
/// `And` and `Or` are n-ary and keep their operands in insertion order. The checked
/// constructors ([`Expr::and`], [`Expr::or`], [`Expr::from_op`]) guarantee at least two
/// operands; every rewrite in this crate preserves that invariant.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Lit(Lit),
    Not { arg: Box<Expr> },
    Implies { lhs: Box<Expr>, rhs: Box<Expr> },
    Equivalent { lhs: Box<Expr>, rhs: Box<Expr> },
    And { args: Vec<Expr> },
    Or { args: Vec<Expr> },
}

/// Connective tag of a non-literal [`Expr`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    And,
    Or,
    Not,
    Implies,
    Equivalent,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub const fn admits(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::AtLeast(k) => n >= k,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(k) => write!(f, "exactly {k}"),
            Arity::AtLeast(k) => write!(f, "at least {k}"),
        }
    }
}

impl Op {
    pub const fn arity(self) -> Arity {
        match self {
            Op::And | Op::Or => Arity::AtLeast(2),
            Op::Not => Arity::Exactly(1),
            Op::Implies | Op::Equivalent => Arity::Exactly(2),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Op::And => "And",
            Op::Or => "Or",
            Op::Not => "Not",
            Op::Implies => "Implies",
            Op::Equivalent => "Equivalent",
        }
    }

    /// Infix symbol (prefix for `Not`).
    pub const fn symbol(self) -> &'static str {
        match self {
            Op::And => "/\\",
            Op::Or => "\\/",
            Op::Not => "-",
            Op::Implies => "->",
            Op::Equivalent => "=",
        }
    }

    /// De Morgan dual: `And <-> Or`, other operators are self-dual here.
    pub const fn dual(self) -> Op {
        match self {
            Op::And => Op::Or,
            Op::Or => Op::And,
            op => op,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Expression split into its connective and owned operands.
pub(crate) enum Node {
    Leaf(Lit),
    Branch(Op, Vec<Expr>),
}

// Constructors
impl Expr {
    pub fn and<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Self::from_op(Op::And, args.into_iter().map_into::<Expr>().collect_vec())
    }

    pub fn or<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Self::from_op(Op::Or, args.into_iter().map_into::<Expr>().collect_vec())
    }

    pub fn not(arg: impl Into<Expr>) -> Self {
        Expr::Not {
            arg: Box::new(arg.into()),
        }
    }

    pub fn implies(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::Implies {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn equivalent(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::Equivalent {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    /// Literal from a raw value, rejecting `0`.
    pub fn try_lit(val: i64) -> Result<Self> {
        Ok(Expr::Lit(Lit::try_new(val)?))
    }

    /// Builds a node from an operator tag and a list of operands, checking the arity of `op`.
    pub fn from_op(op: Op, args: Vec<Expr>) -> Result<Self> {
        let expected = op.arity();
        let actual = args.len();
        ensure!(expected.admits(actual), AritySnafu { op, expected, actual });
        let arity_error = |_: Vec<Expr>| AritySnafu { op, expected, actual }.build();
        let expr = match op {
            Op::And => Expr::And { args },
            Op::Or => Expr::Or { args },
            Op::Not => {
                let [arg] = <[Expr; 1]>::try_from(args).map_err(arity_error)?;
                Expr::not(arg)
            }
            Op::Implies => {
                let [lhs, rhs] = <[Expr; 2]>::try_from(args).map_err(arity_error)?;
                Expr::implies(lhs, rhs)
            }
            Op::Equivalent => {
                let [lhs, rhs] = <[Expr; 2]>::try_from(args).map_err(arity_error)?;
                Expr::equivalent(lhs, rhs)
            }
        };
        Ok(expr)
    }

    pub(crate) fn into_node(self) -> Node {
        match self {
            Expr::Lit(lit) => Node::Leaf(lit),
            Expr::Not { arg } => Node::Branch(Op::Not, vec![*arg]),
            Expr::Implies { lhs, rhs } => Node::Branch(Op::Implies, vec![*lhs, *rhs]),
            Expr::Equivalent { lhs, rhs } => Node::Branch(Op::Equivalent, vec![*lhs, *rhs]),
            Expr::And { args } => Node::Branch(Op::And, args),
            Expr::Or { args } => Node::Branch(Op::Or, args),
        }
    }
}

impl Expr {
    /// Connective of this node, `None` for a literal.
    pub fn op(&self) -> Option<Op> {
        match self {
            Expr::Lit(_) => None,
            Expr::Not { .. } => Some(Op::Not),
            Expr::Implies { .. } => Some(Op::Implies),
            Expr::Equivalent { .. } => Some(Op::Equivalent),
            Expr::And { .. } => Some(Op::And),
            Expr::Or { .. } => Some(Op::Or),
        }
    }

    pub fn as_lit(&self) -> Option<Lit> {
        match self {
            Expr::Lit(lit) => Some(*lit),
            _ => None,
        }
    }

    /// Evaluates the formula under a (total on its variables) assignment.
    pub fn eval(&self, mapping: &HashMap<Var, bool>) -> Result<bool> {
        let value = match self {
            Expr::Lit(lit) => {
                let var = lit.var();
                let value = *mapping.get(&var).context(UnassignedSnafu { var })?;
                value != lit.is_negated()
            }
            Expr::Not { arg } => !arg.eval(mapping)?,
            Expr::Implies { lhs, rhs } => !lhs.eval(mapping)? || rhs.eval(mapping)?,
            Expr::Equivalent { lhs, rhs } => lhs.eval(mapping)? == rhs.eval(mapping)?,
            Expr::And { args } => {
                let mut value = true;
                for arg in args {
                    value &= arg.eval(mapping)?;
                }
                value
            }
            Expr::Or { args } => {
                let mut value = false;
                for arg in args {
                    value |= arg.eval(mapping)?;
                }
                value
            }
        };
        Ok(value.tap(|x| trace!("<- Expr::eval({self}) = {x}")))
    }
}

enum CloneTask<'a> {
    Visit(&'a Expr),
    Assemble(Op, usize),
}

fn pop_operand(done: &mut Vec<Expr>) -> Box<Expr> {
    Box::new(done.pop().unwrap_or_else(|| unreachable!("operands are copied before their parent")))
}

/// Deep copy driven by an explicit work-stack, so copying a deep tree does not grow the
/// call stack.
impl Clone for Expr {
    fn clone(&self) -> Self {
        let mut tasks = vec![CloneTask::Visit(self)];
        let mut done: Vec<Expr> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                CloneTask::Visit(expr) => match expr {
                    Expr::Lit(lit) => done.push(Expr::Lit(*lit)),
                    Expr::Not { arg } => {
                        tasks.push(CloneTask::Assemble(Op::Not, 1));
                        tasks.push(CloneTask::Visit(&**arg));
                    }
                    Expr::Implies { lhs, rhs } | Expr::Equivalent { lhs, rhs } => {
                        let op = if matches!(expr, Expr::Implies { .. }) { Op::Implies } else { Op::Equivalent };
                        tasks.push(CloneTask::Assemble(op, 2));
                        tasks.push(CloneTask::Visit(&**rhs));
                        tasks.push(CloneTask::Visit(&**lhs));
                    }
                    Expr::And { args } | Expr::Or { args } => {
                        let op = if matches!(expr, Expr::And { .. }) { Op::And } else { Op::Or };
                        tasks.push(CloneTask::Assemble(op, args.len()));
                        tasks.extend(args.iter().rev().map(CloneTask::Visit));
                    }
                },
                CloneTask::Assemble(op, n) => {
                    let mut args = done.split_off(done.len() - n);
                    let expr = match op {
                        Op::And => Expr::And { args },
                        Op::Or => Expr::Or { args },
                        Op::Not => Expr::Not {
                            arg: pop_operand(&mut args),
                        },
                        Op::Implies => {
                            let rhs = pop_operand(&mut args);
                            let lhs = pop_operand(&mut args);
                            Expr::Implies { lhs, rhs }
                        }
                        Op::Equivalent => {
                            let rhs = pop_operand(&mut args);
                            let lhs = pop_operand(&mut args);
                            Expr::Equivalent { lhs, rhs }
                        }
                    };
                    done.push(expr);
                }
            }
        }

        done.pop().unwrap_or_else(|| unreachable!("copy of a single root yields one expression"))
    }
}

impl From<Lit> for Expr {
    fn from(lit: Lit) -> Self {
        Expr::Lit(lit)
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Lit(var.lit())
    }
}

impl From<i64> for Expr {
    fn from(val: i64) -> Self {
        Expr::Lit(Lit::new(val))
    }
}

impl From<i32> for Expr {
    fn from(val: i32) -> Self {
        Expr::Lit(Lit::from(val))
    }
}

/// `{}` renders infix notation, `{:#}` renders constructor notation.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            match self {
                Expr::Lit(lit) => write!(f, "{lit}"),
                Expr::Not { arg } => write!(f, "Not({arg:#})"),
                Expr::Implies { lhs, rhs } => write!(f, "Implies({lhs:#},{rhs:#})"),
                Expr::Equivalent { lhs, rhs } => write!(f, "Equivalent({lhs:#},{rhs:#})"),
                Expr::And { args } => write!(f, "And({})", args.iter().format_with(",", |e, g| g(&format_args!("{e:#}")))),
                Expr::Or { args } => write!(f, "Or({})", args.iter().format_with(",", |e, g| g(&format_args!("{e:#}")))),
            }
        } else {
            match self {
                Expr::Lit(lit) => write!(f, "{lit}"),
                Expr::Not { arg } => write!(f, "-{arg}"),
                Expr::Implies { lhs, rhs } => write!(f, "({lhs} -> {rhs})"),
                Expr::Equivalent { lhs, rhs } => write!(f, "({lhs} = {rhs})"),
                Expr::And { args } => write!(f, "({})", args.iter().format(" /\\ ")),
                Expr::Or { args } => write!(f, "({})", args.iter().format(" \\/ ")),
            }
        }
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl<T> ops::BitAnd<T> for Expr
where
    T: Into<Expr>,
{
    type Output = Self;

    fn bitand(self, rhs: T) -> Self::Output {
        Expr::And {
            args: vec![self, rhs.into()],
        }
    }
}

impl<T> ops::BitOr<T> for Expr
where
    T: Into<Expr>,
{
    type Output = Self;

    fn bitor(self, rhs: T) -> Self::Output {
        Expr::Or {
            args: vec![self, rhs.into()],
        }
    }
}
