use crate::error::Result;
use crate::formula::expr::{Expr, Node, Op};

enum Task {
    Visit(Expr),
    Assemble(Op, usize),
}

/// Post-order rewrite driven by an explicit work-stack.
///
/// `f` is applied to every node after all of its operands have been rewritten, so the
/// call stack does not grow with the depth of `root`. Operand order is preserved.
pub(crate) fn rewrite_bottom_up<F>(root: Expr, mut f: F) -> Result<Expr>
where
    F: FnMut(Expr) -> Expr,
{
    let mut tasks = vec![Task::Visit(root)];
    let mut done: Vec<Expr> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(expr) => match expr.into_node() {
                Node::Leaf(lit) => done.push(f(Expr::Lit(lit))),
                Node::Branch(op, args) => {
                    tasks.push(Task::Assemble(op, args.len()));
                    tasks.extend(args.into_iter().rev().map(Task::Visit));
                }
            },
            Task::Assemble(op, n) => {
                let args = done.split_off(done.len() - n);
                done.push(f(Expr::from_op(op, args)?));
            }
        }
    }

    debug_assert_eq!(done.len(), 1);
    Ok(done.pop().unwrap_or_else(|| unreachable!("rewrite of a single root yields one expression")))
}
