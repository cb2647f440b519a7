//! Pre-order traversal of the syntax tree.

use crate::ast::{Expr, ExprKind, Module, Stmt, StmtKind};

/// A borrowed tree node
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    fn push_children(self, stack: &mut Vec<Node<'a>>) {
        // Children are pushed in reverse so they pop in source order.
        let start = stack.len();
        match self {
            Node::Stmt(stmt) => match &stmt.kind {
                StmtKind::ClassDef {
                    bases,
                    keywords,
                    body,
                    ..
                } => {
                    stack.extend(bases.iter().map(Node::Expr));
                    stack.extend(keywords.iter().map(|k| Node::Expr(&k.value)));
                    stack.extend(body.iter().map(Node::Stmt));
                }
                StmtKind::AnnAssign {
                    target,
                    annotation,
                    value,
                } => {
                    stack.push(Node::Expr(target));
                    stack.push(Node::Expr(annotation));
                    stack.extend(value.iter().map(Node::Expr));
                }
                StmtKind::Assign { targets, value } => {
                    stack.extend(targets.iter().map(Node::Expr));
                    stack.push(Node::Expr(value));
                }
                StmtKind::FunctionDef { body, .. } | StmtKind::Compound { body, .. } => {
                    stack.extend(body.iter().map(Node::Stmt));
                }
                StmtKind::Expr(expr) => stack.push(Node::Expr(expr)),
                StmtKind::Pass | StmtKind::Other { .. } => {}
            },
            Node::Expr(expr) => match &expr.kind {
                ExprKind::Attribute { value, .. } => stack.push(Node::Expr(value)),
                ExprKind::Subscript { value, slice } => {
                    stack.push(Node::Expr(value));
                    stack.extend(slice.iter().map(Node::Expr));
                }
                ExprKind::Tuple(items) | ExprKind::List(items) => {
                    stack.extend(items.iter().map(Node::Expr));
                }
                ExprKind::Dict(entries) => {
                    for entry in entries {
                        stack.extend(entry.key.iter().map(Node::Expr));
                        stack.push(Node::Expr(&entry.value));
                    }
                }
                ExprKind::Call {
                    func,
                    args,
                    keywords,
                } => {
                    stack.push(Node::Expr(func));
                    stack.extend(args.iter().map(Node::Expr));
                    stack.extend(keywords.iter().map(|k| Node::Expr(&k.value)));
                }
                ExprKind::BinOp { left, right, .. } => {
                    stack.push(Node::Expr(left));
                    stack.push(Node::Expr(right));
                }
                ExprKind::Name(_) | ExprKind::Constant(_) | ExprKind::Other { .. } => {}
            },
        }
        stack[start..].reverse();
    }
}

/// Iterator over every node of a module, each visited exactly once
pub struct Walk<'a> {
    stack: Vec<Node<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        node.push_children(&mut self.stack);
        Some(node)
    }
}

impl Module {
    /// Walk every statement and expression in pre-order
    pub fn walk(&self) -> Walk<'_> {
        let mut stack: Vec<Node<'_>> = self.body.iter().map(Node::Stmt).collect();
        stack.reverse();
        Walk { stack }
    }

    /// Every statement in pre-order, including nested ones
    pub fn statements(&self) -> impl Iterator<Item = &Stmt> {
        self.walk().filter_map(|node| match node {
            Node::Stmt(stmt) => Some(stmt),
            Node::Expr(_) => None,
        })
    }
}
