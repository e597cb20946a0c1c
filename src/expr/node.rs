use log::debug;

use super::ops::{EvalError, Operator};

/// An arithmetic expression tree.
///
/// A leaf holds a number; a branch holds an operator and an ordered child
/// list whose length equals the operator's arity.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf(f64),
    Branch { op: Operator, children: Vec<Node> },
}

impl Node {
    pub fn leaf(value: f64) -> Node {
        Node::Leaf(value)
    }

    pub fn branch(op: Operator, children: Vec<Node>) -> Node {
        debug_assert_eq!(children.len(), op.arity());
        Node::Branch { op, children }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Evaluates the tree post-order, children left to right. Evaluation is
    /// pure: repeated calls on the same tree return the same result.
    ///
    /// # Errors
    ///
    /// Propagates the first domain error raised by an operator.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        match self {
            Node::Leaf(value) => Ok(*value),
            Node::Branch { op, children } => {
                let mut args = Vec::with_capacity(children.len());
                for child in children {
                    args.push(child.evaluate()?);
                }
                op.kind().apply(&args)
            }
        }
    }

    /// Like [`Node::evaluate`], but a domain error rejects the tree instead
    /// of propagating. Non-error results, finite or not, pass through
    /// unchanged.
    pub fn evaluate_safe(&self) -> Option<f64> {
        match self.evaluate() {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("rejected candidate {self}: {err}");
                None
            }
        }
    }

    /// Leaf values in left-to-right traversal order.
    pub fn leaf_values(&self) -> Vec<f64> {
        let mut values = Vec::new();
        self.collect_leaves(&mut values);
        values
    }

    fn collect_leaves(&self, values: &mut Vec<f64>) {
        match self {
            Node::Leaf(value) => values.push(*value),
            Node::Branch { children, .. } => {
                for child in children {
                    child.collect_leaves(values);
                }
            }
        }
    }
}
