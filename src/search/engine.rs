use log::info;

use crate::expr::{Node, Operator, Shape, shapes};
use crate::seq::{CartesianProduct, Permutations, group_by_key};

/// Lazily enumerates every syntactically distinct expression tree over
/// `numbers` (each used exactly once, leaf order free) and `operators` that
/// evaluates to exactly `target` — `==` on `f64`, no epsilon.
///
/// Candidates are generated per tree shape: operators are assigned to each
/// internal position from those matching its arity, the number multiset is
/// permuted onto the leaves left to right, and any arity-1 modifier
/// operators are layered around the root in every allowed count and order.
/// The enumeration is deterministic, and nothing beyond what the caller
/// pulls is ever built — bound consumption with `take` when the space is
/// large.
pub fn solve(
    numbers: Vec<f64>,
    target: f64,
    operators: Vec<Operator>,
) -> impl Iterator<Item = Node> {
    info!(
        "searching expressions over {} numbers for target {target}",
        numbers.len()
    );

    let table = group_by_key(operators, |op| op.arity());
    let unary = table
        .iter()
        .find(|(arity, _)| *arity == 1)
        .map(|(_, ops)| ops.clone())
        .unwrap_or_default();
    let shape_arities: Vec<usize> = table
        .iter()
        .map(|(arity, _)| *arity)
        .filter(|&arity| arity != 1)
        .collect();
    let wraps = unary_sequences(&unary);
    let leaves = numbers.len();

    shapes(leaves, &shape_arities)
        .flat_map(move |shape| candidates(&shape, &table, &numbers, &wraps))
        .filter(move |tree| tree.evaluate_safe() == Some(target))
}

/// All concrete trees for one shape: skeletons with operators assigned,
/// then leaf permutations, then unary wrapping (innermost of the pipeline,
/// varying fastest).
fn candidates(
    shape: &Shape,
    table: &[(usize, Vec<Operator>)],
    numbers: &[f64],
    wraps: &[Vec<Operator>],
) -> Box<dyn Iterator<Item = Node>> {
    let skeletons = op_assignments(shape, table);
    let numbers = numbers.to_vec();
    let wraps = wraps.to_vec();
    Box::new(skeletons.into_iter().flat_map(move |skeleton| {
        let wraps = wraps.clone();
        Permutations::new(numbers.clone(), None).flat_map(move |values| {
            let tree = with_leaves(&skeleton, &values);
            let wraps = wraps.clone();
            wraps
                .into_iter()
                .map(move |sequence| wrap_root(tree.clone(), &sequence))
        })
    }))
}

/// Every way to label the shape's branches with operators of matching
/// arity. The operator at each position varies slower than the choices in
/// the children below it; a position whose arity has no operators produces
/// nothing at all. Leaves carry a placeholder value until the numbers land.
fn op_assignments(shape: &Shape, table: &[(usize, Vec<Operator>)]) -> Vec<Node> {
    match shape {
        Shape::Leaf => vec![Node::leaf(f64::NAN)],
        Shape::Branch(children) => {
            let ops = table
                .iter()
                .find(|(arity, _)| *arity == children.len())
                .map(|(_, ops)| ops.as_slice())
                .unwrap_or(&[]);
            let child_pools: Vec<Vec<Node>> = children
                .iter()
                .map(|child| op_assignments(child, table))
                .collect();

            let mut assigned = Vec::new();
            for &op in ops {
                for combo in CartesianProduct::new(child_pools.clone()) {
                    assigned.push(Node::branch(op, combo));
                }
            }
            assigned
        }
    }
}

/// Rebuilds the skeleton with `values` assigned to the leaves in
/// left-to-right traversal order.
fn with_leaves(skeleton: &Node, values: &[f64]) -> Node {
    fn fill(node: &Node, values: &[f64], next: &mut usize) -> Node {
        match node {
            Node::Leaf(_) => {
                let value = values[*next];
                *next += 1;
                Node::leaf(value)
            }
            Node::Branch { op, children } => Node::branch(
                *op,
                children
                    .iter()
                    .map(|child| fill(child, values, next))
                    .collect(),
            ),
        }
    }

    let mut next = 0;
    fill(skeleton, values, &mut next)
}

/// Every sequence of unary applications to layer around a tree: for each
/// combination of per-operator counts (0..=max, default 1), every ordering
/// of the resulting operator multiset. Orderings are permutations of
/// positions, so equal operators still contribute their arrangements. With
/// no unary operators this is the single empty sequence.
fn unary_sequences(unary: &[Operator]) -> Vec<Vec<Operator>> {
    let count_ranges: Vec<Vec<usize>> = unary
        .iter()
        .map(|op| (0..=op.max_applications().unwrap_or(1)).collect())
        .collect();

    let mut sequences = Vec::new();
    for counts in CartesianProduct::new(count_ranges) {
        let multiset: Vec<Operator> = unary
            .iter()
            .zip(&counts)
            .flat_map(|(&op, &count)| std::iter::repeat_n(op, count))
            .collect();
        sequences.extend(Permutations::new(multiset, None));
    }
    sequences
}

/// Wraps `sequence` around the root; the first operator in the sequence
/// ends up outermost, so the last one is evaluated first.
fn wrap_root(tree: Node, sequence: &[Operator]) -> Node {
    sequence
        .iter()
        .rev()
        .fold(tree, |node, &op| Node::branch(op, vec![node]))
}
