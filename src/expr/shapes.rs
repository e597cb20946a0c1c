use std::rc::Rc;

/// The unlabeled structure of an expression tree: leaves are value slots,
/// branches later take an operator matching their child count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Branch(Vec<Shape>),
}

impl Shape {
    pub fn leaf_count(&self) -> usize {
        match self {
            Shape::Leaf => 1,
            Shape::Branch(children) => children.iter().map(Shape::leaf_count).sum(),
        }
    }
}

/// Lazily enumerates every tree shape with exactly `leaves` leaves whose
/// branch arities are drawn from `arities`.
///
/// All structurally distinct shapes appear: a flat 3-ary branch and nested
/// binary branches over the same leaves are different shapes, and the outer
/// search needs both. Arity 1 plays no role in shapes (unary operators wrap
/// finished trees) and is ignored here.
pub fn shapes(leaves: usize, arities: &[usize]) -> Box<dyn Iterator<Item = Shape>> {
    let arities: Rc<[usize]> = arities.iter().copied().filter(|&arity| arity >= 2).collect();
    any_shape(leaves, arities)
}

fn any_shape(leaves: usize, arities: Rc<[usize]>) -> Box<dyn Iterator<Item = Shape>> {
    if leaves == 1 {
        return Box::new(std::iter::once(Shape::Leaf));
    }
    let pool = arities.clone();
    Box::new(
        (0..arities.len())
            .flat_map(move |idx| children_of(leaves, pool[idx], pool.clone()).map(Shape::Branch)),
    )
}

/// Child lists for a branch of the given arity holding `leaves` leaves in
/// total. The last child takes `1..=leaves-arity+1` of them (each remaining
/// child needs at least one); the rest recurse at arity-1 until a single
/// child closes over whatever is left.
fn children_of(
    leaves: usize,
    arity: usize,
    arities: Rc<[usize]>,
) -> Box<dyn Iterator<Item = Vec<Shape>>> {
    if arity == 1 {
        return Box::new(any_shape(leaves, arities).map(|shape| vec![shape]));
    }
    if leaves < arity {
        return Box::new(std::iter::empty());
    }
    let pool = arities.clone();
    Box::new((1..=leaves - arity + 1).flat_map(move |last_leaves| {
        let lasts: Vec<Shape> = any_shape(last_leaves, pool.clone()).collect();
        children_of(leaves - last_leaves, arity - 1, pool.clone()).flat_map(move |prefix| {
            let lasts = lasts.clone();
            lasts.into_iter().map(move |last| {
                let mut children = prefix.clone();
                children.push(last);
                children
            })
        })
    }))
}
