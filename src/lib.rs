//! Arcadix - the algorithmic core of a casual puzzle arcade
//!
//! This library provides the two engines behind the arcade's puzzle games:
//! a generic exact cover solver used to solve and generate Sudoku boards of
//! arbitrary box shape, and a combinatorial search over arithmetic
//! expression trees ("make 24"). Both engines expose lazy iterators, so
//! callers only pay for the solutions they actually pull.

pub mod cli;
pub mod cover;
pub mod expr;
pub mod search;
pub mod seq;
pub mod sudoku;

// Re-export the main public API
pub use expr::{EvalError, Node, OpKind, Operator};
pub use sudoku::{Board, BoardError, GenerateError, create_sudoku, solve_board};

/// Find the first expression over `numbers` that evaluates exactly to
/// `target`, using the arcade's standard `+ - * / ^` operator table.
///
/// This is a convenience wrapper over [`search::solve`]; use that directly
/// to choose the operator table or to enumerate more than one solution.
///
/// # Examples
///
/// ```
/// match arcadix::find_expression(vec![1.0, 2.0, 3.0, 4.0], 24.0) {
///     Some(expr) => println!("Found: {}", expr),
///     None => println!("No solution found"),
/// }
/// ```
pub fn find_expression(numbers: Vec<f64>, target: f64) -> Option<Node> {
    search::solve(numbers, target, expr::arithmetic_operators()).next()
}
