use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use super::errors::GenerateError;
use super::{Board, solve_board};

/// Generates a fresh puzzle with `box_size`×`box_size` boxes.
///
/// A solved board is produced by running the exact cover solver on an empty
/// board, then disguised with transforms that each preserve validity:
/// shuffling whole bands, shuffling whole stacks, swapping two value labels
/// globally, and rotating by a random multiple of 90°. Arbitrary single
/// row/column swaps would break the box constraint and are deliberately not
/// used. Finally about two thirds of the cells are cleared.
///
/// The generated puzzle is solvable by construction but is not checked for
/// a *unique* solution; callers that need uniqueness can probe with
/// `solve_board(..).take(2)`.
pub fn create_sudoku(box_size: usize) -> Result<Board, GenerateError> {
    create_sudoku_with_rng(box_size, &mut rand::rng())
}

pub fn create_sudoku_with_rng<R: Rng>(box_size: usize, rng: &mut R) -> Result<Board, GenerateError> {
    let empty = Board::empty(box_size, box_size);
    let solved = solve_board(&empty)
        .next()
        .ok_or(GenerateError::UnsolvableEmptyBoard)?;
    info!("generating a {0}x{0} puzzle", box_size * box_size);

    let board = shuffle_bands(&solved, rng);
    let board = shuffle_stacks(&board, rng);
    let board = swap_values(&board, rng);
    let board = rotate(&board, rng.random_range(0..4));
    Ok(remove_cells(&board, box_size, rng))
}

/// Reorders the board's bands (rows of boxes) as whole blocks.
pub(crate) fn shuffle_bands<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let bands = board.size() / board.box_rows();
    let mut order: Vec<usize> = (0..bands).collect();
    order.shuffle(rng);

    let mut out = board.clone();
    for (new_band, &old_band) in order.iter().enumerate() {
        for row in 0..board.box_rows() {
            for col in 0..board.size() {
                out.put(
                    new_band * board.box_rows() + row,
                    col,
                    board.get(old_band * board.box_rows() + row, col),
                );
            }
        }
    }
    out
}

/// Reorders the board's stacks (columns of boxes) as whole blocks.
pub(crate) fn shuffle_stacks<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let stacks = board.size() / board.box_cols();
    let mut order: Vec<usize> = (0..stacks).collect();
    order.shuffle(rng);

    let mut out = board.clone();
    for (new_stack, &old_stack) in order.iter().enumerate() {
        for col in 0..board.box_cols() {
            for row in 0..board.size() {
                out.put(
                    row,
                    new_stack * board.box_cols() + col,
                    board.get(row, old_stack * board.box_cols() + col),
                );
            }
        }
    }
    out
}

/// Swaps two distinct value labels everywhere on the board.
pub(crate) fn swap_values<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let size = board.size() as u8;
    let first = rng.random_range(1..=size);
    let offset = rng.random_range(1..size);
    let second = (first - 1 + offset) % size + 1;

    let mut out = board.clone();
    for (row, col, value) in board.cells() {
        let swapped = if value == first {
            second
        } else if value == second {
            first
        } else {
            value
        };
        out.put(row, col, swapped);
    }
    out
}

/// Rotates the board clockwise by `quarters` quarter turns. Only valid for
/// square box shapes, where rotation maps boxes onto boxes.
pub(crate) fn rotate(board: &Board, quarters: usize) -> Board {
    debug_assert_eq!(board.box_rows(), board.box_cols());
    let size = board.size();
    let mut out = board.clone();
    for _ in 0..quarters % 4 {
        let source = out.clone();
        for row in 0..size {
            for col in 0..size {
                out.put(row, col, source.get(size - 1 - col, row));
            }
        }
    }
    out
}

/// Clears all but roughly a third of the cells, with a size-dependent
/// jitter on the kept count.
fn remove_cells<R: Rng>(board: &Board, box_size: usize, rng: &mut R) -> Board {
    let size = board.size();
    let mut coords: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    coords.shuffle(rng);

    let keep = box_size.pow(4) / 3 + rng.random_range(0..size);
    debug!("keeping {keep} of {} clues", size * size);

    let mut out = board.clone();
    for &(row, col) in coords.iter().skip(keep) {
        out.put(row, col, 0);
    }
    out
}
