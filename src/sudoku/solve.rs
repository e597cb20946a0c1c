use log::debug;

use super::Board;
use crate::cover::{Problem, RowId, Solutions};

/// Lazily enumerates every completion of `board`.
///
/// The board maps onto an exact cover instance with four item families of
/// N² items each — one per cell, plus one per (row, value), (column, value)
/// and (box, value) — and one candidate row per (row, column, value) triple
/// covering exactly four items. Filled cells are preselected as givens, so
/// contradictory givens simply yield no solutions.
pub fn solve_board(board: &Board) -> SudokuSolutions {
    let size = board.size();
    debug!(
        "solving {size}x{size} board with {} givens",
        board.given_count()
    );

    let mut problem = Problem::new(4 * size * size);
    for row in 0..size {
        for col in 0..size {
            let boxn = (row / board.box_rows()) * board.box_rows() + col / board.box_cols();
            for value in 1..=size {
                // Row ids come out sequential, matching `row_id` below.
                problem.add_row([
                    row * size + col,
                    size * size + row * size + (value - 1),
                    2 * size * size + col * size + (value - 1),
                    3 * size * size + boxn * size + (value - 1),
                ]);
            }
        }
    }
    for (row, col, value) in board.cells() {
        if value != 0 {
            problem.preselect(row_id(size, row, col, value as usize));
        }
    }

    SudokuSolutions {
        base: board.clone(),
        inner: problem.solutions(),
        size,
    }
}

fn row_id(size: usize, row: usize, col: usize, value: usize) -> RowId {
    (row * size + col) * size + (value - 1)
}

fn decode(size: usize, row_id: RowId) -> (usize, usize, u8) {
    let cell = row_id / size;
    (cell / size, cell % size, (row_id % size + 1) as u8)
}

/// Lazy iterator over completed boards.
///
/// Every yielded board is an independent copy of the input with the
/// solution's triples written in; callers may retain any number of them.
pub struct SudokuSolutions {
    base: Board,
    inner: Solutions,
    size: usize,
}

impl Iterator for SudokuSolutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let rows = self.inner.next()?;
        let mut board = self.base.clone();
        for id in rows {
            let (row, col, value) = decode(self.size, id);
            board.put(row, col, value);
        }
        Some(board)
    }
}
