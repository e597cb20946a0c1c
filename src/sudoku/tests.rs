use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::sudoku::generate::{rotate, shuffle_bands, shuffle_stacks, swap_values};
use crate::sudoku::{Board, create_sudoku_with_rng, solve_board};

const WIKIPEDIA_PUZZLE: &str = "\
    530070000\
    600195000\
    098000060\
    800060003\
    400803001\
    700020006\
    060000280\
    000419005\
    000080079";

const WIKIPEDIA_SOLUTION: &str = "\
    534678912\
    672195348\
    198342567\
    859761423\
    426853791\
    713924856\
    961537284\
    287419635\
    345286179";

#[test]
fn board_parse_and_round_trip() {
    let board: Board = WIKIPEDIA_PUZZLE.parse().expect("valid puzzle");
    assert_eq!(board.get(0, 0), 5);
    assert_eq!(board.get(0, 1), 3);
    assert_eq!(board.get(0, 2), 0);
    assert_eq!(board.get(8, 8), 9);

    let expected: String = WIKIPEDIA_PUZZLE
        .chars()
        .map(|c| if c == '0' { '.' } else { c })
        .collect();
    assert_eq!(board.to_puzzle_string(), expected);
}

#[test]
fn board_parse_rejects_bad_input() {
    assert!("123".parse::<Board>().is_err());
    assert!(Board::parse(3, 3, &"x".repeat(81)).is_err());
    // A '5' does not fit on a 4x4 board.
    assert!(Board::parse(2, 2, &"5".repeat(16)).is_err());
}

#[test]
fn board_set_validates_input() {
    let mut board = Board::empty(3, 3);
    assert!(board.set(1, 1, 5).is_ok());
    assert_eq!(board.get(1, 1), 5);
    assert!(board.set(9, 0, 1).is_err());
    assert!(board.set(0, 0, 12).is_err());
}

#[test]
fn classic_board_has_27_groups_of_9() {
    let board = Board::empty(3, 3);
    let groups = board.groups();
    assert_eq!(groups.len(), 27);
    for group in &groups {
        assert_eq!(group.len(), 9);
    }
    // First box group covers the top-left 3x3 block.
    assert_eq!(groups[18][0], (0, 0));
    assert_eq!(groups[18][8], (2, 2));
}

#[test]
fn solves_the_wikipedia_puzzle_uniquely() {
    let puzzle: Board = WIKIPEDIA_PUZZLE.parse().expect("valid puzzle");
    let expected: Board = WIKIPEDIA_SOLUTION.parse().expect("valid solution");

    let solutions: Vec<Board> = solve_board(&puzzle).take(2).collect();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0], expected);
    assert!(solutions[0].is_solved());
}

#[test]
fn fully_given_board_round_trips() {
    let board: Board = WIKIPEDIA_SOLUTION.parse().expect("valid solution");
    let solutions: Vec<Board> = solve_board(&board).take(2).collect();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0], board);
}

#[test]
fn contradictory_givens_yield_nothing() {
    let mut board = Board::empty(3, 3);
    board.set(0, 0, 5).expect("in range");
    board.set(0, 8, 5).expect("in range");
    assert_eq!(solve_board(&board).count(), 0);
}

#[test]
fn yielded_solutions_are_independent_boards() {
    // An empty 4x4 board has many solutions; retained boards must not alias.
    let empty = Board::empty(2, 2);
    let solutions: Vec<Board> = solve_board(&empty).take(2).collect();
    assert_eq!(solutions.len(), 2);
    assert_ne!(solutions[0], solutions[1]);
    assert!(solutions[0].is_solved());
    assert!(solutions[1].is_solved());
}

#[test]
fn solves_a_small_box_shape() {
    let board = Board::parse(2, 2, "1234341221430001").expect("valid board");
    let solved = solve_board(&board).next().expect("solvable");
    assert!(solved.is_solved());
    // Givens are preserved.
    assert_eq!(solved.get(0, 0), 1);
    assert_eq!(solved.get(2, 2), 4);
}

#[test]
fn transforms_preserve_validity() {
    let solved: Board = WIKIPEDIA_SOLUTION.parse().expect("valid solution");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    assert!(shuffle_bands(&solved, &mut rng).is_solved());
    assert!(shuffle_stacks(&solved, &mut rng).is_solved());
    assert!(swap_values(&solved, &mut rng).is_solved());
    for quarters in 0..4 {
        assert!(rotate(&solved, quarters).is_solved());
    }
}

#[test]
fn generated_puzzle_is_solvable() {
    let mut rng = StdRng::seed_from_u64(42);
    let puzzle = create_sudoku_with_rng(3, &mut rng).expect("generator succeeds");

    assert_eq!(puzzle.size(), 9);
    assert!(!puzzle.is_filled());
    assert!(puzzle.is_valid());
    let solution = solve_board(&puzzle).next().expect("puzzle is solvable");
    assert!(solution.is_solved());
}

#[test]
fn generated_small_puzzle_is_solvable() {
    let mut rng = StdRng::seed_from_u64(7);
    let puzzle = create_sudoku_with_rng(2, &mut rng).expect("generator succeeds");

    assert_eq!(puzzle.size(), 4);
    assert!(solve_board(&puzzle).next().is_some());
}
