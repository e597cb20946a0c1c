use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("value {value} is outside the allowed range 0..={max}")]
    ValueOutOfRange { value: usize, max: usize },
    #[error("expected {expected} cells, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid character '{0}' in board string")]
    InvalidCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The empty board yielded no solution. This cannot happen for a sane
    /// box shape and signals a configuration bug rather than bad luck.
    #[error("the empty board produced no solution")]
    UnsolvableEmptyBoard,
}
