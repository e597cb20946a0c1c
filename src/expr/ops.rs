use log::debug;
use thiserror::Error;

/// Domain errors raised during evaluation. They reject a candidate
/// expression in the search; they never surface to search callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("complex result from negative base with fractional exponent")]
    ComplexResult,
}

/// The closed set of operator kinds expressions are built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
}

fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        // Beyond 2^52 the representable values are all integral.
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

impl OpKind {
    pub fn arity(self) -> usize {
        match self {
            OpKind::Neg => 1,
            _ => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub | OpKind::Neg => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Pow => "^",
        }
    }

    /// Applies the operator to already-evaluated arguments, left to right.
    ///
    /// # Errors
    ///
    /// Returns a domain error for division by zero and for raising a
    /// negative base to a fractional exponent.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        debug_assert_eq!(args.len(), self.arity());
        match self {
            OpKind::Add => Ok(args[0] + args[1]),
            OpKind::Sub => Ok(args[0] - args[1]),
            OpKind::Mul => Ok(args[0] * args[1]),
            OpKind::Div => {
                if is_zero(args[1]) {
                    debug!("division by zero: {} / {}", args[0], args[1]);
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(args[0] / args[1])
                }
            }
            OpKind::Pow => {
                if args[0] < 0.0 && !is_integer(args[1]) {
                    debug!("complex result: {} ^ {}", args[0], args[1]);
                    Err(EvalError::ComplexResult)
                } else {
                    Ok(args[0].powf(args[1]))
                }
            }
            OpKind::Neg => Ok(-args[0]),
        }
    }
}

/// An operator made available to the expression search.
///
/// `max_applications` only matters for arity-1 modifier operators: such an
/// operator may be layered 0..=max times around a finished tree (defaulting
/// to at most once).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    kind: OpKind,
    max_applications: Option<usize>,
}

impl Operator {
    pub fn new(kind: OpKind) -> Operator {
        Operator {
            kind,
            max_applications: None,
        }
    }

    pub fn with_max_applications(kind: OpKind, max: usize) -> Operator {
        Operator {
            kind,
            max_applications: Some(max),
        }
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn arity(&self) -> usize {
        self.kind.arity()
    }

    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }

    pub fn max_applications(&self) -> Option<usize> {
        self.max_applications
    }
}

/// The arcade's standard binary operator table.
pub fn arithmetic_operators() -> Vec<Operator> {
    [
        OpKind::Add,
        OpKind::Sub,
        OpKind::Mul,
        OpKind::Div,
        OpKind::Pow,
    ]
    .into_iter()
    .map(Operator::new)
    .collect()
}
