use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use crate::expr::{OpKind, Operator};
use crate::search;
use crate::sudoku::{Board, create_sudoku, solve_board};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Arcadix - puzzle engines behind the arcade
#[derive(Parser, Debug)]
#[command(name = "arcadix")]
#[command(about = "Solve and generate Sudoku boards, and search arithmetic expressions")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a Sudoku board given as digits, with '.' or '0' for blanks
    Solve {
        puzzle: String,

        /// Box height
        #[arg(long, default_value_t = 3)]
        box_rows: usize,

        /// Box width
        #[arg(long, default_value_t = 3)]
        box_cols: usize,

        /// Maximum number of solutions to print (2 probes uniqueness)
        #[arg(short = 'n', long, default_value_t = 1)]
        limit: usize,
    },

    /// Generate a fresh puzzle with SIZE x SIZE boxes
    Generate {
        #[arg(long, default_value_t = 3)]
        size: usize,
    },

    /// Search for expressions over the numbers that hit the target
    Expr {
        /// Numbers, each used exactly once
        #[arg(required = true)]
        numbers: Vec<f64>,

        /// Target value to match
        #[arg(short, long)]
        target: f64,

        /// Operator symbols drawn from "+-*/^~" ('~' is negation)
        #[arg(short, long, default_value = "+-*/^")]
        operators: String,

        /// Maximum number of expressions to print (0 means all)
        #[arg(short = 'n', long, default_value_t = 1)]
        limit: usize,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn parse_operators(symbols: &str) -> Result<Vec<Operator>> {
    symbols
        .chars()
        .map(|symbol| match symbol {
            '+' => Ok(Operator::new(OpKind::Add)),
            '-' => Ok(Operator::new(OpKind::Sub)),
            '*' => Ok(Operator::new(OpKind::Mul)),
            '/' => Ok(Operator::new(OpKind::Div)),
            '^' => Ok(Operator::new(OpKind::Pow)),
            '~' => Ok(Operator::with_max_applications(OpKind::Neg, 1)),
            _ => bail!("unknown operator symbol '{symbol}'"),
        })
        .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Solve {
            puzzle,
            box_rows,
            box_cols,
            limit,
        } => {
            let board = Board::parse(box_rows, box_cols, &puzzle).context("invalid puzzle")?;
            info!(
                "solving a {0}x{0} board with {1} givens",
                board.size(),
                board.given_count()
            );

            let mut found = 0;
            for solution in solve_board(&board).take(limit.max(1)) {
                if found > 0 {
                    println!();
                }
                println!("{solution}");
                found += 1;
            }
            if found == 0 {
                warn!("no solution for the given board");
                println!("No solution.");
            }
            Ok(())
        }

        Command::Generate { size } => {
            let board = create_sudoku(size)?;
            println!("{board}");
            Ok(())
        }

        Command::Expr {
            numbers,
            target,
            operators,
            limit,
        } => {
            let operators = parse_operators(&operators)?;
            info!(
                "searching expressions over {} numbers for target {target}",
                numbers.len()
            );

            let mut found = 0;
            for tree in search::solve(numbers, target, operators) {
                println!("{tree}");
                found += 1;
                if limit != 0 && found >= limit {
                    break;
                }
            }
            if found == 0 {
                warn!("no matching expression found");
                println!("Unknown.");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operators() {
        let operators = parse_operators("+*~").expect("valid symbols");
        assert_eq!(operators.len(), 3);
        assert_eq!(operators[0].kind(), OpKind::Add);
        assert_eq!(operators[1].kind(), OpKind::Mul);
        assert_eq!(operators[2].kind(), OpKind::Neg);
        assert_eq!(operators[2].max_applications(), Some(1));

        assert!(parse_operators("+?").is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
