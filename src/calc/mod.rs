//! Arithmetic core: operators, evaluation and result formatting.

mod evaluator;
mod format;

pub use evaluator::{apply, evaluate, parse_operand, CalcError, Operator};
pub use format::{format_number, format_result, MAX_PLAIN_LEN, ROUND_DIGITS};
