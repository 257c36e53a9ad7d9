//! Two-operand arithmetic.
//!
//! Operands arrive as the text the input state machine built, so parsing
//! lives here too. Division by zero is a tagged failure, never a panic.

use std::fmt;
use thiserror::Error;

/// Binary operator selectable from the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown on the keypad and in the pending-expression hint.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse an operator from a typed character.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Failure outcomes of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Error: Div by 0!")]
    DivideByZero,

    /// Operand text that is not a number (e.g. a lone "-" left by backspace).
    #[error("Error")]
    InvalidOperand(String),
}

/// Evaluate `left op right` where both operands are numeral text.
pub fn evaluate(op: Operator, left: &str, right: &str) -> Result<f64, CalcError> {
    let l = parse_operand(left)?;
    let r = parse_operand(right)?;
    apply(op, l, r)
}

/// Apply an operator to two already-parsed operands.
pub fn apply(op: Operator, l: f64, r: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(l + r),
        Operator::Subtract => Ok(l - r),
        Operator::Multiply => Ok(l * r),
        Operator::Divide => {
            if r == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            Ok(l / r)
        }
    }
}

/// Parse operand text as `f64`.
///
/// Accepts everything the display can show: plain numerals, a trailing
/// decimal point ("5."), exponent form ("1e+21"), "Infinity" and "NaN".
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        assert_eq!(evaluate(Operator::Add, "2", "3"), Ok(5.0));
        assert_eq!(evaluate(Operator::Subtract, "2", "3"), Ok(-1.0));
        assert_eq!(evaluate(Operator::Multiply, "2.5", "4"), Ok(10.0));
        assert_eq!(evaluate(Operator::Divide, "9", "3"), Ok(3.0));
    }

    #[test]
    fn divide_by_zero_is_tagged() {
        for left in ["0", "1", "-7.5", "123456789"] {
            assert_eq!(
                evaluate(Operator::Divide, left, "0"),
                Err(CalcError::DivideByZero)
            );
        }
        assert_eq!(
            evaluate(Operator::Divide, "4", "0.0"),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(apply(Operator::Divide, 4.0, -0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn divide_matches_float_division() {
        let pairs = [(1.0, 3.0), (-8.0, 2.0), (0.1, 0.7), (1e300, 1e-5)];
        for (x, y) in pairs {
            assert_eq!(apply(Operator::Divide, x, y), Ok(x / y));
        }
    }

    #[test]
    fn trailing_decimal_point_parses() {
        assert_eq!(evaluate(Operator::Add, "5.", "0.5"), Ok(5.5));
    }

    #[test]
    fn display_forms_parse() {
        assert_eq!(parse_operand("1e+21"), Ok(1e21));
        assert_eq!(parse_operand("Infinity"), Ok(f64::INFINITY));
        assert!(parse_operand("NaN").is_ok_and(f64::is_nan));
    }

    #[test]
    fn blank_or_partial_operand_is_rejected() {
        assert_eq!(
            evaluate(Operator::Add, "", "1"),
            Err(CalcError::InvalidOperand(String::new()))
        );
        assert_eq!(
            evaluate(Operator::Add, "1", "-"),
            Err(CalcError::InvalidOperand("-".to_string()))
        );
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(Operator::from_symbol('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('%'), None);
        assert_eq!(Operator::Subtract.to_string(), "-");
    }

    #[test]
    fn error_messages_are_display_text() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Error: Div by 0!");
        assert_eq!(CalcError::InvalidOperand("-".into()).to_string(), "Error");
    }
}
