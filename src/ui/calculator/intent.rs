//! Intents for the calculator keypad.

use crate::calc::Operator;
use crate::ui::mvi::Intent;

/// Abstract key events, already classified by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcIntent {
    /// A digit key `0`-`9`. Any other character is ignored by the reducer.
    Digit(char),
    Decimal,
    Clear,
    Backspace,
    Operator(Operator),
    Equals,
}

impl Intent for CalcIntent {}
