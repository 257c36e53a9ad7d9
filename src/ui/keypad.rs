//! Keypad button table and key classification.
//!
//! The table drives both rendering and mouse hit-testing; the key map turns
//! terminal key presses into the same intents the buttons produce.

use crate::calc::Operator;
use crate::ui::calculator::CalcIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Number of grid columns on the keypad.
pub const KEYPAD_COLUMNS: u16 = 4;

/// What a keypad button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Digit(char),
    Decimal,
    Clear,
    Backspace,
    Operator(Operator),
    Equals,
}

impl ButtonAction {
    pub fn intent(self) -> CalcIntent {
        match self {
            ButtonAction::Digit(d) => CalcIntent::Digit(d),
            ButtonAction::Decimal => CalcIntent::Decimal,
            ButtonAction::Clear => CalcIntent::Clear,
            ButtonAction::Backspace => CalcIntent::Backspace,
            ButtonAction::Operator(op) => CalcIntent::Operator(op),
            ButtonAction::Equals => CalcIntent::Equals,
        }
    }
}

/// Visual class of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Number,
    Operator,
    Action,
    Clear,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: ButtonAction,
    pub style: ButtonStyle,
    /// Grid columns occupied by the button.
    pub span: u16,
}

const fn button(
    label: &'static str,
    action: ButtonAction,
    style: ButtonStyle,
    span: u16,
) -> Button {
    Button {
        label,
        action,
        style,
        span,
    }
}

const fn digit(label: &'static str, d: char) -> Button {
    button(label, ButtonAction::Digit(d), ButtonStyle::Number, 1)
}

const fn operator(label: &'static str, op: Operator) -> Button {
    button(label, ButtonAction::Operator(op), ButtonStyle::Operator, 1)
}

/// Keypad buttons in row-major order. Each row spans `KEYPAD_COLUMNS`.
pub static BUTTONS: [Button; 18] = [
    button("C", ButtonAction::Clear, ButtonStyle::Clear, 2),
    button("←", ButtonAction::Backspace, ButtonStyle::Action, 1),
    operator("/", Operator::Divide),
    digit("7", '7'),
    digit("8", '8'),
    digit("9", '9'),
    operator("*", Operator::Multiply),
    digit("4", '4'),
    digit("5", '5'),
    digit("6", '6'),
    operator("-", Operator::Subtract),
    digit("1", '1'),
    digit("2", '2'),
    digit("3", '3'),
    operator("+", Operator::Add),
    button("0", ButtonAction::Digit('0'), ButtonStyle::Number, 2),
    button(".", ButtonAction::Decimal, ButtonStyle::Action, 1),
    button("=", ButtonAction::Equals, ButtonStyle::Equals, 1),
];

/// Split the button table into grid rows.
pub fn rows() -> Vec<&'static [Button]> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (idx, button) in BUTTONS.iter().enumerate() {
        used += button.span;
        if used >= KEYPAD_COLUMNS {
            rows.push(&BUTTONS[start..=idx]);
            start = idx + 1;
            used = 0;
        }
    }
    if start < BUTTONS.len() {
        rows.push(&BUTTONS[start..]);
    }
    rows
}

/// Index into [`BUTTONS`] of the button that produces `intent`.
pub fn button_for_intent(intent: CalcIntent) -> Option<usize> {
    BUTTONS
        .iter()
        .position(|button| button.action.intent() == intent)
}

/// Classify a typed character.
pub fn intent_for_char(ch: char) -> Option<CalcIntent> {
    match ch {
        '0'..='9' => Some(CalcIntent::Digit(ch)),
        '.' | ',' => Some(CalcIntent::Decimal),
        '=' => Some(CalcIntent::Equals),
        'c' | 'C' => Some(CalcIntent::Clear),
        '\u{8}' | '\u{7f}' | '←' => Some(CalcIntent::Backspace),
        _ => Operator::from_symbol(ch).map(CalcIntent::Operator),
    }
}

/// Classify a terminal key press.
///
/// Keys held with Control or Alt are left to the shell.
pub fn intent_for_key(key: KeyEvent) -> Option<CalcIntent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => intent_for_char(ch),
        KeyCode::Enter => Some(CalcIntent::Equals),
        KeyCode::Backspace => Some(CalcIntent::Backspace),
        KeyCode::Delete | KeyCode::Esc => Some(CalcIntent::Clear),
        _ => None,
    }
}

/// Character that could not be classified by [`intents_for_keys`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised key '{key}' at position {position}")]
pub struct UnknownKey {
    pub key: char,
    pub position: usize,
}

/// Classify a whole key string. Whitespace is skipped.
pub fn intents_for_keys(keys: &str) -> Result<Vec<CalcIntent>, UnknownKey> {
    keys.chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, key)| intent_for_char(key).ok_or(UnknownKey { key, position }))
        .collect()
}
