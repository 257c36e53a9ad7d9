//! Keypad calculator for the terminal.
//!
//! Two-operand arithmetic evaluated left to right, driven by an input
//! state machine and rendered as a clickable keypad.

pub mod calc;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod ui;
