//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use padcalc::calc::Operator;
use padcalc::ui::calculator::{CalcIntent, CalcReducer, CalcState};
use padcalc::ui::mvi::Reducer;
use std::path::PathBuf;
use tempfile::TempDir;

/// Run intents from `state` through the reducer.
pub fn press_all(state: CalcState, intents: &[CalcIntent]) -> CalcState {
    intents
        .iter()
        .fold(state, |state, intent| CalcReducer::reduce(state, *intent))
}

/// Type a key string from the initial state, e.g. `"2+3="`.
pub fn type_keys(keys: &str) -> CalcState {
    let intents = padcalc::ui::keypad::intents_for_keys(keys).expect("valid keys");
    press_all(CalcState::default(), &intents)
}

pub fn digits(text: &str) -> Vec<CalcIntent> {
    text.chars().map(CalcIntent::Digit).collect()
}

pub fn op(operator: Operator) -> CalcIntent {
    CalcIntent::Operator(operator)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
