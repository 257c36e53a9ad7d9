//! Calculator input feature module.
//!
//! Owns the state machine that turns keypad events into display text and
//! pending operations.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Entry state enum (Entering → AwaitingOperand → ResultShown)
//! - `intent.rs` - Key events (Digit, Decimal, Clear, Backspace, Operator, Equals)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CalcIntent;
pub use reducer::{transition, CalcReducer};
pub use state::{CalcState, PendingOperation, Phase, Readout, INITIAL_DISPLAY};
