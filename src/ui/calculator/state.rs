//! State for the calculator input machine.

use crate::calc::{format_result, parse_operand, CalcError, Operator};
use crate::ui::mvi::UiState;

/// Display text at startup and after Clear.
pub const INITIAL_DISPLAY: &str = "0";

/// Left operand and operator stored while the right operand is typed.
///
/// The two always travel together: there is no operand without an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Operand text. Chained results keep full precision here even though
    /// the display shows the rounded form.
    pub operand: String,
    pub operator: Operator,
}

impl PendingOperation {
    pub fn new(operand: impl Into<String>, operator: Operator) -> Self {
        Self {
            operand: operand.into(),
            operator,
        }
    }

    /// Short form for the expression hint, e.g. `"0.33333333 *"`.
    pub fn hint(&self) -> String {
        let operand = match parse_operand(&self.operand) {
            Ok(value) => format_result(value),
            Err(_) => self.operand.clone(),
        };
        format!("{} {}", operand, self.operator)
    }
}

/// What the display holds once a calculation has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readout {
    /// Rendered result text. Backspace may shorten it in place, including
    /// the text of an error message.
    Number(String),
    /// Evaluation failure; rendered as its message.
    Error(CalcError),
}

/// Calculator entry state machine.
///
/// ```text
/// Entering ──operator──→ AwaitingOperand ──digit──→ Entering
///     │                                                 │
///     └──────────────equals─────→ ResultShown ←─────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcState {
    /// User is typing an operand into `buffer`.
    Entering {
        buffer: String,
        pending: Option<PendingOperation>,
    },

    /// An operator was just pressed; the next digit replaces `buffer`.
    AwaitingOperand {
        buffer: String,
        pending: PendingOperation,
    },

    /// A finished computation (or its error) is on the display.
    ResultShown { readout: Readout },
}

impl Default for CalcState {
    fn default() -> Self {
        CalcState::Entering {
            buffer: INITIAL_DISPLAY.to_string(),
            pending: None,
        }
    }
}

impl UiState for CalcState {}

/// Discriminant of [`CalcState`] without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    AwaitingOperand,
    ResultShown,
}

impl CalcState {
    /// Text for the display.
    pub fn display_text(&self) -> String {
        match self {
            Self::Entering { buffer, .. } | Self::AwaitingOperand { buffer, .. } => buffer.clone(),
            Self::ResultShown {
                readout: Readout::Number(text),
            } => text.clone(),
            Self::ResultShown {
                readout: Readout::Error(err),
            } => err.to_string(),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Entering { .. } => Phase::Entering,
            Self::AwaitingOperand { .. } => Phase::AwaitingOperand,
            Self::ResultShown { .. } => Phase::ResultShown,
        }
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        match self {
            Self::Entering { pending, .. } => pending.as_ref(),
            Self::AwaitingOperand { pending, .. } => Some(pending),
            Self::ResultShown { .. } => None,
        }
    }

    /// Check if the display shows an error.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ResultShown {
                readout: Readout::Error(_)
            }
        )
    }

    /// Pending part of the expression, shown above the display.
    pub fn expression_hint(&self) -> Option<String> {
        self.pending().map(PendingOperation::hint)
    }
}
