//! Reducer for the calculator input machine.

use crate::calc::{evaluate, format_number, format_result, CalcError, Operator};
use crate::ui::mvi::Reducer;

use super::intent::CalcIntent;
use super::state::{CalcState, PendingOperation, Readout, INITIAL_DISPLAY};

/// Reducer for calculator state transitions.
///
/// Evaluation is left to right with no precedence: pressing an operator
/// while another is pending computes the pending one first.
pub struct CalcReducer;

impl Reducer for CalcReducer {
    type State = CalcState;
    type Intent = CalcIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalcIntent::Digit(digit) if digit.is_ascii_digit() => push_digit(state, digit),
            CalcIntent::Digit(_) => state,
            CalcIntent::Decimal => push_decimal(state),
            CalcIntent::Clear => CalcState::default(),
            CalcIntent::Backspace => backspace(state),
            CalcIntent::Operator(op) => press_operator(state, op),
            CalcIntent::Equals => press_equals(state),
        }
    }
}

/// Reduce and return the display text alongside the new state.
pub fn transition(state: CalcState, intent: CalcIntent) -> (CalcState, String) {
    let next = CalcReducer::reduce(state, intent);
    let text = next.display_text();
    (next, text)
}

fn push_digit(state: CalcState, digit: char) -> CalcState {
    match state {
        CalcState::AwaitingOperand { pending, .. } => CalcState::Entering {
            buffer: digit.to_string(),
            pending: Some(pending),
        },
        CalcState::ResultShown { .. } => CalcState::Entering {
            buffer: digit.to_string(),
            pending: None,
        },
        CalcState::Entering {
            mut buffer,
            pending,
        } => {
            if buffer == INITIAL_DISPLAY {
                // "00" is never shown
                if digit != '0' {
                    buffer = digit.to_string();
                }
            } else {
                buffer.push(digit);
            }
            CalcState::Entering { buffer, pending }
        }
    }
}

fn push_decimal(state: CalcState) -> CalcState {
    match state {
        CalcState::AwaitingOperand { pending, .. } => CalcState::Entering {
            buffer: "0.".to_string(),
            pending: Some(pending),
        },
        CalcState::ResultShown { .. } => CalcState::Entering {
            buffer: "0.".to_string(),
            pending: None,
        },
        CalcState::Entering {
            mut buffer,
            pending,
        } => {
            if !buffer.contains('.') {
                buffer.push('.');
            }
            CalcState::Entering { buffer, pending }
        }
    }
}

fn backspace(state: CalcState) -> CalcState {
    match state {
        CalcState::Entering { buffer, pending } => CalcState::Entering {
            buffer: drop_last(buffer),
            pending,
        },
        CalcState::AwaitingOperand { buffer, pending } => CalcState::AwaitingOperand {
            buffer: drop_last(buffer),
            pending,
        },
        CalcState::ResultShown { readout } => {
            let text = match readout {
                Readout::Number(text) => text,
                Readout::Error(err) => err.to_string(),
            };
            let text = drop_last(text);
            // Erasing a shown result down to "0" resets the calculation
            // instead of resuming entry. An error message is edited like
            // any other shown text.
            if text == INITIAL_DISPLAY {
                CalcState::default()
            } else {
                CalcState::ResultShown {
                    readout: Readout::Number(text),
                }
            }
        }
    }
}

fn press_operator(state: CalcState, op: Operator) -> CalcState {
    match state {
        CalcState::ResultShown {
            readout: Readout::Number(text),
        } => CalcState::AwaitingOperand {
            buffer: text.clone(),
            pending: PendingOperation::new(text, op),
        },
        // Kept inert: an error is not adopted as the left operand, unlike a
        // shown number. Edited error text (after Backspace) is plain text and
        // takes the arm above.
        CalcState::ResultShown {
            readout: Readout::Error(err),
        } => CalcState::ResultShown {
            readout: Readout::Error(err),
        },
        CalcState::Entering {
            buffer,
            pending: Some(pending),
        }
        | CalcState::AwaitingOperand { buffer, pending } => match compute(&pending, &buffer) {
            Ok(value) => CalcState::AwaitingOperand {
                buffer: format_result(value),
                pending: PendingOperation::new(format_number(value), op),
            },
            Err(err) => CalcState::ResultShown {
                readout: Readout::Error(err),
            },
        },
        CalcState::Entering {
            buffer,
            pending: None,
        } => CalcState::AwaitingOperand {
            buffer: buffer.clone(),
            pending: PendingOperation::new(buffer, op),
        },
    }
}

fn press_equals(state: CalcState) -> CalcState {
    match state {
        CalcState::Entering {
            buffer,
            pending: Some(pending),
        }
        | CalcState::AwaitingOperand { buffer, pending } => {
            let readout = match compute(&pending, &buffer) {
                Ok(value) => Readout::Number(format_result(value)),
                Err(err) => Readout::Error(err),
            };
            CalcState::ResultShown { readout }
        }
        other => other,
    }
}

fn compute(pending: &PendingOperation, right: &str) -> Result<f64, CalcError> {
    evaluate(pending.operator, &pending.operand, right)
}

fn drop_last(mut text: String) -> String {
    text.pop();
    if text.is_empty() {
        text.push_str(INITIAL_DISPLAY);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::calculator::Phase;

    fn press(state: CalcState, intents: &[CalcIntent]) -> CalcState {
        intents
            .iter()
            .fold(state, |state, intent| CalcReducer::reduce(state, *intent))
    }

    fn entering(buffer: &str) -> CalcState {
        CalcState::Entering {
            buffer: buffer.to_string(),
            pending: None,
        }
    }

    #[test]
    fn leading_zero_is_collapsed() {
        let state = press(
            CalcState::default(),
            &[
                CalcIntent::Digit('0'),
                CalcIntent::Digit('0'),
                CalcIntent::Digit('5'),
            ],
        );
        assert_eq!(state.display_text(), "5");
    }

    #[test]
    fn zero_after_other_digits_appends() {
        let state = press(entering("5"), &[CalcIntent::Digit('0')]);
        assert_eq!(state.display_text(), "50");
    }

    #[test]
    fn non_digit_char_is_ignored() {
        let state = press(entering("5"), &[CalcIntent::Digit('a')]);
        assert_eq!(state, entering("5"));
    }

    #[test]
    fn decimal_on_zero_keeps_zero() {
        let state = press(CalcState::default(), &[CalcIntent::Decimal]);
        assert_eq!(state.display_text(), "0.");
    }

    #[test]
    fn second_decimal_is_ignored() {
        let state = press(
            entering("1.5"),
            &[CalcIntent::Decimal, CalcIntent::Digit('2'), CalcIntent::Decimal],
        );
        assert_eq!(state.display_text(), "1.52");
    }

    #[test]
    fn decimal_after_operator_starts_fresh() {
        let state = press(
            entering("1.5"),
            &[CalcIntent::Operator(Operator::Add), CalcIntent::Decimal],
        );
        assert_eq!(state.display_text(), "0.");
        assert_eq!(state.phase(), Phase::Entering);
        assert!(state.pending().is_some());
    }

    #[test]
    fn backspace_pops_last_char() {
        let state = press(entering("123"), &[CalcIntent::Backspace]);
        assert_eq!(state.display_text(), "12");
    }

    #[test]
    fn backspace_never_leaves_empty_display() {
        let state = press(entering("7"), &[CalcIntent::Backspace]);
        assert_eq!(state.display_text(), "0");
        let state = press(state, &[CalcIntent::Backspace]);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn backspace_while_awaiting_keeps_pending() {
        let state = press(
            entering("42"),
            &[CalcIntent::Operator(Operator::Add), CalcIntent::Backspace],
        );
        assert_eq!(state.phase(), Phase::AwaitingOperand);
        assert_eq!(state.display_text(), "4");
        assert_eq!(state.pending(), Some(&PendingOperation::new("42", Operator::Add)));
    }

    #[test]
    fn operator_stores_display_as_operand() {
        let state = press(entering("8"), &[CalcIntent::Operator(Operator::Multiply)]);
        assert_eq!(
            state,
            CalcState::AwaitingOperand {
                buffer: "8".into(),
                pending: PendingOperation::new("8", Operator::Multiply),
            }
        );
    }

    #[test]
    fn chained_operator_evaluates_left_to_right() {
        let state = press(
            entering("2"),
            &[
                CalcIntent::Operator(Operator::Add),
                CalcIntent::Digit('3'),
                CalcIntent::Operator(Operator::Multiply),
            ],
        );
        assert_eq!(state.display_text(), "5");
        assert_eq!(state.pending(), Some(&PendingOperation::new("5", Operator::Multiply)));
    }

    #[test]
    fn chained_result_keeps_full_precision() {
        let state = press(
            entering("1"),
            &[
                CalcIntent::Operator(Operator::Divide),
                CalcIntent::Digit('3'),
                CalcIntent::Operator(Operator::Multiply),
            ],
        );
        assert_eq!(state.display_text(), "0.33333333");
        let state = press(state, &[CalcIntent::Digit('3'), CalcIntent::Equals]);
        assert_eq!(state.display_text(), "1");
    }

    #[test]
    fn repeated_operator_reuses_display_as_right_operand() {
        // 2 + + evaluates 2 + 2 before taking the new operator
        let state = press(
            entering("2"),
            &[
                CalcIntent::Operator(Operator::Add),
                CalcIntent::Operator(Operator::Subtract),
            ],
        );
        assert_eq!(state.display_text(), "4");
        assert_eq!(state.pending(), Some(&PendingOperation::new("4", Operator::Subtract)));
    }

    #[test]
    fn chained_divide_by_zero_shows_error() {
        let state = press(
            entering("5"),
            &[
                CalcIntent::Operator(Operator::Divide),
                CalcIntent::Digit('0'),
                CalcIntent::Operator(Operator::Add),
            ],
        );
        assert!(state.is_error());
        assert!(state.pending().is_none());
    }

    #[test]
    fn equals_without_pending_is_inert() {
        let state = press(entering("12"), &[CalcIntent::Equals]);
        assert_eq!(state, entering("12"));
    }

    #[test]
    fn equals_clears_pending() {
        let state = press(
            entering("6"),
            &[
                CalcIntent::Operator(Operator::Subtract),
                CalcIntent::Digit('9'),
                CalcIntent::Equals,
            ],
        );
        assert_eq!(
            state,
            CalcState::ResultShown {
                readout: Readout::Number("-3".into())
            }
        );
        let again = press(state.clone(), &[CalcIntent::Equals]);
        assert_eq!(again, state);
    }

    #[test]
    fn equals_right_after_operator_uses_display() {
        let state = press(
            entering("7"),
            &[CalcIntent::Operator(Operator::Multiply), CalcIntent::Equals],
        );
        assert_eq!(state.display_text(), "49");
    }

    #[test]
    fn zero_result_is_a_valid_operand() {
        let state = press(
            entering("2"),
            &[
                CalcIntent::Operator(Operator::Subtract),
                CalcIntent::Digit('2'),
                CalcIntent::Operator(Operator::Add),
                CalcIntent::Digit('3'),
                CalcIntent::Equals,
            ],
        );
        assert_eq!(state.display_text(), "3");
    }

    #[test]
    fn operator_after_result_continues_from_it() {
        let state = CalcState::ResultShown {
            readout: Readout::Number("9".into()),
        };
        let state = press(
            state,
            &[
                CalcIntent::Operator(Operator::Divide),
                CalcIntent::Digit('2'),
                CalcIntent::Equals,
            ],
        );
        assert_eq!(state.display_text(), "4.5");
    }

    #[test]
    fn operator_on_error_is_inert() {
        let error = CalcState::ResultShown {
            readout: Readout::Error(CalcError::DivideByZero),
        };
        // Deliberately narrower than adopting the display as an operand:
        // the error stays on the display.
        let state = press(error.clone(), &[CalcIntent::Operator(Operator::Add)]);
        assert_eq!(state, error);
    }

    #[test]
    fn backspace_on_error_edits_message() {
        let error = CalcState::ResultShown {
            readout: Readout::Error(CalcError::DivideByZero),
        };
        let state = press(error, &[CalcIntent::Backspace]);
        assert_eq!(
            state,
            CalcState::ResultShown {
                readout: Readout::Number("Error: Div by 0".into())
            }
        );
        assert!(!state.is_error());
    }

    #[test]
    fn operator_on_edited_error_fails_to_evaluate() {
        let error = CalcState::ResultShown {
            readout: Readout::Error(CalcError::DivideByZero),
        };
        let state = press(
            error,
            &[
                CalcIntent::Backspace,
                CalcIntent::Operator(Operator::Add),
                CalcIntent::Digit('1'),
                CalcIntent::Equals,
            ],
        );
        assert_eq!(
            state,
            CalcState::ResultShown {
                readout: Readout::Error(CalcError::InvalidOperand("Error: Div by 0".into()))
            }
        );
        assert_eq!(state.display_text(), "Error");
    }

    #[test]
    fn backspace_on_result_edits_in_place() {
        let state = CalcState::ResultShown {
            readout: Readout::Number("25".into()),
        };
        let state = press(state, &[CalcIntent::Backspace]);
        assert_eq!(
            state,
            CalcState::ResultShown {
                readout: Readout::Number("2".into())
            }
        );
    }

    #[test]
    fn partial_negative_operand_evaluates_to_error() {
        let state = CalcState::ResultShown {
            readout: Readout::Number("-5".into()),
        };
        let state = press(
            state,
            &[
                CalcIntent::Backspace,
                CalcIntent::Operator(Operator::Add),
                CalcIntent::Digit('1'),
                CalcIntent::Equals,
            ],
        );
        assert_eq!(
            state,
            CalcState::ResultShown {
                readout: Readout::Error(CalcError::InvalidOperand("-".into()))
            }
        );
        assert_eq!(state.display_text(), "Error");
    }

    #[test]
    fn transition_returns_display_text() {
        let (state, text) = transition(CalcState::default(), CalcIntent::Digit('4'));
        assert_eq!(text, "4");
        assert_eq!(state, entering("4"));
    }
}
