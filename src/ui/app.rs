use crate::clipboard::DisplayClipboard;
use crate::config::UiConfig;
use crate::ui::calculator::{CalcIntent, CalcReducer, CalcState};
use crate::ui::keypad::{self, BUTTONS};
use crate::ui::mvi::Reducer;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Transient message shown in the footer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    config: UiConfig,
    /// Calculator state (MVI pattern).
    calc: CalcState,
    /// Pressed button index and when it was pressed.
    highlight: Option<(usize, Instant)>,
    status: Option<StatusMessage>,
    clipboard: DisplayClipboard,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            config,
            calc: CalcState::default(),
            highlight: None,
            status: None,
            clipboard: DisplayClipboard::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn calc_state(&self) -> &CalcState {
        &self.calc
    }

    pub fn display_text(&self) -> String {
        self.calc.display_text()
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn highlighted_button(&self) -> Option<usize> {
        self.highlight.map(|(idx, _)| idx)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Full terminal area, once the size is known.
    pub fn area(&self) -> Option<Rect> {
        self.size.map(|(width, height)| Rect {
            x: 0,
            y: 0,
            width,
            height,
        })
    }

    /// Run an intent through the calculator reducer.
    pub fn dispatch(&mut self, intent: CalcIntent) {
        dispatch_mvi!(self, calc, CalcReducer, intent);
        tracing::debug!(
            ?intent,
            phase = ?self.calc.phase(),
            display = %self.calc.display_text(),
            "calculator transition"
        );
        if self.calc.is_error() {
            tracing::info!("Evaluation failed: {}", self.calc.display_text());
        }
        self.status = None;
        if let Some(idx) = keypad::button_for_intent(intent) {
            self.highlight = Some((idx, Instant::now()));
        }
    }

    /// Press the keypad button at `index` in `keypad::BUTTONS`.
    pub fn press_button(&mut self, index: usize) {
        if let Some(button) = BUTTONS.get(index) {
            self.dispatch(button.action.intent());
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(intent) = keypad::intent_for_key(key) {
            self.dispatch(intent);
        }
    }

    /// Copy the display text to the system clipboard.
    pub fn copy_display(&mut self) {
        let text = self.calc.display_text();
        self.status = Some(match self.clipboard.copy(&text) {
            Ok(()) => StatusMessage {
                text: format!("Copied {}", text),
                is_error: false,
            },
            Err(err) => {
                tracing::warn!("{}", err);
                StatusMessage {
                    text: err,
                    is_error: true,
                }
            }
        });
    }

    pub fn on_tick(&mut self) {
        let hold = Duration::from_millis(self.config.highlight_ms);
        if let Some((_, pressed_at)) = self.highlight {
            if pressed_at.elapsed() >= hold {
                self.highlight = None;
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }
}
