//! Display and expression-hint widgets.

use crate::ui::calculator::CalcState;
use crate::ui::theme::{DISPLAY_TEXT, GLOBAL_BORDER, HINT_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Keep the tail of `text` when it is wider than `width`, marking the cut.
pub fn fit_display(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(count - (width - 1)).collect();
    format!("…{}", tail)
}

pub fn hint_widget(state: &CalcState) -> Paragraph<'static> {
    let hint = state.expression_hint().unwrap_or_default();
    Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(HINT_TEXT))))
        .alignment(Alignment::Right)
}

pub fn display_widget(state: &CalcState, area: Rect) -> Paragraph<'static> {
    let inner_width = area.width.saturating_sub(4) as usize;
    let text = fit_display(&state.display_text(), inner_width);
    let color = if state.is_error() {
        STATUS_ERROR
    } else {
        DISPLAY_TEXT
    };

    Paragraph::new(Line::from(vec![
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
