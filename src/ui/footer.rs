use crate::ui::app::StatusMessage;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str =
    " 0-9 . + - * /  │  Enter: =  │  Bksp: ←  │  Esc: C  │  y: Copy  │  q: Quit";

pub struct Footer<'a> {
    status: Option<&'a StatusMessage>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a StatusMessage>) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // Status message replaces the version while it is shown
        let (right, right_style) = match self.status {
            Some(status) => {
                let color = if status.is_error { STATUS_ERROR } else { STATUS_OK };
                (format!("{} ", status.text), Style::default().fg(color))
            }
            None => (format!("v{} ", VERSION), text_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
