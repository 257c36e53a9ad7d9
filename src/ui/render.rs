use crate::ui::app::App;
use crate::ui::display::{display_widget, hint_widget};
use crate::ui::footer::Footer;
use crate::ui::keypad::{Button, ButtonStyle, BUTTONS};
use crate::ui::layout::{keypad_cells, layout_regions};
use crate::ui::theme::{
    ACCENT_ORANGE, ACTION_KEY, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, NUMBER_KEY, OPERATOR_KEY,
    STATUS_ERROR,
};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area, app.config().show_footer);
    let state = app.calc_state();

    frame.render_widget(Clear, area);
    frame.render_widget(hint_widget(state), regions.header);
    frame.render_widget(display_widget(state, regions.display), regions.display);

    let highlighted = app.highlighted_button();
    for (idx, (button, cell)) in BUTTONS
        .iter()
        .zip(keypad_cells(regions.keypad))
        .enumerate()
    {
        frame.render_widget(button_widget(button, highlighted == Some(idx)), cell);
    }

    if regions.footer.height > 0 {
        let footer = Footer::new(app.status());
        frame.render_widget(footer.widget(regions.footer), regions.footer);
    }
}

fn button_color(style: ButtonStyle) -> Color {
    match style {
        ButtonStyle::Number => NUMBER_KEY,
        ButtonStyle::Operator => OPERATOR_KEY,
        ButtonStyle::Action => ACTION_KEY,
        ButtonStyle::Clear => STATUS_ERROR,
        ButtonStyle::Equals => ACCENT_ORANGE,
    }
}

fn button_widget(button: &Button, pressed: bool) -> Paragraph<'static> {
    let color = button_color(button.style);
    let mut label_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if pressed {
        label_style = label_style.bg(ACTIVE_HIGHLIGHT);
        block = block
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    Paragraph::new(Line::from(Span::styled(button.label, label_style)))
        .alignment(Alignment::Center)
        .block(block)
}
