use crate::ui::app::App;
use crate::ui::layout::{button_at, keypad_cells, layout_regions};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.request_quit();
                return;
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.copy_display();
                return;
            }
            _ => {}
        }
    }

    app.on_key(key);
}

/// Left click on a keypad button presses it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !app.config().mouse {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(area) = app.area() else {
        return;
    };
    let regions = layout_regions(area, app.config().show_footer);
    let cells = keypad_cells(regions.keypad);
    if let Some(index) = button_at(&cells, mouse.column, mouse.row) {
        app.press_button(index);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
