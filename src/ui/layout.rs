use crate::ui::keypad::{self, KEYPAD_COLUMNS};
use ratatui::layout::Rect;

/// Width of the calculator panel.
pub const PANEL_WIDTH: u16 = 36;
/// Height of the calculator panel: hint line, display, five keypad rows.
pub const PANEL_HEIGHT: u16 = 1 + DISPLAY_HEIGHT + 5 * 3;

const DISPLAY_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Pending expression hint above the display.
    pub header: Rect,
    pub display: Rect,
    pub keypad: Rect,
    /// Zero-height when the footer is hidden.
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, show_footer: bool) -> Regions {
    let footer_height = if show_footer {
        FOOTER_HEIGHT.min(area.height)
    } else {
        0
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };

    let panel = centered_rect_by_size(body, PANEL_WIDTH, PANEL_HEIGHT);
    let header_height = panel.height.min(1);
    let display_height = DISPLAY_HEIGHT.min(panel.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..panel
    };
    let display = Rect {
        y: panel.y + header_height,
        height: display_height,
        ..panel
    };
    let keypad = Rect {
        y: panel.y + header_height + display_height,
        height: panel.height.saturating_sub(header_height + display_height),
        ..panel
    };

    Regions {
        header,
        display,
        keypad,
        footer,
    }
}

/// Rectangle of `width` x `height` centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// One rectangle per entry of `keypad::BUTTONS`, in the same order.
///
/// The last row and the last cell of each row absorb rounding leftovers.
pub fn keypad_cells(area: Rect) -> Vec<Rect> {
    let rows = keypad::rows();
    let row_count = rows.len() as u16;
    if row_count == 0 {
        return Vec::new();
    }
    let row_height = area.height / row_count;
    let column_width = area.width / KEYPAD_COLUMNS;

    let mut cells = Vec::with_capacity(keypad::BUTTONS.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let row_idx = row_idx as u16;
        let y = area.y + row_idx * row_height;
        let height = if row_idx + 1 == row_count {
            area.height.saturating_sub(row_idx * row_height)
        } else {
            row_height
        };

        let mut column = 0;
        for (idx, button) in row.iter().enumerate() {
            let x = area.x + column * column_width;
            let width = if idx + 1 == row.len() {
                area.width.saturating_sub(column * column_width)
            } else {
                button.span * column_width
            };
            cells.push(Rect {
                x,
                y,
                width,
                height,
            });
            column += button.span;
        }
    }
    cells
}

/// Index of the cell containing the screen position, if any.
pub fn button_at(cells: &[Rect], column: u16, row: u16) -> Option<usize> {
    cells.iter().position(|cell| {
        column >= cell.x
            && column < cell.x.saturating_add(cell.width)
            && row >= cell.y
            && row < cell.y.saturating_add(cell.height)
    })
}
