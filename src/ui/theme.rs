use ratatui::style::Color;

pub const ACCENT_ORANGE: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISPLAY_TEXT: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const NUMBER_KEY: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const OPERATOR_KEY: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const ACTION_KEY: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
