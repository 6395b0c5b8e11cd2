//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const PHONE_SCREEN_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const CODE_BG: Color = Color::Rgb(10, 12, 16);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;
pub const PHONE_FRAME: Color = Color::Gray;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const SHARE_BLUE: Color = Color::LightBlue;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Progress bar (approximates the yellow → pink → purple story gradient) ---
pub const PROGRESS_FILL: Color = Color::LightMagenta;
pub const PROGRESS_TRACK: Color = Color::Rgb(38, 38, 38);

// --- Code panels ---
pub const CODE_JS: Color = Color::Rgb(253, 230, 138);
pub const CODE_HTTP: Color = Color::Rgb(165, 243, 252);
pub const HEX_PLAIN: Color = Color::Rgb(167, 243, 208);
pub const HEX_ENCRYPTED: Color = Color::Rgb(233, 213, 255);

// --- Timeline ---
pub const DOT_ACTIVE: Color = Color::White;
pub const DOT_IDLE: Color = Color::DarkGray;
