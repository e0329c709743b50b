//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Severity colors ---
pub const SEVERITY_ERROR: Color = Color::LightRed;
pub const SEVERITY_WARNING: Color = Color::Yellow;
pub const SEVERITY_SUCCESS: Color = Color::Green;
pub const SEVERITY_INFO: Color = Color::LightBlue;
pub const SEVERITY_DEFAULT: Color = Color::White;

// --- Filter line ---
pub const FILTER_PROMPT: Color = Color::Yellow;
