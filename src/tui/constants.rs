//! TUI constants: colors, timing, and key hints.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Error text color.
pub(super) const ERROR: Color = Color::Rgb(248, 113, 113);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Rows moved by PageUp/PageDown in the results table.
pub(crate) const SCROLL_ROWS_PAGE: usize = 10;

/// Drawn once per typed key character.
pub(super) const MASK_CHAR: char = '•';

/// Max lines of raw error body shown under an HTTP error.
pub(super) const ERROR_DETAIL_LINES: u16 = 6;

/// Hints shown in the bottom bar.
pub(super) const KEY_HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("←/→", "provider"),
    ("Enter", "fetch"),
    ("↑/↓", "scroll"),
    ("Esc", "quit"),
];
