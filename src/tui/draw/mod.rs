//! TUI rendering: layout for the form, status line, and results table.

mod form;
mod table;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::{App, Status};
use super::constants::ERROR_DETAIL_LINES;

/// Height of the status area: one line, or room for the raw body under an HTTP error.
fn status_height(status: &Status) -> u16 {
    match status {
        Status::Error {
            detail: Some(body), ..
        } => 1 + (body.lines().count() as u16).clamp(1, ERROR_DETAIL_LINES),
        _ => 1,
    }
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(status_height(&app.status)),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    form::draw_header(f, chunks[0]);
    form::draw_fields(f, app, chunks[1]);
    form::draw_filter(f, app, chunks[2]);
    form::draw_status(f, app, chunks[3]);
    table::draw_table(f, app, chunks[4]);
    form::draw_bottom_bar(f, chunks[5]);
}
