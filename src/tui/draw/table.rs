//! Results table: index, model, owner, creation date.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::core::cli::COLUMNS;
use crate::core::models::format_timestamp;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

/// Column proportions: narrow index, wide model id.
const WIDTHS: [Constraint; 4] = [
    Constraint::Ratio(1, 10),
    Constraint::Ratio(4, 10),
    Constraint::Ratio(3, 10),
    Constraint::Ratio(2, 10),
];

pub(crate) fn draw_table(f: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(COLUMNS.map(|c| {
        Cell::from(c).style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    }))
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .visible_records()
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new([
                Cell::from((i + 1).to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(r.identifier.clone()).style(Style::default().fg(ACCENT_SECONDARY)),
                Cell::from(r.owner.clone()),
                Cell::from(format_timestamp(r.created_at)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.table_state);
}
