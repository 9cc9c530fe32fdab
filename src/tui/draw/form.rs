//! Header, input fields, status line, and key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::app as app_info;
use crate::core::providers::PROVIDERS;

use super::super::app::{App, Focus, Status};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, ERROR, KEY_HINTS, MASK_CHAR};

/// Bordered block, highlighted when the field has focus.
fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { ACCENT } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title))
}

/// Typed text with a trailing cursor when focused.
fn input_line(text: String, placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = if text.is_empty() && !focused {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(text)]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

pub(crate) fn draw_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " ◆ LLM Models Viewer ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", app_info::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        " Inspect available models from OpenAI, Groq, Gemini, or Cerebras using your API key.",
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(Paragraph::new(vec![line, subtitle]), area);
}

pub(crate) fn draw_fields(f: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(area);

    let provider_focused = app.focus == Focus::Provider;
    let spans: Vec<Span> = PROVIDERS
        .iter()
        .enumerate()
        .flat_map(|(i, p)| {
            let style = if i == app.provider_index {
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            [Span::styled(format!(" {} ", p.name), style), Span::raw(" ")]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block("Provider", provider_focused)),
        cols[0],
    );

    let key_focused = app.focus == Focus::ApiKey;
    let masked: String = app.api_key.chars().map(|_| MASK_CHAR).collect();
    f.render_widget(
        Paragraph::new(input_line(masked, "Paste your API key here", key_focused))
            .block(field_block("API Key", key_focused)),
        cols[1],
    );
}

pub(crate) fn draw_filter(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filter;
    f.render_widget(
        Paragraph::new(input_line(
            app.filter.clone(),
            "Filter by model or owner...",
            focused,
        ))
        .block(field_block("Filter", focused)),
        area,
    );
}

pub(crate) fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.status {
        Status::Idle => vec![Line::from(Span::styled(
            " Press Enter to fetch models",
            Style::default().fg(Color::DarkGray),
        ))],
        Status::Fetching => vec![Line::from(Span::styled(
            format!(" Fetching models from {}...", app.provider().name),
            Style::default().fg(ACCENT_SECONDARY),
        ))],
        Status::Success(total) => {
            let shown = app.visible_records().len();
            let text = if shown == *total {
                format!(" Showing {} models", total)
            } else {
                format!(" Showing {} of {} models", shown, total)
            };
            vec![Line::from(Span::styled(text, Style::default().fg(ACCENT)))]
        }
        Status::Error { message, detail } => {
            let mut lines = vec![Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
            ))];
            if let Some(body) = detail {
                lines.extend(body.lines().map(|l| {
                    Line::from(Span::styled(
                        format!("   {}", l),
                        Style::default().fg(Color::Gray),
                    ))
                }));
            }
            lines
        }
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

pub(crate) fn draw_bottom_bar(f: &mut Frame, area: Rect) {
    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), Style::default().fg(ACCENT)),
                Span::styled(format!("{}  ", label), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
