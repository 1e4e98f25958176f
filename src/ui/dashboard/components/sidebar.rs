//! Dashboard sidebar component
//!
//! Renders the date range picker and a summary of the current selection

use super::super::picker::PickerField;
use super::super::state::DashboardState;
use super::super::utils::format_count;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the sidebar: picker on top, activity log below.
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Fill(1)])
        .split(area);

    render_date_range(f, chunks[0], state);
    super::logs::render_logs_panel(f, chunks[1], state);
}

fn render_date_range(f: &mut Frame, area: Rect, state: &DashboardState) {
    let picker = &state.picker;
    let range = picker.range();
    let bounds = picker.bounds();
    let snapshot = state.snapshot();

    let field_line = |label: &str, value: String, field: PickerField| {
        let focused = picker.focus() == field;
        let value_style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(
                format!("{} {:<6}", if focused { ">" } else { " " }, label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!(" {} ", value), value_style),
        ])
    };

    let lines = vec![
        field_line("Start", range.start().to_string(), PickerField::Start),
        field_line("End", range.end().to_string(), PickerField::End),
        Line::from(""),
        Line::from(vec![
            Span::styled("Days: ", Style::default().fg(Color::Gray)),
            Span::styled(
                range.num_days().to_string(),
                Style::default().fg(Color::LightYellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Records: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_count(snapshot.record_count as u64),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
        Line::from(Span::styled(
            format!("Data: {} .. {}", bounds.min_date, bounds.max_date),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("DATE RANGE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
