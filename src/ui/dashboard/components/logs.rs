//! Dashboard logs panel component
//!
//! Renders the activity log fed by the logger

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_level_color};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity log, newest entry first.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let max_logs = (area.height.saturating_sub(3)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = match state.activity_log.lock() {
        Ok(entries) => entries
            .iter()
            .rev()
            .take(log_count)
            .map(|entry| {
                let status_icon = match entry.level {
                    LogLevel::Error => "❌",
                    LogLevel::Warn => "⚠",
                    _ => "",
                };
                Line::from(vec![
                    Span::raw(format!("{} ", status_icon)),
                    Span::styled(
                        format!("{} ", format_compact_timestamp(&entry.timestamp)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        entry.msg.clone(),
                        Style::default().fg(get_level_color(entry.level)),
                    ),
                ])
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let log_widget = log_paragraph.block(logs_block).wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
