//! Dashboard metrics component
//!
//! Renders the three rental totals side by side

use super::super::state::DashboardState;
use super::super::utils::format_count;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render "Total casual", "Total registered" and "Total rent".
pub fn render_metrics_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let totals = state.snapshot().totals;

    let metric_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_metric(f, metric_chunks[0], "Total casual", totals.casual, Color::LightYellow);
    render_metric(
        f,
        metric_chunks[1],
        "Total registered",
        totals.registered,
        Color::LightGreen,
    );
    render_metric(f, metric_chunks[2], "Total rent", totals.total, Color::LightCyan);
}

fn render_metric(f: &mut Frame, area: Rect, label: &str, value: u64, color: Color) {
    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let metric = Paragraph::new(format_count(value))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(metric, area);
}
