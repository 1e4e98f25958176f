//! Hourly rent line chart

use super::super::state::DashboardState;
use super::super::utils::{count_axis_max, format_count, hour_axis, rgb};
use crate::consts::cli_consts::palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

/// Render total rentals per hour as a line with a marker on every hour.
pub fn render_hourly_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let hourly = &state.snapshot().hourly;
    let line_color = rgb(palette::HOURLY_LINE);

    let block = Block::default()
        .title("TOTAL RENT BY HOUR")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if hourly.is_empty() {
        render_empty_chart(f, area, block);
        return;
    }

    let points: Vec<(f64, f64)> = hourly
        .iter()
        .map(|row| (row.hour as f64, row.total_count as f64))
        .collect();
    let peak = hourly.iter().map(|row| row.total_count).max().unwrap_or(0);
    let y_max = count_axis_max(peak);
    let (x_bounds, x_labels) = hour_axis(hourly);

    let datasets = vec![
        Dataset::default()
            .name("Total rent")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line_color))
            .data(&points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(line_color).add_modifier(Modifier::BOLD))
            .data(&points),
    ];

    let x_axis = Axis::default()
        .title(Span::styled("Hour", Style::default().fg(Color::Gray)))
        .style(Style::default().fg(Color::Gray))
        .bounds(x_bounds)
        .labels(x_labels);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, y_max])
        .labels([
            "0".to_string(),
            format_count((y_max / 2.0) as u64),
            format_count(y_max as u64),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);
    f.render_widget(chart, area);
}

/// Draw the chart frame with a hint instead of data.
pub fn render_empty_chart(f: &mut Frame, area: Rect, block: Block) {
    let hint = Paragraph::new("No data for the selected range")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    f.render_widget(hint, area);
}
