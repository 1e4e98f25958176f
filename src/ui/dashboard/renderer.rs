//! Dashboard main renderer

use super::components::{bar_charts, footer, header, hourly_chart, metrics, sidebar};
use super::state::DashboardState;
use super::utils::rgb;
use crate::consts::cli_consts::palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(rgb(palette::BACKGROUND))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, content_chunks[0], state);

    let view_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(content_chunks[1]);

    header::render_subheader(f, view_chunks[0], "Hourly rent");
    metrics::render_metrics_section(f, view_chunks[1], state);
    hourly_chart::render_hourly_chart(f, view_chunks[2], state);
    header::render_subheader(f, view_chunks[3], "Number of Rent");
    bar_charts::render_bar_charts(f, view_chunks[4], state);

    footer::render_footer(f, main_chunks[2]);
}
