//! Dashboard header component
//!
//! Renders the dashboard title

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const DASHBOARD_TITLE: &str = "Bike Sharing Dashboard";

/// Render the title bar.
pub fn render_header(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(DASHBOARD_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, area);
}

/// Render a section subheader such as "Hourly rent".
pub fn render_subheader(f: &mut Frame, area: Rect, text: &str) {
    let subheader = Paragraph::new(text).style(
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(subheader, area);
}
