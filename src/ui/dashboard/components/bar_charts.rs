//! "Number of Rent" bar charts
//!
//! Hour groups on the left with a fixed colour legend, seasons on the right
//! with the category order reversed and the value scale on the right edge.

use super::super::state::DashboardState;
use super::super::utils::{format_count, rgb};
use super::hourly_chart::render_empty_chart;
use crate::consts::cli_consts::palette;
use crate::data::HourGroup;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, BorderType, Borders, Clear, Paragraph,
};
use strum::IntoEnumIterator;

const BAR_GAP: u16 = 2;

/// Render both bar charts side by side.
pub fn render_bar_charts(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_hour_group_chart(f, chunks[0], state);
    render_season_chart(f, chunks[1], state);
}

fn chart_block(title: &str, x_label: &str) -> Block<'static> {
    Block::default()
        .title(Line::from(title.to_string()).centered())
        .title_bottom(Line::from(x_label.to_string()).centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Width that spreads `count` bars over `width` columns.
fn bar_width(width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    (width / count).saturating_sub(BAR_GAP).clamp(3, 24)
}

fn render_hour_group_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let groups = &state.snapshot().hour_groups;
    let block = chart_block("By Hour Group", "Hour Group");

    if groups.is_empty() {
        render_empty_chart(f, area, block);
        return;
    }

    let bars: Vec<Bar> = groups
        .iter()
        .map(|row| {
            let color = rgb(row.hour_group.rgb());
            Bar::default()
                .value(row.total_count)
                .text_value(format_count(row.total_count))
                .label(Line::from(row.hour_group.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let inner = block.inner(area);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner.width, bars.len()))
        .bar_gap(BAR_GAP);
    f.render_widget(chart, area);

    render_hour_group_legend(f, inner);
}

/// Legend pinned to the upper-right corner of the chart area.
fn render_hour_group_legend(f: &mut Frame, chart_area: Rect) {
    let lines: Vec<Line> = HourGroup::iter()
        .map(|group| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(rgb(group.rgb()))),
                Span::raw(format!("{} ({})", group, group.window_label())),
            ])
        })
        .collect();

    let width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0) + 2;
    let height = lines.len() as u16 + 2;
    if chart_area.width < width || chart_area.height < height {
        return;
    }

    let legend_area = Rect {
        x: chart_area.right() - width,
        y: chart_area.y,
        width,
        height,
    };
    let legend = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(Clear, legend_area);
    f.render_widget(legend, legend_area);
}

fn render_season_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let seasons = &state.snapshot().seasons;
    let block = chart_block("By Season", "Season");

    if seasons.is_empty() {
        render_empty_chart(f, area, block);
        return;
    }

    let color = rgb(palette::SEASON);
    // Reversed category axis: last season first
    let bars: Vec<Bar> = seasons
        .iter()
        .rev()
        .map(|row| {
            Bar::default()
                .value(row.total_count)
                .text_value(format_count(row.total_count))
                .label(Line::from(row.season.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let peak = seasons.iter().map(|row| row.total_count).max().unwrap_or(0);
    let scale_width = format_count(peak).len() as u16 + 1;

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(scale_width)])
        .split(inner);

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(chunks[0].width, bars.len()))
        .bar_gap(BAR_GAP)
        .max(peak);
    f.render_widget(chart, chunks[0]);

    render_right_scale(f, chunks[1], peak);
}

/// Value ticks on the right edge: peak at the top, zero at the bar base.
fn render_right_scale(f: &mut Frame, area: Rect, peak: u64) {
    // The bottom row holds the bar labels, so the bars end one row above it.
    let rows = area.height.saturating_sub(1) as usize;
    if rows < 2 {
        return;
    }

    let mut lines = vec![Line::from(""); rows];
    lines[0] = Line::from(format_count(peak));
    if rows >= 5 {
        lines[rows / 2] = Line::from(format_count(peak / 2));
    }
    lines[rows - 1] = Line::from("0");

    let scale = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
    f.render_widget(scale, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, RentalRecord};
    use crate::logging::ActivityLog;
    use crate::ui::app::UIConfig;
    use chrono::NaiveDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    fn state() -> DashboardState {
        let rows = [
            (1, 12, HourGroup::Midday, "Fall", 100, 200),
            (2, 20, HourGroup::Night, "Winter", 200, 1000),
        ];
        let records = rows
            .iter()
            .map(|&(day, hour, hour_group, season, casual, registered)| RentalRecord {
                date: NaiveDate::from_ymd_opt(2011, 12, day).unwrap(),
                hour,
                hour_group,
                season: season.to_string(),
                casual_count: casual,
                registered_count: registered,
                total_count: casual + registered,
            })
            .collect();
        let dataset = Arc::new(Dataset::from_records(records).unwrap());
        let activity_log: ActivityLog = Arc::new(Mutex::new(VecDeque::new()));
        let full = dataset.bounds().full_range();
        DashboardState::new(dataset, full, activity_log, UIConfig::new(false))
    }

    fn row_text(buffer: &Buffer, y: u16, xs: std::ops::Range<u16>) -> String {
        xs.map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    // Season chart: last season drawn first, scale ticks on the right edge.
    // Hour-group chart: legend with the clock windows.
    fn test_bar_chart_layout() {
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        let state = state();
        terminal
            .draw(|f| {
                let area = f.area();
                render_bar_charts(f, area, &state);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        // Season block spans x 60..120; its inner area is x 61..119, y 1..19.
        let labels = row_text(buffer, 18, 61..119);
        let winter = labels.find("Winter").unwrap();
        let fall = labels.find("Fall").unwrap();
        assert!(winter < fall, "labels row: {:?}", labels);

        // Right-aligned scale in the last six inner columns
        assert_eq!(row_text(buffer, 1, 113..119).trim(), "1,200");
        assert_eq!(row_text(buffer, 17, 113..119).trim(), "0");
        assert!(!row_text(buffer, 1, 61..113).contains("1,200"));

        let hour_group_half: String = (0..20).map(|y| row_text(buffer, y, 0..60)).collect();
        assert!(hour_group_half.contains("Midday (11:00 - 17:00)"));
        assert!(hour_group_half.contains("Morning (03:00 - 10:00)"));
        assert!(hour_group_half.contains("Night (18:00 - 02:00)"));
    }

    #[test]
    fn test_bar_width_fits_area() {
        assert_eq!(bar_width(60, 3), 18);
        assert_eq!(bar_width(6, 3), 3);
        assert_eq!(bar_width(200, 1), 24);
        assert_eq!(bar_width(40, 0), 24);
    }
}
