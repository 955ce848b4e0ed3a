//! Top-level UI layout — controls row, chart panel, status bar.

pub mod chart_panel;
pub mod controls_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI. Records the chart plot area on the app so mouse
/// events can be hit-tested against the same geometry that was drawn.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    let controls_area = chunks[0];
    let chart_area = chunks[1];
    let status_area = chunks[2];

    controls_panel::render(f, controls_area, app);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(app.drag.is_some()))
        .title(Span::styled(" bell curve ", theme::label()));
    let inner = block.inner(chart_area);
    f.render_widget(block, chart_area);

    app.chart_plot = chart_panel::plot_area(inner);
    chart_panel::render(f, inner, app);

    status_bar::render(f, status_area, app);
}
