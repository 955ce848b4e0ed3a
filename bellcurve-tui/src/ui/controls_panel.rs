//! Controls panel — the four numeric parameter fields.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Field};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);

    for field in Field::ALL {
        render_field(f, chunks[field.index()], app, field);
    }

    // Fifth slot mirrors the generate button of the controls row.
    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" g ", theme::label()),
        Span::styled("generate", theme::muted()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(theme::panel_border(false)));
    f.render_widget(hint, chunks[4]);
}

fn render_field(f: &mut Frame, area: Rect, app: &AppState, field: Field) {
    let focused = app.focus == field;
    let editing = focused && app.edit_buffer.is_some();

    let value_style = if editing {
        theme::accent()
    } else {
        theme::value()
    };
    let mut text = app.field_text(field);
    if editing {
        text.push('_');
    }

    let widget = Paragraph::new(Span::styled(text, value_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(focused))
            .title(Span::styled(format!(" {} ", field.label()), theme::label())),
    );
    f.render_widget(widget, area);
}
