//! One-line status bar: last message, sample summary, key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(status_line(app)), area);
}

/// Build the status line from the newest status record and the frame's
/// sample summary.
fn status_line(app: &AppState) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some(record) = app.last_status() {
        let style = match record.level {
            StatusLevel::Info => ratatui::style::Style::default().fg(theme::POSITIVE),
            StatusLevel::Warning => ratatui::style::Style::default().fg(theme::WARNING),
            StatusLevel::Error => ratatui::style::Style::default().fg(theme::NEGATIVE),
        };
        spans.push(Span::styled(
            format!("[{}] ", record.timestamp.format("%H:%M:%S")),
            theme::muted(),
        ));
        spans.push(Span::styled(record.message.clone(), style));
        spans.push(Span::raw("  "));
    }

    let summary = &app.frame.summary;
    if summary.observed_mean.is_finite() {
        spans.push(Span::styled(
            format!(
                "observed μ {:.2} σ {:.2} | dropped {}",
                summary.observed_mean, summary.observed_std, summary.dropped
            ),
            theme::muted(),
        ));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        "tab field | enter commit | g generate | drag ◆ | q quit",
        theme::muted(),
    ));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellcurve_core::{DistributionParams, SeedPlan};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn status_message_appears_in_line() {
        let mut app = AppState::new(DistributionParams::default(), SeedPlan::new(42));
        app.set_error("bad input somewhere");

        let text = line_text(&status_line(&app));
        assert!(text.contains("bad input somewhere"));
        // Timestamp prefix from the same record.
        assert!(text.contains('['));
    }

    #[test]
    fn line_without_status_still_shows_hints() {
        let app = AppState::new(DistributionParams::default(), SeedPlan::new(42));
        let text = line_text(&status_line(&app));
        assert!(text.contains("q quit"));
        assert!(text.contains("observed"));
    }
}
