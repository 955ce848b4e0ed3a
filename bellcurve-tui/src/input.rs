//! Event dispatch — keyboard controls and the anchor drag handlers.
//!
//! The drag path is the only feedback loop in the system: pointer column →
//! `x_histogram.invert` → parameter update → full recompute. Every tick is
//! handled synchronously at crossterm's native cadence, no debouncing.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use bellcurve_core::Scales;

use crate::app::{Anchor, AppState, DragSession};
use crate::ui::chart_panel::{anchor_positions, scales_for};

/// Domain-unit offset between the mean anchor's drawn position and the
/// mean itself. The anchor renders at `mean + OFFSET` and a drag computes
/// `invert(px) - OFFSET`, so the marker tracks the pointer exactly while
/// the committed mean stays 20 units to its left.
pub const MEAN_ANCHOR_OFFSET: f64 = 20.0;

/// Cells of slack around an anchor glyph that still grab it.
const GRAB_COLS: u16 = 2;
const GRAB_ROWS: u16 = 1;

// ── Keyboard ─────────────────────────────────────────────────────────

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Windows sends both Press and Release.
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('g') => {
            app.cancel_edit();
            app.regenerate();
            app.set_status(format!(
                "generated {} samples (generation {})",
                app.config.data_points, app.generation
            ));
        }
        KeyCode::Tab | KeyCode::Down => {
            app.commit_edit();
            app.focus = app.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.commit_edit();
            app.focus = app.focus.prev();
        }
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => {
            if let Some(buf) = &mut app.edit_buffer {
                buf.pop();
            }
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            app.edit_buffer.get_or_insert_with(String::new).push(c);
        }
        _ => {}
    }
}

// ── Mouse / drag controller ──────────────────────────────────────────

pub fn handle_mouse(app: &mut AppState, event: MouseEvent) {
    let plot = app.chart_plot;
    if plot.width == 0 || plot.height == 0 {
        return;
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(anchor) = hit_test(app, event.column, event.row) {
                app.drag = Some(DragSession { anchor });
                // The mean handler fires on start, move, and end; the
                // std-dev handler on move only.
                if anchor == Anchor::Mean {
                    drag_tick(app, anchor, event.column);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(session) = app.drag {
                drag_tick(app, session.anchor, event.column);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(session) = app.drag.take() {
                if session.anchor == Anchor::Mean {
                    drag_tick(app, session.anchor, event.column);
                }
            }
        }
        _ => {}
    }
}

/// Convert one pointer tick into a parameter update and full redraw cycle.
/// Dragged values are not clamped: a non-positive std flows through the
/// engine's degenerate path.
fn drag_tick(app: &mut AppState, anchor: Anchor, column: u16) {
    let scales = scales_for(&app.frame, app.chart_plot);
    let value = dragged_value(&scales, app.chart_plot, anchor, column);
    let mut next = app.params;
    match anchor {
        Anchor::Mean => next.mean = value,
        Anchor::StdDev => next.std_dev = value,
    }
    app.apply_params(next);
}

/// Inverse-map a pointer column to the new parameter value.
pub fn dragged_value(scales: &Scales, plot: Rect, anchor: Anchor, column: u16) -> f64 {
    let px = column.saturating_sub(plot.x) as f64;
    let domain = scales.x_histogram.invert(px);
    match anchor {
        Anchor::Mean => domain - MEAN_ANCHOR_OFFSET,
        Anchor::StdDev => domain,
    }
}

/// Which anchor, if any, sits under the pointer.
pub fn hit_test(app: &AppState, column: u16, row: u16) -> Option<Anchor> {
    let positions = anchor_positions(&app.frame.params, app.chart_plot);
    for (anchor, (col, r)) in positions {
        if column.abs_diff(col) <= GRAB_COLS && row.abs_diff(r) <= GRAB_ROWS {
            return Some(anchor);
        }
    }
    None
}
