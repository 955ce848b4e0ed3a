//! Chart panel — histogram bars, density curve, axes, drag anchors.
//!
//! Buffer-cell drawing: one bar per bucket sized by the histogram scales,
//! a count label above each occupied bar, the density curve as a connected
//! dot path through its sorted points, tick labels, and the two anchor
//! markers. The whole panel is redrawn from the current frame every pass;
//! nothing is diffed.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Frame;

use bellcurve_core::{ChartFrame, DistributionParams, LinearScale, Scales};

use crate::app::{Anchor, AppState};
use crate::input::MEAN_ANCHOR_OFFSET;
use crate::theme;

/// Left gutter reserved for y-axis count labels.
const GUTTER: u16 = 7;
/// Bottom row reserved for x-axis tick labels.
const AXIS_ROWS: u16 = 1;

/// The plot cell area inside a chart panel area.
pub fn plot_area(area: Rect) -> Rect {
    if area.width <= GUTTER + 2 || area.height <= AXIS_ROWS + 2 {
        return Rect::default();
    }
    Rect::new(
        area.x + GUTTER,
        area.y,
        area.width - GUTTER,
        area.height - AXIS_ROWS,
    )
}

/// The four scales for a frame laid out over `plot`, in plot-local cell
/// coordinates. Rebuilt on every draw and on every drag tick.
pub fn scales_for(frame: &ChartFrame, plot: Rect) -> Scales {
    Scales::layout(
        frame,
        plot.width.saturating_sub(1) as f64,
        plot.height.saturating_sub(1) as f64,
    )
}

/// Cell positions of the two anchors: mean at the top edge, std-dev at
/// half height.
///
/// The mean anchor is deliberately drawn at `mean + MEAN_ANCHOR_OFFSET`
/// rather than at the mean itself: the drag handler subtracts the same
/// offset (see [`crate::input`]), so the marker tracks the pointer while
/// the committed mean stays 20 domain units to its left. DESIGN.md
/// records this as a deviation.
pub fn anchor_positions(params: &DistributionParams, plot: Rect) -> [(Anchor, (u16, u16)); 2] {
    let x = LinearScale::new(
        (params.min, params.max),
        (0.0, plot.width.saturating_sub(1) as f64),
    );
    let col = |v: f64| -> u16 {
        let px = x.map(v).round();
        let px = px.clamp(0.0, plot.width.saturating_sub(1) as f64);
        plot.x + px as u16
    };
    [
        (Anchor::Mean, (col(params.mean + MEAN_ANCHOR_OFFSET), plot.y)),
        (
            Anchor::StdDev,
            (col(params.std_dev), plot.y + plot.height / 2),
        ),
    ]
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let plot = plot_area(area);
    if plot.width == 0 || plot.height == 0 {
        return;
    }

    let frame = &app.frame;
    let scales = scales_for(frame, plot);
    let buf = f.buffer_mut();

    draw_bars(buf, plot, frame, &scales);
    draw_curve(buf, plot, frame, &scales);
    draw_axes(buf, area, plot, frame, &scales);
    draw_anchors(buf, plot, app);
}

fn draw_bars(buf: &mut Buffer, plot: Rect, frame: &ChartFrame, scales: &Scales) {
    let h = plot.height.saturating_sub(1);

    for bucket in &frame.histogram.buckets {
        if bucket.count == 0 {
            continue;
        }
        let col0 = scales.x_histogram.map(bucket.lower).round() as i64;
        let col1 = scales.x_histogram.map(bucket.upper).round() as i64;
        let top = scales.y_histogram.map(bucket.count as f64).round() as i64;

        let col0 = col0.clamp(0, plot.width as i64 - 1) as u16;
        // One-cell gap between neighboring bars when there is room.
        let col1 = (col1 - 1).clamp(col0 as i64, plot.width as i64 - 1) as u16;
        let top = top.clamp(0, h as i64) as u16;

        for col in col0..=col1 {
            for row in top..=h {
                buf.set_string(plot.x + col, plot.y + row, "█", theme::accent());
            }
        }

        // Count label centered above the bar, when there is a free row.
        if top > 0 {
            let label = bucket.count.to_string();
            let mid = (col0 + col1) / 2;
            let start = (plot.x + mid).saturating_sub(label.len() as u16 / 2);
            if start + label.len() as u16 <= plot.right() {
                buf.set_string(start, plot.y + top - 1, &label, theme::muted());
            }
        }
    }
}

fn draw_curve(buf: &mut Buffer, plot: Rect, frame: &ChartFrame, scales: &Scales) {
    // Non-finite points are skipped: a degenerate variance renders as an
    // empty path, never a panic.
    for point in &frame.curve {
        if !point.value.is_finite() || !point.density.is_finite() {
            continue;
        }
        let col = scales.x_density.map(point.value).round();
        let row = scales.y_density.map(point.density).round();
        if col < 0.0 || row < 0.0 {
            continue;
        }
        let (col, row) = (col as u16, row as u16);
        if col < plot.width && row < plot.height {
            buf.set_string(plot.x + col, plot.y + row, "•", theme::curve());
        }
    }
}

fn draw_axes(buf: &mut Buffer, area: Rect, plot: Rect, frame: &ChartFrame, scales: &Scales) {
    // y axis: max count at the top of the gutter, zero at the bottom.
    let max_count = frame.histogram.max_count();
    let top_label = format!("{max_count:>6}");
    let zero_label = format!("{:>6}", 0);
    buf.set_string(area.x, plot.y, &top_label, theme::muted());
    buf.set_string(
        area.x,
        plot.y + plot.height.saturating_sub(1),
        &zero_label,
        theme::muted(),
    );

    // x axis: five evenly spaced domain ticks on the bottom row.
    let (min, max) = (frame.params.min, frame.params.max);
    let tick_row = area.y + area.height - 1;
    for i in 0..=4u32 {
        let value = min + (max - min) * f64::from(i) / 4.0;
        let label = crate::app::format_num(value);
        let col = scales.x_histogram.map(value).round().clamp(0.0, plot.width as f64 - 1.0);
        let mut start = plot.x + col as u16;
        // Right-align the last tick so it stays inside the panel.
        if start + label.len() as u16 > area.right() {
            start = area.right().saturating_sub(label.len() as u16);
        }
        buf.set_string(start, tick_row, &label, theme::muted());
    }
}

fn draw_anchors(buf: &mut Buffer, plot: Rect, app: &AppState) {
    let dragging = |anchor: Anchor| {
        app.drag
            .map(|session| session.anchor == anchor)
            .unwrap_or(false)
    };

    for (anchor, (col, row)) in anchor_positions(&app.frame.params, plot) {
        let (glyph, color) = match anchor {
            Anchor::Mean => ("◆ μ", theme::CURVE),
            Anchor::StdDev => ("◆ σ", theme::ACCENT),
        };
        let style = theme::anchor(color, dragging(anchor));
        let start = col.min(plot.right().saturating_sub(glyph.chars().count() as u16));
        buf.set_string(start, row, glyph, style);
    }
}
