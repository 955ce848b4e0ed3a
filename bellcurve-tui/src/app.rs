//! Application state — single-owner, main-thread only.
//!
//! `AppState` holds the one authoritative `DistributionParams`. The engine
//! receives a value snapshot per recompute and never mutates it; updates
//! come back through the controls (field commits) and the drag handlers,
//! each applied atomically before the next recompute reads them.

use std::collections::VecDeque;

use chrono::NaiveDateTime;
use ratatui::layout::Rect;

use bellcurve_core::{ChartConfig, ChartFrame, DistributionParams, ParamError, SeedPlan};

/// Which numeric control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Min,
    Max,
    Mean,
    StdDev,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Min, Field::Max, Field::Mean, Field::StdDev];

    pub fn index(self) -> usize {
        match self {
            Field::Min => 0,
            Field::Max => 1,
            Field::Mean => 2,
            Field::StdDev => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Min => "min",
            Field::Max => "max",
            Field::Mean => "mean",
            Field::StdDev => "std",
        }
    }

    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % 4]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + 3) % 4]
    }
}

/// Which anchor a live drag is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Mean,
    StdDev,
}

/// Ephemeral drag state, held only while the pointer button is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub anchor: Anchor,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One entry of the bounded status history.
#[derive(Debug, Clone)]
pub struct StatusRecord {
    pub timestamp: NaiveDateTime,
    pub level: StatusLevel,
    pub message: String,
}

const STATUS_HISTORY_CAP: usize = 50;

pub struct AppState {
    /// Single source of truth for the distribution.
    pub params: DistributionParams,
    pub config: ChartConfig,
    pub seed_plan: SeedPlan,
    /// Bumped on every recompute so each redraw draws fresh samples.
    pub generation: u64,
    /// Snapshot the chart currently shows.
    pub frame: ChartFrame,

    pub focus: Field,
    /// Text being typed into the focused field; `None` when not editing.
    pub edit_buffer: Option<String>,
    pub drag: Option<DragSession>,

    /// Plot cell area of the last draw, for mouse hit-testing.
    pub chart_plot: Rect,

    /// Most recent entry is the live status line; older entries are kept
    /// for context, capped at [`STATUS_HISTORY_CAP`].
    pub status_history: VecDeque<StatusRecord>,
    /// Degenerate variance is reported once per occurrence, not per tick.
    warned_degenerate: bool,

    pub running: bool,
}

impl AppState {
    pub fn new(params: DistributionParams, seed_plan: SeedPlan) -> Self {
        let config = ChartConfig::default();
        let frame = ChartFrame::compute(params, &config, &mut seed_plan.rng_for(0));
        let mut app = Self {
            params,
            config,
            seed_plan,
            generation: 0,
            frame,
            focus: Field::Mean,
            edit_buffer: None,
            drag: None,
            chart_plot: Rect::default(),
            status_history: VecDeque::new(),
            warned_degenerate: false,
            running: true,
        };
        app.check_degenerate();
        app
    }

    /// Current display text for a field: the edit buffer when focused and
    /// editing, otherwise the committed value.
    pub fn field_text(&self, field: Field) -> String {
        if field == self.focus {
            if let Some(buf) = &self.edit_buffer {
                return buf.clone();
            }
        }
        let v = match field {
            Field::Min => self.params.min,
            Field::Max => self.params.max,
            Field::Mean => self.params.mean,
            Field::StdDev => self.params.std_dev,
        };
        format_num(v)
    }

    /// Apply an atomic parameter update and run one full recompute.
    ///
    /// Range violations are rejected (previous params kept); a degenerate
    /// std deviation is tolerated — the engine degrades, we warn.
    pub fn apply_params(&mut self, new_params: DistributionParams) {
        if !new_params.has_valid_range() {
            let err = ParamError::InvalidDomainRange {
                min: new_params.min,
                max: new_params.max,
            };
            self.set_error(err.to_string());
            return;
        }
        self.params = new_params;
        self.regenerate();
    }

    /// Full regenerate-rebin-rebuild cycle with a fresh sub-seed.
    pub fn regenerate(&mut self) {
        self.generation += 1;
        let mut rng = self.seed_plan.rng_for(self.generation);
        self.frame = ChartFrame::compute(self.params, &self.config, &mut rng);
        self.check_degenerate();
    }

    fn check_degenerate(&mut self) {
        if self.frame.degenerate_variance {
            if !self.warned_degenerate {
                self.warned_degenerate = true;
                self.set_warning(
                    "degenerate variance: density curve is not finite, drawing bars only",
                );
            }
        } else {
            self.warned_degenerate = false;
        }
    }

    /// Commit the edit buffer into the focused field.
    pub fn commit_edit(&mut self) {
        let Some(buf) = self.edit_buffer.take() else {
            return;
        };
        let Ok(value) = buf.trim().parse::<f64>() else {
            self.set_error(format!("not a number: '{}'", buf.trim()));
            return;
        };
        let mut next = self.params;
        match self.focus {
            Field::Min => next.min = value,
            Field::Max => next.max = value,
            Field::Mean => next.mean = value,
            Field::StdDev => next.std_dev = value,
        }
        self.apply_params(next);
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.push_status(StatusLevel::Info, message.into());
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.push_status(StatusLevel::Warning, message.into());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.push_status(StatusLevel::Error, message.into());
    }

    fn push_status(&mut self, level: StatusLevel, message: String) {
        self.status_history.push_back(StatusRecord {
            timestamp: chrono::Local::now().naive_local(),
            level,
            message,
        });
        while self.status_history.len() > STATUS_HISTORY_CAP {
            self.status_history.pop_front();
        }
    }

    /// The message the status bar shows: the newest history entry.
    pub fn last_status(&self) -> Option<&StatusRecord> {
        self.status_history.back()
    }
}

/// Trim trailing zeros so "20" renders as 20, not 20.000.
pub fn format_num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e12 {
        format!("{}", v as i64)
    } else {
        format!("{v:.3}")
    }
}
