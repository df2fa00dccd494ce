// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

//! Classification of a price batch against the daily window.
//!
//! Price batches rarely align with the configured window: a forecast may
//! begin mid-window or end before the window closes. Those partial spans
//! must be kept apart from genuinely outside samples because callers want
//! different fallback behavior for "never scheduled" and "structurally
//! outside the window".

use serde::{Deserialize, Serialize};
use voltplan_types::Window;

/// Classification of a sample relative to the window and batch boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Structurally outside the daily window
    Outside,

    /// Inside a window occurrence the batch fully covers
    Inside,

    /// The window opened before the batch began
    StartMissing,

    /// The batch ends before the window closes
    EndMissing,
}

/// Maximal contiguous span of samples sharing one state.
///
/// `start` and `end` are inclusive indices into the sample sequence.
/// The runs returned by [`segment`] partition the batch: ascending,
/// no gaps, no overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub state: RunState,
    pub start: usize,
    pub end: usize,
}

impl Run {
    /// Number of samples the run covers; a run is never empty.
    pub fn interval_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Split a batch into runs against the daily window.
///
/// `hours` holds the hour-of-day of each sample, already converted to the
/// planning timezone. Transitions are evaluated only when the hour changes
/// from the previous sample, so sub-hourly samples inherit the current
/// state without re-evaluation.
///
/// A run closes at the transition into the `to` hour and opens at the
/// transition into the `from` hour. A still-open inside run at the end of
/// the batch is kept only if the batch reached the last in-window hour;
/// otherwise the whole trailing run is relabeled [`RunState::EndMissing`].
pub fn segment(hours: &[u32], window: &Window) -> Vec<Run> {
    if hours.is_empty() {
        return Vec::new();
    }
    if window.is_full_day() {
        return segment_full_day(hours, window);
    }

    // Before any sample is seen: a wrapped window already started on the
    // previous day, so its start boundary is missing from the batch.
    let mut state = if window.from_hour < window.effective_to_hour() {
        RunState::Outside
    } else {
        RunState::StartMissing
    };
    let mut runs = Vec::new();
    let mut run_start = 0usize;
    let mut prev_hour: Option<u32> = None;

    for (i, &hour) in hours.iter().enumerate() {
        if prev_hour == Some(hour) {
            continue;
        }
        if hour == window.to_hour && state != RunState::Outside {
            if i > run_start {
                runs.push(Run {
                    state,
                    start: run_start,
                    end: i - 1,
                });
                run_start = i;
            }
            state = RunState::Outside;
        }
        if hour == window.from_hour && state != RunState::Inside {
            if i > run_start {
                runs.push(Run {
                    state,
                    start: run_start,
                    end: i - 1,
                });
                run_start = i;
            }
            state = RunState::Inside;
        }
        prev_hour = Some(hour);
    }

    let last = hours.len() - 1;
    let trailing_state = match state {
        RunState::Inside if hours[last] != window.closing_hour() => RunState::EndMissing,
        RunState::Inside | RunState::Outside | RunState::StartMissing | RunState::EndMissing => {
            state
        }
    };
    runs.push(Run {
        state: trailing_state,
        start: run_start,
        end: last,
    });
    runs
}

/// Equal window bounds mean a full 24-hour window: every sample is inside,
/// and runs split at each recurrence of the `from` hour.
fn segment_full_day(hours: &[u32], window: &Window) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut run_start = 0usize;
    let mut prev_hour = hours[0];

    for (i, &hour) in hours.iter().enumerate().skip(1) {
        if hour != prev_hour {
            if hour == window.from_hour {
                runs.push(Run {
                    state: RunState::Inside,
                    start: run_start,
                    end: i - 1,
                });
                run_start = i;
            }
            prev_hour = hour;
        }
    }
    runs.push(Run {
        state: RunState::Inside,
        start: run_start,
        end: hours.len() - 1,
    });
    runs
}
