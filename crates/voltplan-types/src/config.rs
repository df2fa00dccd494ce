// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Daily hour-of-day window during which scheduling is permitted.
///
/// The window is evaluated purely on hour-of-day, independent of date.
/// `from_hour > to_hour` means the window wraps past midnight;
/// `from_hour == to_hour` means the window covers all 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Hour the window opens (0-23)
    pub from_hour: u32,

    /// Hour the window closes (0-23, exclusive)
    pub to_hour: u32,
}

impl Window {
    pub fn new(from_hour: u32, to_hour: u32) -> Self {
        Self { from_hour, to_hour }
    }

    /// A window with equal bounds covers the whole day.
    pub fn is_full_day(&self) -> bool {
        self.from_hour == self.to_hour
    }

    /// The last in-window hour, i.e. the hour preceding `to_hour`.
    pub fn closing_hour(&self) -> u32 {
        (self.to_hour + 23) % 24
    }

    /// Closing bound used to decide the state before any sample is seen.
    /// `to_hour == 0` reads as 24 when the window does not start at midnight.
    pub fn effective_to_hour(&self) -> u32 {
        if self.to_hour == 0 && self.from_hour != 0 {
            24
        } else {
            self.to_hour
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        // Full-day window
        Self {
            from_hour: 0,
            to_hour: 0,
        }
    }
}

/// Configuration for one planning call. Immutable for the duration of
/// the call; callers are expected to validate it via the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    /// Daily window inside which intervals may be switched on
    pub window: Window,

    /// Hours that must be on inside each window occurrence
    pub on_hours: u32,

    /// Select one contiguous block instead of the cheapest individual intervals
    pub contiguous: bool,

    /// Maximum acceptable price; intervals above it are deselected
    pub max_price: Option<f64>,

    /// Output value for samples structurally outside the window
    pub outside_window_value: bool,

    /// Output value for samples in a window the batch only partially covers
    pub incomplete_window_value: bool,

    /// Timezone in which hour-of-day is evaluated
    pub timezone: Tz,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            window: Window::default(),
            on_hours: 1,
            contiguous: false,
            max_price: None,
            outside_window_value: false,
            incomplete_window_value: false,
            timezone: chrono_tz::UTC,
        }
    }
}
