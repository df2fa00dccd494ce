// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One price observation from an upstream forecast.
///
/// A batch of samples is expected to be strictly increasing in `start`
/// with uniform nominal spacing (15, 30 or 60 minutes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Start of the interval this price applies to
    pub start: DateTime<Utc>,

    /// Price for the interval (currency per kWh)
    pub price: f64,
}

impl PriceSample {
    pub fn new(start: DateTime<Utc>, price: f64) -> Self {
        Self { start, price }
    }
}
