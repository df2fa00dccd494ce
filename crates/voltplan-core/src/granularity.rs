// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

use voltplan_types::PriceSample;

/// Infer the sampling granularity of a price batch.
///
/// The spacing between the first two samples is taken as representative
/// of the whole batch: 15 minutes maps to 4 intervals per hour, 30 to 2,
/// anything else (including a single-sample batch) to 1.
pub fn intervals_per_hour(samples: &[PriceSample]) -> u32 {
    let Some([first, second]) = samples.first_chunk::<2>() else {
        return 1;
    };
    match (second.start - first.start).num_minutes() {
        15 => 4,
        30 => 2,
        _ => 1,
    }
}
