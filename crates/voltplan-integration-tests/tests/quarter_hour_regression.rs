// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

//! Regression suite for 15-minute price batches: four intervals per hour
//! must scale the on-duration and stay inside the window slice.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use voltplan_core::plan;
use voltplan_types::{PlanConfig, PriceSample, Window};

fn quarter_hour_batch(start: DateTime<Utc>, prices: &[f64]) -> Vec<PriceSample> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PriceSample::new(start + Duration::minutes(15 * i as i64), price))
        .collect()
}

#[test]
fn two_hours_on_become_eight_quarter_hour_intervals() {
    // 09:00 through 13:45, window 10-12: the plannable slice holds exactly
    // eight intervals, so all of them go on.
    let start = Utc.with_ymd_and_hms(2021, 10, 11, 9, 0, 0).unwrap();
    let prices = [
        0.5, 0.4, 0.3, 0.2, 0.6, 0.7, 0.1, 0.8, 0.9, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65, 0.75,
        0.85, 0.95, 0.05, 0.95,
    ];
    let samples = quarter_hour_batch(start, &prices);
    let config = PlanConfig {
        window: Window::new(10, 12),
        on_hours: 2,
        ..PlanConfig::default()
    };

    let mask = plan(&samples, &config).unwrap();
    assert_eq!(mask.len(), 20);
    assert_eq!(mask.iter().filter(|&&on| on).count(), 8);
    for (sample, &on) in samples.iter().zip(&mask) {
        if on {
            assert!(matches!(sample.start.hour(), 10 | 11));
        }
    }
}

#[test]
fn one_hour_on_picks_the_four_cheapest_quarter_hours() {
    // 12:00 through 17:45, window 14-16, one hour on
    let start = Utc.with_ymd_and_hms(2021, 10, 11, 12, 0, 0).unwrap();
    let prices = [
        0.5, 0.4, 0.3, 0.2, 0.6, 0.7, 0.1, 0.8, 0.9, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65, 0.75,
        0.85, 0.95, 0.05, 0.95, 0.12, 0.23, 0.34, 0.45,
    ];
    let samples = quarter_hour_batch(start, &prices);
    let config = PlanConfig {
        window: Window::new(14, 16),
        on_hours: 1,
        ..PlanConfig::default()
    };

    let mask = plan(&samples, &config).unwrap();
    assert_eq!(mask.iter().filter(|&&on| on).count(), 4);

    // The window slice is 14:00-15:45 (indexes 8..=15); every on interval
    // must be among its four cheapest prices.
    let mut slice: Vec<(f64, usize)> = (8..=15).map(|i| (prices[i], i)).collect();
    slice.sort_by(|a, b| a.0.total_cmp(&b.0));
    let cheapest: Vec<usize> = slice.iter().take(4).map(|&(_, i)| i).collect();
    for (i, &on) in mask.iter().enumerate() {
        assert_eq!(on, cheapest.contains(&i), "interval {i}");
    }
}

#[test]
fn contiguous_block_spans_hour_boundaries_at_quarter_resolution() {
    // One hour contiguous inside 10-12 must pick four consecutive
    // intervals, allowed to straddle 10:45/11:00.
    let start = Utc.with_ymd_and_hms(2021, 10, 11, 10, 0, 0).unwrap();
    let prices = [0.9, 0.8, 0.2, 0.1, 0.1, 0.2, 0.8, 0.9];
    let samples = quarter_hour_batch(start, &prices);
    let config = PlanConfig {
        window: Window::new(10, 12),
        on_hours: 1,
        contiguous: true,
        ..PlanConfig::default()
    };

    let mask = plan(&samples, &config).unwrap();
    assert_eq!(
        mask,
        vec![false, false, true, true, true, true, false, false]
    );
}

#[test]
fn truncated_quarter_hour_window_falls_back() {
    // Batch ends at 10:45 inside a 10-12 window: the trailing run has no
    // end boundary, so the incomplete fallback drives the output.
    let start = Utc.with_ymd_and_hms(2021, 10, 11, 9, 0, 0).unwrap();
    let prices = [0.5, 0.4, 0.3, 0.2, 0.6, 0.7, 0.1, 0.8];
    let samples = quarter_hour_batch(start, &prices);
    let config = PlanConfig {
        window: Window::new(10, 12),
        on_hours: 1,
        incomplete_window_value: true,
        ..PlanConfig::default()
    };

    let mask = plan(&samples, &config).unwrap();
    assert_eq!(
        mask,
        vec![false, false, false, false, true, true, true, true]
    );
}
