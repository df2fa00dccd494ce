// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

//! The planning entry point: one call, one batch, one config snapshot.

use chrono::{Timelike, Utc};
use tracing::debug;
use voltplan_types::{Plan, PlanConfig, PlanEntry, PriceSample};

use crate::compose::compose;
use crate::error::{PlanError, Result};
use crate::granularity::intervals_per_hour;
use crate::segment::{RunState, segment};
use crate::strategy::strategy_for;

/// Compute the on/off decision for every sample in the batch.
///
/// The mask is always the same length as `samples`. Inside-window runs get
/// the cost-optimal selection for the configured strategy, tightened by
/// the price cap when one is set; outside and boundary-incomplete runs get
/// the configured fallback values.
pub fn plan(samples: &[PriceSample], config: &PlanConfig) -> Result<Vec<bool>> {
    validate_config(config)?;
    if samples.is_empty() {
        return Err(PlanError::EmptyInput);
    }
    if let Some(index) = first_unsorted_index(samples) {
        return Err(PlanError::UnsortedInput { index });
    }

    let hours: Vec<u32> = samples
        .iter()
        .map(|s| s.start.with_timezone(&config.timezone).hour())
        .collect();
    let runs = segment(&hours, &config.window);
    let per_hour = intervals_per_hour(samples);
    let intervals_on = (config.on_hours * per_hour) as usize;
    let strategy = strategy_for(config.contiguous);

    debug!(
        "segmented {} samples into {} runs, {} intervals/hour, {} intervals on per window",
        samples.len(),
        runs.len(),
        per_hour,
        intervals_on
    );

    let mut inside_masks = Vec::new();
    for run in runs.iter().filter(|r| r.state == RunState::Inside) {
        let prices: Vec<f64> = samples[run.start..=run.end].iter().map(|s| s.price).collect();
        let mut mask = strategy.select(&prices, intervals_on);
        if let Some(max_price) = config.max_price {
            strategy.apply_price_cap(&mut mask, &prices, max_price);
        }
        debug!(
            "run {}..={} via {}: {} of {} intervals on",
            run.start,
            run.end,
            strategy.name(),
            mask.iter().filter(|&&on| on).count(),
            prices.len()
        );
        inside_masks.push((run.start, mask));
    }

    Ok(compose(samples.len(), &runs, config, &inside_masks))
}

/// Like [`plan`], but pairs every decision bit with its sample to produce
/// a [`Plan`] the caller can publish downstream.
pub fn plan_schedule(samples: &[PriceSample], config: &PlanConfig) -> Result<Plan> {
    let mask = plan(samples, config)?;
    let entries = samples
        .iter()
        .zip(&mask)
        .map(|(sample, &on)| PlanEntry {
            start: sample.start,
            price: sample.price,
            on,
        })
        .collect();
    Ok(Plan {
        entries,
        block_minutes: 60 / intervals_per_hour(samples),
        generated_at: Utc::now(),
    })
}

fn validate_config(config: &PlanConfig) -> Result<()> {
    let window = config.window;
    if window.from_hour > 23 || window.to_hour > 23 {
        return Err(PlanError::InvalidConfig(format!(
            "window hours must be 0-23, got {}-{}",
            window.from_hour, window.to_hour
        )));
    }
    if config.on_hours == 0 || config.on_hours > 24 {
        return Err(PlanError::InvalidConfig(format!(
            "on_hours must be 1-24, got {}",
            config.on_hours
        )));
    }
    if let Some(max_price) = config.max_price {
        if max_price < 0.0 {
            return Err(PlanError::InvalidConfig(format!(
                "max_price must not be negative, got {max_price}"
            )));
        }
    }
    Ok(())
}

fn first_unsorted_index(samples: &[PriceSample]) -> Option<usize> {
    samples
        .windows(2)
        .position(|pair| pair[1].start <= pair[0].start)
        .map(|i| i + 1)
}
