// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

mod cheapest;
mod contiguous;

pub use cheapest::CheapestIntervals;
pub use contiguous::ContiguousBlock;

/// Cost-optimal activation selection over one inside-window run.
///
/// A strategy works purely on the numeric price slice; it carries no
/// knowledge of time-of-day beyond the slice boundaries the segmenter
/// already computed. The price cap is strategy-specific, which is why it
/// lives on the trait rather than in the planner.
pub trait SelectionStrategy: Send + Sync {
    /// Get the name of this strategy
    fn name(&self) -> &'static str;

    /// Build an activation mask with exactly `min(intervals_on, prices.len())`
    /// entries switched on.
    fn select(&self, prices: &[f64], intervals_on: usize) -> Vec<bool>;

    /// Tighten `mask` against a price cap. Never switches entries on,
    /// only off.
    fn apply_price_cap(&self, mask: &mut [bool], prices: &[f64], max_price: f64);
}

/// The two strategies form a closed set chosen by one config flag.
pub fn strategy_for(contiguous: bool) -> &'static dyn SelectionStrategy {
    if contiguous {
        &ContiguousBlock
    } else {
        &CheapestIntervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_picks_the_strategy() {
        assert_eq!(strategy_for(true).name(), "contiguous-block");
        assert_eq!(strategy_for(false).name(), "cheapest-intervals");
    }

    #[test]
    fn both_strategies_clip_to_run_length() {
        let prices = [3.0, 1.0, 2.0];
        for contiguous in [true, false] {
            let mask = strategy_for(contiguous).select(&prices, 10);
            assert!(mask.iter().all(|&on| on));
        }
    }

    #[test]
    fn zero_intervals_selects_nothing() {
        let prices = [3.0, 1.0, 2.0];
        for contiguous in [true, false] {
            let mask = strategy_for(contiguous).select(&prices, 0);
            assert!(mask.iter().all(|&on| !on));
        }
    }
}
