// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

use super::SelectionStrategy;

/// Selects the `intervals_on` cheapest intervals regardless of position.
/// Ties break toward the earliest index, so selection is stable.
#[derive(Debug, Clone, Copy)]
pub struct CheapestIntervals;

impl SelectionStrategy for CheapestIntervals {
    fn name(&self) -> &'static str {
        "cheapest-intervals"
    }

    fn select(&self, prices: &[f64], intervals_on: usize) -> Vec<bool> {
        let mut mask = vec![false; prices.len()];
        let count = intervals_on.min(prices.len());

        let mut order: Vec<usize> = (0..prices.len()).collect();
        order.sort_by(|&a, &b| prices[a].total_cmp(&prices[b]).then(a.cmp(&b)));
        for &i in &order[..count] {
            mask[i] = true;
        }
        mask
    }

    /// Entries are independent, so each selected interval is judged on its
    /// own price.
    fn apply_price_cap(&self, mask: &mut [bool], prices: &[f64], max_price: f64) {
        for (slot, &price) in mask.iter_mut().zip(prices) {
            if *slot && price > max_price {
                *slot = false;
            }
        }
    }
}
