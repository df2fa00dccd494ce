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

/// Selects the single block of exactly `intervals_on` consecutive
/// intervals with the minimal price sum. Ties go to the earliest start.
#[derive(Debug, Clone, Copy)]
pub struct ContiguousBlock;

impl SelectionStrategy for ContiguousBlock {
    fn name(&self) -> &'static str {
        "contiguous-block"
    }

    fn select(&self, prices: &[f64], intervals_on: usize) -> Vec<bool> {
        let mut mask = vec![false; prices.len()];
        let count = intervals_on.min(prices.len());
        if count == 0 {
            return mask;
        }

        // Sliding window over the run; strict `<` keeps the earliest start
        // on equal sums.
        let mut sum: f64 = prices[..count].iter().sum();
        let mut best_sum = sum;
        let mut best_start = 0;
        for start in 1..=(prices.len() - count) {
            sum += prices[start + count - 1] - prices[start - 1];
            if sum < best_sum {
                best_sum = sum;
                best_start = start;
            }
        }

        for slot in &mut mask[best_start..best_start + count] {
            *slot = true;
        }
        mask
    }

    /// A contiguous commitment is only honored if affordable on average:
    /// when the mean price of the selected block exceeds the cap, the
    /// whole block is flipped off.
    fn apply_price_cap(&self, mask: &mut [bool], prices: &[f64], max_price: f64) {
        let selected: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect();
        if selected.is_empty() {
            return;
        }

        let mean = selected.iter().map(|&i| prices[i]).sum::<f64>() / selected.len() as f64;
        if mean > max_price {
            for &i in &selected {
                mask[i] = false;
            }
        }
    }
}
