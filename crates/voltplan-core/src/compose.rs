// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

use voltplan_types::PlanConfig;

use crate::segment::{Run, RunState};

/// Merge per-run selection masks with the configured fallback values into
/// the final per-sample on/off sequence.
///
/// `inside_masks` pairs the start index of each inside run with its mask,
/// in run order. Outside runs get `outside_window_value`; runs with a
/// missing boundary get `incomplete_window_value`. Every sample ends up
/// assigned because the runs partition the batch.
pub fn compose(
    len: usize,
    runs: &[Run],
    config: &PlanConfig,
    inside_masks: &[(usize, Vec<bool>)],
) -> Vec<bool> {
    let mut output = vec![false; len];
    for run in runs {
        let fallback = match run.state {
            RunState::Outside => Some(config.outside_window_value),
            RunState::StartMissing | RunState::EndMissing => {
                Some(config.incomplete_window_value)
            }
            RunState::Inside => None,
        };
        if let Some(value) = fallback {
            for slot in &mut output[run.start..=run.end] {
                *slot = value;
            }
        }
    }
    for (start, mask) in inside_masks {
        for (offset, &on) in mask.iter().enumerate() {
            output[start + offset] = on;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_and_masks_cover_every_sample() {
        let runs = vec![
            Run {
                state: RunState::StartMissing,
                start: 0,
                end: 1,
            },
            Run {
                state: RunState::Outside,
                start: 2,
                end: 3,
            },
            Run {
                state: RunState::Inside,
                start: 4,
                end: 6,
            },
        ];
        let config = PlanConfig {
            outside_window_value: false,
            incomplete_window_value: true,
            ..PlanConfig::default()
        };
        let output = compose(7, &runs, &config, &[(4, vec![false, true, false])]);
        assert_eq!(
            output,
            vec![true, true, false, false, false, true, false]
        );
    }
}
