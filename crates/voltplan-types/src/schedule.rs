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

/// One planned interval: the input sample paired with its on/off decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Start of the interval
    pub start: DateTime<Utc>,

    /// Price for the interval (currency per kWh)
    pub price: f64,

    /// Whether the load should be on during this interval
    pub on: bool,
}

/// A switch command: the state to hold from `time` until the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchEvent {
    pub time: DateTime<Utc>,
    pub on: bool,
}

/// Generated on/off plan for one price batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Interval-by-interval decisions, aligned with the input samples
    pub entries: Vec<PlanEntry>,

    /// Duration of one interval in minutes (15, 30 or 60)
    pub block_minutes: u32,

    /// When this plan was generated
    pub generated_at: DateTime<Utc>,
}

impl Plan {
    /// Switch events: the first entry plus every on/off change.
    pub fn events(&self) -> Vec<SwitchEvent> {
        let mut events = Vec::new();
        for entry in &self.entries {
            if events.last().map(|e: &SwitchEvent| e.on) != Some(entry.on) {
                events.push(SwitchEvent {
                    time: entry.start,
                    on: entry.on,
                });
            }
        }
        events
    }

    /// Get the planned state at a specific time
    pub fn state_at(&self, time: DateTime<Utc>) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| {
                let end = entry.start + chrono::Duration::minutes(self.block_minutes as i64);
                time >= entry.start && time < end
            })
            .map(|entry| entry.on)
    }

    /// Number of intervals switched on
    pub fn count_on(&self) -> usize {
        self.entries.iter().filter(|e| e.on).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn plan_of(bits: &[bool]) -> Plan {
        let entries = bits
            .iter()
            .enumerate()
            .map(|(i, &on)| PlanEntry {
                start: Utc.with_ymd_and_hms(2021, 10, 11, i as u32, 0, 0).unwrap(),
                price: 1.0,
                on,
            })
            .collect();
        Plan {
            entries,
            block_minutes: 60,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn events_emit_first_state_and_changes_only() {
        let plan = plan_of(&[false, false, true, true, false]);
        let events = plan.events();
        assert_eq!(events.len(), 3);
        assert!(!events[0].on);
        assert!(events[1].on);
        assert_eq!(events[1].time.hour(), 2);
        assert!(!events[2].on);
        assert_eq!(events[2].time.hour(), 4);
    }

    #[test]
    fn state_at_respects_block_bounds() {
        let plan = plan_of(&[false, true]);
        let inside = Utc.with_ymd_and_hms(2021, 10, 11, 1, 30, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2021, 10, 11, 2, 0, 0).unwrap();
        assert_eq!(plan.state_at(inside), Some(true));
        assert_eq!(plan.state_at(after), None);
    }

    #[test]
    fn count_on_counts_true_entries() {
        assert_eq!(plan_of(&[true, false, true]).count_on(), 2);
    }
}
