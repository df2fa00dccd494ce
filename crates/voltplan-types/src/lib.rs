// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

pub mod config;
pub mod pricing;
pub mod schedule;

// Re-export common types for convenience
pub use config::{PlanConfig, Window};
pub use pricing::PriceSample;
pub use schedule::{Plan, PlanEntry, SwitchEvent};
