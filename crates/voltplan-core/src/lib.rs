// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

//! Decision engine for a price-responsive on/off controller.
//!
//! Given a batch of time-stamped price observations and a [`PlanConfig`],
//! the planner decides which intervals to switch on so that a fixed
//! on-duration is satisfied inside a daily hour-of-day window at minimal
//! cost. The computation is synchronous and stateless; one call consumes
//! one batch and one config snapshot.

pub mod compose;
pub mod error;
pub mod granularity;
pub mod planner;
pub mod segment;
pub mod strategy;

pub use error::{PlanError, Result};
pub use granularity::intervals_per_hour;
pub use planner::{plan, plan_schedule};
pub use segment::{Run, RunState, segment};
pub use strategy::{CheapestIntervals, ContiguousBlock, SelectionStrategy, strategy_for};

pub use voltplan_types::{Plan, PlanConfig, PlanEntry, PriceSample, SwitchEvent, Window};
