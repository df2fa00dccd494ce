// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use voltplan_types::{PlanConfig, Window};

/// TOML configuration file for the planner binary
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Timezone in which the daily window is evaluated
    #[serde(default = "default_timezone")]
    pub timezone: String,

    pub window: WindowConfig,
    pub plan: PlanSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub from_hour: u32,
    pub to_hour: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanSection {
    /// Hours to switch on inside each window occurrence
    pub on_hours: u32,

    /// Require one consecutive block instead of the cheapest intervals
    #[serde(default)]
    pub contiguous: bool,

    /// Optional maximum acceptable price
    #[serde(default)]
    pub max_price: Option<f64>,

    /// Output for samples outside the window
    #[serde(default)]
    pub output_outside_window: bool,

    /// Output for samples in a partially covered window
    #[serde(default)]
    pub output_if_incomplete: bool,
}

fn default_timezone() -> String {
    "UTC".to_owned()
}

impl AppConfig {
    /// Load and parse the configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Convert into the planner's config, resolving the timezone name.
    /// Window and duration bounds are checked by the planner itself.
    pub fn to_plan_config(&self) -> Result<PlanConfig> {
        let timezone = Tz::from_str(&self.timezone)
            .map_err(|e| anyhow::anyhow!("Unknown timezone '{}': {e}", self.timezone))?;
        Ok(PlanConfig {
            window: Window::new(self.window.from_hour, self.window.to_hour),
            on_hours: self.plan.on_hours,
            contiguous: self.plan.contiguous,
            max_price: self.plan.max_price,
            outside_window_value: self.plan.output_outside_window,
            incomplete_window_value: self.plan.output_if_incomplete,
            timezone,
        })
    }
}
