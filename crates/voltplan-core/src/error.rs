// Copyright (c) 2026 VoltPlan Developers
//
// This file is part of VoltPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.

//! Error types for the planning core

use thiserror::Error;

/// Structural failures of one planning call. Everything else (window
/// never matched, run shorter than the on-duration, batch entirely
/// outside the window) is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no price samples supplied")]
    EmptyInput,

    #[error("price samples not strictly increasing at index {index}")]
    UnsortedInput { index: usize },
}

pub type Result<T> = std::result::Result<T, PlanError>;
