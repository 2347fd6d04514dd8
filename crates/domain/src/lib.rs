// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod tables;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use tables::{BS7671_EDITION, ConduitFactors, ReferenceTables, TRUNKING_FILL_LIMIT};

// Re-export public types
pub use types::{
    Advisory, CableEntry, ConductorEntry, ConductorSize, ConduitSpec, ContainmentSpec, FillResult,
    FillStatus, RunDifficulty, TrunkingSpec, cable_area_mm2,
};
pub use validation::{
    MAX_CABLE_DIAMETER_MM, validate_cables, validate_conductors, validate_count, validate_diameter,
    validate_run_length, validate_trunking_dimensions,
};
