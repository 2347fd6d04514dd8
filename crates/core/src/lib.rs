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

//! Conduit and trunking fill calculations.
//!
//! Every function here is pure: the reference tables and policy are passed
//! in by reference and nothing is cached, so calls may run concurrently.

mod calculator;
mod error;
mod policy;
mod sizing;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use calculator::{FillLoad, calculate_conduit_fill, calculate_fill, calculate_trunking_fill};
pub use error::CoreError;
pub use policy::{BendPolicy, CapacityAdjustment, MAX_BENDS_BETWEEN_DRAW_IN_POINTS, SingleBendRule};
pub use sizing::{conduit_headroom, recommend_conduit_size, trunking_headroom};
