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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! API boundary for the fill calculation engine.
//!
//! Requests arrive as plain numbers, are checked against the reference
//! tables, and leave as serializable responses. Errors carry the name of the
//! field the user has to correct.

mod config;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, EngineConfig, PolicyConfig};
pub use error::{ApiError, translate_core_error, translate_domain_error, with_field};
pub use handlers::{
    conduit_headroom, evaluate_conduit_fill, evaluate_trunking_fill, get_tables,
    trunking_headroom,
};
pub use request_response::{
    CableFactorInfo, CableInput, ConductorInput, ConduitFactorInfo, ConduitFillRequest,
    ConduitHeadroomRequest, FillResponse, HeadroomResponse, TablesResponse, TrunkingFillRequest,
    TrunkingHeadroomRequest, TrunkingSizeInfo,
};
