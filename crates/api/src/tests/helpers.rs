// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{CableInput, ConductorInput, ConduitFillRequest, EngineConfig, TrunkingFillRequest};

pub fn create_test_engine() -> EngineConfig {
    EngineConfig::default()
}

pub fn conductor_input(size_mm2: f64, count: u32) -> ConductorInput {
    ConductorInput { size_mm2, count }
}

pub fn cable_input(overall_diameter_mm: f64, count: u32) -> CableInput {
    CableInput {
        overall_diameter_mm,
        count,
    }
}

pub fn create_conduit_request(
    conductors: Vec<ConductorInput>,
    diameter_mm: u16,
    bend_count: u8,
) -> ConduitFillRequest {
    ConduitFillRequest {
        conductors,
        diameter_mm,
        bend_count,
        run_length_m: None,
    }
}

pub fn create_trunking_request(
    cables: Vec<CableInput>,
    width_mm: u16,
    height_mm: u16,
) -> TrunkingFillRequest {
    TrunkingFillRequest {
        cables,
        width_mm,
        height_mm,
    }
}
