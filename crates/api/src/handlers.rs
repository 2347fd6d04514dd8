// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler translates a request into domain values, runs the
//! calculation, and translates the result or error back out. Errors that
//! concern one entry of a list name that entry, e.g. `conductors[1].size_mm2`.

use crate::config::EngineConfig;
use crate::error::{ApiError, translate_core_error, translate_domain_error, with_field};
use crate::request_response::{
    CableFactorInfo, CableInput, ConductorInput, ConduitFactorInfo, ConduitFillRequest,
    ConduitHeadroomRequest, FillResponse, HeadroomResponse, TablesResponse, TrunkingFillRequest,
    TrunkingHeadroomRequest, TrunkingSizeInfo,
};
use cablefill::{
    calculate_conduit_fill, calculate_trunking_fill, conduit_headroom as core_conduit_headroom,
    recommend_conduit_size, trunking_headroom as core_trunking_headroom,
};
use cablefill_domain::{
    CableEntry, ConductorEntry, ConductorSize, ConduitSpec, FillResult, ReferenceTables,
    TrunkingSpec,
};

/// Lists the reference tables the engine is using.
#[must_use]
pub fn get_tables(engine: &EngineConfig) -> TablesResponse {
    let tables: &ReferenceTables = &engine.tables;

    let cable_factors: Vec<CableFactorInfo> = tables
        .conductor_sizes()
        .map(|(size, factor)| CableFactorInfo {
            size_mm2: size.mm2(),
            factor,
        })
        .collect();

    let conduit_factors: Vec<ConduitFactorInfo> = tables
        .conduit_diameters()
        .map(|(diameter_mm, factors)| ConduitFactorInfo {
            diameter_mm,
            straight: factors.straight,
            with_bends: factors.with_bends,
        })
        .collect();

    let trunking_sizes: Vec<TrunkingSizeInfo> = tables
        .trunking_sizes()
        .map(|spec| TrunkingSizeInfo {
            width_mm: spec.width_mm,
            height_mm: spec.height_mm,
            area_limit_mm2: spec.internal_area_mm2() * tables.trunking_fill_limit(),
        })
        .collect();

    TablesResponse {
        edition: tables.edition().to_string(),
        cable_factors,
        conduit_factors,
        trunking_sizes,
        trunking_fill_limit: tables.trunking_fill_limit(),
    }
}

/// Checks a conduit run with the cable factor method.
///
/// When the run fails, the response also carries the smallest tabulated
/// conduit that would pass with the same bends and length, if there is one.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed input and `UnsupportedSize` for a
/// conductor size or conduit diameter with no tabulated factor.
pub fn evaluate_conduit_fill(
    engine: &EngineConfig,
    request: &ConduitFillRequest,
) -> Result<FillResponse, ApiError> {
    let conductors: Vec<ConductorEntry> = parse_conductors(engine, &request.conductors)?;
    let conduit: ConduitSpec = conduit_spec(request);

    let result: FillResult =
        calculate_conduit_fill(&conductors, &conduit, &engine.tables, &engine.policy)
            .map_err(translate_core_error)?;

    let recommended_diameter_mm: Option<u16> = if result.is_pass() {
        None
    } else {
        recommend_conduit_size(
            &conductors,
            conduit.bend_count,
            conduit.run_length_m,
            &engine.tables,
            &engine.policy,
        )
        .map_err(translate_core_error)?
    };

    tracing::debug!(
        diameter_mm = conduit.diameter_mm,
        bend_count = conduit.bend_count,
        total_demand = result.total_demand,
        capacity = result.capacity,
        status = result.status.as_str(),
        "Evaluated conduit fill"
    );

    let message: String = match (result.is_pass(), recommended_diameter_mm) {
        (true, _) => format!(
            "{}mm conduit is {:.1}% full",
            conduit.diameter_mm,
            result.fill_percentage()
        ),
        (false, Some(diameter_mm)) => format!(
            "{}mm conduit is overfilled at {:.1}%; use {diameter_mm}mm conduit",
            conduit.diameter_mm,
            result.fill_percentage()
        ),
        (false, None) => format!(
            "{}mm conduit is overfilled at {:.1}%; no tabulated conduit is large enough, split the run",
            conduit.diameter_mm,
            result.fill_percentage()
        ),
    };

    Ok(fill_response(&result, recommended_diameter_mm, message))
}

/// Checks a trunking run against the 45% space factor.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed input and `UnsupportedSize` for a
/// trunking size that is not tabulated.
pub fn evaluate_trunking_fill(
    engine: &EngineConfig,
    request: &TrunkingFillRequest,
) -> Result<FillResponse, ApiError> {
    let cables: Vec<CableEntry> = parse_cables(&request.cables);
    let trunking: TrunkingSpec = TrunkingSpec::new(request.width_mm, request.height_mm);

    let result: FillResult = calculate_trunking_fill(&cables, &trunking, &engine.tables)
        .map_err(translate_core_error)?;

    tracing::debug!(
        width_mm = trunking.width_mm,
        height_mm = trunking.height_mm,
        total_demand = result.total_demand,
        capacity = result.capacity,
        status = result.status.as_str(),
        "Evaluated trunking fill"
    );

    let message: String = if result.is_pass() {
        format!(
            "{}mm x {}mm trunking is {:.1}% of its permitted fill",
            trunking.width_mm,
            trunking.height_mm,
            result.fill_percentage()
        )
    } else {
        format!(
            "{}mm x {}mm trunking is overfilled at {:.1}% of its permitted fill",
            trunking.width_mm,
            trunking.height_mm,
            result.fill_percentage()
        )
    };

    Ok(fill_response(&result, None, message))
}

/// How many more conductors of one size a conduit run can take.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed input and `UnsupportedSize` for a
/// size or diameter with no tabulated factor.
pub fn conduit_headroom(
    engine: &EngineConfig,
    request: &ConduitHeadroomRequest,
) -> Result<HeadroomResponse, ApiError> {
    let existing: Vec<ConductorEntry> = parse_conductors(engine, &request.run.conductors)?;
    let conduit: ConduitSpec = conduit_spec(&request.run);
    let candidate: ConductorSize = parse_size(
        engine,
        request.candidate_size_mm2,
        String::from("candidate_size_mm2"),
    )?;

    let additional: u32 =
        core_conduit_headroom(&existing, &conduit, candidate, &engine.tables, &engine.policy)
            .map_err(translate_core_error)?;

    Ok(HeadroomResponse {
        additional,
        message: format!(
            "{additional} more {candidate} conductors fit in {}mm conduit",
            conduit.diameter_mm
        ),
    })
}

/// How many more cables of one diameter a trunking run can take.
///
/// # Errors
///
/// Returns `InvalidInput` for malformed input and `UnsupportedSize` for a
/// trunking size that is not tabulated.
pub fn trunking_headroom(
    engine: &EngineConfig,
    request: &TrunkingHeadroomRequest,
) -> Result<HeadroomResponse, ApiError> {
    let existing: Vec<CableEntry> = parse_cables(&request.run.cables);
    let trunking: TrunkingSpec = TrunkingSpec::new(request.run.width_mm, request.run.height_mm);

    let additional: u32 = core_trunking_headroom(
        &existing,
        &trunking,
        request.candidate_diameter_mm,
        &engine.tables,
    )
    .map_err(translate_core_error)?;

    Ok(HeadroomResponse {
        additional,
        message: format!(
            "{additional} more {}mm cables fit in {}mm x {}mm trunking",
            request.candidate_diameter_mm, trunking.width_mm, trunking.height_mm
        ),
    })
}

fn conduit_spec(request: &ConduitFillRequest) -> ConduitSpec {
    ConduitSpec {
        diameter_mm: request.diameter_mm,
        bend_count: request.bend_count,
        run_length_m: request.run_length_m,
    }
}

/// Converts conductor inputs, checking each size against the cable factor table.
fn parse_conductors(
    engine: &EngineConfig,
    inputs: &[ConductorInput],
) -> Result<Vec<ConductorEntry>, ApiError> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let size: ConductorSize = parse_size(
                engine,
                input.size_mm2,
                format!("conductors[{index}].size_mm2"),
            )?;
            Ok(ConductorEntry::new(size, input.count))
        })
        .collect()
}

fn parse_size(
    engine: &EngineConfig,
    size_mm2: f64,
    field: String,
) -> Result<ConductorSize, ApiError> {
    let size: ConductorSize = ConductorSize::from_mm2(size_mm2)
        .map_err(|err| with_field(translate_domain_error(err), field.clone()))?;
    engine
        .tables
        .cable_factor(size)
        .map_err(|err| with_field(translate_domain_error(err), field))?;
    Ok(size)
}

fn parse_cables(inputs: &[CableInput]) -> Vec<CableEntry> {
    inputs
        .iter()
        .map(|input| CableEntry::new(input.overall_diameter_mm, input.count))
        .collect()
}

fn fill_response(
    result: &FillResult,
    recommended_diameter_mm: Option<u16>,
    message: String,
) -> FillResponse {
    FillResponse {
        total_demand: result.total_demand,
        capacity: result.capacity,
        fill_ratio: result.fill_ratio,
        fill_percentage: result.fill_percentage(),
        status: result.status.as_str().to_string(),
        run_difficulty: result
            .run_difficulty
            .map(|difficulty| difficulty.as_str().to_string()),
        recommend_draw_in_box: result.recommend_draw_in_box,
        advisories: result.advisories.iter().map(ToString::to_string).collect(),
        recommended_diameter_mm,
        message,
    }
}
