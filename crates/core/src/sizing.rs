// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sizing questions built on the fill calculation: which conduit to use,
//! and how many more cables a run can take.

use crate::calculator::{
    calculate_conduit_fill, conduit_capacity, conduit_demand, trunking_capacity,
};
use crate::error::CoreError;
use crate::policy::{BendPolicy, CapacityAdjustment};
use cablefill_domain::{
    CableEntry, ConductorEntry, ConductorSize, ConduitSpec, FillResult, ReferenceTables,
    TrunkingSpec, cable_area_mm2, validate_cables, validate_count, validate_diameter,
};

/// Finds the smallest tabulated conduit that passes for the given conductors.
///
/// The bend count and run length are held fixed while the diameter varies.
///
/// # Returns
///
/// * `Ok(Some(diameter_mm))` for the smallest passing diameter
/// * `Ok(None)` if no tabulated conduit passes; the run has to be split
///
/// # Errors
///
/// Returns an error if the conductors are invalid or not tabulated.
pub fn recommend_conduit_size(
    conductors: &[ConductorEntry],
    bend_count: u8,
    run_length_m: Option<f64>,
    tables: &ReferenceTables,
    policy: &BendPolicy,
) -> Result<Option<u16>, CoreError> {
    for (diameter_mm, _) in tables.conduit_diameters() {
        let conduit: ConduitSpec = ConduitSpec {
            diameter_mm,
            bend_count,
            run_length_m,
        };
        let result: FillResult = calculate_conduit_fill(conductors, &conduit, tables, policy)?;
        if result.is_pass() {
            return Ok(Some(diameter_mm));
        }
    }
    Ok(None)
}

/// How many more conductors of `candidate` size fit in a conduit run.
///
/// `existing` may be empty. The count is rounded down, so adding that many
/// never takes the run over capacity.
///
/// # Errors
///
/// Returns an error if any size or the conduit diameter is not tabulated,
/// or an existing entry is invalid.
pub fn conduit_headroom(
    existing: &[ConductorEntry],
    conduit: &ConduitSpec,
    candidate: ConductorSize,
    tables: &ReferenceTables,
    policy: &BendPolicy,
) -> Result<u32, CoreError> {
    for (index, entry) in existing.iter().enumerate() {
        validate_count(&format!("conductors[{index}].count"), entry.count)?;
    }

    let candidate_factor: u32 = tables.cable_factor(candidate)?;
    let demand: f64 = conduit_demand(existing, tables)?;
    let adjustment: CapacityAdjustment = conduit_capacity(conduit, tables, policy)?;

    Ok(whole_units_that_fit(
        adjustment.capacity - demand,
        f64::from(candidate_factor),
    ))
}

/// How many more cables of the given overall diameter fit in a trunking run.
///
/// `existing` may be empty. The count is rounded down.
///
/// # Errors
///
/// Returns an error if the trunking size is not tabulated, the candidate
/// diameter is not positive, or an existing entry is invalid.
pub fn trunking_headroom(
    existing: &[CableEntry],
    trunking: &TrunkingSpec,
    candidate_diameter_mm: f64,
    tables: &ReferenceTables,
) -> Result<u32, CoreError> {
    if !existing.is_empty() {
        validate_cables(existing)?;
    }
    validate_diameter("candidate_diameter_mm", candidate_diameter_mm)?;

    let demand: f64 = existing.iter().map(CableEntry::total_area_mm2).sum();
    let capacity: f64 = trunking_capacity(trunking, tables)?;

    Ok(whole_units_that_fit(
        capacity - demand,
        cable_area_mm2(candidate_diameter_mm),
    ))
}

/// Floor of `spare / unit`, zero when nothing is spare.
// The quotient is clamped to [0, u32::MAX] before the cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_units_that_fit(spare: f64, unit: f64) -> u32 {
    if spare <= 0.0 || unit <= 0.0 {
        return 0;
    }
    (spare / unit).floor().min(f64::from(u32::MAX)) as u32
}
