// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::policy::{BendPolicy, CapacityAdjustment};
use cablefill_domain::{
    CableEntry, ConductorEntry, ConduitFactors, ConduitSpec, ContainmentSpec, DomainError,
    FillResult, ReferenceTables, TrunkingSpec, validate_cables, validate_conductors,
    validate_run_length, validate_trunking_dimensions,
};
use serde::{Deserialize, Serialize};

/// What is being installed, matching the containment it goes into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum FillLoad {
    /// Conductors for the cable factor method.
    Conductors(Vec<ConductorEntry>),
    /// Finished cables for the trunking space factor method.
    Cables(Vec<CableEntry>),
}

/// Calculates the fill of a conduit run using the cable factor method.
///
/// # Arguments
///
/// * `conductors` - The conductors drawn into the conduit
/// * `conduit` - The conduit run
/// * `tables` - Reference tables to look factors up in
/// * `policy` - Bend and run-length adjustment policy
///
/// # Errors
///
/// Returns an error if:
/// - The conductor list is empty or any count is zero
/// - The run length is negative or not finite
/// - A conductor size is not tabulated (`UnknownSize`)
/// - The conduit diameter is not tabulated (`UnknownConduitClass`)
/// - The policy parameters are out of range
pub fn calculate_conduit_fill(
    conductors: &[ConductorEntry],
    conduit: &ConduitSpec,
    tables: &ReferenceTables,
    policy: &BendPolicy,
) -> Result<FillResult, CoreError> {
    validate_conductors(conductors)?;
    let total_demand: f64 = conduit_demand(conductors, tables)?;
    let adjustment: CapacityAdjustment = conduit_capacity(conduit, tables, policy)?;

    Ok(FillResult::new(total_demand, adjustment.capacity)
        .with_run_difficulty(adjustment.difficulty)
        .with_draw_in_box(adjustment.recommend_draw_in_box)
        .with_advisories(adjustment.advisories))
}

/// Calculates the fill of a trunking run using the space factor method.
///
/// Demand is the total cross-sectional area of the finished cables.
/// Capacity is the fill limit (45%) of the trunking internal area.
///
/// # Errors
///
/// Returns an error if:
/// - The cable list is empty, any count is zero, or any diameter is not positive
/// - Either trunking dimension is zero
/// - The trunking size is not tabulated (`UnknownTrunkingDimension`)
pub fn calculate_trunking_fill(
    cables: &[CableEntry],
    trunking: &TrunkingSpec,
    tables: &ReferenceTables,
) -> Result<FillResult, CoreError> {
    validate_cables(cables)?;
    let total_demand: f64 = cables.iter().map(CableEntry::total_area_mm2).sum();
    let capacity: f64 = trunking_capacity(trunking, tables)?;

    Ok(FillResult::new(total_demand, capacity))
}

/// Calculates fill for any containment.
///
/// # Errors
///
/// Returns `InvalidInput` if the load kind does not match the containment,
/// and otherwise any error of the selected calculation.
pub fn calculate_fill(
    load: &FillLoad,
    containment: &ContainmentSpec,
    tables: &ReferenceTables,
    policy: &BendPolicy,
) -> Result<FillResult, CoreError> {
    match (load, containment) {
        (FillLoad::Conductors(conductors), ContainmentSpec::Conduit(conduit)) => {
            calculate_conduit_fill(conductors, conduit, tables, policy)
        }
        (FillLoad::Cables(cables), ContainmentSpec::Trunking(trunking)) => {
            calculate_trunking_fill(cables, trunking, tables)
        }
        (FillLoad::Cables(_), ContainmentSpec::Conduit(_)) => Err(DomainError::invalid(
            "load",
            "conduit fill is calculated from conductor sizes, not cable diameters",
        )
        .into()),
        (FillLoad::Conductors(_), ContainmentSpec::Trunking(_)) => Err(DomainError::invalid(
            "load",
            "trunking fill is calculated from cable diameters, not conductor sizes",
        )
        .into()),
    }
}

/// Sum of cable factor × count. An empty list has zero demand.
pub(crate) fn conduit_demand(
    conductors: &[ConductorEntry],
    tables: &ReferenceTables,
) -> Result<f64, DomainError> {
    let mut total_demand: f64 = 0.0;
    for entry in conductors {
        let factor: u32 = tables.cable_factor(entry.size)?;
        total_demand += f64::from(factor) * f64::from(entry.count);
    }
    Ok(total_demand)
}

/// Adjusted capacity of a conduit run.
pub(crate) fn conduit_capacity(
    conduit: &ConduitSpec,
    tables: &ReferenceTables,
    policy: &BendPolicy,
) -> Result<CapacityAdjustment, DomainError> {
    policy.validate()?;
    validate_run_length(conduit.run_length_m)?;
    let factors: ConduitFactors = tables.conduit_factors(conduit.diameter_mm)?;
    Ok(policy.adjust(factors, conduit))
}

/// Permitted cable area of a trunking run.
pub(crate) fn trunking_capacity(
    trunking: &TrunkingSpec,
    tables: &ReferenceTables,
) -> Result<f64, DomainError> {
    validate_trunking_dimensions(trunking)?;
    tables.trunking_area_limit(trunking.width_mm, trunking.height_mm)
}
