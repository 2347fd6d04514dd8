// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CableEntry, ConductorEntry, TrunkingSpec, cable_area_mm2};

/// Largest overall cable diameter accepted, in mm.
pub const MAX_CABLE_DIAMETER_MM: f64 = 1000.0;

/// Validates the conductors drawn into a conduit.
///
/// Size lookup is left to the reference tables; this only checks the
/// shape of the input.
///
/// # Errors
///
/// Returns `InvalidInput` if:
/// - The list is empty
/// - Any entry has a count of zero
pub fn validate_conductors(conductors: &[ConductorEntry]) -> Result<(), DomainError> {
    if conductors.is_empty() {
        return Err(DomainError::invalid(
            "conductors",
            "at least one conductor is required",
        ));
    }

    for (index, entry) in conductors.iter().enumerate() {
        validate_count(&format!("conductors[{index}].count"), entry.count)?;
    }

    Ok(())
}

/// Validates the cables laid in trunking.
///
/// # Errors
///
/// Returns `InvalidInput` if:
/// - The list is empty
/// - Any entry has a count of zero
/// - Any diameter is not a positive finite number
pub fn validate_cables(cables: &[CableEntry]) -> Result<(), DomainError> {
    if cables.is_empty() {
        return Err(DomainError::invalid("cables", "at least one cable is required"));
    }

    for (index, entry) in cables.iter().enumerate() {
        validate_count(&format!("cables[{index}].count"), entry.count)?;
        validate_diameter(
            &format!("cables[{index}].overall_diameter_mm"),
            entry.overall_diameter_mm,
        )?;
    }

    Ok(())
}

/// Validates that a count is at least one.
///
/// # Errors
///
/// Returns `InvalidInput` naming `field` if the count is zero.
pub fn validate_count(field: &str, count: u32) -> Result<(), DomainError> {
    if count == 0 {
        return Err(DomainError::invalid(field, "count must be at least 1"));
    }
    Ok(())
}

/// Validates a cable overall diameter.
///
/// The diameter must be positive, at most [`MAX_CABLE_DIAMETER_MM`], and
/// large enough that its cross-sectional area is not zero.
///
/// # Errors
///
/// Returns `InvalidInput` naming `field` if the diameter is out of range.
pub fn validate_diameter(field: &str, overall_diameter_mm: f64) -> Result<(), DomainError> {
    if !overall_diameter_mm.is_finite() || overall_diameter_mm <= 0.0 {
        return Err(DomainError::invalid(
            field,
            format!("diameter must be a positive number, got {overall_diameter_mm}"),
        ));
    }
    if overall_diameter_mm > MAX_CABLE_DIAMETER_MM {
        return Err(DomainError::invalid(
            field,
            format!(
                "diameter must be at most {MAX_CABLE_DIAMETER_MM}mm, got {overall_diameter_mm}"
            ),
        ));
    }
    if cable_area_mm2(overall_diameter_mm) <= 0.0 {
        return Err(DomainError::invalid(
            field,
            format!("diameter {overall_diameter_mm}mm is too small to have a cable area"),
        ));
    }
    Ok(())
}

/// Validates an optional run length.
///
/// # Errors
///
/// Returns `InvalidInput` if the length is present and negative or not finite.
pub fn validate_run_length(run_length_m: Option<f64>) -> Result<(), DomainError> {
    match run_length_m {
        Some(length) if !length.is_finite() || length < 0.0 => Err(DomainError::invalid(
            "run_length_m",
            format!("run length must be a non-negative number, got {length}"),
        )),
        _ => Ok(()),
    }
}

/// Validates trunking dimensions before table lookup.
///
/// # Errors
///
/// Returns `InvalidInput` if either dimension is zero.
pub fn validate_trunking_dimensions(trunking: &TrunkingSpec) -> Result<(), DomainError> {
    if trunking.width_mm == 0 {
        return Err(DomainError::invalid("width_mm", "width must be greater than 0"));
    }
    if trunking.height_mm == 0 {
        return Err(DomainError::invalid("height_mm", "height must be greater than 0"));
    }
    Ok(())
}
