// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference tables for the cable factor and space factor methods.
//!
//! The tables are an immutable value. Callers build one (normally with
//! [`ReferenceTables::bs7671`]) at startup and pass it by reference into every
//! calculation, so a later amendment can be swapped in without touching the
//! calculation code.

use crate::error::DomainError;
use crate::types::{ConductorSize, RunDifficulty, TrunkingSpec};
use std::collections::{BTreeMap, BTreeSet};

/// Edition of BS 7671 the default tables were sourced from.
pub const BS7671_EDITION: &str = "BS 7671:2018+A2:2022";

/// Default proportion of trunking internal area that cables may occupy.
pub const TRUNKING_FILL_LIMIT: f64 = 0.45;

/// Cable factors for single-core thermoplastic conductors in conduit.
/// Keys are tenths of a mm².
const CABLE_FACTORS: [(u32, u32); 7] = [
    (10, 22),
    (15, 22),
    (25, 30),
    (40, 43),
    (60, 58),
    (100, 105),
    (160, 145),
];

/// Conduit factors as (diameter mm, straight, with bends).
const CONDUIT_FACTORS: [(u16, u32, u32); 6] = [
    (16, 290, 200),
    (20, 460, 320),
    (25, 800, 560),
    (32, 1400, 980),
    (40, 2100, 1500),
    (50, 3500, 2450),
];

/// Standard trunking sizes as (width mm, height mm).
const TRUNKING_SIZES: [(u16, u16); 20] = [
    (16, 16),
    (25, 16),
    (25, 25),
    (38, 16),
    (38, 25),
    (38, 38),
    (50, 50),
    (75, 50),
    (75, 75),
    (100, 50),
    (100, 75),
    (100, 100),
    (150, 50),
    (150, 75),
    (150, 100),
    (150, 150),
    (225, 75),
    (225, 150),
    (300, 100),
    (300, 150),
];

/// Conduit factors for one diameter class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConduitFactors {
    /// Factor for a straight run.
    pub straight: u32,
    /// Factor for a run with bends.
    pub with_bends: u32,
}

impl ConduitFactors {
    /// Returns the factor for the given column.
    #[must_use]
    pub const fn for_difficulty(&self, difficulty: RunDifficulty) -> u32 {
        match difficulty {
            RunDifficulty::Straight => self.straight,
            RunDifficulty::WithBends => self.with_bends,
        }
    }
}

/// Lookup data for fill calculations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    edition: String,
    cable_factors: BTreeMap<ConductorSize, u32>,
    conduit_factors: BTreeMap<u16, ConduitFactors>,
    /// Stored with the larger dimension first so lookups ignore orientation.
    trunking_sizes: BTreeSet<(u16, u16)>,
    trunking_fill_limit: f64,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::bs7671()
    }
}

impl ReferenceTables {
    /// Builds the tables documented for BS 7671:2018+A2:2022.
    #[must_use]
    pub fn bs7671() -> Self {
        Self {
            edition: BS7671_EDITION.to_string(),
            cable_factors: CABLE_FACTORS
                .iter()
                .map(|&(tenths, factor)| (ConductorSize::from_tenths(tenths), factor))
                .collect(),
            conduit_factors: CONDUIT_FACTORS
                .iter()
                .map(|&(diameter, straight, with_bends)| {
                    (
                        diameter,
                        ConduitFactors {
                            straight,
                            with_bends,
                        },
                    )
                })
                .collect(),
            trunking_sizes: TRUNKING_SIZES
                .iter()
                .map(|&(width, height)| normalize(width, height))
                .collect(),
            trunking_fill_limit: TRUNKING_FILL_LIMIT,
        }
    }

    /// Edition of the standard these tables follow.
    #[must_use]
    pub fn edition(&self) -> &str {
        &self.edition
    }

    /// Proportion of trunking internal area that cables may occupy.
    #[must_use]
    pub const fn trunking_fill_limit(&self) -> f64 {
        self.trunking_fill_limit
    }

    /// Looks up the cable factor for a conductor size.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSize` if the size is not tabulated.
    pub fn cable_factor(&self, size: ConductorSize) -> Result<u32, DomainError> {
        self.cable_factors
            .get(&size)
            .copied()
            .ok_or(DomainError::UnknownSize {
                size_mm2: size.mm2(),
            })
    }

    /// Looks up both conduit factor columns for a diameter class.
    ///
    /// # Errors
    ///
    /// Returns `UnknownConduitClass` if the diameter is not tabulated.
    pub fn conduit_factors(&self, diameter_mm: u16) -> Result<ConduitFactors, DomainError> {
        self.conduit_factors
            .get(&diameter_mm)
            .copied()
            .ok_or(DomainError::UnknownConduitClass { diameter_mm })
    }

    /// Looks up the conduit factor for a diameter class and column.
    ///
    /// # Errors
    ///
    /// Returns `UnknownConduitClass` if the diameter is not tabulated.
    pub fn conduit_factor(
        &self,
        diameter_mm: u16,
        difficulty: RunDifficulty,
    ) -> Result<u32, DomainError> {
        Ok(self
            .conduit_factors(diameter_mm)?
            .for_difficulty(difficulty))
    }

    /// Permitted cable area for a tabulated trunking size, in mm².
    ///
    /// # Errors
    ///
    /// Returns `UnknownTrunkingDimension` if the size is not tabulated.
    pub fn trunking_area_limit(&self, width_mm: u16, height_mm: u16) -> Result<f64, DomainError> {
        if !self.has_trunking_size(width_mm, height_mm) {
            return Err(DomainError::UnknownTrunkingDimension {
                width_mm,
                height_mm,
            });
        }
        Ok(self.trunking_fill_limit * f64::from(width_mm) * f64::from(height_mm))
    }

    /// Whether a trunking size is tabulated, in either orientation.
    #[must_use]
    pub fn has_trunking_size(&self, width_mm: u16, height_mm: u16) -> bool {
        self.trunking_sizes.contains(&normalize(width_mm, height_mm))
    }

    /// Tabulated conductor sizes with their cable factors, smallest first.
    pub fn conductor_sizes(&self) -> impl Iterator<Item = (ConductorSize, u32)> + '_ {
        self.cable_factors
            .iter()
            .map(|(size, factor)| (*size, *factor))
    }

    /// Tabulated conduit diameters with their factors, smallest first.
    pub fn conduit_diameters(&self) -> impl Iterator<Item = (u16, ConduitFactors)> + '_ {
        self.conduit_factors
            .iter()
            .map(|(diameter, factors)| (*diameter, *factors))
    }

    /// Tabulated trunking sizes, larger dimension first, smallest first.
    pub fn trunking_sizes(&self) -> impl Iterator<Item = TrunkingSpec> + '_ {
        self.trunking_sizes
            .iter()
            .map(|&(width, height)| TrunkingSpec::new(width, height))
    }

    /// Returns tables with a cable factor added or replaced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the factor is zero.
    pub fn with_cable_factor(mut self, size: ConductorSize, factor: u32) -> Result<Self, DomainError> {
        if factor == 0 {
            return Err(DomainError::invalid(
                "cable_factor",
                format!("cable factor for {size} must be greater than 0"),
            ));
        }
        self.cable_factors.insert(size, factor);
        Ok(self)
    }

    /// Returns tables with a conduit diameter class added or replaced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either factor is zero or the bends factor
    /// exceeds the straight factor.
    pub fn with_conduit_factors(
        mut self,
        diameter_mm: u16,
        factors: ConduitFactors,
    ) -> Result<Self, DomainError> {
        if factors.with_bends == 0 || factors.straight == 0 {
            return Err(DomainError::invalid(
                "conduit_factor",
                format!("conduit factors for {diameter_mm}mm must be greater than 0"),
            ));
        }
        if factors.with_bends > factors.straight {
            return Err(DomainError::invalid(
                "conduit_factor",
                format!(
                    "bends factor {} exceeds straight factor {} for {diameter_mm}mm",
                    factors.with_bends, factors.straight
                ),
            ));
        }
        self.conduit_factors.insert(diameter_mm, factors);
        Ok(self)
    }

    /// Returns tables with a trunking size added.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero.
    pub fn with_trunking_size(mut self, width_mm: u16, height_mm: u16) -> Result<Self, DomainError> {
        if width_mm == 0 || height_mm == 0 {
            return Err(DomainError::invalid(
                "trunking_size",
                format!("trunking dimensions must be greater than 0, got {width_mm}x{height_mm}"),
            ));
        }
        self.trunking_sizes.insert(normalize(width_mm, height_mm));
        Ok(self)
    }

    /// Returns tables with a different trunking fill limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `0 < limit <= 1`.
    pub fn with_trunking_fill_limit(mut self, limit: f64) -> Result<Self, DomainError> {
        if !limit.is_finite() || limit <= 0.0 || limit > 1.0 {
            return Err(DomainError::invalid(
                "trunking_fill_limit",
                format!("fill limit must be greater than 0 and at most 1, got {limit}"),
            ));
        }
        self.trunking_fill_limit = limit;
        Ok(self)
    }
}

const fn normalize(width_mm: u16, height_mm: u16) -> (u16, u16) {
    if width_mm >= height_mm {
        (width_mm, height_mm)
    } else {
        (height_mm, width_mm)
    }
}
