// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Largest nominal conductor size accepted before table lookup, in mm².
const MAX_NOMINAL_SIZE_MM2: f64 = 10_000.0;

/// A nominal conductor cross-sectional area.
///
/// Stored exactly in tenths of a mm² so that sizes such as 1.5 and 2.5
/// can be used as table keys without floating point comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct ConductorSize {
    tenths: u32,
}

impl ConductorSize {
    /// Creates a size from tenths of a mm² (e.g. `15` for 1.5mm²).
    #[must_use]
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    /// Creates a size from a nominal area in mm².
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value is not finite or not positive, and
    /// `UnknownSize` if it is not a multiple of 0.1mm² or is implausibly large.
    pub fn from_mm2(size_mm2: f64) -> Result<Self, DomainError> {
        if !size_mm2.is_finite() || size_mm2 <= 0.0 {
            return Err(DomainError::invalid(
                "size_mm2",
                format!("conductor size must be a positive number, got {size_mm2}"),
            ));
        }

        let scaled: f64 = size_mm2 * 10.0;
        let rounded: f64 = scaled.round();
        if (scaled - rounded).abs() > 1e-6 || size_mm2 > MAX_NOMINAL_SIZE_MM2 {
            return Err(DomainError::UnknownSize { size_mm2 });
        }

        // Bounded above by MAX_NOMINAL_SIZE_MM2 and positive, so the cast is exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenths: u32 = rounded as u32;
        Ok(Self { tenths })
    }

    /// Returns the size in tenths of a mm².
    #[must_use]
    pub const fn tenths(&self) -> u32 {
        self.tenths
    }

    /// Returns the nominal area in mm².
    #[must_use]
    pub fn mm2(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl std::fmt::Display for ConductorSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u32 = self.tenths / 10;
        let fraction: u32 = self.tenths % 10;
        if fraction == 0 {
            write!(f, "{whole}mm²")
        } else {
            write!(f, "{whole}.{fraction}mm²")
        }
    }
}

impl From<ConductorSize> for f64 {
    fn from(size: ConductorSize) -> Self {
        size.mm2()
    }
}

impl TryFrom<f64> for ConductorSize {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_mm2(value)
    }
}

/// A group of identical conductors drawn into a conduit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConductorEntry {
    /// Nominal conductor size.
    pub size: ConductorSize,
    /// Number of conductors of this size (at least 1).
    pub count: u32,
}

impl ConductorEntry {
    /// Creates a new conductor entry.
    #[must_use]
    pub const fn new(size: ConductorSize, count: u32) -> Self {
        Self { size, count }
    }
}

/// A group of identical finished cables laid in trunking.
///
/// Trunking fill uses the real cross-section of the finished cable rather
/// than the tabulated cable factor, so the overall diameter is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableEntry {
    /// Overall diameter of the finished cable in mm.
    pub overall_diameter_mm: f64,
    /// Number of cables of this diameter (at least 1).
    pub count: u32,
}

impl CableEntry {
    /// Creates a new cable entry.
    #[must_use]
    pub const fn new(overall_diameter_mm: f64, count: u32) -> Self {
        Self {
            overall_diameter_mm,
            count,
        }
    }

    /// Cross-sectional area of a single cable in mm².
    #[must_use]
    pub fn area_mm2(&self) -> f64 {
        cable_area_mm2(self.overall_diameter_mm)
    }

    /// Cross-sectional area of all cables in this entry in mm².
    #[must_use]
    pub fn total_area_mm2(&self) -> f64 {
        self.area_mm2() * f64::from(self.count)
    }
}

/// Cross-sectional area of a round cable of the given overall diameter.
#[must_use]
pub fn cable_area_mm2(overall_diameter_mm: f64) -> f64 {
    let radius: f64 = overall_diameter_mm / 2.0;
    PI * radius * radius
}

/// Which conduit factor column applies to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunDifficulty {
    /// Straight run with no bends.
    Straight,
    /// Run containing one or more bends.
    WithBends,
}

impl RunDifficulty {
    /// Returns the string representation used in responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::WithBends => "with_bends",
        }
    }
}

impl std::fmt::Display for RunDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A conduit run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConduitSpec {
    /// Nominal conduit diameter in mm.
    pub diameter_mm: u16,
    /// Number of bends in the run, each at most 90°.
    pub bend_count: u8,
    /// Run length in metres, if known.
    pub run_length_m: Option<f64>,
}

impl ConduitSpec {
    /// Creates a conduit run of unknown length.
    #[must_use]
    pub const fn new(diameter_mm: u16, bend_count: u8) -> Self {
        Self {
            diameter_mm,
            bend_count,
            run_length_m: None,
        }
    }

    /// Returns a copy of this run with the given length.
    #[must_use]
    pub const fn with_run_length(mut self, run_length_m: f64) -> Self {
        self.run_length_m = Some(run_length_m);
        self
    }
}

/// A length of trunking, described by its internal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrunkingSpec {
    /// Internal width in mm.
    pub width_mm: u16,
    /// Internal height in mm.
    pub height_mm: u16,
}

impl TrunkingSpec {
    /// Creates a trunking spec.
    #[must_use]
    pub const fn new(width_mm: u16, height_mm: u16) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Internal cross-sectional area in mm².
    #[must_use]
    pub fn internal_area_mm2(&self) -> f64 {
        f64::from(self.width_mm) * f64::from(self.height_mm)
    }
}

/// The containment a set of cables is installed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainmentSpec {
    /// Round conduit, sized with the cable factor method.
    Conduit(ConduitSpec),
    /// Rectangular trunking, sized with the 45% space factor rule.
    Trunking(TrunkingSpec),
}

/// Outcome of a fill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillStatus {
    /// Demand is within capacity.
    Pass,
    /// Demand exceeds capacity.
    Fail,
}

impl FillStatus {
    /// Compares demand against capacity. Equality passes.
    #[must_use]
    pub fn from_comparison(total_demand: f64, capacity: f64) -> Self {
        if total_demand <= capacity {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Returns the string representation used in responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for FillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An adjustment applied to a conduit run's capacity, reported alongside the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// A single bend was rated between the straight and bends columns.
    SingleBendInterpolated,
    /// Three or more bends; a draw-in box should be fitted or the run split.
    ExcessBends {
        /// Number of bends in the run.
        bend_count: u8,
    },
    /// A long straight run was derated.
    LongRunDerated {
        /// Run length in metres.
        run_length_m: f64,
        /// Factor applied to the conduit factor.
        factor: f64,
    },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleBendInterpolated => write!(
                f,
                "Single bend: conduit factor interpolated between straight and bends columns"
            ),
            Self::ExcessBends { bend_count } => write!(
                f,
                "{bend_count} bends exceed 180° between draw-in points: fit a draw-in box or split the run"
            ),
            Self::LongRunDerated {
                run_length_m,
                factor,
            } => write!(
                f,
                "Straight run of {run_length_m}m: conduit factor derated by {factor}"
            ),
        }
    }
}

/// Result of a fill calculation.
///
/// A derived value recomputed on every input change. It has no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillResult {
    /// Sum of cable factors (conduit) or cable areas in mm² (trunking).
    pub total_demand: f64,
    /// Adjusted conduit factor, or permitted trunking area in mm².
    pub capacity: f64,
    /// `total_demand / capacity`.
    pub fill_ratio: f64,
    /// Pass iff `total_demand <= capacity`.
    pub status: FillStatus,
    /// Conduit factor column used. `None` for trunking.
    pub run_difficulty: Option<RunDifficulty>,
    /// Set when the run has enough bends that a draw-in box is needed.
    pub recommend_draw_in_box: bool,
    /// Adjustments that were applied to reach `capacity`.
    pub advisories: Vec<Advisory>,
}

impl FillResult {
    /// Compares demand against capacity.
    ///
    /// `capacity` must be positive; the reference tables and policy guarantee this.
    #[must_use]
    pub fn new(total_demand: f64, capacity: f64) -> Self {
        Self {
            total_demand,
            capacity,
            fill_ratio: total_demand / capacity,
            status: FillStatus::from_comparison(total_demand, capacity),
            run_difficulty: None,
            recommend_draw_in_box: false,
            advisories: Vec::new(),
        }
    }

    /// Records the conduit factor column used.
    #[must_use]
    pub fn with_run_difficulty(mut self, run_difficulty: RunDifficulty) -> Self {
        self.run_difficulty = Some(run_difficulty);
        self
    }

    /// Records whether a draw-in box is recommended.
    #[must_use]
    pub fn with_draw_in_box(mut self, recommend_draw_in_box: bool) -> Self {
        self.recommend_draw_in_box = recommend_draw_in_box;
        self
    }

    /// Records the adjustments applied.
    #[must_use]
    pub fn with_advisories(mut self, advisories: Vec<Advisory>) -> Self {
        self.advisories = advisories;
        self
    }

    /// Whether the fill is within capacity.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.status == FillStatus::Pass
    }

    /// Fill ratio as a percentage.
    #[must_use]
    pub fn fill_percentage(&self) -> f64 {
        self.fill_ratio * 100.0
    }

    /// Capacity left over, zero when the fill fails.
    #[must_use]
    pub fn spare_capacity(&self) -> f64 {
        (self.capacity - self.total_demand).max(0.0)
    }
}
