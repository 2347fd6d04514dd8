// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// A group of identical conductors, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorInput {
    /// Nominal conductor size in mm² (e.g. 2.5).
    pub size_mm2: f64,
    /// Number of conductors of this size.
    pub count: u32,
}

/// A group of identical finished cables, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableInput {
    /// Overall diameter of the finished cable in mm.
    pub overall_diameter_mm: f64,
    /// Number of cables of this diameter.
    pub count: u32,
}

/// API request to check a conduit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitFillRequest {
    /// Conductors drawn into the conduit.
    pub conductors: Vec<ConductorInput>,
    /// Nominal conduit diameter in mm.
    pub diameter_mm: u16,
    /// Number of bends in the run.
    #[serde(default)]
    pub bend_count: u8,
    /// Run length in metres, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_length_m: Option<f64>,
}

/// API request to check a trunking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrunkingFillRequest {
    /// Cables laid in the trunking.
    pub cables: Vec<CableInput>,
    /// Internal width in mm.
    pub width_mm: u16,
    /// Internal height in mm.
    pub height_mm: u16,
}

/// API request asking how many more conductors of one size fit in a conduit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitHeadroomRequest {
    /// The run as it stands. `conductors` may be empty.
    #[serde(flatten)]
    pub run: ConduitFillRequest,
    /// Size of the conductors to add, in mm².
    pub candidate_size_mm2: f64,
}

/// API request asking how many more cables of one diameter fit in a trunking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrunkingHeadroomRequest {
    /// The run as it stands. `cables` may be empty.
    #[serde(flatten)]
    pub run: TrunkingFillRequest,
    /// Overall diameter of the cables to add, in mm.
    pub candidate_diameter_mm: f64,
}

/// API response for a fill check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillResponse {
    /// Total cable factor (conduit) or cable area in mm² (trunking).
    pub total_demand: f64,
    /// Adjusted conduit factor, or permitted trunking area in mm².
    pub capacity: f64,
    /// `total_demand / capacity`.
    pub fill_ratio: f64,
    /// Fill ratio as a percentage, for gauges.
    pub fill_percentage: f64,
    /// `"pass"` or `"fail"`.
    pub status: String,
    /// Conduit factor column used (conduit only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_difficulty: Option<String>,
    /// Whether a draw-in box should be fitted.
    pub recommend_draw_in_box: bool,
    /// Human-readable descriptions of the adjustments applied.
    pub advisories: Vec<String>,
    /// Smallest conduit that would pass, when a conduit run fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_diameter_mm: Option<u16>,
    /// A summary message.
    pub message: String,
}

/// API response for a headroom query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadroomResponse {
    /// How many more cables fit without exceeding capacity.
    pub additional: u32,
    /// A summary message.
    pub message: String,
}

/// A tabulated cable factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableFactorInfo {
    /// Nominal conductor size in mm².
    pub size_mm2: f64,
    /// Cable factor.
    pub factor: u32,
}

/// Tabulated conduit factors for one diameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConduitFactorInfo {
    /// Nominal conduit diameter in mm.
    pub diameter_mm: u16,
    /// Factor for a straight run.
    pub straight: u32,
    /// Factor for a run with bends.
    pub with_bends: u32,
}

/// A tabulated trunking size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrunkingSizeInfo {
    /// Internal width in mm.
    pub width_mm: u16,
    /// Internal height in mm.
    pub height_mm: u16,
    /// Permitted cable area in mm².
    pub area_limit_mm2: f64,
}

/// API response listing the reference tables in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablesResponse {
    /// Edition of BS 7671 the tables follow.
    pub edition: String,
    /// Cable factors, smallest size first.
    pub cable_factors: Vec<CableFactorInfo>,
    /// Conduit factors, smallest diameter first.
    pub conduit_factors: Vec<ConduitFactorInfo>,
    /// Trunking sizes, smallest first.
    pub trunking_sizes: Vec<TrunkingSizeInfo>,
    /// Proportion of trunking area cables may occupy.
    pub trunking_fill_limit: f64,
}
