// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bend and run-length adjustment of conduit capacity.
//!
//! The published tables give only two conduit factor columns, straight and
//! with bends. Single bends, runs with more than two bends and long straight
//! runs are left to installer judgement, so each of those adjustments is a
//! policy parameter here rather than a constant.

use cablefill_domain::{Advisory, ConduitFactors, ConduitSpec, DomainError, RunDifficulty};
use serde::{Deserialize, Serialize};

/// Bends allowed before the total angle can exceed 180° between draw-in points.
pub const MAX_BENDS_BETWEEN_DRAW_IN_POINTS: u8 = 2;

/// How a run with exactly one bend is rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleBendRule {
    /// Use the with-bends column, as for two bends.
    #[default]
    WithBendsColumn,
    /// Interpolate linearly by bend count, halfway between the two columns.
    Interpolate,
}

/// Policy parameters for adjusting conduit capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendPolicy {
    /// Rating rule for a single bend.
    pub single_bend: SingleBendRule,
    /// Multiplier applied to the with-bends column for three or more bends.
    /// 1.0 leaves the column unchanged; 0.7 to 0.8 gives the 20 to 30% reduction.
    pub excess_bend_derating_factor: f64,
    /// Straight runs longer than this (metres) are derated.
    pub long_run_threshold_m: f64,
    /// Multiplier applied to the straight column for long runs.
    pub long_run_derating_factor: f64,
}

impl Default for BendPolicy {
    fn default() -> Self {
        Self {
            single_bend: SingleBendRule::WithBendsColumn,
            excess_bend_derating_factor: 1.0,
            long_run_threshold_m: 10.0,
            long_run_derating_factor: 0.85,
        }
    }
}

/// Capacity of a conduit run after bend and length adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityAdjustment {
    /// Column the capacity is based on.
    ///
    /// Any bend reports `WithBends`. An interpolated single bend sits between
    /// the two columns; `advisories` then carries `SingleBendInterpolated`.
    pub difficulty: RunDifficulty,
    /// Adjusted conduit factor.
    pub capacity: f64,
    /// Whether a draw-in box should be fitted.
    pub recommend_draw_in_box: bool,
    /// Adjustments applied, in the order they were applied.
    pub advisories: Vec<Advisory>,
}

impl BendPolicy {
    /// Validates the policy parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a derating factor is outside (0, 1] or the
    /// long run threshold is negative or not finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_factor(
            "excess_bend_derating_factor",
            self.excess_bend_derating_factor,
        )?;
        validate_factor("long_run_derating_factor", self.long_run_derating_factor)?;

        if !self.long_run_threshold_m.is_finite() || self.long_run_threshold_m < 0.0 {
            return Err(DomainError::invalid(
                "long_run_threshold_m",
                format!(
                    "threshold must be a non-negative number, got {}",
                    self.long_run_threshold_m
                ),
            ));
        }

        Ok(())
    }

    /// Resolves the capacity of a conduit run from its tabulated factors.
    ///
    /// - 0 bends: straight column, derated if longer than the threshold
    /// - 1 bend: per `single_bend`
    /// - 2 bends: with-bends column
    /// - 3 or more: with-bends column times `excess_bend_derating_factor`,
    ///   and a draw-in box is recommended
    #[must_use]
    pub fn adjust(&self, factors: ConduitFactors, conduit: &ConduitSpec) -> CapacityAdjustment {
        let straight: f64 = f64::from(factors.straight);
        let with_bends: f64 = f64::from(factors.with_bends);
        let mut advisories: Vec<Advisory> = Vec::new();

        let (difficulty, mut capacity, recommend_draw_in_box): (RunDifficulty, f64, bool) =
            match conduit.bend_count {
                0 => (RunDifficulty::Straight, straight, false),
                1 => match self.single_bend {
                    SingleBendRule::WithBendsColumn => (RunDifficulty::WithBends, with_bends, false),
                    SingleBendRule::Interpolate => {
                        advisories.push(Advisory::SingleBendInterpolated);
                        (
                            RunDifficulty::WithBends,
                            straight - (straight - with_bends) / 2.0,
                            false,
                        )
                    }
                },
                bends if bends <= MAX_BENDS_BETWEEN_DRAW_IN_POINTS => {
                    (RunDifficulty::WithBends, with_bends, false)
                }
                bends => {
                    advisories.push(Advisory::ExcessBends { bend_count: bends });
                    (
                        RunDifficulty::WithBends,
                        with_bends * self.excess_bend_derating_factor,
                        true,
                    )
                }
            };

        let long_run: Option<f64> = conduit.run_length_m.filter(|&run_length_m| {
            difficulty == RunDifficulty::Straight && run_length_m > self.long_run_threshold_m
        });
        if let Some(run_length_m) = long_run {
            capacity *= self.long_run_derating_factor;
            advisories.push(Advisory::LongRunDerated {
                run_length_m,
                factor: self.long_run_derating_factor,
            });
        }

        CapacityAdjustment {
            difficulty,
            capacity,
            recommend_draw_in_box,
            advisories,
        }
    }
}

fn validate_factor(field: &str, factor: f64) -> Result<(), DomainError> {
    if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
        return Err(DomainError::invalid(
            field,
            format!("factor must be greater than 0 and at most 1, got {factor}"),
        ));
    }
    Ok(())
}
