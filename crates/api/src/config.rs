// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Policy configuration.
//!
//! The bend and long-run adjustments and the trunking fill limit are left to
//! installer judgement, so a deployment may supply them as a JSON file.
//! Omitted settings take their defaults.

use cablefill::{BendPolicy, SingleBendRule};
use cablefill_domain::{DomainError, ReferenceTables};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy file could not be read.
    #[error("Failed to read policy file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The policy file is not valid JSON or has unknown settings.
    #[error("Failed to parse policy file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting is out of range.
    #[error("Invalid policy setting '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput { field, reason } => Self::Invalid { field, reason },
            other => Self::Invalid {
                field: String::from("tables"),
                reason: other.to_string(),
            },
        }
    }
}

/// Policy settings as they appear in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Rating rule for a run with one bend.
    pub single_bend: SingleBendRule,
    /// Multiplier on the bends column for three or more bends.
    pub excess_bend_derating_factor: f64,
    /// Straight runs longer than this (metres) are derated.
    pub long_run_threshold_m: f64,
    /// Multiplier on the straight column for long runs.
    pub long_run_derating_factor: f64,
    /// Proportion of trunking area cables may occupy.
    pub trunking_fill_limit: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let policy: BendPolicy = BendPolicy::default();
        Self {
            single_bend: policy.single_bend,
            excess_bend_derating_factor: policy.excess_bend_derating_factor,
            long_run_threshold_m: policy.long_run_threshold_m,
            long_run_derating_factor: policy.long_run_derating_factor,
            trunking_fill_limit: cablefill_domain::TRUNKING_FILL_LIMIT,
        }
    }
}

impl PolicyConfig {
    /// Parses a policy from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or has unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a policy from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid policy.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents: String =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json_str(&contents)
    }

    /// Validates the settings and builds the engine configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if any setting is out of range.
    pub fn into_engine(self) -> Result<EngineConfig, ConfigError> {
        let policy: BendPolicy = BendPolicy {
            single_bend: self.single_bend,
            excess_bend_derating_factor: self.excess_bend_derating_factor,
            long_run_threshold_m: self.long_run_threshold_m,
            long_run_derating_factor: self.long_run_derating_factor,
        };
        policy.validate()?;

        let tables: ReferenceTables =
            ReferenceTables::bs7671().with_trunking_fill_limit(self.trunking_fill_limit)?;

        Ok(EngineConfig { tables, policy })
    }
}

/// Everything a calculation needs besides its input.
///
/// Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Reference tables.
    pub tables: ReferenceTables,
    /// Bend and run-length policy.
    pub policy: BendPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tables: ReferenceTables::bs7671(),
            policy: BendPolicy::default(),
        }
    }
}
