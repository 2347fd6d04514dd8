// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cablefill::CoreError;
use cablefill_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Every input error names the field the user has to correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A size is valid but not in the reference tables.
    UnsupportedSize {
        /// The field holding the size.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl ApiError {
    /// The field the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInput { field, .. } | Self::UnsupportedSize { field, .. } => field,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::UnsupportedSize { field, message } => {
                write!(f, "Unsupported size for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownSize { size_mm2 } => ApiError::UnsupportedSize {
            field: String::from("size_mm2"),
            message: format!("Conductor size {size_mm2}mm² has no tabulated cable factor"),
        },
        DomainError::UnknownConduitClass { diameter_mm } => ApiError::UnsupportedSize {
            field: String::from("diameter_mm"),
            message: format!("Conduit diameter {diameter_mm}mm has no tabulated conduit factor"),
        },
        DomainError::UnknownTrunkingDimension {
            width_mm,
            height_mm,
        } => ApiError::UnsupportedSize {
            field: String::from("width_mm"),
            message: format!("Trunking {width_mm}mm x {height_mm}mm is not a standard size"),
        },
        DomainError::InvalidInput { field, reason } => ApiError::InvalidInput {
            field,
            message: reason,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Re-targets an error at a more specific field, e.g. `conductors[2].size_mm2`.
#[must_use]
pub fn with_field(err: ApiError, field: String) -> ApiError {
    match err {
        ApiError::InvalidInput { message, .. } => ApiError::InvalidInput { field, message },
        ApiError::UnsupportedSize { message, .. } => ApiError::UnsupportedSize { field, message },
    }
}
