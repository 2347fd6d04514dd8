// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating fill inputs or reading the reference tables.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Conductor size is not present in the cable factor table.
    UnknownSize {
        /// The requested nominal size in mm².
        size_mm2: f64,
    },
    /// Conduit diameter is not present in the conduit factor table.
    UnknownConduitClass {
        /// The requested nominal diameter in mm.
        diameter_mm: u16,
    },
    /// Trunking size is not a tabulated trunking size.
    UnknownTrunkingDimension {
        /// The requested internal width in mm.
        width_mm: u16,
        /// The requested internal height in mm.
        height_mm: u16,
    },
    /// An input value is zero, negative, non-finite or otherwise unusable.
    InvalidInput {
        /// The offending field, e.g. `conductors[2].count`.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl DomainError {
    /// Builds an `InvalidInput` error for the given field.
    #[must_use]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSize { size_mm2 } => {
                write!(
                    f,
                    "Conductor size {size_mm2}mm² is not in the cable factor table"
                )
            }
            Self::UnknownConduitClass { diameter_mm } => {
                write!(
                    f,
                    "Conduit diameter {diameter_mm}mm is not in the conduit factor table"
                )
            }
            Self::UnknownTrunkingDimension {
                width_mm,
                height_mm,
            } => {
                write!(
                    f,
                    "Trunking size {width_mm}mm x {height_mm}mm is not a tabulated trunking size"
                )
            }
            Self::InvalidInput { field, reason } => write!(f, "Invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
