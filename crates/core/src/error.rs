// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cablefill_domain::DomainError;

/// Errors that can occur during a fill calculation.
///
/// A calculation either returns a complete `FillResult` or one of these;
/// it never substitutes a default factor or a partial demand.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The input could not be rated: it names something missing from the
    /// reference tables, or a value is out of range.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
