// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cablefill_domain::{CableEntry, ConductorEntry, ConductorSize};

pub fn conductor(size_mm2: f64, count: u32) -> ConductorEntry {
    ConductorEntry::new(ConductorSize::from_mm2(size_mm2).unwrap(), count)
}

/// Overall diameter of a cable whose cross-section is `area_mm2`.
pub fn diameter_for_area(area_mm2: f64) -> f64 {
    2.0 * (area_mm2 / std::f64::consts::PI).sqrt()
}

pub fn cables_of_area(area_mm2: f64, count: u32) -> CableEntry {
    CableEntry::new(diameter_for_area(area_mm2), count)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
