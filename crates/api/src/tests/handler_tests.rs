// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    cable_input, conductor_input, create_conduit_request, create_test_engine,
    create_trunking_request,
};
use crate::{
    ApiError, ConduitFillRequest, ConduitHeadroomRequest, EngineConfig, FillResponse,
    HeadroomResponse, TablesResponse, TrunkingHeadroomRequest, conduit_headroom,
    evaluate_conduit_fill, evaluate_trunking_fill, get_tables, trunking_headroom,
};

#[test]
fn test_get_tables_lists_defaults() {
    let engine: EngineConfig = create_test_engine();
    let tables: TablesResponse = get_tables(&engine);

    assert_eq!(tables.edition, "BS 7671:2018+A2:2022");
    assert_eq!(tables.cable_factors.len(), 7);
    assert!((tables.cable_factors[0].size_mm2 - 1.0).abs() < f64::EPSILON);
    assert_eq!(tables.cable_factors[0].factor, 22);
    assert_eq!(tables.conduit_factors.len(), 6);
    assert_eq!(tables.conduit_factors[1].diameter_mm, 20);
    assert_eq!(tables.conduit_factors[1].straight, 460);
    assert_eq!(tables.conduit_factors[1].with_bends, 320);
    assert_eq!(tables.trunking_sizes.len(), 20);
    assert!((tables.trunking_fill_limit - 0.45).abs() < f64::EPSILON);

    let square = tables
        .trunking_sizes
        .iter()
        .find(|size| size.width_mm == 50 && size.height_mm == 50)
        .unwrap();
    assert!((square.area_limit_mm2 - 1125.0).abs() < 1e-9);
}

#[test]
fn test_conduit_fill_passes() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest =
        create_conduit_request(vec![conductor_input(1.5, 5)], 20, 0);

    let response: FillResponse = evaluate_conduit_fill(&engine, &request).unwrap();

    assert!((response.total_demand - 110.0).abs() < 1e-9);
    assert!((response.capacity - 460.0).abs() < 1e-9);
    assert_eq!(response.status, "pass");
    assert_eq!(response.run_difficulty.as_deref(), Some("straight"));
    assert!(!response.recommend_draw_in_box);
    assert!(response.advisories.is_empty());
    assert_eq!(response.recommended_diameter_mm, None);
    assert_eq!(response.message, "20mm conduit is 23.9% full");
}

#[test]
fn test_conduit_fill_failure_recommends_larger_conduit() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest = create_conduit_request(
        vec![conductor_input(2.5, 9), conductor_input(4.0, 3)],
        20,
        3,
    );

    let response: FillResponse = evaluate_conduit_fill(&engine, &request).unwrap();

    assert!((response.total_demand - 399.0).abs() < 1e-9);
    assert!((response.capacity - 320.0).abs() < 1e-9);
    assert_eq!(response.status, "fail");
    assert_eq!(response.run_difficulty.as_deref(), Some("with_bends"));
    assert!(response.recommend_draw_in_box);
    assert_eq!(
        response.advisories,
        vec![String::from(
            "3 bends exceed 180° between draw-in points: fit a draw-in box or split the run"
        )]
    );
    assert_eq!(response.recommended_diameter_mm, Some(25));
    assert!(response.message.contains("use 25mm conduit"));
}

#[test]
fn test_conduit_fill_failure_without_any_passing_size() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest =
        create_conduit_request(vec![conductor_input(16.0, 20)], 50, 2);

    let response: FillResponse = evaluate_conduit_fill(&engine, &request).unwrap();

    assert_eq!(response.status, "fail");
    assert_eq!(response.recommended_diameter_mm, None);
    assert!(response.message.contains("split the run"));
}

#[test]
fn test_long_straight_run_is_derated() {
    let engine: EngineConfig = create_test_engine();
    let mut request: ConduitFillRequest =
        create_conduit_request(vec![conductor_input(1.5, 5)], 20, 0);
    request.run_length_m = Some(12.0);

    let response: FillResponse = evaluate_conduit_fill(&engine, &request).unwrap();

    assert!((response.capacity - 391.0).abs() < 1e-9);
    assert_eq!(
        response.advisories,
        vec![String::from(
            "Straight run of 12m: conduit factor derated by 0.85"
        )]
    );
}

#[test]
fn test_unknown_conductor_size_names_entry() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest = create_conduit_request(
        vec![conductor_input(1.5, 2), conductor_input(35.0, 1)],
        20,
        0,
    );

    let err: ApiError = evaluate_conduit_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::UnsupportedSize { .. }));
    assert_eq!(err.field(), "conductors[1].size_mm2");
}

#[test]
fn test_negative_conductor_size_is_invalid() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest =
        create_conduit_request(vec![conductor_input(-1.5, 2)], 20, 0);

    let err: ApiError = evaluate_conduit_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(err.field(), "conductors[0].size_mm2");
}

#[test]
fn test_empty_conductor_list_is_invalid() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest = create_conduit_request(vec![], 20, 0);

    let err: ApiError = evaluate_conduit_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(err.field(), "conductors");
}

#[test]
fn test_zero_count_names_entry() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest = create_conduit_request(
        vec![conductor_input(1.5, 2), conductor_input(2.5, 0)],
        20,
        0,
    );

    let err: ApiError = evaluate_conduit_fill(&engine, &request).unwrap_err();
    assert_eq!(err.field(), "conductors[1].count");
}

#[test]
fn test_unknown_conduit_diameter_is_unsupported() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitFillRequest =
        create_conduit_request(vec![conductor_input(1.5, 2)], 63, 0);

    let err: ApiError = evaluate_conduit_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::UnsupportedSize { .. }));
    assert_eq!(err.field(), "diameter_mm");
}

#[test]
fn test_trunking_fill_passes() {
    let engine: EngineConfig = create_test_engine();
    let request = create_trunking_request(vec![cable_input(10.0, 10)], 50, 50);

    let response: FillResponse = evaluate_trunking_fill(&engine, &request).unwrap();

    assert!((response.capacity - 1125.0).abs() < 1e-9);
    assert_eq!(response.status, "pass");
    assert_eq!(response.run_difficulty, None);
    assert!(!response.recommend_draw_in_box);
    assert_eq!(response.recommended_diameter_mm, None);
}

#[test]
fn test_trunking_fill_accepts_either_orientation() {
    let engine: EngineConfig = create_test_engine();
    let wide: FillResponse = evaluate_trunking_fill(
        &engine,
        &create_trunking_request(vec![cable_input(8.0, 6)], 75, 50),
    )
    .unwrap();
    let tall: FillResponse = evaluate_trunking_fill(
        &engine,
        &create_trunking_request(vec![cable_input(8.0, 6)], 50, 75),
    )
    .unwrap();

    assert!((wide.capacity - tall.capacity).abs() < 1e-9);
}

#[test]
fn test_trunking_fill_fails_when_over_limit() {
    let engine: EngineConfig = create_test_engine();
    // 20 x 78.54 = 1570.8 > 1125
    let request = create_trunking_request(vec![cable_input(10.0, 20)], 50, 50);

    let response: FillResponse = evaluate_trunking_fill(&engine, &request).unwrap();

    assert_eq!(response.status, "fail");
    assert!(response.message.contains("overfilled"));
}

#[test]
fn test_untabulated_trunking_is_unsupported() {
    let engine: EngineConfig = create_test_engine();
    let request = create_trunking_request(vec![cable_input(8.0, 2)], 60, 40);

    let err: ApiError = evaluate_trunking_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::UnsupportedSize { .. }));
    assert_eq!(err.field(), "width_mm");
}

#[test]
fn test_non_positive_cable_diameter_names_entry() {
    let engine: EngineConfig = create_test_engine();
    let request = create_trunking_request(vec![cable_input(0.0, 2)], 50, 50);

    let err: ApiError = evaluate_trunking_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(err.field(), "cables[0].overall_diameter_mm");
}

#[test]
fn test_conduit_headroom_counts_whole_conductors() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitHeadroomRequest = ConduitHeadroomRequest {
        run: create_conduit_request(vec![conductor_input(1.5, 5)], 20, 0),
        candidate_size_mm2: 2.5,
    };

    let response: HeadroomResponse = conduit_headroom(&engine, &request).unwrap();

    assert_eq!(response.additional, 11);
    assert_eq!(response.message, "11 more 2.5mm² conductors fit in 20mm conduit");
}

#[test]
fn test_conduit_headroom_unknown_candidate() {
    let engine: EngineConfig = create_test_engine();
    let request: ConduitHeadroomRequest = ConduitHeadroomRequest {
        run: create_conduit_request(vec![], 20, 0),
        candidate_size_mm2: 35.0,
    };

    let err: ApiError = conduit_headroom(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::UnsupportedSize { .. }));
    assert_eq!(err.field(), "candidate_size_mm2");
}

#[test]
fn test_trunking_headroom_for_empty_run() {
    let engine: EngineConfig = create_test_engine();
    // 1125 / 78.54 = 14.3
    let request: TrunkingHeadroomRequest = TrunkingHeadroomRequest {
        run: create_trunking_request(vec![], 50, 50),
        candidate_diameter_mm: 10.0,
    };

    let response: HeadroomResponse = trunking_headroom(&engine, &request).unwrap();
    assert_eq!(response.additional, 14);
}

#[test]
fn test_trunking_headroom_rejects_bad_candidate() {
    let engine: EngineConfig = create_test_engine();
    let request: TrunkingHeadroomRequest = TrunkingHeadroomRequest {
        run: create_trunking_request(vec![], 50, 50),
        candidate_diameter_mm: -3.0,
    };

    let err: ApiError = trunking_headroom(&engine, &request).unwrap_err();
    assert_eq!(err.field(), "candidate_diameter_mm");
}

#[test]
fn test_conduit_request_defaults_bends() {
    let request: ConduitFillRequest = serde_json::from_str(
        r#"{"conductors":[{"size_mm2":2.5,"count":3}],"diameter_mm":20}"#,
    )
    .unwrap();

    assert_eq!(request.bend_count, 0);
    assert_eq!(request.run_length_m, None);
}

#[test]
fn test_headroom_request_is_flat() {
    let request: ConduitHeadroomRequest = serde_json::from_str(
        r#"{"conductors":[],"diameter_mm":25,"bend_count":2,"candidate_size_mm2":4.0}"#,
    )
    .unwrap();

    assert_eq!(request.run.diameter_mm, 25);
    assert_eq!(request.run.bend_count, 2);
    assert!((request.candidate_size_mm2 - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_oversized_cable_diameter_is_invalid() {
    let engine: EngineConfig = create_test_engine();
    let request = create_trunking_request(vec![cable_input(1e200, 1)], 100, 50);

    let err: ApiError = evaluate_trunking_fill(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(err.field(), "cables[0].overall_diameter_mm");
}

#[test]
fn test_large_trunking_fill_response_round_trips() {
    let engine: EngineConfig = create_test_engine();
    let request = create_trunking_request(vec![cable_input(1000.0, 1_000_000)], 100, 50);

    let response: FillResponse = evaluate_trunking_fill(&engine, &request).unwrap();
    assert!(response.total_demand.is_finite());
    assert!(response.fill_ratio.is_finite());

    let json: String = serde_json::to_string(&response).unwrap();
    let decoded: FillResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.status, "fail");
    assert!((decoded.fill_ratio - response.fill_ratio).abs() <= response.fill_ratio * 1e-12);
}

#[test]
fn test_trunking_headroom_rejects_vanishing_candidate() {
    let engine: EngineConfig = create_test_engine();
    let request: TrunkingHeadroomRequest = TrunkingHeadroomRequest {
        run: create_trunking_request(vec![], 100, 50),
        candidate_diameter_mm: 1e-200,
    };

    let err: ApiError = trunking_headroom(&engine, &request).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(err.field(), "candidate_diameter_mm");
}
