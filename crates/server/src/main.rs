// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

use axum::{
    Json, Router,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cablefill_api::{
    ApiError, ConduitFillRequest, ConduitHeadroomRequest, EngineConfig, FillResponse,
    HeadroomResponse, PolicyConfig, TablesResponse, TrunkingFillRequest, TrunkingHeadroomRequest,
    conduit_headroom, evaluate_conduit_fill, evaluate_trunking_fill, get_tables,
    trunking_headroom,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Cablefill Server - conduit and trunking fill checks over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to a JSON policy file. If not provided, the default policy is used.
    #[arg(long)]
    policy: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// The engine configuration is immutable after startup, so handlers share
/// it without locking.
#[derive(Clone)]
struct AppState {
    /// Reference tables and bend policy.
    engine: Arc<EngineConfig>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// The request field the error refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The request field at fault, if known.
    field: Option<String>,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            field: self.field,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedSize { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        warn!(field = err.field(), error = %err, "Rejected request");
        Self {
            status,
            field: Some(err.field().to_string()),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            field: None,
            message: rejection.body_text(),
        }
    }
}

/// Handler for GET `/tables` endpoint.
async fn handle_get_tables(
    AxumState(app_state): AxumState<AppState>,
) -> Json<TablesResponse> {
    info!("Handling get_tables request");
    Json(get_tables(&app_state.engine))
}

/// Handler for POST `/fill/conduit` endpoint.
async fn handle_conduit_fill(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ConduitFillRequest>, JsonRejection>,
) -> Result<Json<FillResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        diameter_mm = req.diameter_mm,
        bend_count = req.bend_count,
        entries = req.conductors.len(),
        "Handling conduit_fill request"
    );

    let response: FillResponse = evaluate_conduit_fill(&app_state.engine, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/fill/trunking` endpoint.
async fn handle_trunking_fill(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<TrunkingFillRequest>, JsonRejection>,
) -> Result<Json<FillResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        width_mm = req.width_mm,
        height_mm = req.height_mm,
        entries = req.cables.len(),
        "Handling trunking_fill request"
    );

    let response: FillResponse = evaluate_trunking_fill(&app_state.engine, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/fill/conduit/headroom` endpoint.
async fn handle_conduit_headroom(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ConduitHeadroomRequest>, JsonRejection>,
) -> Result<Json<HeadroomResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        diameter_mm = req.run.diameter_mm,
        candidate_size_mm2 = req.candidate_size_mm2,
        "Handling conduit_headroom request"
    );

    let response: HeadroomResponse = conduit_headroom(&app_state.engine, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/fill/trunking/headroom` endpoint.
async fn handle_trunking_headroom(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<TrunkingHeadroomRequest>, JsonRejection>,
) -> Result<Json<HeadroomResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        width_mm = req.run.width_mm,
        height_mm = req.run.height_mm,
        candidate_diameter_mm = req.candidate_diameter_mm,
        "Handling trunking_headroom request"
    );

    let response: HeadroomResponse = trunking_headroom(&app_state.engine, &req)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/tables", get(handle_get_tables))
        .route("/fill/conduit", post(handle_conduit_fill))
        .route("/fill/trunking", post(handle_trunking_fill))
        .route("/fill/conduit/headroom", post(handle_conduit_headroom))
        .route("/fill/trunking/headroom", post(handle_trunking_headroom))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cablefill Server");

    let engine: EngineConfig = if let Some(policy_path) = &args.policy {
        info!("Loading policy from: {}", policy_path.display());
        PolicyConfig::load(policy_path)?.into_engine()?
    } else {
        info!("Using default policy");
        EngineConfig::default()
    };
    info!(
        edition = engine.tables.edition(),
        single_bend = ?engine.policy.single_bend,
        trunking_fill_limit = engine.tables.trunking_fill_limit(),
        "Engine configured"
    );

    let app_state: AppState = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
