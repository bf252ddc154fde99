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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cineseat_api::{
    ApiError, ApplySessionRequest, ApplySessionResponse, CreateReservationRequest,
    CreateReservationResponse, Engine, EngineConfig, QuoteRequest, QuoteResponse,
    ReleaseDatesRequest, ReleaseDatesResponse, ScreeningTimesRequest, ScreeningTimesResponse,
    SeatMapRequest, SeatMapResponse, StartSessionRequest, StartSessionResponse,
    apply_session_command, create_reservation, list_release_dates, list_screening_times,
    quote_price, seat_map, start_session,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Cineseat Server - HTTP server for the Cineseat booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON engine configuration file. If not provided, uses the defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The engine is read-only; sessions travel in request bodies, so no lock is needed.
#[derive(Clone)]
struct AppState {
    /// The validated engine configuration.
    engine: Arc<Engine>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok`.
    status: String,
    /// The server version.
    version: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for GET `/release_dates` endpoint.
///
/// Lists the bookable dates of a screening period.
async fn handle_release_dates(
    Query(query): Query<ReleaseDatesRequest>,
) -> Result<Json<ReleaseDatesResponse>, HttpError> {
    info!(
        from = %query.from,
        to = %query.to,
        "Handling release_dates request"
    );

    let response: ReleaseDatesResponse = list_release_dates(&query)?;
    Ok(Json(response))
}

/// Handler for GET `/screening_times` endpoint.
async fn handle_screening_times(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ScreeningTimesRequest>,
) -> Result<Json<ScreeningTimesResponse>, HttpError> {
    info!(date = %query.date, "Handling screening_times request");

    let response: ScreeningTimesResponse = list_screening_times(&app_state.engine, &query)?;
    Ok(Json(response))
}

/// Handler for POST `/seat_map` endpoint.
async fn handle_seat_map(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SeatMapRequest>,
) -> Result<Json<SeatMapResponse>, HttpError> {
    info!(picked = req.picked.len(), "Handling seat_map request");

    let response: SeatMapResponse = seat_map(&app_state.engine, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/quote` endpoint.
///
/// Prices a set of seats without starting a session.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, HttpError> {
    info!(
        date = %req.date,
        seats = req.seats.len(),
        "Handling quote request"
    );

    let response: QuoteResponse = quote_price(&app_state.engine, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/session/start` endpoint.
async fn handle_start_session(
    Json(req): Json<StartSessionRequest>,
) -> Result<Json<StartSessionResponse>, HttpError> {
    info!(
        movie = %req.movie.title,
        theater = %req.theater,
        "Handling session start request"
    );

    let response: StartSessionResponse = start_session(&req)?;
    Ok(Json(response))
}

/// Handler for POST `/session/apply` endpoint.
///
/// Applies one command to the session carried in the request body.
async fn handle_apply_session(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ApplySessionRequest>,
) -> Result<Json<ApplySessionResponse>, HttpError> {
    info!(
        movie = %req.session.movie.title,
        command = ?req.command,
        "Handling session apply request"
    );

    let response: ApplySessionResponse = apply_session_command(&app_state.engine, &req)?;

    if let Some(reservation) = &response.reservation {
        info!(
            movie = %reservation.movie_title,
            date = %reservation.date,
            time = %reservation.time,
            total = reservation.total,
            "Session confirmed"
        );
    }

    Ok(Json(response))
}

/// Handler for POST `/reservations` endpoint.
///
/// Creates a reservation from a complete selection in one step.
async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<Json<CreateReservationResponse>, HttpError> {
    info!(
        movie = %req.movie.title,
        date = %req.date,
        time = %req.time,
        ticket_count = req.ticket_count,
        "Handling create_reservation request"
    );

    let response: CreateReservationResponse = create_reservation(&app_state.engine, &req)?;

    info!(
        total = response.reservation.total,
        reminder_at = %response.reservation.reminder_at,
        "Successfully created reservation"
    );

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/release_dates", get(handle_release_dates))
        .route("/screening_times", get(handle_screening_times))
        .route("/seat_map", post(handle_seat_map))
        .route("/quote", post(handle_quote))
        .route("/session/start", post(handle_start_session))
        .route("/session/apply", post(handle_apply_session))
        .route("/reservations", post(handle_create_reservation))
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

    info!("Initializing Cineseat Server");

    let config: EngineConfig = if let Some(path) = &args.config {
        info!("Loading engine configuration from: {}", path.display());
        EngineConfig::load(path).inspect_err(|e| error!(error = %e, "Configuration error"))?
    } else {
        info!("Using default engine configuration");
        EngineConfig::default()
    };

    let engine: Engine = config
        .build()
        .inspect_err(|e| error!(error = %e, "Configuration error"))?;
    info!(
        rows = engine.rules.grid.rows(),
        columns = engine.rules.grid.columns(),
        base_price_per_seat = engine.rules.base_price_per_seat,
        "Engine ready"
    );

    let app_state: AppState = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
