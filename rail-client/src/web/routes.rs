//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::api::ApiError;
use crate::stations::ResolveError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/resolve", get(resolve_station))
        .route("/api/departures", get(departures))
        .route("/api/routes", get(routes))
        .route("/api/routes/next", get(next_departures))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all station names.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let stations = state.api.station_names().await?;
    Ok(Json(StationListResponse { stations }))
}

/// Resolve a possibly misspelled station name to its code.
async fn resolve_station(
    State(state): State<AppState>,
    Query(req): Query<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    let station = state
        .api
        .resolver()
        .resolve_station(&req.name)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ResolveResponse {
        corrected: station.name != req.name,
        input: req.name,
        name: station.name,
        code: station.code.to_string(),
    }))
}

/// Real-time departures from a station.
async fn departures(
    State(state): State<AppState>,
    Query(req): Query<DeparturesRequest>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let departures = state.api.departures(&req.station).await?;
    Ok(Json(DeparturesResponse { departures }))
}

/// Routes between two stations.
async fn routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let routes = state
        .api
        .routes(&req.from, &req.to, req.time.as_deref(), req.date.as_deref())
        .await?;
    Ok(Json(RoutesResponse { routes }))
}

/// Routes between two stations departing within the next hour.
async fn next_departures(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let routes = state
        .api
        .next_departures(&req.from, &req.to, req.time.as_deref(), req.date.as_deref())
        .await?;
    Ok(Json(RoutesResponse { routes }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Resolve(ResolveError::InvalidStation(_)) => AppError::NotFound {
                message: e.to_string(),
            },
            ApiError::Time(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            ApiError::Resolve(ResolveError::Provider(_)) | ApiError::Provider(_) => {
                AppError::BadGateway {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => {
                warn!(error = %message, "provider request failed");
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
