/// HTTP request handlers
use crate::domain::{
    CircularEclipseRequest, CircularEclipseResponse, Health, YearlyEclipseRequest,
    YearlyEclipseResponse,
};
use crate::errors::ApiError;
use crate::services::EclipseService;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub eclipse_service: Arc<EclipseService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Compute eclipse duration for a circular orbit from altitude and beta angle
pub async fn compute_circular_eclipse(
    State(state): State<AppState>,
    Json(request): Json<CircularEclipseRequest>,
) -> Result<Json<SuccessResponse<CircularEclipseResponse>>, ApiError> {
    let response = state.eclipse_service.circular(&request)?;
    Ok(Json(SuccessResponse::new(response)))
}

/// Compute the beta-angle / eclipse-duration history over a time span
pub async fn compute_yearly_eclipse(
    State(state): State<AppState>,
    Json(request): Json<YearlyEclipseRequest>,
) -> Result<Json<SuccessResponse<YearlyEclipseResponse>>, ApiError> {
    let response = state.eclipse_service.yearly(&request)?;
    Ok(Json(SuccessResponse::new(response)))
}
