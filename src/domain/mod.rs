/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for a single-orbit eclipse computation
#[derive(Debug, Clone, Deserialize)]
pub struct CircularEclipseRequest {
    pub altitude_km: f64,
    pub beta_deg: f64,
}

/// Single-orbit eclipse geometry result
#[derive(Debug, Clone, Serialize)]
pub struct CircularEclipseResponse {
    pub altitude_km: f64,
    pub beta_deg: f64,
    pub orbit_radius_km: f64,
    pub period_sec: f64,
    pub period_min: f64,
    pub beta_crit_deg: f64,
    pub eclipse_sec: f64,
    pub eclipse_min: f64,
}

/// Request for an eclipse-duration history over a time span
#[derive(Debug, Clone, Deserialize)]
pub struct YearlyEclipseRequest {
    pub altitude_km: f64,
    pub inclination_deg: f64,
    pub raan_deg: f64,
    #[serde(default = "default_start_utc")]
    pub start_utc: String,
    #[serde(default = "default_days")]
    pub days: i64,
    #[serde(default = "default_step_hours")]
    pub step_hours: f64,
}

fn default_start_utc() -> String {
    "2026-01-01T00:00:00Z".to_string()
}

fn default_days() -> i64 {
    365
}

fn default_step_hours() -> f64 {
    24.0
}

/// One sample point in the eclipse-duration history
#[derive(Debug, Clone, Serialize)]
pub struct EclipseSample {
    pub t_utc: String,
    pub beta_deg: f64,
    pub eclipse_min: f64,
}

/// Summary statistics over a sample series
#[derive(Debug, Clone, Serialize)]
pub struct EclipseSummary {
    pub max_eclipse_min: f64,
    /// Minimum strictly-positive eclipse duration; 0 when no sample eclipses
    pub min_eclipse_min: f64,
    pub days_with_eclipse: u32,
}

/// Eclipse-duration history with derived orbit scalars
#[derive(Debug, Clone, Serialize)]
pub struct YearlyEclipseResponse {
    pub altitude_km: f64,
    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub orbit_radius_km: f64,
    pub period_sec: f64,
    pub period_min: f64,
    pub beta_crit_deg: f64,
    pub samples: Vec<EclipseSample>,
    pub summary: EclipseSummary,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
