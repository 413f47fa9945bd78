/// Business logic services layer
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use tracing::debug;

use crate::domain::{
    CircularEclipseRequest, CircularEclipseResponse, EclipseSample, EclipseSummary,
    YearlyEclipseRequest, YearlyEclipseResponse,
};
use crate::errors::{ApiError, ApiResult};
use crate::orbit::eclipse::{
    beta_critical_deg, eclipse_duration_sec, mean_motion, orbit_radius_km, orbital_period_sec,
};
use crate::orbit::sun::{beta_angle_deg, orbit_normal_eci};
use crate::orbit::time::parse_iso8601;
use crate::utils::round4;

/// Hard cap on simulated steps: 730 days at hourly samples.
const MAX_TOTAL_STEPS: i64 = 730 * 24;

/// Eclipse computation service
pub struct EclipseService;

impl EclipseService {
    pub fn new() -> Self {
        Self
    }

    /// Single-orbit eclipse geometry for a given altitude and beta angle
    pub fn circular(&self, request: &CircularEclipseRequest) -> ApiResult<CircularEclipseResponse> {
        if request.altitude_km <= 0.0 {
            return Err(ApiError::validation("altitude_km", "must be greater than 0"));
        }
        if !(-90.0..=90.0).contains(&request.beta_deg) {
            return Err(ApiError::validation(
                "beta_deg",
                "must be between -90 and 90 degrees",
            ));
        }

        let r_km = orbit_radius_km(request.altitude_km);
        let n_rad_s = mean_motion(r_km);
        let period_sec = orbital_period_sec(n_rad_s);
        let eclipse_sec = eclipse_duration_sec(r_km, request.beta_deg);

        Ok(CircularEclipseResponse {
            altitude_km: request.altitude_km,
            beta_deg: request.beta_deg,
            orbit_radius_km: r_km,
            period_sec,
            period_min: period_sec / 60.0,
            beta_crit_deg: beta_critical_deg(r_km),
            eclipse_sec,
            eclipse_min: eclipse_sec / 60.0,
        })
    }

    /// Beta-angle / eclipse-duration history over a time span, with summary
    /// statistics accumulated in a single forward pass
    pub fn yearly(&self, request: &YearlyEclipseRequest) -> ApiResult<YearlyEclipseResponse> {
        let total_steps = validate_yearly(request)?;

        let start = parse_iso8601(&request.start_utc).map_err(|source| ApiError::Parse {
            field: "start_utc",
            source,
        })?;

        let r_km = orbit_radius_km(request.altitude_km);
        let n_rad_s = mean_motion(r_km);
        let period_sec = orbital_period_sec(n_rad_s);
        let beta_crit_deg = beta_critical_deg(r_km);

        // Fixed for the whole simulation: no RAAN precession
        let h_hat = orbit_normal_eci(request.inclination_deg, request.raan_deg);

        // Whole-nanosecond step; 168 h fits an i64 with ample room
        let step = Duration::nanoseconds((request.step_hours * 3_600_000_000_000.0).round() as i64);

        let mut samples = Vec::with_capacity(total_steps as usize + 1);
        let mut max_eclipse_min = 0.0_f64;
        let mut min_eclipse_min: Option<f64> = None;
        let mut tracker = DayTracker::new();

        let mut current = start;
        for _ in 0..=total_steps {
            let beta_deg = beta_angle_deg(&current, &h_hat);
            let eclipse_min = eclipse_duration_sec(r_km, beta_deg) / 60.0;

            samples.push(EclipseSample {
                t_utc: format_utc(&current),
                beta_deg: round4(beta_deg),
                eclipse_min: round4(eclipse_min),
            });

            // Statistics run on the unrounded values
            if eclipse_min > max_eclipse_min {
                max_eclipse_min = eclipse_min;
            }
            if eclipse_min > 0.0 && min_eclipse_min.map_or(true, |m| eclipse_min < m) {
                min_eclipse_min = Some(eclipse_min);
            }
            tracker.observe((current - start).num_days(), eclipse_min > 0.0);

            current += step;
        }

        let days_with_eclipse = tracker.finish();
        debug!(
            samples = samples.len(),
            days_with_eclipse, "eclipse history simulation complete"
        );

        Ok(YearlyEclipseResponse {
            altitude_km: request.altitude_km,
            inclination_deg: request.inclination_deg,
            raan_deg: request.raan_deg,
            orbit_radius_km: r_km,
            period_sec,
            period_min: round4(period_sec / 60.0),
            beta_crit_deg: round4(beta_crit_deg),
            samples,
            summary: EclipseSummary {
                max_eclipse_min: round4(max_eclipse_min),
                min_eclipse_min: round4(min_eclipse_min.unwrap_or(0.0)),
                days_with_eclipse,
            },
        })
    }
}

impl Default for EclipseService {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every yearly-request bound before touching the orbit math.
///
/// Returns the step count, already verified against the sample cap.
fn validate_yearly(request: &YearlyEclipseRequest) -> ApiResult<i64> {
    if request.altitude_km <= 0.0 {
        return Err(ApiError::validation("altitude_km", "must be greater than 0"));
    }
    if !(0.0..=180.0).contains(&request.inclination_deg) {
        return Err(ApiError::validation(
            "inclination_deg",
            "must be between 0 and 180 degrees",
        ));
    }
    if !(0.0..=360.0).contains(&request.raan_deg) {
        return Err(ApiError::validation(
            "raan_deg",
            "must be between 0 and 360 degrees",
        ));
    }
    if !(1..=730).contains(&request.days) {
        return Err(ApiError::validation("days", "must be between 1 and 730"));
    }
    if request.step_hours <= 0.0 || request.step_hours > 168.0 {
        return Err(ApiError::validation(
            "step_hours",
            "must be greater than 0 and at most 168",
        ));
    }

    let total_steps = (request.days as f64 * 24.0 / request.step_hours).floor() as i64;
    if total_steps > MAX_TOTAL_STEPS {
        return Err(ApiError::validation(
            "step_hours",
            format!(
                "{} days at {} h steps yields {} samples, over the limit of {}",
                request.days,
                request.step_hours,
                total_steps + 1,
                MAX_TOTAL_STEPS + 1
            ),
        ));
    }

    Ok(total_steps)
}

/// Render a UTC timestamp with a literal Z suffix.
fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Day-boundary bookkeeping behind the days_with_eclipse statistic.
///
/// The day index is the elapsed whole-day count since the simulation start.
/// A day is counted once its index is left behind (or the run ends) with at
/// least one eclipsed sample observed.
enum DayState {
    Idle,
    Tracking { day_index: i64, has_eclipse: bool },
}

struct DayTracker {
    state: DayState,
    days_with_eclipse: u32,
}

impl DayTracker {
    fn new() -> Self {
        Self {
            state: DayState::Idle,
            days_with_eclipse: 0,
        }
    }

    fn observe(&mut self, day_index: i64, eclipsed: bool) {
        match self.state {
            DayState::Idle => {
                self.state = DayState::Tracking {
                    day_index,
                    has_eclipse: eclipsed,
                };
            }
            DayState::Tracking {
                day_index: current,
                has_eclipse,
            } => {
                if day_index == current {
                    self.state = DayState::Tracking {
                        day_index: current,
                        has_eclipse: has_eclipse || eclipsed,
                    };
                } else {
                    if has_eclipse {
                        self.days_with_eclipse += 1;
                    }
                    self.state = DayState::Tracking {
                        day_index,
                        has_eclipse: eclipsed,
                    };
                }
            }
        }
    }

    /// Flush the day in progress after the last sample.
    fn finish(self) -> u32 {
        match self.state {
            DayState::Tracking {
                has_eclipse: true, ..
            } => self.days_with_eclipse + 1,
            _ => self.days_with_eclipse,
        }
    }
}
