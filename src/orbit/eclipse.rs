/// Eclipse duration calculations for circular orbits
use std::f64::consts::PI;

/// Mean Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth gravitational parameter (km³/s²)
pub const EARTH_MU: f64 = 398600.4418;

/// Orbital radius from altitude above the surface (km).
pub fn orbit_radius_km(altitude_km: f64) -> f64 {
    EARTH_RADIUS_KM + altitude_km
}

/// Mean motion n = sqrt(mu / r³) of a circular orbit (rad/s).
pub fn mean_motion(radius_km: f64) -> f64 {
    (EARTH_MU / radius_km.powi(3)).sqrt()
}

/// Orbital period T = 2*pi / n (s).
pub fn orbital_period_sec(mean_motion: f64) -> f64 {
    2.0 * PI / mean_motion
}

/// Critical beta angle beta_crit = asin(Re / r), in degrees.
///
/// Above this |beta| the orbit never intersects Earth's shadow.
pub fn beta_critical_deg(radius_km: f64) -> f64 {
    (EARTH_RADIUS_KM / radius_km).clamp(-1.0, 1.0).asin().to_degrees()
}

/// Eclipse duration per orbit under the cylindrical shadow model (s).
///
/// Eclipse half-angle: theta_e = acos(sqrt(r² - Re²) / (r cos beta)),
/// duration = 2 theta_e / n. Returns 0 when no eclipse occurs.
pub fn eclipse_duration_sec(radius_km: f64, beta_deg: f64) -> f64 {
    if beta_deg.abs() >= beta_critical_deg(radius_km) {
        return 0.0;
    }

    let cos_beta = beta_deg.to_radians().cos();
    // Shadow chord vanishes as beta approaches ±90
    if cos_beta.abs() < 1e-10 {
        return 0.0;
    }

    let r = radius_km;
    let h = (r * r - EARTH_RADIUS_KM * EARTH_RADIUS_KM).sqrt();

    let cos_theta_e = h / (r * cos_beta);
    let theta_e = if cos_theta_e >= 1.0 {
        // Numerically grazing the critical-beta boundary
        return 0.0;
    } else if cos_theta_e <= -1.0 {
        // Full-orbit shadow, unreachable for physical orbits
        PI
    } else {
        cos_theta_e.acos()
    };

    2.0 * theta_e / mean_motion(radius_km)
}
