/// Sun position and beta angle calculations
use chrono::{DateTime, Utc};

use crate::orbit::time::datetime_to_julian_day;
use crate::utils::{dot, norm, Vec3};

/// Approximate Sun unit vector in the Earth-Centered Inertial frame.
///
/// Low-precision series referred to the J2000.0 epoch, accurate to roughly
/// 0.01 degrees in ecliptic longitude. Sufficient for year-scale eclipse
/// prediction, not for precision pointing.
pub fn sun_vector_eci(dt: &DateTime<Utc>) -> Vec3 {
    let jd = datetime_to_julian_day(dt);

    // Julian centuries from J2000.0
    let t = (jd - 2_451_545.0) / 36_525.0;

    // Mean longitude (degrees)
    let l0 = (280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t).rem_euclid(360.0);

    // Mean anomaly (degrees)
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).rem_euclid(360.0);
    let m_rad = m.to_radians();

    // Equation of center (degrees)
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    // True longitude (degrees)
    let sun_lon = (l0 + c).to_radians();

    // Obliquity of the ecliptic (degrees)
    let epsilon =
        (23.439_291 - 0.013_004_2 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t).to_radians();

    // Ecliptic position at unit distance, rotated into the equatorial frame
    let v: Vec3 = [
        sun_lon.cos(),
        sun_lon.sin() * epsilon.cos(),
        sun_lon.sin() * epsilon.sin(),
    ];

    let mag = norm(&v);
    [v[0] / mag, v[1] / mag, v[2] / mag]
}

/// Orbit normal (angular momentum direction) unit vector in ECI.
///
/// For inclination i and RAAN O: h = (sin i sin O, -sin i cos O, cos i).
/// Unit length by construction.
pub fn orbit_normal_eci(inclination_deg: f64, raan_deg: f64) -> Vec3 {
    let i = inclination_deg.to_radians();
    let raan = raan_deg.to_radians();
    [i.sin() * raan.sin(), -i.sin() * raan.cos(), i.cos()]
}

/// Beta angle between the Sun direction and the orbital plane, in degrees.
///
/// beta = asin(sun . h), positive when the Sun lies on the orbit-normal side
/// of the plane.
pub fn beta_angle_deg(dt: &DateTime<Utc>, orbit_normal: &Vec3) -> f64 {
    let sun = sun_vector_eci(dt);
    dot(&sun, orbit_normal).clamp(-1.0, 1.0).asin().to_degrees()
}
