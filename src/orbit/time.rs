/// Time conversion utilities
use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Utc};

/// Parse an ISO8601 timestamp, normalizing to UTC.
///
/// Accepts a literal trailing 'Z' or a numeric offset. A timestamp without
/// timezone information is treated as UTC.
pub fn parse_iso8601(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = value.parse::<DateTime<Utc>>() {
        return Ok(dt);
    }
    value
        .parse::<NaiveDateTime>()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Convert a UTC datetime to a Julian Day Number.
///
/// Gregorian-calendar algorithm from Astronomical Algorithms (Meeus).
pub fn datetime_to_julian_day(dt: &DateTime<Utc>) -> f64 {
    let mut year = dt.year() as f64;
    let mut month = dt.month() as f64;
    let day = dt.day() as f64;

    // Time as fraction of day
    let day_fraction = (dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0)
        / 24.0;

    // January and February count as months 13 and 14 of the previous year
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + day_fraction
        + b
        - 1524.5
}

/// Convert a Julian Day Number back to a UTC datetime.
///
/// Reverses the Meeus algorithm, including the Gregorian-cutover branch at
/// JD 2299161. Returns None if the computed calendar fields are invalid.
pub fn julian_day_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    // Extract time from the fractional day
    let day_int = day.floor();
    let hours = (day - day_int) * 24.0;
    let hour = hours.floor();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.floor();
    let seconds = (minutes - minute) * 60.0;
    let second = seconds.floor();
    let microsecond = ((seconds - second) * 1e6).floor();

    Utc.with_ymd_and_hms(
        year as i32,
        month as u32,
        day_int as u32,
        hour as u32,
        minute as u32,
        second as u32,
    )
    .single()?
    .with_nanosecond(microsecond as u32 * 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_z_suffix() {
        let dt = parse_iso8601("2026-01-01T00:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_numeric_offset_normalizes_to_utc() {
        let dt = parse_iso8601("2026-01-01T05:30:00+05:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_assumed_utc() {
        let dt = parse_iso8601("2026-06-15T12:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso8601("not-a-date").is_err());
        assert!(parse_iso8601("2026-13-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_j2000_epoch() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(datetime_to_julian_day(&epoch), 2_451_545.0);
    }

    #[test]
    fn test_known_julian_days() {
        // Reference values from Meeus, Astronomical Algorithms, ch. 7
        let dt = Utc.with_ymd_and_hms(1987, 1, 27, 0, 0, 0).unwrap();
        assert!((datetime_to_julian_day(&dt) - 2_446_822.5).abs() < 1e-9);

        let dt = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap();
        assert!((datetime_to_julian_day(&dt) - 2_451_179.5).abs() < 1e-9);

        let dt = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
        assert!((datetime_to_julian_day(&dt) - 2_488_069.5).abs() < 1e-9);
    }

    #[test]
    fn test_sputnik_launch_date() {
        // JD 2436116.31 is 1957 October 4.81 (Meeus example 7.c)
        let dt = julian_day_to_datetime(2_436_116.31).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1957, 10, 4));
        assert_eq!(dt.hour(), 19);
    }

    #[test]
    fn test_gregorian_cutover_branch() {
        // First Gregorian day
        let dt = julian_day_to_datetime(2_299_160.5).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1582, 10, 15));
        // Last Julian-calendar day before the cutover
        let dt = julian_day_to_datetime(2_299_159.5).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1582, 10, 4));
    }

    #[test]
    fn test_round_trip_1950_to_2050() {
        let cases = [
            Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap(),
            Utc.with_ymd_and_hms(2000, 2, 29, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2026, 8, 6, 6, 30, 15).unwrap(),
            Utc.with_ymd_and_hms(2050, 12, 31, 12, 34, 56).unwrap(),
        ];
        for dt in cases {
            let back = julian_day_to_datetime(datetime_to_julian_day(&dt)).unwrap();
            let drift = (back - dt).num_milliseconds().abs();
            assert!(drift < 1000, "{dt} drifted {drift} ms through the round trip");
        }
    }
}
