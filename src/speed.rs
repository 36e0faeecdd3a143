//! Speed estimation module.
//!
//! A provider-reported speed is authoritative.  When the provider reports 0
//! (common on consumer GPS chips between proper velocity solutions) we derive
//! one from the displacement between the previous and current fixes and the
//! elapsed time.
//!

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::fix::PositionFix;

/// m/s to km/h.
pub const MS_TO_KMH: f64 = 3.6;

/// Estimate the speed at `current`, in m/s.
///
/// - a non-zero provider-reported speed is returned verbatim,
/// - with no previous fix there is no basis for estimation, speed is 0,
/// - otherwise haversine distance over elapsed seconds since `previous_stamp`.
///
/// A non-positive time delta (two fixes carrying the same timestamp) would
/// divide by zero; it is defined here as 0 m/s instead.
///
#[tracing::instrument]
pub fn estimate(
    current: &PositionFix,
    previous: Option<&PositionFix>,
    previous_stamp: DateTime<Utc>,
) -> f64 {
    if current.speed != 0. {
        return current.speed;
    }

    let previous = match previous {
        Some(previous) => previous,
        None => return 0.,
    };

    let elapsed_s = (current.time - previous_stamp).num_milliseconds() as f64 / 1000.;
    if elapsed_s <= 0. {
        warn!("degenerate time delta ({elapsed_s} s), speed set to 0");
        return 0.;
    }

    current.distance_to(previous) / elapsed_s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lat: f64, lon: f64, speed: f64, millis: i64) -> PositionFix {
        PositionFix::from_millis(lat, lon, speed, millis).unwrap()
    }

    #[inline]
    fn shorten(v: f64) -> String {
        format!("{:.3}", v)
    }

    #[test]
    fn test_no_previous_fix_is_zero() {
        let cur = fix(50.8, 4.4, 0., 5_000);

        assert_eq!(0., estimate(&cur, None, DateTime::UNIX_EPOCH));
    }

    #[test]
    fn test_reported_speed_is_authoritative() {
        let prev = fix(50.8, 4.4, 0., 0);
        let cur = fix(50.9, 4.5, 12.5, 2_000);

        // Whatever the displacement says, the provider value wins.
        //
        assert_eq!(12.5, estimate(&cur, Some(&prev), prev.time));
        assert_eq!(12.5, estimate(&cur, None, DateTime::UNIX_EPOCH));
    }

    #[test]
    fn test_derived_from_displacement() {
        // One degree along the meridian in 1000 s.
        //
        let prev = fix(0., 0., 0., 0);
        let cur = fix(1., 0., 0., 1_000_000);

        let speed = estimate(&cur, Some(&prev), prev.time);
        assert_eq!(shorten(111.195), shorten(speed));
    }

    #[test]
    fn test_monotonic_in_distance() {
        let prev = fix(0., 0., 0., 0);
        let near = fix(0.001, 0., 0., 10_000);
        let far = fix(0.002, 0., 0., 10_000);

        assert!(estimate(&far, Some(&prev), prev.time) > estimate(&near, Some(&prev), prev.time));
    }

    #[test]
    fn test_monotonic_in_elapsed_time() {
        let prev = fix(0., 0., 0., 0);
        let fast = fix(0.001, 0., 0., 5_000);
        let slow = fix(0.001, 0., 0., 20_000);

        assert!(estimate(&fast, Some(&prev), prev.time) > estimate(&slow, Some(&prev), prev.time));
    }

    #[test]
    fn test_degenerate_time_delta_is_zero() {
        let prev = fix(0., 0., 0., 42_000);
        let cur = fix(0.001, 0., 0., 42_000);

        let speed = estimate(&cur, Some(&prev), prev.time);
        assert_eq!(0., speed);
        assert!(speed.is_finite());
    }
}
