//! Position fix module.
//!
//! A `PositionFix` is one reported position+velocity sample from a location
//! provider: WGS84 coordinates, the instantaneous speed if the provider has
//! one (0 otherwise) and the sampling timestamp.
//!

use chrono::{DateTime, TimeZone, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, for great-circle distances.
const EARTH_RADIUS_M: f64 = 6_371_000.;

/// One position+velocity sample from a location provider.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Provider-reported speed in m/s, 0 when unavailable
    pub speed: f64,
    /// Sampling timestamp
    pub time: DateTime<Utc>,
}

impl PositionFix {
    /// Build a fix from raw parts.
    ///
    pub fn new(latitude: f64, longitude: f64, speed: f64, time: DateTime<Utc>) -> Self {
        PositionFix {
            latitude,
            longitude,
            speed,
            time,
        }
    }

    /// Build a fix from a millisecond epoch timestamp, the unit providers
    /// report on the wire.
    ///
    pub fn from_millis(latitude: f64, longitude: f64, speed: f64, millis: i64) -> Result<Self> {
        let time = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| eyre!("invalid timestamp {millis} ms"))?;
        Ok(Self::new(latitude, longitude, speed, time))
    }

    /// Great-circle surface distance to another fix, in meters (haversine).
    ///
    pub fn distance_to(&self, other: &Self) -> f64 {
        let (lat1, lon1) = (self.latitude.to_radians(), self.longitude.to_radians());
        let (lat2, lon2) = (other.latitude.to_radians(), other.longitude.to_radians());

        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;

        let a = (dlat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.).sin().powi(2);
        let c = 2. * a.sqrt().asin();

        EARTH_RADIUS_M * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn shorten(v: f64) -> String {
        format!("{:.3}", v)
    }

    fn fix_at(lat: f64, lon: f64) -> PositionFix {
        PositionFix::new(lat, lon, 0., DateTime::UNIX_EPOCH)
    }

    #[test]
    fn test_from_millis() -> Result<()> {
        let fix = PositionFix::from_millis(50.8, 4.4, 1.5, 1_000)?;

        assert_eq!(1_000, fix.time.timestamp_millis());
        assert_eq!(shorten(50.8), shorten(fix.latitude));
        assert_eq!(shorten(1.5), shorten(fix.speed));
        Ok(())
    }

    #[test]
    fn test_distance_same_point() {
        let a = fix_at(54.7, -6.2);

        assert_eq!(shorten(0.), shorten(a.distance_to(&a)));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = fix_at(50.8, 4.4);
        let b = fix_at(50.9, 4.5);

        assert_eq!(shorten(a.distance_to(&b)), shorten(b.distance_to(&a)));
    }

    #[test]
    fn test_distance_one_degree_meridian() {
        // One degree of latitude along a meridian is ~111.19 km on the
        // spherical model.
        //
        let a = fix_at(0., 0.);
        let b = fix_at(1., 0.);

        let d = a.distance_to(&b);
        assert_eq!(shorten(111_194.927), shorten(d));
    }
}
