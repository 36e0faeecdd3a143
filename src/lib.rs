//! Live GPS position/speed tracking with sudden-deceleration alerting.
//!
//! A [`Controller`] subscribes to a [`LocationFeed`], derives a speed for
//! every delivered [`PositionFix`] (provider-reported when available,
//! displacement/time otherwise), pushes position and speed to a
//! [`DisplaySink`] and raises a [`SpeedAlert`] through an [`AlertSink`] when
//! the speed drops by at least 10 km/h between two consecutive fixes.
//!
//! The platform services are capability traits injected at construction, so
//! the whole pipeline runs against fakes in tests.
//!

// Re-export these modules for a shorter import path.
//
pub use controller::*;
pub use detect::*;
pub use error::*;
pub use feed::*;
pub use fix::*;
pub use sink::*;
pub use speed::*;

mod controller;
mod detect;
mod error;
mod feed;
mod fix;
pub mod logging;
mod sink;
mod speed;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
