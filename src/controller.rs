//! The controller wires a location feed to the display and alert sinks.
//!
//! It owns the only mutable state in the crate and processes fixes strictly
//! one at a time: previous fix, previous timestamp and previous displayed
//! speed are read-modify-written on every delivery.
//!

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::detect::DecreaseDetector;
use crate::error::FeedError;
use crate::feed::{FeedRequest, LocationFeed, Subscription};
use crate::fix::PositionFix;
use crate::sink::{AlertSink, DisplaySink, SpeedAlert};
use crate::speed::{self, MS_TO_KMH};

/// Everything remembered between two fixes.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerState {
    /// Last fix received, if any
    previous_fix: Option<PositionFix>,
    /// Timestamp the next estimation measures elapsed time against
    previous_stamp: DateTime<Utc>,
    /// Last displayed speed in km/h
    previous_speed_kmh: f64,
}

impl Default for ControllerState {
    fn default() -> Self {
        ControllerState {
            previous_fix: None,
            previous_stamp: DateTime::UNIX_EPOCH,
            previous_speed_kmh: 0.,
        }
    }
}

/// Orchestrates the per-fix update cycle.
///
/// A `Controller` you still hold is unsubscribed; [`Controller::subscribe`]
/// moves it into the feed's handler and returns the cancellation handle.
///
#[derive(Debug)]
pub struct Controller<A, D> {
    detector: DecreaseDetector,
    alerts: A,
    display: D,
    state: ControllerState,
}

impl<A, D> Controller<A, D>
where
    A: AlertSink,
    D: DisplaySink,
{
    /// With the default detection threshold.
    ///
    pub fn new(alerts: A, display: D) -> Self {
        Self::with_detector(alerts, display, DecreaseDetector::default())
    }

    pub fn with_detector(alerts: A, display: D, detector: DecreaseDetector) -> Self {
        Controller {
            detector,
            alerts,
            display,
            state: ControllerState::default(),
        }
    }

    /// One full update cycle for a delivered fix.
    ///
    /// Estimate, roll the state forward, convert to km/h, raise the alert on
    /// a sudden decrease, then push both display regions.
    ///
    #[tracing::instrument(skip(self))]
    pub fn handle_fix(&mut self, fix: PositionFix) {
        trace!("enter");

        let speed_ms = speed::estimate(&fix, self.state.previous_fix.as_ref(), self.state.previous_stamp);

        // Roll the state forward.  We keep the fix's own timestamp, not the
        // processing time, so that delayed delivery does not skew the next
        // estimation.
        //
        let (latitude, longitude) = (fix.latitude, fix.longitude);
        self.state.previous_stamp = fix.time;
        self.state.previous_fix = Some(fix);

        let current_kmh = speed_ms * MS_TO_KMH;

        if self
            .detector
            .is_sudden_decrease(self.state.previous_speed_kmh, current_kmh)
        {
            let alert = SpeedAlert::new(self.state.previous_speed_kmh, current_kmh);
            debug!("sudden decrease detected! {}", alert.body());
            self.alerts.notify(&alert);
        }

        self.state.previous_speed_kmh = current_kmh;

        let location = format!("Latitude: {latitude}\nLongitude: {longitude}");
        let speed = format!("Speed: {current_kmh:.1} km/h");

        debug!("{location}");
        debug!("{speed}");

        self.display.set_location(&location);
        self.display.set_speed(&speed);
    }

    /// Move the controller into the feed.  On success every delivered fix
    /// goes through [`Controller::handle_fix`] until the returned handle is
    /// cancelled; on error the controller is dropped and stays permanently
    /// unsubscribed (there is no permission retry).
    ///
    pub fn subscribe<F>(mut self, feed: &mut F, request: &FeedRequest) -> Result<Subscription, FeedError>
    where
        F: LocationFeed,
        A: 'static,
        D: 'static,
    {
        trace!("subscribing with {request}");

        feed.subscribe(request, Box::new(move |fix| self.handle_fix(fix)))
    }
}
