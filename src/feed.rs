//! Location feed boundary.
//!
//! A `LocationFeed` is the platform side of the pipeline: it owns the actual
//! provider and pushes [`PositionFix`] values into a registered handler, one
//! at a time.  Everything here is a capability handed to the controller at
//! construction so that tests can substitute a scripted feed.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::EnumString;

use crate::error::FeedError;
use crate::fix::PositionFix;

/// Which positioning provider to consult.  Only one is ever used per
/// subscription, no fusion.
///
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, strum::Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// Satellite-based, highest accuracy
    #[default]
    Gps,
    /// Cell/wifi derived
    Network,
    /// Piggy-back on whatever other clients request
    Passive,
}

/// Subscription request parameters.
///
/// Defaults: a fix at most every 2 s, no minimum displacement, satellite
/// provider.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct FeedRequest {
    /// Provider to subscribe to
    pub provider: Provider,
    /// Minimum interval between fixes, in ms
    pub min_interval_ms: u64,
    /// Minimum displacement between fixes, in meters
    pub min_displacement_m: f64,
}

impl Default for FeedRequest {
    fn default() -> Self {
        FeedRequest {
            provider: Provider::Gps,
            min_interval_ms: 2_000,
            min_displacement_m: 0.,
        }
    }
}

impl Display for FeedRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = json!(self).to_string();
        write!(f, "{s}")
    }
}

/// Handler invoked for every delivered fix.
///
/// The feed must deliver fixes sequentially, never concurrently: the handler
/// is a read-modify-write over controller state with no atomicity of its own.
///
pub type FixHandler = Box<dyn FnMut(PositionFix) + Send>;

/// A (running) subscription.  Cancelling is the only teardown path and must
/// guarantee that no further fix reaches the handler.
///
pub struct Subscription {
    cancel: Box<dyn FnOnce() + Send>,
}

impl Subscription {
    /// Wrap the feed-specific cancellation action.
    ///
    pub fn new(cancel: Box<dyn FnOnce() + Send>) -> Self {
        Subscription { cancel }
    }

    /// Stop delivery.  Idempotent by construction since it consumes the
    /// handle.
    ///
    pub fn cancel(self) {
        (self.cancel)()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Source of position fixes.
///
/// `subscribe` either starts delivery into `handler` and returns the
/// cancellation handle, or fails once and for all — permission denial is
/// reported here and never retried.
///
pub trait LocationFeed {
    fn subscribe(
        &mut self,
        request: &FeedRequest,
        handler: FixHandler,
    ) -> Result<Subscription, FeedError>;
}
