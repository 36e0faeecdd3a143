//! Output boundaries: alert notifications and the on-screen display.
//!

use serde::{Deserialize, Serialize};

/// Fixed notification channel identifier; every alert lands in the same slot
/// and replaces the previous one.
pub const CHANNEL_ID: &str = "location_alerts";

/// Human-readable channel name.
pub const CHANNEL_NAME: &str = "Location Alerts";

/// Channel description as shown in notification settings.
pub const CHANNEL_DESCRIPTION: &str = "Notifications for sudden decrease in speed";

/// One sudden-decrease event, carrying both readings in km/h.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedAlert {
    /// Speed before the drop
    pub previous_kmh: f64,
    /// Speed after the drop
    pub current_kmh: f64,
}

impl SpeedAlert {
    pub fn new(previous_kmh: f64, current_kmh: f64) -> Self {
        SpeedAlert {
            previous_kmh,
            current_kmh,
        }
    }

    /// Notification title.
    ///
    pub fn title(&self) -> &'static str {
        "Sudden Decrease Detected"
    }

    /// Notification body, both speeds with one decimal.
    ///
    pub fn body(&self) -> String {
        format!(
            "Previous speed: {:.1} km/h, Current speed: {:.1} km/h",
            self.previous_kmh, self.current_kmh
        )
    }
}

/// Renders a user-visible, dismissible notification.  High importance, single
/// fixed slot under [`CHANNEL_ID`].
///
pub trait AlertSink: Send {
    fn notify(&mut self, alert: &SpeedAlert);
}

/// Renders the two text regions of the screen.  Both are overwritten on every
/// fix.
///
pub trait DisplaySink: Send {
    fn set_location(&mut self, text: &str);
    fn set_speed(&mut self, text: &str);
}
