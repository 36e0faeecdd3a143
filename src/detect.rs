//! Sudden-decrease detection.
//!
//! A sudden decrease is a drop of at least [`SUDDEN_DECREASE_THRESHOLD`] km/h
//! between two consecutive speed readings, given a positive prior reading.
//!

/// Default detection threshold in km/h.
pub const SUDDEN_DECREASE_THRESHOLD: f64 = 10.0;

/// Threshold comparison over two consecutive km/h readings.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecreaseDetector {
    /// Minimum drop in km/h that counts as sudden
    threshold_kmh: f64,
}

impl Default for DecreaseDetector {
    fn default() -> Self {
        Self::new(SUDDEN_DECREASE_THRESHOLD)
    }
}

impl DecreaseDetector {
    /// With an explicit threshold, mostly for tests.
    ///
    pub fn new(threshold_kmh: f64) -> Self {
        DecreaseDetector { threshold_kmh }
    }

    /// True iff the previous reading was positive and the drop to the current
    /// one is at least the threshold (boundary inclusive).
    ///
    /// The positive-baseline guard keeps a stationary period (previous
    /// reading 0) from ever triggering.
    ///
    pub fn is_sudden_decrease(&self, previous_kmh: f64, current_kmh: f64) -> bool {
        previous_kmh > 0. && previous_kmh - current_kmh >= self.threshold_kmh
    }
}
