//! Detector configuration.

use std::fmt;
use std::rc::Rc;

use web_time::Duration;

use crate::constants::{DEFAULT_CHECK_INTERVAL_MS, DEFAULT_MAX_ACTIVATION_DISTANCE};

/// Configuration for a hover intent detector, supplied once at attach
/// time.
///
/// Every field has a default, so hosts only override what they care
/// about:
///
/// ```rust,ignore
/// let config = HoverIntentConfig::new()
///     .max_activation_distance(12.0)
///     .on_activate(|| println!("settled"));
/// ```
#[derive(Clone)]
pub struct HoverIntentConfig {
    pub(crate) check_interval: Duration,
    pub(crate) max_activation_distance: f32,
    pub(crate) on_activate: Rc<dyn Fn()>,
    pub(crate) on_deactivate: Rc<dyn Fn()>,
}

impl HoverIntentConfig {
    pub fn new() -> Self {
        Self {
            check_interval: Duration::from_millis(DEFAULT_CHECK_INTERVAL_MS),
            max_activation_distance: DEFAULT_MAX_ACTIVATION_DISTANCE,
            on_activate: Rc::new(|| {}),
            on_deactivate: Rc::new(|| {}),
        }
    }

    /// How often the pointer position is resampled.
    pub fn check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    /// Manhattan distance between two consecutive samples at or below
    /// which the pointer counts as settled. Negative values are clamped
    /// to zero.
    pub fn max_activation_distance(mut self, distance: f32) -> Self {
        self.max_activation_distance = distance.max(0.0);
        self
    }

    /// Callback fired when the pointer settles, and on every press.
    pub fn on_activate(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_activate = Rc::new(handler);
        self
    }

    /// Callback fired whenever the pointer leaves the region.
    pub fn on_deactivate(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_deactivate = Rc::new(handler);
        self
    }
}

impl Default for HoverIntentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HoverIntentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverIntentConfig")
            .field("check_interval", &self.check_interval)
            .field("max_activation_distance", &self.max_activation_distance)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuning_constants() {
        let config = HoverIntentConfig::new();
        assert_eq!(
            config.check_interval,
            Duration::from_millis(DEFAULT_CHECK_INTERVAL_MS)
        );
        assert_eq!(
            config.max_activation_distance,
            DEFAULT_MAX_ACTIVATION_DISTANCE
        );
    }

    #[test]
    fn negative_distance_clamps_to_zero() {
        let config = HoverIntentConfig::new().max_activation_distance(-5.0);
        assert_eq!(config.max_activation_distance, 0.0);
    }
}
