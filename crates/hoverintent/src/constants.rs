//! Default tuning for settled-pointer detection.
//!
//! # DPI Considerations
//!
//! The activation distance is in logical pixels. For very high-density
//! displays, consider scaling it by the device's DPI factor. The defaults
//! work well for typical desktop displays.

/// Default resample interval in milliseconds.
///
/// How often pointer speed is re-measured. 100ms keeps activation latency
/// low without waking the host loop more often than a coarse hand gesture
/// needs.
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 100;

/// Default activation distance in logical pixels.
///
/// Manhattan distance travelled between two consecutive samples at or
/// below which the pointer counts as settled. A value of 20.0:
/// - Tolerates the jitter of a hand resting on a mouse or trackpad
/// - Still rejects a pointer that is merely crossing the region
pub const DEFAULT_MAX_ACTIVATION_DISTANCE: f32 = 20.0;
