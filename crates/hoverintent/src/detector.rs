//! Settled-pointer detection state machine.
//!
//! Decides, by periodic resampling, whether the pointer hovering a region
//! has slowed down enough to count as deliberate. Movement between two
//! consecutive samples is measured with the Manhattan approximation; a
//! sample at or below the activation distance fires `on_activate` once
//! per visit and stops resampling.
//!
//! Resampling follows the deadline pattern:
//! - The next check time is stored, not a timer thread
//! - The host polls it via [`HoverIntentDetector::tick`]
//! - [`HoverIntentDetector::next_sample_time`] feeds `WaitUntil`
//!   scheduling so the loop sleeps between checks
//!
//! Because the host dispatches pointer events and ticks on one queue, a
//! leave event always cancels the pending deadline before anything else
//! can run, so no sample fires after a leave for the same visit.

use std::cell::Cell;

use web_time::Instant;

use hoverintent_core::Point;

use crate::config::HoverIntentConfig;

/// Where a detector is within the current hover visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    /// Pointer outside the region, or never seen yet.
    Idle,
    /// Pointer inside, resample pending, not yet activated.
    Sampling,
    /// `on_activate` fired for this visit; resampling stopped.
    Activated,
}

/// Per-region settled-pointer detector.
///
/// State is interior-mutable so the detector can sit behind `Rc` inside
/// the region's event handler closures; all mutation happens on the
/// host's single dispatch context.
pub struct HoverIntentDetector {
    config: HoverIntentConfig,
    /// Most recent position reported by a move event, `None` until the
    /// first move of the visit.
    last_location: Cell<Option<Point>>,
    /// Position recorded at the previous sample (or at region entry).
    last_checked_location: Cell<Option<Point>>,
    /// Deadline of the pending resample, `None` when none is scheduled.
    next_sample_time: Cell<Option<Instant>>,
    phase: Cell<HoverPhase>,
}

impl HoverIntentDetector {
    pub fn new(config: HoverIntentConfig) -> Self {
        Self {
            config,
            last_location: Cell::new(None),
            last_checked_location: Cell::new(None),
            next_sample_time: Cell::new(None),
            phase: Cell::new(HoverPhase::Idle),
        }
    }

    /// Pointer crossed into the region: restart sampling from the entry
    /// point, with no initial delay before the first check.
    pub fn pointer_entered(&self, position: Point, now: Instant) {
        self.last_checked_location.set(Some(position));
        self.last_location.set(None);
        self.phase.set(HoverPhase::Sampling);
        self.sample(now);
    }

    /// Pointer moved inside the region. Only records the position; the
    /// judgment happens at the next scheduled sample.
    pub fn pointer_moved(&self, position: Point) {
        self.last_location.set(Some(position));
    }

    /// Pointer left the region: cancel the pending resample, then signal
    /// deactivation.
    ///
    /// `on_deactivate` fires even if this visit never activated:
    /// deactivation means "no longer hovering", not "was active and now
    /// isn't".
    pub fn pointer_left(&self) {
        self.next_sample_time.set(None);
        self.phase.set(HoverPhase::Idle);
        log::trace!("hover visit ended, deactivating");
        (self.config.on_deactivate)();
    }

    /// Primary button pressed: pressing counts as immediate activation
    /// intent.
    ///
    /// Bypasses the sampling state machine entirely. A pending resample
    /// stays scheduled and may fire `on_activate` again when the pointer
    /// settles.
    pub fn pointer_pressed(&self) {
        log::trace!("press, activating");
        (self.config.on_activate)();
    }

    /// Runs the pending resample if its deadline has been reached.
    ///
    /// Returns `true` when a sample ran. The host calls this on loop
    /// wakeups; order relative to pointer events is whatever the host's
    /// queue delivers.
    pub fn tick(&self, now: Instant) -> bool {
        match self.next_sample_time.get() {
            Some(deadline) if now >= deadline => {
                self.next_sample_time.set(None);
                self.sample(now);
                true
            }
            _ => false,
        }
    }

    /// Deadline of the next scheduled resample, if any.
    /// Use this for `WaitUntil` scheduling in the host loop.
    pub fn next_sample_time(&self) -> Option<Instant> {
        self.next_sample_time.get()
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase.get()
    }

    /// Drops the pending resample without signalling deactivation.
    /// Detach teardown, not a leave event.
    pub(crate) fn cancel(&self) {
        self.next_sample_time.set(None);
        self.phase.set(HoverPhase::Idle);
    }

    /// One resample: compare the latest reported position against the one
    /// recorded at the previous sample.
    ///
    /// No move reported yet means the speed is not measurable, so the
    /// check is pushed out by another interval without judgment. Each
    /// sample then compares against the immediately preceding one, not
    /// the entry point: the check measures current speed, not total
    /// travel.
    fn sample(&self, now: Instant) {
        let last = self.last_location.get();
        let settled = match (self.last_checked_location.get(), last) {
            (Some(checked), Some(last)) => {
                checked.manhattan_distance(last) <= self.config.max_activation_distance
            }
            _ => false,
        };

        if settled {
            self.phase.set(HoverPhase::Activated);
            log::trace!("pointer settled, activating");
            (self.config.on_activate)();
        } else {
            self.next_sample_time.set(Some(now + self.config.check_interval));
        }

        if let Some(last) = last {
            self.last_checked_location.set(Some(last));
        }
    }
}
