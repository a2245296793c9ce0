//! Region attachment.
//!
//! [`attach`] wires a detector to the four pointer notifications of a
//! [`Region`] and hands back the live binding.

use std::rc::Rc;

use web_time::Instant;

use hoverintent_core::{ListenerId, PointerEventKind, Region};

use crate::config::HoverIntentConfig;
use crate::detector::{HoverIntentDetector, HoverPhase};

/// Live binding between one region and one detector.
///
/// The attachment is permanent by default: dropping the binding leaves
/// the listeners (and the detector they capture) registered on the
/// region. Hosts with structured teardown call
/// [`HoverIntentBinding::detach`].
pub struct HoverIntentBinding {
    region: Rc<Region>,
    detector: Rc<HoverIntentDetector>,
    listeners: [ListenerId; 4],
}

/// Attaches settled-pointer detection to `region`.
///
/// Registers four listeners: press (direct passthrough to `on_activate`,
/// since pressing is immediate activation intent), enter, leave, and
/// move.
pub fn attach(region: &Rc<Region>, config: HoverIntentConfig) -> HoverIntentBinding {
    let detector = Rc::new(HoverIntentDetector::new(config));

    let press = {
        let detector = Rc::clone(&detector);
        region.add_listener(PointerEventKind::Press, move |_event| {
            detector.pointer_pressed()
        })
    };
    let enter = {
        let detector = Rc::clone(&detector);
        region.add_listener(PointerEventKind::Enter, move |event| {
            detector.pointer_entered(event.position, event.time)
        })
    };
    let leave = {
        let detector = Rc::clone(&detector);
        region.add_listener(PointerEventKind::Leave, move |_event| {
            detector.pointer_left()
        })
    };
    let moved = {
        let detector = Rc::clone(&detector);
        region.add_listener(PointerEventKind::Move, move |event| {
            detector.pointer_moved(event.position)
        })
    };

    log::debug!("hover intent detection attached");

    HoverIntentBinding {
        region: Rc::clone(region),
        detector,
        listeners: [press, enter, leave, moved],
    }
}

impl HoverIntentBinding {
    /// Runs the pending resample if its deadline has been reached.
    /// Returns `true` when a sample ran.
    pub fn tick(&self, now: Instant) -> bool {
        self.detector.tick(now)
    }

    /// Deadline of the next scheduled resample, if any.
    /// Use this for `WaitUntil` scheduling in the host loop.
    pub fn next_sample_time(&self) -> Option<Instant> {
        self.detector.next_sample_time()
    }

    pub fn phase(&self) -> HoverPhase {
        self.detector.phase()
    }

    /// Removes all four listeners and drops any pending resample.
    ///
    /// Neither callback fires: detaching tears the binding down, it is
    /// not a leave event.
    pub fn detach(self) {
        for id in self.listeners {
            self.region.remove_listener(id);
        }
        self.detector.cancel();
        log::debug!("hover intent detection detached");
    }
}
