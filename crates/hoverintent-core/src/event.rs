//! Pointer notifications delivered by the host UI event system.

use web_time::Instant;

use crate::geometry::Point;

/// The pointer notifications a watched region can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer crossed into the region.
    Enter,
    /// Pointer moved while inside the region.
    Move,
    /// Pointer crossed out of the region.
    Leave,
    /// Primary button went down inside the region.
    Press,
}

/// A single pointer notification.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Pointer position in the host's logical coordinate space.
    pub position: Point,
    /// When the host observed the event.
    pub time: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            time: Instant::now(),
        }
    }

    /// Replace the timestamp. Test drivers use this to deliver events on a
    /// synthetic clock.
    pub fn with_time(mut self, time: Instant) -> Self {
        self.time = time;
        self
    }
}
