//! Listener registry for a watched region.
//!
//! [`Region`] stands in for the host UI element: platform adapters push
//! pointer events into it and attached components subscribe per event
//! kind. Dispatch is synchronous on the host's single event context, so
//! handlers for one region never observe two callbacks executing
//! concurrently and need no internal locking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;

use crate::event::{PointerEvent, PointerEventKind};

/// Unique identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

struct ListenerEntry {
    id: ListenerId,
    kind: PointerEventKind,
    handler: Rc<dyn Fn(&PointerEvent)>,
}

/// A watched screen region that fans pointer events out to listeners.
pub struct Region {
    listeners: RefCell<Vec<ListenerEntry>>,
    next_id: Cell<usize>,
}

impl Region {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Registers `handler` for events of `kind` and returns its id.
    pub fn add_listener(
        &self,
        kind: PointerEventKind,
        handler: impl Fn(&PointerEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.as_usize() + 1);
        self.listeners.borrow_mut().push(ListenerEntry {
            id,
            kind,
            handler: Rc::new(handler),
        });
        id
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `false` when the id was never registered or was already
    /// removed; a stale id is not an error.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|entry| entry.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Delivers `event` to every listener registered for its kind, in
    /// registration order.
    ///
    /// The matching handlers are snapshotted before the first invocation,
    /// so a handler may add or remove listeners without invalidating the
    /// iteration.
    pub fn dispatch(&self, event: &PointerEvent) {
        let matching: SmallVec<[Rc<dyn Fn(&PointerEvent)>; 4]> = self
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.kind == event.kind)
            .map(|entry| Rc::clone(&entry.handler))
            .collect();
        log::trace!("dispatching {:?} to {} listener(s)", event.kind, matching.len());
        for handler in matching {
            handler(event);
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}
