//! Settled-pointer (hover intent) detection.
//!
//! Fires an activation callback when the pointer hovering a watched region
//! slows below a threshold, and a deactivation callback when it leaves,
//! distinguishing "passing over" from "deliberately hovering".
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use hoverintent::{attach, HoverIntentConfig, Region};
//!
//! let region = Rc::new(Region::new());
//! let binding = attach(
//!     &region,
//!     HoverIntentConfig::new()
//!         .on_activate(|| println!("settled"))
//!         .on_deactivate(|| println!("gone")),
//! );
//!
//! // Host event loop: push pointer events into `region`, then
//! //   binding.tick(Instant::now());
//! // and sleep until binding.next_sample_time() (WaitUntil scheduling).
//! ```
//!
//! Resampling is deadline-based, not thread-based: the detector stores the
//! instant of the next position check and the host polls it with
//! [`HoverIntentBinding::tick`]. All state lives behind `Rc`/`Cell` on the
//! host's single dispatch context.

pub mod binding;
pub mod config;
pub mod constants;
pub mod detector;

pub use binding::{attach, HoverIntentBinding};
pub use config::HoverIntentConfig;
pub use detector::{HoverIntentDetector, HoverPhase};

pub use hoverintent_core::{ListenerId, Point, PointerEvent, PointerEventKind, Region};
