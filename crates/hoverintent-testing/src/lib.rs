//! Testing utilities and harness for hover intent detection.
//!
//! [`HoverTestRule`] drives a detector deterministically: pointer events
//! are delivered on a synthetic clock, and resample deadlines fire at
//! their exact scheduled instants, mirroring the total ordering a real
//! host loop provides. Tests script a visit with `enter_at` / `move_to` /
//! `press` / `leave`, walk time forward with `advance_millis`, and assert
//! on the callback counters.

use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

use hoverintent::{attach, HoverIntentBinding, HoverIntentConfig, HoverPhase};
use hoverintent_core::{Point, PointerEvent, PointerEventKind, Region};

/// Deterministic driver for one region with hover intent detection
/// attached.
pub struct HoverTestRule {
    region: Rc<Region>,
    binding: HoverIntentBinding,
    now: Cell<Instant>,
    activations: Rc<Cell<u32>>,
    deactivations: Rc<Cell<u32>>,
}

impl HoverTestRule {
    /// Rule with the default tuning.
    pub fn new() -> Self {
        Self::with_config(HoverIntentConfig::new())
    }

    /// Rule with explicit tuning.
    pub fn with_tuning(check_interval: Duration, max_activation_distance: f32) -> Self {
        Self::with_config(
            HoverIntentConfig::new()
                .check_interval(check_interval)
                .max_activation_distance(max_activation_distance),
        )
    }

    fn with_config(config: HoverIntentConfig) -> Self {
        let activations = Rc::new(Cell::new(0));
        let deactivations = Rc::new(Cell::new(0));
        let config = config
            .on_activate({
                let activations = Rc::clone(&activations);
                move || activations.set(activations.get() + 1)
            })
            .on_deactivate({
                let deactivations = Rc::clone(&deactivations);
                move || deactivations.set(deactivations.get() + 1)
            });

        let region = Rc::new(Region::new());
        let binding = attach(&region, config);

        Self {
            region,
            binding,
            now: Cell::new(Instant::now()),
            activations,
            deactivations,
        }
    }

    /// Current synthetic time.
    pub fn now(&self) -> Instant {
        self.now.get()
    }

    pub fn region(&self) -> &Rc<Region> {
        &self.region
    }

    pub fn binding(&self) -> &HoverIntentBinding {
        &self.binding
    }

    pub fn enter_at(&self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Enter, Point::new(x, y));
    }

    pub fn move_to(&self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Move, Point::new(x, y));
    }

    pub fn press(&self) {
        self.dispatch(PointerEventKind::Press, Point::ZERO);
    }

    pub fn leave(&self) {
        self.dispatch(PointerEventKind::Leave, Point::ZERO);
    }

    /// Advances the synthetic clock by `millis`, firing each pending
    /// resample at its exact deadline along the way.
    pub fn advance_millis(&self, millis: u64) {
        let target = self.now.get() + Duration::from_millis(millis);
        while let Some(deadline) = self.binding.next_sample_time() {
            if deadline > target {
                break;
            }
            self.now.set(deadline);
            self.binding.tick(deadline);
        }
        self.now.set(target);
    }

    pub fn activate_count(&self) -> u32 {
        self.activations.get()
    }

    pub fn deactivate_count(&self) -> u32 {
        self.deactivations.get()
    }

    pub fn phase(&self) -> HoverPhase {
        self.binding.phase()
    }

    pub fn next_sample_time(&self) -> Option<Instant> {
        self.binding.next_sample_time()
    }

    fn dispatch(&self, kind: PointerEventKind, position: Point) {
        self.region
            .dispatch(&PointerEvent::new(kind, position).with_time(self.now.get()));
    }
}

impl Default for HoverTestRule {
    fn default() -> Self {
        Self::new()
    }
}
