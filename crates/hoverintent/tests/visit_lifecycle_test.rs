//! Visit lifecycle: leave cancellation, press passthrough, visit
//! restarts, and detach teardown.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Duration;

use hoverintent::{attach, HoverIntentConfig, HoverPhase};
use hoverintent_core::{Point, PointerEvent, PointerEventKind, Region};
use hoverintent_testing::HoverTestRule;

const INTERVAL: Duration = Duration::from_millis(100);

fn rule() -> HoverTestRule {
    HoverTestRule::with_tuning(INTERVAL, 20.0)
}

#[test]
fn leave_before_the_first_sample_cancels_it() {
    let rule = rule();

    rule.enter_at(0.0, 0.0);
    rule.advance_millis(50);
    rule.leave();

    assert_eq!(rule.deactivate_count(), 1);
    assert_eq!(rule.next_sample_time(), None);

    // The sample that had been due at t=100 never executes.
    rule.advance_millis(200);
    assert_eq!(rule.activate_count(), 0);
    assert_eq!(rule.deactivate_count(), 1);
}

#[test]
fn leave_deactivates_even_when_the_visit_activated() {
    let rule = rule();

    rule.enter_at(0.0, 0.0);
    rule.advance_millis(10);
    rule.move_to(3.0, 3.0);
    rule.advance_millis(90);
    assert_eq!(rule.activate_count(), 1);

    rule.leave();
    assert_eq!(rule.deactivate_count(), 1);
    assert_eq!(rule.phase(), HoverPhase::Idle);
}

#[test]
fn a_new_visit_can_activate_again() {
    let rule = rule();

    rule.enter_at(0.0, 0.0);
    rule.advance_millis(10);
    rule.move_to(3.0, 3.0);
    rule.advance_millis(90);
    rule.leave();
    assert_eq!(rule.activate_count(), 1);
    assert_eq!(rule.deactivate_count(), 1);

    // Leave + enter restarts sampling from the new entry point.
    rule.enter_at(80.0, 80.0);
    assert_eq!(rule.phase(), HoverPhase::Sampling);
    rule.advance_millis(10);
    rule.move_to(82.0, 81.0);
    rule.advance_millis(90);

    assert_eq!(rule.activate_count(), 2);
}

#[test]
fn press_activates_synchronously_in_any_state() {
    let rule = rule();

    // Before any enter.
    rule.press();
    assert_eq!(rule.activate_count(), 1);
    assert_eq!(rule.phase(), HoverPhase::Idle);

    // Mid-visit, while a sample is pending.
    rule.enter_at(0.0, 0.0);
    rule.press();
    assert_eq!(rule.activate_count(), 2);
    assert_eq!(rule.phase(), HoverPhase::Sampling);
}

#[test]
fn press_does_not_suppress_a_later_natural_activation() {
    let rule = rule();

    rule.enter_at(0.0, 0.0);
    rule.advance_millis(10);
    rule.press();
    assert_eq!(rule.activate_count(), 1);

    // The pending sample survives the press and still judges the move.
    rule.move_to(3.0, 2.0);
    rule.advance_millis(90);
    assert_eq!(rule.activate_count(), 2);
    assert_eq!(rule.phase(), HoverPhase::Activated);
}

#[test]
fn detach_removes_listeners_and_silences_callbacks() {
    let region = Rc::new(Region::new());
    let activations = Rc::new(Cell::new(0));
    let deactivations = Rc::new(Cell::new(0));

    let config = HoverIntentConfig::new()
        .check_interval(INTERVAL)
        .on_activate({
            let activations = Rc::clone(&activations);
            move || activations.set(activations.get() + 1)
        })
        .on_deactivate({
            let deactivations = Rc::clone(&deactivations);
            move || deactivations.set(deactivations.get() + 1)
        });

    let binding = attach(&region, config);
    assert_eq!(region.listener_count(), 4);

    region.dispatch(&PointerEvent::new(
        PointerEventKind::Enter,
        Point::new(10.0, 10.0),
    ));
    assert!(binding.next_sample_time().is_some());

    binding.detach();
    assert_eq!(region.listener_count(), 0);

    // Nothing left to receive events, no deadline left to fire.
    for kind in [
        PointerEventKind::Press,
        PointerEventKind::Enter,
        PointerEventKind::Move,
        PointerEventKind::Leave,
    ] {
        region.dispatch(&PointerEvent::new(kind, Point::ZERO));
    }
    assert_eq!(activations.get(), 0);
    assert_eq!(deactivations.get(), 0);
}
