use super::*;
use scrim_core::frame_clock::FrameClock;
use scrim_core::scheduler::FrameScheduler;
use scrim_input::{DragOutcome, DragResult};
use std::cell::RefCell;
use std::rc::Rc;

const FRAME: u64 = 16_000_000;

fn harness() -> (FrameScheduler, FrameClock) {
    let scheduler = FrameScheduler::new();
    let clock = FrameClock::new(scheduler.handle());
    (scheduler, clock)
}

fn drain_until_idle(scheduler: &FrameScheduler, start_nanos: u64) -> u64 {
    let handle = scheduler.handle();
    let mut now = start_nanos;
    let mut frames = 0;
    while handle.needs_frame() {
        handle.drain_frame_callbacks(now);
        now += FRAME;
        frames += 1;
        assert!(frames < 10_000, "animation never settled");
    }
    now
}

fn recording_overlay(
    clock: FrameClock,
    initially_open: bool,
) -> (OverlayLifecycle, Rc<RefCell<Vec<bool>>>, Rc<RefCell<Vec<f32>>>) {
    let overlay = OverlayLifecycle::new(clock, initially_open);
    let opens = Rc::new(RefCell::new(Vec::new()));
    let progress = Rc::new(RefCell::new(Vec::new()));
    let opens_log = Rc::clone(&opens);
    overlay.set_on_open_change(move |open| opens_log.borrow_mut().push(open));
    let progress_log = Rc::clone(&progress);
    overlay.set_on_progress(move |p| progress_log.borrow_mut().push(p));
    (overlay, opens, progress)
}

#[test]
fn initial_state_follows_the_open_prop() {
    let (_scheduler, clock) = harness();
    let closed = OverlayLifecycle::new(clock.clone(), false);
    assert_eq!(closed.state(), VisibilityState::Closed);
    assert!(!closed.is_mounted());
    assert_eq!(closed.progress(), 0.0);

    let open = OverlayLifecycle::new(clock, true);
    assert_eq!(open.state(), VisibilityState::Open);
    assert!(open.is_mounted());
    assert_eq!(open.progress(), 1.0);
}

#[test]
fn open_intent_mounts_then_animates_to_open() {
    let (scheduler, clock) = harness();
    let (overlay, opens, _) = recording_overlay(clock, false);

    overlay.set_open_intent(true);
    assert_eq!(overlay.state(), VisibilityState::Opening);
    assert!(overlay.is_mounted());

    drain_until_idle(&scheduler, 0);
    assert_eq!(overlay.state(), VisibilityState::Open);
    assert_eq!(overlay.progress(), 1.0);
    assert_eq!(*opens.borrow(), vec![true]);
}

#[test]
fn open_intent_is_idempotent() {
    let (scheduler, clock) = harness();
    let (overlay, opens, _) = recording_overlay(clock, false);

    overlay.set_open_intent(true);
    overlay.set_open_intent(true);
    drain_until_idle(&scheduler, 0);
    overlay.set_open_intent(true);

    assert_eq!(overlay.state(), VisibilityState::Open);
    assert_eq!(*opens.borrow(), vec![true]);
    assert!(!scheduler.handle().needs_frame());
}

#[test]
fn close_interrupt_reverses_without_snapping() {
    let (scheduler, clock) = harness();
    let (overlay, opens, progress) = recording_overlay(clock, false);
    let handle = scheduler.handle();

    overlay.set_open_intent(true);
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(5 * FRAME);
    let mid = overlay.progress();
    assert!(mid > 0.0 && mid < 1.0, "interrupt point {mid}");

    overlay.set_open_intent(false);
    assert_eq!(overlay.state(), VisibilityState::Closing);
    assert!(overlay.is_mounted(), "stays mounted while closing");

    progress.borrow_mut().clear();
    drain_until_idle(&scheduler, 6 * FRAME);

    assert_eq!(overlay.state(), VisibilityState::Closed);
    assert!(!overlay.is_mounted());
    assert_eq!(overlay.progress(), 0.0);
    // Monotone descent from the interrupt point; never snaps to 1 first.
    let trace = progress.borrow();
    assert!(!trace.is_empty());
    let mut previous = mid;
    for &p in trace.iter() {
        assert!(p <= previous + 1e-4, "progress rose from {previous} to {p}");
        previous = p;
    }
    assert_eq!(*opens.borrow(), vec![false]);
}

#[test]
fn reopen_while_closing_reverses_toward_open() {
    let (scheduler, clock) = harness();
    let (overlay, opens, _) = recording_overlay(clock.clone(), true);
    let handle = scheduler.handle();

    overlay.set_open_intent(false);
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(4 * FRAME);
    let mid = overlay.progress();
    assert!(mid < 1.0);

    overlay.set_open_intent(true);
    assert_eq!(overlay.state(), VisibilityState::Opening);
    assert!(overlay.is_mounted());

    drain_until_idle(&scheduler, 5 * FRAME);
    assert_eq!(overlay.state(), VisibilityState::Open);
    assert_eq!(overlay.progress(), 1.0);
    // Terminal notifications only: the aborted close never reported false.
    assert_eq!(*opens.borrow(), vec![true]);
}

#[test]
fn gesture_commit_closes_from_open() {
    let (scheduler, clock) = harness();
    let (overlay, opens, _) = recording_overlay(clock, true);

    overlay.commit_close();
    assert_eq!(overlay.state(), VisibilityState::Closing);

    drain_until_idle(&scheduler, 0);
    assert_eq!(overlay.state(), VisibilityState::Closed);
    assert!(!overlay.is_mounted());
    assert_eq!(*opens.borrow(), vec![false]);
}

#[test]
fn commit_close_on_unmounted_overlay_is_a_noop() {
    let (scheduler, clock) = harness();
    let (overlay, opens, _) = recording_overlay(clock, false);
    overlay.commit_close();
    assert_eq!(overlay.state(), VisibilityState::Closed);
    assert!(!scheduler.handle().needs_frame());
    assert!(opens.borrow().is_empty());
}

#[test]
fn cancelled_drag_springs_back_to_rest() {
    let (scheduler, clock) = harness();
    let (overlay, _, _) = recording_overlay(clock, true);

    overlay.drag_by(40.0);
    overlay.drag_by(80.0);
    assert_eq!(overlay.drag_offset(), 80.0);

    overlay.settle_drag(&DragResult {
        displacement: 80.0,
        velocity: 120.0,
        outcome: DragOutcome::Cancel,
    });
    drain_until_idle(&scheduler, 0);

    assert_eq!(overlay.drag_offset(), 0.0);
    assert_eq!(overlay.state(), VisibilityState::Open, "cancel never closes");
}

#[test]
fn committed_drag_dismisses() {
    let (scheduler, clock) = harness();
    let (overlay, opens, _) = recording_overlay(clock, true);

    overlay.drag_by(150.0);
    overlay.settle_drag(&DragResult {
        displacement: 150.0,
        velocity: 900.0,
        outcome: DragOutcome::Commit,
    });
    assert_eq!(overlay.state(), VisibilityState::Closing);

    drain_until_idle(&scheduler, 0);
    assert_eq!(overlay.state(), VisibilityState::Closed);
    assert_eq!(*opens.borrow(), vec![false]);
    // Next mount starts from a resting offset.
    assert_eq!(overlay.drag_offset(), 0.0);
}

#[test]
fn dispose_suppresses_queued_callbacks() {
    let (scheduler, clock) = harness();
    let (overlay, opens, progress) = recording_overlay(clock, false);
    let handle = scheduler.handle();

    overlay.set_open_intent(true);
    handle.drain_frame_callbacks(0);
    progress.borrow_mut().clear();

    overlay.dispose();
    // The in-flight animation was cancelled with its registration.
    assert!(!handle.needs_frame());

    // Simulate a stray frame from the host anyway: nothing observable moves.
    handle.drain_frame_callbacks(10 * FRAME);
    assert!(progress.borrow().is_empty());
    assert!(opens.borrow().is_empty());

    // Later intent changes are ignored too.
    overlay.set_open_intent(false);
    assert!(!handle.needs_frame());
    assert_eq!(overlay.state(), VisibilityState::Opening);
}
