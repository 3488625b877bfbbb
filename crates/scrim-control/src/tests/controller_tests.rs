use super::*;
use scrim_core::direction::LayoutDirection::{Ltr, Rtl};
use std::cell::RefCell;
use std::rc::Rc;

fn track() -> TrackGeometry {
    TrackGeometry {
        origin: 0.0,
        extent: 100.0,
    }
}

fn recording_slider(step: Option<f32>) -> (SliderController, Rc<RefCell<Vec<f32>>>, Rc<RefCell<Vec<f32>>>) {
    let mut slider = SliderController::new(BoundedValue::new(0.0, 0.0, 100.0, step), false);
    let changes = Rc::new(RefCell::new(Vec::new()));
    let commits = Rc::new(RefCell::new(Vec::new()));
    let changes_log = Rc::clone(&changes);
    slider.set_on_value_change(move |v| changes_log.borrow_mut().push(v));
    let commits_log = Rc::clone(&commits);
    slider.set_on_value_commit(move |v| commits_log.borrow_mut().push(v));
    (slider, changes, commits)
}

#[test]
fn press_jumps_value_under_the_finger() {
    let (mut slider, changes, _) = recording_slider(None);
    slider.gesture_begin(40.0, 0, track(), Ltr);
    assert_eq!(*changes.borrow(), vec![40.0]);
    assert_eq!(slider.value(), 40.0);
}

#[test]
fn motion_within_a_step_does_not_refire() {
    let (mut slider, changes, _) = recording_slider(Some(10.0));
    slider.gesture_begin(40.0, 0, track(), Ltr);
    slider.gesture_update(42.0, 16);
    slider.gesture_update(44.0, 32);
    assert_eq!(*changes.borrow(), vec![40.0]);
    slider.gesture_update(47.0, 48);
    assert_eq!(*changes.borrow(), vec![40.0, 50.0]);
}

#[test]
fn sweep_and_return_emits_per_change_not_per_sample() {
    let (mut slider, changes, _) = recording_slider(Some(10.0));
    slider.gesture_begin(10.0, 0, track(), Ltr);
    // Out to 50 and back to 10 in 2 px samples: passes through five
    // distinct quantized values forward, four backward.
    let mut t = 0;
    for p in (12..=50).step_by(2).chain((10..=48).rev().step_by(2)) {
        t += 16;
        slider.gesture_update(p as f32, t);
    }
    assert_eq!(changes.borrow().len(), 9);
    assert_eq!(*changes.borrow(), vec![10.0, 20.0, 30.0, 40.0, 50.0, 40.0, 30.0, 20.0, 10.0]);
}

#[test]
fn commit_fires_exactly_once_with_the_settled_value() {
    let (mut slider, _, commits) = recording_slider(Some(10.0));
    slider.gesture_begin(0.0, 0, track(), Ltr);
    slider.gesture_update(33.0, 100);
    let committed = slider.gesture_end(33.0, 200);
    assert_eq!(committed, Some(30.0));
    assert_eq!(*commits.borrow(), vec![30.0]);
}

#[test]
fn end_without_begin_commits_nothing() {
    let (mut slider, _, commits) = recording_slider(None);
    assert_eq!(slider.gesture_end(50.0, 0), None);
    assert!(commits.borrow().is_empty());
}

#[test]
fn rtl_track_maps_mirrored() {
    let (mut slider, _, _) = recording_slider(None);
    slider.gesture_begin(25.0, 0, track(), Rtl);
    assert_eq!(slider.value(), 75.0);
}

#[test]
fn disabled_slider_ignores_gestures() {
    let (mut slider, changes, commits) = recording_slider(None);
    slider.set_disabled(true);
    slider.gesture_begin(40.0, 0, track(), Ltr);
    slider.gesture_update(60.0, 16);
    assert_eq!(slider.gesture_end(60.0, 32), None);
    assert!(changes.borrow().is_empty());
    assert!(commits.borrow().is_empty());
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn disposed_slider_never_fires_again() {
    let (mut slider, changes, commits) = recording_slider(None);
    slider.gesture_begin(40.0, 0, track(), Ltr);
    slider.dispose();
    slider.gesture_update(60.0, 16);
    assert_eq!(slider.gesture_end(60.0, 32), None);
    assert_eq!(*changes.borrow(), vec![40.0]);
    assert!(commits.borrow().is_empty());
}

#[test]
fn haptics_follow_settled_changes() {
    let mut slider = SliderController::new(BoundedValue::new(0.0, 0.0, 100.0, Some(10.0)), true);
    let pulses = Rc::new(RefCell::new(0u32));
    let pulse_count = Rc::clone(&pulses);
    slider.set_on_haptic(move || *pulse_count.borrow_mut() += 1);

    slider.gesture_begin(0.0, 0, track(), Ltr);
    slider.gesture_update(2.0, 16);
    slider.gesture_update(18.0, 32);
    slider.gesture_update(22.0, 48);
    assert_eq!(*pulses.borrow(), 2); // press at 0, then the 20 mark
}

#[test]
fn external_value_write_is_silent() {
    let (mut slider, changes, _) = recording_slider(None);
    slider.set_value(70.0);
    assert!(changes.borrow().is_empty());
    assert_eq!(slider.value(), 70.0);
}

mod dial {
    use super::*;
    use scrim_core::config::DialTunables;

    fn geometry() -> DialGeometry {
        DialGeometry {
            center_x: 100.0,
            center_y: 100.0,
            radius: 100.0,
        }
    }

    fn recording_dial(mode: DialMode) -> (DialController, Rc<RefCell<Vec<u8>>>, Rc<RefCell<Vec<u8>>>) {
        let mut dial = DialController::new(mode, geometry(), DialTunables::default(), false);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let commits = Rc::new(RefCell::new(Vec::new()));
        let changes_log = Rc::clone(&changes);
        dial.set_on_value_change(move |v| changes_log.borrow_mut().push(v));
        let commits_log = Rc::clone(&commits);
        dial.set_on_value_commit(move |v| commits_log.borrow_mut().push(v));
        (dial, changes, commits)
    }

    #[test]
    fn touch_selects_the_nearest_mark() {
        let (mut dial, changes, commits) = recording_dial(DialMode::Hours12);
        // Physical 3 o'clock on the outer ring.
        dial.gesture_begin(190.0, 100.0, Ltr);
        assert_eq!(*changes.borrow(), vec![3]);
        assert_eq!(dial.gesture_end(), Some(3));
        assert_eq!(*commits.borrow(), vec![3]);
    }

    #[test]
    fn rejected_touches_keep_the_selection() {
        let (mut dial, changes, _) = recording_dial(DialMode::Minutes);
        dial.gesture_begin(100.0, 10.0, Ltr); // 12 o'clock -> minute 0
        assert_eq!(*changes.borrow(), vec![0]);
        // Inside the dead center: ignored, selection stays.
        dial.gesture_update(105.0, 100.0);
        assert_eq!(*changes.borrow(), vec![0]);
        assert_eq!(dial.gesture_end(), Some(0));
    }

    #[test]
    fn inner_ring_selects_small_hours() {
        let (mut dial, changes, _) = recording_dial(DialMode::Hours24);
        // 40 px above center: inner ring, 12 o'clock -> midnight.
        dial.gesture_begin(100.0, 60.0, Ltr);
        assert_eq!(*changes.borrow(), vec![0]);
        // Slide out to the outer ring at the same angle -> noon.
        dial.gesture_update(100.0, 10.0);
        assert_eq!(*changes.borrow(), vec![0, 12]);
    }

    #[test]
    fn rtl_dial_mirrors_hours() {
        let (mut dial, changes, _) = recording_dial(DialMode::Hours12);
        dial.gesture_begin(190.0, 100.0, Rtl);
        assert_eq!(*changes.borrow(), vec![9]);
    }

    #[test]
    fn end_without_any_accepted_touch_commits_nothing() {
        let (mut dial, _, commits) = recording_dial(DialMode::Minutes);
        dial.gesture_begin(105.0, 100.0, Ltr); // rejected: dead center
        assert_eq!(dial.gesture_end(), None);
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn disposed_dial_is_inert() {
        let (mut dial, changes, commits) = recording_dial(DialMode::Minutes);
        dial.gesture_begin(100.0, 10.0, Ltr);
        dial.dispose();
        dial.gesture_update(190.0, 100.0);
        assert_eq!(dial.gesture_end(), None);
        assert_eq!(*changes.borrow(), vec![0]);
        assert!(commits.borrow().is_empty());
    }
}
