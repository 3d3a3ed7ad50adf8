use std::time::{Duration, Instant};

use slidepick::{AnchorTable, Easing, Phase, PickerError, SnapMachine, TransitionConfig};

fn machine(count: usize, initial: usize) -> SnapMachine {
    SnapMachine::new(AnchorTable::build(count, 50.0).unwrap(), initial)
}

fn drag(machine: &mut SnapMachine, deltas: &[f32], velocity: f32) -> usize {
    let now = Instant::now();
    machine.drag_start(now);
    for delta in deltas {
        machine.drag_move(*delta);
    }
    machine.drag_end(velocity, now).unwrap().index
}

// ============================================================================
// Phase Transition Tests
// ============================================================================

#[test]
fn test_starts_idle_on_anchor() {
    let m = machine(7, 3);
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.settled_index(), 3);
    assert_eq!(m.offset(), -150.0);
}

#[test]
fn test_initial_index_clamped_to_last_anchor() {
    let m = machine(4, 10);
    assert_eq!(m.settled_index(), 3);
    assert_eq!(m.offset(), -150.0);
}

#[test]
fn test_drag_start_enters_dragging() {
    let mut m = machine(7, 3);
    m.drag_start(Instant::now());
    assert!(m.is_dragging());
    assert_eq!(m.offset(), -150.0, "drag start does not move the stack");
}

#[test]
fn test_move_outside_gesture_is_ignored() {
    let mut m = machine(7, 3);
    m.drag_move(-40.0);
    assert_eq!(m.offset(), -150.0);
}

#[test]
fn test_settled_index_unchanged_while_dragging() {
    let mut m = machine(7, 3);
    m.drag_start(Instant::now());
    m.drag_move(-120.0);
    assert_eq!(m.settled_index(), 3);
    assert_eq!(m.offset(), -270.0);
}

#[test]
fn test_drag_clamped_to_anchor_span() {
    let mut m = machine(7, 3);
    m.drag_start(Instant::now());
    m.drag_move(400.0);
    assert_eq!(m.offset(), 0.0, "no overscroll above the first item");
    m.drag_move(-1000.0);
    assert_eq!(m.offset(), -300.0, "no overscroll below the last item");
}

#[test]
fn test_release_returns_to_idle_on_anchor() {
    let mut m = machine(7, 3);
    let index = drag(&mut m, &[-60.0], 0.0);
    assert_eq!(index, 4);
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.offset(), -200.0);
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[test]
fn test_small_drag_stays() {
    let mut m = machine(7, 3);
    assert_eq!(drag(&mut m, &[-10.0], 0.0), 3);
    assert_eq!(m.offset(), -150.0);
}

#[test]
fn test_drag_past_midpoint_moves_one() {
    let mut m = machine(7, 3);
    assert_eq!(drag(&mut m, &[-30.0], 0.0), 4);
}

#[test]
fn test_drag_sixty_moves_one_step() {
    // -60 from index 3 lands 10px past index 4's anchor.
    let mut m = machine(7, 3);
    assert_eq!(drag(&mut m, &[-60.0], 0.0), 4);
}

#[test]
fn test_midpoint_tie_follows_motion() {
    let mut down = machine(7, 3);
    assert_eq!(drag(&mut down, &[-25.0], 0.0), 4, "moving toward larger index");

    let mut up = machine(7, 3);
    assert_eq!(drag(&mut up, &[25.0], 0.0), 2, "moving toward smaller index");
}

#[test]
fn test_split_deltas_resolve_like_single_delta() {
    let mut whole = machine(9, 4);
    let mut split = machine(9, 4);
    let a = drag(&mut whole, &[-137.0], 0.0);
    let b = drag(&mut split, &[-50.0, -40.0, 10.0, -57.0], 0.0);
    assert_eq!(a, b);
    assert_eq!(whole.offset(), split.offset());
}

#[test]
fn test_fling_overrides_position() {
    let mut m = machine(7, 3).with_velocity_threshold(Some(125.0));
    assert_eq!(drag(&mut m, &[-5.0], -400.0), 4, "fast fling toward larger index");

    let mut m = machine(7, 3).with_velocity_threshold(Some(125.0));
    assert_eq!(drag(&mut m, &[-40.0], 400.0), 3, "fling back overrides position");
}

#[test]
fn test_slow_release_ignores_velocity() {
    let mut m = machine(7, 3).with_velocity_threshold(Some(125.0));
    assert_eq!(drag(&mut m, &[-5.0], -100.0), 3);
}

#[test]
fn test_release_without_gesture_is_noop() {
    let mut m = machine(5, 2);
    let resolution = m.drag_end(0.0, Instant::now()).unwrap();
    assert!(!resolution.changed());
    assert_eq!(resolution.index, 2);
}

// ============================================================================
// Accept Hook Tests
// ============================================================================

#[test]
fn test_rejected_resolution_rolls_back() {
    let mut m = machine(7, 3);
    m.set_accept_hook(|_, to| to != 4);

    let now = Instant::now();
    m.drag_start(now);
    m.drag_move(-60.0);
    let resolution = m.drag_end(0.0, now).unwrap();

    assert!(!resolution.accepted);
    assert!(!resolution.changed());
    assert_eq!(m.settled_index(), 3);
    assert_eq!(m.offset(), -150.0, "offset returns to the previous anchor");
}

#[test]
fn test_hook_not_consulted_when_index_unchanged() {
    let mut m = machine(7, 3);
    m.set_accept_hook(|_, _| panic!("hook should not run"));
    assert_eq!(drag(&mut m, &[-5.0], 0.0), 3);
}

// ============================================================================
// Failure and Recovery Tests
// ============================================================================

#[test]
fn test_empty_anchors_unresolvable() {
    let mut m = SnapMachine::new(AnchorTable::default(), 0);
    let now = Instant::now();
    m.drag_start(now);
    m.drag_move(-20.0);
    assert_eq!(m.drag_end(0.0, now), Err(PickerError::UnresolvableDrag));
    assert!(m.is_dragging(), "machine stays dragging until corrected");
}

#[test]
fn test_stale_anchors_unresolvable_then_abort() {
    let mut m = machine(7, 3);
    let now = Instant::now();
    m.drag_start(now);
    m.drag_move(-60.0);

    m.replace_anchors(AnchorTable::build(3, 50.0).unwrap(), 1);
    assert_eq!(m.drag_end(0.0, now), Err(PickerError::UnresolvableDrag));

    assert!(m.abort_drag());
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.settled_index(), 1);
    assert_eq!(m.offset(), -50.0);
}

#[test]
fn test_replace_anchors_when_idle() {
    let mut m = machine(7, 3);
    m.replace_anchors(AnchorTable::build(2, 20.0).unwrap(), 1);
    assert_eq!(m.settled_index(), 1);
    assert_eq!(m.offset(), -20.0);
}

// ============================================================================
// Programmatic Jump Tests
// ============================================================================

#[test]
fn test_jump_sets_index_and_offset() {
    let mut m = machine(7, 3);
    m.jump_to(6).unwrap();
    assert_eq!(m.settled_index(), 6);
    assert_eq!(m.offset(), -300.0);
    assert_eq!(m.phase(), Phase::Idle);
}

#[test]
fn test_jump_out_of_range() {
    let mut m = machine(3, 1);
    assert_eq!(
        m.jump_to(3),
        Err(PickerError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(m.settled_index(), 1);
}

// ============================================================================
// Settle Animation Tests
// ============================================================================

fn animated(count: usize, initial: usize) -> SnapMachine {
    machine(count, initial).with_settle(Some(TransitionConfig::new(
        Duration::from_millis(100),
        Easing::Linear,
    )))
}

#[test]
fn test_release_starts_settling() {
    let mut m = animated(7, 3);
    let start = Instant::now();
    m.drag_start(start);
    m.drag_move(-40.0);
    let resolution = m.drag_end(0.0, start).unwrap();

    assert_eq!(resolution.index, 4, "index is final at release");
    assert!(m.is_settling());
    assert_eq!(m.offset(), -190.0, "offset starts where the finger left it");

    assert!(m.tick(start + Duration::from_millis(50)));
    assert!((m.offset() + 195.0).abs() < 0.5);

    assert!(!m.tick(start + Duration::from_millis(150)));
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.offset(), -200.0);
}

#[test]
fn test_drag_start_cancels_settle_without_jump() {
    let mut m = animated(7, 3);
    let start = Instant::now();
    m.drag_start(start);
    m.drag_move(-40.0);
    m.drag_end(0.0, start).unwrap();

    let interrupt = start + Duration::from_millis(50);
    m.drag_start(interrupt);
    assert!(m.is_dragging());
    assert!((m.offset() + 195.0).abs() < 0.5, "adopts interpolated offset");

    m.drag_move(10.0);
    assert!((m.offset() + 185.0).abs() < 0.5);
}

#[test]
fn test_instant_settle_config_snaps() {
    let mut m = machine(7, 3).with_settle(Some(TransitionConfig::instant()));
    drag(&mut m, &[-40.0], 0.0);
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.offset(), -200.0);
}
