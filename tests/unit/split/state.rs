use super::*;
use crate::split::guard::{CursorIcon, HostCall};

const CONTAINER: Container = Container::new(0.0, 1000.0);

fn split(config: SplitConfig) -> (SplitState, Arc<HeadlessHost>) {
    let host = Arc::new(HeadlessHost::new());
    let state = SplitState::new(config, host.clone());
    (state, host)
}

#[test]
fn starts_idle_at_default_width() {
    for default in [25.0, 33.3, 40.0, 60.0] {
        let (state, host) = split(SplitConfig::default().with_default_left_width(default));
        assert_eq!(state.left_percent(), default);
        assert!(!state.is_dragging());
        assert!(host.calls().is_empty());
    }
}

#[test]
fn misconfigured_default_starts_clamped() {
    let (state, _host) = split(SplitConfig::new(80.0, 60.0, 25.0));
    assert!(state.config().is_normalized());
    assert_eq!(state.config().min_left_width, 25.0);
    assert_eq!(state.config().max_left_width, 60.0);
    assert_eq!(state.left_percent(), 60.0);
}

#[test]
fn drag_scenario_clamps_to_bounds() {
    let (mut state, _host) = split(SplitConfig::default());
    assert!(state.pointer_down_on_divider());
    assert!(state.is_dragging());

    state.pointer_move(50.0, CONTAINER);
    assert_eq!(state.left_percent(), 25.0);

    state.pointer_move(700.0, CONTAINER);
    assert_eq!(state.left_percent(), 60.0);

    state.pointer_move(450.0, CONTAINER);
    assert_eq!(state.left_percent(), 45.0);
    assert_eq!(state.right_percent(), 55.0);
}

#[test]
fn width_always_within_bounds() {
    let (mut state, _host) = split(SplitConfig::default());
    state.pointer_down_on_divider();
    let mut x = -500.0;
    while x <= 1500.0 {
        state.pointer_move(x, CONTAINER);
        let left = state.left_percent();
        assert!((25.0..=60.0).contains(&left), "x={x} left={left}");
        x += 37.5;
    }
}

#[test]
fn repeated_move_is_idempotent() {
    let (mut once, _h1) = split(SplitConfig::default());
    once.pointer_down_on_divider();
    once.pointer_move(420.0, CONTAINER);

    let (mut twice, _h2) = split(SplitConfig::default());
    twice.pointer_down_on_divider();
    assert!(twice.pointer_move(420.0, CONTAINER));
    assert!(!twice.pointer_move(420.0, CONTAINER));

    assert_eq!(once.left_percent(), twice.left_percent());
}

#[test]
fn final_width_depends_only_on_last_move() {
    let sequences: [&[f32]; 4] = [
        &[510.0],
        &[100.0, 900.0, 510.0],
        &[900.0, 300.0, 333.0, 510.0],
        &[-40.0, 2000.0, 510.0],
    ];
    for seq in sequences {
        let (mut state, _host) = split(SplitConfig::default());
        state.pointer_down_on_divider();
        for &x in seq {
            state.pointer_move(x, CONTAINER);
        }
        assert_eq!(state.left_percent(), 51.0, "sequence {seq:?}");
    }
}

#[test]
fn pointer_up_freezes_width() {
    let (mut state, host) = split(SplitConfig::default());
    state.pointer_down_on_divider();
    state.pointer_move(450.0, CONTAINER);
    assert!(state.pointer_up());
    assert!(!state.is_dragging());
    assert!(host.is_pristine());

    assert!(!state.pointer_move(300.0, CONTAINER));
    assert!(!state.pointer_move(550.0, CONTAINER));
    assert_eq!(state.left_percent(), 45.0);
    assert!(!state.pointer_up());
}

#[test]
fn moves_while_idle_are_ignored() {
    let (mut state, _host) = split(SplitConfig::default());
    assert!(!state.pointer_move(550.0, CONTAINER));
    assert_eq!(state.left_percent(), 40.0);
}

#[test]
fn degenerate_container_keeps_previous_width() {
    let (mut state, _host) = split(SplitConfig::default());
    state.pointer_down_on_divider();
    state.pointer_move(500.0, CONTAINER);

    assert!(!state.pointer_move(10.0, Container::new(0.0, 0.0)));
    assert!(!state.pointer_move(10.0, Container::new(0.0, -100.0)));
    assert!(!state.pointer_move(f32::NAN, CONTAINER));
    assert_eq!(state.left_percent(), 50.0);
    assert!(!state.left_percent().is_nan());
}

#[test]
fn guard_held_only_while_dragging() {
    let (mut state, host) = split(SplitConfig::default());
    assert!(host.is_pristine());

    state.pointer_down_on_divider();
    assert_eq!(host.listener_count(), 1);
    assert_eq!(host.cursor(), CursorIcon::ColResize);
    assert!(!host.selection_enabled());

    // A second press does not claim twice.
    assert!(!state.pointer_down_on_divider());
    assert_eq!(host.listener_count(), 1);

    state.pointer_up();
    assert!(host.is_pristine());
}

#[test]
fn teardown_while_dragging_leaves_no_residue() {
    let host = Arc::new(HeadlessHost::new());
    {
        let mut state = SplitState::new(SplitConfig::default(), host.clone());
        state.pointer_down_on_divider();
        state.pointer_move(500.0, CONTAINER);
        assert!(!host.is_pristine());
    }
    assert!(host.is_pristine());
    assert_eq!(
        host.calls()
            .iter()
            .filter(|c| **c == HostCall::UnlistenPointer)
            .count(),
        1
    );
}

#[test]
fn explicit_teardown_then_drop_releases_once() {
    let (mut state, host) = split(SplitConfig::default());
    state.pointer_down_on_divider();
    state.teardown();
    assert!(!state.is_dragging());
    assert!(host.is_pristine());
    drop(state);
    assert_eq!(host.calls().len(), 6);
}

#[test]
fn cancel_restores_origin_width() {
    let (mut state, host) = split(SplitConfig::default());
    state.pointer_down_on_divider();
    state.pointer_move(550.0, CONTAINER);
    assert_eq!(state.left_percent(), 55.0);

    assert!(state.cancel_drag());
    assert_eq!(state.left_percent(), 40.0);
    assert!(host.is_pristine());
    assert!(!state.cancel_drag());
}

#[test]
fn drag_session_remembers_origin() {
    let (mut state, _host) = split(SplitConfig::default());
    state.set_left_percent(50.0);
    state.pointer_down_on_divider();
    match state.drag_state() {
        DragState::Dragging(session) => assert_eq!(session.origin_percent(), 50.0),
        DragState::Idle => panic!("expected dragging"),
    }
}

#[test]
fn nudge_is_clamped_and_ignored_while_dragging() {
    let (mut state, _host) = split(SplitConfig::default());
    assert!(state.nudge(5.0));
    assert_eq!(state.left_percent(), 45.0);
    state.nudge(100.0);
    assert_eq!(state.left_percent(), 60.0);
    state.nudge(-100.0);
    assert_eq!(state.left_percent(), 25.0);
    assert!(!state.nudge(f32::NAN));

    state.pointer_down_on_divider();
    assert!(!state.nudge(5.0));
    assert!(!state.reset());
    assert_eq!(state.left_percent(), 25.0);
    state.pointer_up();

    assert!(state.reset());
    assert_eq!(state.left_percent(), 40.0);
}

#[test]
fn set_left_percent_clamps_and_rejects_non_finite() {
    let (mut state, _host) = split(SplitConfig::default());
    assert!(state.set_left_percent(90.0));
    assert_eq!(state.left_percent(), 60.0);
    assert!(!state.set_left_percent(f32::INFINITY));
    assert_eq!(state.left_percent(), 60.0);
}

#[test]
fn failing_host_still_drags() {
    let host = Arc::new(HeadlessHost::failing());
    let mut state = SplitState::new(SplitConfig::default(), host.clone());
    assert!(state.pointer_down_on_divider());
    state.pointer_move(450.0, CONTAINER);
    assert_eq!(state.left_percent(), 45.0);
    assert!(state.pointer_up());
    assert_eq!(host.calls().len(), 6);
}

#[test]
fn headless_constructor_works_without_host() {
    let mut state = SplitState::headless(SplitConfig::default());
    state.pointer_down_on_divider();
    state.pointer_move(300.0, CONTAINER);
    assert_eq!(state.left_percent(), 30.0);
}
