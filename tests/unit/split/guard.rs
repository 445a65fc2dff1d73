use super::*;

fn host() -> (Arc<HeadlessHost>, Arc<dyn InteractionHost>) {
    let host = Arc::new(HeadlessHost::new());
    let dyn_host: Arc<dyn InteractionHost> = host.clone();
    (host, dyn_host)
}

#[test]
fn acquire_claims_all_affordances() {
    let (host, dyn_host) = host();
    let guard = DragGuard::acquire(dyn_host);

    assert_eq!(host.listener_count(), 1);
    assert_eq!(host.cursor(), CursorIcon::ColResize);
    assert!(!host.selection_enabled());
    assert!(!host.is_pristine());

    drop(guard);
}

#[test]
fn drop_releases_in_reverse_order() {
    let (host, dyn_host) = host();
    {
        let _guard = DragGuard::acquire(dyn_host);
    }

    assert!(host.is_pristine());
    assert_eq!(
        host.calls(),
        vec![
            HostCall::ListenPointer,
            HostCall::SetCursor(CursorIcon::ColResize),
            HostCall::SetSelectionEnabled(false),
            HostCall::SetSelectionEnabled(true),
            HostCall::SetCursor(CursorIcon::Default),
            HostCall::UnlistenPointer,
        ]
    );
}

#[test]
fn explicit_release_is_not_repeated_on_drop() {
    let (host, dyn_host) = host();
    let guard = DragGuard::acquire(dyn_host);

    guard.release().unwrap();

    assert!(host.is_pristine());
    assert_eq!(host.calls().len(), 6);
}

#[test]
fn release_attempts_every_step_when_host_fails() {
    let host = Arc::new(HeadlessHost::failing());
    let dyn_host: Arc<dyn InteractionHost> = host.clone();
    let guard = DragGuard::acquire(dyn_host);

    assert!(guard.release().is_err());
    assert_eq!(
        &host.calls()[3..],
        &[
            HostCall::SetSelectionEnabled(true),
            HostCall::SetCursor(CursorIcon::Default),
            HostCall::UnlistenPointer,
        ]
    );
}

#[test]
fn selection_gate_is_shared_between_clones() {
    let gate = SelectionGate::new();
    let other = gate.clone();
    assert!(other.is_enabled());
    gate.set_enabled(false);
    assert!(!other.is_enabled());
}

#[test]
fn headless_host_exposes_its_selection_gate() {
    let (host, dyn_host) = host();
    let gate = host.selection_gate();
    let guard = DragGuard::acquire(dyn_host);
    assert!(!gate.is_enabled());
    drop(guard);
    assert!(gate.is_enabled());
}

#[test]
fn cursor_css_names() {
    assert_eq!(CursorIcon::Default.css_name(), "default");
    assert_eq!(CursorIcon::ColResize.css_name(), "ew-resize");
}
