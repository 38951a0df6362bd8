use super::*;

// =============================================================
// Replacement semantics — at most one visible
// =============================================================

#[test]
fn default_has_no_notification() {
    let state = NotifyState::default();
    assert!(state.current.is_none());
}

#[test]
fn show_replaces_previous_notification() {
    let mut state = NotifyState::default();
    state.show("first", Severity::Info);
    state.show("second", Severity::Success);
    state.show("third", Severity::Warning);

    let current = state.current.expect("one notification visible");
    assert_eq!(current.message, "third");
    assert_eq!(current.severity, Severity::Warning);
}

#[test]
fn show_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    state.show("first", Severity::Info);
    let first_id = state.current.as_ref().map(|n| n.id).expect("visible");
    state.show("second", Severity::Info);
    let second_id = state.current.as_ref().map(|n| n.id).expect("visible");

    assert!(second_id > first_id);
}

// =============================================================
// Dismissal — stale timers must not clear newer notifications
// =============================================================

#[test]
fn dismiss_clears_matching_notification() {
    let mut state = NotifyState::default();
    state.show("bye", Severity::Danger);
    let id = state.current.as_ref().map(|n| n.id).expect("visible");

    state.dismiss(id);
    assert!(state.current.is_none());
}

#[test]
fn dismiss_with_stale_id_keeps_current() {
    let mut state = NotifyState::default();
    state.show("old", Severity::Info);
    let stale_id = state.current.as_ref().map(|n| n.id).expect("visible");
    state.show("new", Severity::Success);

    state.dismiss(stale_id);
    let current = state.current.expect("newer notification survives");
    assert_eq!(current.message, "new");
}

// =============================================================
// Severity CSS mapping
// =============================================================

#[test]
fn severity_css_classes() {
    assert_eq!(Severity::Info.css_class(), "info");
    assert_eq!(Severity::Success.css_class(), "success");
    assert_eq!(Severity::Warning.css_class(), "warning");
    assert_eq!(Severity::Danger.css_class(), "danger");
}
