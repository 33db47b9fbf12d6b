use super::*;

#[test]
fn toast_state_default_has_nothing_active() {
    let state = ToastState::default();
    assert!(state.active().is_none());
}

#[test]
fn push_shows_first_toast_and_queues_the_rest() {
    let mut state = ToastState::default();
    let first = state.push(Toast::info("one"));
    let second = state.push(Toast::info("two"));
    assert_ne!(first, second);
    assert_eq!(state.active().map(|t| t.title.as_str()), Some("one"));
    assert!(state.dismiss(first));
    assert_eq!(state.active().map(|t| t.id), Some(second));
    assert!(state.dismiss(second));
    assert!(state.active().is_none());
}

#[test]
fn dismiss_promotes_next_pending_in_fifo_order() {
    let mut state = ToastState::default();
    let first = state.push(Toast::info("one"));
    state.push(Toast::info("two"));
    state.push(Toast::info("three"));
    assert!(state.dismiss(first));
    assert_eq!(state.active().map(|t| t.title.as_str()), Some("two"));
    let second = state.active().map_or(0, |t| t.id);
    assert!(state.dismiss(second));
    assert_eq!(state.active().map(|t| t.title.as_str()), Some("three"));
}

#[test]
fn dismiss_with_stale_id_is_ignored() {
    let mut state = ToastState::default();
    let first = state.push(Toast::info("one"));
    let second = state.push(Toast::info("two"));
    assert!(state.dismiss(first));
    assert!(!state.dismiss(first));
    assert_eq!(state.active().map(|t| t.id), Some(second));
}

#[test]
fn dismiss_last_toast_clears_active() {
    let mut state = ToastState::default();
    let id = state.push(Toast::error("boom"));
    assert!(state.dismiss(id));
    assert!(state.active().is_none());
}

#[test]
fn builders_set_optional_fields() {
    let toast = Toast::error("Could not load suggestions").with_description("status 502").with_code("{}");
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.description.as_deref(), Some("status 502"));
    assert_eq!(toast.code.as_deref(), Some("{}"));
}
