use super::*;

// =============================================================
// split_suggestions
// =============================================================

#[test]
fn split_preserves_order_and_count() {
    let items = split_suggestions("Hi there||How are you?||What's new?");
    assert_eq!(items, vec!["Hi there", "How are you?", "What's new?"]);
}

#[test]
fn split_does_not_trim() {
    let items = split_suggestions(" a || b ");
    assert_eq!(items, vec![" a ", " b "]);
}

#[test]
fn split_empty_response_is_empty_list() {
    assert!(split_suggestions("").is_empty());
}

#[test]
fn split_without_delimiter_is_single_item() {
    assert_eq!(split_suggestions("just one"), vec!["just one"]);
}

#[test]
fn split_keeps_empty_segments_between_delimiters() {
    assert_eq!(split_suggestions("a||||b"), vec!["a", "", "b"]);
}

#[test]
fn split_single_pipe_is_not_a_delimiter() {
    assert_eq!(split_suggestions("a|b||c"), vec!["a|b", "c"]);
}

// =============================================================
// SuggestionState
// =============================================================

#[test]
fn suggestion_state_default_is_idle_and_empty() {
    let state = SuggestionState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_fetch_coalesces_while_in_flight() {
    let mut state = SuggestionState::default();
    assert!(state.begin_fetch());
    assert!(!state.begin_fetch());
    state.finish_fetch(Ok(vec!["x".into()]));
    assert!(state.begin_fetch());
}

#[test]
fn finish_fetch_replaces_items_wholesale() {
    let mut state = SuggestionState::default();
    state.begin_fetch();
    state.finish_fetch(Ok(vec!["a".into(), "b".into()]));
    state.begin_fetch();
    state.finish_fetch(Ok(vec!["c".into()]));
    assert_eq!(state.items, vec!["c"]);
    assert!(!state.loading);
}

#[test]
fn finish_fetch_error_keeps_previous_items() {
    let mut state = SuggestionState::default();
    state.begin_fetch();
    state.finish_fetch(Ok(vec!["keep".into()]));
    state.begin_fetch();
    state.finish_fetch(Err(SuggestionFetchError::Status(500)));
    assert_eq!(state.items, vec!["keep"]);
    assert!(!state.loading);
}

#[test]
fn failed_first_fetch_leaves_list_empty_and_allows_retry() {
    let mut state = SuggestionState::default();
    state.begin_fetch();
    state.finish_fetch(Err(SuggestionFetchError::Unavailable));
    assert!(state.items.is_empty());
    assert!(state.begin_fetch());
}
