use super::*;

#[test]
fn prompt_state_default_has_no_output() {
    let state = PromptState::default();
    assert!(state.generated.is_none());
}

#[test]
fn prompt_state_default_not_loading() {
    let state = PromptState::default();
    assert!(!state.loading);
}
