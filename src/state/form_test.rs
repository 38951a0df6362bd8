use super::*;

// =============================================================
// Feature name validation
// =============================================================

#[test]
fn empty_feature_name_is_invalid() {
    let form = FormState::default();
    assert!(!form.feature_name_valid());
}

#[test]
fn whitespace_only_feature_name_is_invalid() {
    let form = FormState {
        feature_name: "   \t".to_owned(),
        ..FormState::default()
    };
    assert!(!form.feature_name_valid());
}

#[test]
fn feature_name_with_content_is_valid() {
    let form = FormState {
        feature_name: "  Login Flow  ".to_owned(),
        ..FormState::default()
    };
    assert!(form.feature_name_valid());
}

// =============================================================
// Requirement toggling
// =============================================================

#[test]
fn toggle_requirement_preserves_check_order() {
    let mut form = FormState::default();
    form.toggle_requirement("CI/CD Integration", true);
    form.toggle_requirement("Page Object Model", true);

    assert_eq!(form.requirements, ["CI/CD Integration", "Page Object Model"]);
}

#[test]
fn toggle_requirement_unchecked_removes_entry() {
    let mut form = FormState::default();
    form.toggle_requirement("Parallel Execution", true);
    form.toggle_requirement("Reporting & Screenshots", true);
    form.toggle_requirement("Parallel Execution", false);

    assert_eq!(form.requirements, ["Reporting & Screenshots"]);
}

#[test]
fn toggle_requirement_checked_twice_keeps_single_entry() {
    let mut form = FormState::default();
    form.toggle_requirement("Data-Driven Testing", true);
    form.toggle_requirement("Data-Driven Testing", true);

    assert_eq!(form.requirements, ["Data-Driven Testing"]);
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn to_request_copies_all_fields() {
    let mut form = FormState {
        app_type: "Web Application".to_owned(),
        test_type: "E2E Testing".to_owned(),
        framework: "Playwright".to_owned(),
        feature_name: "Checkout".to_owned(),
        feature_description: "Cart to payment".to_owned(),
        user_story: "As a shopper...".to_owned(),
        programming_language: "TypeScript".to_owned(),
        scenarios: "happy path".to_owned(),
        test_data: "test cards".to_owned(),
        environment: "staging".to_owned(),
        constraints: "no real payments".to_owned(),
        additional_notes: "n/a".to_owned(),
        requirements: Vec::new(),
    };
    form.toggle_requirement("Cross-Browser Testing", true);

    let request = form.to_request();
    assert_eq!(request.feature_name, "Checkout");
    assert_eq!(request.framework, "Playwright");
    assert_eq!(request.environment, "staging");
    assert_eq!(request.requirements, ["Cross-Browser Testing"]);
}

#[test]
fn to_request_keeps_optional_fields_empty() {
    let form = FormState {
        feature_name: "Login".to_owned(),
        ..FormState::default()
    };

    let request = form.to_request();
    assert_eq!(request.app_type, "");
    assert_eq!(request.additional_notes, "");
    assert!(request.requirements.is_empty());
}
