use super::*;

#[test]
fn filename_lowercases_and_hyphenates() {
    assert_eq!(
        filename_for("Login Flow"),
        "automation-prompt-login-flow.txt"
    );
}

#[test]
fn filename_collapses_whitespace_runs() {
    assert_eq!(
        filename_for("  Checkout \t Payment  Flow "),
        "automation-prompt-checkout-payment-flow.txt"
    );
}

#[test]
fn filename_single_word() {
    assert_eq!(filename_for("Search"), "automation-prompt-search.txt");
}

#[test]
fn filename_blank_feature_name_falls_back() {
    assert_eq!(filename_for(""), "automation-prompt-prompt.txt");
    assert_eq!(filename_for("   "), "automation-prompt-prompt.txt");
}
