use super::*;

// =============================================================
// Serialization — request bodies
// =============================================================

#[test]
fn generation_request_serializes_camel_case_keys() {
    let request = GenerationRequest {
        feature_name: "Login Flow".to_owned(),
        test_type: "E2E Testing".to_owned(),
        programming_language: "Java".to_owned(),
        requirements: vec!["Page Object Model".to_owned(), "CI/CD Integration".to_owned()],
        ..GenerationRequest::default()
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value["featureName"], "Login Flow");
    assert_eq!(value["testType"], "E2E Testing");
    assert_eq!(value["programmingLanguage"], "Java");
    assert_eq!(
        value["requirements"],
        serde_json::json!(["Page Object Model", "CI/CD Integration"])
    );
    // Optional fields still serialize, as empty strings.
    assert_eq!(value["appType"], "");
    assert_eq!(value["additionalNotes"], "");
}

#[test]
fn template_request_serializes_template_type_key() {
    let request = TemplateRequest {
        template_type: "web-e2e".to_owned(),
    };
    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(value, serde_json::json!({ "templateType": "web-e2e" }));
}

// =============================================================
// Deserialization — response bodies
// =============================================================

#[test]
fn prompt_response_reads_generated_prompt() {
    let body: PromptResponse =
        serde_json::from_str(r#"{ "generatedPrompt": "Write tests for login." }"#)
            .expect("deserialize");
    assert_eq!(body.generated_prompt, "Write tests for login.");
}

#[test]
fn history_entry_ignores_unknown_fields_and_defaults_missing() {
    let body: HistoryEntry = serde_json::from_str(
        r#"{
            "id": 42,
            "featureName": "Checkout",
            "testType": "API Testing",
            "createdAt": "2026-08-29T10:15:30",
            "generatedPrompt": "...",
            "templateType": null
        }"#,
    )
    .expect("deserialize");

    assert_eq!(body.feature_name, "Checkout");
    assert_eq!(body.test_type, "API Testing");
    assert_eq!(body.created_at, "2026-08-29T10:15:30");
    // `framework` was absent entirely.
    assert_eq!(body.framework, "");
}

#[test]
fn history_list_preserves_server_order() {
    let list: Vec<HistoryEntry> = serde_json::from_str(
        r#"[
            { "featureName": "newest" },
            { "featureName": "older" },
            { "featureName": "oldest" }
        ]"#,
    )
    .expect("deserialize");

    let names: Vec<&str> = list.iter().map(|e| e.feature_name.as_str()).collect();
    assert_eq!(names, ["newest", "older", "oldest"]);
}

#[test]
fn stats_summary_reads_counts_and_period() {
    let stats: StatsSummary = serde_json::from_str(
        r#"{ "totalPrompts": 10, "recentPrompts": 3, "period": "7 days" }"#,
    )
    .expect("deserialize");

    assert_eq!(stats.total_prompts, 10);
    assert_eq!(stats.recent_prompts, 3);
    assert_eq!(stats.period, "7 days");
}
