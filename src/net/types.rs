//! Wire types for the `/api/prompts` endpoint set.
//!
//! Field names are camelCase on the wire to match the backend's JSON
//! contract; unknown response fields are ignored so the client tolerates
//! server-side additions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Request body for `POST /api/prompts/generate`.
///
/// Built fresh from the form on every submit and discarded after the send.
/// Only `feature_name` is required (validated before the request is issued);
/// everything else may be empty. `requirements` preserves the order in which
/// the options were checked.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub app_type: String,
    pub test_type: String,
    pub framework: String,
    pub feature_name: String,
    pub feature_description: String,
    pub user_story: String,
    pub programming_language: String,
    pub scenarios: String,
    pub test_data: String,
    pub environment: String,
    pub constraints: String,
    pub additional_notes: String,
    pub requirements: Vec<String>,
}

/// Request body for `POST /api/prompts/template`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub template_type: String,
}

/// Response body shared by the generate and template endpoints.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub generated_prompt: String,
}

/// One row of `GET /api/prompts/history`.
///
/// The server returns the full stored record; the client only needs the
/// display subset. Missing fields default to empty rather than failing the
/// whole list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub feature_name: String,
    #[serde(default)]
    pub test_type: String,
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub generated_prompt: String,
}

/// Response body of `GET /api/prompts/stats`.
///
/// `period` is a display label such as `"7 days"`. The average-per-day figure
/// is derived client-side, not transmitted.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_prompts: i64,
    pub recent_prompts: i64,
    pub period: String,
}
