#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::GenerationRequest;

/// Current contents of the prompt builder form.
///
/// One field per form control plus the checked requirement options in the
/// order they were checked. Only `feature_name` is required; everything else
/// may stay empty.
#[derive(Clone, Debug, Default)]
pub struct FormState {
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

impl FormState {
    /// Whether the form passes the pre-submit check: a non-blank feature name.
    pub fn feature_name_valid(&self) -> bool {
        !self.feature_name.trim().is_empty()
    }

    /// Add or remove a requirement option, preserving check order.
    pub fn toggle_requirement(&mut self, value: &str, checked: bool) {
        if checked {
            if !self.requirements.iter().any(|r| r == value) {
                self.requirements.push(value.to_owned());
            }
        } else {
            self.requirements.retain(|r| r != value);
        }
    }

    /// Snapshot the form into the request payload sent to the backend.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            app_type: self.app_type.clone(),
            test_type: self.test_type.clone(),
            framework: self.framework.clone(),
            feature_name: self.feature_name.clone(),
            feature_description: self.feature_description.clone(),
            user_story: self.user_story.clone(),
            programming_language: self.programming_language.clone(),
            scenarios: self.scenarios.clone(),
            test_data: self.test_data.clone(),
            environment: self.environment.clone(),
            constraints: self.constraints.clone(),
            additional_notes: self.additional_notes.clone(),
            requirements: self.requirements.clone(),
        }
    }
}
