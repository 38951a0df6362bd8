#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

/// State for the generated prompt output.
///
/// `generated` holds the latest prompt text returned by the backend; a later
/// response simply overwrites it. `loading` is set for the duration of a
/// generate or template request and drives the submit button affordance.
#[derive(Clone, Debug, Default)]
pub struct PromptState {
    pub generated: Option<String>,
    pub loading: bool,
}
