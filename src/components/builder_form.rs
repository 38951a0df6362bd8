//! Prompt builder form: collects the generation payload and submits it.

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::state::notify::{NotifyState, Severity};
use crate::state::prompt::PromptState;

/// Dropdown options for the application type field.
const APP_TYPES: &[&str] = &[
    "Web Application",
    "Mobile App",
    "REST API",
    "Desktop Application",
];

const TEST_TYPES: &[&str] = &[
    "E2E Testing",
    "API Testing",
    "Unit Testing",
    "Integration Testing",
    "Performance Testing",
    "Security Testing",
];

const FRAMEWORKS: &[&str] = &[
    "Playwright",
    "Selenium",
    "Cypress",
    "Appium",
    "RestAssured",
    "JUnit",
];

const LANGUAGES: &[&str] = &["Java", "JavaScript", "TypeScript", "Python", "C#"];

/// Checkbox options collected into `requirements`, in display order.
const REQUIREMENT_OPTIONS: &[&str] = &[
    "Page Object Model",
    "Data-Driven Testing",
    "Parallel Execution",
    "CI/CD Integration",
    "Cross-Browser Testing",
    "Reporting & Screenshots",
];

type FieldGetter = fn(&FormState) -> &String;
type FieldSetter = fn(&mut FormState, String);

/// Derive a (read, write) pair for one form field backed by the shared
/// `FormState` signal.
fn field_binding(
    form: RwSignal<FormState>,
    get: FieldGetter,
    set: FieldSetter,
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || get(&form.get()).clone());
    let on_change = Callback::new(move |v| form.update(|f| set(f, v)));
    (value, on_change)
}

/// The prompt builder form.
///
/// Submits via the generate endpoint. An empty (trimmed) feature name aborts
/// with a warning before any request is made. The loading flag is set for the
/// duration of the round trip and cleared on success and failure alike.
#[component]
pub fn BuilderForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let prompt = expect_context::<RwSignal<PromptState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let do_generate = move || {
        let state = form.get_untracked();
        if !state.feature_name_valid() {
            notify.update(|s| s.show("Please enter a feature name", Severity::Warning));
            return;
        }
        let request = state.to_request();

        #[cfg(feature = "web")]
        {
            prompt.update(|p| p.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::generate(&request).await {
                    Ok(text) => {
                        prompt.update(|p| p.generated = Some(text));
                        notify.update(|s| {
                            s.show("Prompt generated successfully!", Severity::Success);
                        });
                    }
                    Err(err) => {
                        log::error!("prompt generation failed: {err}");
                        notify.update(|s| {
                            s.show("Error generating prompt. Please try again.", Severity::Danger);
                        });
                    }
                }
                // Runs on both paths, the `finally` of this flow.
                prompt.update(|p| p.loading = false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = request;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_generate();
    };

    let (app_type, set_app_type) = field_binding(form, |f| &f.app_type, |f, v| f.app_type = v);
    let (test_type, set_test_type) = field_binding(form, |f| &f.test_type, |f, v| f.test_type = v);
    let (framework, set_framework) = field_binding(form, |f| &f.framework, |f, v| f.framework = v);
    let (feature_name, set_feature_name) =
        field_binding(form, |f| &f.feature_name, |f, v| f.feature_name = v);
    let (feature_description, set_feature_description) = field_binding(
        form,
        |f| &f.feature_description,
        |f, v| f.feature_description = v,
    );
    let (user_story, set_user_story) =
        field_binding(form, |f| &f.user_story, |f, v| f.user_story = v);
    let (language, set_language) = field_binding(
        form,
        |f| &f.programming_language,
        |f, v| f.programming_language = v,
    );
    let (scenarios, set_scenarios) =
        field_binding(form, |f| &f.scenarios, |f, v| f.scenarios = v);
    let (test_data, set_test_data) =
        field_binding(form, |f| &f.test_data, |f, v| f.test_data = v);
    let (environment, set_environment) =
        field_binding(form, |f| &f.environment, |f, v| f.environment = v);
    let (constraints, set_constraints) =
        field_binding(form, |f| &f.constraints, |f, v| f.constraints = v);
    let (additional_notes, set_additional_notes) = field_binding(
        form,
        |f| &f.additional_notes,
        |f, v| f.additional_notes = v,
    );

    view! {
        <form class="builder-form" on:submit=on_submit>
            <div class="builder-form__row">
                <SelectField
                    label="Application Type"
                    name="appType"
                    options=APP_TYPES
                    value=app_type
                    on_change=set_app_type
                />
                <SelectField
                    label="Test Type"
                    name="testType"
                    options=TEST_TYPES
                    value=test_type
                    on_change=set_test_type
                />
            </div>
            <div class="builder-form__row">
                <SelectField
                    label="Framework"
                    name="framework"
                    options=FRAMEWORKS
                    value=framework
                    on_change=set_framework
                />
                <SelectField
                    label="Programming Language"
                    name="programmingLanguage"
                    options=LANGUAGES
                    value=language
                    on_change=set_language
                />
            </div>

            <TextField
                label="Feature Name *"
                name="featureName"
                placeholder="e.g. Login Flow"
                value=feature_name
                on_change=set_feature_name
            />
            <TextAreaField
                label="Feature Description"
                name="featureDescription"
                value=feature_description
                on_change=set_feature_description
            />
            <TextAreaField
                label="User Story"
                name="userStory"
                value=user_story
                on_change=set_user_story
            />
            <TextAreaField
                label="Test Scenarios"
                name="scenarios"
                value=scenarios
                on_change=set_scenarios
            />
            <TextAreaField
                label="Test Data"
                name="testData"
                value=test_data
                on_change=set_test_data
            />
            <TextField
                label="Environment"
                name="environment"
                placeholder="e.g. staging"
                value=environment
                on_change=set_environment
            />
            <TextAreaField
                label="Constraints"
                name="constraints"
                value=constraints
                on_change=set_constraints
            />
            <TextAreaField
                label="Additional Notes"
                name="additionalNotes"
                value=additional_notes
                on_change=set_additional_notes
            />

            <fieldset class="builder-form__requirements">
                <legend>"Requirements"</legend>
                {REQUIREMENT_OPTIONS
                    .iter()
                    .map(|opt| {
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    value=*opt
                                    prop:checked=move || {
                                        form.get().requirements.iter().any(|r| r.as_str() == *opt)
                                    }
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|f| f.toggle_requirement(opt, checked));
                                    }
                                />
                                <span>{*opt}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <button
                class="btn btn--primary builder-form__submit"
                type="submit"
                disabled=move || prompt.get().loading
            >
                {move || {
                    if prompt.get().loading {
                        "Generating..."
                    } else {
                        "🚀 Generate Test Automation Prompt"
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn TextField(
    label: &'static str,
    name: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn TextAreaField(
    label: &'static str,
    name: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                name=name
                rows=3
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    name: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                name=name
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"-- Select --"</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
