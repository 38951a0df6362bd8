/// Tabs on the builder page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Builder,
    Templates,
}

/// UI state for the builder page tab switch.
///
/// Loading a template jumps back to the builder tab so the generated prompt
/// is visible.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
}
