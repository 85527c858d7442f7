use crate::Phase;

/// Render-ready snapshot of the workflow; everything a display layer needs
/// without reaching into [`crate::WorkflowState`] internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WowViewModel {
    pub phase: Phase,
    pub emoji_name: String,
    /// Local `data:` URL of the uploaded image, when one exists.
    pub preview_url: Option<String>,
    pub wowified_full: Option<String>,
    pub wowified_small: Option<String>,
    pub loading_color: String,
    pub loading_quote: String,
    pub notice: Option<String>,
    pub settings_open: bool,
    pub selected_background: String,
    pub background_ids: Vec<String>,
    pub in_flight: bool,
    /// Rewowify is only offered when the selection is the random option.
    pub offer_rewowify: bool,
    pub dirty: bool,
}
