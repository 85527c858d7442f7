use std::collections::BTreeMap;

use crate::asset::UploadedAsset;
use crate::color::Rgb;
use crate::view_model::WowViewModel;

/// Monotonic submission counter; correlates engine completions with the
/// submission that caused them so stale events are ignored.
pub type Attempt = u64;

/// Name used for the saved file until the user picks an image.
pub const DEFAULT_EMOJI_NAME: &str = "wow-emoji";

/// Notice shown for any submission or polling failure.
pub const APOLOGY_NOTICE: &str = "🙈 Uh oh, something went wrong -- sorry! Try again soon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploaded,
    Submitting,
    Polling,
    Completed,
    Failed,
}

impl Phase {
    /// True while a job and its timers are active.
    pub fn in_flight(self) -> bool {
        matches!(self, Phase::Submitting | Phase::Polling)
    }
}

/// The in-flight job; exists only while polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub attempt: Attempt,
    pub token: String,
    pub background_id: String,
}

/// Base64-encoded output of a completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WowifiedResult {
    pub full_encoded: String,
    pub small_encoded: String,
}

/// Cosmetic loading-screen state, mutated only while a job is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectsState {
    pub color: Rgb,
    pub quote: String,
}

/// Background selection and the thumbnail catalog behind the settings modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WowifySettings {
    pub modal_open: bool,
    /// Empty string means "let the service choose randomly".
    pub selected_background: String,
    pub thumbnails: BTreeMap<String, String>,
}

/// State of one wowify workflow instance.
///
/// Owns every mutable field the workflow touches; no globals, so each
/// instance is independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowState {
    phase: Phase,
    asset: Option<UploadedAsset>,
    job: Option<Job>,
    result: Option<WowifiedResult>,
    emoji_name: String,
    notice: Option<String>,
    effects: EffectsState,
    settings: WowifySettings,
    attempt: Attempt,
    dirty: bool,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            asset: None,
            job: None,
            result: None,
            emoji_name: DEFAULT_EMOJI_NAME.to_string(),
            notice: None,
            effects: EffectsState::default(),
            settings: WowifySettings::default(),
            attempt: 0,
            dirty: false,
        }
    }
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_attempt(&self) -> Attempt {
        self.attempt
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn result(&self) -> Option<&WowifiedResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> WowViewModel {
        WowViewModel {
            phase: self.phase,
            emoji_name: self.emoji_name.clone(),
            preview_url: self
                .asset
                .as_ref()
                .map(|asset| asset.preview.as_data_url().to_string()),
            wowified_full: self.result.as_ref().map(|r| r.full_encoded.clone()),
            wowified_small: self.result.as_ref().map(|r| r.small_encoded.clone()),
            loading_color: self.effects.color.css(),
            loading_quote: self.effects.quote.clone(),
            notice: self.notice.clone(),
            settings_open: self.settings.modal_open,
            selected_background: self.settings.selected_background.clone(),
            background_ids: self.settings.thumbnails.keys().cloned().collect(),
            in_flight: self.phase.in_flight(),
            offer_rewowify: self.phase == Phase::Completed
                && self.settings.selected_background.is_empty(),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; used by render loops to coalesce.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn upload(&mut self, asset: UploadedAsset) {
        self.emoji_name = asset.derived_name.clone();
        self.asset = Some(asset);
        self.phase = Phase::Uploaded;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn asset_bytes(&self) -> Option<Vec<u8>> {
        self.asset.as_ref().map(|asset| asset.bytes.clone())
    }

    pub(crate) fn selected_background(&self) -> &str {
        &self.settings.selected_background
    }

    /// Enters `Submitting` and returns the fresh attempt number.
    pub(crate) fn begin_submission(&mut self) -> Attempt {
        self.attempt += 1;
        self.phase = Phase::Submitting;
        self.effects.quote.clear();
        self.notice = None;
        self.mark_dirty();
        self.attempt
    }

    pub(crate) fn enter_polling(&mut self, token: String) {
        self.job = Some(Job {
            attempt: self.attempt,
            token,
            background_id: self.settings.selected_background.clone(),
        });
        self.phase = Phase::Polling;
        self.mark_dirty();
    }

    pub(crate) fn complete(&mut self, result: WowifiedResult) {
        self.job = None;
        self.result = Some(result);
        self.phase = Phase::Completed;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self) {
        self.job = None;
        self.result = None;
        self.phase = Phase::Failed;
        self.notice = Some(APOLOGY_NOTICE.to_string());
        self.mark_dirty();
    }

    /// Returns everything except the settings and the attempt counter to
    /// defaults. The counter stays monotonic so completions from before the
    /// reset can never be mistaken for current ones.
    pub(crate) fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.asset = None;
        self.job = None;
        self.result = None;
        self.emoji_name = DEFAULT_EMOJI_NAME.to_string();
        self.notice = None;
        self.effects = EffectsState::default();
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn advance_color(&mut self) {
        self.effects.color = self.effects.color.step();
        self.mark_dirty();
    }

    pub(crate) fn set_quote(&mut self, quote: String) {
        self.effects.quote = quote;
        self.mark_dirty();
    }

    pub(crate) fn set_emoji_name(&mut self, name: String) {
        self.emoji_name = name;
        self.mark_dirty();
    }

    pub(crate) fn emoji_name(&self) -> &str {
        &self.emoji_name
    }

    pub(crate) fn set_catalog(&mut self, thumbnails: BTreeMap<String, String>) {
        self.settings.thumbnails = thumbnails;
        self.mark_dirty();
    }

    pub(crate) fn open_settings(&mut self) {
        self.settings.modal_open = true;
        self.mark_dirty();
    }

    pub(crate) fn close_settings(&mut self) {
        self.settings.modal_open = false;
        self.mark_dirty();
    }

    pub(crate) fn settings_open(&self) -> bool {
        self.settings.modal_open
    }

    pub(crate) fn select_background(&mut self, id: String) {
        self.settings.selected_background = id;
        self.mark_dirty();
    }
}
