use std::collections::BTreeMap;

use crate::{Attempt, WowifiedResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Thumbnail catalog arrived from the service (empty when none exists yet).
    CatalogLoaded(BTreeMap<String, String>),
    /// User picked a local image file.
    ImageChosen { file_name: String, bytes: Vec<u8> },
    /// User edited the name used when saving the result.
    EmojiNameEdited(String),
    /// User asked for the uploaded image to be wowified (or rewowified).
    WowifyClicked,
    /// The engine finished a submission attempt; `Err` carries a log-worthy
    /// description, the user-facing notice is canned.
    SubmitResolved {
        attempt: Attempt,
        outcome: Result<String, String>,
    },
    /// The engine's polling session reached a terminal outcome.
    PollResolved {
        attempt: Attempt,
        outcome: Result<WowifiedResult, String>,
    },
    /// Cosmetic color timer fired.
    ColorTick,
    /// Quote timer fired and drew a fresh quote.
    QuoteRolled(String),
    /// User opened the background-selection modal.
    SettingsOpened,
    /// User closed the background-selection modal.
    SettingsClosed,
    /// User picked a background thumbnail; `""` lets the service choose.
    BackgroundPicked(String),
    /// User asked to save the wowified result locally.
    SaveClicked,
    /// User dismissed the error toast.
    NoticeDismissed,
    /// User reset the workflow to its initial state.
    RestartClicked,
}
