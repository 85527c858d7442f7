//! Wowify core: pure workflow state machine and view-model helpers.
mod asset;
mod color;
mod effect;
mod msg;
pub mod quotes;
mod state;
mod update;
mod view_model;

pub use asset::{
    validate, PreviewRef, UploadedAsset, ValidationError, MAX_UPLOAD_BYTES, OVERSIZE_NOTICE,
};
pub use color::{Rgb, COLOR_ANCHOR};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    Attempt, EffectsState, Job, Phase, WorkflowState, WowifiedResult, WowifySettings,
    APOLOGY_NOTICE, DEFAULT_EMOJI_NAME,
};
pub use update::{startup_effects, update};
pub use view_model::WowViewModel;
