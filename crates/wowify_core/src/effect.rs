use crate::Attempt;

/// IO requested by the state machine; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the background thumbnail catalog.
    FetchCatalog,
    /// Start the cosmetic color and quote timers.
    StartLoadingEffects,
    /// Stop the cosmetic timers; safe when nothing is running.
    StopLoadingEffects,
    /// Submit the asset to the wowify service.
    SubmitJob {
        attempt: Attempt,
        bytes: Vec<u8>,
        background_id: String,
    },
    /// Begin polling for the job's outcome.
    StartPolling { attempt: Attempt, token: String },
    /// Cancel any active polling session; safe when none is active.
    StopPolling,
    /// Decode and write the wowified result to disk as `<file_name>.webp`.
    SaveResult { file_name: String, encoded: String },
}
