use crate::{asset, Effect, Msg, Phase, WorkflowState, WowifiedResult};

/// Effects to run when a workflow instance starts. Fetching the catalog is
/// idempotent, so re-running these after a transient failure is safe.
pub fn startup_effects() -> Vec<Effect> {
    vec![Effect::FetchCatalog]
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WorkflowState, msg: Msg) -> (WorkflowState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogLoaded(thumbnails) => {
            state.set_catalog(thumbnails);
            Vec::new()
        }
        Msg::ImageChosen { file_name, bytes } => {
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            match asset::validate(&file_name, bytes) {
                Ok(uploaded) => state.upload(uploaded),
                Err(_) => state.set_notice(asset::OVERSIZE_NOTICE.to_string()),
            }
            Vec::new()
        }
        Msg::EmojiNameEdited(name) => {
            if matches!(state.phase(), Phase::Uploaded | Phase::Completed) {
                state.set_emoji_name(name);
            }
            Vec::new()
        }
        Msg::WowifyClicked => {
            if !may_wowify(&state) {
                return (state, Vec::new());
            }
            let Some(bytes) = state.asset_bytes() else {
                return (state, Vec::new());
            };
            let background_id = state.selected_background().to_string();
            let attempt = state.begin_submission();
            vec![
                Effect::StartLoadingEffects,
                Effect::SubmitJob {
                    attempt,
                    bytes,
                    background_id,
                },
            ]
        }
        Msg::SubmitResolved { attempt, outcome } => {
            if state.phase() != Phase::Submitting || attempt != state.current_attempt() {
                return (state, Vec::new());
            }
            match outcome {
                Ok(token) => {
                    state.enter_polling(token.clone());
                    vec![Effect::StartPolling { attempt, token }]
                }
                Err(_) => {
                    // No job was created, so there is no poll timer to stop.
                    state.fail();
                    vec![Effect::StopLoadingEffects]
                }
            }
        }
        Msg::PollResolved { attempt, outcome } => {
            if state.phase() != Phase::Polling || attempt != state.current_attempt() {
                return (state, Vec::new());
            }
            match outcome {
                Ok(WowifiedResult {
                    full_encoded,
                    small_encoded,
                }) => state.complete(WowifiedResult {
                    full_encoded,
                    small_encoded,
                }),
                Err(_) => state.fail(),
            }
            // The poll scheduler stops itself on a terminal outcome, but the
            // state machine does not assume that; it clears its own handle.
            vec![Effect::StopLoadingEffects, Effect::StopPolling]
        }
        Msg::ColorTick => {
            if state.phase().in_flight() {
                state.advance_color();
            }
            Vec::new()
        }
        Msg::QuoteRolled(quote) => {
            if state.phase().in_flight() {
                state.set_quote(quote);
            }
            Vec::new()
        }
        Msg::SettingsOpened => {
            if matches!(state.phase(), Phase::Uploaded | Phase::Completed)
                && !state.settings_open()
            {
                state.open_settings();
            }
            Vec::new()
        }
        Msg::SettingsClosed => {
            if state.settings_open() {
                state.close_settings();
            }
            Vec::new()
        }
        Msg::BackgroundPicked(id) => {
            if state.settings_open() {
                state.select_background(id);
            }
            Vec::new()
        }
        Msg::SaveClicked => match (state.phase(), state.result()) {
            (Phase::Completed, Some(result)) => vec![Effect::SaveResult {
                file_name: state.emoji_name().to_string(),
                encoded: result.small_encoded.clone(),
            }],
            _ => Vec::new(),
        },
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::RestartClicked => {
            state.reset();
            // Unconditional teardown: both stops are idempotent on the
            // platform side, so emitting them from any phase is safe.
            vec![Effect::StopLoadingEffects, Effect::StopPolling]
        }
    };

    (state, effects)
}

/// A new submission may only start from `Uploaded`, a failed attempt, or a
/// completed one whose background selection is the random option
/// ("rewowify").
fn may_wowify(state: &WorkflowState) -> bool {
    match state.phase() {
        Phase::Uploaded | Phase::Failed => true,
        Phase::Completed => state.selected_background().is_empty(),
        Phase::Idle | Phase::Submitting | Phase::Polling => false,
    }
}
