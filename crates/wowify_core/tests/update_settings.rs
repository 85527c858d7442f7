use std::collections::BTreeMap;
use std::sync::Once;

use wowify_core::{update, Effect, Msg, Phase, WorkflowState, WowifiedResult};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wowify_logging::initialize_for_tests);
}

fn uploaded_state() -> WorkflowState {
    let (state, _) = update(
        WorkflowState::new(),
        Msg::ImageChosen {
            file_name: "cat.jpg".to_string(),
            bytes: vec![7u8; 16],
        },
    );
    state
}

fn completed_state(background: &str) -> WorkflowState {
    let state = uploaded_state();
    let state = if background.is_empty() {
        state
    } else {
        let (state, _) = update(state, Msg::SettingsOpened);
        let (state, _) = update(state, Msg::BackgroundPicked(background.to_string()));
        let (state, _) = update(state, Msg::SettingsClosed);
        state
    };
    let (state, _) = update(state, Msg::WowifyClicked);
    let (state, _) = update(
        state,
        Msg::SubmitResolved {
            attempt: 1,
            outcome: Ok("abc123".to_string()),
        },
    );
    let (state, _) = update(
        state,
        Msg::PollResolved {
            attempt: 1,
            outcome: Ok(WowifiedResult {
                full_encoded: "AA==".to_string(),
                small_encoded: "BB==".to_string(),
            }),
        },
    );
    state
}

fn catalog() -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert("beach".to_string(), "QUFB".to_string());
    map.insert("forest".to_string(), "QkJC".to_string());
    map
}

#[test]
fn startup_requests_the_catalog_once() {
    init_logging();
    assert_eq!(wowify_core::startup_effects(), vec![Effect::FetchCatalog]);
}

#[test]
fn catalog_load_populates_thumbnails_and_is_idempotent() {
    init_logging();
    let (state, effects) = update(WorkflowState::new(), Msg::CatalogLoaded(catalog()));
    assert!(effects.is_empty());
    assert_eq!(state.view().background_ids, vec!["beach", "forest"]);

    // A retried fetch delivers the same catalog again; nothing changes.
    let (state, _) = update(state, Msg::CatalogLoaded(catalog()));
    assert_eq!(state.view().background_ids, vec!["beach", "forest"]);
}

#[test]
fn empty_catalog_means_no_backgrounds_yet() {
    init_logging();
    let (state, _) = update(WorkflowState::new(), Msg::CatalogLoaded(BTreeMap::new()));
    assert!(state.view().background_ids.is_empty());
}

#[test]
fn modal_opens_only_from_uploaded_or_completed() {
    init_logging();
    let (state, _) = update(WorkflowState::new(), Msg::SettingsOpened);
    assert!(!state.view().settings_open);

    let (state, _) = update(uploaded_state(), Msg::SettingsOpened);
    assert!(state.view().settings_open);

    let (state, _) = update(completed_state(""), Msg::SettingsOpened);
    assert!(state.view().settings_open);
}

#[test]
fn modal_does_not_open_mid_flight() {
    init_logging();
    let (state, _) = update(uploaded_state(), Msg::WowifyClicked);
    assert_eq!(state.phase(), Phase::Submitting);

    let (state, _) = update(state, Msg::SettingsOpened);
    assert!(!state.view().settings_open);
    assert_eq!(state.phase(), Phase::Submitting);
}

#[test]
fn background_pick_requires_an_open_modal() {
    init_logging();
    let (state, _) = update(uploaded_state(), Msg::BackgroundPicked("forest".to_string()));
    assert_eq!(state.view().selected_background, "");

    let (state, _) = update(state, Msg::SettingsOpened);
    let (state, _) = update(state, Msg::BackgroundPicked("forest".to_string()));
    assert_eq!(state.view().selected_background, "forest");
}

#[test]
fn unrecognized_background_id_passes_through_to_submission() {
    init_logging();
    // No client-side validation against the catalog: the service decides.
    let (state, _) = update(uploaded_state(), Msg::CatalogLoaded(catalog()));
    let (state, _) = update(state, Msg::SettingsOpened);
    let (state, _) = update(state, Msg::BackgroundPicked("volcano".to_string()));
    let (state, _) = update(state, Msg::SettingsClosed);
    let (_state, effects) = update(state, Msg::WowifyClicked);

    assert_eq!(
        effects[1],
        Effect::SubmitJob {
            attempt: 1,
            bytes: vec![7u8; 16],
            background_id: "volcano".to_string(),
        }
    );
}

#[test]
fn rewowify_only_offered_for_the_random_selection() {
    init_logging();
    let state = completed_state("forest");
    assert!(!state.view().offer_rewowify);
    let (state, effects) = update(state, Msg::WowifyClicked);
    assert_eq!(state.phase(), Phase::Completed);
    assert!(effects.is_empty());

    let state = completed_state("");
    assert!(state.view().offer_rewowify);
    let (state, effects) = update(state, Msg::WowifyClicked);
    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(effects.len(), 2);
    assert_eq!(state.current_attempt(), 2);
}

#[test]
fn save_uses_the_edited_emoji_name() {
    init_logging();
    let state = completed_state("");
    assert_eq!(state.view().emoji_name, "wow-cat");

    let (state, _) = update(state, Msg::EmojiNameEdited("my-wow".to_string()));
    let (_state, effects) = update(state, Msg::SaveClicked);

    assert_eq!(
        effects,
        vec![Effect::SaveResult {
            file_name: "my-wow".to_string(),
            encoded: "BB==".to_string(),
        }]
    );
}

#[test]
fn save_is_ignored_without_a_result() {
    init_logging();
    let (_state, effects) = update(uploaded_state(), Msg::SaveClicked);
    assert!(effects.is_empty());
}

#[test]
fn notice_dismissal_clears_the_toast() {
    init_logging();
    let (state, _) = update(uploaded_state(), Msg::WowifyClicked);
    let (state, _) = update(
        state,
        Msg::SubmitResolved {
            attempt: 1,
            outcome: Err("boom".to_string()),
        },
    );
    assert!(state.view().notice.is_some());

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert!(state.view().notice.is_none());
}
