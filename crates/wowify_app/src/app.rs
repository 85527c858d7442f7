use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Context};
use wowify_core::{startup_effects, update, Effect, Msg, Phase, WorkflowState};
use wowify_engine::ServiceSettings;
use wowify_logging::wow_info;

use crate::effects::EffectRunner;

pub struct AppOptions {
    pub image_path: PathBuf,
    pub background_id: Option<String>,
    pub service: ServiceSettings,
    pub output_dir: PathBuf,
}

impl AppOptions {
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut image_path = None;
        let mut background_id = None;
        let mut service = ServiceSettings::default();
        let mut output_dir = PathBuf::from("output");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--background" => {
                    background_id = Some(args.next().context("--background needs a value")?);
                }
                "--service-url" => {
                    service.base_url = args.next().context("--service-url needs a value")?;
                }
                "--output" => {
                    output_dir = PathBuf::from(args.next().context("--output needs a value")?);
                }
                _ if image_path.is_none() => image_path = Some(PathBuf::from(arg)),
                other => bail!("unrecognized argument: {other}"),
            }
        }

        Ok(Self {
            image_path: image_path.context(
                "usage: wowify_app <image> [--background <id>] [--service-url <url>] [--output <dir>]",
            )?,
            background_id,
            service,
            output_dir,
        })
    }
}

/// Drives one workflow from upload to a saved result.
///
/// Plays the user's part against the state machine: picks the image, applies
/// the background selection, clicks wowify, and saves once the job
/// completes. Everything else flows through the regular message loop.
pub fn run(options: AppOptions) -> anyhow::Result<()> {
    let bytes = std::fs::read(&options.image_path)
        .with_context(|| format!("reading {}", options.image_path.display()))?;
    let file_name = options
        .image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("image path has no file name")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(msg_tx.clone(), options.service, options.output_dir)
        .map_err(|err| anyhow::anyhow!("building service client: {err}"))?;

    let mut state = WorkflowState::new();
    runner.enqueue(startup_effects());
    msg_tx.send(Msg::ImageChosen { file_name, bytes })?;

    let mut wowify_sent = false;
    let mut save_sent = false;
    let mut last_phase = state.phase();
    let mut last_quote = String::new();

    loop {
        let msg = msg_rx.recv().context("message channel closed")?;
        let (next, effects) = update(state, msg);
        state = next;

        let saved = effects
            .iter()
            .any(|effect| matches!(effect, Effect::SaveResult { .. }));
        runner.enqueue(effects);

        if state.consume_dirty() {
            let view = state.view();
            if view.phase != last_phase {
                wow_info!("phase {:?} -> {:?}", last_phase, view.phase);
                last_phase = view.phase;
            }
            if !view.loading_quote.is_empty() && view.loading_quote != last_quote {
                wow_info!("{}", view.loading_quote);
                last_quote = view.loading_quote;
            }
        }

        match state.phase() {
            Phase::Uploaded if !wowify_sent => {
                wowify_sent = true;
                if let Some(id) = options.background_id.clone() {
                    msg_tx.send(Msg::SettingsOpened)?;
                    msg_tx.send(Msg::BackgroundPicked(id))?;
                    msg_tx.send(Msg::SettingsClosed)?;
                }
                msg_tx.send(Msg::WowifyClicked)?;
            }
            Phase::Completed if !save_sent => {
                save_sent = true;
                msg_tx.send(Msg::SaveClicked)?;
            }
            Phase::Failed => {
                let notice = state
                    .view()
                    .notice
                    .unwrap_or_else(|| "wowification failed".to_string());
                bail!("{notice}");
            }
            _ => {}
        }

        if saved {
            return Ok(());
        }
    }
}
