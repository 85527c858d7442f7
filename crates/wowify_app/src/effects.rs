use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use wowify_core::{Effect, Msg, WowifiedResult};
use wowify_engine::{
    EngineEvent, EngineHandle, ReqwestWowService, ServiceSettings, WowError, WowifiedPayload,
    POLL_INTERVAL,
};
use wowify_logging::{wow_error, wow_info, wow_warn};

use crate::timers::TimerSet;

/// Executes the state machine's effects: engine commands, cosmetic timers,
/// and result saving. Engine completions flow back as messages through the
/// sender handed to [`EffectRunner::new`].
pub struct EffectRunner {
    engine: EngineHandle,
    timers: TimerSet,
    writer: wowify_engine::ResultWriter,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        settings: ServiceSettings,
        output_dir: PathBuf,
    ) -> Result<Self, WowError> {
        let service = Arc::new(ReqwestWowService::new(settings)?);
        let engine = EngineHandle::new(service, POLL_INTERVAL);

        let runner = Self {
            engine,
            timers: TimerSet::new(),
            writer: wowify_engine::ResultWriter::new(output_dir),
            msg_tx: msg_tx.clone(),
        };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog => {
                    wow_info!("fetching background catalog");
                    self.engine.fetch_catalog();
                }
                Effect::StartLoadingEffects => self.timers.start(self.msg_tx.clone()),
                Effect::StopLoadingEffects => self.timers.stop(),
                Effect::SubmitJob {
                    attempt,
                    bytes,
                    background_id,
                } => self.engine.submit(attempt, bytes, background_id),
                Effect::StartPolling { attempt, token } => {
                    wow_info!("polling attempt={} token={}", attempt, token);
                    self.engine.start_polling(attempt, token);
                }
                Effect::StopPolling => self.engine.stop_polling(),
                Effect::SaveResult { file_name, encoded } => {
                    match self.writer.save(&file_name, &encoded) {
                        Ok(path) => wow_info!("saved {}", path.display()),
                        Err(err) => wow_error!("save failed: {err}"),
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::CatalogFetched { result } => match result {
                        Ok(catalog) => {
                            let _ = msg_tx.send(Msg::CatalogLoaded(catalog));
                        }
                        // The catalog is cosmetic; the workflow continues
                        // without thumbnails.
                        Err(err) => wow_warn!("catalog fetch failed: {err}"),
                    },
                    EngineEvent::SubmitCompleted { attempt, result } => {
                        let outcome = result.map_err(|err| {
                            wow_warn!("attempt {} submission failed: {err}", attempt);
                            err.to_string()
                        });
                        let _ = msg_tx.send(Msg::SubmitResolved { attempt, outcome });
                    }
                    EngineEvent::PollCompleted { attempt, result } => {
                        let outcome = match result {
                            Ok(payload) => Ok(map_payload(payload)),
                            Err(err) => {
                                wow_warn!("attempt {} polling failed: {err}", attempt);
                                Err(err.to_string())
                            }
                        };
                        let _ = msg_tx.send(Msg::PollResolved { attempt, outcome });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_payload(payload: WowifiedPayload) -> WowifiedResult {
    WowifiedResult {
        full_encoded: payload.full_encoded,
        small_encoded: payload.small_encoded,
    }
}
