use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wowify_logging::wow_info;

use crate::poll::{ChannelEventSink, PollScheduler};
use crate::service::WowService;
use crate::{Attempt, EngineEvent};

enum EngineCommand {
    FetchCatalog,
    Submit {
        attempt: Attempt,
        bytes: Vec<u8>,
        background_id: String,
    },
    StartPolling {
        attempt: Attempt,
        token: String,
    },
    StopPolling,
}

/// Handle to the engine's background runtime.
///
/// Commands go in through a channel and are executed as tasks on a dedicated
/// tokio runtime thread; completions come back out through [`try_recv`].
///
/// [`try_recv`]: EngineHandle::try_recv
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(service: Arc<dyn WowService>, poll_interval: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // At most one polling session exists at a time; its cancellation
            // token lives here so stop requests reach the running task.
            let mut poll_cancel: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchCatalog => {
                        let service = service.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = service.fetch_catalog().await;
                            let _ = event_tx.send(EngineEvent::CatalogFetched { result });
                        });
                    }
                    EngineCommand::Submit {
                        attempt,
                        bytes,
                        background_id,
                    } => {
                        let service = service.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = service.submit(bytes, &background_id).await;
                            let _ = event_tx.send(EngineEvent::SubmitCompleted { attempt, result });
                        });
                    }
                    EngineCommand::StartPolling { attempt, token } => {
                        // A lingering session from a previous job must not
                        // outlive the new one.
                        if let Some(previous) = poll_cancel.take() {
                            previous.cancel();
                        }
                        let cancel = CancellationToken::new();
                        poll_cancel = Some(cancel.clone());

                        let scheduler = PollScheduler::new(service.clone(), poll_interval);
                        let sink = ChannelEventSink::new(event_tx.clone());
                        runtime.spawn(async move {
                            scheduler.run(attempt, token, cancel, &sink).await;
                        });
                    }
                    EngineCommand::StopPolling => {
                        // Stop with no active session is a no-op.
                        if let Some(cancel) = poll_cancel.take() {
                            cancel.cancel();
                        }
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchCatalog);
    }

    pub fn submit(&self, attempt: Attempt, bytes: Vec<u8>, background_id: impl Into<String>) {
        let background_id = background_id.into();
        wow_info!(
            "submit attempt={} byte_len={} background_id={:?}",
            attempt,
            bytes.len(),
            background_id
        );
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            attempt,
            bytes,
            background_id,
        });
    }

    pub fn start_polling(&self, attempt: Attempt, token: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::StartPolling {
            attempt,
            token: token.into(),
        });
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopPolling);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}
