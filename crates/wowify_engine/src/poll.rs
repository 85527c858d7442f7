use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wowify_logging::{wow_debug, wow_info};

use crate::service::WowService;
use crate::{Attempt, EngineEvent, PollStatus};

/// Delay between status queries; fixed, no backoff, no jitter.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Receiver for engine events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Polls the service for one job until a terminal outcome or cancellation.
///
/// Exactly one `PollCompleted` event is emitted per session, or none at all
/// when the session is cancelled first.
pub struct PollScheduler {
    service: Arc<dyn WowService>,
    interval: Duration,
}

impl PollScheduler {
    pub fn new(service: Arc<dyn WowService>, interval: Duration) -> Self {
        Self { service, interval }
    }

    pub async fn run(
        &self,
        attempt: Attempt,
        token: String,
        cancel: CancellationToken,
        sink: &dyn EventSink,
    ) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    wow_debug!("poll session for attempt {attempt} cancelled");
                    return;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }

            let outcome = tokio::select! {
                _ = cancel.cancelled() => {
                    wow_debug!("poll session for attempt {attempt} cancelled mid-query");
                    return;
                }
                outcome = self.service.poll(&token) => outcome,
            };

            match outcome {
                // 404: still being processed, keep waiting.
                Ok(PollStatus::Pending) => continue,
                Ok(PollStatus::Ready(payload)) => {
                    wow_info!("attempt {attempt} wowified");
                    sink.emit(EngineEvent::PollCompleted {
                        attempt,
                        result: Ok(payload),
                    });
                    return;
                }
                Err(err) => {
                    wow_info!("attempt {attempt} poll failed: {err}");
                    sink.emit(EngineEvent::PollCompleted {
                        attempt,
                        result: Err(err),
                    });
                    return;
                }
            }
        }
    }
}
