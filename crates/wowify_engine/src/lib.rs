//! Wowify engine: service IO and effect execution.
mod engine;
mod poll;
mod save;
mod service;
mod types;

pub use engine::EngineHandle;
pub use poll::{ChannelEventSink, EventSink, PollScheduler, POLL_INTERVAL};
pub use save::{ensure_output_dir, ResultWriter, SaveError};
pub use service::{ReqwestWowService, ServiceSettings, WowService};
pub use types::{
    Attempt, EngineEvent, FailureKind, PollStatus, WowError, WowifiedPayload,
};
