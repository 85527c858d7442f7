use std::collections::BTreeMap;
use std::fmt;

/// Submission counter assigned by the state machine; echoed back on every
/// completion so the caller can drop stale events.
pub type Attempt = u64;

/// Base64-encoded output of a finished wowify job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WowifiedPayload {
    pub full_encoded: String,
    pub small_encoded: String,
}

/// Outcome of a single status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStatus {
    /// The service answered 404: the job is still being processed.
    Pending,
    /// The service answered 200 with the finished payload.
    Ready(WowifiedPayload),
}

/// Events emitted by the engine back to the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CatalogFetched {
        result: Result<BTreeMap<String, String>, WowError>,
    },
    SubmitCompleted {
        attempt: Attempt,
        result: Result<String, WowError>,
    },
    PollCompleted {
        attempt: Attempt,
        result: Result<WowifiedPayload, WowError>,
    },
}

/// Plain-data service error; comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WowError {
    pub kind: FailureKind,
    pub message: String,
}

impl WowError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for WowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
