use std::fmt;

use crate::ScanPayload;

/// What the record store reported for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    Exists,
    NotFound,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub message: String,
}

impl LookupFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Classification of one admitted scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Known(ScanPayload),
    Unknown(ScanPayload),
    Failed(ScanPayload, LookupFailure),
}

impl LookupOutcome {
    pub fn payload(&self) -> &ScanPayload {
        match self {
            LookupOutcome::Known(payload)
            | LookupOutcome::Unknown(payload)
            | LookupOutcome::Failed(payload, _) => payload,
        }
    }
}

/// Maps a record store reply for `payload` onto its outcome.
pub fn classify(payload: ScanPayload, status: RecordStatus) -> LookupOutcome {
    match status {
        RecordStatus::Exists => LookupOutcome::Known(payload),
        RecordStatus::NotFound => LookupOutcome::Unknown(payload),
        RecordStatus::Error(message) => LookupOutcome::Failed(payload, LookupFailure::new(message)),
    }
}
