use std::fmt;

use crate::{LookupFailure, NavigationIntent, ScanId, ScanPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `Msg::ReopenElapsed { generation }` once the cooldown elapses.
    ScheduleReopen { generation: u64 },
    CancelReopen,
    /// Look `payload` up in the record store and answer with
    /// `Msg::LookupResolved { scan_id, .. }`.
    Lookup { scan_id: ScanId, payload: ScanPayload },
    /// Drop every lookup still in flight without delivering a result.
    AbandonLookups,
    Navigate(NavigationIntent),
    Report(Diagnostic),
}

/// Conditions worth reporting that never reach the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    LookupFailed {
        scan_id: ScanId,
        payload: ScanPayload,
        cause: LookupFailure,
    },
    /// A result arrived for a scan that is not awaiting one.
    UnexpectedResult { scan_id: ScanId, payload: ScanPayload },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LookupFailed {
                scan_id,
                payload,
                cause,
            } => write!(f, "lookup for scan {scan_id} ({payload:?}) failed: {cause}"),
            Diagnostic::UnexpectedResult { scan_id, payload } => {
                write!(f, "ignored result for scan {scan_id} ({payload:?}): not pending")
            }
        }
    }
}
