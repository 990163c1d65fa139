use scan_logging::{scan_debug, scan_warn};
use scanner_core::Diagnostic;

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Writes diagnostics to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::LookupFailed { .. } => scan_warn!("{}", diagnostic),
            Diagnostic::UnexpectedResult { .. } => scan_debug!("{}", diagnostic),
        }
    }
}
