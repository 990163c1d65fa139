use std::sync::Arc;

use scan_logging::{scan_debug, scan_info};
use scanner_core::{classify, LookupOutcome, RecordStatus, ScanPayload};

use crate::{RecordPresence, RecordStore};

/// Issues one record store lookup per scan and maps the reply to an outcome.
#[derive(Clone)]
pub struct Classifier {
    store: Arc<dyn RecordStore>,
}

impl Classifier {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Never retries. If the store never answers, neither does this.
    pub async fn classify(&self, payload: ScanPayload) -> LookupOutcome {
        let status = match self.store.lookup(payload.as_str()).await {
            Ok(RecordPresence::Exists) => {
                scan_info!("Barcode {:?} found", payload.as_str());
                RecordStatus::Exists
            }
            Ok(RecordPresence::NotFound) => {
                scan_info!("Barcode {:?} not found", payload.as_str());
                RecordStatus::NotFound
            }
            Err(err) => {
                scan_debug!("Error checking barcode {:?}: {}", payload.as_str(), err);
                RecordStatus::Error(err.to_string())
            }
        };
        classify(payload, status)
    }
}
