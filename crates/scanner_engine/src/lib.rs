//! Scanner engine: record store seam and the async runtime that executes
//! core effects.
mod classifier;
mod diagnostics;
mod engine;
mod navigator;
mod screen;
mod settings;
mod store;

pub use classifier::Classifier;
pub use diagnostics::{DiagnosticSink, LogDiagnosticSink};
pub use engine::EngineHandle;
pub use navigator::Navigator;
pub use screen::ScanScreen;
pub use settings::{ScreenSettings, DEFAULT_COOLDOWN};
pub use store::{MemoryRecordStore, RecordPresence, RecordStore, StoreError, TimeoutRecordStore};
