//! Scanner core: pure scan-debounce and classification state machine.
mod effect;
mod gate;
mod msg;
mod outcome;
mod presenter;
mod scan;
mod state;
mod update;
mod view_model;

pub use effect::{Diagnostic, Effect};
pub use gate::{GateState, ScanGate};
pub use msg::Msg;
pub use outcome::{classify, LookupFailure, LookupOutcome, RecordStatus};
pub use presenter::{NavigationIntent, OutcomePresenter, PresenterState};
pub use scan::{CameraPermission, ScanId, ScanPayload};
pub use state::ScreenState;
pub use update::update;
pub use view_model::{ModalKind, ModalView, ScreenViewModel};
