use url::form_urlencoded;

use crate::{LookupOutcome, ScanPayload};

const ITEM_ROUTE: &str = "/item";
const CREATE_ROUTE: &str = "/create";
const BARCODE_PARAM: &str = "barcode";

/// Where the user asked to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    OpenItem { key: ScanPayload },
    OpenCreate { prefill_key: ScanPayload },
}

impl NavigationIntent {
    pub fn key(&self) -> &ScanPayload {
        match self {
            NavigationIntent::OpenItem { key } => key,
            NavigationIntent::OpenCreate { prefill_key } => prefill_key,
        }
    }

    /// Screen route for this intent, e.g. `/item?barcode=0123`.
    pub fn route(&self) -> String {
        let base = match self {
            NavigationIntent::OpenItem { .. } => ITEM_ROUTE,
            NavigationIntent::OpenCreate { .. } => CREATE_ROUTE,
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(BARCODE_PARAM, self.key().as_str())
            .finish();
        format!("{base}?{query}")
    }
}

/// Visible modal, tagged by outcome kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PresenterState {
    #[default]
    Hidden,
    ShowingKnown(ScanPayload),
    ShowingUnknown(ScanPayload),
}

/// Holds the outcome currently shown to the user.
///
/// Writes substitute the whole state. Action handlers read the state at the
/// moment they run, so an intent always carries the payload that is on
/// screen when the action is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutcomePresenter {
    state: PresenterState,
}

impl OutcomePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn visible(&self) -> bool {
        !matches!(self.state, PresenterState::Hidden)
    }

    pub fn payload(&self) -> Option<&ScanPayload> {
        match &self.state {
            PresenterState::Hidden => None,
            PresenterState::ShowingKnown(payload) | PresenterState::ShowingUnknown(payload) => {
                Some(payload)
            }
        }
    }

    /// Shows `outcome`, replacing anything already visible. Failed outcomes
    /// leave the state untouched; returns whether the state changed.
    pub fn present(&mut self, outcome: LookupOutcome) -> bool {
        let next = match outcome {
            LookupOutcome::Known(payload) => PresenterState::ShowingKnown(payload),
            LookupOutcome::Unknown(payload) => PresenterState::ShowingUnknown(payload),
            LookupOutcome::Failed(..) => return false,
        };
        self.state = next;
        true
    }

    /// "View item" on a known record.
    pub fn accept(&mut self) -> Option<NavigationIntent> {
        match std::mem::take(&mut self.state) {
            PresenterState::ShowingKnown(key) => Some(NavigationIntent::OpenItem { key }),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// "Add as new item" on an unknown record.
    pub fn create(&mut self) -> Option<NavigationIntent> {
        match std::mem::take(&mut self.state) {
            PresenterState::ShowingUnknown(prefill_key) => {
                Some(NavigationIntent::OpenCreate { prefill_key })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Closes a known-record modal.
    pub fn dismiss(&mut self) -> bool {
        if matches!(self.state, PresenterState::ShowingKnown(_)) {
            self.state = PresenterState::Hidden;
            true
        } else {
            false
        }
    }

    /// Closes an unknown-record modal.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, PresenterState::ShowingUnknown(_)) {
            self.state = PresenterState::Hidden;
            true
        } else {
            false
        }
    }

    /// Closes whatever is showing.
    pub fn close(&mut self) -> bool {
        let was_visible = self.visible();
        self.state = PresenterState::Hidden;
        was_visible
    }
}
