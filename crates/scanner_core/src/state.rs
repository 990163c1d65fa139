use std::collections::BTreeMap;

use crate::view_model::{ModalKind, ModalView, ScreenViewModel};
use crate::{
    CameraPermission, GateState, OutcomePresenter, PresenterState, ScanGate, ScanId, ScanPayload,
};

/// Everything the scan screen owns: gate, presenter and the lookups it is
/// still waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenState {
    permission: CameraPermission,
    gate: ScanGate,
    presenter: OutcomePresenter,
    pending: BTreeMap<ScanId, ScanPayload>,
    last_scan_id: ScanId,
    torn_down: bool,
    dirty: bool,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ScreenViewModel {
        let modal = match self.presenter.state() {
            PresenterState::Hidden => None,
            PresenterState::ShowingKnown(payload) => Some(ModalView {
                kind: ModalKind::Known,
                payload: payload.clone(),
            }),
            PresenterState::ShowingUnknown(payload) => Some(ModalView {
                kind: ModalKind::Unknown,
                payload: payload.clone(),
            }),
        };
        ScreenViewModel {
            permission: self.permission,
            gate: self.gate.state(),
            last_scanned: self.gate.last_accepted().cloned(),
            modal,
            pending_lookups: self.pending.len(),
            accepted_scans: self.last_scan_id,
            torn_down: self.torn_down,
        }
    }

    pub fn permission(&self) -> CameraPermission {
        self.permission
    }

    pub fn gate(&self) -> &ScanGate {
        &self.gate
    }

    pub fn presenter(&self) -> &OutcomePresenter {
        &self.presenter
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn presenter_mut(&mut self) -> &mut OutcomePresenter {
        &mut self.presenter
    }

    pub(crate) fn set_permission(&mut self, permission: CameraPermission) {
        if self.permission != permission {
            self.permission = permission;
            self.dirty = true;
        }
    }

    /// Runs `payload` through the gate. On admission returns the new scan id
    /// and the gate generation to schedule a reopen for.
    pub(crate) fn admit_scan(&mut self, payload: &ScanPayload) -> Option<(ScanId, u64)> {
        if !self.gate.submit(payload) {
            return None;
        }
        self.last_scan_id += 1;
        let scan_id = self.last_scan_id;
        self.pending.insert(scan_id, payload.clone());
        self.dirty = true;
        Some((scan_id, self.gate.generation()))
    }

    pub(crate) fn reopen_gate(&mut self, generation: u64) -> bool {
        let reopened = self.gate.reopen(generation);
        if reopened {
            self.dirty = true;
        }
        reopened
    }

    /// Removes `scan_id` from the pending set; `None` if it was not pending.
    pub(crate) fn take_pending(&mut self, scan_id: ScanId) -> Option<ScanPayload> {
        let payload = self.pending.remove(&scan_id)?;
        self.dirty = true;
        Some(payload)
    }

    /// Marks the screen as gone. Returns whether a reopen timer was armed and
    /// whether lookups were still in flight.
    pub(crate) fn tear_down(&mut self) -> (bool, bool) {
        let cooling = self.gate.state() == GateState::Cooling;
        let had_pending = !self.pending.is_empty();
        self.pending.clear();
        self.torn_down = true;
        self.dirty = true;
        (cooling, had_pending)
    }
}
