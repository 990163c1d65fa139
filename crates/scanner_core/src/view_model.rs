use crate::{CameraPermission, GateState, ScanPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Known,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub kind: ModalKind,
    pub payload: ScanPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenViewModel {
    pub permission: CameraPermission,
    pub gate: GateState,
    pub last_scanned: Option<ScanPayload>,
    pub modal: Option<ModalView>,
    pub pending_lookups: usize,
    pub accepted_scans: u64,
    pub torn_down: bool,
}
