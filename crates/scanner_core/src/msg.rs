#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Camera permission prompt was answered (or revoked).
    PermissionChanged(crate::CameraPermission),
    /// Camera delivered a decoded barcode.
    ScanDecoded(crate::ScanPayload),
    /// Cooldown timer for the given gate generation elapsed.
    ReopenElapsed { generation: u64 },
    /// Record store lookup for an admitted scan resolved.
    LookupResolved {
        scan_id: crate::ScanId,
        outcome: crate::LookupOutcome,
    },
    /// User pressed "view item" on the known-record modal.
    AcceptPressed,
    /// User pressed "close" on the known-record modal.
    DismissPressed,
    /// User pressed "add as new item" on the unknown-record modal.
    CreatePressed,
    /// User pressed "cancel" on the unknown-record modal.
    CancelPressed,
    /// Hardware back / modal request-close.
    BackPressed,
    /// Screen unmounted.
    Teardown,
}
