use scanner_core::{CameraPermission, GateState, ModalKind, ScreenViewModel};

use super::constants::*;

/// Renders the screen as terminal lines.
pub fn render(view: &ScreenViewModel) -> Vec<String> {
    if view.torn_down {
        return vec![format!("{TITLE}: closed")];
    }

    match view.permission {
        // Prompt still pending; nothing to show yet.
        CameraPermission::Undetermined => return Vec::new(),
        CameraPermission::Denied => {
            return vec![
                PERMISSION_MESSAGE.to_string(),
                format!("[{PERMISSION_BUTTON} {CMD_GRANT}]"),
            ];
        }
        CameraPermission::Granted => {}
    }

    let gate_label = match view.gate {
        GateState::Open => "ready",
        GateState::Cooling => "cooling",
    };

    let mut lines = Vec::with_capacity(5);
    lines.push(format!(
        "{TITLE} | camera: {} | scans: {} | pending lookups: {}",
        gate_label, view.accepted_scans, view.pending_lookups
    ));
    if let Some(last) = &view.last_scanned {
        lines.push(format!("Last scanned: {last}"));
    }

    if let Some(modal) = &view.modal {
        let (title, primary, primary_cmd, secondary, secondary_cmd) = match modal.kind {
            ModalKind::Known => (
                KNOWN_TITLE,
                KNOWN_PRIMARY,
                CMD_ACCEPT,
                KNOWN_SECONDARY,
                CMD_DISMISS,
            ),
            ModalKind::Unknown => (
                UNKNOWN_TITLE,
                UNKNOWN_PRIMARY,
                CMD_CREATE,
                UNKNOWN_SECONDARY,
                CMD_CANCEL,
            ),
        };
        lines.push(format!("== {title} =="));
        lines.push(format!("barcode: {}", modal.payload));
        lines.push(format!(
            "[{primary} {primary_cmd}]  [{secondary} {secondary_cmd}]"
        ));
    }

    lines
}
