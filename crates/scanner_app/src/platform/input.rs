//! Terminal scan source: every stdin line is a decoded barcode unless it
//! starts with `:`, in which case it is a user action.

use scanner_core::{CameraPermission, Msg, ScanPayload};

use super::ui::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Dispatch(Msg),
    Quit,
    Unknown(String),
}

/// Parses one input line. Blank lines yield `None`; a leading `::` escapes a
/// payload that itself starts with `:`.
pub fn parse_line(line: &str) -> Option<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    if let Some(escaped) = line.strip_prefix("::") {
        return Some(scan(format!(":{escaped}")));
    }
    if !line.starts_with(':') {
        return Some(scan(line.to_string()));
    }

    let input = match line.trim() {
        CMD_ACCEPT => Input::Dispatch(Msg::AcceptPressed),
        CMD_DISMISS => Input::Dispatch(Msg::DismissPressed),
        CMD_CREATE => Input::Dispatch(Msg::CreatePressed),
        CMD_CANCEL => Input::Dispatch(Msg::CancelPressed),
        CMD_BACK => Input::Dispatch(Msg::BackPressed),
        CMD_GRANT => Input::Dispatch(Msg::PermissionChanged(CameraPermission::Granted)),
        CMD_DENY => Input::Dispatch(Msg::PermissionChanged(CameraPermission::Denied)),
        CMD_QUIT => Input::Quit,
        other => Input::Unknown(other.to_string()),
    };
    Some(input)
}

fn scan(text: String) -> Input {
    Input::Dispatch(Msg::ScanDecoded(ScanPayload::from(text)))
}
