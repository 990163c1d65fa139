pub const TITLE: &str = "Scan";

pub const KNOWN_TITLE: &str = "FOUND EXISTING RECORDS";
pub const KNOWN_PRIMARY: &str = "VIEW ITEM";
pub const KNOWN_SECONDARY: &str = "CLOSE";

pub const UNKNOWN_TITLE: &str = "NO RECORDS FOUND";
pub const UNKNOWN_PRIMARY: &str = "ADD AS NEW ITEM";
pub const UNKNOWN_SECONDARY: &str = "CANCEL";

pub const PERMISSION_MESSAGE: &str = "We need your permission to show the camera";
pub const PERMISSION_BUTTON: &str = "grant permission";

pub const CMD_ACCEPT: &str = ":accept";
pub const CMD_DISMISS: &str = ":dismiss";
pub const CMD_CREATE: &str = ":create";
pub const CMD_CANCEL: &str = ":cancel";
pub const CMD_BACK: &str = ":back";
pub const CMD_GRANT: &str = ":grant";
pub const CMD_DENY: &str = ":deny";
pub const CMD_QUIT: &str = ":quit";
