use std::fmt;

/// Sequential id assigned to every scan the gate admits.
pub type ScanId = u64;

/// Decoded barcode text, exactly as delivered by the camera.
///
/// No validation happens here: empty or odd-looking payloads pass through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScanPayload(String);

impl ScanPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScanPayload {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ScanPayload {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPermission {
    /// The permission prompt has not been answered yet.
    #[default]
    Undetermined,
    Denied,
    Granted,
}

impl CameraPermission {
    pub fn is_granted(self) -> bool {
        matches!(self, CameraPermission::Granted)
    }
}
