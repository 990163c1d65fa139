use std::time::Duration;

/// How long the gate stays closed after admitting a scan.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSettings {
    pub cooldown: Duration,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}
