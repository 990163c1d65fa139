use scanner_core::NavigationIntent;

/// Receives navigation intents from the presenter. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, intent: NavigationIntent);
}
