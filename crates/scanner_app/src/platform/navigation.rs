use chrono::{DateTime, Utc};
use scanner_core::NavigationIntent;
use scanner_engine::Navigator;

/// Prints each intent's route to stdout with a timestamp.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        println!("{}", format_intent(&intent, Utc::now()));
    }
}

fn format_intent(intent: &NavigationIntent, at: DateTime<Utc>) -> String {
    let action = match intent {
        NavigationIntent::OpenItem { .. } => "open item",
        NavigationIntent::OpenCreate { .. } => "open create",
    };
    format!("[{}] {} -> {}", at.to_rfc3339(), action, intent.route())
}
