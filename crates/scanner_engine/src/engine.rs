use std::io;
use std::sync::Arc;

use scanner_core::{Msg, ScanPayload, ScreenViewModel};

use crate::{DiagnosticSink, Navigator, RecordStore, ScanScreen, ScreenSettings};

/// Synchronous front for a [`ScanScreen`] running on its own tokio runtime.
pub struct EngineHandle {
    // Declared before `runtime` so the screen is dropped first.
    screen: Option<ScanScreen>,
    runtime: tokio::runtime::Runtime,
}

impl EngineHandle {
    pub fn new(
        settings: ScreenSettings,
        store: Arc<dyn RecordStore>,
        navigator: Arc<dyn Navigator>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("scanner-engine")
            .enable_all()
            .build()?;
        let screen = {
            let _guard = runtime.enter();
            ScanScreen::spawn(settings, store, navigator, diagnostics)
        };
        Ok(Self {
            screen: Some(screen),
            runtime,
        })
    }

    pub fn send(&self, msg: Msg) {
        if let Some(screen) = &self.screen {
            screen.send(msg);
        }
    }

    pub fn on_scan(&self, payload: impl Into<ScanPayload>) {
        self.send(Msg::ScanDecoded(payload.into()));
    }

    pub fn view(&self) -> ScreenViewModel {
        self.screen
            .as_ref()
            .map(ScanScreen::view)
            .unwrap_or_default()
    }

    /// Calls `on_change` on the engine runtime every time a new view is
    /// published, until the screen is torn down.
    pub fn watch_view<F>(&self, mut on_change: F)
    where
        F: FnMut(&ScreenViewModel) + Send + 'static,
    {
        let Some(screen) = &self.screen else {
            return;
        };
        let mut view_rx = screen.subscribe();
        self.runtime.spawn(async move {
            while view_rx.changed().await.is_ok() {
                let view = view_rx.borrow_and_update().clone();
                on_change(&view);
            }
        });
    }

    /// Tears the screen down and waits for it to stop.
    pub fn shutdown(mut self) {
        if let Some(screen) = self.screen.take() {
            self.runtime.block_on(screen.teardown());
        }
    }
}
