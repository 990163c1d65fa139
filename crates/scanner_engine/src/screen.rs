use std::sync::Arc;

use scan_logging::{scan_debug, scan_info, scan_trace, scan_warn};
use scanner_core::{update, Effect, Msg, ScanId, ScanPayload, ScreenState, ScreenViewModel};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{Classifier, DiagnosticSink, Navigator, RecordStore, ScreenSettings};

/// A mounted scan screen.
///
/// A single driver task owns the [`ScreenState`] and applies messages in the
/// order they arrive. Lookups and cooldown timers run as separate tasks that
/// only ever talk back through messages. Must be spawned from inside a tokio
/// runtime; dropping the screen unmounts it.
pub struct ScanScreen {
    msg_tx: mpsc::UnboundedSender<Msg>,
    view_rx: watch::Receiver<ScreenViewModel>,
    shutdown: CancellationToken,
    driver: Option<JoinHandle<()>>,
}

impl ScanScreen {
    pub fn spawn(
        settings: ScreenSettings,
        store: Arc<dyn RecordStore>,
        navigator: Arc<dyn Navigator>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let state = ScreenState::new();
        let (view_tx, view_rx) = watch::channel(state.view());
        let shutdown = CancellationToken::new();

        let driver = Driver {
            state,
            settings,
            classifier: Classifier::new(store),
            navigator,
            diagnostics,
            msg_tx: msg_tx.clone(),
            view_tx,
            reopen: None,
            lookups: shutdown.child_token(),
            shutdown: shutdown.clone(),
        };
        let driver = tokio::spawn(driver.run(msg_rx));

        Self {
            msg_tx,
            view_rx,
            shutdown,
            driver: Some(driver),
        }
    }

    pub fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_err() {
            scan_trace!("Scan screen is gone; message dropped");
        }
    }

    /// Scan source entry point.
    pub fn on_scan(&self, payload: impl Into<ScanPayload>) {
        self.send(Msg::ScanDecoded(payload.into()));
    }

    /// Latest published view.
    pub fn view(&self) -> ScreenViewModel {
        self.view_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenViewModel> {
        self.view_rx.clone()
    }

    /// Unmounts the screen and waits for the driver to stop. Pending
    /// cooldown timers and lookups are cancelled; nothing they would have
    /// produced reaches the state.
    pub async fn teardown(mut self) {
        self.send(Msg::Teardown);
        if let Some(driver) = self.driver.take() {
            if let Err(err) = driver.await {
                scan_warn!("Scan screen driver ended abnormally: {}", err);
            }
        }
    }
}

impl Drop for ScanScreen {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct Driver {
    state: ScreenState,
    settings: ScreenSettings,
    classifier: Classifier,
    navigator: Arc<dyn Navigator>,
    diagnostics: Arc<dyn DiagnosticSink>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    view_tx: watch::Sender<ScreenViewModel>,
    reopen: Option<CancellationToken>,
    lookups: CancellationToken,
    shutdown: CancellationToken,
}

impl Driver {
    async fn run(mut self, mut msg_rx: mpsc::UnboundedReceiver<Msg>) {
        loop {
            let msg = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                msg = msg_rx.recv() => match msg {
                    Some(msg) => msg,
                    None => break,
                },
            };
            self.dispatch(msg);
            if self.state.is_torn_down() {
                break;
            }
        }
        self.shutdown.cancel();
        scan_debug!("Scan screen torn down");
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view_tx.send_replace(state.view());
        }
        self.state = state;

        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleReopen { generation } => self.schedule_reopen(generation),
            Effect::CancelReopen => {
                if let Some(timer) = self.reopen.take() {
                    timer.cancel();
                }
            }
            Effect::Lookup { scan_id, payload } => self.spawn_lookup(scan_id, payload),
            Effect::AbandonLookups => self.lookups.cancel(),
            Effect::Navigate(intent) => {
                scan_info!("Navigating to {}", intent.route());
                self.navigator.navigate(intent);
            }
            Effect::Report(diagnostic) => self.diagnostics.report(&diagnostic),
        }
    }

    fn schedule_reopen(&mut self, generation: u64) {
        let timer = self.shutdown.child_token();
        if let Some(previous) = self.reopen.replace(timer.clone()) {
            previous.cancel();
        }
        let msg_tx = self.msg_tx.clone();
        let cooldown = self.settings.cooldown;
        tokio::spawn(async move {
            tokio::select! {
                _ = timer.cancelled() => {}
                _ = tokio::time::sleep(cooldown) => {
                    let _ = msg_tx.send(Msg::ReopenElapsed { generation });
                }
            }
        });
    }

    fn spawn_lookup(&self, scan_id: ScanId, payload: ScanPayload) {
        scan_debug!("Scan {} accepted: {:?}", scan_id, payload.as_str());
        let classifier = self.classifier.clone();
        let abandoned = self.lookups.clone();
        let msg_tx = self.msg_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = abandoned.cancelled() => {
                    scan_debug!("Lookup for scan {} abandoned", scan_id);
                }
                outcome = classifier.classify(payload) => {
                    let _ = msg_tx.send(Msg::LookupResolved { scan_id, outcome });
                }
            }
        });
    }
}
