use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Context;
use log::LevelFilter;
use scan_logging::{level_from_env, scan_info, scan_warn, LOG_LEVEL_ENV};
use scanner_core::{CameraPermission, Msg, ScreenViewModel};
use scanner_engine::{
    EngineHandle, LogDiagnosticSink, MemoryRecordStore, RecordStore, TimeoutRecordStore,
};

use super::input::{parse_line, Input};
use super::navigation::TerminalNavigator;
use super::settings::{load_settings, settings_path};
use super::{logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let path = settings_path();
    let settings = load_settings(&path)?;
    logging::initialize(
        settings.log_destination,
        level_from_env(LOG_LEVEL_ENV, LevelFilter::Info),
    );
    scan_info!(
        "Settings from {:?}: cooldown {} ms, {} known records",
        path,
        settings.cooldown_ms,
        settings.known_records.len()
    );

    let mut store: Arc<dyn RecordStore> =
        Arc::new(settings.known_records.iter().cloned().collect::<MemoryRecordStore>());
    if let Some(timeout) = settings.lookup_timeout() {
        store = Arc::new(TimeoutRecordStore::new(store, timeout));
    }

    let engine = EngineHandle::new(
        settings.screen_settings(),
        store,
        Arc::new(TerminalNavigator),
        Arc::new(LogDiagnosticSink),
    )
    .context("failed to start scanner engine")?;
    engine.watch_view(print_view);

    if settings.grant_camera {
        engine.send(Msg::PermissionChanged(CameraPermission::Granted));
    } else {
        engine.send(Msg::PermissionChanged(CameraPermission::Denied));
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read scan input")?;
        match parse_line(&line) {
            Some(Input::Dispatch(msg)) => engine.send(msg),
            Some(Input::Quit) => break,
            Some(Input::Unknown(command)) => scan_warn!("Unknown command {:?}", command),
            None => {}
        }
    }

    engine.shutdown();
    Ok(())
}

fn print_view(view: &ScreenViewModel) {
    for line in ui::render::render(view) {
        println!("{line}");
    }
}
