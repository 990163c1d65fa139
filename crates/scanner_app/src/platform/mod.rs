mod app;
mod input;
mod logging;
mod navigation;
mod settings;
mod ui;

pub use app::run_app;
