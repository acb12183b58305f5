mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use dioxus::logger::tracing::info;

use crate::config::AppConfig;

fn main() {
    let (config, problems) = config::load_config();
    if let Err(err) = dioxus::logger::init(config.log_level()) {
        eprintln!("failed to initialise logging: {err}");
    }
    config::report_config_problems(&problems);
    info!(
        title = %config.window_title,
        page_size = config.initial_page_size,
        checkboxes = config.include_checkbox_column,
        "starting deltadesk"
    );

    launch(config);
}

#[cfg(feature = "desktop")]
fn launch(config: AppConfig) {
    use dioxus::logger::tracing::warn;

    let mut desktop = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(&config.window_title));
    match config::default_webview_data_dir() {
        Ok(dir) => desktop = desktop.with_data_directory(dir),
        Err(err) => warn!(error = %format!("{err:#}"), "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(config)
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: AppConfig) {
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(app::App);
}
