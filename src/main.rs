//! Feedback Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod models;
mod stats;
mod store;
mod styles;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if console_logger::init_logger(config.log_level, console_logger::DEFAULT_CAPACITY).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
