//! Class Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod ids;
mod storage;
mod store;

use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    rolling_logger::init(CONFIG.log_level);
    app::start(&CONFIG);
}
