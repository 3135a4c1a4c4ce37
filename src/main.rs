#[cfg(target_arch = "wasm32")]
use buoyhub_sidebar::{app::App, app_lib::telemetry, SidebarConfig};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = SidebarConfig::load();
    if let Err(error) = telemetry::init(&config.log_level) {
        web_sys::console::warn_1(&error.to_string().into());
    }
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
