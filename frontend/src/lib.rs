mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use api::{ApiClient, ApiError, CreatePayroll, Identity, PayrollRecord};
pub use state::session::{LocalStorageSession, SessionProvider, StaticSession};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Payroll Frontend (wasm)");

    // Resolve the API base URL early; requests made before it settles await the same lookup.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
