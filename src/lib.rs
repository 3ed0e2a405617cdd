pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    leptos::logging::log!("[HYDRATE] Mounting campsite app");
    leptos::mount_to_body(App);
}
