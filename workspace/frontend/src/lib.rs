use yew::prelude::*;

pub mod api_client;
mod components;
pub mod hooks;
pub mod settings;

use common::dom::MOUNT_POINT;
use components::dashboard::view::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Dashboard /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== COVID-19 Simulation Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: '{}'", settings.api_base_url());

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_POINT));

    match root {
        Some(root) => {
            log::trace!("Mounting into #{}", MOUNT_POINT);
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            log::warn!("#{} not found, mounting into <body>", MOUNT_POINT);
            yew::Renderer::<App>::new().render();
        }
    }
    log::info!("Application initialized successfully");
}
