mod components;
mod config;
mod hooks;
mod models;
mod services;
mod session;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🛍️ Marketplace PWA starting...");

    yew::Renderer::<App>::new().render();
}
