// ============================================================================
// DEALER PORTAL PWA - FRONTEND EN RUST PURO
// ============================================================================
// - Hooks: estado de sesión e inventario (use_dealer, use_dealer_cars)
// - Services: cliente HTTP del Directory Service + lógica pura testeable
// - Components: renderizado (sin lógica de negocio)
// - Utils: localStorage, navegación, constantes
// ============================================================================

mod app;
mod components;
mod hooks;
mod models;
mod services;
mod utils;

use app::App;

fn main() {
    // Panic hook para stacktraces legibles en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚗 Dealer Portal starting...");

    yew::Renderer::<App>::new().render();
}
