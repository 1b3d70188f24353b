// ============================================================================
// ADMIN CONSOLE - FRONTEND SPA (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que construyen DOM
// - Router: tabla de rutas + guard de auth/roles + history API
// - Services: comunicación API con interceptores
// - State: store global (token + roles) con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::router::Route;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Admin Console - backend: {}", CONFIG.api_base_url);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la ruta actual
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.try_borrow_mut() {
        Ok(mut slot) => match slot.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se ignora"),
    });
}

/// Navegar desde cualquier vista o servicio (pasa por el guard)
pub fn navigate(route: Route) {
    let state = APP.with(|app_cell| {
        app_cell
            .try_borrow()
            .ok()
            .and_then(|slot| slot.as_ref().map(|app| app.state().clone()))
    });

    match state {
        Some(state) => router::navigate(&state, route),
        None => log::warn!("⚠️ [ROUTER] App no inicializada, navegación a {} ignorada", route.path()),
    }
}
