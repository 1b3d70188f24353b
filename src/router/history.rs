// ============================================================================
// HISTORY - Binding con window.history (pushState/popstate)
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::config::CONFIG;
use crate::router::{resolve, Route};
use crate::state::AppState;

thread_local! {
    // El listener de popstate es global: se registra una sola vez
    static POPSTATE_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Ruta correspondiente a `location.pathname`
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::from_path(&path, &CONFIG.base_path)
}

/// Navegar a una ruta (guard + pushState + re-render)
pub fn navigate(state: &AppState, to: Route) {
    let target = resolve(to, &state.auth.snapshot());
    if target == state.current_route() && target.href(&CONFIG.base_path) == current_href() {
        return;
    }

    log::info!("🧭 [ROUTER] Navegando a {}", target.path());
    if let Err(e) = push_state(target) {
        log::error!("❌ [ROUTER] pushState falló: {:?}", e);
    }
    state.set_route(target);
    crate::rerender_app();
}

/// Igual que `navigate` pero sin añadir entrada al historial
pub fn replace(state: &AppState, to: Route) {
    let target = resolve(to, &state.auth.snapshot());
    if let Err(e) = replace_state(target) {
        log::error!("❌ [ROUTER] replaceState falló: {:?}", e);
    }
    state.set_route(target);
}

/// Resolver la ruta inicial y escuchar atrás/adelante del navegador
pub fn start(state: &AppState) -> Result<(), JsValue> {
    replace(state, current_route());

    if POPSTATE_REGISTERED.with(|flag| flag.replace(true)) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let state_clone = state.clone();
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        let requested = current_route();
        let target = resolve(requested, &state_clone.auth.snapshot());
        if target != requested {
            if let Err(e) = replace_state(target) {
                log::error!("❌ [ROUTER] replaceState falló: {:?}", e);
            }
        }
        state_clone.set_route(target);
        crate::rerender_app();
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn history() -> Result<web_sys::History, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()
}

fn push_state(route: Route) -> Result<(), JsValue> {
    history()?.push_state_with_url(&JsValue::NULL, "", Some(&route.href(&CONFIG.base_path)))
}

fn replace_state(route: Route) -> Result<(), JsValue> {
    history()?.replace_state_with_url(&JsValue::NULL, "", Some(&route.href(&CONFIG.base_path)))
}
