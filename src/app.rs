// ============================================================================
// APP - Aplicación principal: estado, router y render de #app
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, get_element_by_id, set_attribute};
use crate::router::{self, NavigationDecision};
use crate::state::{AppState, AuthState};
use crate::utils::ROOT_ELEMENT_ID;
use crate::views::render_route;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(AuthState::browser());
        router::start(&state)?;

        // Si la sesión desaparece (logout, 401) estando en una ruta protegida,
        // el guard decide a dónde ir
        {
            let state_clone = state.clone();
            state.auth.subscribe(move || {
                let current = state_clone.current_route();
                if router::before_each(current, &state_clone.auth.snapshot()) != NavigationDecision::Proceed {
                    crate::navigate(current);
                }
            });
        }

        log::info!("✅ [APP] Ruta inicial: {}", state.current_route().path());
        Ok(Self { state, root })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-render completo de la ruta actual
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        // Gancho para los estilos de cada layout (Login, Register, Home)
        let route = self.state.current_route();
        set_attribute(&self.root, "data-route", route.root_name().unwrap_or("NotFound"))?;
        let view = render_route(&self.state)?;
        append_child(&self.root, &view)
    }
}
