pub mod shared;
pub mod auth;
pub mod home;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, text_element, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::views::shared::button;

pub use auth::{render_login, render_register};
pub use home::render_home;

/// Vista de la ruta actual (la ruta ya pasó por el guard)
pub fn render_route(state: &AppState) -> Result<Element, JsValue> {
    match state.current_route() {
        Route::Login => render_login(state),
        Route::Register => render_register(state),
        Route::NotFound => render_not_found(),
        child => render_home(state, child),
    }
}

fn render_not_found() -> Result<Element, JsValue> {
    let back = button("btn-primary", "Volver al inicio", "button")?;
    on_click(&back, |_| crate::navigate(Route::Login))?;

    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .child(text_element("h1", "", "404")?)?
        .child(text_element("p", "", "La página que buscas no existe")?)?
        .child(back)?
        .build())
}
