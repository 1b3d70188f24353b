use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};
use crate::state::AppState;

pub fn render_welcome(state: &AppState) -> Result<Element, JsValue> {
    let today = chrono::Local::now().format("%d/%m/%Y").to_string();
    let roles = state.auth.roles();

    Ok(ElementBuilder::new("section")?
        .class("page page-welcome")
        .child(text_element("h2", "page-title", "¡Bienvenido!")?)?
        .child(text_element("p", "welcome-date", &format!("Hoy es {}", today))?)?
        .child(text_element("p", "welcome-roles", &format!("Has entrado con el rol: {}", roles))?)?
        .build())
}
