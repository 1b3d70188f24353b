// ============================================================================
// TOAST - Mensajes flotantes (único canal de error visible para el usuario)
// ============================================================================

use wasm_bindgen::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, body, get_element_by_id, ElementBuilder};

const TOAST_CONTAINER_ID: &str = "toast-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

pub fn show_error(message: &str) {
    show(ToastKind::Error, message);
}

pub fn show_success(message: &str) {
    show(ToastKind::Success, message);
}

pub fn show(kind: ToastKind, message: &str) {
    if let Err(e) = try_show(kind, message) {
        // Sin DOM no hay toast: al menos queda en consola
        log::error!("❌ [TOAST] {} ({:?})", message, e);
    }
}

fn try_show(kind: ToastKind, message: &str) -> Result<(), JsValue> {
    let container = toast_container()?;
    let toast = ElementBuilder::new("div")?
        .class(kind.class())
        .attr("role", "alert")?
        .text(message)
        .build();
    append_child(&container, &toast)?;

    Timeout::new(CONFIG.toast_duration_ms, move || toast.remove()).forget();
    Ok(())
}

/// El contenedor cuelga de <body> para sobrevivir a los re-renders de #app
fn toast_container() -> Result<Element, JsValue> {
    if let Some(existing) = get_element_by_id(TOAST_CONTAINER_ID) {
        return Ok(existing);
    }
    let container = ElementBuilder::new("div")?
        .class("toast-container")
        .attr("id", TOAST_CONTAINER_ID)?
        .build();
    let body = body().ok_or_else(|| JsValue::from_str("No body"))?;
    append_child(&body, &container)?;
    Ok(container)
}
