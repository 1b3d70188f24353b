// ============================================================================
// SHARED - Piezas de formulario reutilizadas por las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, set_text_content, toggle_class, ElementBuilder};

/// Grupo label + input; devuelve (grupo, input)
pub fn form_field(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<(Element, Element), JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("id", id)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .build();

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok((group, input))
}

/// Botón con texto
pub fn button(class: &str, text: &str, button_type: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", button_type)?
        .text(text)
        .build())
}

/// Deshabilitar un botón mientras hay una petición en vuelo
pub fn set_busy(button: &Element, busy: bool) {
    if let Err(e) = button.toggle_attribute_with_force("disabled", busy) {
        log::warn!("⚠️ No se pudo cambiar 'disabled': {:?}", e);
    }
}

/// Línea de error bajo un formulario (oculta si no hay mensaje)
pub fn error_line() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?.class("form-error hidden").build())
}

pub fn show_form_error(line: &Element, message: Option<&str>) {
    set_text_content(line, message.unwrap_or_default());
    if let Err(e) = toggle_class(line, "hidden", message.is_none()) {
        log::warn!("⚠️ {:?}", e);
    }
}
