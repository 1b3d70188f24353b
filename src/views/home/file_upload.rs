use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{append_child, clear_input, on_submit, text_element, toast, ElementBuilder};
use crate::services::file_service;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::shared::{button, error_line, set_busy, show_form_error};

pub fn render_file_upload(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("page page-upload").build();
    append_child(&section, &text_element("h2", "page-title", "Subida de archivos")?)?;

    let form = ElementBuilder::new("form")?.class("upload-form").build();
    let input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("id", "upload-file")?
        .build();
    let error = error_line()?;
    let submit = button("btn-primary", "Subir", "submit")?;
    let uploaded = ElementBuilder::new("ul")?.class("uploaded-list").build();

    {
        let api = ApiClient::new(state.auth.clone());
        let input = input.clone();
        let error = error.clone();
        let submit_btn = submit.clone();
        let uploaded = uploaded.clone();
        on_submit(&form, move || {
            let file = input
                .dyn_ref::<HtmlInputElement>()
                .and_then(|i| i.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                show_form_error(&error, Some("Selecciona un archivo"));
                return;
            };
            show_form_error(&error, None);
            set_busy(&submit_btn, true);

            let api = api.clone();
            let input = input.clone();
            let error = error.clone();
            let submit_btn = submit_btn.clone();
            let uploaded = uploaded.clone();
            spawn_local(async move {
                match file_service::upload_file(&api, &file).await {
                    Ok(envelope) if envelope.is_success() => {
                        toast::show_success("Archivo subido");
                        let name = envelope.payload.file_name.unwrap_or_else(|| file.name());
                        if let Err(e) = append_uploaded(&uploaded, &name, envelope.payload.url.as_deref()) {
                            log::error!("❌ [UPLOAD] {:?}", e);
                        }
                        clear_input(&input);
                    }
                    Ok(envelope) => show_form_error(&error, Some(&envelope.message_or("No se pudo subir"))),
                    Err(e) => show_form_error(&error, Some(&e.to_string())),
                }
                set_busy(&submit_btn, false);
            });
        })?;
    }

    append_child(&form, &input)?;
    append_child(&form, &submit)?;
    append_child(&form, &error)?;
    append_child(&section, &form)?;
    append_child(&section, &uploaded)?;
    Ok(section)
}

fn append_uploaded(list: &Element, name: &str, url: Option<&str>) -> Result<(), JsValue> {
    let item = match url {
        Some(url) => ElementBuilder::new("a")?
            .attr("href", url)?
            .attr("target", "_blank")?
            .text(name)
            .build(),
        None => text_element("span", "", name)?,
    };
    let li = ElementBuilder::new("li")?.child(item)?.build();
    list.prepend_with_node_1(&li)
}
