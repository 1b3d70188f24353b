// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, input_value, on_click, on_submit, toast, ElementBuilder};
use crate::router::Route;
use crate::services::{auth_service, ApiClient};
use crate::state::AppState;
use crate::views::shared::{button, error_line, form_field, set_busy, show_form_error};

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Consola de administración").build())?
        .child(ElementBuilder::new("p")?.text("Inicia sesión para continuar").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();
    let (username_group, username_input) = form_field("username", "Usuario", "text", "Ingresa tu usuario")?;
    let (password_group, password_input) = form_field("password", "Contraseña", "password", "Ingresa tu contraseña")?;
    let error = error_line()?;
    let submit = button("btn-login", "Iniciar sesión", "submit")?;

    {
        let state = state.clone();
        let error = error.clone();
        let submit_btn = submit.clone();
        on_submit(&form, move || {
            let username = input_value(&username_input).trim().to_string();
            let password = input_value(&password_input);

            if username.is_empty() || password.is_empty() {
                show_form_error(&error, Some("Por favor, completa todos los campos"));
                return;
            }
            show_form_error(&error, None);
            set_busy(&submit_btn, true);

            let state = state.clone();
            let error = error.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let api = ApiClient::new(state.auth.clone());
                match auth_service::login(&api, &username, &password).await {
                    Ok(envelope) if envelope.is_success() => match envelope.payload.credentials() {
                        Some((token, roles)) => {
                            state.auth.login(&token, &roles);
                            toast::show_success("Sesión iniciada");
                            crate::navigate(Route::Welcome);
                        }
                        None => {
                            log::error!("❌ [LOGIN] Respuesta 200 sin token");
                            show_form_error(&error, Some("El servidor no devolvió un token"));
                        }
                    },
                    Ok(envelope) => {
                        let message = envelope.message_or("Usuario o contraseña incorrectos");
                        show_form_error(&error, Some(&message));
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] {}", e);
                        show_form_error(&error, Some(&e.to_string()));
                    }
                }
                set_busy(&submit_btn, false);
            });
        })?;
    }

    let register_link = button("btn-link", "¿No tienes cuenta? Regístrate", "button")?;
    on_click(&register_link, |_| crate::navigate(Route::Register))?;

    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error)?;
    append_child(&form, &submit)?;
    append_child(&form, &register_link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
