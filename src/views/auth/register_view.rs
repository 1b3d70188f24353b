use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, input_value, on_click, on_submit, toast, ElementBuilder};
use crate::models::auth::validate_registration;
use crate::models::RegisterRequest;
use crate::router::Route;
use crate::services::{auth_service, ApiClient};
use crate::state::AppState;
use crate::views::shared::{button, error_line, form_field, set_busy, show_form_error};

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Crear cuenta").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();
    let (username_group, username_input) = form_field("reg-username", "Usuario", "text", "Nombre de usuario")?;
    let (email_group, email_input) = form_field("reg-email", "Email (opcional)", "email", "correo@ejemplo.com")?;
    let (password_group, password_input) = form_field("reg-password", "Contraseña", "password", "Contraseña")?;
    let (confirm_group, confirm_input) = form_field("reg-confirm", "Repetir contraseña", "password", "Repite la contraseña")?;
    let error = error_line()?;
    let submit = button("btn-login", "Registrarse", "submit")?;

    {
        let state = state.clone();
        let error = error.clone();
        let submit_btn = submit.clone();
        on_submit(&form, move || {
            let username = input_value(&username_input).trim().to_string();
            let password = input_value(&password_input);
            let confirm = input_value(&confirm_input);
            let email = input_value(&email_input).trim().to_string();

            if let Err(message) = validate_registration(&username, &password, &confirm) {
                show_form_error(&error, Some(&message));
                return;
            }
            show_form_error(&error, None);
            set_busy(&submit_btn, true);

            let request = RegisterRequest {
                username,
                password,
                email: Some(email).filter(|e| !e.is_empty()),
                phone: None,
            };

            let state = state.clone();
            let error = error.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let api = ApiClient::new(state.auth.clone());
                match auth_service::register(&api, &request).await {
                    Ok(envelope) if envelope.is_success() => {
                        toast::show_success("Cuenta creada, ya puedes iniciar sesión");
                        crate::navigate(Route::Login);
                    }
                    Ok(envelope) => {
                        show_form_error(&error, Some(&envelope.message_or("No se pudo registrar")));
                    }
                    Err(e) => show_form_error(&error, Some(&e.to_string())),
                }
                set_busy(&submit_btn, false);
            });
        })?;
    }

    let back = button("btn-link", "Volver al login", "button")?;
    on_click(&back, |_| crate::navigate(Route::Login))?;

    let fields = [username_group, email_group, password_group, confirm_group, error, submit, back];
    for field in fields.iter() {
        append_child(&form, field)?;
    }

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;
    Ok(screen)
}
