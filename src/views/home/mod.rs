// ============================================================================
// HOME LAYOUT - Cabecera + menú lateral + contenido de la ruta hija
// ============================================================================

pub mod welcome;
pub mod users;
pub mod login_statistics;
pub mod file_upload;

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, text_element, toggle_class, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::views::shared::button;

/// Renderizar el layout de /home con la ruta hija `child`
pub fn render_home(state: &AppState, child: Route) -> Result<Element, JsValue> {
    let layout = ElementBuilder::new("div")?.class("home-layout").build();
    toggle_class(&layout, "sidebar-collapsed", *state.sidebar_collapsed.borrow())?;

    append_child(&layout, &create_header(state)?)?;

    let body = ElementBuilder::new("div")?.class("home-body").build();
    append_child(&body, &create_sidebar(child)?)?;

    let content = ElementBuilder::new("main")?.class("home-content").build();
    let page = match child {
        Route::Welcome => welcome::render_welcome(state)?,
        Route::User => users::render_users(state)?,
        Route::LoginStatistics => login_statistics::render_login_statistics(state)?,
        Route::FileUpload => file_upload::render_file_upload(state)?,
        _ => render_index()?,
    };
    append_child(&content, &page)?;
    append_child(&body, &content)?;
    append_child(&layout, &body)?;

    Ok(layout)
}

fn create_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let toggle = button("btn-icon-header", "☰", "button")?;
    {
        let state = state.clone();
        on_click(&toggle, move |_| {
            state.toggle_sidebar();
            crate::rerender_app();
        })?;
    }

    let roles = state.auth.roles();
    let roles_label = if roles.is_empty() { "sin rol".to_string() } else { roles };

    let logout = button("btn-logout", "Cerrar sesión", "button")?;
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            state.auth.logout();
            crate::navigate(Route::Login);
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("header-actions")
        .child(text_element("span", "role-badge", &roles_label)?)?
        .child(logout)?
        .build();

    append_child(&header, &toggle)?;
    append_child(&header, &text_element("h1", "app-title", "Consola de administración")?)?;
    append_child(&header, &actions)?;
    Ok(header)
}

fn create_sidebar(active: Route) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("sidebar").build();
    let list = ElementBuilder::new("ul")?.class("menu").build();

    for route in Route::children_of(Route::Home) {
        let item = text_element("li", "menu-item", route.title())?;
        toggle_class(&item, "active", route == active)?;
        on_click(&item, move |_| crate::navigate(route))?;
        append_child(&list, &item)?;
    }

    append_child(&nav, &list)?;
    Ok(nav)
}

/// /home sin ruta hija
fn render_index() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("page page-index")
        .child(text_element("h2", "page-title", "Panel principal")?)?
        .child(text_element(
            "p",
            "page-hint",
            "Elige una opción del menú. Las secciones requieren el rol Admin.",
        )?)?
        .build())
}
