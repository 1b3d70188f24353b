// ============================================================================
// USERS VIEW - Gestión de usuarios (búsqueda, paginación, alta, edición, baja)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{
    append_child, clear_children, clear_input, input_value, on_click, on_submit, set_attribute,
    set_text_content, text_element, toast, window, ElementBuilder,
};
use crate::models::{User, UserForm, UserQuery};
use crate::services::user_service::{self, total_pages};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::shared::{button, form_field};

const COLUMNS: [&str; 6] = ["ID", "Usuario", "Email", "Roles", "Creado", "Acciones"];

/// Estado de la página mientras está montada
struct UsersPage {
    api: ApiClient,
    query: RefCell<UserQuery>,
    total: Cell<u64>,
    tbody: Element,
    pager_label: Element,
}

pub fn render_users(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("page page-users").build();
    append_child(&section, &text_element("h2", "page-title", "Gestión de usuarios")?)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    let pager_label = text_element("span", "pager-label", "")?;

    let page = Rc::new(UsersPage {
        api: ApiClient::new(state.auth.clone()),
        query: RefCell::new(UserQuery::default()),
        total: Cell::new(0),
        tbody: tbody.clone(),
        pager_label: pager_label.clone(),
    });

    append_child(&section, &create_search_bar(&page)?)?;
    append_child(&section, &create_user_form(&page)?)?;

    let header_row = ElementBuilder::new("tr")?
        .children(
            COLUMNS
                .iter()
                .map(|c| text_element("th", "", c))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(header_row)?.build())?
        .child(tbody)?
        .build();
    append_child(&section, &table)?;

    append_child(&section, &create_pager(&page, pager_label)?)?;

    refresh(page);
    Ok(section)
}

fn create_search_bar(page: &Rc<UsersPage>) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("form")?.class("toolbar").build();
    let (group, input) = form_field("user-search", "Buscar", "search", "Usuario o email")?;
    let search = button("btn-primary", "Buscar", "submit")?;

    let page = page.clone();
    on_submit(&bar, move || {
        {
            let mut query = page.query.borrow_mut();
            query.keyword = input_value(&input);
            query.page = 1;
        }
        refresh(page.clone());
    })?;

    append_child(&bar, &group)?;
    append_child(&bar, &search)?;
    Ok(bar)
}

fn create_user_form(page: &Rc<UsersPage>) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("inline-form").build();
    let (username_group, username_input) = form_field("new-username", "Usuario", "text", "Usuario")?;
    let (password_group, password_input) = form_field("new-password", "Contraseña", "password", "Contraseña")?;
    let (roles_group, roles_input) = form_field("new-roles", "Roles", "text", "Admin")?;
    let submit = button("btn-primary", "Añadir usuario", "submit")?;

    {
        let page = page.clone();
        on_submit(&form, move || {
            let username = input_value(&username_input).trim().to_string();
            let password = input_value(&password_input);
            if username.is_empty() || password.is_empty() {
                toast::show_error("Usuario y contraseña son obligatorios");
                return;
            }
            let user_form = UserForm {
                id: None,
                username,
                password: Some(password),
                email: None,
                roles: input_value(&roles_input).trim().to_string(),
            };

            let page = page.clone();
            let inputs = [username_input.clone(), password_input.clone(), roles_input.clone()];
            spawn_local(async move {
                match user_service::create_user(&page.api, &user_form).await {
                    Ok(envelope) if envelope.is_success() => {
                        toast::show_success("Usuario creado");
                        inputs.iter().for_each(clear_input);
                        refresh(page);
                    }
                    Ok(envelope) => toast::show_error(&envelope.message_or("No se pudo crear el usuario")),
                    Err(e) => log::error!("❌ [USERS] {}", e),
                }
            });
        })?;
    }

    for child in [username_group, password_group, roles_group, submit] {
        append_child(&form, &child)?;
    }
    Ok(form)
}

fn create_pager(page: &Rc<UsersPage>, label: Element) -> Result<Element, JsValue> {
    let prev = button("btn-secondary", "‹ Anterior", "button")?;
    let next = button("btn-secondary", "Siguiente ›", "button")?;

    {
        let page = page.clone();
        on_click(&prev, move |_| {
            let moved = {
                let mut query = page.query.borrow_mut();
                if query.page > 1 {
                    query.page -= 1;
                    true
                } else {
                    false
                }
            };
            if moved {
                refresh(page.clone());
            }
        })?;
    }
    {
        let page = page.clone();
        on_click(&next, move |_| {
            let moved = {
                let mut query = page.query.borrow_mut();
                if query.page < total_pages(page.total.get(), query.size) {
                    query.page += 1;
                    true
                } else {
                    false
                }
            };
            if moved {
                refresh(page.clone());
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("pager")
        .child(prev)?
        .child(label)?
        .child(next)?
        .build())
}

/// Recargar la página actual desde el backend
fn refresh(page: Rc<UsersPage>) {
    spawn_local(async move {
        let query = page.query.borrow().clone();
        let result = match user_service::list_users(&page.api, &query).await {
            Ok(envelope) if envelope.is_success() => {
                page.total.set(envelope.payload.total);
                render_rows(&page, &envelope.payload.data)
            }
            Ok(envelope) => render_message(&page, &envelope.message_or("No se pudo cargar la lista")),
            Err(e) => render_message(&page, &e.to_string()),
        };
        if let Err(e) = result {
            log::error!("❌ [USERS] Error pintando la tabla: {:?}", e);
        }

        let pages = total_pages(page.total.get(), query.size);
        set_text_content(
            &page.pager_label,
            &format!("Página {} de {} · {} usuarios", query.page, pages, page.total.get()),
        );
    });
}

fn render_rows(page: &Rc<UsersPage>, users: &[User]) -> Result<(), JsValue> {
    clear_children(&page.tbody);
    if users.is_empty() {
        return render_message(page, "No hay usuarios");
    }

    for user in users {
        let actions = ElementBuilder::new("td")?.class("row-actions").build();

        let edit = button("btn-secondary", "Roles", "button")?;
        {
            let page = page.clone();
            let user = user.clone();
            on_click(&edit, move |_| edit_roles(page.clone(), &user))?;
        }

        let delete = button("btn-danger", "Eliminar", "button")?;
        {
            let page = page.clone();
            let user = user.clone();
            on_click(&delete, move |_| delete_user(page.clone(), &user))?;
        }

        append_child(&actions, &edit)?;
        append_child(&actions, &delete)?;

        let row = ElementBuilder::new("tr")?
            .child(text_element("td", "", &user.id.to_string())?)?
            .child(text_element("td", "", &user.username)?)?
            .child(text_element("td", "", user.email.as_deref().unwrap_or("-"))?)?
            .child(text_element("td", "", &user.roles)?)?
            .child(text_element("td", "", user.create_time.as_deref().unwrap_or("-"))?)?
            .child(actions)?
            .build();
        append_child(&page.tbody, &row)?;
    }
    Ok(())
}

fn render_message(page: &UsersPage, message: &str) -> Result<(), JsValue> {
    clear_children(&page.tbody);
    let cell = text_element("td", "table-empty", message)?;
    set_attribute(&cell, "colspan", &COLUMNS.len().to_string())?;
    let row = ElementBuilder::new("tr")?.child(cell)?.build();
    append_child(&page.tbody, &row)
}

fn edit_roles(page: Rc<UsersPage>, user: &User) {
    let answer = window().and_then(|w| {
        w.prompt_with_message_and_default(&format!("Roles de {}", user.username), &user.roles)
            .ok()
            .flatten()
    });
    let Some(roles) = answer else { return };

    let form = UserForm {
        id: Some(user.id),
        username: user.username.clone(),
        password: None,
        email: user.email.clone(),
        roles: roles.trim().to_string(),
    };
    spawn_local(async move {
        match user_service::update_user(&page.api, &form).await {
            Ok(envelope) if envelope.is_success() => {
                toast::show_success("Roles actualizados");
                refresh(page);
            }
            Ok(envelope) => toast::show_error(&envelope.message_or("No se pudo actualizar")),
            Err(e) => log::error!("❌ [USERS] {}", e),
        }
    });
}

fn delete_user(page: Rc<UsersPage>, user: &User) {
    let confirmed = window()
        .and_then(|w| w.confirm_with_message(&format!("¿Eliminar a {}?", user.username)).ok())
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    let id = user.id;
    spawn_local(async move {
        match user_service::delete_user(&page.api, id).await {
            Ok(envelope) if envelope.is_success() => {
                toast::show_success("Usuario eliminado");
                refresh(page);
            }
            Ok(envelope) => toast::show_error(&envelope.message_or("No se pudo eliminar")),
            Err(e) => log::error!("❌ [USERS] {}", e),
        }
    });
}
