use crate::models::{ApiEnvelope, Empty, UserForm, UserPage, UserQuery};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub async fn list_users(api: &ApiClient, query: &UserQuery) -> Result<ApiEnvelope<UserPage>, ApiError> {
    let mut params = vec![("page", query.page.to_string()), ("size", query.size.to_string())];
    if !query.keyword.trim().is_empty() {
        params.push(("keyword", query.keyword.trim().to_string()));
    }
    api.get("/user/list", &params).await
}

pub async fn create_user(api: &ApiClient, form: &UserForm) -> Result<ApiEnvelope<Empty>, ApiError> {
    log::info!("➕ Creando usuario: {}", form.username);
    api.post("/user/add", form).await
}

pub async fn update_user(api: &ApiClient, form: &UserForm) -> Result<ApiEnvelope<Empty>, ApiError> {
    log::info!("✏️ Actualizando usuario: {:?}", form.id);
    api.put("/user/update", form).await
}

pub async fn delete_user(api: &ApiClient, id: i64) -> Result<ApiEnvelope<Empty>, ApiError> {
    log::info!("🗑️ Eliminando usuario: {}", id);
    api.delete(&format!("/user/delete/{}", id)).await
}

/// Número de páginas para `total` filas (al menos 1)
pub fn total_pages(total: u64, size: u32) -> u32 {
    if size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_round_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 1);
    }
}
