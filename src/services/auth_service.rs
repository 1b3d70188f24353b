use crate::models::{ApiEnvelope, Empty, LoginPayload, LoginRequest, RegisterRequest};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Perform login with username and password
pub async fn login(
    api: &ApiClient,
    username: &str,
    password: &str,
) -> Result<ApiEnvelope<LoginPayload>, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    log::info!("🔐 Login de usuario: {}", username);
    api.post("/user/login", &request).await
}

/// Register a new account
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<ApiEnvelope<Empty>, ApiError> {
    log::info!("📝 Registro de usuario: {}", request.username);
    api.post("/user/register", request).await
}
