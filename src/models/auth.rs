use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload de `/user/login`; ambos campos faltan cuando el login falla
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct LoginPayload {
    pub token: Option<String>,
    pub roles: Option<String>,
}

impl LoginPayload {
    /// (token, roles) solo si el backend devolvió un token no vacío
    pub fn credentials(&self) -> Option<(String, String)> {
        let token = self.token.clone().filter(|t| !t.is_empty())?;
        Some((token, self.roles.clone().unwrap_or_default()))
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Validar el formulario de registro antes de enviarlo
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Usuario y contraseña son obligatorios".to_string());
    }
    if password != confirm_password {
        return Err("Las contraseñas no coinciden".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_token() {
        let payload = LoginPayload { token: Some(String::new()), roles: Some("Admin".into()) };
        assert_eq!(payload.credentials(), None);

        let payload = LoginPayload { token: Some("abc".into()), roles: None };
        assert_eq!(payload.credentials(), Some(("abc".to_string(), String::new())));
    }

    #[test]
    fn registration_checks_confirmation() {
        assert!(validate_registration("bob", "secret", "secret").is_ok());
        assert!(validate_registration("  ", "secret", "secret").is_err());
        assert!(validate_registration("bob", "secret", "other").is_err());
    }

    #[test]
    fn register_request_omits_empty_optionals() {
        let req = RegisterRequest {
            username: "bob".into(),
            password: "pw".into(),
            email: None,
            phone: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["username"], "bob");
    }
}
