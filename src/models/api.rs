use serde::{Deserialize, Serialize};

/// Código de aplicación que indica éxito
pub const CODE_OK: i64 = 200;

/// Cuerpo de respuesta `{ code, message, ...payload }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Solo `code` y `message`, para que el interceptor clasifique sin conocer el payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnvelopeHead {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl EnvelopeHead {
    /// None si el cuerpo no es JSON o no trae `code`
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Payload vacío para endpoints que solo devuelven `code`/`message`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::LoginPayload;

    #[test]
    fn flattened_payload_reads_top_level_fields() {
        let body = r#"{"code":200,"message":"ok","token":"abc","roles":"Admin"}"#;
        let envelope: ApiEnvelope<LoginPayload> = serde_json::from_str(body).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.payload.token.as_deref(), Some("abc"));
        assert_eq!(envelope.payload.roles.as_deref(), Some("Admin"));
    }

    #[test]
    fn error_envelope_without_payload_still_parses() {
        let body = r#"{"code":500,"message":"boom"}"#;
        let envelope: ApiEnvelope<LoginPayload> = serde_json::from_str(body).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.payload, LoginPayload::default());
        assert_eq!(envelope.message_or("Error"), "boom");
    }

    #[test]
    fn head_parse_ignores_non_envelopes() {
        assert_eq!(EnvelopeHead::parse("not json"), None);
        assert_eq!(EnvelopeHead::parse(r#"{"message":"no code"}"#), None);
        assert_eq!(
            EnvelopeHead::parse(r#"{"code":401}"#),
            Some(EnvelopeHead { code: 401, message: None })
        );
    }
}
