// ============================================================================
// API CLIENT - Comunicación HTTP con interceptores de petición y respuesta
// ============================================================================

use std::rc::Rc;
use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, FormData, RequestCredentials};
use crate::config::CONFIG;
use crate::models::{ApiEnvelope, EnvelopeHead};
use crate::router::Route;
use crate::services::error::ApiError;
use crate::services::interceptors::{auth_headers, RawResponse, ResponseInterceptor};
use crate::state::AuthState;

/// Cuerpo de una petición
enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

/// Respuesta ya aceptada por el interceptor.
///
/// Un 206 o un 2xx sin `code` llegan como `Raw`, sin tocar el cuerpo.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Envelope(ApiEnvelope<T>),
    Raw(RawResponse),
}

impl<T> ApiResponse<T> {
    /// Exigir envelope (los endpoints de la consola siempre lo devuelven)
    pub fn into_envelope(self) -> Result<ApiEnvelope<T>, ApiError> {
        match self {
            ApiResponse::Envelope(envelope) => Ok(envelope),
            ApiResponse::Raw(raw) => {
                log::error!("❌ [API] Respuesta sin envelope (HTTP {})", raw.status);
                Err(ApiError::Parse(format!("respuesta sin envelope (HTTP {})", raw.status)))
            }
        }
    }
}

/// Cliente API: añade cabeceras de auth y pasa cada respuesta por el interceptor
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    with_credentials: bool,
    auth: AuthState,
    interceptor: ResponseInterceptor,
}

impl ApiClient {
    /// Cliente con los efectos de UI reales (toast + router)
    pub fn new(auth: AuthState) -> Self {
        let notify: Rc<dyn Fn(&str)> = Rc::new(|message: &str| crate::dom::toast::show_error(message));
        let redirect: Rc<dyn Fn(Route)> = Rc::new(crate::navigate);
        Self::with_interceptor(auth.clone(), ResponseInterceptor::new(auth, notify, redirect))
    }

    pub fn with_interceptor(auth: AuthState, interceptor: ResponseInterceptor) -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
            timeout_ms: CONFIG.network_timeout_ms,
            with_credentials: CONFIG.with_credentials,
            auth,
            interceptor,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>, ApiError> {
        self.get_response(path, query).await?.into_envelope()
    }

    /// GET que devuelve también respuestas parciales (206) o sin envelope
    pub async fn get_response<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, ApiError> {
        let raw = self.send(Method::GET, path, query, Body::Empty).await?;
        parse_response(raw)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Build(e.to_string()))?;
        let raw = self.send(Method::POST, path, &[], Body::Json(json)).await?;
        parse_response(raw)?.into_envelope()
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Build(e.to_string()))?;
        let raw = self.send(Method::PUT, path, &[], Body::Json(json)).await?;
        parse_response(raw)?.into_envelope()
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiEnvelope<T>, ApiError> {
        let raw = self.send(Method::DELETE, path, &[], Body::Empty).await?;
        parse_response(raw)?.into_envelope()
    }

    /// POST multipart (el navegador pone el boundary del Content-Type)
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let raw = self.send(Method::POST, path, &[], Body::Form(form)).await?;
        parse_response(raw)?.into_envelope()
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
    ) -> Result<RawResponse, ApiError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::info!("🌐 [API] {} {}", method, url);

        let controller = AbortController::new()
            .map_err(|e| ApiError::Build(format!("{:?}", e)))?;

        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())))
            .abort_signal(Some(&controller.signal()));

        if self.with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        // Interceptor de peticiones
        for (name, value) in auth_headers(&self.auth.snapshot()) {
            builder = builder.header(name, &value);
        }

        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(json) => builder.header("Content-Type", "application/json").body(json),
            Body::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Build(e.to_string()))?;

        let abort = controller.clone();
        let timer = Timeout::new(self.timeout_ms, move || abort.abort());

        let sent = request.send().await;
        let timed_out = controller.signal().aborted();
        drop(timer);

        let response = match sent {
            Ok(response) => response,
            Err(_) if timed_out => return Err(self.interceptor.on_error(ApiError::Timeout)),
            Err(e) => return Err(self.interceptor.on_error(ApiError::Network(e.to_string()))),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.interceptor.on_error(ApiError::Network(e.to_string())))?;

        self.interceptor.on_response(RawResponse { status, body })
    }
}

/// Deserializar una respuesta ya aceptada por el interceptor
fn parse_response<T: DeserializeOwned>(raw: RawResponse) -> Result<ApiResponse<T>, ApiError> {
    if raw.status == 206 || EnvelopeHead::parse(&raw.body).is_none() {
        return Ok(ApiResponse::Raw(raw));
    }
    serde_json::from_str(&raw.body).map(ApiResponse::Envelope).map_err(|e| {
        log::error!("❌ [API] Respuesta inesperada (HTTP {}): {}", raw.status, e);
        ApiError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Empty, LoginPayload};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn partial_content_reaches_caller_untouched() {
        let response = parse_response::<Empty>(raw(206, "bytes 0-99 of a file")).unwrap();
        assert_eq!(response, ApiResponse::Raw(raw(206, "bytes 0-99 of a file")));
    }

    #[test]
    fn partial_content_is_raw_even_when_it_looks_like_an_envelope() {
        let body = r#"{"code":200,"message":"ok"}"#;
        let response = parse_response::<Empty>(raw(206, body)).unwrap();
        assert_eq!(response, ApiResponse::Raw(raw(206, body)));
    }

    #[test]
    fn plain_success_body_is_returned_raw() {
        let response = parse_response::<Empty>(raw(200, "plain ok")).unwrap();
        assert_eq!(response, ApiResponse::Raw(raw(200, "plain ok")));
    }

    #[test]
    fn envelope_bodies_are_deserialized() {
        let body = r#"{"code":200,"token":"abc","roles":"Admin"}"#;
        let envelope = parse_response::<LoginPayload>(raw(200, body))
            .unwrap()
            .into_envelope()
            .unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.payload.token.as_deref(), Some("abc"));
    }

    #[test]
    fn typed_callers_get_parse_error_for_raw_bodies() {
        let result = parse_response::<Empty>(raw(200, "plain ok")).unwrap().into_envelope();
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
