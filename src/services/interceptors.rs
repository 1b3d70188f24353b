// ============================================================================
// INTERCEPTORS - Cabeceras de auth en peticiones + traducción de códigos
// ============================================================================

use std::rc::Rc;
use crate::models::{EnvelopeHead, Session, CODE_OK};
use crate::router::Route;
use crate::services::error::ApiError;
use crate::state::AuthState;
use crate::utils::{HEADER_AUTHORIZATION, HEADER_ROLES};

/// Códigos de aplicación que se devuelven al llamador sin tocar
const PASS_THROUGH_CODES: [i64; 3] = [404, 500, 501];
const CODE_UNAUTHORIZED: i64 = 401;

const STATUS_PARTIAL_CONTENT: u16 = 206;
const STATUS_UNAUTHORIZED: u16 = 401;

/// Cabeceras de auth: solo si hay token Y roles
pub fn auth_headers(session: &Session) -> Vec<(&'static str, String)> {
    if session.token.is_empty() || session.roles.is_empty() {
        return Vec::new();
    }
    vec![
        (HEADER_AUTHORIZATION, format!("Bearer {}", session.token)),
        (HEADER_ROLES, session.roles.clone()),
    ]
}

/// Veredicto del interceptor de respuestas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Accept,
    /// 206: se entrega la respuesta cruda
    Partial,
    PassThrough(i64),
    Unauthorized,
    Reject(String),
}

/// Clasificar una respuesta por estado HTTP y código de aplicación
pub fn classify(status: u16, head: Option<&EnvelopeHead>) -> Disposition {
    if status == STATUS_PARTIAL_CONTENT {
        return Disposition::Partial;
    }
    if status == STATUS_UNAUTHORIZED {
        return Disposition::Unauthorized;
    }
    if !(200..300).contains(&status) {
        let message = head
            .and_then(|h| h.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        return Disposition::Reject(message);
    }

    let Some(head) = head else {
        return Disposition::Accept;
    };

    match head.code {
        CODE_OK => Disposition::Accept,
        CODE_UNAUTHORIZED => Disposition::Unauthorized,
        code if PASS_THROUGH_CODES.contains(&code) => Disposition::PassThrough(code),
        _ => Disposition::Reject(
            head.message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Error".to_string()),
        ),
    }
}

/// Respuesta ya recibida: estado + cuerpo en texto
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Aplica los efectos de cada veredicto (toast, logout, redirección)
#[derive(Clone)]
pub struct ResponseInterceptor {
    auth: AuthState,
    notify: Rc<dyn Fn(&str)>,
    redirect: Rc<dyn Fn(Route)>,
}

impl ResponseInterceptor {
    pub fn new(auth: AuthState, notify: Rc<dyn Fn(&str)>, redirect: Rc<dyn Fn(Route)>) -> Self {
        Self { auth, notify, redirect }
    }

    pub fn on_response(&self, raw: RawResponse) -> Result<RawResponse, ApiError> {
        let head = EnvelopeHead::parse(&raw.body);

        match classify(raw.status, head.as_ref()) {
            Disposition::Accept | Disposition::Partial => Ok(raw),
            Disposition::PassThrough(code) => {
                log::warn!("⚠️ [API] Código {} devuelto al llamador", code);
                Ok(raw)
            }
            Disposition::Unauthorized => {
                if raw.status == STATUS_UNAUTHORIZED {
                    (self.notify)(&format!("Request failed with status code {}", raw.status));
                }
                log::warn!("🔒 [API] 401: cerrando sesión");
                self.auth.logout();
                (self.redirect)(Route::Login);
                Err(ApiError::Unauthorized)
            }
            Disposition::Reject(message) => {
                (self.notify)(&message);
                if (200..300).contains(&raw.status) {
                    let code = head.map(|h| h.code).unwrap_or_default();
                    Err(ApiError::Rejected { code, message })
                } else {
                    Err(ApiError::Http { status: raw.status, message })
                }
            }
        }
    }

    /// Fallos sin respuesta: toast y se propaga el error
    pub fn on_error(&self, error: ApiError) -> ApiError {
        log::error!("❌ [API] {}", error);
        (self.notify)(&error.to_string());
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{KeyValueStorage, MemoryStorage};
    use std::cell::RefCell;

    fn head(code: i64, message: Option<&str>) -> EnvelopeHead {
        EnvelopeHead { code, message: message.map(String::from) }
    }

    struct Harness {
        storage: Rc<MemoryStorage>,
        auth: AuthState,
        toasts: Rc<RefCell<Vec<String>>>,
        redirects: Rc<RefCell<Vec<Route>>>,
        interceptor: ResponseInterceptor,
    }

    fn harness() -> Harness {
        let storage = Rc::new(MemoryStorage::with_items(&[("token", "jwt"), ("roles", "Admin")]));
        let auth = AuthState::new(storage.clone());
        let toasts = Rc::new(RefCell::new(Vec::new()));
        let redirects = Rc::new(RefCell::new(Vec::new()));
        let notify: Rc<dyn Fn(&str)> = {
            let toasts = toasts.clone();
            Rc::new(move |msg: &str| toasts.borrow_mut().push(msg.to_string()))
        };
        let redirect: Rc<dyn Fn(Route)> = {
            let redirects = redirects.clone();
            Rc::new(move |route: Route| redirects.borrow_mut().push(route))
        };
        let interceptor = ResponseInterceptor::new(auth.clone(), notify, redirect);
        Harness { storage, auth, toasts, redirects, interceptor }
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn headers_need_token_and_roles() {
        assert!(auth_headers(&Session::new("jwt", "")).is_empty());
        assert!(auth_headers(&Session::new("", "Admin")).is_empty());
        assert_eq!(
            auth_headers(&Session::new("jwt", "Admin")),
            vec![
                ("Authorization", "Bearer jwt".to_string()),
                ("Roles", "Admin".to_string()),
            ]
        );
    }

    #[test]
    fn classify_application_codes() {
        assert_eq!(classify(200, Some(&head(200, None))), Disposition::Accept);
        assert_eq!(classify(200, None), Disposition::Accept);
        assert_eq!(classify(200, Some(&head(401, None))), Disposition::Unauthorized);
        for code in [404, 500, 501] {
            assert_eq!(classify(200, Some(&head(code, None))), Disposition::PassThrough(code));
        }
        assert_eq!(
            classify(200, Some(&head(403, Some("forbidden")))),
            Disposition::Reject("forbidden".into())
        );
        assert_eq!(classify(200, Some(&head(418, None))), Disposition::Reject("Error".into()));
    }

    #[test]
    fn classify_transport_statuses() {
        assert_eq!(classify(206, Some(&head(999, None))), Disposition::Partial);
        assert_eq!(classify(401, None), Disposition::Unauthorized);
        assert_eq!(
            classify(502, None),
            Disposition::Reject("Request failed with status code 502".into())
        );
        assert_eq!(
            classify(500, Some(&head(500, Some("db down")))),
            Disposition::Reject("db down".into())
        );
    }

    #[test]
    fn unauthorized_code_clears_store_and_redirects_to_login() {
        let h = harness();
        let result = h.interceptor.on_response(raw(200, r#"{"code":401,"message":"expired"}"#));

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!h.auth.is_authenticated());
        assert_eq!(h.storage.get_item("token"), None);
        assert_eq!(h.storage.get_item("roles"), None);
        assert_eq!(*h.redirects.borrow(), vec![Route::Login]);
        assert!(h.toasts.borrow().is_empty());
    }

    #[test]
    fn unauthorized_status_also_shows_toast() {
        let h = harness();
        let result = h.interceptor.on_response(raw(401, ""));
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert_eq!(h.toasts.borrow().len(), 1);
        assert_eq!(*h.redirects.borrow(), vec![Route::Login]);
    }

    #[test]
    fn pass_through_codes_reach_caller_silently() {
        let h = harness();
        let body = r#"{"code":500,"message":"boom"}"#;
        assert_eq!(h.interceptor.on_response(raw(200, body)), Ok(raw(200, body)));
        assert!(h.toasts.borrow().is_empty());
        assert!(h.auth.is_authenticated());
    }

    #[test]
    fn other_codes_toast_and_reject() {
        let h = harness();
        let result = h.interceptor.on_response(raw(200, r#"{"code":403,"message":"denied"}"#));
        assert_eq!(result, Err(ApiError::Rejected { code: 403, message: "denied".into() }));
        assert_eq!(*h.toasts.borrow(), vec!["denied".to_string()]);
        assert!(h.redirects.borrow().is_empty());
    }

    #[test]
    fn transport_errors_toast() {
        let h = harness();
        let err = h.interceptor.on_error(ApiError::Network("offline".into()));
        assert_eq!(err, ApiError::Network("offline".into()));
        assert_eq!(*h.toasts.borrow(), vec!["Network error: offline".to_string()]);
    }
}
