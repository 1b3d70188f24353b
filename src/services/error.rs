/// Error de una llamada al backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No hubo respuesta (CORS, servidor caído, ...)
    Network(String),
    Timeout,
    /// 401: la sesión ya fue cerrada y se redirigió a login
    Unauthorized,
    /// Código de aplicación distinto de 200 no contemplado
    Rejected { code: i64, message: String },
    /// Estado HTTP de error
    Http { status: u16, message: String },
    Parse(String),
    Build(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Rejected { message, .. } => write!(f, "{}", message),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Build(msg) => write!(f, "Request build error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
