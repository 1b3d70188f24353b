use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8888";
const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_TIMEOUT_MS: u32 = 5_000_000;
const DEFAULT_TOAST_DURATION_MS: u32 = 3_000;
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;
/// Mayor retardo que setTimeout respeta; por encima dispara al instante
const MAX_TIMER_MS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Prefijo de las rutas del cliente (equivalente al BASE_URL del bundler)
    pub base_path: String,
    pub network_timeout_ms: u32,
    /// Enviar cookies en peticiones cross-origin
    pub with_credentials: bool,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            network_timeout_ms: DEFAULT_TIMEOUT_MS,
            with_credentials: true,
            enable_logging: true,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("BASE_PATH"),
            option_env!("NETWORK_TIMEOUT_MS"),
            option_env!("WITH_CREDENTIALS"),
            option_env!("ENABLE_LOGGING"),
            option_env!("TOAST_DURATION_MS"),
            option_env!("MAX_UPLOAD_BYTES"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        base_path: Option<&str>,
        timeout_ms: Option<&str>,
        with_credentials: Option<&str>,
        enable_logging: Option<&str>,
        toast_duration_ms: Option<&str>,
        max_upload_bytes: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            base_path: base_path
                .map(normalize_base_path)
                .unwrap_or(defaults.base_path),
            network_timeout_ms: timeout_ms
                .and_then(|v| v.parse::<u32>().ok())
                .map(|ms| ms.min(MAX_TIMER_MS))
                .unwrap_or(defaults.network_timeout_ms),
            with_credentials: with_credentials
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.with_credentials),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.parse::<u32>().ok())
                .map(|ms| ms.min(MAX_TIMER_MS))
                .unwrap_or(defaults.toast_duration_ms),
            max_upload_bytes: max_upload_bytes
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }

    /// URL absoluta de un endpoint del backend
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

/// Siempre empieza y termina con '/'
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_local_backend() {
        let config = AppConfig::from_values(None, None, None, None, None, None, None);
        assert_eq!(config.api_base_url, "http://localhost:8888");
        assert_eq!(config.base_path, "/");
        assert!(config.with_credentials);
        assert_eq!(config.network_timeout_ms, 5_000_000);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = AppConfig::from_values(
            Some("https://api.example.com/"),
            Some("admin"),
            Some("abc"),
            Some("false"),
            Some("nope"),
            None,
            Some("1024"),
        );
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.base_path, "/admin/");
        assert_eq!(config.network_timeout_ms, 5_000_000);
        assert!(!config.with_credentials);
        assert!(config.enable_logging);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn timer_values_are_clamped_to_set_timeout_range() {
        let config = AppConfig::from_values(
            None,
            None,
            Some("3000000000"),
            None,
            None,
            Some("4294967295"),
            None,
        );
        assert_eq!(config.network_timeout_ms, i32::MAX as u32);
        assert_eq!(config.toast_duration_ms, i32::MAX as u32);
    }

    #[test]
    fn api_url_joins_without_double_slash() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/user/login"), "http://localhost:8888/user/login");
        assert_eq!(config.api_url("file/upload"), "http://localhost:8888/file/upload");
    }
}
