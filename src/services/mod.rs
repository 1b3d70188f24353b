pub mod error;
pub mod interceptors;
pub mod api_client;
pub mod auth_service;
pub mod user_service;
pub mod statistics_service;
pub mod file_service;

pub use error::ApiError;
pub use api_client::{ApiClient, ApiResponse};
pub use interceptors::{auth_headers, classify, Disposition, RawResponse, ResponseInterceptor};
pub use statistics_service::{bar_width_percent, StatisticsSummary};
