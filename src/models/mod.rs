pub mod api;
pub mod auth;
pub mod session;
pub mod statistics;
pub mod upload;
pub mod user;

pub use api::{ApiEnvelope, Empty, EnvelopeHead, CODE_OK};
pub use auth::{LoginPayload, LoginRequest, RegisterRequest};
pub use session::Session;
pub use statistics::{LoginStatistic, StatisticsPayload};
pub use upload::UploadPayload;
pub use user::{User, UserForm, UserPage, UserQuery};
