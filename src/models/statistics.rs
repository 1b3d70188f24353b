use serde::{Deserialize, Serialize};

/// Número de logins en un día (`date` en formato YYYY-MM-DD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginStatistic {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsPayload {
    pub data: Vec<LoginStatistic>,
}
