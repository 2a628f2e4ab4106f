use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One day of service for one client. `regular_candles_comparison` is derived
/// at creation time from the previous day's record and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub id: String,
    pub client_id: String,
    pub date: String,
    pub regular_candles: u32,
    pub regular_candles_comparison: String,
    pub seasonal_candles: u32,
    pub online_time: Option<String>,
    pub actual_duration: Option<u32>,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub clients: Vec<Client>,
    pub records: Vec<DailyRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub date: String,
    pub regular_candles: u32,
    #[serde(default)]
    pub seasonal_candles: u32,
    pub online_time: Option<String>,
    pub actual_duration: Option<u32>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateRecordRequest {
    pub date: Option<String>,
    pub regular_candles: Option<u32>,
    pub seasonal_candles: Option<u32>,
    pub online_time: Option<String>,
    pub actual_duration: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Query parameters for `/api/search/records`; the wire names are camelCase.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub client_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_candles: Option<u32>,
    pub max_candles: Option<u32>,
}

// Trend items keep the record entities' snake_case keys; only the aggregate
// keys around them are camelCase.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub regular_candles: u32,
    pub seasonal_candles: u32,
    pub actual_duration: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    pub total_records: usize,
    pub total_candles: u64,
    pub total_seasonal_candles: u64,
    pub total_hours: u64,
    pub avg_candles: u64,
    pub avg_seasonal_candles: u64,
    pub avg_hours: f64,
    pub trend: Vec<TrendPoint>,
    pub latest_record: Option<DailyRecord>,
}

#[derive(Debug, Serialize)]
pub struct ApiData<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

pub fn ok<T>(data: T) -> axum::Json<ApiData<T>> {
    axum::Json(ApiData {
        success: true,
        data,
    })
}

pub fn done(message: impl Into<String>) -> axum::Json<ApiMessage> {
    axum::Json(ApiMessage {
        success: true,
        message: message.into(),
    })
}
