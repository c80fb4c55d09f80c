use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LogFoodRequest {
    pub user_id: i64,
    pub image_base64: String,
    #[serde(default)]
    pub food_log_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LogFoodResponse {
    pub success: bool,
    pub image_url: String,
    pub food_log_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
