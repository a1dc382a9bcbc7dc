use serde::{Deserialize, Serialize};

use crate::navigation::RedirectPlan;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub role: String,
    pub token: String,
    pub expires_at: i64,
    pub dashboard: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub profile: serde_json::Value,
    /// 本次响应是否来自认证状态缓存
    pub cached: bool,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub redirect: RedirectPlan,
}
