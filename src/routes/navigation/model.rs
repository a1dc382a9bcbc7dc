use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub role: String,
    pub dashboard: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    /// 客户端刚切换到的页面路径
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct TransitionResponse {}
