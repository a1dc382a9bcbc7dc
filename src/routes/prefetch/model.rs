use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct HintRequest {
    /// 用户当前所在页面路径
    pub current: String,
    /// 悬停链接指向的路径
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {}
