use serde::{Deserialize, Serialize};

/// 查询缓存数据模型
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedQuery {
    pub path: String,
    pub payload: serde_json::Value,
    pub updated_at: i64, // Unix timestamp (毫秒)
}
