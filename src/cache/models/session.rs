use serde::{Deserialize, Serialize};

/// 认证状态缓存数据模型
/// data 为登录用户档案，结构不做约束
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedAuthEntry {
    pub data: serde_json::Value,
    pub cached_at: i64, // Unix timestamp (毫秒)
}
