use serde_json::Value;

use crate::cache::keys::session_keys;
use crate::cache::models::session::CachedAuthEntry;
use crate::cache::store::{SessionStore, StoreError};

/// 认证状态缓存操作
pub struct AuthCacheOperations;

impl AuthCacheOperations {
    /// 写入认证状态，覆盖已有条目
    /// 存储层TTL只是兜底，读取时以 cached_at 判断过期
    pub async fn store(
        store: &dyn SessionStore,
        session_id: &str,
        profile: Value,
        ttl_ms: u64,
    ) -> Result<(), StoreError> {
        let entry = CachedAuthEntry {
            data: profile,
            cached_at: chrono::Utc::now().timestamp_millis(),
        };

        let key = session_keys::auth_cache_key(session_id);
        let json =
            serde_json::to_string(&entry).map_err(|e| StoreError::Serialization(e.to_string()))?;

        store.set_ex(&key, &json, (ttl_ms / 1000).max(1)).await
    }

    /// 读取认证状态
    /// 过期或无法解析的条目会被删除并按缺失处理
    pub async fn fetch(
        store: &dyn SessionStore,
        session_id: &str,
        ttl_ms: u64,
    ) -> Result<Option<Value>, StoreError> {
        let key = session_keys::auth_cache_key(session_id);
        let Some(json) = store.get(&key).await? else {
            return Ok(None);
        };

        let entry: CachedAuthEntry = match serde_json::from_str(&json) {
            Ok(entry) => entry,
            Err(_) => {
                // 损坏条目当作未命中，顺手清掉
                store.del(&key).await?;
                return Ok(None);
            }
        };

        let age = chrono::Utc::now().timestamp_millis() - entry.cached_at;
        if age > ttl_ms as i64 {
            store.del(&key).await?;
            return Ok(None);
        }

        Ok(Some(entry.data))
    }

    /// 删除认证状态
    pub async fn clear(store: &dyn SessionStore, session_id: &str) -> Result<(), StoreError> {
        store.del(&session_keys::auth_cache_key(session_id)).await
    }
}
