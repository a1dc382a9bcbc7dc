use serde_json::Value;

use crate::cache::keys::query_keys;
use crate::cache::models::query::CachedQuery;
use crate::cache::store::{SessionStore, StoreError};

/// 查询缓存操作
/// 摘要接口的响应按路径缓存，清理只是缓存压力的缓解手段，不影响正确性
pub struct QueryCacheOperations;

impl QueryCacheOperations {
    /// 写入查询结果
    pub async fn put(
        store: &dyn SessionStore,
        path: &str,
        payload: Value,
        ttl_secs: u64,
    ) -> Result<(), StoreError> {
        let entry = CachedQuery {
            path: path.to_string(),
            payload,
            updated_at: chrono::Utc::now().timestamp_millis(),
        };

        let json =
            serde_json::to_string(&entry).map_err(|e| StoreError::Serialization(e.to_string()))?;

        store
            .set_ex(&query_keys::query_cache_key(path), &json, ttl_secs.max(1))
            .await
    }

    /// 读取未超过时效窗口的查询结果
    pub async fn get_fresh(
        store: &dyn SessionStore,
        path: &str,
        max_age_secs: u64,
    ) -> Result<Option<CachedQuery>, StoreError> {
        let key = query_keys::query_cache_key(path);
        let Some(json) = store.get(&key).await? else {
            return Ok(None);
        };

        let entry: CachedQuery = match serde_json::from_str(&json) {
            Ok(entry) => entry,
            Err(_) => {
                store.del(&key).await?;
                return Ok(None);
            }
        };

        let age = chrono::Utc::now().timestamp_millis() - entry.updated_at;
        if age > (max_age_secs * 1000) as i64 {
            store.del(&key).await?;
            return Ok(None);
        }

        Ok(Some(entry))
    }

    /// 清理与当前路径无关且超过时效窗口的查询缓存条目
    /// current_path 为空时只按时效清理，返回清掉的条目数
    pub async fn prune_stale(
        store: &dyn SessionStore,
        current_path: &str,
        max_age_secs: u64,
    ) -> Result<usize, StoreError> {
        let now = chrono::Utc::now().timestamp_millis();
        let keys = store.keys_with_prefix(query_keys::QUERY_CACHE_PREFIX).await?;

        let mut pruned = 0;
        for key in keys {
            let Some(json) = store.get(&key).await? else {
                continue;
            };

            let entry: CachedQuery = match serde_json::from_str(&json) {
                Ok(entry) => entry,
                Err(_) => {
                    store.del(&key).await?;
                    pruned += 1;
                    continue;
                }
            };

            if references(&entry.path, current_path) {
                continue;
            }
            if now - entry.updated_at > (max_age_secs * 1000) as i64 {
                store.del(&key).await?;
                pruned += 1;
            }
        }

        Ok(pruned)
    }
}

/// 条目路径是否与当前页面路径相关（按首段匹配）
fn references(entry_path: &str, current_path: &str) -> bool {
    match current_path.trim_start_matches('/').split('/').next() {
        Some(segment) if !segment.is_empty() => entry_path.contains(segment),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cache::store::memory::MemoryStore;

    const STALE_SECS: u64 = 1800;

    async fn seed(store: &MemoryStore, path: &str, age_ms: i64) {
        let entry = CachedQuery {
            path: path.to_string(),
            payload: json!({"total": 10}),
            updated_at: chrono::Utc::now().timestamp_millis() - age_ms,
        };
        store
            .set_ex(
                &query_keys::query_cache_key(path),
                &serde_json::to_string(&entry).unwrap(),
                STALE_SECS,
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_fresh_returns_recent_entry() {
        let store = MemoryStore::new();
        seed(&store, "/api/patient/summary", 1_000).await;

        let entry = QueryCacheOperations::get_fresh(&store, "/api/patient/summary", STALE_SECS)
            .await
            .unwrap();
        assert_eq!(entry.unwrap().payload, json!({"total": 10}));
    }

    #[tokio::test]
    async fn get_fresh_discards_entry_past_window() {
        let store = MemoryStore::new();
        seed(&store, "/api/patient/summary", (STALE_SECS as i64 + 60) * 1000).await;

        let entry = QueryCacheOperations::get_fresh(&store, "/api/patient/summary", STALE_SECS)
            .await
            .unwrap();
        assert!(entry.is_none());
    }

    #[tokio::test]
    async fn prune_removes_stale_unrelated_entries() {
        let store = MemoryStore::new();
        seed(&store, "/api/doctor/summary", (STALE_SECS as i64 + 60) * 1000).await;
        seed(&store, "/api/patient/summary", 1_000).await;

        let pruned =
            QueryCacheOperations::prune_stale(&store, "/patient/dashboard", STALE_SECS)
                .await
                .unwrap();

        assert_eq!(pruned, 1);
        assert!(
            store
                .get(&query_keys::query_cache_key("/api/doctor/summary"))
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .get(&query_keys::query_cache_key("/api/patient/summary"))
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn prune_keeps_stale_entry_for_current_path() {
        let store = MemoryStore::new();
        seed(&store, "/api/patient/summary", (STALE_SECS as i64 + 60) * 1000).await;

        let pruned =
            QueryCacheOperations::prune_stale(&store, "/patient/dashboard", STALE_SECS)
                .await
                .unwrap();

        assert_eq!(pruned, 0);
    }

    #[tokio::test]
    async fn prune_keeps_fresh_unrelated_entries() {
        let store = MemoryStore::new();
        seed(&store, "/api/doctor/summary", 1_000).await;

        let pruned =
            QueryCacheOperations::prune_stale(&store, "/patient/dashboard", STALE_SECS)
                .await
                .unwrap();

        assert_eq!(pruned, 0);
    }

    #[tokio::test]
    async fn prune_without_current_path_is_age_only() {
        let store = MemoryStore::new();
        seed(&store, "/api/doctor/summary", (STALE_SECS as i64 + 60) * 1000).await;
        seed(&store, "/api/patient/summary", 1_000).await;

        let pruned = QueryCacheOperations::prune_stale(&store, "", STALE_SECS)
            .await
            .unwrap();

        assert_eq!(pruned, 1);
    }

    #[tokio::test]
    async fn prune_drops_malformed_entries() {
        let store = MemoryStore::new();
        store
            .set_ex(&query_keys::query_cache_key("/api/doctor/summary"), "{{", 60)
            .await
            .unwrap();

        let pruned = QueryCacheOperations::prune_stale(&store, "", STALE_SECS)
            .await
            .unwrap();

        assert_eq!(pruned, 1);
    }
}
