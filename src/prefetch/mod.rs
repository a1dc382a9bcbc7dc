// 预取模块
// 悬停提示触发的摘要预取和对上游平台API的访问

use std::sync::Arc;

use crate::cache::operations::query::QueryCacheOperations;
use crate::cache::store::SessionStore;
use crate::middleware::rewrite_path;

/// 根据悬停目标推导摘要接口路径
/// 目标与当前路径相同、或不是站内路径时不预取；旧前缀按现行路径归一
pub fn summary_endpoint_for(current: &str, target: &str) -> Option<String> {
    if target == current || !target.starts_with('/') {
        return None;
    }

    let segment = target
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|s| !s.is_empty())?;

    let endpoint = format!("/api/{}/summary", segment);
    Some(rewrite_path(&endpoint).unwrap_or(endpoint))
}

/// 上游平台API客户端
/// 预取和退出通知都是尽力而为，失败只记录日志
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 拉取摘要数据
    pub async fn fetch_summary(&self, endpoint: &str) -> Result<serde_json::Value, reqwest::Error> {
        self.http
            .get(format!("{}{}", self.base_url, endpoint))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// 悬停提示触发的预取，后台执行
    /// 推导不出摘要路径时直接忽略
    pub fn spawn_hint(
        &self,
        store: Arc<dyn SessionStore>,
        current: &str,
        target: &str,
        ttl_secs: u64,
    ) {
        let Some(endpoint) = summary_endpoint_for(current, target) else {
            return;
        };

        let client = self.clone();
        tokio::spawn(async move {
            match client.fetch_summary(&endpoint).await {
                Ok(payload) => {
                    if let Err(e) =
                        QueryCacheOperations::put(store.as_ref(), &endpoint, payload, ttl_secs).await
                    {
                        tracing::debug!("prefetch cache write for {} failed: {}", endpoint, e);
                    }
                }
                Err(e) => tracing::debug!("prefetch of {} failed: {}", endpoint, e),
            }
        });
    }

    /// 退出登录时对上游的尽力通知，后台执行
    pub fn spawn_logout_notice(&self, user_id: &str) {
        let client = self.clone();
        let user_id = user_id.to_string();
        tokio::spawn(async move {
            let url = format!("{}/api/auth/logout", client.base_url);
            if let Err(e) = client.http.post(&url).json(&serde_json::json!({"user_id": user_id})).send().await {
                tracing::debug!("logout notice for {} failed: {}", user_id, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_summary_endpoint_from_first_segment() {
        assert_eq!(
            summary_endpoint_for("/dashboard", "/organization/dashboard").as_deref(),
            Some("/api/organization/summary")
        );
        assert_eq!(
            summary_endpoint_for("/dashboard", "/patient/produtos/123").as_deref(),
            Some("/api/patient/summary")
        );
    }

    #[test]
    fn same_path_is_not_prefetched() {
        assert!(summary_endpoint_for("/dashboard", "/dashboard").is_none());
    }

    #[test]
    fn external_and_empty_targets_are_ignored() {
        assert!(summary_endpoint_for("/dashboard", "https://example.com/x").is_none());
        assert!(summary_endpoint_for("/dashboard", "").is_none());
        assert!(summary_endpoint_for("/dashboard", "/").is_none());
    }

    #[test]
    fn legacy_segments_are_normalized() {
        assert_eq!(
            summary_endpoint_for("/dashboard", "/carteirinha/2a-via").as_deref(),
            Some("/api/social/carteirinha/summary")
        );
        assert_eq!(
            summary_endpoint_for("/dashboard", "/financeiro/extrato").as_deref(),
            Some("/api/financial/summary")
        );
    }
}
