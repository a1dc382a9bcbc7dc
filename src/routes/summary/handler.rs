use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    cache::operations::query::QueryCacheOperations,
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{SUMMARY_MODULES, SummaryResponse};

/// 单段模块的摘要接口
#[axum::debug_handler]
pub async fn module_summary(
    State(state): State<AppState>,
    Path(module): Path<String>,
) -> impl IntoResponse {
    serve_summary(state, module).await
}

/// 会员卡摘要走两段路径，单独注册
#[axum::debug_handler]
pub async fn social_carteirinha_summary(State(state): State<AppState>) -> impl IntoResponse {
    serve_summary(state, "social/carteirinha".to_string()).await
}

/// 摘要数据：查询缓存命中直接返回，未命中拉上游并回填
async fn serve_summary(state: AppState, module: String) -> impl IntoResponse {
    if !SUMMARY_MODULES.contains(&module.as_str()) {
        return (
            StatusCode::OK,
            error_to_api_response(error_codes::NOT_FOUND, "模块不存在".to_string()),
        );
    }

    let endpoint = format!("/api/{}/summary", module);
    let stale_secs = state.config.query_stale_secs;

    // 缓存读取失败按未命中处理
    let cached =
        match QueryCacheOperations::get_fresh(state.store.as_ref(), &endpoint, stale_secs).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("query cache fetch for {} failed: {}", endpoint, e);
                None
            }
        };

    if let Some(entry) = cached {
        return (
            StatusCode::OK,
            success_to_api_response(SummaryResponse {
                module,
                payload: entry.payload,
                cached: true,
            }),
        );
    }

    let payload = match state.upstream.fetch_summary(&endpoint).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("upstream summary fetch for {} failed: {}", endpoint, e);
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::UPSTREAM_ERROR, "上游摘要获取失败".to_string()),
            );
        }
    };

    if let Err(e) =
        QueryCacheOperations::put(state.store.as_ref(), &endpoint, payload.clone(), stale_secs)
            .await
    {
        tracing::warn!("query cache write for {} failed: {}", endpoint, e);
    }

    (
        StatusCode::OK,
        success_to_api_response(SummaryResponse {
            module,
            payload,
            cached: false,
        }),
    )
}
