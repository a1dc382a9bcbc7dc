use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    cache::operations::query::QueryCacheOperations,
    utils::{Claims, error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{DashboardResponse, TransitionRequest, TransitionResponse};

/// 当前角色的默认落地页
#[axum::debug_handler]
pub async fn dashboard(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let dashboard = state.navigation.dashboard_for(&claims.role).to_string();

    (
        StatusCode::OK,
        success_to_api_response(DashboardResponse {
            role: claims.role,
            dashboard,
        }),
    )
}

/// 页面切换通知：后台清理与新页面无关的过期查询缓存
#[axum::debug_handler]
pub async fn transition(
    State(state): State<AppState>,
    Json(req): Json<TransitionRequest>,
) -> impl IntoResponse {
    if !req.path.starts_with('/') {
        return (
            StatusCode::OK,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "路径必须以/开头".to_string(),
            ),
        );
    }

    let store = state.store.clone();
    let stale_secs = state.config.query_stale_secs;
    tokio::spawn(async move {
        match QueryCacheOperations::prune_stale(store.as_ref(), &req.path, stale_secs).await {
            Ok(0) => {}
            Ok(n) => tracing::debug!("pruned {} stale query cache entries", n),
            Err(e) => tracing::warn!("query cache prune failed: {}", e),
        }
    });

    (StatusCode::OK, success_to_api_response(TransitionResponse {}))
}
