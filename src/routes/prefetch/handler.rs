use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, utils::success_to_api_response};

use super::model::{HintRequest, HintResponse};

/// 悬停提示：尽力预取目标页面的摘要数据
/// 推导不出摘要路径时同样返回成功，客户端不关心结果
#[axum::debug_handler]
pub async fn hint(
    State(state): State<AppState>,
    Json(req): Json<HintRequest>,
) -> impl IntoResponse {
    state.upstream.spawn_hint(
        state.store.clone(),
        &req.current,
        &req.target,
        state.config.query_stale_secs,
    );

    (StatusCode::OK, success_to_api_response(HintResponse {}))
}
