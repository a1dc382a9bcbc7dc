use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::utils::{error_codes, error_to_api_response};

/// 预注册页面的构建产物
const PRE_REGISTRATION_PAGE: &str = "static/pre-cadastro.html";

/// 预注册页面
#[axum::debug_handler]
pub async fn page() -> Response {
    serve_page().await
}

/// 带机构标识的预注册入口，机构参数由页面内脚本读取
#[axum::debug_handler]
pub async fn org_page(Path(_org): Path<String>) -> Response {
    serve_page().await
}

async fn serve_page() -> Response {
    match tokio::fs::read_to_string(PRE_REGISTRATION_PAGE).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to read pre-registration page: {}", e);
            (
                StatusCode::NOT_FOUND,
                error_to_api_response::<()>(error_codes::NOT_FOUND, "页面不存在".to_string()),
            )
                .into_response()
        }
    }
}
