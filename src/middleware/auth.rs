use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{
    AppState,
    navigation::RedirectPlan,
    utils::{ApiResponse, error_codes, verify_token},
};

/// 认证中间件
/// 免认证路径直接放行，其余路径校验 Bearer token 并注入 Claims；
/// 未认证的请求带上跳回登录页的指令
pub async fn auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.navigation.is_public(req.uri().path()) {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();
    let bearer =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &()).await;
    let mut req = Request::from_parts(parts, body);

    let claims = match bearer {
        Ok(TypedHeader(Authorization(bearer))) => {
            verify_token(bearer.token(), &state.config).ok()
        }
        Err(_) => None,
    };

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        None => unauthorized_response(),
    }
}

fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse {
            code: error_codes::AUTH_FAILED,
            msg: "未授权访问".to_string(),
            resp_data: Some(RedirectPlan::new("/login", true)),
        }),
    )
        .into_response()
}
