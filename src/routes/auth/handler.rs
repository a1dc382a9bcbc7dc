use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    cache::operations::session::AuthCacheOperations,
    database::UserEntity,
    navigation::RedirectPlan,
    utils::{Claims, error_codes, error_to_api_response, generate_token, success_to_api_response},
};

use super::model::{LoginRequest, LoginResponse, LogoutResponse, MeResponse};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = match UserEntity::find_by_email(&state.pool, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::NOT_FOUND, "用户不存在".to_string()),
            );
        }
        Err(_) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "数据库错误".to_string()),
            );
        }
    };

    // 验证密码
    match user.verify_login(&req.password).await {
        Ok(true) => (),
        Ok(false) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::AUTH_FAILED, "密码无效".to_string()),
            );
        }
        Err(_) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "密码校验失败".to_string()),
            );
        }
    }

    // 每次登录一个新会话
    let session_id = uuid::Uuid::new_v4().to_string();

    let (token, expires_at) =
        match generate_token(&user.user_id, &user.role, &session_id, &state.config) {
            Ok(pair) => pair,
            Err(_) => {
                return (
                    StatusCode::OK,
                    error_to_api_response(error_codes::INTERNAL_ERROR, "生成令牌失败".to_string()),
                );
            }
        };

    // 预热认证状态缓存；失败不影响登录
    if let Err(e) = AuthCacheOperations::store(
        state.store.as_ref(),
        &session_id,
        user.profile(),
        state.config.auth_cache_ttl_ms,
    )
    .await
    {
        tracing::warn!("auth cache warm for {} failed: {}", user.user_id, e);
    }

    let dashboard = state.navigation.dashboard_for(&user.role).to_string();

    (
        StatusCode::OK,
        success_to_api_response(LoginResponse {
            user_id: user.user_id,
            role: user.role,
            token,
            expires_at,
            dashboard,
        }),
    )
}

/// 认证检查：优先读认证状态缓存，未命中再查库并回填
#[axum::debug_handler]
pub async fn me(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let ttl_ms = state.config.auth_cache_ttl_ms;

    // 缓存读取失败按未命中处理
    let cached = match AuthCacheOperations::fetch(state.store.as_ref(), &claims.sid, ttl_ms).await {
        Ok(entry) => entry,
        Err(e) => {
            tracing::warn!("auth cache fetch for {} failed: {}", claims.sid, e);
            None
        }
    };

    if let Some(profile) = cached {
        return (
            StatusCode::OK,
            success_to_api_response(MeResponse {
                profile,
                cached: true,
            }),
        );
    }

    let user = match UserEntity::find_by_id(&state.pool, &claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::NOT_FOUND, "用户不存在".to_string()),
            );
        }
        Err(_) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "数据库错误".to_string()),
            );
        }
    };

    let profile = user.profile();
    if let Err(e) =
        AuthCacheOperations::store(state.store.as_ref(), &claims.sid, profile.clone(), ttl_ms).await
    {
        tracing::warn!("auth cache refill for {} failed: {}", claims.sid, e);
    }

    (
        StatusCode::OK,
        success_to_api_response(MeResponse {
            profile,
            cached: false,
        }),
    )
}

/// 退出登录：清缓存、后台通知上游、要求客户端跳回登录页
#[axum::debug_handler]
pub async fn logout(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    if let Err(e) = AuthCacheOperations::clear(state.store.as_ref(), &claims.sid).await {
        tracing::warn!("auth cache clear for {} failed: {}", claims.sid, e);
    }

    state.upstream.spawn_logout_notice(&claims.sub);

    (
        StatusCode::OK,
        success_to_api_response(LogoutResponse {
            redirect: RedirectPlan::new("/login", true),
        }),
    )
}
