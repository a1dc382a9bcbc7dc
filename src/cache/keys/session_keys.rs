/// 认证状态缓存键前缀
pub const AUTH_CACHE_PREFIX: &str = "auth_cache:";

/// 生成认证状态缓存键
pub fn auth_cache_key(session_id: &str) -> String {
    format!("{}{}", AUTH_CACHE_PREFIX, session_id)
}
