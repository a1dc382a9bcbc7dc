/// 缓存键模块
/// 提供各种缓存键生成函数

// 认证状态缓存键模块
pub mod session_keys;

// 查询缓存键模块
pub mod query_keys;

// 重新导出常用的键生成函数
pub use query_keys::{QUERY_CACHE_PREFIX, query_cache_key};
pub use session_keys::{AUTH_CACHE_PREFIX, auth_cache_key};
