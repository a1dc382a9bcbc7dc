/// 缓存操作
/// 提供缓存操作的功能实现

// 认证状态缓存操作
pub mod session;

// 查询缓存操作
pub mod query;

// 重新导出常用操作
pub use query::QueryCacheOperations;
pub use session::AuthCacheOperations;
