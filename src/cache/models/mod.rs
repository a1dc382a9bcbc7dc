/// 缓存数据模型
/// 定义缓存数据的结构体
// 认证状态缓存模型
pub mod session;

// 查询缓存模型
pub mod query;

// 重新导出常用类型
pub use query::CachedQuery;
pub use session::CachedAuthEntry;
