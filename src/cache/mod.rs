// 缓存模块
// 包含缓存数据结构和操作逻辑

pub mod keys;
pub mod models;
pub mod operations;
pub mod store;

// 重新导出常用类型和函数，方便其他模块使用
pub use models::query::CachedQuery;
pub use models::session::CachedAuthEntry;
pub use operations::query::QueryCacheOperations;
pub use operations::session::AuthCacheOperations;
pub use store::{RedisStore, SessionStore, StoreError};
