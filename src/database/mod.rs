// 数据库模块
// 包含数据库实体定义

pub mod models; // 数据库实体定义

// 重新导出常用类型和函数，方便其他模块使用
pub use models::user::UserEntity;
