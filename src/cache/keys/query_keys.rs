/// 查询缓存键前缀
pub const QUERY_CACHE_PREFIX: &str = "query_cache:";

/// 生成查询缓存键，路径即键
pub fn query_cache_key(path: &str) -> String {
    format!("{}{}", QUERY_CACHE_PREFIX, path)
}
