use serde::Serialize;

/// 提供摘要数据的模块（封闭集合）
pub const SUMMARY_MODULES: &[&str] = &[
    "organization",
    "patient",
    "doctor",
    "laboratory",
    "researcher",
    "supplier",
    "financial",
    "social/carteirinha",
];

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub module: String,
    pub payload: serde_json::Value,
    /// 本次响应是否来自查询缓存
    pub cached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_set_covers_all_tenants() {
        for module in ["organization", "patient", "doctor", "laboratory", "researcher", "supplier"]
        {
            assert!(SUMMARY_MODULES.contains(&module));
        }
        assert!(!SUMMARY_MODULES.contains(&"carteirinha"));
    }
}
