// 导航模块
// 角色到落地页的映射、免认证路径判断和跳转指令

pub mod paths;
pub mod redirect;
pub mod roles;

use std::collections::BTreeMap;

pub use redirect::{Navigator, RedirectMode, RedirectPlan};
pub use roles::{DEFAULT_DASHBOARD, Role};

/// 导航配置
/// 启动时构建一次，之后只读，经 Arc 注入各处
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    dashboards: BTreeMap<Role, String>,
    public_paths: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationConfig {
    pub fn new() -> Self {
        let dashboards = Role::ALL
            .iter()
            .map(|role| (*role, role.dashboard().to_string()))
            .collect();

        Self {
            dashboards,
            public_paths: paths::default_public_paths(),
        }
    }

    /// 角色对应的默认落地页
    /// 集合之外的角色回退到默认仪表盘，不报错
    pub fn dashboard_for(&self, role: &str) -> &str {
        Role::parse(role)
            .and_then(|role| self.dashboards.get(&role))
            .map(String::as_str)
            .unwrap_or(DEFAULT_DASHBOARD)
    }

    /// 路径是否免认证，只做前缀匹配
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|prefix| path.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_for_known_roles() {
        let nav = NavigationConfig::new();
        assert_eq!(nav.dashboard_for("admin"), "/dashboard");
        assert_eq!(nav.dashboard_for("org_admin"), "/organization/dashboard");
        assert_eq!(nav.dashboard_for("patient"), "/patient/dashboard");
        assert_eq!(nav.dashboard_for("laboratory"), "/laboratory/dashboard");
    }

    #[test]
    fn dashboard_for_unknown_role_falls_back() {
        let nav = NavigationConfig::new();
        assert_eq!(nav.dashboard_for("unknown_role"), "/dashboard");
        assert_eq!(nav.dashboard_for(""), "/dashboard");
    }

    #[test]
    fn public_paths_match_by_prefix() {
        let nav = NavigationConfig::new();
        assert!(nav.is_public("/login"));
        assert!(nav.is_public("/patient/produtos/123"));
        assert!(nav.is_public("/pre-cadastro/org-9"));
        assert!(nav.is_public("/api/auth/login"));
    }

    #[test]
    fn protected_paths_are_not_public() {
        let nav = NavigationConfig::new();
        assert!(!nav.is_public("/organization/dashboard"));
        assert!(!nav.is_public("/api/auth/me"));
        assert!(!nav.is_public("/api/patient/summary"));
    }
}
