use serde::{Deserialize, Serialize};

/// 未知角色的默认落地页
pub const DEFAULT_DASHBOARD: &str = "/dashboard";

/// 平台租户角色（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    OrgAdmin,
    Patient,
    Doctor,
    Laboratory,
    Researcher,
    Supplier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::OrgAdmin => "org_admin",
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Laboratory => "laboratory",
            Role::Researcher => "researcher",
            Role::Supplier => "supplier",
        }
    }

    /// 集合之外的角色标识返回 None，调用方自行回退
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "org_admin" => Some(Role::OrgAdmin),
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "laboratory" => Some(Role::Laboratory),
            "researcher" => Some(Role::Researcher),
            "supplier" => Some(Role::Supplier),
            _ => None,
        }
    }

    /// 角色对应的默认仪表盘路径
    pub fn dashboard(&self) -> &'static str {
        match self {
            Role::Admin => "/dashboard",
            Role::OrgAdmin => "/organization/dashboard",
            Role::Patient => "/patient/dashboard",
            Role::Doctor => "/doctor/dashboard",
            Role::Laboratory => "/laboratory/dashboard",
            Role::Researcher => "/researcher/dashboard",
            Role::Supplier => "/supplier/dashboard",
        }
    }

    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::OrgAdmin,
        Role::Patient,
        Role::Doctor,
        Role::Laboratory,
        Role::Researcher,
        Role::Supplier,
    ];
}
