use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::utils::verify_password;

/// 平台用户，role 为租户角色标识
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct UserEntity {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub organization_id: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
}

impl UserEntity {
    pub async fn find_by_id(pool: &PgPool, user_id: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT user_id, name, email, role, organization_id, password_hash
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT user_id, name, email, role, organization_id, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn verify_login(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        match &self.password_hash {
            Some(hash) => verify_password(password, hash),
            None => Ok(false),
        }
    }

    /// 进认证状态缓存的档案数据，不含敏感字段
    pub fn profile(&self) -> serde_json::Value {
        serde_json::json!({
            "user_id": self.user_id,
            "name": self.name,
            "email": self.email,
            "role": self.role,
            "organization_id": self.organization_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hash_password;

    fn user(password_hash: Option<String>) -> UserEntity {
        UserEntity {
            user_id: "u-1".into(),
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            role: "doctor".into(),
            organization_id: Some("org-1".into()),
            password_hash,
        }
    }

    #[tokio::test]
    async fn verify_login_without_hash_fails_closed() {
        assert!(!user(None).verify_login("qualquer").await.unwrap());
    }

    #[tokio::test]
    async fn verify_login_checks_password() {
        let hashed = hash_password("senha123").unwrap();
        let user = user(Some(hashed));
        assert!(user.verify_login("senha123").await.unwrap());
        assert!(!user.verify_login("outra").await.unwrap());
    }

    #[test]
    fn profile_omits_password_hash() {
        let user = user(Some("hash".into()));
        let profile = user.profile();
        assert_eq!(profile["role"], "doctor");
        assert!(profile.get("password_hash").is_none());
    }
}
