//! User repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storefront_shared::{Role, User};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, full_name, email, password_hash, role, created_at, updated_at";

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Stored role; the column is constrained, anything unexpected is
    /// treated as the least privileged role.
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or_default()
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let role = record.role();
        Self {
            id: record.id,
            full_name: record.full_name,
            email: record.email,
            password_hash: record.password_hash,
            role,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Input for updating a user; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with the default role
    pub async fn create(pool: &PgPool, input: CreateUser<'_>) -> sqlx::Result<UserRecord> {
        sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (full_name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(input.full_name)
        .bind(input.email)
        .bind(input.password_hash)
        .fetch_one(pool)
        .await
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all users, oldest first
    pub async fn list_all(pool: &PgPool) -> sqlx::Result<Vec<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(pool)
        .await
    }

    /// Update the provided fields of a user
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateUser,
    ) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            UPDATE users SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(updates.full_name)
        .bind(updates.email)
        .bind(updates.role.map(|role| role.as_str()))
        .fetch_optional(pool)
        .await
    }

    /// Delete a user; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(role: &str) -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: Uuid::new_v4(),
            full_name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            password_hash: "hash".to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_record_converts_to_user() {
        let user: User = record("admin").into();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.full_name, "Jane");
    }

    #[test]
    fn test_unexpected_role_falls_back_to_user() {
        assert_eq!(record("root").role(), Role::User);
    }
}
