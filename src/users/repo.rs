use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::User;

/// Storage port for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, newest `created_at` first.
    async fn list_newest_first(&self) -> anyhow::Result<Vec<User>>;

    /// Inserts the user unless the email is taken. An existing row is returned untouched.
    async fn upsert_by_email(&self, email: &str, password_hash: &str) -> anyhow::Result<User>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_newest_first(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
              FROM users
             ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        Ok(rows)
    }

    async fn upsert_by_email(&self, email: &str, password_hash: &str) -> anyhow::Result<User> {
        // The self-assignment turns the conflict branch into a no-op that still returns the row.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .with_context(|| format!("upsert user {email}"))?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    const CREATE_USERS: &str = include_str!("../../migrations/20240101000000_create_users.sql");

    #[test]
    fn migration_needs_no_extension_privileges() {
        assert!(!CREATE_USERS.to_uppercase().contains("CREATE EXTENSION"));
        assert!(CREATE_USERS.contains("DEFAULT gen_random_uuid()"));
        assert!(CREATE_USERS.contains("email         TEXT        NOT NULL UNIQUE"));
    }
}
