//! In-process `UserStore` doubles for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::{repo::UserStore, repo_types::User};

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            rows: Mutex::new(users),
        }
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.rows
            .lock()
            .expect("store lock")
            .iter()
            .filter(|u| u.email == email)
            .count()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_newest_first(&self) -> anyhow::Result<Vec<User>> {
        let mut rows = self.rows.lock().expect("store lock").clone();
        // stable: equal timestamps keep insertion order
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn upsert_by_email(&self, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let mut rows = self.rows.lock().expect("store lock");
        if let Some(existing) = rows.iter().find(|u| u.email == email) {
            return Ok(existing.clone());
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}

/// Fails every call the way an unreachable database would.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn list_newest_first(&self) -> anyhow::Result<Vec<User>> {
        anyhow::bail!("connection refused")
    }

    async fn upsert_by_email(&self, _email: &str, _password_hash: &str) -> anyhow::Result<User> {
        anyhow::bail!("connection refused")
    }
}
