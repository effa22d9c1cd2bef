use anyhow::Context;
use askama::Template;
use time::{macros::format_description, OffsetDateTime};

use crate::users::repo_types::User;

pub const PAGE_TITLE: &str = "Building User List with Docker & Postgres";
pub const SEED_COMMAND: &str = "cargo run --bin seed";

/// One card in the user grid. Fields are display-ready strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub initial: String,
    pub email: String,
    pub short_id: String,
    pub created_on: String,
}

#[derive(Debug, Template)]
#[template(path = "users.html")]
pub struct UserListPage {
    pub title: &'static str,
    pub seed_command: &'static str,
    pub cards: Vec<UserCard>,
}

impl UserCard {
    pub fn from_user(user: &User) -> anyhow::Result<Self> {
        Ok(Self {
            initial: display_initial(&user.email),
            email: user.email.clone(),
            short_id: short_id(&user.id.to_string()),
            created_on: format_created(user.created_at)?,
        })
    }
}

impl UserListPage {
    /// Keeps the order of `users`; sorting is the store's job.
    pub fn from_users(users: &[User]) -> anyhow::Result<Self> {
        let cards = users
            .iter()
            .map(UserCard::from_user)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            title: PAGE_TITLE,
            seed_command: SEED_COMMAND,
            cards,
        })
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        self.render().context("render user list")
    }
}

/// Uppercased first character of the email, `?` when it is empty.
pub fn display_initial(email: &str) -> String {
    match email.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "?".into(),
    }
}

pub fn short_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

/// en-US short date, e.g. `3/5/2024`.
pub fn format_created(at: OffsetDateTime) -> anyhow::Result<String> {
    let fmt = format_description!("[month padding:none]/[day padding:none]/[year]");
    at.format(fmt).context("format created_at")
}
