use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,                   // assigned by the database
    pub email: String,              // unique, upsert key
    pub password_hash: String,      // Argon2 PHC string, never rendered
    pub created_at: OffsetDateTime, // assigned on insert
}
