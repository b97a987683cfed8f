use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

/// A user's profile. Replaced wholesale on every update, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub company: String,
    pub skills: Vec<String>,
    pub vision: Option<String>,
}

/// One network edge. Clients pick industry and strength from the reference
/// lists, but nothing here checks that they did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub industry: String,
    pub strength: String,
}

/// One record per registered user, keyed by email. Records are never deleted.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub profile: Option<Profile>,
    pub network: Vec<Connection>,
    pub created_at: OffsetDateTime,
}

/// Storage seam for user records. The service started life on an in-process
/// map and later grew a Postgres table; both live behind this trait.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a fresh record with no profile and an empty network.
    async fn create(&self, email: &str, password_hash: &str) -> anyhow::Result<User>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Replace the stored profile. Returns false when the email is unknown.
    async fn set_profile(&self, email: &str, profile: &Profile) -> anyhow::Result<bool>;

    /// Append one connection to the network list. Returns false when the
    /// email is unknown.
    async fn add_connection(&self, email: &str, connection: &Connection) -> anyhow::Result<bool>;
}
