use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Connection, Profile, User, UserStore};

/// Map-backed store, the shape the service had before it grew a database.
/// Also what the test suites run against.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            profile: None,
            network: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.users
            .write()
            .await
            .insert(email.to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn set_profile(&self, email: &str, profile: &Profile) -> anyhow::Result<bool> {
        match self.users.write().await.get_mut(email) {
            Some(user) => {
                user.profile = Some(profile.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn add_connection(&self, email: &str, connection: &Connection) -> anyhow::Result<bool> {
        match self.users.write().await.get_mut(email) {
            Some(user) => {
                user.network.push(connection.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
