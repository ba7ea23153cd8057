use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::user::{User, UserInsert},
    errors::AppError,
    repositories::memory_repo::MemoryUserRepo,
    db::store::MemoryStore,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: &Uuid) -> Result<Option<User>, AppError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn create_user(&self, user: UserInsert) -> Result<User, AppError>;
}

impl MemoryUserRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryUserRepo { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn get_user(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        Ok(self.store.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.store.users.find(|user| user.username == username))
    }

    async fn create_user(&self, user: UserInsert) -> Result<User, AppError> {
        let username = user.username.clone();

        let created = self
            .store
            .users
            .insert_unless(
                |existing| existing.username == username,
                |id| user.into_user(id),
            )
            .ok_or_else(|| {
                AppError::Conflict("User with this username already exists".to_string())
            })?;

        tracing::debug!(user_id = %created.id, "Stored new user");
        Ok(created)
    }
}
