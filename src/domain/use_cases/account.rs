use uuid::Uuid;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::entities::user::{NewUser, User};
use crate::errors::AppError;
use crate::interfaces::repositories::user::UserRepository;

/// Account operations. No UI flow uses accounts yet; they exist so an
/// authentication flow can be added on top.
pub struct AccountHandler<R>
where
    R: UserRepository,
{
    pub user_repo: R,
}

impl<R> AccountHandler<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        AccountHandler { user_repo }
    }

    pub async fn get_user(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        self.user_repo.get_user(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.user_repo.get_user_by_username(username).await
    }

    /// Validates the input, hashes the password and stores the account.
    /// A taken username is reported as a conflict.
    pub async fn create_user(&self, request: NewUser) -> Result<User, AppError> {
        request.validate()?;

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);

        let user = self.user_repo.create_user(user_insert).await?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }
}
