use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const MIN_USERNAME_LENGTH: u64 = 3;
const MAX_USERNAME_LENGTH: u64 = 50;
const MIN_PASSWORD_LENGTH: u64 = 8;

/// A site account. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug)]
pub struct UserInsert {
    pub username: String,
    pub password_hash: String,
}

impl UserInsert {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct NewUser {
    #[validate(length(
        min = MIN_USERNAME_LENGTH,
        max = MAX_USERNAME_LENGTH,
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Must be at least 8 characters"))]
    pub password: String,
}

impl NewUser {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            username: self.username.clone(),
            password_hash,
        }
    }
}
