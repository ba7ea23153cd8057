use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::store::MemoryStore,
    entities::contact::{ContactSubmission, NewContactSubmission},
    errors::AppError,
    repositories::memory_repo::MemoryContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_submission(&self, submission: NewContactSubmission) -> Result<ContactSubmission, AppError>;
    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>, AppError>;
}

impl MemoryContactRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryContactRepo { store }
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepo {
    async fn create_contact_submission(&self, submission: NewContactSubmission) -> Result<ContactSubmission, AppError> {
        let created = self
            .store
            .contact_submissions
            .insert_with(|id| submission.into_submission(id, Utc::now()));

        tracing::debug!(submission_id = %created.id, "Stored contact submission");
        Ok(created)
    }

    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>, AppError> {
        Ok(self.store.contact_submissions.all())
    }
}
