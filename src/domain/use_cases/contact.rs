use crate::{
    entities::contact::{ContactSubmission, NewContactSubmission},
    errors::AppError,
    repositories::contact::ContactRepository,
};
use validator::Validate;

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Stores a visitor message. Invalid input is rejected before it reaches
    /// the repository.
    pub async fn create_contact_submission(
        &self,
        request: NewContactSubmission,
    ) -> Result<ContactSubmission, AppError> {
        request.validate()?;

        let submission = self.contact_repo.create_contact_submission(request).await?;

        tracing::info!(submission_id = %submission.id, "Contact submission received");
        Ok(submission)
    }

    /// Lists all contact submissions
    pub async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>, AppError> {
        self.contact_repo.get_contact_submissions().await
    }
}
