use validator::Validate;

use crate::{
    entities::experience::{Experience, ExperienceType, NewExperience},
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler { experience_repo }
    }

    /// All entries in insertion order; see `sort_by_start_year_desc` for the
    /// display order.
    pub async fn get_experiences(&self) -> Result<Vec<Experience>, AppError> {
        self.experience_repo.get_experiences().await
    }

    pub async fn get_experiences_by_type(&self, kind: ExperienceType) -> Result<Vec<Experience>, AppError> {
        self.experience_repo.get_experiences_by_type(kind).await
    }

    pub async fn create_experience(&self, request: NewExperience) -> Result<Experience, AppError> {
        request.validate()?;

        self.experience_repo.create_experience(request).await
    }
}
