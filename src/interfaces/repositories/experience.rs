use async_trait::async_trait;

use crate::{
    db::store::MemoryStore,
    entities::experience::{Experience, ExperienceType, NewExperience},
    errors::AppError,
    repositories::memory_repo::MemoryExperienceRepo,
};

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn get_experiences(&self) -> Result<Vec<Experience>, AppError>;
    async fn get_experiences_by_type(&self, kind: ExperienceType) -> Result<Vec<Experience>, AppError>;
    async fn create_experience(&self, experience: NewExperience) -> Result<Experience, AppError>;
}

impl MemoryExperienceRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryExperienceRepo { store }
    }
}

#[async_trait]
impl ExperienceRepository for MemoryExperienceRepo {
    async fn get_experiences(&self) -> Result<Vec<Experience>, AppError> {
        Ok(self.store.experiences.all())
    }

    async fn get_experiences_by_type(&self, kind: ExperienceType) -> Result<Vec<Experience>, AppError> {
        Ok(self.store.experiences.filter(|experience| experience.kind == kind))
    }

    async fn create_experience(&self, experience: NewExperience) -> Result<Experience, AppError> {
        let created = self
            .store
            .experiences
            .insert_with(|id| experience.into_experience(id));

        tracing::debug!(experience_id = %created.id, kind = %created.kind, "Stored new experience");
        Ok(created)
    }
}
