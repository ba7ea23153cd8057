use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::store::MemoryStore,
    entities::project::{NewProject, Project, ProjectCategory},
    errors::AppError,
    repositories::memory_repo::MemoryProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_projects_by_category(&self, category: ProjectCategory) -> Result<Vec<Project>, AppError>;
    async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;
}

impl MemoryProjectRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryProjectRepo { store }
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepo {
    async fn get_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.store.projects.all())
    }

    async fn get_projects_by_category(&self, category: ProjectCategory) -> Result<Vec<Project>, AppError> {
        Ok(self.store.projects.filter(|project| project.category == category))
    }

    async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.store.projects.filter(|project| project.featured))
    }

    async fn get_project(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        Ok(self.store.projects.get(id))
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let created = self
            .store
            .projects
            .insert_with(|id| project.into_project(id, Utc::now()));

        tracing::debug!(project_id = %created.id, category = %created.category, "Stored new project");
        Ok(created)
    }
}
