use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{NewProject, Project, ProjectCategory},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// All projects, in insertion order
    pub async fn get_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.get_projects().await
    }

    pub async fn get_projects_by_category(&self, category: ProjectCategory) -> Result<Vec<Project>, AppError> {
        self.project_repo.get_projects_by_category(category).await
    }

    pub async fn get_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.get_featured_projects().await
    }

    pub async fn get_project(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        self.project_repo.get_project(id).await
    }

    /// Validates and stores a new project; the store assigns id and timestamp
    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        self.project_repo.create_project(request).await
    }
}
