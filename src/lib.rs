mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod telemetry;
pub mod graceful_shutdown;
pub mod background_task;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, cors, db, limiter, utils};

use db::store::MemoryStore;
use handlers::system::HealthCache;
use limiter::rate_limiter::ContactRateLimiter;
use repositories::memory_repo::{MemoryContactRepo, MemoryExperienceRepo, MemoryProjectRepo, MemoryUserRepo};
use shared_repos::SharedRepositories;
use use_cases::{
    account::AccountHandler, contact::ContactHandler, experience::ExperienceHandler,
    project::ProjectHandler,
};

pub struct AppState {
    pub store: MemoryStore,
    pub account_handler: AppAccountHandler,
    pub project_handler: AppProjectHandler,
    pub experience_handler: AppExperienceHandler,
    pub contact_handler: AppContactHandler,
    pub contact_limiter: Option<ContactRateLimiter>,
    pub health_cache: HealthCache,
}

pub type AppAccountHandler = AccountHandler<MemoryUserRepo>;
pub type AppProjectHandler = ProjectHandler<MemoryProjectRepo>;
pub type AppExperienceHandler = ExperienceHandler<MemoryExperienceRepo>;
pub type AppContactHandler = ContactHandler<MemoryContactRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, store: MemoryStore) -> Self {
        let repos = SharedRepositories::new(&store);

        let contact_limiter = match config.contact_limit_per_hour {
            0 => None,
            limit => Some(ContactRateLimiter::per_hour(limit)),
        };

        AppState {
            account_handler: AccountHandler::new(repos.user_repo),
            project_handler: ProjectHandler::new(repos.project_repo),
            experience_handler: ExperienceHandler::new(repos.experience_repo),
            contact_handler: ContactHandler::new(repos.contact_repo),
            contact_limiter,
            health_cache: HealthCache::default(),
            store,
        }
    }

    /// Runs the demo seed against this state's store.
    pub async fn seed_demo_data(&self) -> Result<db::seed::SeedSummary, errors::AppError> {
        db::seed::seed_demo_data(&self.project_handler, &self.experience_handler).await
    }
}
