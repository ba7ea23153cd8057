use crate::{
    db::store::MemoryStore,
    repositories::memory_repo::{MemoryContactRepo, MemoryExperienceRepo, MemoryProjectRepo, MemoryUserRepo},
};

/// One repository per collection, all backed by the same store.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: MemoryUserRepo,
    pub project_repo: MemoryProjectRepo,
    pub experience_repo: MemoryExperienceRepo,
    pub contact_repo: MemoryContactRepo,
}

impl SharedRepositories {
    pub fn new(store: &MemoryStore) -> Self {
        SharedRepositories {
            user_repo: MemoryUserRepo::new(store.clone()),
            project_repo: MemoryProjectRepo::new(store.clone()),
            experience_repo: MemoryExperienceRepo::new(store.clone()),
            contact_repo: MemoryContactRepo::new(store.clone()),
        }
    }
}
