use crate::db::store::MemoryStore;

#[derive(Clone)]
pub struct MemoryUserRepo {
    pub store: MemoryStore,
}

#[derive(Clone)]
pub struct MemoryProjectRepo {
    pub store: MemoryStore,
}

#[derive(Clone)]
pub struct MemoryExperienceRepo {
    pub store: MemoryStore,
}

#[derive(Clone)]
pub struct MemoryContactRepo {
    pub store: MemoryStore,
}
