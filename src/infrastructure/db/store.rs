use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::memory::{Collection, Record},
    entities::{contact::ContactSubmission, experience::Experience, project::Project, user::User},
};

impl Record for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Project {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Experience {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for ContactSubmission {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// The process-wide data store. Built once in `main` and handed to every
/// repository; clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub users: Collection<User>,
    pub projects: Collection<Project>,
    pub experiences: Collection<Experience>,
    pub contact_submissions: Collection<ContactSubmission>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreCounts {
    pub users: usize,
    pub projects: usize,
    pub experiences: usize,
    pub contact_submissions: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            projects: self.projects.len(),
            experiences: self.experiences.len(),
            contact_submissions: self.contact_submissions.len(),
        }
    }
}
