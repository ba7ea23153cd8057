pub mod contact;
pub mod experience;
pub mod memory_repo;
pub mod project;
pub mod user;
