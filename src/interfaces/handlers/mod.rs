pub mod contact;
pub mod experiences;
pub mod home;
pub mod projects;
pub mod system;
