pub mod account;
pub mod contact;
pub mod experience;
pub mod project;
