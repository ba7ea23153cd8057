pub mod auth;
pub mod cors;
pub mod db;
pub mod limiter;
pub mod utils;
