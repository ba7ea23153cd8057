use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const CONTACT_RATE_LIMITED_MESSAGE: &str =
    "Too many messages from this email address. Please try again later.";
