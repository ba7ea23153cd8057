use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path segment as a record id, naming the record kind on failure.
pub fn valid_uuid(id: &str, record: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim())
        .map_err(|_| AppError::InvalidInput(format!("Invalid {} id: {}", record, id)))
}
