use crate::error::{AppError, AppResult};

/// Parses a numeric path segment. Anything but a positive integer is a 400
/// with `message`, e.g. "Invalid user ID".
pub fn parse_id(raw: &str, message: &str) -> AppResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(message)),
    }
}
