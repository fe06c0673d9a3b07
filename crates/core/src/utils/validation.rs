use crate::constants::MAX_TITLE_LENGTH;
use crate::errors::ValidationError;

/// Trim a user-entered title and check it is non-empty and within the length limit.
pub fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong {
            max: MAX_TITLE_LENGTH,
            actual: length,
        });
    }

    Ok(title.to_string())
}
