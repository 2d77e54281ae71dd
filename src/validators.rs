use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Shortest response worth analyzing, counted after trimming.
pub const MIN_RESPONSE_CHARS: usize = 10;
/// Longest response accepted, counted after trimming.
pub const MAX_RESPONSE_CHARS: usize = 5000;

/// User ids are url- and log-safe: letters, digits, underscore, hyphen.
pub static USER_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Length check on the trimmed response text, so padding whitespace cannot
/// smuggle a too-short answer past validation.
pub fn validate_response_text(text: &str) -> Result<(), ValidationError> {
    let chars = text.trim().chars().count();
    if chars < MIN_RESPONSE_CHARS {
        let mut err = ValidationError::new("response_too_short");
        err.message = Some("Response text must be at least 10 characters long".into());
        return Err(err);
    }
    if chars > MAX_RESPONSE_CHARS {
        let mut err = ValidationError::new("response_too_long");
        err.message = Some("Response text must not exceed 5000 characters".into());
        return Err(err);
    }
    Ok(())
}
