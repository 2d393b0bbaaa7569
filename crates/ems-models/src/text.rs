//! Rules shared by every free-text field that is stored or queried.

use std::borrow::Cow;

use validator::ValidationError;

/// Column width of every text column.
pub const MAX_TEXT_LEN: usize = 255;

const TOO_LONG_MESSAGE: &str = "Must be at most 255 characters long.";
const NUL_MESSAGE: &str = "Must not contain NUL characters.";

/// Rejects values PostgreSQL would refuse: longer than the column, or
/// holding a NUL byte.
pub(crate) fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_byte").with_message(Cow::Borrowed(NUL_MESSAGE)));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new("too_long").with_message(Cow::Borrowed(TOO_LONG_MESSAGE)));
    }
    Ok(())
}
