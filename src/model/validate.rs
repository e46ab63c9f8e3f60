use validator::ValidationError;

/// Accepts 10 digit numbers starting with 6-9, optionally prefixed by a single `0`.
pub fn validate_phone_no(value: &str) -> Result<(), ValidationError> {
    let digits = value.strip_prefix('0').unwrap_or(value);

    let valid = digits.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(digits.chars().next(), Some('6'..='9'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("phone_no")
            .with_message("Enter a 10 digit phone number starting with 6-9".into()))
    }
}
