use super::error::UserError;

/// Validates the mutable user fields before they reach storage.
///
/// Both fields are required to be present and non-empty. Content is not
/// inspected beyond that.
pub fn validate_user_fields(name: &str, email: &str) -> Result<(), UserError> {
    if name.is_empty() {
        return Err(UserError::EmptyName);
    }
    if email.is_empty() {
        return Err(UserError::EmptyEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_fields_success() {
        assert!(validate_user_fields("Alice", "a@x.com").is_ok());
    }

    #[test]
    fn test_validate_user_fields_empty_name() {
        assert_eq!(
            validate_user_fields("", "a@x.com"),
            Err(UserError::EmptyName)
        );
    }

    #[test]
    fn test_validate_user_fields_accepts_whitespace_values() {
        assert!(validate_user_fields(" ", "a@x.com").is_ok());
        assert!(validate_user_fields("Alice", "  ").is_ok());
    }

    #[test]
    fn test_validate_user_fields_empty_email() {
        assert_eq!(validate_user_fields("Alice", ""), Err(UserError::EmptyEmail));
    }

    #[test]
    fn test_validate_user_fields_reports_name_first() {
        assert_eq!(validate_user_fields("", ""), Err(UserError::EmptyName));
    }
}
