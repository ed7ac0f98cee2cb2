use crate::utils::error::{E2eError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> E2eError {
    E2eError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    if !email_regex().is_match(email) {
        return Err(invalid(field_name, email, "Value is not a valid email address"));
    }
    Ok(())
}

/// Password policy enforced by the registration form:
/// at least 8 characters with upper case, lower case and a digit.
pub fn validate_password_strength(field_name: &str, password: &str) -> Result<()> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_upper && has_lower && has_digit) {
        return Err(invalid(
            field_name,
            "********",
            "Password needs 8+ characters with upper case, lower case and a digit",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_ui", "https://example.com").is_ok());
        assert!(validate_url("base_ui", "http://localhost:3000").is_ok());
        assert!(validate_url("base_ui", "").is_err());
        assert!(validate_url("base_ui", "invalid-url").is_err());
        assert!(validate_url("base_ui", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeouts.default", 5, 1).is_ok());
        assert!(validate_positive_number("timeouts.default", 0, 1).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "john.doe@example.com").is_ok());
        assert!(validate_email("email", "qa+run_42@mail.blog.vn").is_ok());
        assert!(validate_email("email", "some_random_username").is_err());
        assert!(validate_email("email", "missing@tld").is_err());
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn test_password_strength_masks_value() {
        assert!(validate_password_strength("password", "Test@12345").is_ok());
        let err = validate_password_strength("password", "weakpass").unwrap_err();
        assert!(!err.to_string().contains("weakpass"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("viewport.width", 1920u32, 320, 7680).is_ok());
        assert!(validate_range("viewport.width", 100u32, 320, 7680).is_err());
    }
}
