use crate::utils::error::{RegistrarError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Name fields must be empty or entirely alphabetic.
pub fn validate_alpha_field(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.chars().all(|c| c.is_alphabetic()) {
        Ok(())
    } else {
        Err(RegistrarError::validation(
            field_name,
            value,
            "should only use letters",
        ))
    }
}

/// Parses a GPA from its text representation. Must be a number and non-negative.
pub fn parse_gpa(field_name: &str, raw: &str) -> Result<f64> {
    let gpa: f64 = raw.trim().parse().map_err(|_| {
        RegistrarError::validation(field_name, raw, "must be a number")
    })?;
    validate_gpa_range(field_name, gpa)?;
    Ok(gpa)
}

pub fn validate_gpa_range(field_name: &str, gpa: f64) -> Result<()> {
    if gpa < 0.0 {
        return Err(RegistrarError::validation(
            field_name,
            &gpa.to_string(),
            "must not be negative",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegistrarError::validation(
            field_name,
            path,
            "path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(RegistrarError::validation(
            field_name,
            path,
            "path contains null bytes",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_alpha_field() {
        assert!(validate_alpha_field("first name", "Jason").is_ok());
        assert!(validate_alpha_field("first name", "").is_ok());
        assert!(validate_alpha_field("first name", "J4son").is_err());
        assert!(validate_alpha_field("first name", "Jason Jr.").is_err());
    }

    #[test]
    fn test_parse_gpa() {
        assert_eq!(parse_gpa("GPA", "3.5").unwrap(), 3.5);
        assert_eq!(parse_gpa("GPA", " 4.0 ").unwrap(), 4.0);
        assert!(parse_gpa("GPA", "three").is_err());
        assert!(parse_gpa("GPA", "-1.0").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "Enrollments.json").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }
}
