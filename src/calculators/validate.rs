// Field range checks shared by the module inputs.

use crate::errors::{ClarityError, Result};

fn finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ClarityError::validation(field, "must be a finite number"))
    }
}

pub(crate) fn industry(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ClarityError::validation("industry", "must not be empty"))
    } else {
        Ok(())
    }
}

pub(crate) fn positive(field: &str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ClarityError::validation(field, "must be greater than 0"))
    }
}

pub(crate) fn positive_count(field: &str, value: u64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(ClarityError::validation(field, "must be greater than 0"))
    }
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ClarityError::validation(
            field,
            "must be greater than or equal to 0",
        ))
    }
}

/// Strictly between 0 and 100.
pub(crate) fn open_percentage(field: &str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 && value < 100.0 {
        Ok(())
    } else {
        Err(ClarityError::validation(
            field,
            "must be between 0 and 100 (exclusive)",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bounds_are_exclusive() {
        assert!(open_percentage("rate", 0.0).is_err());
        assert!(open_percentage("rate", 100.0).is_err());
        assert!(open_percentage("rate", 0.01).is_ok());
        assert!(open_percentage("rate", 99.99).is_ok());
        assert!(open_percentage("rate", f64::NAN).is_err());
    }

    #[test]
    fn positive_and_non_negative() {
        assert!(positive("x", 0.0).is_err());
        assert!(positive("x", 1.0).is_ok());
        assert!(non_negative("x", 0.0).is_ok());
        assert!(non_negative("x", -0.5).is_err());
        assert!(positive_count("n", 0).is_err());
        assert!(industry("  ").is_err());
    }
}
