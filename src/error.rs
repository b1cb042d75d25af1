//! Error types for parameter validation and scenario loading

use thiserror::Error;

/// Result type used across the library
pub type Result<T> = std::result::Result<T, BudgetError>;

/// Errors raised before any calculation runs
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A user-supplied parameter is outside its allowed range
    #[error("Invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Currency code other than DKK, USD or EUR
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// A scenario row in a batch file could not be used
    #[error("Scenario on line {line}: {source}")]
    Scenario {
        line: u64,
        #[source]
        source: Box<BudgetError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BudgetError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        BudgetError::InvalidParameter { field, value, reason }
    }
}

/// Reject negative or non-finite amounts and rates
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BudgetError::invalid(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(BudgetError::invalid(field, value, "must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative("rent", 0.0).is_ok());
        assert!(check_non_negative("rent", 1500.0).is_ok());

        let err = check_non_negative("rent", -1.0).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidParameter { field: "rent", .. }));

        assert!(check_non_negative("rent", f64::NAN).is_err());
        assert!(check_non_negative("rent", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = BudgetError::invalid("total_years", 0.0, "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `total_years` = 0: must be at least 1"
        );
    }
}
