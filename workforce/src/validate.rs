//! Field validators shared by the services. Each one normalises its input
//! and produces a `WorkforceError::Validation` with a message suitable for
//! showing to the operator verbatim.

use crate::error::WorkforceError;

/// Trims the value and rejects it when nothing is left.
/// `field` names the offending field in the error message, e.g. "First Name".
pub(crate) fn non_empty(value: &str, field: &str) -> Result<String, WorkforceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WorkforceError::Validation(format!(
            "{field} must be a non-empty string"
        )));
    }
    Ok(trimmed.to_string())
}

/// Shallow shape check: the address must contain both an `@` and a `.`.
/// The accepted value is trimmed and lowercased before storage so the
/// uniqueness rule is case-insensitive.
pub(crate) fn email(value: &str) -> Result<String, WorkforceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.contains('@') || !trimmed.contains('.') {
        return Err(WorkforceError::Validation(
            "Email must be a valid email address".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}

/// Parses a monetary amount and requires it to be strictly positive.
/// Used for both salaries and budgets, `field` picks the message wording.
pub(crate) fn positive_amount(value: &str, field: &str) -> Result<f64, WorkforceError> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| WorkforceError::Validation(format!("{field} must be a number")))?;
    if amount.is_nan() || amount <= 0.0 {
        return Err(WorkforceError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(amount)
}
