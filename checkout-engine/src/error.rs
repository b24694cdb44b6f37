//! Engine error taxonomy
//!
//! Errors abort the whole calculation; a partially computed total is
//! never returned. Business-rule rejections that can be recovered
//! (insufficient points) are not errors; they surface as
//! [`shared::checkout::TotalWarning`] on a successful result.

use shared::checkout::InputErrorCode;
use shared::money::UnknownRoundingPolicy;

/// Failure of an injected collaborator (tax-rate or discount resolver),
/// or nonsensical data it returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolverError {
    #[error("tax rate lookup failed: {0}")]
    TaxRate(String),
    #[error("discount lookup failed: {0}")]
    Discount(String),
}

/// Why an order total calculation failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TotalError {
    /// Malformed input, rejected before any pipeline stage ran
    #[error("invalid input: {1}")]
    InvalidInput(InputErrorCode, String),

    /// An upstream collaborator failed; no partial result is available
    #[error("collaborator failure: {0}")]
    Collaborator(#[from] ResolverError),

    /// Configuration referenced an unrecognized rounding policy
    #[error(transparent)]
    UnknownRoundingPolicy(#[from] UnknownRoundingPolicy),
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::money::RoundingPolicy;

    #[test]
    fn test_unknown_policy_code_is_a_fatal_config_error() {
        let err: TotalError = "CASH_UP002"
            .parse::<RoundingPolicy>()
            .unwrap_err()
            .into();
        assert!(matches!(err, TotalError::UnknownRoundingPolicy(_)));
        assert_eq!(err.to_string(), "unknown rounding policy code: CASH_UP002");
    }

    #[test]
    fn test_resolver_errors_convert_to_collaborator_failures() {
        let err: TotalError = ResolverError::TaxRate("backend down".to_string()).into();
        assert_eq!(
            err.to_string(),
            "collaborator failure: tax rate lookup failed: backend down"
        );
    }
}
