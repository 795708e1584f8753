//! Construction-time validation errors
//!
//! Every variant names the form field it belongs to so the host forms can
//! highlight it. Nothing here is raised during evaluation: a rule or coupon
//! that fails validation never reaches a [`CatalogSnapshot`](crate::catalog::CatalogSnapshot).

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use shared::error::{AppError, ErrorCode};
use shared::models::Role;
use std::fmt;
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("audience must target agencies, tourists, or both")]
    NoAudience,

    #[error("{role} audience has no membership tier selected")]
    EmptyTierSelection { role: Role },

    #[error("coupon code {code:?} may only contain letters, digits, '-' and '_'")]
    InvalidCouponCode { code: String },

    #[error("discount value must be greater than zero, got {value}")]
    NonPositiveDiscount { value: Decimal },

    #[error("percentage discount must not exceed 100, got {value}")]
    PercentOutOfRange { value: Decimal },

    #[error("fixed discount must be a whole currency amount, got {value}")]
    FractionalAmount { value: Decimal },

    #[error("valid_from ({from}) is after valid_to ({to})")]
    InvalidValidityWindow { from: i64, to: i64 },

    #[error("usage count {count} exceeds usage limit {limit}")]
    UsageExceedsLimit { count: u32, limit: u32 },

    #[error("{field} is not a valid timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("instrument is malformed: {message}")]
    MalformedInstrument { message: String },
}

impl ValidationError {
    /// Form field (camelCase, as in the payload) the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::NoAudience => "audience",
            Self::EmptyTierSelection { role: Role::Agency } => "agencyTiers",
            Self::EmptyTierSelection { .. } => "touristTiers",
            Self::InvalidCouponCode { .. } => "code",
            Self::NonPositiveDiscount { .. }
            | Self::PercentOutOfRange { .. }
            | Self::FractionalAmount { .. } => "discountValue",
            Self::InvalidValidityWindow { .. } => "validTo",
            Self::UsageExceedsLimit { .. } => "usageCount",
            Self::InvalidTimestamp { field, .. } => *field,
            Self::MalformedInstrument { .. } => "instrument",
        }
    }

    /// Shared error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoAudience => ErrorCode::AudienceEmpty,
            Self::EmptyTierSelection { .. } => ErrorCode::AudienceTierSelectionEmpty,
            Self::InvalidCouponCode { .. } => ErrorCode::InvalidCouponCode,
            Self::NonPositiveDiscount { .. } => ErrorCode::InvalidDiscountValue,
            Self::PercentOutOfRange { .. } => ErrorCode::DiscountPercentOutOfRange,
            Self::FractionalAmount { .. } => ErrorCode::FractionalDiscountAmount,
            Self::InvalidValidityWindow { .. } => ErrorCode::InvalidValidityWindow,
            Self::UsageExceedsLimit { .. } => ErrorCode::UsageCountExceedsLimit,
            Self::InvalidTimestamp { .. } | Self::MalformedInstrument { .. } => {
                ErrorCode::InvalidFormat
            }
        }
    }

    /// Serializable view for API responses
    pub fn to_field_error(&self) -> FieldError {
        FieldError {
            field: self.field(),
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::with_message(err.code(), err.to_string()).with_detail("field", err.field())
    }
}

/// Field error as sent back to the forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub code: ErrorCode,
    pub message: String,
}

/// Non-empty list of validation failures for one submitted entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap collected errors; `None` when nothing failed
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Offending fields, in the order they were reported
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::field).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    pub fn to_field_errors(&self) -> Vec<FieldError> {
        self.0.iter().map(ValidationError::to_field_error).collect()
    }

    pub(crate) fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field(), err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(ValidationError::to_field_error))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = serde_json::to_value(errors.to_field_errors()).unwrap_or_default();
        let (code, field) = if errors.len() == 1 {
            (errors.first().code(), errors.first().field())
        } else {
            (ErrorCode::ValidationFailed, errors.first().field())
        };
        AppError::with_message(code, errors.to_string())
            .with_detail("field", field)
            .with_detail("errors", field_errors)
    }
}
