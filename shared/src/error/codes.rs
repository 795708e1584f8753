//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Discount errors
//! - 8xxx: Membership errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Discount ====================
    /// Coupon not found
    CouponNotFound = 6001,
    /// Coupon code has invalid characters or length
    InvalidCouponCode = 6002,
    /// Discount value must be positive
    InvalidDiscountValue = 6003,
    /// Percentage discount above 100
    DiscountPercentOutOfRange = 6004,
    /// Fixed discount is not a whole currency amount
    FractionalDiscountAmount = 6005,
    /// valid_from is after valid_to
    InvalidValidityWindow = 6006,
    /// usage_count is above usage_limit
    UsageCountExceedsLimit = 6007,
    /// Coupon is switched off
    CouponInactive = 6008,
    /// Coupon validity window has not started
    CouponNotStarted = 6009,
    /// Coupon validity window has ended
    CouponExpired = 6010,
    /// Coupon usage limit reached
    CouponExhausted = 6011,
    /// Bonus service not found
    BonusServiceNotFound = 6101,
    /// Audience rule targets no role
    AudienceEmpty = 6201,
    /// A targeted role has no tier selected
    AudienceTierSelectionEmpty = 6202,
    /// Subject is outside the instrument audience
    SubjectNotEligible = 6203,

    // ==================== 8xxx: Membership ====================
    /// Role string not recognized
    UnknownRole = 8001,
    /// Tier string not recognized
    UnknownTier = 8002,
    /// Role can own instruments but never redeem them
    RoleNotDiscountSubject = 8003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
    /// Input file could not be read
    FileReadFailed = 9006,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Discount
            ErrorCode::CouponNotFound => "Coupon not found",
            ErrorCode::InvalidCouponCode => {
                "Coupon code may only contain letters, digits, '-' and '_'"
            }
            ErrorCode::InvalidDiscountValue => "Discount value must be greater than zero",
            ErrorCode::DiscountPercentOutOfRange => "Percentage discount cannot exceed 100",
            ErrorCode::FractionalDiscountAmount => {
                "Fixed discount must be a whole currency amount"
            }
            ErrorCode::InvalidValidityWindow => "Start date must not be after end date",
            ErrorCode::UsageCountExceedsLimit => "Usage count exceeds usage limit",
            ErrorCode::CouponInactive => "Coupon is not active",
            ErrorCode::CouponNotStarted => "Coupon is not valid yet",
            ErrorCode::CouponExpired => "Coupon has expired",
            ErrorCode::CouponExhausted => "Coupon usage limit reached",
            ErrorCode::BonusServiceNotFound => "Bonus service not found",
            ErrorCode::AudienceEmpty => "Select at least one audience (agency or tourist)",
            ErrorCode::AudienceTierSelectionEmpty => "Select at least one membership tier",
            ErrorCode::SubjectNotEligible => "Not available for your membership tier",

            // Membership
            ErrorCode::UnknownRole => "Unknown role",
            ErrorCode::UnknownTier => "Unknown membership tier",
            ErrorCode::RoleNotDiscountSubject => "Role cannot redeem discounts",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::FileReadFailed => "Failed to read input file",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Discount
            6001 => Ok(ErrorCode::CouponNotFound),
            6002 => Ok(ErrorCode::InvalidCouponCode),
            6003 => Ok(ErrorCode::InvalidDiscountValue),
            6004 => Ok(ErrorCode::DiscountPercentOutOfRange),
            6005 => Ok(ErrorCode::FractionalDiscountAmount),
            6006 => Ok(ErrorCode::InvalidValidityWindow),
            6007 => Ok(ErrorCode::UsageCountExceedsLimit),
            6008 => Ok(ErrorCode::CouponInactive),
            6009 => Ok(ErrorCode::CouponNotStarted),
            6010 => Ok(ErrorCode::CouponExpired),
            6011 => Ok(ErrorCode::CouponExhausted),
            6101 => Ok(ErrorCode::BonusServiceNotFound),
            6201 => Ok(ErrorCode::AudienceEmpty),
            6202 => Ok(ErrorCode::AudienceTierSelectionEmpty),
            6203 => Ok(ErrorCode::SubjectNotEligible),

            // Membership
            8001 => Ok(ErrorCode::UnknownRole),
            8002 => Ok(ErrorCode::UnknownTier),
            8003 => Ok(ErrorCode::RoleNotDiscountSubject),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::FileReadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
