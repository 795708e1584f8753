//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::CouponNotFound | Self::BonusServiceNotFound => {
                StatusCode::NOT_FOUND
            }

            // 403 Forbidden
            Self::SubjectNotEligible | Self::RoleNotDiscountSubject => StatusCode::FORBIDDEN,

            // 422 Unprocessable (coupon exists but cannot be used right now)
            Self::CouponInactive
            | Self::CouponNotStarted
            | Self::CouponExpired
            | Self::CouponExhausted => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError | Self::FileReadFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
