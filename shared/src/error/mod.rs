//! Unified error system
//!
//! This module provides the error handling shared by the engine and its
//! callers:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Discount errors (coupons, bonus services, audience rules)
//! - 8xxx: Membership errors (roles, tiers)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::CouponNotFound);
//!
//! // Create an error with details
//! let err = AppError::with_message(ErrorCode::AudienceTierSelectionEmpty, "Select at least one tier")
//!     .with_detail("field", "agencyTiers");
//!
//! // Convert to API response
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(6202));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
