//! Shared types for the discount workspace
//!
//! Wire payload types exchanged with the booking backend, the role and
//! membership tier enums, and the unified error system used by every crate.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{MembershipTier, Role, TierChoice};
