//! Data models
//!
//! Wire shapes shared between the engine and its callers (host forms,
//! booking frontend, backend payloads). Validated domain types live in
//! `discount-engine`; these types only describe what crosses the boundary.

pub mod audience;
pub mod bonus_service;
pub mod catalog;
pub mod coupon;
pub mod role;
pub mod tier;

// Re-exports
pub use audience::*;
pub use bonus_service::*;
pub use catalog::*;
pub use coupon::*;
pub use role::*;
pub use tier::*;
