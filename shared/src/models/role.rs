//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Account role
///
/// `Host` owns coupons and bonus services; only `Tourist` and `Agency`
/// are ever evaluated as discount subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Tourist,
    Agency,
    Host,
}

impl Role {
    /// Wire name (`SCREAMING_SNAKE_CASE`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Tourist => "TOURIST",
            Role::Agency => "AGENCY",
            Role::Host => "HOST",
        }
    }

    /// Whether audience rules can target this role at all
    pub const fn is_discount_subject(&self) -> bool {
        matches!(self, Role::Tourist | Role::Agency)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOURIST" => Ok(Role::Tourist),
            "AGENCY" => Ok(Role::Agency),
            "HOST" => Ok(Role::Host),
            _ => Err(
                AppError::with_message(ErrorCode::UnknownRole, format!("Unknown role: {}", s))
                    .with_detail("value", s),
            ),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("tourist".parse::<Role>().unwrap(), Role::Tourist);
        assert_eq!("Agency".parse::<Role>().unwrap(), Role::Agency);
        assert_eq!("HOST".parse::<Role>().unwrap(), Role::Host);
        assert_eq!("admin".parse::<Role>().unwrap_err().code, ErrorCode::UnknownRole);
    }

    #[test]
    fn test_only_tourist_and_agency_are_subjects() {
        assert!(Role::Tourist.is_discount_subject());
        assert!(Role::Agency.is_discount_subject());
        assert!(!Role::Host.is_discount_subject());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Agency).unwrap(), "\"AGENCY\"");
        let role: Role = serde_json::from_str("\"Tourist\"").unwrap();
        assert_eq!(role, Role::Tourist);
    }
}
