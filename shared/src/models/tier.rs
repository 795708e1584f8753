//! Membership Tier Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Membership tier (会员等级), ordered `None < Bronze < Silver < Gold`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MembershipTier {
    None,
    Bronze,
    Silver,
    Gold,
}

impl MembershipTier {
    /// Every tier, lowest first
    pub const ALL: [MembershipTier; 4] = [
        MembershipTier::None,
        MembershipTier::Bronze,
        MembershipTier::Silver,
        MembershipTier::Gold,
    ];

    /// Wire name (`SCREAMING_SNAKE_CASE`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::None => "NONE",
            MembershipTier::Bronze => "BRONZE",
            MembershipTier::Silver => "SILVER",
            MembershipTier::Gold => "GOLD",
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(MembershipTier::None),
            "BRONZE" => Ok(MembershipTier::Bronze),
            "SILVER" => Ok(MembershipTier::Silver),
            "GOLD" => Ok(MembershipTier::Gold),
            _ => Err(AppError::with_message(
                ErrorCode::UnknownTier,
                format!("Unknown membership tier: {}", s),
            )
            .with_detail("value", s)),
        }
    }
}

impl TryFrom<String> for MembershipTier {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MembershipTier> for String {
    fn from(tier: MembershipTier) -> Self {
        tier.as_str().to_string()
    }
}

/// One entry of a tier selection: the `ALL` sentinel or a concrete tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TierChoice {
    All,
    Tier(MembershipTier),
}

impl fmt::Display for TierChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierChoice::All => f.write_str("ALL"),
            TierChoice::Tier(tier) => tier.fmt(f),
        }
    }
}

impl FromStr for TierChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(TierChoice::All);
        }
        s.parse().map(TierChoice::Tier)
    }
}

impl TryFrom<String> for TierChoice {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TierChoice> for String {
    fn from(choice: TierChoice) -> Self {
        choice.to_string()
    }
}

impl From<MembershipTier> for TierChoice {
    fn from(tier: MembershipTier) -> Self {
        TierChoice::Tier(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(MembershipTier::None < MembershipTier::Bronze);
        assert!(MembershipTier::Bronze < MembershipTier::Silver);
        assert!(MembershipTier::Silver < MembershipTier::Gold);
        assert_eq!(MembershipTier::ALL.iter().max(), Some(&MembershipTier::Gold));
    }

    #[test]
    fn test_tier_parse_is_case_insensitive() {
        assert_eq!("gold".parse::<MembershipTier>().unwrap(), MembershipTier::Gold);
        assert_eq!("Silver".parse::<MembershipTier>().unwrap(), MembershipTier::Silver);
        assert_eq!(" BRONZE ".parse::<MembershipTier>().unwrap(), MembershipTier::Bronze);

        let err = "platinum".parse::<MembershipTier>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownTier);
    }

    #[test]
    fn test_tier_choice_parse() {
        assert_eq!("ALL".parse::<TierChoice>().unwrap(), TierChoice::All);
        assert_eq!("all".parse::<TierChoice>().unwrap(), TierChoice::All);
        assert_eq!(
            "Gold".parse::<TierChoice>().unwrap(),
            TierChoice::Tier(MembershipTier::Gold)
        );
        assert!("".parse::<TierChoice>().is_err());
    }

    #[test]
    fn test_tier_serde() {
        let json = serde_json::to_string(&MembershipTier::Silver).unwrap();
        assert_eq!(json, "\"SILVER\"");

        let choices: Vec<TierChoice> = serde_json::from_str(r#"["Silver","all","GOLD"]"#).unwrap();
        assert_eq!(
            choices,
            vec![
                TierChoice::Tier(MembershipTier::Silver),
                TierChoice::All,
                TierChoice::Tier(MembershipTier::Gold),
            ]
        );

        assert!(serde_json::from_str::<TierChoice>("\"DIAMOND\"").is_err());
    }
}
