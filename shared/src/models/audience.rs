//! Audience Payload Model

use serde::{Deserialize, Serialize};

use super::tier::TierChoice;

/// Audience selection as submitted by the host forms and stored by the backend
///
/// Tier lists are only meaningful when the matching `for_*` flag is set.
/// Order matters: a later `ALL` replaces earlier specific tiers and a later
/// specific tier replaces an earlier `ALL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudiencePayload {
    #[serde(default, alias = "ForAgency")]
    pub for_agency: bool,
    #[serde(default, alias = "AgencyTiers", skip_serializing_if = "Option::is_none")]
    pub agency_tiers: Option<Vec<TierChoice>>,
    #[serde(default, alias = "ForTourist")]
    pub for_tourist: bool,
    #[serde(default, alias = "TouristTiers", skip_serializing_if = "Option::is_none")]
    pub tourist_tiers: Option<Vec<TierChoice>>,
}
