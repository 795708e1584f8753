//! Bonus Service (privilege) Payload Model

use serde::{Deserialize, Serialize};

use super::audience::AudiencePayload;

/// Bonus service: a linked service granted free to the audience
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusServicePayload {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "LinkedServiceId")]
    pub linked_service_id: i64,
    /// List price of the linked service (whole currency units)
    #[serde(alias = "Price")]
    pub price: u64,
    #[serde(default, alias = "Audience")]
    pub audience: AudiencePayload,
}
