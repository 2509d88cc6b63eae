//! Car Model

use serde::{Deserialize, Serialize};

use super::tier::CustomerTier;

/// Car entity as returned by the rental API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    /// Price per rental day
    pub daily_rate: f64,
    /// Car class on the same 0-4 scale as the customer tier (informational,
    /// not used in pricing)
    #[serde(default)]
    pub tier: CustomerTier,
}
