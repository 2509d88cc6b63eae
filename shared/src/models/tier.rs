//! Customer loyalty tier

use serde::{Deserialize, Serialize};

/// Discount percentage per tier (index = tier)
pub const TIER_DISCOUNT_PERCENTAGES: [u32; 5] = [0, 5, 10, 15, 20];

/// Highest valid tier
pub const MAX_TIER: u8 = 4;

/// Customer loyalty tier 0-4
///
/// Tier is platform-assigned metadata, so out-of-range values are clamped
/// instead of rejected: negative becomes 0, anything above 4 becomes 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct CustomerTier(u8);

impl CustomerTier {
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_TIER as i64) as u8)
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Discount percentage for this tier (0, 5, 10, 15 or 20)
    pub fn discount_percentage(&self) -> u32 {
        TIER_DISCOUNT_PERCENTAGES[self.0 as usize]
    }
}

impl From<i64> for CustomerTier {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl From<CustomerTier> for i64 {
    fn from(tier: CustomerTier) -> Self {
        tier.0 as i64
    }
}
