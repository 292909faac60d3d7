use std::collections::BTreeSet;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use crate::tier::Tier;

/// Creator identifier.
pub type CreatorId = String;

/// Performance statistics of a creator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorStats {
    /// Lifetime earnings in dollars.
    pub lifetime_earnings: Decimal,
    /// Number of completed campaigns.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_campaigns: u32,
    /// Share of bids won, in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub win_rate: Decimal,
    /// Average brand rating, from 0 to 5.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_rating: Decimal,
    /// Consecutive days with an active campaign.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_streak: u32,
    /// Share of brands that came back, in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub repeat_brand_rate: Decimal,
    /// Share of deliveries made early, in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_delivery_speed: Decimal,
    /// Month-over-month growth, in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monthly_growth: Option<Decimal>,
}

impl CreatorStats {
    /// Earnings tier.
    pub fn tier(&self) -> Tier {
        Tier::from_earnings(&self.lifetime_earnings)
    }
}

/// A creator as stored for ranking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct CreatorProfile {
    /// Creator id.
    #[builder(setter(into))]
    pub id: CreatorId,
    /// Display name.
    #[builder(setter(into))]
    pub name: String,
    /// Avatar.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default, setter(into))]
    pub avatar: String,
    /// Content niche.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default, setter(into))]
    pub niche: String,
    /// Statistics.
    pub stats: CreatorStats,
    /// Badges to feature, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default)]
    pub top_badges: Vec<String>,
    /// All earned badges.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default)]
    pub earned_badges: BTreeSet<String>,
}

impl CreatorProfile {
    /// Earnings tier.
    pub fn tier(&self) -> Tier {
        self.stats.tier()
    }
}
