use std::fmt;

/// Badge rarity, ordered from most to least common.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter, strum::EnumString))]
#[cfg_attr(feature = "strum", strum(serialize_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    /// Common.
    Common,
    /// Rare.
    Rare,
    /// Epic.
    Epic,
    /// Legendary.
    Legendary,
}

impl Rarity {
    /// Get the rarity name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge catalog entry.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Badge id.
    pub id: &'static str,
    /// Name.
    pub name: &'static str,
    /// Icon.
    pub icon: &'static str,
    /// Description.
    pub description: &'static str,
    /// Rarity.
    pub rarity: Rarity,
}

const CATALOG: &[Badge] = &[
    Badge {
        id: "first_bid",
        name: "First Pitch",
        icon: "🎯",
        description: "Placed a first bid",
        rarity: Rarity::Common,
    },
    Badge {
        id: "first_win",
        name: "Signed",
        icon: "✍️",
        description: "Won a first campaign",
        rarity: Rarity::Common,
    },
    Badge {
        id: "streak_7",
        name: "On Fire",
        icon: "🔥",
        description: "Kept a 7 day campaign streak",
        rarity: Rarity::Rare,
    },
    Badge {
        id: "five_star",
        name: "Five Star",
        icon: "⭐",
        description: "Kept a 5.0 average rating over 10 campaigns",
        rarity: Rarity::Rare,
    },
    Badge {
        id: "speed_demon",
        name: "Speed Demon",
        icon: "⚡",
        description: "Delivered early on 90% of campaigns",
        rarity: Rarity::Epic,
    },
    Badge {
        id: "brand_favorite",
        name: "Brand Favorite",
        icon: "❤️",
        description: "Worked with the same brand 5 times",
        rarity: Rarity::Epic,
    },
    Badge {
        id: "streak_30",
        name: "Unstoppable",
        icon: "🚀",
        description: "Kept a 30 day campaign streak",
        rarity: Rarity::Epic,
    },
    Badge {
        id: "top_earner",
        name: "Top Earner",
        icon: "💰",
        description: "Finished a month first on the earnings board",
        rarity: Rarity::Legendary,
    },
    Badge {
        id: "legend",
        name: "Legend",
        icon: "🏆",
        description: "Passed $500K in lifetime earnings",
        rarity: Rarity::Legendary,
    },
];

/// The badge catalog, ordered by rarity.
pub fn catalog() -> &'static [Badge] {
    CATALOG
}

/// Find a badge by id.
pub fn find(id: &str) -> Option<&'static Badge> {
    CATALOG.iter().find(|badge| badge.id == id)
}

/// A badge with its earned flag for one creator.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStatus {
    /// The badge.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub badge: &'static Badge,
    /// Whether the creator earned it.
    pub earned: bool,
}

/// Pair every catalog badge with whether it is in `earned`.
pub fn catalog_with_status<'a, F>(is_earned: F) -> impl Iterator<Item = BadgeStatus> + 'a
where
    F: Fn(&str) -> bool + 'a,
{
    CATALOG.iter().map(move |badge| BadgeStatus {
        badge,
        earned: is_earned(badge.id),
    })
}
