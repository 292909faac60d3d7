use std::fmt;

use rust_decimal::Decimal;

/// Earnings tier of a creator.
///
/// Tiers are ordered from lowest to highest.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter, strum::EnumString))]
#[cfg_attr(feature = "strum", strum(serialize_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Under $5,000.
    Rookie,
    /// From $5,000.
    Rising,
    /// From $25,000.
    Pro,
    /// From $100,000.
    Elite,
    /// From $500,000.
    Legend,
}

impl Tier {
    const DESCENDING: [Tier; 5] = [
        Tier::Legend,
        Tier::Elite,
        Tier::Pro,
        Tier::Rising,
        Tier::Rookie,
    ];

    /// Classify lifetime earnings.
    ///
    /// Each tier includes its lower bound.
    pub fn from_earnings(earnings: &Decimal) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|tier| *earnings >= tier.min_earnings())
            .unwrap_or(Tier::Rookie)
    }

    /// Lifetime earnings at which the tier starts.
    pub fn min_earnings(&self) -> Decimal {
        let min: u32 = match self {
            Self::Rookie => 0,
            Self::Rising => 5_000,
            Self::Pro => 25_000,
            Self::Elite => 100_000,
            Self::Legend => 500_000,
        };
        Decimal::from(min)
    }

    /// The tier above, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Rookie => Some(Self::Rising),
            Self::Rising => Some(Self::Pro),
            Self::Pro => Some(Self::Elite),
            Self::Elite => Some(Self::Legend),
            Self::Legend => None,
        }
    }

    /// Progress of `earnings` toward the next tier.
    ///
    /// Returns `None` for earnings already in the top tier.
    pub fn progress(earnings: &Decimal) -> Option<TierProgress> {
        let current = Self::from_earnings(earnings);
        let next = current.next()?;
        let floor = current.min_earnings();
        let span = next.min_earnings() - floor;
        let into = (*earnings - floor).max(Decimal::ZERO);
        Some(TierProgress {
            current,
            next,
            remaining: next.min_earnings() - *earnings,
            percent: into * Decimal::from(100) / span,
        })
    }

    /// Get the tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rookie => "rookie",
            Self::Rising => "rising",
            Self::Pro => "pro",
            Self::Elite => "elite",
            Self::Legend => "legend",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rookie => "Rookie",
            Self::Rising => "Rising Star",
            Self::Pro => "Pro",
            Self::Elite => "Elite",
            Self::Legend => "Legend",
        }
    }

    /// Display color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Rookie => "#94a3b8",
            Self::Rising => "#22c55e",
            Self::Pro => "#3b82f6",
            Self::Elite => "#a855f7",
            Self::Legend => "#f59e0b",
        }
    }

    /// Display icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rookie => "🌱",
            Self::Rising => "⭐",
            Self::Pro => "💎",
            Self::Elite => "👑",
            Self::Legend => "🏆",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify lifetime earnings into a [`Tier`].
pub fn tier_from_earnings(earnings: &Decimal) -> Tier {
    Tier::from_earnings(earnings)
}

/// Progress toward the next tier.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierProgress {
    /// Current tier.
    pub current: Tier,
    /// Next tier.
    pub next: Tier,
    /// Earnings still needed to reach the next tier.
    pub remaining: Decimal,
    /// Share of the current tier's span already covered, in percent.
    pub percent: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn thresholds_include_lower_bound() {
        let cases = [
            (dec!(0), Tier::Rookie),
            (dec!(4999), Tier::Rookie),
            (dec!(4999.99), Tier::Rookie),
            (dec!(5000), Tier::Rising),
            (dec!(24999), Tier::Rising),
            (dec!(25000), Tier::Pro),
            (dec!(99999), Tier::Pro),
            (dec!(100000), Tier::Elite),
            (dec!(499999), Tier::Elite),
            (dec!(500000), Tier::Legend),
            (dec!(12000000), Tier::Legend),
        ];
        for (earnings, tier) in cases {
            assert_eq!(tier_from_earnings(&earnings), tier, "earnings={earnings}");
        }
    }

    #[test]
    fn thresholds_are_monotonic() {
        let tiers = Tier::iter().collect::<Vec<_>>();
        for pair in tiers.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].min_earnings() < pair[1].min_earnings());
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
    }

    #[test]
    fn progress_toward_next_tier() {
        let progress = Tier::progress(&dec!(15000)).expect("rising has a next tier");
        assert_eq!(progress.current, Tier::Rising);
        assert_eq!(progress.next, Tier::Pro);
        assert_eq!(progress.remaining, dec!(10000));
        assert_eq!(progress.percent, dec!(50));

        assert!(Tier::progress(&dec!(750000)).is_none());
    }
}
