/// Bid status state machine.
pub mod status;

/// Bid ledger.
pub mod ledger;

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use time::OffsetDateTime;
use typed_builder::TypedBuilder;

pub use self::{
    ledger::{BidLedger, LedgerSummary},
    status::{BidStatus, OpenStatus, Outcome},
};

/// Bid identifier, unique within a ledger.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BidId(u64);

impl BidId {
    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The following id, or `None` once the id space is used up.
    pub(crate) fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for BidId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BidId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// A creator's offer on a gig.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    /// Bid id.
    pub id: BidId,
    /// The gig being bid on.
    pub gig_id: String,
    /// Gig title at bid time.
    pub gig_title: String,
    /// Brand name at bid time.
    pub brand: String,
    /// Brand logo at bid time.
    pub brand_logo: String,
    /// Gig category at bid time.
    pub category: String,
    /// Budget range display at bid time.
    pub budget_range: String,
    /// Offered amount.
    pub bid_amount: Decimal,
    /// Pitch.
    pub pitch: String,
    /// Status.
    pub status: BidStatus,
    /// Time left display, fixed at creation.
    pub time_left: String,
    /// Highest competing bid, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub top_bid: Option<Decimal>,
    /// Submission time.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub submitted_at: OffsetDateTime,
}

impl Bid {
    /// Returns whether the bid is still open.
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Returns the amount a raise must exceed to take the lead, if a
    /// competing bid is known.
    pub fn amount_to_lead(&self) -> Option<Decimal> {
        self.top_bid
            .filter(|top_bid| *top_bid >= self.bid_amount)
    }
}

/// Fields of a bid to submit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewBid {
    /// The gig being bid on.
    #[builder(setter(into))]
    pub gig_id: String,
    /// Gig title.
    #[builder(setter(into))]
    pub gig_title: String,
    /// Brand name.
    #[builder(setter(into))]
    pub brand: String,
    /// Brand logo.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default, setter(into))]
    pub brand_logo: String,
    /// Gig category.
    #[builder(setter(into))]
    pub category: String,
    /// Budget range display.
    #[builder(setter(into))]
    pub budget_range: String,
    /// Offered amount.
    pub bid_amount: Decimal,
    /// Pitch.
    #[builder(setter(into))]
    pub pitch: String,
    /// Initial status.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default)]
    pub status: BidStatus,
    /// Time left display.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default, setter(into))]
    pub time_left: String,
    /// Highest competing bid, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    #[builder(default, setter(strip_option))]
    pub top_bid: Option<Decimal>,
}

impl NewBid {
    pub(crate) fn into_bid(self, id: BidId, submitted_at: OffsetDateTime) -> Bid {
        Bid {
            id,
            gig_id: self.gig_id,
            gig_title: self.gig_title,
            brand: self.brand,
            brand_logo: self.brand_logo,
            category: self.category,
            budget_range: self.budget_range,
            bid_amount: self.bid_amount,
            pitch: self.pitch,
            status: self.status,
            time_left: self.time_left,
            top_bid: self.top_bid,
            submitted_at,
        }
    }
}
