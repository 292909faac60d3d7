#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Gigboard Model
//!
//! Domain rules for a creator/brand sponsorship marketplace: the bid ledger
//! with its status state machine, and the creator leaderboard with tier and
//! badge classification.

/// Error type.
pub mod error;

/// Bids and the bid ledger.
pub mod bid;

/// Opportunity (gig) catalog entries.
pub mod opportunity;

/// Creator profiles and statistics.
pub mod creator;

/// Earnings tiers.
pub mod tier;

/// Badge catalog.
pub mod badge;

/// Leaderboard ranking.
pub mod leaderboard;

/// Formatting helpers.
pub mod format;


pub use crate::{
    bid::{Bid, BidId, BidLedger, BidStatus, LedgerSummary, NewBid, OpenStatus, Outcome},
    creator::{CreatorId, CreatorProfile, CreatorStats},
    error::Error,
    leaderboard::{
        format_leaderboard_value, position_change, Direction, Leaderboard, LeaderboardEntry,
        PositionChange, RankingType, TimeWindow,
    },
    opportunity::{BudgetRange, Opportunity},
    tier::{tier_from_earnings, Tier, TierProgress},
};

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use rust_decimal;
