use rust_decimal::Decimal;

use crate::bid::{BidId, BidStatus};

/// Error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The offered amount is zero or negative.
    #[error("bid amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    /// The offered amount is below the opportunity's minimum budget.
    #[error("bid amount {proposed} is below the minimum budget of {minimum}")]
    AmountBelowMinimum {
        /// Minimum budget of the opportunity.
        minimum: Decimal,
        /// Offered amount.
        proposed: Decimal,
    },
    /// The pitch is blank.
    #[error("a pitch is required")]
    EmptyPitch,
    /// A raise does not exceed the current amount.
    #[error("new amount {proposed} must exceed the current bid of {current}")]
    AmountNotIncreased {
        /// Current amount of the bid.
        current: Decimal,
        /// Proposed amount.
        proposed: Decimal,
    },
    /// A competing bid does not exceed the bid it claims to outbid.
    #[error("competing bid {top_bid} does not exceed the current bid of {current}")]
    TopBidNotHigher {
        /// Current amount of the bid.
        current: Decimal,
        /// Competing amount.
        top_bid: Decimal,
    },
    /// A bid on the gig already exists in the ledger.
    #[error("a bid on gig `{0}` already exists")]
    DuplicateBid(String),
    /// Two bids share the same id.
    #[error("duplicate bid id {0}")]
    DuplicateBidId(BidId),
    /// No bid with the given id.
    #[error("bid {0} not found")]
    BidNotFound(BidId),
    /// The status change is not allowed.
    #[error("cannot move a bid from `{from}` to `{to}`")]
    InvalidTransition {
        /// Current status.
        from: BidStatus,
        /// Requested status.
        to: BidStatus,
    },
    /// Two creators share the same id.
    #[error("duplicate creator `{0}`")]
    DuplicateCreator(String),
    /// Every bid id has been handed out.
    #[error("no bid ids left")]
    BidIdExhausted,
}

impl Error {
    /// Stable error code, suitable for surfacing to a notification sink.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "BID_AMOUNT_NOT_POSITIVE",
            Self::AmountBelowMinimum { .. } => "BID_AMOUNT_BELOW_MINIMUM",
            Self::EmptyPitch => "BID_PITCH_REQUIRED",
            Self::AmountNotIncreased { .. } => "BID_AMOUNT_NOT_INCREASED",
            Self::TopBidNotHigher { .. } => "BID_TOP_BID_NOT_HIGHER",
            Self::DuplicateBid(_) => "BID_DUPLICATE_GIG",
            Self::DuplicateBidId(_) => "BID_DUPLICATE_ID",
            Self::BidNotFound(_) => "BID_NOT_FOUND",
            Self::InvalidTransition { .. } => "BID_INVALID_TRANSITION",
            Self::DuplicateCreator(_) => "CREATOR_DUPLICATE",
            Self::BidIdExhausted => "BID_ID_EXHAUSTED",
        }
    }

    /// Returns whether the error is a caller-input validation failure.
    ///
    /// Validation failures never leave the ledger mutated and are meant to be
    /// shown to the user rather than treated as faults.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveAmount(_)
                | Self::AmountBelowMinimum { .. }
                | Self::EmptyPitch
                | Self::AmountNotIncreased { .. }
                | Self::TopBidNotHigher { .. }
                | Self::DuplicateBid(_)
                | Self::InvalidTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn validation_errors_carry_codes() {
        let err = Error::AmountNotIncreased {
            current: dec!(500),
            proposed: dec!(450),
        };
        assert!(err.is_validation());
        assert_eq!(err.code(), "BID_AMOUNT_NOT_INCREASED");
        assert_eq!(
            err.to_string(),
            "new amount 450 must exceed the current bid of 500"
        );

        let err = Error::BidNotFound(BidId::from(9));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "bid 9 not found");
        assert!(!Error::BidIdExhausted.is_validation());
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = Error::InvalidTransition {
            from: BidStatus::Won,
            to: BidStatus::Active,
        };
        assert_eq!(err.to_string(), "cannot move a bid from `won` to `active`");
    }
}
