use std::fmt;

use rust_decimal::Decimal;

/// Bid status.
///
/// `Active`, `Leading` and `Outbid` are open states; `Won` and `Lost` are
/// terminal. Moves between statuses go through [`OpenStatus`], which only
/// exists for open bids, so a closed bid cannot be raised, outbid or
/// resolved again.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter, strum::EnumString))]
#[cfg_attr(feature = "strum", strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BidStatus {
    /// Submitted, no information about competing bids.
    #[default]
    Active,
    /// Currently the highest known bid.
    Leading,
    /// A competing bid is higher.
    Outbid,
    /// The gig was awarded to this bid.
    Won,
    /// The gig was awarded elsewhere.
    Lost,
}

impl BidStatus {
    /// Get the status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Leading => "leading",
            Self::Outbid => "outbid",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Returns the open status, or `None` for a terminal status.
    pub fn open(self) -> Option<OpenStatus> {
        match self {
            Self::Active => Some(OpenStatus::Active),
            Self::Leading => Some(OpenStatus::Leading),
            Self::Outbid => Some(OpenStatus::Outbid),
            Self::Won | Self::Lost => None,
        }
    }

    /// Returns whether the status is terminal.
    pub fn is_terminal(&self) -> bool {
        self.open().is_none()
    }

    /// Returns whether moving from `self` to `to` is allowed.
    ///
    /// Any open status may move to any status; terminal statuses never move.
    pub fn can_transition_to(&self, to: BidStatus) -> bool {
        self.transition(to).is_ok()
    }

    /// Check a move from `self` to `to`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTransition`](crate::Error::InvalidTransition)
    /// if the move is not allowed.
    pub fn transition(self, to: BidStatus) -> crate::Result<OpenStatus> {
        match self.open() {
            Some(open) => Ok(open),
            None => Err(crate::Error::InvalidTransition { from: self, to }),
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a bid that is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenStatus {
    /// See [`BidStatus::Active`].
    Active,
    /// See [`BidStatus::Leading`].
    Leading,
    /// See [`BidStatus::Outbid`].
    Outbid,
}

impl OpenStatus {
    /// Status after raising the bid to `amount`.
    ///
    /// The bid leads when it beats the known top bid, or when no top bid is
    /// known.
    pub fn raise(self, amount: &Decimal, top_bid: Option<&Decimal>) -> BidStatus {
        match top_bid {
            Some(top_bid) if amount <= top_bid => BidStatus::Active,
            _ => BidStatus::Leading,
        }
    }

    /// Status after a higher competing bid arrives.
    pub fn outbid(self) -> BidStatus {
        BidStatus::Outbid
    }

    /// Status after the gig's deadline resolves.
    pub fn resolve(self, outcome: Outcome) -> BidStatus {
        outcome.into()
    }
}

impl From<OpenStatus> for BidStatus {
    fn from(status: OpenStatus) -> Self {
        match status {
            OpenStatus::Active => Self::Active,
            OpenStatus::Leading => Self::Leading,
            OpenStatus::Outbid => Self::Outbid,
        }
    }
}

/// Resolution of a gig for a bid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter, strum::EnumString))]
#[cfg_attr(feature = "strum", strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Awarded to the bid.
    Won,
    /// Awarded elsewhere.
    Lost,
}

impl From<Outcome> for BidStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn terminal_statuses_never_move() {
        for to in BidStatus::iter() {
            assert!(!BidStatus::Won.can_transition_to(to));
            assert!(!BidStatus::Lost.can_transition_to(to));
            assert!(BidStatus::Active.can_transition_to(to));
            assert!(BidStatus::Outbid.can_transition_to(to));
        }
        assert_eq!(
            BidStatus::Won.transition(BidStatus::Active),
            Err(crate::Error::InvalidTransition {
                from: BidStatus::Won,
                to: BidStatus::Active,
            })
        );
    }

    #[test]
    fn raise_leads_only_above_top_bid() {
        let open = OpenStatus::Outbid;
        assert_eq!(open.raise(&dec!(600), None), BidStatus::Leading);
        assert_eq!(open.raise(&dec!(600), Some(&dec!(550))), BidStatus::Leading);
        assert_eq!(open.raise(&dec!(550), Some(&dec!(550))), BidStatus::Active);
        assert_eq!(open.raise(&dec!(500), Some(&dec!(550))), BidStatus::Active);
    }
}
