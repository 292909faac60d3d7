use std::collections::HashSet;

use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::Error;

use super::{Bid, BidId, BidStatus, NewBid, Outcome};

/// The bids placed by one creator.
///
/// Holds at most one bid per gig. Bids are kept in submission order.
#[derive(Debug, Clone)]
pub struct BidLedger {
    bids: Vec<Bid>,
    next_id: BidId,
}

impl Default for BidLedger {
    fn default() -> Self {
        Self {
            bids: Vec::new(),
            next_id: BidId::from(1),
        }
    }
}

impl BidLedger {
    /// Create from parts.
    ///
    /// `next_id` is raised above the largest id in `bids` if needed, so ids
    /// of withdrawn bids are never handed out again as long as the caller
    /// keeps `next_id` across sessions.
    ///
    /// # Errors
    /// Returns error if two bids share an id or a gig, an `outbid` bid does
    /// not carry a higher top bid, or no id is left after the largest one.
    pub fn from_parts(bids: Vec<Bid>, next_id: BidId) -> crate::Result<Self> {
        let mut ids = HashSet::with_capacity(bids.len());
        let mut gigs = HashSet::with_capacity(bids.len());
        let mut next = next_id;
        for bid in bids.iter() {
            if !ids.insert(bid.id) {
                return Err(Error::DuplicateBidId(bid.id));
            }
            if !gigs.insert(bid.gig_id.as_str()) {
                return Err(Error::DuplicateBid(bid.gig_id.clone()));
            }
            check_top_bid(bid.status, bid.bid_amount, bid.top_bid)?;
            if bid.id >= next {
                next = bid.id.next().ok_or(Error::BidIdExhausted)?;
            }
        }
        Ok(Self {
            bids,
            next_id: next,
        })
    }

    /// Get all bids in submission order.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// The id the next submitted bid will get.
    pub fn next_id(&self) -> BidId {
        self.next_id
    }

    /// Get the number of bids.
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    /// Is empty.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// Get the bid placed on the given gig.
    pub fn get_bid(&self, gig_id: &str) -> Option<&Bid> {
        self.bids.iter().find(|bid| bid.gig_id == gig_id)
    }

    /// Get bid by its id.
    pub fn get_bid_by_id(&self, id: BidId) -> Option<&Bid> {
        self.bids.iter().find(|bid| bid.id == id)
    }

    fn get_bid_mut(&mut self, id: BidId) -> crate::Result<&mut Bid> {
        self.bids
            .iter_mut()
            .find(|bid| bid.id == id)
            .ok_or(Error::BidNotFound(id))
    }

    /// Submit a bid, stamped with the current time.
    ///
    /// # Errors
    /// Returns error if the amount is not positive, the gig already has a
    /// bid in this ledger, an `outbid` bid does not carry a higher top bid,
    /// or the ledger ran out of ids.
    pub fn add_bid(&mut self, new_bid: NewBid) -> crate::Result<&Bid> {
        self.add_bid_at(new_bid, OffsetDateTime::now_utc())
    }

    /// Submit a bid with an explicit submission time.
    ///
    /// # Errors
    /// See [`BidLedger::add_bid`].
    pub fn add_bid_at(
        &mut self,
        new_bid: NewBid,
        submitted_at: OffsetDateTime,
    ) -> crate::Result<&Bid> {
        if new_bid.bid_amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(new_bid.bid_amount));
        }
        if self.get_bid(&new_bid.gig_id).is_some() {
            tracing::debug!(gig = %new_bid.gig_id, "rejected duplicate bid");
            return Err(Error::DuplicateBid(new_bid.gig_id));
        }
        check_top_bid(new_bid.status, new_bid.bid_amount, new_bid.top_bid)?;
        let id = self.next_id;
        self.next_id = id.next().ok_or(Error::BidIdExhausted)?;
        let bid = new_bid.into_bid(id, submitted_at);
        tracing::debug!(%id, gig = %bid.gig_id, amount = %bid.bid_amount, status = %bid.status, "bid submitted");
        self.bids.push(bid);
        Ok(&self.bids[self.bids.len() - 1])
    }

    /// Raise a bid to `amount`.
    ///
    /// The bid becomes `leading` when `amount` exceeds the known top bid (or
    /// no top bid is known), and `active` otherwise. Nothing changes when the
    /// update is rejected.
    ///
    /// # Errors
    /// Returns error if the bid does not exist, is closed, or `amount` does
    /// not exceed the current amount.
    pub fn update_bid(&mut self, id: BidId, amount: Decimal) -> crate::Result<&Bid> {
        let bid = self.get_bid_mut(id)?;
        let next = match bid.status.open() {
            Some(open) => open.raise(&amount, bid.top_bid.as_ref()),
            None => {
                return Err(Error::InvalidTransition {
                    from: bid.status,
                    to: BidStatus::Leading,
                })
            }
        };
        if amount <= bid.bid_amount {
            tracing::debug!(%id, current = %bid.bid_amount, proposed = %amount, "rejected raise");
            return Err(Error::AmountNotIncreased {
                current: bid.bid_amount,
                proposed: amount,
            });
        }
        tracing::debug!(%id, from = %bid.status, to = %next, %amount, "bid raised");
        bid.bid_amount = amount;
        bid.status = next;
        Ok(&*bid)
    }

    /// Record a higher competing bid.
    ///
    /// # Errors
    /// Returns error if the bid does not exist, is closed, or `top_bid` does
    /// not exceed the bid's amount.
    pub fn mark_outbid(&mut self, id: BidId, top_bid: Decimal) -> crate::Result<&Bid> {
        let bid = self.get_bid_mut(id)?;
        let next = bid.status.transition(BidStatus::Outbid)?.outbid();
        if top_bid <= bid.bid_amount {
            return Err(Error::TopBidNotHigher {
                current: bid.bid_amount,
                top_bid,
            });
        }
        tracing::debug!(%id, from = %bid.status, %top_bid, "bid outbid");
        bid.status = next;
        bid.top_bid = Some(top_bid);
        Ok(&*bid)
    }

    /// Close a bid once its gig resolves.
    ///
    /// # Errors
    /// Returns error if the bid does not exist or is already closed.
    pub fn resolve_bid(&mut self, id: BidId, outcome: Outcome) -> crate::Result<&Bid> {
        let bid = self.get_bid_mut(id)?;
        let next = bid.status.transition(outcome.into())?.resolve(outcome);
        tracing::debug!(%id, from = %bid.status, to = %next, "bid resolved");
        bid.status = next;
        Ok(&*bid)
    }

    /// Remove a bid. Returns the removed bid, or `None` if there was none.
    pub fn withdraw_bid(&mut self, id: BidId) -> Option<Bid> {
        let idx = self.bids.iter().position(|bid| bid.id == id)?;
        let bid = self.bids.remove(idx);
        tracing::debug!(%id, gig = %bid.gig_id, "bid withdrawn");
        Some(bid)
    }

    /// Summarize the ledger.
    pub fn summary(&self) -> LedgerSummary {
        self.bids
            .iter()
            .fold(LedgerSummary::default(), |mut summary, bid| {
                match bid.status {
                    BidStatus::Active => summary.active += 1,
                    BidStatus::Leading => summary.leading += 1,
                    BidStatus::Outbid => summary.outbid += 1,
                    BidStatus::Won => summary.won += 1,
                    BidStatus::Lost => summary.lost += 1,
                }
                if bid.is_open() {
                    summary.committed += bid.bid_amount;
                }
                summary
            })
    }
}

/// An `outbid` bid must know a competing bid above its own amount.
fn check_top_bid(
    status: BidStatus,
    amount: Decimal,
    top_bid: Option<Decimal>,
) -> crate::Result<()> {
    match (status, top_bid) {
        (BidStatus::Outbid, Some(top_bid)) if top_bid > amount => Ok(()),
        (BidStatus::Outbid, top_bid) => Err(Error::TopBidNotHigher {
            current: amount,
            top_bid: top_bid.unwrap_or_default(),
        }),
        _ => Ok(()),
    }
}

/// Counts of bids per status.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Number of active bids.
    pub active: usize,
    /// Number of leading bids.
    pub leading: usize,
    /// Number of outbid bids.
    pub outbid: usize,
    /// Number of won bids.
    pub won: usize,
    /// Number of lost bids.
    pub lost: usize,
    /// Total amount offered on open bids.
    pub committed: Decimal,
}

impl LedgerSummary {
    /// Number of bids still open.
    pub fn open(&self) -> usize {
        self.active + self.leading + self.outbid
    }

    /// Share of resolved bids that were won, in percent.
    pub fn win_rate(&self) -> Option<Decimal> {
        let resolved = self.won + self.lost;
        if resolved == 0 {
            return None;
        }
        Some(Decimal::from(self.won) * Decimal::from(100) / Decimal::from(resolved))
    }
}
