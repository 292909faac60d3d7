use std::fmt;

use rust_decimal::Decimal;

use crate::{bid::NewBid, format, Error};

/// Budget range of an opportunity, in dollars.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    /// Minimum budget.
    pub min: Decimal,
    /// Maximum budget.
    pub max: Decimal,
}

impl BudgetRange {
    /// Create a new budget range.
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Returns whether `amount` lies inside the range.
    pub fn contains(&self, amount: &Decimal) -> bool {
        *amount >= self.min && *amount <= self.max
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format::usd(&self.min), format::usd(&self.max))
    }
}

/// A brand-posted campaign creators can bid on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opportunity {
    /// Gig id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// Brand logo.
    #[cfg_attr(feature = "serde", serde(default))]
    pub brand_logo: String,
    /// Category.
    pub category: String,
    /// Budget range.
    pub budget: BudgetRange,
    /// Time left display.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_left: String,
    /// Requirements.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Vec<String>,
}

impl Opportunity {
    /// Draft a bid on this opportunity.
    ///
    /// The display fields are copied from the opportunity as they are now.
    ///
    /// # Errors
    /// Returns error if `amount` is not positive, below the minimum budget,
    /// or the pitch is blank.
    pub fn draft_bid(&self, amount: Decimal, pitch: &str) -> crate::Result<NewBid> {
        if amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(amount));
        }
        if amount < self.budget.min {
            return Err(Error::AmountBelowMinimum {
                minimum: self.budget.min,
                proposed: amount,
            });
        }
        let pitch = pitch.trim();
        if pitch.is_empty() {
            return Err(Error::EmptyPitch);
        }
        Ok(NewBid::builder()
            .gig_id(self.id.clone())
            .gig_title(self.title.clone())
            .brand(self.brand.clone())
            .brand_logo(self.brand_logo.clone())
            .category(self.category.clone())
            .budget_range(self.budget.to_string())
            .bid_amount(amount)
            .pitch(pitch)
            .time_left(self.time_left.clone())
            .build())
    }
}
