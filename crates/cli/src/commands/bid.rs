use gigboard_model::{format, BidId, BidStatus, Outcome};
use rust_decimal::Decimal;
use serde_json::json;

use crate::config::DisplayOptions;

use super::utils::{bid_detail, bid_row, bid_table};

/// Bid ledger commands.
#[derive(Debug, clap::Args)]
pub struct Bid {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Place a bid on a gig.
    Place {
        /// Gig id.
        gig: String,
        /// Bid amount in dollars.
        amount: Decimal,
        /// Pitch to the brand.
        #[arg(long, short)]
        pitch: String,
    },
    /// Raise the amount of an open bid.
    Raise {
        /// Bid id.
        id: BidId,
        /// New amount, which must exceed the current one.
        amount: Decimal,
    },
    /// Record that a competitor bid above us.
    Outbid {
        /// Bid id.
        id: BidId,
        /// The competing top bid.
        top_bid: Decimal,
    },
    /// Record the brand's decision.
    Resolve {
        /// Bid id.
        id: BidId,
        #[arg(value_enum)]
        outcome: Outcome,
    },
    /// Withdraw a bid.
    Withdraw {
        /// Bid id.
        id: BidId,
    },
    /// Show the bid on a gig.
    Show {
        /// Gig id.
        gig: String,
    },
    /// List bids.
    List {
        /// Only list bids with this status.
        #[arg(long, value_enum)]
        status: Option<BidStatus>,
    },
    /// Summarize the ledger.
    Summary,
}

impl super::Command for Bid {
    fn execute(&self, mut ctx: super::Context<'_>) -> eyre::Result<()> {
        let output = ctx.output();
        let session = ctx.session_mut()?;
        match &self.command {
            Command::Place { gig, amount, pitch } => {
                let opportunity = session.gig(gig)?;
                let draft = opportunity.draft_bid(*amount, pitch)?;
                if !opportunity.budget.contains(amount) {
                    tracing::warn!(
                        %amount,
                        max = %opportunity.budget.max,
                        "bid is above the gig's budget"
                    );
                }
                let bid = session.ledger_mut().add_bid(draft)?;
                tracing::info!(id = %bid.id, gig = %bid.gig_id, amount = %bid.bid_amount, "bid placed");
                println!("{}", output.display_one(bid_row(bid)?, bid_detail())?);
            }
            Command::Raise { id, amount } => {
                let bid = session.ledger_mut().update_bid(*id, *amount)?;
                tracing::info!(%id, amount = %bid.bid_amount, status = %bid.status, "bid raised");
                println!("{}", output.display_one(bid_row(bid)?, bid_detail())?);
            }
            Command::Outbid { id, top_bid } => {
                let bid = session.ledger_mut().mark_outbid(*id, *top_bid)?;
                tracing::info!(%id, top_bid = %top_bid, "bid outbid");
                println!("{}", output.display_one(bid_row(bid)?, bid_detail())?);
            }
            Command::Resolve { id, outcome } => {
                let bid = session.ledger_mut().resolve_bid(*id, *outcome)?;
                tracing::info!(%id, status = %bid.status, "bid resolved");
                println!("{}", output.display_one(bid_row(bid)?, bid_detail())?);
            }
            Command::Withdraw { id } => match session.ledger_mut().withdraw_bid(*id) {
                Some(bid) => {
                    tracing::info!(%id, gig = %bid.gig_id, "bid withdrawn");
                    println!("{}", output.display_one(bid_row(&bid)?, bid_detail())?);
                }
                None => tracing::warn!(%id, "no such bid, nothing withdrawn"),
            },
            Command::Show { gig } => {
                let bid = session
                    .ledger()
                    .get_bid(gig)
                    .ok_or_else(|| eyre::eyre!("no bid on gig `{gig}`"))?;
                println!("{}", output.display_one(bid_row(bid)?, bid_detail())?);
            }
            Command::List { status } => {
                let rows = session
                    .ledger()
                    .bids()
                    .iter()
                    .filter(|bid| status.map_or(true, |status| bid.status == status))
                    .map(bid_row)
                    .collect::<eyre::Result<Vec<_>>>()?;
                println!("{}", output.display_many(rows, bid_table())?);
            }
            Command::Summary => {
                let summary = session.ledger().summary();
                let win_rate = summary
                    .win_rate()
                    .map(|rate| format!("{}%", format::fixed(&rate, 1)));
                let value = json!({
                    "open": summary.open(),
                    "active": summary.active,
                    "leading": summary.leading,
                    "outbid": summary.outbid,
                    "won": summary.won,
                    "lost": summary.lost,
                    "committed": format::usd(&summary.committed),
                    "win_rate": win_rate,
                });
                println!(
                    "{}",
                    output.display_one(
                        value,
                        DisplayOptions::table_projection([
                            ("open", "Open"),
                            ("active", "Active"),
                            ("leading", "Leading"),
                            ("outbid", "Outbid"),
                            ("won", "Won"),
                            ("lost", "Lost"),
                            ("committed", "Committed"),
                            ("win_rate", "Win Rate"),
                        ])
                    )?
                );
            }
        }
        Ok(())
    }
}
