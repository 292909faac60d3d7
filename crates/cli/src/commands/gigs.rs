use gigboard_model::format;
use serde_json::json;

use crate::config::DisplayOptions;

/// List open gigs.
#[derive(Debug, clap::Args)]
pub struct Gigs {
    /// Only list gigs in this category.
    #[arg(long)]
    category: Option<String>,
}

impl super::Command for Gigs {
    fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let output = ctx.output();
        let session = ctx.session()?;
        let rows = session
            .gigs()
            .iter()
            .filter(|gig| {
                self.category
                    .as_deref()
                    .map_or(true, |category| gig.category.eq_ignore_ascii_case(category))
            })
            .map(|gig| {
                let bid = session.ledger().get_bid(&gig.id);
                let brand = format!("{} {}", gig.brand_logo, gig.brand);
                json!({
                    "id": gig.id,
                    "title": gig.title,
                    "brand": brand.trim(),
                    "category": gig.category,
                    "budget": gig.budget.to_string(),
                    "time_left": gig.time_left,
                    "requirements": gig.requirements,
                    "my_bid": bid.map(|bid| format!("{} ({})", format::usd(&bid.bid_amount), bid.status)),
                })
            });
        println!(
            "{}",
            output.display_many(
                rows,
                DisplayOptions::table_projection([
                    ("id", "ID"),
                    ("title", "Gig"),
                    ("brand", "Brand"),
                    ("category", "Category"),
                    ("budget", "Budget"),
                    ("time_left", "Time Left"),
                    ("my_bid", "My Bid"),
                ])
            )?
        );
        Ok(())
    }
}
