use gigboard_model::format;
use rust_decimal::Decimal;
use serde_json::json;
use strum::IntoEnumIterator;

use crate::config::DisplayOptions;

/// Classify lifetime earnings into a tier.
#[derive(Debug, clap::Args)]
pub struct Tier {
    /// Lifetime earnings in dollars.
    #[arg(required_unless_present = "ladder")]
    earnings: Option<Decimal>,
    /// List every tier with its threshold instead.
    #[arg(long)]
    ladder: bool,
}

impl super::Command for Tier {
    fn is_session_required(&self) -> bool {
        false
    }

    fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let output = ctx.output();
        match self.earnings {
            Some(earnings) if !self.ladder => {
                let tier = gigboard_model::tier_from_earnings(&earnings);
                let progress = gigboard_model::Tier::progress(&earnings);
                let value = json!({
                    "earnings": format::usd(&earnings),
                    "tier": tier.as_str(),
                    "label": format!("{} {}", tier.icon(), tier.label()),
                    "color": tier.color(),
                    "next": progress.map(|p| p.next.label()),
                    "remaining": progress.map(|p| format::usd(&p.remaining)),
                    "progress": progress.map(|p| format!("{}%", format::fixed(&p.percent, 1))),
                });
                println!(
                    "{}",
                    output.display_one(
                        value,
                        DisplayOptions::table_projection([
                            ("earnings", "Earnings"),
                            ("label", "Tier"),
                            ("color", "Color"),
                            ("next", "Next Tier"),
                            ("remaining", "Remaining"),
                            ("progress", "Progress"),
                        ])
                    )?
                );
            }
            _ => {
                let rows = gigboard_model::Tier::iter().map(|tier| {
                    json!({
                        "tier": tier.as_str(),
                        "label": format!("{} {}", tier.icon(), tier.label()),
                        "min_earnings": format::usd(&tier.min_earnings()),
                        "color": tier.color(),
                    })
                });
                println!(
                    "{}",
                    output.display_many(
                        rows,
                        DisplayOptions::table_projection([
                            ("label", "Tier"),
                            ("min_earnings", "From"),
                            ("color", "Color"),
                        ])
                    )?
                );
            }
        }
        Ok(())
    }
}
