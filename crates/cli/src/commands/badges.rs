use gigboard_model::badge;
use serde_json::json;

use crate::config::DisplayOptions;

/// Show the badge catalog.
#[derive(Debug, clap::Args)]
pub struct Badges {
    /// Mark the badges earned by this creator.
    #[arg(long)]
    creator: Option<String>,
}

impl super::Command for Badges {
    fn is_session_required(&self) -> bool {
        self.creator.is_some()
    }

    fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let output = ctx.output();
        let earned = match self.creator.as_deref() {
            Some(id) => Some(&ctx.session()?.creator(id)?.earned_badges),
            None => None,
        };
        let rows = badge::catalog_with_status(|id| earned.is_some_and(|earned| earned.contains(id)))
            .map(|status| {
                json!({
                    "id": status.badge.id,
                    "icon": status.badge.icon,
                    "name": status.badge.name,
                    "description": status.badge.description,
                    "rarity": status.badge.rarity.as_str(),
                    "earned": earned.map(|_| if status.earned { "✓" } else { "" }),
                })
            });
        let mut columns = vec![
            ("icon", "Badge"),
            ("name", "Name"),
            ("rarity", "Rarity"),
            ("description", "Description"),
        ];
        if earned.is_some() {
            columns.push(("earned", "Earned"));
        }
        println!(
            "{}",
            output.display_many(rows, DisplayOptions::table_projection(columns))?
        );
        Ok(())
    }
}
