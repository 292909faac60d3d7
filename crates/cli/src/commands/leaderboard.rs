use gigboard_model::{badge, format, LeaderboardEntry, RankingType, Tier, TimeWindow};
use serde_json::{json, Value};

use crate::config::DisplayOptions;

/// Leaderboard commands.
#[derive(Debug, clap::Args)]
pub struct Leaderboard {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Show a leaderboard.
    Show {
        #[command(flatten)]
        partition: Partition,
        /// Only show the first N creators.
        #[arg(long, short)]
        top: Option<usize>,
    },
    /// Store the current ranking as the baseline for movement indicators.
    Snapshot {
        #[command(flatten)]
        partition: Partition,
    },
    /// Show where one creator stands.
    Creator {
        /// Creator id.
        id: String,
        #[command(flatten)]
        partition: Partition,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
struct Partition {
    /// Ranking type.
    #[arg(long, value_enum, default_value_t)]
    by: RankingType,
    /// Time window.
    #[arg(long, value_enum, default_value_t)]
    window: TimeWindow,
}

impl super::Command for Leaderboard {
    fn execute(&self, mut ctx: super::Context<'_>) -> eyre::Result<()> {
        let output = ctx.output();
        match &self.command {
            Command::Show { partition, top } => {
                let Partition { by, window } = *partition;
                let board = ctx.session()?.leaderboard();
                let entries = match top {
                    Some(n) => board.top(by, window, *n),
                    None => board.get_leaderboard(by, window),
                };
                let rows = entries.iter().map(|entry| entry_row(by, entry));
                println!(
                    "{}",
                    output.display_many(
                        rows,
                        DisplayOptions::table_projection([
                            ("rank", "#"),
                            ("movement", ""),
                            ("name", "Creator"),
                            ("tier.label", "Tier"),
                            ("niche", "Niche"),
                            ("value", by.value_label()),
                            ("badges", "Badges"),
                        ])
                    )?
                );
            }
            Command::Snapshot { partition } => {
                let Partition { by, window } = *partition;
                let snapshot = ctx
                    .session_mut()?
                    .leaderboard_mut()
                    .record_snapshot(by, window);
                tracing::info!(%by, %window, creators = snapshot.ranks.len(), "snapshot recorded");
                let rows = snapshot
                    .ranks
                    .iter()
                    .map(|(id, rank)| json!({ "rank": rank, "creator_id": id }));
                println!(
                    "{}",
                    output.display_many(
                        rows,
                        DisplayOptions::table_projection([("rank", "#"), ("creator_id", "Creator")])
                    )?
                );
            }
            Command::Creator { id, partition } => {
                let Partition { by, window } = *partition;
                let session = ctx.session()?;
                let entry = session
                    .leaderboard()
                    .entry(id, by, window)
                    .ok_or_else(|| eyre::eyre!("creator `{id}` not found"))?;
                let mut row = entry_row(by, &entry);
                if let Some(progress) = Tier::progress(&entry.stats.lifetime_earnings) {
                    row["next_tier"] = json!(format!(
                        "{} ({} to go)",
                        progress.next.label(),
                        format::usd(&progress.remaining)
                    ));
                }
                println!(
                    "{}",
                    output.display_one(
                        row,
                        DisplayOptions::table_projection([
                            ("rank", "Rank"),
                            ("previous_rank", "Previous Rank"),
                            ("movement", "Movement"),
                            ("name", "Creator"),
                            ("niche", "Niche"),
                            ("tier.label", "Tier"),
                            ("next_tier", "Next Tier"),
                            ("value", by.value_label()),
                            ("badges", "Badges"),
                        ])
                    )?
                );
            }
        }
        Ok(())
    }
}

fn entry_row(kind: RankingType, entry: &LeaderboardEntry) -> Value {
    let change = entry.position_change();
    let badges = entry
        .top_badges
        .iter()
        .filter_map(|id| badge::find(id))
        .map(|badge| badge.icon)
        .collect::<Vec<_>>();
    json!({
        "rank": entry.rank,
        "previous_rank": entry.previous_rank,
        "movement": change.indicator(),
        "change": change,
        "creator_id": entry.creator_id,
        "name": entry.name,
        "avatar": entry.avatar,
        "niche": entry.niche,
        "tier": {
            "id": entry.tier.as_str(),
            "label": format!("{} {}", entry.tier.icon(), entry.tier.label()),
            "color": entry.tier.color(),
        },
        "value": kind.format_value(&entry.stats),
        "badges": badges,
    })
}
