/// Rank movement.
pub mod position;

use std::{collections::HashSet, fmt};

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{
    creator::{CreatorId, CreatorProfile, CreatorStats},
    format,
    tier::Tier,
    Error,
};

pub use self::position::{position_change, Direction, PositionChange};

/// Ranking criterion.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter, strum::EnumString))]
#[cfg_attr(feature = "strum", strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingType {
    /// By lifetime earnings.
    #[default]
    Earners,
    /// By current streak.
    Streak,
    /// By repeat brand rate.
    Rating,
    /// By monthly growth.
    Rising,
}

impl RankingType {
    /// Get the ranking name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earners => "earners",
            Self::Streak => "streak",
            Self::Rating => "rating",
            Self::Rising => "rising",
        }
    }

    /// Label of the ranked value.
    pub fn value_label(&self) -> &'static str {
        match self {
            Self::Earners => "Earnings",
            Self::Streak => "Streak",
            Self::Rating => "Repeat Brands",
            Self::Rising => "Growth",
        }
    }

    /// The value creators are ranked by, larger is better.
    ///
    /// Missing monthly growth counts as zero.
    pub fn sort_key(&self, stats: &CreatorStats) -> Decimal {
        match self {
            Self::Earners => stats.lifetime_earnings,
            Self::Streak => Decimal::from(stats.current_streak),
            Self::Rating => stats.repeat_brand_rate,
            Self::Rising => stats.monthly_growth.unwrap_or_default(),
        }
    }

    /// Format the ranked value for display.
    pub fn format_value(&self, stats: &CreatorStats) -> String {
        match self {
            Self::Earners => {
                let thousands = stats.lifetime_earnings / Decimal::from(1000);
                format!("${}K", format::fixed(&thousands, 1))
            }
            Self::Streak => format!("🔥 {} days", stats.current_streak),
            Self::Rating => format!("❤️ {}%", format::plain(&stats.repeat_brand_rate)),
            Self::Rising => format!(
                "↑{}%",
                format::plain(&stats.monthly_growth.unwrap_or_default())
            ),
        }
    }
}

impl fmt::Display for RankingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the value a leaderboard of the given type ranks by.
pub fn format_leaderboard_value(kind: RankingType, stats: &CreatorStats) -> String {
    kind.format_value(stats)
}

/// Time window of a leaderboard.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter, strum::EnumString))]
#[cfg_attr(feature = "strum", strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    /// This week.
    Week,
    /// This month.
    Month,
    /// All time.
    #[default]
    All,
}

impl TimeWindow {
    /// Get the window name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a leaderboard.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Rank, starting at 1.
    pub rank: u32,
    /// Rank in the prior snapshot.
    pub previous_rank: u32,
    /// Creator id.
    pub creator_id: CreatorId,
    /// Display name.
    pub name: String,
    /// Avatar.
    pub avatar: String,
    /// Earnings tier.
    pub tier: Tier,
    /// Content niche.
    pub niche: String,
    /// Statistics.
    pub stats: CreatorStats,
    /// Featured badges, in display order.
    pub top_badges: Vec<String>,
}

impl LeaderboardEntry {
    /// Movement since the prior snapshot.
    pub fn position_change(&self) -> PositionChange {
        PositionChange::between(self.rank, self.previous_rank)
    }
}

/// A stored ranking of one (type, window) partition.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Ranking type.
    pub kind: RankingType,
    /// Time window.
    pub window: TimeWindow,
    /// Rank of each creator.
    pub ranks: IndexMap<CreatorId, u32>,
}

/// Creator leaderboard.
///
/// Ranks the stored creators on demand and remembers one prior snapshot per
/// (type, window) partition for movement indicators.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    creators: Vec<CreatorProfile>,
    snapshots: IndexMap<(RankingType, TimeWindow), IndexMap<CreatorId, u32>>,
}

impl Leaderboard {
    /// Create a leaderboard over `creators`.
    ///
    /// # Errors
    /// Returns error if two creators share an id.
    pub fn new(creators: Vec<CreatorProfile>) -> crate::Result<Self> {
        let mut ids = HashSet::with_capacity(creators.len());
        for creator in creators.iter() {
            if !ids.insert(creator.id.as_str()) {
                return Err(Error::DuplicateCreator(creator.id.clone()));
            }
        }
        Ok(Self {
            creators,
            snapshots: Default::default(),
        })
    }

    /// Get all creators in stored order.
    pub fn creators(&self) -> &[CreatorProfile] {
        &self.creators
    }

    /// Get creator by id.
    pub fn creator(&self, id: &str) -> Option<&CreatorProfile> {
        self.creators.iter().find(|creator| creator.id == id)
    }

    /// Creators sorted by the ranking key, best first.
    ///
    /// Ties keep the stored order.
    fn ranked(&self, kind: RankingType) -> Vec<&CreatorProfile> {
        let mut ranked = self.creators.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| kind.sort_key(&b.stats).cmp(&kind.sort_key(&a.stats)));
        ranked
    }

    /// Rank all creators for the given type and window.
    ///
    /// Ranks are dense, from 1 to the number of creators. The previous rank
    /// comes from the partition's snapshot and equals the current rank when
    /// there is none.
    pub fn get_leaderboard(
        &self,
        kind: RankingType,
        window: TimeWindow,
    ) -> Vec<LeaderboardEntry> {
        let snapshot = self.snapshots.get(&(kind, window));
        self.ranked(kind)
            .into_iter()
            .zip(1u32..)
            .map(|(creator, rank)| {
                let previous_rank = snapshot
                    .and_then(|ranks| ranks.get(&creator.id))
                    .copied()
                    .unwrap_or(rank);
                LeaderboardEntry {
                    rank,
                    previous_rank,
                    creator_id: creator.id.clone(),
                    name: creator.name.clone(),
                    avatar: creator.avatar.clone(),
                    tier: creator.tier(),
                    niche: creator.niche.clone(),
                    stats: creator.stats.clone(),
                    top_badges: creator.top_badges.clone(),
                }
            })
            .collect()
    }

    /// The first `n` entries of a leaderboard.
    pub fn top(&self, kind: RankingType, window: TimeWindow, n: usize) -> Vec<LeaderboardEntry> {
        let mut entries = self.get_leaderboard(kind, window);
        entries.truncate(n);
        entries
    }

    /// The entry of one creator.
    pub fn entry(
        &self,
        creator_id: &str,
        kind: RankingType,
        window: TimeWindow,
    ) -> Option<LeaderboardEntry> {
        self.get_leaderboard(kind, window)
            .into_iter()
            .find(|entry| entry.creator_id == creator_id)
    }

    /// Get the stored snapshot of a partition.
    pub fn snapshot(
        &self,
        kind: RankingType,
        window: TimeWindow,
    ) -> Option<&IndexMap<CreatorId, u32>> {
        self.snapshots.get(&(kind, window))
    }

    /// Get all stored snapshots.
    pub fn snapshots(&self) -> impl Iterator<Item = Snapshot> + '_ {
        self.snapshots
            .iter()
            .map(|(&(kind, window), ranks)| Snapshot {
                kind,
                window,
                ranks: ranks.clone(),
            })
    }

    /// Install a prior snapshot, replacing any existing one.
    pub fn insert_snapshot(&mut self, snapshot: Snapshot) -> &mut Self {
        self.snapshots
            .insert((snapshot.kind, snapshot.window), snapshot.ranks);
        self
    }

    /// Store the current ranking of a partition as its prior snapshot.
    pub fn record_snapshot(&mut self, kind: RankingType, window: TimeWindow) -> Snapshot {
        let ranks = self
            .ranked(kind)
            .into_iter()
            .zip(1u32..)
            .map(|(creator, rank)| (creator.id.clone(), rank))
            .collect::<IndexMap<_, _>>();
        tracing::debug!(%kind, %window, creators = ranks.len(), "recorded leaderboard snapshot");
        let snapshot = Snapshot {
            kind,
            window,
            ranks,
        };
        self.insert_snapshot(snapshot.clone());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn creator(
        id: &str,
        earnings: Decimal,
        streak: u32,
        growth: Option<Decimal>,
    ) -> CreatorProfile {
        let stats = CreatorStats {
            lifetime_earnings: earnings,
            current_streak: streak,
            repeat_brand_rate: dec!(60),
            monthly_growth: growth,
            ..Default::default()
        };
        CreatorProfile::builder()
            .id(id)
            .name(id.to_uppercase())
            .stats(stats)
            .build()
    }

    fn board() -> Leaderboard {
        Leaderboard::new(vec![
            creator("ana", dec!(42000), 3, Some(dec!(12))),
            creator("ben", dec!(150000), 7, None),
            creator("cai", dec!(42000), 14, Some(dec!(30))),
            creator("dee", dec!(900), 7, Some(dec!(5.5))),
        ])
        .unwrap()
    }

    fn ids(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.creator_id.as_str()).collect()
    }

    #[test]
    fn ranks_are_dense_and_ties_keep_stored_order() {
        let board = board();
        let entries = board.get_leaderboard(RankingType::Earners, TimeWindow::All);
        assert_eq!(ids(&entries), ["ben", "ana", "cai", "dee"]);
        assert_eq!(
            entries.iter().map(|e| e.rank).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(entries[0].tier, Tier::Elite);
        assert_eq!(entries[3].tier, Tier::Rookie);
        assert_eq!(entries, board.get_leaderboard(RankingType::Earners, TimeWindow::All));
    }

    #[test]
    fn each_type_uses_its_own_key() {
        let board = board();
        let streak = board.get_leaderboard(RankingType::Streak, TimeWindow::Week);
        assert_eq!(ids(&streak), ["cai", "ben", "dee", "ana"]);
        let rising = board.get_leaderboard(RankingType::Rising, TimeWindow::Month);
        assert_eq!(ids(&rising), ["cai", "ana", "dee", "ben"]);
        let rating = board.get_leaderboard(RankingType::Rating, TimeWindow::All);
        assert_eq!(ids(&rating), ["ana", "ben", "cai", "dee"]);
    }

    #[test]
    fn previous_rank_comes_from_snapshot() {
        let mut board = board();
        let entries = board.get_leaderboard(RankingType::Streak, TimeWindow::Week);
        assert!(entries.iter().all(|e| e.previous_rank == e.rank));

        board.insert_snapshot(Snapshot {
            kind: RankingType::Streak,
            window: TimeWindow::Week,
            ranks: [("ana".to_string(), 1), ("cai".to_string(), 3)]
                .into_iter()
                .collect(),
        });
        let entries = board.get_leaderboard(RankingType::Streak, TimeWindow::Week);
        let cai = &entries[0];
        assert_eq!(
            cai.position_change(),
            PositionChange {
                direction: Direction::Up,
                amount: 2
            }
        );
        let ana = &entries[3];
        assert_eq!(ana.position_change().direction, Direction::Down);
        // Creators missing from the snapshot show no movement.
        assert_eq!(entries[1].position_change(), PositionChange::SAME);

        // Other partitions are unaffected.
        let month = board.get_leaderboard(RankingType::Streak, TimeWindow::Month);
        assert!(month.iter().all(|e| e.previous_rank == e.rank));
    }

    #[test]
    fn record_snapshot_freezes_current_order() {
        let mut board = board();
        let snapshot = board.record_snapshot(RankingType::Earners, TimeWindow::All);
        assert_eq!(snapshot.ranks.get("ben"), Some(&1));
        assert_eq!(board.snapshots().count(), 1);
        let entries = board.get_leaderboard(RankingType::Earners, TimeWindow::All);
        assert!(entries.iter().all(|e| !e.position_change().is_moved()));
    }

    #[test]
    fn lookups_by_creator() {
        let board = board();
        let entry = board
            .entry("cai", RankingType::Streak, TimeWindow::All)
            .expect("cai is ranked");
        assert_eq!(entry.rank, 1);
        assert!(board.entry("zed", RankingType::Streak, TimeWindow::All).is_none());
        assert_eq!(board.top(RankingType::Earners, TimeWindow::All, 2).len(), 2);
        assert_eq!(board.top(RankingType::Earners, TimeWindow::All, 10).len(), 4);
    }

    #[test]
    fn duplicate_creators_are_rejected() {
        let err = Leaderboard::new(vec![
            creator("ana", dec!(1), 0, None),
            creator("ana", dec!(2), 0, None),
        ])
        .unwrap_err();
        assert_eq!(err, Error::DuplicateCreator("ana".to_string()));
    }

    #[test]
    fn values_are_formatted_per_type() {
        let stats = CreatorStats {
            lifetime_earnings: dec!(150000),
            current_streak: 7,
            repeat_brand_rate: dec!(85.0),
            monthly_growth: None,
            ..Default::default()
        };
        assert_eq!(format_leaderboard_value(RankingType::Earners, &stats), "$150.0K");
        assert_eq!(format_leaderboard_value(RankingType::Streak, &stats), "🔥 7 days");
        assert_eq!(format_leaderboard_value(RankingType::Rating, &stats), "❤️ 85%");
        assert_eq!(format_leaderboard_value(RankingType::Rising, &stats), "↑0%");

        let stats = CreatorStats {
            lifetime_earnings: dec!(42350),
            monthly_growth: Some(dec!(18.5)),
            ..Default::default()
        };
        assert_eq!(format_leaderboard_value(RankingType::Earners, &stats), "$42.4K");
        assert_eq!(format_leaderboard_value(RankingType::Rising, &stats), "↑18.5%");
    }
}
