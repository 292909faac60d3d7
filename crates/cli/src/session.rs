use std::path::{Path, PathBuf};

use eyre::OptionExt;
use gigboard_model::{
    leaderboard::Snapshot, Bid, BidId, BidLedger, CreatorProfile, Leaderboard, Opportunity,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;

const BUNDLED_DATASET: &str = include_str!("../data/marketplace.toml");

/// Gigs, creators and optional prior snapshots.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Dataset {
    #[serde(default)]
    gigs: Vec<Opportunity>,
    #[serde(default)]
    creators: Vec<CreatorProfile>,
    #[serde(default)]
    snapshots: Vec<Snapshot>,
}

impl Dataset {
    pub(crate) fn bundled() -> eyre::Result<Self> {
        Self::from_toml(BUNDLED_DATASET)
    }

    pub(crate) fn from_toml(s: &str) -> eyre::Result<Self> {
        toml::from_str(s).map_err(|e| eyre::eyre!("failed to parse dataset: {e}"))
    }

    fn read(path: Option<&Path>) -> eyre::Result<Self> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => Self::bundled(),
        }
    }
}

/// Persisted ledger state.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    next_bid_id: BidId,
    #[serde(default)]
    bids: Vec<Bid>,
    #[serde(default)]
    snapshots: Vec<Snapshot>,
}

/// Owns the ledger, the leaderboard and the gig catalog for one invocation.
#[derive(Debug)]
pub(crate) struct Session {
    gigs: Vec<Opportunity>,
    ledger: BidLedger,
    leaderboard: Leaderboard,
    path: PathBuf,
    dirty: bool,
}

impl Session {
    pub(crate) fn load(config: &Config) -> eyre::Result<Self> {
        let dataset = Dataset::read(config.data_path()?.as_deref())?;
        let path = config.ledger_path()?;
        let file = if path.exists() {
            let file = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            Some(file)
        } else {
            tracing::info!(path = %path.display(), "no ledger file yet, starting empty");
            None
        };
        Self::from_parts(dataset, file, path)
    }

    fn from_parts(dataset: Dataset, file: Option<LedgerFile>, path: PathBuf) -> eyre::Result<Self> {
        let Dataset {
            gigs,
            creators,
            snapshots,
        } = dataset;
        let (ledger, recorded) = match file {
            Some(file) => (
                BidLedger::from_parts(file.bids, file.next_bid_id)?,
                file.snapshots,
            ),
            None => (BidLedger::default(), Vec::new()),
        };
        let mut leaderboard = Leaderboard::new(creators)?;
        // Snapshots recorded through the CLI replace the dataset's.
        for snapshot in snapshots.into_iter().chain(recorded) {
            leaderboard.insert_snapshot(snapshot);
        }
        tracing::debug!(
            gigs = gigs.len(),
            bids = ledger.len(),
            creators = leaderboard.creators().len(),
            "session loaded"
        );
        Ok(Self {
            gigs,
            ledger,
            leaderboard,
            path,
            dirty: false,
        })
    }

    pub(crate) fn gigs(&self) -> &[Opportunity] {
        &self.gigs
    }

    pub(crate) fn gig(&self, id: &str) -> eyre::Result<&Opportunity> {
        self.gigs
            .iter()
            .find(|gig| gig.id == id)
            .ok_or_eyre(format!("gig `{id}` not found"))
    }

    pub(crate) fn ledger(&self) -> &BidLedger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut BidLedger {
        self.dirty = true;
        &mut self.ledger
    }

    pub(crate) fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub(crate) fn leaderboard_mut(&mut self) -> &mut Leaderboard {
        self.dirty = true;
        &mut self.leaderboard
    }

    pub(crate) fn creator(&self, id: &str) -> eyre::Result<&CreatorProfile> {
        self.leaderboard
            .creator(id)
            .ok_or_eyre(format!("creator `{id}` not found"))
    }

    /// Write the ledger file if anything was borrowed mutably.
    pub(crate) fn save(&mut self) -> eyre::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let file = LedgerFile {
            next_bid_id: self.ledger.next_id(),
            bids: self.ledger.bids().to_vec(),
            snapshots: self.leaderboard.snapshots().collect(),
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(&file)?)?;
        std::fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), bids = file.bids.len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gigboard_model::{BidStatus, RankingType, TimeWindow};
    use rust_decimal_macros::dec;

    use super::*;

    fn temp_ledger(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gigboard-{name}-{}", std::process::id()))
            .join("ledger.json")
    }

    #[test]
    fn bundled_dataset_is_consistent() -> eyre::Result<()> {
        let dataset = Dataset::bundled()?;
        assert!(!dataset.gigs.is_empty());
        let session = Session::from_parts(dataset, None, temp_ledger("bundled"))?;
        for gig in session.gigs() {
            assert!(gig.budget.min <= gig.budget.max, "{}", gig.id);
        }
        assert!(session.ledger().is_empty());
        assert!(!session
            .leaderboard()
            .get_leaderboard(RankingType::Earners, TimeWindow::All)
            .is_empty());
        Ok(())
    }

    #[test]
    fn mutations_persist_across_sessions() -> eyre::Result<()> {
        let path = temp_ledger("persist");
        let mut session = Session::from_parts(Dataset::bundled()?, None, path.clone())?;
        let gig = session.gigs()[0].clone();
        let id = session
            .ledger_mut()
            .add_bid(gig.draft_bid(gig.budget.min, "Short pitch.")?)?
            .id;
        session.ledger_mut().mark_outbid(id, gig.budget.min + dec!(50))?;
        session
            .leaderboard_mut()
            .record_snapshot(RankingType::Streak, TimeWindow::Month);
        session.save()?;

        let file = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        let reloaded = Session::from_parts(Dataset::bundled()?, Some(file), path.clone())?;
        let bid = reloaded.ledger().get_bid(&gig.id).ok_or_eyre("bid missing")?;
        assert_eq!(bid.id, id);
        assert_eq!(bid.status, BidStatus::Outbid);
        assert!(reloaded.ledger().next_id() > id);
        assert!(reloaded
            .leaderboard()
            .snapshot(RankingType::Streak, TimeWindow::Month)
            .is_some());

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir)?;
        }
        Ok(())
    }

    #[test]
    fn clean_session_writes_nothing() -> eyre::Result<()> {
        let path = temp_ledger("clean");
        let mut session = Session::from_parts(Dataset::default(), None, path.clone())?;
        session.save()?;
        assert!(!path.exists());
        Ok(())
    }
}
