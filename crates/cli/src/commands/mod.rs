use std::path::Path;

use badges::Badges;
use bid::Bid;
use enum_dispatch::enum_dispatch;
use eyre::OptionExt;
use gigs::Gigs;
use init_config::InitConfig;
use leaderboard::Leaderboard;
use tier::Tier;

use crate::{
    config::{Config, OutputFormat},
    session::Session,
};

mod badges;
mod bid;
mod gigs;
mod init_config;
mod leaderboard;
mod tier;

/// Utils for command implementations.
pub mod utils;

/// Commands.
#[enum_dispatch(Command)]
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Initialize config file.
    InitConfig(InitConfig),
    /// List open gigs.
    Gigs(Gigs),
    /// Bid ledger commands.
    Bid(Bid),
    /// Leaderboard commands.
    Leaderboard(Leaderboard),
    /// Classify lifetime earnings into a tier.
    Tier(Tier),
    /// Show the badge catalog.
    Badges(Badges),
}

#[enum_dispatch]
pub(crate) trait Command {
    fn is_session_required(&self) -> bool {
        true
    }

    fn execute(&self, ctx: Context<'_>) -> eyre::Result<()>;
}

pub(crate) struct Context<'a> {
    config_path: &'a Path,
    config: &'a Config,
    session: Option<&'a mut Session>,
}

impl<'a> Context<'a> {
    pub(super) fn new(
        config_path: &'a Path,
        config: &'a Config,
        session: Option<&'a mut Session>,
    ) -> Self {
        Self {
            config_path,
            config,
            session,
        }
    }

    pub(crate) fn config_path(&self) -> &Path {
        self.config_path
    }

    pub(crate) fn output(&self) -> OutputFormat {
        self.config.output()
    }

    pub(crate) fn session(&self) -> eyre::Result<&Session> {
        self.session.as_deref().ok_or_eyre("session is not loaded")
    }

    pub(crate) fn session_mut(&mut self) -> eyre::Result<&mut Session> {
        self.session
            .as_deref_mut()
            .ok_or_eyre("session is not loaded")
    }
}
