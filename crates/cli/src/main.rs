use std::path::PathBuf;

use clap::Parser;
use commands::{Command, Commands, Context};
use config::Config;
use session::Session;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;

/// Exit code for bids rejected by the ledger's rules.
const EXIT_REJECTED: i32 = 2;

/// Command-line interface for the Gigboard creator marketplace.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(long, short, env = "GIGBOARD_CONFIG")]
    config: Option<PathBuf>,
    /// Print debug logs.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(flatten)]
    overrides: Config,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config_path(&self) -> eyre::Result<PathBuf> {
        match self.config.as_ref() {
            Some(path) => Ok(path.clone()),
            None => config::default_config_path(),
        }
    }

    fn run(&self) -> eyre::Result<()> {
        let config_path = self.config_path()?;
        let config = Config::load(&config_path, &self.overrides)?;
        let mut session = if self.command.is_session_required() {
            Some(Session::load(&config)?)
        } else {
            None
        };
        let ctx = Context::new(&config_path, &config, session.as_mut());
        let result = self.command.execute(ctx);
        if let Some(session) = session.as_mut() {
            session.save()?;
        }
        result
    }
}

fn init_tracing(verbose: bool) -> eyre::Result<()> {
    let default_directive = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| eyre::eyre!("failed to install tracing subscriber: {err}"))
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Err(err) = cli.run() {
        if let Some((code, message)) = rejection(&err) {
            eprintln!("{message}");
            std::process::exit(code);
        }
        return Err(err);
    }
    Ok(())
}

/// Exit code and message for errors caused by input the ledger rejected.
///
/// Returns `None` for every other error, which is reported as a fault.
fn rejection(err: &eyre::Report) -> Option<(i32, String)> {
    let rejected = err
        .downcast_ref::<gigboard_model::Error>()
        .filter(|err| err.is_validation())?;
    Some((
        EXIT_REJECTED,
        format!("rejected [{}]: {rejected}", rejected.code()),
    ))
}

#[cfg(test)]
mod tests {
    use gigboard_model::{BidId, BidLedger, BudgetRange, Opportunity};
    use rust_decimal_macros::dec;

    use super::*;

    fn gig() -> Opportunity {
        Opportunity {
            id: "gig-1".to_string(),
            title: "Protein Bar Unboxing".to_string(),
            brand: "FuelUp".to_string(),
            brand_logo: String::new(),
            category: "Fitness".to_string(),
            budget: BudgetRange::new(dec!(400), dec!(900)),
            time_left: "18 hours".to_string(),
            requirements: Vec::new(),
        }
    }

    fn place_twice() -> eyre::Result<()> {
        let mut ledger = BidLedger::default();
        ledger.add_bid(gig().draft_bid(dec!(500), "pitch")?)?;
        ledger.add_bid(gig().draft_bid(dec!(600), "pitch")?)?;
        Ok(())
    }

    #[test]
    fn duplicate_bid_is_a_rejection() -> eyre::Result<()> {
        let err = place_twice().err().ok_or_else(|| eyre::eyre!("second bid accepted"))?;
        assert_eq!(
            rejection(&err),
            Some((
                EXIT_REJECTED,
                "rejected [BID_DUPLICATE_GIG]: a bid on gig `gig-1` already exists".to_string()
            ))
        );
        Ok(())
    }

    #[test]
    fn draft_validation_is_a_rejection() {
        let err = eyre::Report::from(gig().draft_bid(dec!(100), "pitch").unwrap_err());
        let (code, message) = rejection(&err).unwrap();
        assert_eq!(code, 2);
        assert!(message.starts_with("rejected [BID_AMOUNT_BELOW_MINIMUM]"));
    }

    #[test]
    fn other_errors_are_faults() {
        let not_found = eyre::Report::from(gigboard_model::Error::BidNotFound(BidId::from(7)));
        assert_eq!(rejection(&not_found), None);
        assert_eq!(rejection(&eyre::eyre!("disk full")), None);
    }
}
