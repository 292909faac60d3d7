use crate::config::Config;

/// Initialize config file.
#[derive(Debug, clap::Args)]
pub struct InitConfig {
    /// Overwrite an existing config file.
    #[arg(long)]
    force: bool,
}

impl super::Command for InitConfig {
    fn is_session_required(&self) -> bool {
        false
    }

    fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let path = ctx.config_path();
        if path.exists() && !self.force {
            eyre::bail!(
                "config file `{}` already exists, use `--force` to overwrite",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = Config::with_defaults()?;
        std::fs::write(path, toml::to_string_pretty(&config)?)?;
        tracing::info!(path = %path.display(), "config file written");
        println!("{}", path.display());
        Ok(())
    }
}
