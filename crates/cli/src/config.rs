use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use indexmap::IndexMap;
use prettytable::{format::consts::FORMAT_CLEAN, Cell, Row, Table};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const APP: &str = "gigboard";
const ENV_PREFIX: &str = "GIGBOARD_";

/// Config.
#[derive(Debug, Clone, Default, clap::Args, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Output format.
    #[arg(long, short, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
    /// Path of the ledger file.
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    ledger: Option<String>,
    /// Path of a marketplace dataset replacing the bundled one.
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

impl Config {
    /// Layer the config file, `GIGBOARD_*` variables and command line
    /// overrides, later sources winning.
    pub(crate) fn load(path: &Path, overrides: &Self) -> eyre::Result<Self> {
        let config = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Config written by `init-config`.
    pub(crate) fn with_defaults() -> eyre::Result<Self> {
        Ok(Self {
            output: Some(OutputFormat::default()),
            ledger: Some(default_ledger_path()?.display().to_string()),
            data: None,
        })
    }

    pub(crate) fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub(crate) fn ledger_path(&self) -> eyre::Result<PathBuf> {
        match self.ledger.as_deref() {
            Some(path) => expand(path),
            None => default_ledger_path(),
        }
    }

    pub(crate) fn data_path(&self) -> eyre::Result<Option<PathBuf>> {
        self.data.as_deref().map(expand).transpose()
    }
}

fn expand(path: &str) -> eyre::Result<PathBuf> {
    Ok(PathBuf::from(shellexpand::full(path)?.into_owned()))
}

pub(crate) fn default_config_path() -> eyre::Result<PathBuf> {
    let strategy = etcetera::choose_base_strategy()?;
    Ok(strategy.config_dir().join(APP).join("config.toml"))
}

fn default_ledger_path() -> eyre::Result<PathBuf> {
    let strategy = etcetera::choose_base_strategy()?;
    Ok(strategy.data_dir().join(APP).join("ledger.json"))
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OutputFormat {
    /// Table.
    #[default]
    Table,
    /// JSON.
    Json,
}

/// Display options.
#[derive(Debug, Clone, Default)]
pub(crate) struct DisplayOptions {
    /// Column keys, which may be dotted paths, mapped to their titles.
    projection: IndexMap<String, String>,
}

impl DisplayOptions {
    pub(crate) fn table_projection(
        keys: impl IntoIterator<Item = (impl ToString, impl ToString)>,
    ) -> Self {
        Self {
            projection: keys
                .into_iter()
                .map(|(key, title)| (key.to_string(), title.to_string()))
                .collect(),
        }
    }
}

impl OutputFormat {
    pub(crate) fn display_many(
        &self,
        items: impl IntoIterator<Item = Value>,
        options: DisplayOptions,
    ) -> eyre::Result<String> {
        let items = items.into_iter().collect::<Vec<_>>();
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&items)?),
            Self::Table => {
                let mut table = Table::new();
                table.set_format(*FORMAT_CLEAN);
                table.set_titles(Row::new(
                    options.projection.values().map(|t| Cell::new(t)).collect(),
                ));
                for item in items.iter() {
                    table.add_row(Row::new(
                        options
                            .projection
                            .keys()
                            .map(|key| Cell::new(&cell_text(lookup(item, key))))
                            .collect(),
                    ));
                }
                Ok(table.to_string())
            }
        }
    }

    /// Display a single object as `Field`/`Value` rows.
    pub(crate) fn display_one(&self, item: Value, options: DisplayOptions) -> eyre::Result<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&item)?),
            Self::Table => {
                let mut table = Table::new();
                table.set_format(*FORMAT_CLEAN);
                for (key, title) in options.projection.iter() {
                    table.add_row(Row::new(vec![
                        Cell::new(title),
                        Cell::new(&cell_text(lookup(&item, key))),
                    ]));
                }
                Ok(table.to_string())
            }
        }
    }
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |value, key| value.get(key))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| cell_text(Some(value)))
            .collect::<Vec<_>>()
            .join(" "),
        Some(value) => value.to_string(),
    }
}
