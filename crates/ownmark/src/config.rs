//! Run settings.
//!
//! Resolved once, in priority order:
//! 1. Command-line flags
//! 2. Environment variables (`OWNMARK__NEO4J__URI`, `OWNMARK__MARK__BATCH_SIZE`, ...)
//! 3. Config file (`ownmark.toml`, optional)
//! 4. Defaults

use ownmark_core::MarkSettings;
use ownmark_graph::GraphConfig;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub neo4j: GraphConfig,

    #[serde(default)]
    pub mark: MarkSettings,
}

impl Settings {
    /// Build settings from the config file named by `cli.config`, the
    /// environment, and explicit flags on `cli`.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(&cli.config).required(false))
            .add_source(
                config::Environment::with_prefix("OWNMARK")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("neo4j.uri", cli.host.clone())?
            .set_override_option("neo4j.user", cli.user.clone())?
            .set_override_option("neo4j.password", cli.password.clone())?
            .set_override_option("mark.batch_size", cli.batch_size.map(|n| n as u64))?
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.mark.validate()?;
        Ok(settings)
    }
}
