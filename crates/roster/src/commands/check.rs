//! `roster check` command implementation.

use std::path::PathBuf;

use clap::Args;

use roster_config::{CliSettings, Config};

use crate::commands::load_bundle;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover roster.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the config.json URL.
    #[arg(long)]
    config_url: Option<String>,

    /// Override the data.json URL.
    #[arg(long)]
    data_url: Option<String>,

    /// Disable the document cache for this run.
    #[arg(long)]
    no_cache: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the roster violates its
    /// identifier invariants.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            config_url: self.config_url,
            data_url: self.data_url,
            cache_enabled: self.no_cache.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let bundle = load_bundle(&config, version, &output)?;

        bundle.roster.validate()?;

        output.highlight(&bundle.site.title);
        for grade in &bundle.roster.grades {
            output.info(&format!(
                "{} ({}): {} groups, {} students",
                grade.label,
                grade.key,
                grade.groups.len(),
                grade.size()
            ));
        }
        output.success(&format!(
            "OK: {} grades, {} students total",
            bundle.roster.grades.len(),
            bundle.roster.size()
        ));

        Ok(())
    }
}
