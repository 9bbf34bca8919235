//! `xmldb serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use xmldb_config::{CliSettings, Config};
use xmldb_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover xmldb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root of the plugin tree holding db/install.xml files (overrides config).
    #[arg(short, long)]
    root_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Site root whose theme CSS downloads should inline (overrides config).
    #[arg(long)]
    www_root: Option<String>,

    /// Enable verbose output (log every served request).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            root_dir: self.root_dir,
            www_root: self.www_root,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Schema root: {}",
            config.docs_resolved.root_dir.display()
        ));

        if let Some(stylesheet) = &config.docs_resolved.stylesheet {
            output.info(&format!(
                "Documentation stylesheet: {}",
                stylesheet.display()
            ));
        }

        if let Some(www_root) = &config.theme_resolved.www_root {
            output.info(&format!("Theme CSS source: {www_root}"));
        } else {
            output.info("Theme CSS source: bundled stylesheet");
        }

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_string(), self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
