//! `xmldb export` command implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use xmldb_config::{CliSettings, Config};
use xmldb_doc::DocRenderer;
use xmldb_theme::{
    FixedStyle, MarkerScan, StyleExtractor, StyleSource, ThemeConfig, builtin_theme_css,
    create_agent, page_header,
};
use xmldb_xsl::detect_engine;

use crate::error::CliError;
use crate::output::Output;

/// Timeout for fetching theme CSS from a configured site.
const STYLE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Site-relative directory holding the schema, e.g. /mod/forum/db.
    dir: String,

    /// Output file (default: <plugin>_xmldb_doc.html in the current directory).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Root of the plugin tree holding db/install.xml files (overrides config).
    #[arg(short, long)]
    root_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover xmldb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the schema is missing, no
    /// XSLT processor is installed or the output file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            root_dir: self.root_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Schema root: {}",
            config.docs_resolved.root_dir.display()
        ));
        output.info(&format!("Directory: {}", self.dir));

        // A configured site supplies the inlined CSS; otherwise the bundled
        // stylesheet is used and no page header needs scanning.
        let (styles, header): (Box<dyn StyleSource>, String) =
            if let Some(www_root) = &config.theme_resolved.www_root {
                let theme = ThemeConfig::new(
                    &config.theme_resolved.name,
                    config.theme_resolved.revision,
                    www_root,
                );
                let extractor = StyleExtractor::new(
                    Box::new(MarkerScan::new(www_root)),
                    create_agent(STYLE_FETCH_TIMEOUT),
                );
                (
                    Box::new(extractor),
                    page_header("XMLDB documentation", &theme),
                )
            } else {
                (
                    Box::new(FixedStyle(builtin_theme_css().to_owned())),
                    String::new(),
                )
            };

        let mut renderer = DocRenderer::new(
            config.docs_resolved.root_dir.clone(),
            detect_engine(),
            styles,
        );
        if let Some(path) = &config.docs_resolved.stylesheet {
            let sheet = std::fs::read_to_string(path)?;
            renderer = renderer.with_stylesheet(sheet);
        }

        let download = renderer.render_download(&self.dir, &header)?;

        let output_path = self
            .output
            .unwrap_or_else(|| PathBuf::from(&download.filename));
        std::fs::write(&output_path, &download.content)?;

        output.success(&format!(
            "Documentation written to {}",
            output_path.display()
        ));
        Ok(())
    }
}
