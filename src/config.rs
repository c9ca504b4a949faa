use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Title used for wrapped documents when none is configured.
pub const DEFAULT_TITLE: &str = "Markdown Preview";

/// Engine configuration.
///
/// The conversion itself has no knobs; configuration covers the
/// standalone-document wrapper.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Title for the wrapped document. Callers typically pass the source
    /// file stem; absent that, [`DEFAULT_TITLE`] is used.
    pub title: Option<String>,
}

impl Config {
    /// Effective title for the wrapped document.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file surfaces as `io::ErrorKind::NotFound` verbatim;
    /// invalid TOML is mapped to `InvalidData` with the offending path in
    /// the message.
    pub fn from_file(path: &Path) -> io::Result<Config> {
        log::debug!("Reading config from: {}", path.display());
        let s = fs::read_to_string(path)?;
        parse_config_str(&s, path)
    }
}

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
