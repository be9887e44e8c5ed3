//! Reading the `[stash]` section of an INI configuration file.
//!
//! A missing file, an unreadable file, or a missing section is not an
//! error: every key simply comes back as `None` and the caller falls back to
//! its defaults.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};

/// Name of the INI section holding the connection settings.
pub const CONFIG_SECTION: &str = "stash";

/// Raw, unvalidated values found in the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSettings {
    /// `host` key.
    pub host: Option<String>,
    /// `port` key.
    pub port: Option<String>,
    /// `api_key` key.
    pub api_key: Option<String>,
    /// `url` key.
    pub url: Option<String>,
}

impl FileSettings {
    /// Reads the `[stash]` section from the INI file at `path`.
    #[must_use]
    pub fn read(path: &Path) -> Self {
        let source = File::from(path).format(FileFormat::Ini).required(false);

        let settings = match Config::builder().add_source(source).build() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!(
                    "Could not read Stash configuration from {}, using defaults: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        let lookup = |key: &str| settings.get_string(&format!("{CONFIG_SECTION}.{key}")).ok();

        Self {
            host: lookup("host"),
            port: lookup("port"),
            api_key: lookup("api_key"),
            url: lookup("url"),
        }
    }
}

/// Returns the default configuration file location.
///
/// This is `config/configuration.ini` next to the running executable, or
/// relative to the working directory when the executable path is unknown.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let relative = Path::new("config").join("configuration.ini");
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map_or_else(|| relative.clone(), |dir| dir.join(&relative))
}
