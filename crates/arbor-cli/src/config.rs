//! Locating and reading the renderer settings for the CLI.
//!
//! Settings come from the first source that applies: the `--config` path,
//! `arbor/config.toml` under the working directory, or `config.toml` in the
//! platform configuration directory. Without any of them the built-in
//! defaults are used.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use arbor::{
    ArborError,
    config::{AppConfig, SettingsError},
};

/// Settings file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "arbor/config.toml";

/// Where the settings for a run come from.
#[derive(Debug, Clone, PartialEq)]
enum SettingsSource {
    /// Named on the command line; must exist.
    Explicit(PathBuf),
    /// Found under the working directory.
    Local(PathBuf),
    /// Found in the platform configuration directory.
    System(PathBuf),
    Defaults,
}

impl SettingsSource {
    /// Pick the settings source for this run.
    fn locate(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            return Self::Local(local.to_path_buf());
        }

        match ProjectDirs::from("com", "arbor", "arbor") {
            Some(dirs) => {
                let system = dirs.config_dir().join("config.toml");
                if system.is_file() {
                    return Self::System(system);
                }
                debug!(path = system.display().to_string(); "No settings in platform directory");
            }
            None => debug!("Platform configuration directory unavailable"),
        }

        Self::Defaults
    }

    fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::System(path) => Some(path),
            Self::Defaults => None,
        }
    }
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(_) => write!(f, "explicit"),
            Self::Local(_) => write!(f, "local"),
            Self::System(_) => write!(f, "system"),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// Load the settings for a run and check they are usable for rendering.
///
/// # Errors
///
/// Returns [`ArborError::Settings`] when an explicit path does not exist,
/// when a settings file is not valid TOML, or when a value is out of range
/// (negative or non-finite spacing, non-finite origin, zero font size).
/// Read failures on an existing file are [`ArborError::Io`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ArborError> {
    let source = SettingsSource::locate(explicit_path.as_ref().map(|path| path.as_ref()));

    let config = match source.path() {
        Some(path) => {
            info!(source:%, path = path.display().to_string(); "Loading settings");
            read_settings(path)?
        }
        None => {
            debug!("No settings file found, using defaults");
            AppConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}

fn read_settings(path: &Path) -> Result<AppConfig, ArborError> {
    if !path.exists() {
        return Err(SettingsError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| {
        SettingsError::Parse {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        }
        .into()
    })
}
