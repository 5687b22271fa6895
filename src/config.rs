use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::platform;
use crate::render::brand::DEFAULT_BRAND;

/// Contents of config.toml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub archive: Option<PathBuf>,
    pub branding_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub brand: Option<String>,
}

impl FileConfig {
    /// A missing file is an empty config, a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(FileConfig::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug)]
pub struct Config {
    pub archive_path: PathBuf,
    pub branding_dir: PathBuf,
    pub template_path: Option<PathBuf>,
    pub default_brand: String,
}

impl Config {
    /// CLI flags win over config.toml, which wins over built-in defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(p) => Some(p.clone()),
            None => platform::config_dir().map(|d| d.join("config.toml")),
        };
        let file = match &config_path {
            Some(p) => FileConfig::load(p)?,
            None => FileConfig::default(),
        };

        let mut config = Self::resolve(file, platform::config_dir(), platform::default_archive_path())?;
        if let Some(archive) = &cli.archive {
            config.archive_path = archive.clone();
        }
        Ok(config)
    }

    fn resolve(
        file: FileConfig,
        config_dir: Option<PathBuf>,
        default_archive: Option<PathBuf>,
    ) -> Result<Self> {
        let archive_path = file.archive.or(default_archive).ok_or(Error::NoHomeDir)?;
        let branding_dir = file
            .branding_dir
            .or_else(|| config_dir.map(|d| d.join("branding")))
            .unwrap_or_else(|| PathBuf::from("branding"));

        Ok(Config {
            archive_path,
            branding_dir,
            template_path: file.template,
            default_brand: file.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        })
    }
}
