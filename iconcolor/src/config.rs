use anyhow::Result;
use serde::Deserialize;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;
use validator::Validate;

use crate::asset::IconAsset;

/// Default target color when none is given.
pub const DEFAULT_COLOR: &str = "#25D366";

/// Default icon name when none is given.
pub const DEFAULT_ICON: &str = "whatsapp";

/// Settings for one recolor run. Every field may be omitted from a config file.
#[derive(Clone, Deserialize, Validate, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The base directory that `images_dir` is relative to. Never read from
    /// a config file since the file itself lives there.
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory containing the icons
    #[validate(length(min = 1))]
    pub images_dir: String,

    /// The vector-to-raster converter executable
    #[validate(length(min = 1))]
    pub converter: String,

    /// Arguments placed before the size flags, for converters launched
    /// through a wrapper
    pub converter_args: Vec<String>,

    /// Output width in pixels
    #[validate(range(min = 1, max = 16384))]
    pub width: u32,

    /// Output height in pixels
    #[validate(range(min = 1, max = 16384))]
    pub height: u32,

    /// The color substituted for every token
    pub color: String,

    /// The icon to recolor
    #[validate(length(min = 1))]
    pub icon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            images_dir: "images".to_string(),
            converter: "rsvg-convert".to_string(),
            converter_args: Vec::new(),
            width: 200,
            height: 200,
            color: DEFAULT_COLOR.to_string(),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl Config {
    /// Load the config file from `root` if there is one, otherwise use the
    /// defaults.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut config = match ConfigPath::from_dir(root) {
            Some(path) => {
                debug!("Loading config from {}", path);
                path.load()?
            }
            None => Config::default(),
        };
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// The directory icons are resolved against.
    pub fn images_path(&self) -> PathBuf {
        self.root.join(&self.images_dir)
    }

    /// The icon selected by this config.
    pub fn asset(&self) -> IconAsset {
        IconAsset::resolve(self.images_path(), &self.icon)
    }
}

/// Supported config file formats, in lookup order.
#[derive(Clone, Copy, Debug, EnumIter, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigFormat {
    Toml,
    Json,
    Ron,
    Yaml,
}

impl ConfigFormat {
    /// File names recognized for this format.
    pub fn file_names(&self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Toml => &["iconcolor.toml"],
            ConfigFormat::Json => &["iconcolor.json"],
            ConfigFormat::Ron => &["iconcolor.ron"],
            ConfigFormat::Yaml => &["iconcolor.yaml", "iconcolor.yml"],
        }
    }
}

/// Represents a config file. This mainly helps sort out the various
/// supported formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigPath {
    pub format: ConfigFormat,
    pub path: PathBuf,
}

impl ConfigPath {
    /// Check for a config file in the given directory.
    pub fn from_dir(path: impl AsRef<Path>) -> Option<ConfigPath> {
        let path = path.as_ref();

        for format in ConfigFormat::iter() {
            for name in format.file_names() {
                if path.join(name).is_file() {
                    return Some(ConfigPath {
                        format,
                        path: path.join(name),
                    });
                }
            }
        }

        None
    }

    /// Read and deserialize the config file.
    pub fn load(&self) -> Result<Config> {
        let bytes = std::fs::read(&self.path)?;
        Ok(match self.format {
            ConfigFormat::Toml => toml::from_str(std::str::from_utf8(&bytes)?)?,
            ConfigFormat::Json => serde_json::from_slice(&bytes)?,
            ConfigFormat::Ron => ron::de::from_bytes(&bytes)?,
            ConfigFormat::Yaml => serde_yaml::from_slice(&bytes)?,
        })
    }
}

impl Display for ConfigPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.format)
    }
}
