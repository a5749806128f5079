use std::path::PathBuf;

use crate::config::Config;

pub mod recolor;

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RecolorArgs {
    /// The color substituted for every hex color in the icon [default: #25D366]
    #[clap(index = 1)]
    pub color: Option<String>,

    /// The icon name, resolved to <images-dir>/<icon>-icon.svg [default: whatsapp]
    #[clap(index = 2)]
    pub icon: Option<String>,

    /// Base directory (defaults to the directory containing this executable)
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// Directory containing the icons, relative to the base directory
    #[clap(long)]
    pub images_dir: Option<String>,

    /// The vector-to-raster converter to run
    #[clap(long)]
    pub converter: Option<String>,

    /// Output width in pixels
    #[clap(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[clap(long)]
    pub height: Option<u32>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(long, num_args = 0)]
    pub debug: bool,
}

impl RecolorArgs {
    /// Override config values with whatever was given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(color) = &self.color {
            config.color = color.clone();
        }
        if let Some(icon) = &self.icon {
            config.icon = icon.clone();
        }
        if let Some(images_dir) = &self.images_dir {
            config.images_dir = images_dir.clone();
        }
        if let Some(converter) = &self.converter {
            config.converter = converter.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
    }
}

/// The directory containing the running executable, which is where the
/// images directory is expected by default.
pub fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCommandLine {
        #[clap(flatten)]
        args: RecolorArgs,
    }

    #[test]
    fn test_positional_defaults() {
        let args = TestCommandLine::parse_from(["iconcolor"]).args;
        assert!(args.color.is_none());
        assert!(args.icon.is_none());

        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_positionals_in_order() {
        let args = TestCommandLine::parse_from(["iconcolor", "#0088cc", "telegram"]).args;

        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.color, "#0088cc");
        assert_eq!(config.icon, "telegram");
    }

    #[test]
    fn test_color_only() {
        let args = TestCommandLine::parse_from(["iconcolor", "#EA4335"]).args;

        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.color, "#EA4335");
        assert_eq!(config.icon, "whatsapp");
    }

    #[test]
    fn test_options_override_config() {
        let args = TestCommandLine::parse_from([
            "iconcolor",
            "--width",
            "64",
            "--converter",
            "inkscape",
            "--images-dir",
            "assets/icons",
            "#EA4335",
            "email",
        ])
        .args;

        let mut config = Config {
            width: 512,
            height: 512,
            ..Config::default()
        };
        args.apply(&mut config);
        assert_eq!((config.width, config.height), (64, 512));
        assert_eq!(config.converter, "inkscape");
        assert_eq!(config.images_dir, "assets/icons");
        assert_eq!(config.icon, "email");
    }

    #[test]
    fn test_default_root_is_a_directory() {
        assert!(default_root().is_dir());
    }
}
