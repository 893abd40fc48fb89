use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tileworld_core::input::{DEFAULT_REPEAT_DELAY, DEFAULT_REPEAT_INTERVAL};

/// Config file read from the working directory unless `--config` says
/// otherwise.
pub const DEFAULT_CONFIG_PATH: &str = "tileworld.toml";
pub const DEFAULT_PROJECT_PATH: &str = "project.tws";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Host settings from `tileworld.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Project sheet to edit.
    pub project: PathBuf,
    /// Fixed window scale; fit-to-window when absent.
    pub scale: Option<f32>,
    pub repeat_delay: u32,
    pub repeat_interval: u32,
    /// Name of the tile kind the rule editor opens on.
    pub center_kind: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        DesktopConfig {
            project: PathBuf::from(DEFAULT_PROJECT_PATH),
            scale: None,
            repeat_delay: DEFAULT_REPEAT_DELAY,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            center_kind: "player".to_string(),
        }
    }
}

impl DesktopConfig {
    pub fn parse(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::parse(&source, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Scale from a `screen_w` x `screen_h` screen to a `win_w` x `win_h`
    /// window: the configured one, or the largest whole factor that fits.
    /// Never below 1.
    pub fn window_scale(&self, screen_w: f32, screen_h: f32, win_w: f32, win_h: f32) -> f32 {
        self.scale
            .unwrap_or_else(|| (win_w / screen_w).min(win_h / screen_h).floor())
            .max(1.0)
    }

    /// Like [`DesktopConfig::load`], but logs failures and falls back to
    /// the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("CONFIG: {}", e);
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// `tileworld [PROJECT] [--config PATH] [--paint KIND]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub project: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Open the pixel editor on this kind instead of the rule editor.
    pub paint: Option<String>,
}

impl CliArgs {
    /// Parse arguments, program name excluded. Unknown flags are logged
    /// and skipped.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut out = CliArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => out.config = args.next().map(PathBuf::from),
                "--paint" => out.paint = args.next(),
                flag if flag.starts_with("--") => log::warn!("CLI: ignoring {}", flag),
                _ if out.project.is_none() => out.project = Some(PathBuf::from(&arg)),
                _ => log::warn!("CLI: ignoring extra argument {}", arg),
            }
        }
        out
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = DesktopConfig::parse("", Path::new("t.toml")).unwrap();
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.repeat_delay, 18);
        assert_eq!(config.repeat_interval, 4);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = DesktopConfig::parse(
            "project = \"maze.tws\"\nscale = 3.0\ncenter_kind = \"box\"\n",
            Path::new("t.toml"),
        )
        .unwrap();
        assert_eq!(config.project, PathBuf::from("maze.tws"));
        assert_eq!(config.scale, Some(3.0));
        assert_eq!(config.center_kind, "box");
        assert_eq!(config.repeat_interval, DEFAULT_REPEAT_INTERVAL);
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let err = DesktopConfig::parse("scale = \"big\"", Path::new("t.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse t.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("tileworld-no-such-config.toml");
        assert_eq!(DesktopConfig::load(&path).unwrap(), DesktopConfig::default());
    }

    #[test]
    fn test_cli_positional_and_flags() {
        let cli = args(&["maze.tws", "--paint", "wall", "--config", "alt.toml"]);
        assert_eq!(cli.project, Some(PathBuf::from("maze.tws")));
        assert_eq!(cli.paint.as_deref(), Some("wall"));
        assert_eq!(cli.config_path(), PathBuf::from("alt.toml"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = args(&["--verbose"]);
        assert_eq!(cli, CliArgs::default());
        assert_eq!(cli.config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_window_scale_fits_or_uses_config() {
        let mut config = DesktopConfig::default();
        assert_eq!(config.window_scale(160.0, 120.0, 640.0, 400.0), 3.0);
        assert_eq!(config.window_scale(160.0, 120.0, 100.0, 100.0), 1.0);
        config.scale = Some(2.5);
        assert_eq!(config.window_scale(160.0, 120.0, 640.0, 480.0), 2.5);
    }

    #[test]
    fn test_window_scale_clamps_bad_config() {
        let mut config = DesktopConfig::default();
        config.scale = Some(0.0);
        assert_eq!(config.window_scale(160.0, 120.0, 640.0, 480.0), 1.0);
        config.scale = Some(-4.0);
        assert_eq!(config.window_scale(160.0, 120.0, 640.0, 480.0), 1.0);
    }
}
