use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod canvas;
use canvas::CanvasConfig;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How drawings are laid out in the exported page.
    pub canvas: CanvasConfig,

    /// Where to save drawings when no output file is given on the command line.
    pub output_file: Option<Utf8PathBuf>,

    /// Try to open the saved drawing in the system's default viewer.
    pub open_viewer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            output_file: None,
            open_viewer: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::get_path()?)
    }

    pub fn get_path() -> Result<PathBuf> {
        let home_dir = home::home_dir().context("Failed to get user's home directory.")?;
        Ok(home_dir.join(".config/turtle_soup/config.yaml"))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(path).context("Failed to read config file.")?;
        let config: Self =
            serde_yaml::from_str(&config).context("Failed to decode config file.")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        assert!(Config::load_from_path(&directory.path().join("config.yaml")).is_err());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("config.yaml");
        fs::write(
            &path,
            "open_viewer: false\ncanvas:\n  width: 800\n  background: white\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert!(!config.open_viewer);
        assert_eq!(config.output_file, None);
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.canvas.height, 500.0);
        assert_eq!(config.canvas.background, "white");
        assert_eq!(config.canvas.stroke_width, 2.0);
    }

    #[test]
    fn output_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("config.yaml");
        fs::write(&path, "output_file: drawings/turtle.html\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(
            config.output_file,
            Some(Utf8PathBuf::from("drawings/turtle.html"))
        );
        assert!(config.open_viewer);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("config.yaml");
        fs::write(&path, "open_viewer: maybe\n").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
