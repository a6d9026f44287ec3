//! Shared configuration loader for md2html.
//!
//! `defaults/md2html.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2HtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md2html::{LineEnding, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/md2html.default.toml");

/// Top-level configuration consumed by md2html applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2HtmlConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// How rendered fragments are joined and written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub line_ending: LineEndingConfig,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LineEndingConfig {
    #[serde(rename = "lf")]
    Lf,
    #[serde(rename = "crlf")]
    CrLf,
}

impl LineEndingConfig {
    /// Spelling used in TOML files.
    pub fn key(self) -> &'static str {
        match self {
            LineEndingConfig::Lf => "lf",
            LineEndingConfig::CrLf => "crlf",
        }
    }
}

impl From<LineEndingConfig> for LineEnding {
    fn from(config: LineEndingConfig) -> Self {
        match config {
            LineEndingConfig::Lf => LineEnding::Lf,
            LineEndingConfig::CrLf => LineEnding::CrLf,
        }
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        RenderOptions {
            line_ending: config.line_ending.into(),
            trailing_newline: config.trailing_newline,
        }
    }
}

impl From<OutputConfig> for RenderOptions {
    fn from(config: OutputConfig) -> Self {
        RenderOptions::from(&config)
    }
}

/// Logging defaults; command-line flags and `MD2HTML_LOG` take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormatConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogFormatConfig {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "json")]
    Json,
}

/// File name looked up in the working directory before any `--config` file.
pub const PROJECT_FILE_NAME: &str = "md2html.toml";

/// Builds an [`Md2HtmlConfig`] from the embedded defaults, an optional project
/// file and an explicit file, in that order. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer `md2html.toml` from `dir` when it exists.
    pub fn with_project_file(self, dir: impl AsRef<Path>) -> Self {
        self.layer(dir.as_ref().join(PROJECT_FILE_NAME), false)
    }

    /// Layer a user-named file; building fails if it is absent.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path, true)
    }

    /// Force the output line ending regardless of file layers.
    pub fn with_line_ending(self, ending: LineEndingConfig) -> Result<Self, ConfigError> {
        self.set_override("output.line_ending", ending.key())
    }

    /// Force whether rendered output ends with a line ending.
    pub fn with_trailing_newline(self, enabled: bool) -> Result<Self, ConfigError> {
        self.set_override("output.trailing_newline", enabled)
    }

    pub fn build(self) -> Result<Md2HtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2HtmlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.line_ending, LineEndingConfig::Lf);
        assert!(!config.output.trailing_newline);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, LogFormatConfig::Human);
    }

    #[test]
    fn defaults_render_like_a_plain_newline_join() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: RenderOptions = config.output.into();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn typed_overrides_beat_file_layers() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_FILE_NAME),
            "[output]\nline_ending = \"lf\"\n",
        )
        .unwrap();

        let config = Loader::new()
            .with_project_file(dir.path())
            .with_line_ending(LineEndingConfig::CrLf)
            .expect("override to apply")
            .with_trailing_newline(true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let options = RenderOptions::from(&config.output);
        assert_eq!(options.line_ending, LineEnding::CrLf);
        assert!(options.trailing_newline);
    }

    #[test]
    fn file_layer_overrides_only_the_keys_it_sets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("md2html.toml");
        fs::write(&path, "[log]\nformat = \"json\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.log.format, LogFormatConfig::Json);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.output.line_ending, LineEndingConfig::Lf);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Loader::new()
            .with_file(dir.path().join("absent.toml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_project_file_is_ignored() {
        let dir = tempdir().unwrap();
        let config = Loader::new()
            .with_project_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn explicit_file_layers_over_project_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_FILE_NAME),
            "[log]\nlevel = \"info\"\nformat = \"json\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[log]\nlevel = \"debug\"\n").unwrap();

        let config = Loader::new()
            .with_project_file(dir.path())
            .with_file(&explicit)
            .build()
            .expect("config to build");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormatConfig::Json);
    }

    #[test]
    fn line_ending_keys_match_toml_spelling() {
        assert_eq!(LineEndingConfig::Lf.key(), "lf");
        assert_eq!(LineEndingConfig::CrLf.key(), "crlf");
    }

    #[test]
    fn unknown_line_ending_is_rejected() {
        let result = Loader::new()
            .set_override("output.line_ending", "cr")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
