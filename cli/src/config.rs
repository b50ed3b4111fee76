use std::path::Path;

use serde::Deserialize;

use compiler::render::{Format, Style};
use compiler::synchronizer::DEFAULT_CODE_LANGUAGE;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "reportify.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    Latex,
    Markdown,
}

impl From<FormatName> for Format {
    fn from(name: FormatName) -> Self {
        match name {
            FormatName::Latex => Format::Latex,
            FormatName::Markdown => Format::Markdown,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_format")]
    pub format: FormatName,

    /// Fail on out-of-order sentinels instead of skipping them.
    #[serde(default = "default_strict")]
    pub strict: bool,

    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default = "default_code_language")]
    pub code_language: String,
    #[serde(default = "default_code_color")]
    pub code_color: String,
    #[serde(default = "default_output_color")]
    pub output_color: String,
    #[serde(default = "default_span_color")]
    pub span_color: String,
}

fn default_format() -> FormatName {
    FormatName::Latex
}

fn default_strict() -> bool {
    true
}

fn default_code_language() -> String {
    DEFAULT_CODE_LANGUAGE.to_string()
}

fn default_code_color() -> String {
    Style::default().code_color
}

fn default_output_color() -> String {
    Style::default().output_color
}

fn default_span_color() -> String {
    Style::default().span_color
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            code_language: default_code_language(),
            code_color: default_code_color(),
            output_color: default_output_color(),
            span_color: default_span_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: default_format(),
            strict: default_strict(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Load `explicit` if given (it must exist), else `reportify.toml` in
    /// `dir` if present, else defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Config, String> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Config::default());
                }
                fallback
            }
        };
        let text = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read config '{}': {}", path.display(), e))?;
        Config::parse(&text).map_err(|e| format!("invalid config '{}': {}", path.display(), e))
    }

    pub fn parse(text: &str) -> Result<Config, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    pub fn render_style(&self) -> Style {
        Style {
            code_color: self.style.code_color.clone(),
            output_color: self.style.output_color.clone(),
            span_color: self.style.span_color.clone(),
        }
    }
}
