//! Lexer settings files.
//!
//! [`LexSettings`] is the data-only part of a [`LexConfig`] in a form that
//! can live in a TOML file. Error producers and span scanners are code and
//! stay on `LexConfig`.
//!
//! ```toml
//! name = "formula"
//! keywords = ["if", "then", "else"]
//! nulls = ["null"]
//! line_comments = ["#"]
//! big_number_strategy = "range"
//! production = "lazy"
//!
//! [constants]
//! true = true
//! PI = 3.14159
//!
//! [[block_comments]]
//! open = "(*"
//! close = "*)"
//! ```

use round_util::LineCol;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{BigNumberStrategy, LexConfig, Production, DEFAULT_SAMPLE_WIDTH};
use crate::error::SettingsError;
use crate::token::{ConstantValue, Number};

/// Value of a configured constant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean constant
    Bool(bool),
    /// Integer constant; `i32` when it fits, `i64` otherwise
    Int(i64),
    /// Floating-point constant
    Float(f64),
    /// Text constant
    Text(String),
}

impl From<SettingValue> for ConstantValue {
    fn from(value: SettingValue) -> Self {
        match value {
            SettingValue::Bool(v) => ConstantValue::Bool(v),
            SettingValue::Int(v) => match i32::try_from(v) {
                Ok(small) => ConstantValue::Number(Number::Int(small)),
                Err(_) => ConstantValue::Number(Number::Long(v)),
            },
            SettingValue::Float(v) => ConstantValue::Number(Number::Double(v)),
            SettingValue::Text(v) => ConstantValue::Text(v),
        }
    }
}

/// A multi-line comment delimiter pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockComment {
    /// Opening delimiter
    pub open: String,
    /// Closing delimiter
    pub close: String,
}

/// Coordinate of the first character of every lexed text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OriginSettings {
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

impl Default for OriginSettings {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Serializable lexer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexSettings {
    /// Subject name used in diagnostics.
    #[serde(default = "default_name")]
    pub name: String,

    /// Reserved words.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Spellings that lex as the null constant.
    #[serde(default)]
    pub nulls: Vec<String>,

    /// Single-line comment markers, in match order.
    #[serde(default = "default_line_comments")]
    pub line_comments: Vec<String>,

    /// Numeric materialization strategy.
    #[serde(default)]
    pub big_number_strategy: BigNumberStrategy,

    /// Context snippet width; 0 disables the snippet.
    #[serde(default = "default_sample_width")]
    pub sample_width: usize,

    /// Eager or lazy streams.
    #[serde(default)]
    pub production: Production,

    /// Whether tokens carry line/column coordinates.
    #[serde(default = "default_true")]
    pub track_positions: bool,

    /// Coordinate of the first character.
    #[serde(default)]
    pub origin: OriginSettings,

    /// Constant spellings and their values.
    #[serde(default)]
    pub constants: BTreeMap<String, SettingValue>,

    /// Multi-line comment delimiters, in match order.
    #[serde(default = "default_block_comments")]
    pub block_comments: Vec<BlockComment>,
}

fn default_name() -> String {
    "expression".to_string()
}

fn default_line_comments() -> Vec<String> {
    vec!["//".to_string()]
}

fn default_block_comments() -> Vec<BlockComment> {
    vec![BlockComment {
        open: "/*".to_string(),
        close: "*/".to_string(),
    }]
}

fn default_sample_width() -> usize {
    DEFAULT_SAMPLE_WIDTH
}

fn default_true() -> bool {
    true
}

impl Default for LexSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            keywords: Vec::new(),
            nulls: Vec::new(),
            line_comments: default_line_comments(),
            big_number_strategy: BigNumberStrategy::default(),
            sample_width: default_sample_width(),
            production: Production::default(),
            track_positions: true,
            origin: OriginSettings::default(),
            constants: BTreeMap::new(),
            block_comments: default_block_comments(),
        }
    }
}

impl LexSettings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Render settings as TOML text.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded lexer settings");
        Ok(settings)
    }

    /// Save settings to a TOML file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Build a [`LexConfig`] with default producers and span scanner.
    ///
    /// Fails on a zero origin coordinate or an empty comment delimiter.
    ///
    /// # Example
    ///
    /// ```
    /// use round_lex::{LexSettings, Lexer};
    ///
    /// let settings = LexSettings::from_toml_str(r##"
    ///     keywords = ["if"]
    ///     line_comments = ["#"]
    /// "##).unwrap();
    /// let lexer = Lexer::new(settings.into_config().unwrap());
    /// let stream = lexer.lex("if x # note").unwrap();
    /// assert!(stream.tokens()[0].token().is_keyword());
    /// assert!(stream.tokens()[2].token().is_comment());
    /// ```
    pub fn into_config(self) -> Result<LexConfig, SettingsError> {
        if self.origin.line == 0 || self.origin.column == 0 {
            return Err(SettingsError::Invalid(format!(
                "origin must be 1-based, got {}:{}",
                self.origin.line, self.origin.column
            )));
        }
        if self.line_comments.iter().any(String::is_empty) {
            return Err(SettingsError::Invalid(
                "empty line comment marker".to_string(),
            ));
        }
        if self
            .block_comments
            .iter()
            .any(|pair| pair.open.is_empty() || pair.close.is_empty())
        {
            return Err(SettingsError::Invalid(
                "empty block comment delimiter".to_string(),
            ));
        }

        let mut config = LexConfig::new()
            .name(self.name)
            .with_keywords(&self.keywords)
            .with_line_comments(&self.line_comments)
            .with_block_comments(
                self.block_comments
                    .iter()
                    .map(|pair| (pair.open.as_str(), pair.close.as_str())),
            )
            .big_number_strategy(self.big_number_strategy)
            .sample_width(self.sample_width)
            .production(self.production)
            .track_positions(self.track_positions)
            .origin(LineCol::new(self.origin.line, self.origin.column));

        for null in &self.nulls {
            config = config.with_constant(null, ConstantValue::Null);
        }
        for (name, value) in self.constants {
            config = config.with_constant(&name, value);
        }
        Ok(config)
    }
}
