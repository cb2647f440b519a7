use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use miette::SourceSpan;
use recast_core::{PyValue, validate_identifier};
use serde::Deserialize;

use crate::{Error, Framework, Result, SourceContext};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "recast.toml";

/// Factory and base-class names recognized when none are configured
pub const DEFAULT_FACTORIES: &[&str] = &["TypedDict"];

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    convert: RawConvert,
    #[serde(default)]
    extract: RawExtract,
    #[serde(default)]
    options: IndexMap<Framework, IndexMap<String, toml::Spanned<toml::Value>>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConvert {
    to: Option<Framework>,
    imports: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExtract {
    factories: Option<Vec<toml::Spanned<String>>>,
}

/// `[convert]` settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Framework used when `--to` is not given
    pub to: Framework,
    /// Prepend the framework's import lines
    pub imports: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            to: Framework::default(),
            imports: true,
        }
    }
}

/// One configured option value, with its location in the file
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    pub name: String,
    pub value: PyValue,
    pub span: SourceSpan,
}

/// Resolved recast configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub convert: ConvertSettings,
    pub factories: Vec<String>,
    options: IndexMap<Framework, Vec<OptionEntry>>,
    source: Option<SourceContext>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convert: ConvertSettings::default(),
            factories: DEFAULT_FACTORIES.iter().map(|s| s.to_string()).collect(),
            options: IndexMap::new(),
            source: None,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Load configuration from an explicit path, or from `recast.toml` in
    /// `dir` when it exists. Falls back to defaults otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate: PathBuf = dir.join(CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a recast.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a recast.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let factories = match raw.extract.factories {
            Some(factories) => factories
                .into_iter()
                .map(|factory| {
                    let span = factory.span();
                    let name = factory.into_inner();
                    match validate_identifier(&name) {
                        Some(reason) => Err(ctx.invalid_identifier_error(&name, reason, span)),
                        None => Ok(name),
                    }
                })
                .collect::<Result<Vec<_>>>()?,
            None => DEFAULT_FACTORIES.iter().map(|s| s.to_string()).collect(),
        };

        let mut options = IndexMap::new();
        for (framework, table) in raw.options {
            let mut entries = Vec::with_capacity(table.len());
            for (name, value) in table {
                let span = value.span();
                let value = PyValue::from_toml(value.get_ref())
                    .map_err(|reason| ctx.invalid_value_error(&name, reason, span.clone()))?;
                entries.push(OptionEntry {
                    name,
                    value,
                    span: span.into(),
                });
            }
            options.insert(framework, entries);
        }

        let defaults = ConvertSettings::default();
        Ok(Self {
            convert: ConvertSettings {
                to: raw.convert.to.unwrap_or(defaults.to),
                imports: raw.convert.imports.unwrap_or(defaults.imports),
            },
            factories,
            options,
            source: Some(ctx),
        })
    }

    /// Configured option values for a framework, in file order
    pub fn options(&self, framework: Framework) -> &[OptionEntry] {
        self.options
            .get(&framework)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Name of the file this configuration was read from, if any
    pub fn filename(&self) -> Option<&str> {
        self.source.as_ref().map(SourceContext::filename)
    }

    /// Build an error for a configured option the framework rejects,
    /// labelled at the option's value in the file.
    pub fn unknown_option_error(
        &self,
        entry: &OptionEntry,
        framework: Framework,
        expected: &[&str],
    ) -> Box<Error> {
        let ctx = self
            .source
            .clone()
            .unwrap_or_else(|| SourceContext::new("", CONFIG_FILE));
        ctx.unknown_option_error(&entry.name, framework.as_str(), expected.join(", "), entry.span)
    }
}
