use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// Built-in toggle groups bundled with the crate.
const DEFAULT_TOGGLES: &str = include_str!("defaults.json");

static DEFAULT_GROUPS: OnceLock<Vec<ToggleGroup>> = OnceLock::new();

/// An ordered list of interchangeable words.
///
/// Cycling moves forward or backward through the list, wrapping at the
/// ends. Word order is significant; a group of fewer than two words is
/// degenerate but allowed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ToggleGroup(Vec<String>);

impl ToggleGroup {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An error produced while parsing a toggle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload was not a JSON array of word lists.
    #[error("invalid toggle configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered list of toggle groups.
///
/// Group order is significant: when a word appears in more than one group,
/// the earliest group wins. Groups are never deduplicated.
///
/// The resolver holds no configuration state. Hosts build a `Config` from
/// their settings, pass it by reference, and rebuild it when the settings
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    groups: Vec<ToggleGroup>,
}

impl Config {
    pub fn new(groups: Vec<ToggleGroup>) -> Self {
        Self { groups }
    }

    /// The bundled default groups only.
    pub fn defaults() -> Self {
        Self {
            groups: default_groups().to_vec(),
        }
    }

    /// Custom groups, optionally followed by the bundled defaults.
    ///
    /// Custom groups come first so they shadow any default group sharing a
    /// word.
    pub fn with_custom(custom: Vec<ToggleGroup>, use_defaults: bool) -> Self {
        let mut groups = custom;
        if use_defaults {
            groups.extend(default_groups().iter().cloned());
        }
        Self { groups }
    }

    /// Parses host-supplied settings: a JSON array of word arrays, e.g.
    /// `[["true","false"],["on","off"]]`.
    ///
    /// Groups containing empty strings are accepted; empty words are
    /// skipped during resolution rather than rejected here.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let groups: Vec<ToggleGroup> = serde_json::from_str(json)?;
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[ToggleGroup] {
        &self.groups
    }
}

fn default_groups() -> &'static [ToggleGroup] {
    DEFAULT_GROUPS.get_or_init(|| {
        serde_json::from_str(DEFAULT_TOGGLES).expect("bundled defaults.json is valid")
    })
}
