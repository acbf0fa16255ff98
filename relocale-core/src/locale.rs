//! Locale identifiers and Android resource directory naming.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix Android puts on per-locale string resource directories.
pub const RES_DIR_PREFIX: &str = "values-";

fn language_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[a-z]{2,3}$").expect("valid literal regex"))
}

// Android spells regions with an "r" prefix: values-de-rDE.
fn dir_region_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^([a-z]{2})-r([A-Z]{2})$").expect("valid literal regex"))
}

fn list_region_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^([a-z]{2})-([A-Z]{2})$").expect("valid literal regex"))
}

/// Language/region pair as it appears on a release locales list (`de`,
/// `en-US`).
///
/// Regions only pair with two-letter languages; that is what the resource
/// matcher accepts, and list entries are held to the same shape so a typo in
/// the allow-list fails loudly instead of silently never matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
}

impl LocaleId {
    /// Parse the list form: `de`, `fil`, `en-US`.
    pub fn parse(raw: &str) -> Result<LocaleId> {
        if language_regex().is_match(raw) {
            return Ok(LocaleId {
                language: raw.to_string(),
                region: None,
            });
        }

        let caps = list_region_regex()
            .captures(raw)
            .ok_or_else(|| anyhow!("malformed locale id: {raw}"))?;

        Ok(LocaleId {
            language: caps[1].to_string(),
            region: Some(caps[2].to_string()),
        })
    }

    /// Map a resource directory name back to a locale.
    ///
    /// Returns `None` for anything that is not a locale directory: the bare
    /// `values` dir, qualifier dirs (`values-sw600dp`, `values-night`,
    /// `values-v21`), or script-tagged dirs (`values-b+sr+Latn`).
    pub fn from_res_dir(dir_name: &str) -> Option<LocaleId> {
        let qualifier = dir_name.strip_prefix(RES_DIR_PREFIX)?;

        if language_regex().is_match(qualifier) {
            return Some(LocaleId {
                language: qualifier.to_string(),
                region: None,
            });
        }

        let caps = dir_region_regex().captures(qualifier)?;
        Some(LocaleId {
            language: caps[1].to_string(),
            region: Some(caps[2].to_string()),
        })
    }

    /// Resource directory name for this locale: `de` -> `values-de`,
    /// `de-DE` -> `values-de-rDE`.
    pub fn res_dir_name(&self) -> String {
        match &self.region {
            Some(region) => format!("{RES_DIR_PREFIX}{}-r{region}", self.language),
            None => format!("{RES_DIR_PREFIX}{}", self.language),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for LocaleId {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        LocaleId::parse(raw)
    }
}

impl Serialize for LocaleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LocaleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LocaleId::parse(&raw).map_err(D::Error::custom)
    }
}

/// Parse a release locales list into sorted, deduplicated ids.
pub fn parse_locale_list(raw: &[String]) -> Result<Vec<LocaleId>> {
    let mut ids = raw
        .iter()
        .map(|item| {
            LocaleId::parse(item).with_context(|| format!("invalid release locale: {item}"))
        })
        .collect::<Result<Vec<_>>>()?;

    ids.sort();
    ids.dedup();
    Ok(ids)
}
