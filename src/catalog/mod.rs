pub mod sources;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Result, SproutError};

pub use sources::LICENSE_SUFFIX;

/// The project archetype that selects which recipe runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Python,
    Flask,
    JavaScript,
    Node,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Python,
        Template::Flask,
        Template::JavaScript,
        Template::Node,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Template::Python => "python",
            Template::Flask => "flask",
            Template::JavaScript => "javascript",
            Template::Node => "node",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Template::Python => "Python package with src/ and tests/ and a virtualenv",
            Template::Flask => "Flask web app with static assets, templates and a virtualenv",
            Template::JavaScript => "Static site with index.html, style.css and script.js",
            Template::Node => "Node.js service with a layered src/ tree and package.json",
        }
    }

    /// Python-based templates get a virtual environment before anything else.
    pub fn needs_environment(self) -> bool {
        matches!(self, Template::Python | Template::Flask)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = SproutError;

    fn from_str(s: &str) -> Result<Self> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SproutError::InvalidTemplate {
                template: s.to_string(),
            })
    }
}

/// The license text embedded as `LICENSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum License {
    #[default]
    Mit,
    Gpl,
    Apache,
    Bsd,
    Cc,
    Mpl,
    Epl,
    Lgpl,
}

impl License {
    pub const ALL: [License; 8] = [
        License::Mit,
        License::Gpl,
        License::Apache,
        License::Bsd,
        License::Cc,
        License::Mpl,
        License::Epl,
        License::Lgpl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            License::Mit => "mit",
            License::Gpl => "gpl",
            License::Apache => "apache",
            License::Bsd => "bsd",
            License::Cc => "cc",
            License::Mpl => "mpl",
            License::Epl => "epl",
            License::Lgpl => "lgpl",
        }
    }

    /// Case-insensitive lookup.
    pub fn parse(id: &str) -> Option<License> {
        License::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(id))
    }

    pub fn content_key(self) -> String {
        license_key(self.as_str())
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_valid_template(id: &str) -> bool {
    id.parse::<Template>().is_ok()
}

pub fn is_valid_license(id: &str) -> bool {
    License::parse(id).is_some()
}

/// Content key for a license identifier, whether or not it is known.
pub fn license_key(id: &str) -> String {
    format!("{}{LICENSE_SUFFIX}", id.to_ascii_lowercase())
}

fn is_license_key(key: &str) -> bool {
    key.ends_with(LICENSE_SUFFIX)
}

/// A content key resolved to the location its body is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub key: String,
    pub location: String,
    /// The requested key when resolution fell back to the MIT license.
    pub fallback_from: Option<String>,
}

/// Registry of content keys and their remote locations.
#[derive(Debug, Clone)]
pub struct Catalog {
    sources: BTreeMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            sources: sources::builtin_sources().into_iter().collect(),
        }
    }

    /// Built-in mapping with user-supplied locations layered on top.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut catalog = Self::builtin();
        for (key, location) in overrides {
            catalog.sources.insert(key.clone(), location.clone());
        }
        catalog
    }

    pub fn source(&self, key: &str) -> Option<&str> {
        self.sources.get(key).map(String::as_str)
    }

    /// Look up the location for `key`.
    ///
    /// Unknown license keys resolve to the MIT entry with a fallback notice.
    /// Any other unknown key is a broken recipe and fails with `UnknownContentKey`.
    pub fn resolve_content_source(&self, key: &str) -> Result<ResolvedSource> {
        if let Some(location) = self.source(key) {
            return Ok(ResolvedSource {
                key: key.to_string(),
                location: location.to_string(),
                fallback_from: None,
            });
        }

        if is_license_key(key) {
            let mit = License::Mit.content_key();
            if let Some(location) = self.source(&mit) {
                warn!(requested = key, "unknown license key, falling back to mit");
                return Ok(ResolvedSource {
                    key: mit,
                    location: location.to_string(),
                    fallback_from: Some(key.to_string()),
                });
            }
        }

        Err(SproutError::UnknownContentKey {
            key: key.to_string(),
        })
    }

    pub fn resolve_license(&self, license: &str) -> Result<ResolvedSource> {
        self.resolve_content_source(&license_key(license))
    }
}
