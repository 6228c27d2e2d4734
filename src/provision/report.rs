use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Template;
use crate::fetch::FetchError;

/// A non-fatal problem hit while running a recipe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("unknown license '{requested}', using mit")]
    LicenseFallback { requested: String },

    #[error("{path}: could not fetch {location} ({source}), wrote fallback content")]
    ContentFetchFailed {
        path: PathBuf,
        location: String,
        #[source]
        source: FetchError,
    },

    #[error("{path}: {message}")]
    StepFailed { path: PathBuf, message: String },

    #[error("environment setup skipped for {path}")]
    EnvironmentSkipped { path: PathBuf },
}

/// Where the bytes of a written file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    Empty,
    Literal,
    Fetched { location: String },
    Fallback { location: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub origin: ContentOrigin,
}

/// Outcome of a successful `create`; partial results show up as warnings.
#[derive(Debug)]
pub struct ProvisionReport {
    pub root: PathBuf,
    pub template: Template,
    pub directories: Vec<PathBuf>,
    pub files: Vec<WrittenFile>,
    /// The virtualenv directory, when one was created.
    pub environment: Option<PathBuf>,
    pub warnings: Vec<Warning>,
}

impl ProvisionReport {
    pub(crate) fn new(root: PathBuf, template: Template) -> Self {
        Self {
            root,
            template,
            directories: Vec::new(),
            files: Vec::new(),
            environment: None,
            warnings: Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn file(&self, path: &str) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.path == std::path::Path::new(path))
    }

    pub fn fetched_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.origin, ContentOrigin::Fetched { .. }))
            .count()
    }
}
