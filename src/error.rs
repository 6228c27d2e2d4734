#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SproutError {
    #[error("Invalid arguments: {message}")]
    #[diagnostic(help("Pass --name and --template, or use --list to see what is available"))]
    InvalidArguments { message: String },

    #[error("Unknown template '{template}'")]
    #[diagnostic(help("Run `sprout --list` to see the supported templates"))]
    InvalidTemplate { template: String },

    #[error("Project directory already exists: {path}")]
    #[diagnostic(help("Choose another --name or remove the existing directory"))]
    PathAlreadyExists { path: PathBuf },

    #[error("Environment setup failed for {path}: {reason}")]
    #[diagnostic(help(
        "Make sure a Python 3 interpreter with the venv module is installed, or pass --no-venv"
    ))]
    EnvironmentSetupFailed { path: PathBuf, reason: String },

    #[error("No content source registered for key '{key}'")]
    #[diagnostic(help("This is a bug in a built-in recipe"))]
    UnknownContentKey { key: String },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("Check the TOML syntax in your config file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to build HTTP client")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SproutError>;
