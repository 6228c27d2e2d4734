pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod fetch;
pub mod provision;
pub mod recipe;

use std::path::PathBuf;

use crate::catalog::{Catalog, License, Template};
use crate::config::{load_user_config, UserConfig};
use crate::env::PythonVenv;
use crate::error::{Result, SproutError};
use crate::fetch::{ContentFetcher, HttpFetcher, OfflineFetcher};
use crate::provision::{ProvisionOptions, ProvisionPlan, ProvisionReport, Provisioner};

pub struct CreateOptions {
    /// Directory to create; must not exist yet.
    pub name: String,
    pub template: String,
    /// Falls back to the config's `default_license`, then to mit.
    pub license: Option<String>,
    /// Skip the network and write fallback content everywhere.
    pub offline: bool,
    pub skip_environment: bool,
    pub rollback_on_failure: bool,
    /// Explicit config file instead of `~/.config/sprout/config.toml`.
    pub config_path: Option<PathBuf>,
}

/// Everything `--list` reports.
pub struct Listing {
    pub templates: Vec<Template>,
    pub licenses: Vec<License>,
}

pub fn list_options() -> Listing {
    Listing {
        templates: Template::ALL.to_vec(),
        licenses: License::ALL.to_vec(),
    }
}

fn check_arguments(options: &CreateOptions) -> Result<()> {
    let missing: Vec<&str> = [("--name", &options.name), ("--template", &options.template)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(flag, _)| flag)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SproutError::InvalidArguments {
            message: format!("missing {}", missing.join(" and ")),
        })
    }
}

fn effective_license(options: &CreateOptions, config: &UserConfig) -> Option<String> {
    options
        .license
        .clone()
        .or_else(|| config.default_license.clone())
}

fn provision_options(options: &CreateOptions) -> ProvisionOptions {
    ProvisionOptions {
        skip_environment: options.skip_environment,
        rollback_on_failure: options.rollback_on_failure,
    }
}

/// Validate a create request and return the steps it would run, without side effects.
pub fn plan(options: &CreateOptions) -> Result<ProvisionPlan> {
    check_arguments(options)?;
    options.template.parse::<Template>()?;
    let config = load_user_config(options.config_path.as_deref())?;
    let catalog = Catalog::with_overrides(&config.sources);
    let venv = PythonVenv::new(config.python());
    let fetcher = OfflineFetcher;

    Provisioner::new(&catalog, &fetcher, &venv)
        .with_options(provision_options(options))
        .plan(
            &PathBuf::from(&options.name),
            &options.template,
            effective_license(options, &config).as_deref(),
        )
}

/// Create a project: validate, make the root, and run the template's recipe.
pub fn create(options: CreateOptions) -> Result<ProvisionReport> {
    check_arguments(&options)?;
    options.template.parse::<Template>()?;
    let config = load_user_config(options.config_path.as_deref())?;
    let catalog = Catalog::with_overrides(&config.sources);
    let venv = PythonVenv::new(config.python());
    let fetcher: Box<dyn ContentFetcher> = if options.offline {
        Box::new(OfflineFetcher)
    } else {
        Box::new(HttpFetcher::new(config.fetch_timeout())?)
    };

    Provisioner::new(&catalog, fetcher.as_ref(), &venv)
        .with_options(provision_options(&options))
        .create(
            &PathBuf::from(&options.name),
            &options.template,
            effective_license(&options, &config).as_deref(),
        )
}
