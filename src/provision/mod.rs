mod report;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::catalog::{is_valid_license, Catalog, License, ResolvedSource, Template};
use crate::env::EnvironmentSetup;
use crate::error::{Result, SproutError};
use crate::fetch::{ContentFetcher, FetchError};
use crate::recipe::{fallbacks, recipe_for, BodyFormat, Content, Step, ENV_DIR};

pub use report::{ContentOrigin, ProvisionReport, Warning, WrittenFile};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionOptions {
    /// Record the environment step as skipped instead of running it.
    pub skip_environment: bool,
    /// Remove the project root if a fatal step fails after it was created.
    pub rollback_on_failure: bool,
}

/// A validated `create` call that has not touched the filesystem yet.
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub root: PathBuf,
    pub template: Template,
    pub license: ResolvedSource,
    pub steps: &'static [Step],
}

impl ProvisionPlan {
    /// One-line description of a step, for dry runs.
    pub fn describe(&self, step: &Step) -> String {
        match step {
            Step::SetupEnvironment => format!("venv    {ENV_DIR}"),
            Step::MakeDir(dir) => format!("mkdir   {dir}/"),
            Step::MakeFile { path, content } => {
                let origin = match content {
                    Content::Empty => "empty".to_string(),
                    Content::Literal(_) => "inline".to_string(),
                    Content::Fetch { key, .. } => format!("fetch {key}"),
                    Content::License => format!("fetch {}", self.license.key),
                };
                format!("create  {path} ({origin})")
            }
        }
    }
}

/// Runs exactly one recipe against a fresh project root.
pub struct Provisioner<'a> {
    catalog: &'a Catalog,
    fetcher: &'a dyn ContentFetcher,
    environment: &'a dyn EnvironmentSetup,
    options: ProvisionOptions,
}

impl<'a> Provisioner<'a> {
    pub fn new(
        catalog: &'a Catalog,
        fetcher: &'a dyn ContentFetcher,
        environment: &'a dyn EnvironmentSetup,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            environment,
            options: ProvisionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ProvisionOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate and run the recipe for `template` at `root`.
    pub fn create(
        &self,
        root: &Path,
        template: &str,
        license: Option<&str>,
    ) -> Result<ProvisionReport> {
        let plan = self.plan(root, template, license)?;
        self.execute(&plan)
    }

    /// Check preconditions and resolve the license source without side effects.
    pub fn plan(&self, root: &Path, template: &str, license: Option<&str>) -> Result<ProvisionPlan> {
        let template: Template = template.parse()?;

        let license_id = license.unwrap_or(License::Mit.as_str());
        if !is_valid_license(license_id) {
            debug!(license = license_id, "license not in catalog, deferring to fetch fallback");
        }
        let license = self.catalog.resolve_license(license_id)?;

        if root.exists() {
            return Err(SproutError::PathAlreadyExists {
                path: root.to_path_buf(),
            });
        }

        Ok(ProvisionPlan {
            root: root.to_path_buf(),
            template,
            license,
            steps: recipe_for(template),
        })
    }

    pub fn execute(&self, plan: &ProvisionPlan) -> Result<ProvisionReport> {
        let created_parents = create_root(&plan.root)?;

        let mut report = ProvisionReport::new(plan.root.clone(), plan.template);
        if let Some(requested) = &plan.license.fallback_from {
            report.warnings.push(Warning::LicenseFallback {
                requested: requested
                    .strip_suffix(crate::catalog::LICENSE_SUFFIX)
                    .unwrap_or(requested)
                    .to_string(),
            });
        }

        for step in plan.steps {
            if let Err(e) = self.run_step(step, plan, &mut report) {
                if self.options.rollback_on_failure {
                    rollback(&plan.root, &created_parents);
                }
                return Err(e);
            }
        }

        Ok(report)
    }

    /// Errors returned here are fatal; everything else lands in `report.warnings`.
    fn run_step(&self, step: &Step, plan: &ProvisionPlan, report: &mut ProvisionReport) -> Result<()> {
        match step {
            Step::SetupEnvironment => {
                let env_dir = plan.root.join(ENV_DIR);
                if self.options.skip_environment {
                    warn!(path = %env_dir.display(), "environment setup skipped");
                    report.warnings.push(Warning::EnvironmentSkipped { path: env_dir });
                } else {
                    self.environment.setup(&env_dir)?;
                    report.environment = Some(env_dir);
                }
            }
            Step::MakeDir(dir) => {
                let path = plan.root.join(dir);
                debug!(path = %path.display(), "creating directory");
                match std::fs::create_dir_all(&path) {
                    Ok(()) => report.directories.push(PathBuf::from(dir)),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "directory creation failed");
                        report.warnings.push(Warning::StepFailed {
                            path: PathBuf::from(dir),
                            message: format!("creating directory: {e}"),
                        });
                    }
                }
            }
            Step::MakeFile { path, content } => {
                let (body, origin) = self.resolve_content(path, content, plan, report)?;
                let dest = plan.root.join(path);
                debug!(path = %dest.display(), "writing file");
                match std::fs::write(&dest, body) {
                    Ok(()) => report.files.push(WrittenFile {
                        path: PathBuf::from(path),
                        origin,
                    }),
                    Err(e) => {
                        warn!(path = %dest.display(), error = %e, "file creation failed");
                        report.warnings.push(Warning::StepFailed {
                            path: PathBuf::from(path),
                            message: format!("writing file: {e}"),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn resolve_content(
        &self,
        path: &str,
        content: &Content,
        plan: &ProvisionPlan,
        report: &mut ProvisionReport,
    ) -> Result<(String, ContentOrigin)> {
        let (location, fallback, format) = match *content {
            Content::Empty => return Ok((String::new(), ContentOrigin::Empty)),
            Content::Literal(text) => return Ok((text.to_string(), ContentOrigin::Literal)),
            Content::Fetch {
                key,
                fallback,
                format,
            } => {
                let resolved = self.catalog.resolve_content_source(key)?;
                (resolved.location, fallback, format)
            }
            Content::License => (
                plan.license.location.clone(),
                fallbacks::MIT_LICENSE,
                BodyFormat::Text,
            ),
        };

        match self
            .fetcher
            .fetch(&location)
            .and_then(|body| check_format(body, format))
        {
            Ok(body) => Ok((body, ContentOrigin::Fetched { location })),
            Err(source) => {
                warn!(path, location = %location, error = %source, "fetch failed, writing fallback");
                report.warnings.push(Warning::ContentFetchFailed {
                    path: PathBuf::from(path),
                    location: location.clone(),
                    source,
                });
                Ok((fallback.to_string(), ContentOrigin::Fallback { location }))
            }
        }
    }
}

fn check_format(body: String, format: BodyFormat) -> std::result::Result<String, FetchError> {
    match format {
        BodyFormat::Text => Ok(body),
        BodyFormat::Json => match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(_) => Ok(body),
            Err(_) => Err(FetchError::InvalidBody),
        },
    }
}

/// The only all-or-nothing boundary: an existing root is never merged into.
///
/// Returns the missing parent directories it had to create, innermost first.
fn create_root(root: &Path) -> Result<Vec<PathBuf>> {
    let created_parents: Vec<PathBuf> = root
        .ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .take_while(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();

    if let Some(innermost) = created_parents.first() {
        std::fs::create_dir_all(innermost).map_err(|e| SproutError::Io {
            context: format!("creating parent directory {}", innermost.display()),
            source: e,
        })?;
    }

    std::fs::create_dir(root).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => SproutError::PathAlreadyExists {
            path: root.to_path_buf(),
        },
        _ => SproutError::Io {
            context: format!("creating project directory {}", root.display()),
            source: e,
        },
    })?;

    Ok(created_parents)
}

/// Remove the root and then any parents `create_root` made for it.
fn rollback(root: &Path, created_parents: &[PathBuf]) {
    match std::fs::remove_dir_all(root) {
        Ok(()) => debug!(path = %root.display(), "rolled back project directory"),
        Err(e) => {
            warn!(path = %root.display(), error = %e, "rollback failed");
            return;
        }
    }
    for parent in created_parents {
        if let Err(e) = std::fs::remove_dir(parent) {
            warn!(path = %parent.display(), error = %e, "could not remove created parent");
            return;
        }
    }
}
