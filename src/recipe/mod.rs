//! Declarative recipes: one static, ordered step list per [`Template`].
//!
//! Adding a template means adding a step list in `templates.rs`; the
//! provisioner interprets every recipe with the same executor.

pub mod fallbacks;
mod templates;

use crate::catalog::Template;

/// Directory, relative to the project root, that receives the virtualenv.
pub const ENV_DIR: &str = ".venv";

/// How a fetched body is checked before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Text,
    Json,
}

/// Where a file's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Empty,
    Literal(&'static str),
    /// Fetched from the catalog location for `key`; `fallback` is written if the fetch fails.
    Fetch {
        key: &'static str,
        fallback: &'static str,
        format: BodyFormat,
    },
    /// The license text selected for this project.
    License,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fatal on failure; aborts the rest of the recipe.
    SetupEnvironment,
    MakeDir(&'static str),
    MakeFile {
        path: &'static str,
        content: Content,
    },
}

impl Step {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Step::SetupEnvironment)
    }
}

pub const fn text(key: &'static str, fallback: &'static str) -> Content {
    Content::Fetch {
        key,
        fallback,
        format: BodyFormat::Text,
    }
}

pub const fn file(path: &'static str, content: Content) -> Step {
    Step::MakeFile { path, content }
}

pub fn recipe_for(template: Template) -> &'static [Step] {
    match template {
        Template::Python => templates::PYTHON,
        Template::Flask => templates::FLASK,
        Template::JavaScript => templates::JAVASCRIPT,
        Template::Node => templates::NODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::HashSet;

    #[test]
    fn environment_setup_runs_first_only_for_python_templates() {
        for template in Template::ALL {
            let steps = recipe_for(template);
            let setups = steps
                .iter()
                .filter(|s| matches!(s, Step::SetupEnvironment))
                .count();
            if template.needs_environment() {
                assert_eq!(setups, 1, "{template}");
                assert_eq!(steps[0], Step::SetupEnvironment, "{template}");
            } else {
                assert_eq!(setups, 0, "{template}");
            }
        }
    }

    #[test]
    fn every_recipe_writes_license_gitignore_and_readme() {
        for template in Template::ALL {
            let files: HashSet<&str> = recipe_for(template)
                .iter()
                .filter_map(|s| match s {
                    Step::MakeFile { path, .. } => Some(*path),
                    _ => None,
                })
                .collect();
            for required in ["LICENSE", ".gitignore", "README.md"] {
                assert!(files.contains(required), "{template} is missing {required}");
            }
        }
    }

    #[test]
    fn license_file_uses_license_content() {
        for template in Template::ALL {
            let license = recipe_for(template).iter().find_map(|s| match s {
                Step::MakeFile {
                    path: "LICENSE",
                    content,
                } => Some(*content),
                _ => None,
            });
            assert_eq!(license, Some(Content::License), "{template}");
        }
    }

    #[test]
    fn every_fetch_key_is_in_the_catalog() {
        let catalog = Catalog::builtin();
        for template in Template::ALL {
            for step in recipe_for(template) {
                if let Step::MakeFile {
                    content: Content::Fetch { key, .. },
                    ..
                } = step
                {
                    assert!(catalog.source(key).is_some(), "{template}: {key}");
                }
            }
        }
    }

    #[test]
    fn directories_are_created_before_files_inside_them() {
        for template in Template::ALL {
            let mut made: HashSet<&str> = HashSet::new();
            for step in recipe_for(template) {
                match step {
                    Step::MakeDir(dir) => {
                        made.insert(*dir);
                    }
                    Step::MakeFile { path, .. } => {
                        if let Some((parent, _)) = path.rsplit_once('/') {
                            assert!(made.contains(parent), "{template}: {path} before {parent}");
                        }
                    }
                    Step::SetupEnvironment => {}
                }
            }
        }
    }

    #[test]
    fn only_environment_setup_is_fatal() {
        assert!(Step::SetupEnvironment.is_fatal());
        assert!(!Step::MakeDir("src").is_fatal());
        assert!(!file("README.md", Content::Empty).is_fatal());
    }
}
