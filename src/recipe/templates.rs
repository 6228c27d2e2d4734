use super::fallbacks;
use super::{file, text, BodyFormat, Content, Step};
use crate::catalog::sources;

pub(super) const PYTHON: &[Step] = &[
    Step::SetupEnvironment,
    Step::MakeDir("src"),
    Step::MakeDir("tests"),
    file("src/__init__.py", Content::Empty),
    file("src/main.py", Content::Literal(fallbacks::PYTHON_MAIN)),
    file("tests/__init__.py", Content::Empty),
    file("requirements.txt", Content::Empty),
    file("README.md", Content::Literal(fallbacks::PYTHON_README)),
    file(
        ".gitignore",
        text(sources::PYTHON_GITIGNORE, fallbacks::PYTHON_GITIGNORE),
    ),
    file("LICENSE", Content::License),
];

pub(super) const FLASK: &[Step] = &[
    Step::SetupEnvironment,
    Step::MakeDir("app"),
    Step::MakeDir("app/static"),
    Step::MakeDir("app/static/css"),
    Step::MakeDir("app/static/images"),
    Step::MakeDir("app/static/js"),
    Step::MakeDir("app/templates"),
    Step::MakeDir("tests"),
    file("app/__init__.py", Content::Empty),
    file("app/main.py", Content::Literal(fallbacks::FLASK_APP)),
    file(
        "app/templates/index.html",
        Content::Literal(fallbacks::FLASK_INDEX_HTML),
    ),
    file("app/static/css/style.css", Content::Empty),
    file("app/static/js/script.js", Content::Empty),
    file("tests/__init__.py", Content::Empty),
    file(
        "requirements.txt",
        Content::Literal(fallbacks::FLASK_REQUIREMENTS),
    ),
    file("README.md", Content::Literal(fallbacks::FLASK_README)),
    file(
        ".gitignore",
        text(sources::PYTHON_GITIGNORE, fallbacks::PYTHON_GITIGNORE),
    ),
    file("LICENSE", Content::License),
];

pub(super) const JAVASCRIPT: &[Step] = &[
    Step::MakeDir("assets"),
    file(
        "index.html",
        text(sources::HTML_SKELETON, fallbacks::HTML_SKELETON),
    ),
    file(
        "style.css",
        text(sources::CSS_SKELETON, fallbacks::CSS_SKELETON),
    ),
    file("script.js", Content::Empty),
    file("README.md", Content::Empty),
    file(
        ".gitignore",
        Content::Literal(fallbacks::STATIC_GITIGNORE),
    ),
    file("LICENSE", Content::License),
];

pub(super) const NODE: &[Step] = &[
    Step::MakeDir("src"),
    Step::MakeDir("src/config"),
    Step::MakeDir("src/controllers"),
    Step::MakeDir("src/middleware"),
    Step::MakeDir("src/models"),
    Step::MakeDir("src/routes"),
    Step::MakeDir("src/services"),
    Step::MakeDir("src/utils"),
    Step::MakeDir("src/validations"),
    Step::MakeDir("src/tests"),
    file("src/app.js", Content::Literal(fallbacks::NODE_APP)),
    file("src/server.js", Content::Literal(fallbacks::NODE_SERVER)),
    file(
        "package.json",
        Content::Fetch {
            key: sources::NODE_PACKAGE_JSON,
            fallback: fallbacks::PACKAGE_JSON,
            format: BodyFormat::Json,
        },
    ),
    file(".env", Content::Empty),
    file("README.md", Content::Literal(fallbacks::NODE_README)),
    file(
        ".gitignore",
        text(sources::NODE_GITIGNORE, fallbacks::NODE_GITIGNORE),
    ),
    file("LICENSE", Content::License),
];
