//! Built-in content keys and the remote locations they are fetched from.

/// Suffix shared by every license content key (`mit-license`, `gpl-license`, ...).
pub const LICENSE_SUFFIX: &str = "-license";

pub const PYTHON_GITIGNORE: &str = "python-gitignore";
pub const NODE_GITIGNORE: &str = "node-gitignore";
pub const HTML_SKELETON: &str = "html-skeleton";
pub const CSS_SKELETON: &str = "css-skeleton";
pub const NODE_PACKAGE_JSON: &str = "node-package-json";

const SPDX_TEXT: &str = "https://raw.githubusercontent.com/spdx/license-list-data/main/text";
const GITIGNORE: &str = "https://raw.githubusercontent.com/github/gitignore/main";
const H5BP: &str = "https://raw.githubusercontent.com/h5bp/html5-boilerplate/main/src";
const NODE_BOILERPLATE: &str =
    "https://raw.githubusercontent.com/hagopj13/node-express-boilerplate/master";

/// Content key to source location. Keys are unique; order is irrelevant.
pub fn builtin_sources() -> Vec<(String, String)> {
    let licenses = [
        ("mit", "MIT"),
        ("gpl", "GPL-3.0-only"),
        ("apache", "Apache-2.0"),
        ("bsd", "BSD-3-Clause"),
        ("cc", "CC0-1.0"),
        ("mpl", "MPL-2.0"),
        ("epl", "EPL-2.0"),
        ("lgpl", "LGPL-3.0-only"),
    ];

    let mut sources: Vec<(String, String)> = licenses
        .iter()
        .map(|(id, spdx)| {
            (
                format!("{id}{LICENSE_SUFFIX}"),
                format!("{SPDX_TEXT}/{spdx}.txt"),
            )
        })
        .collect();

    sources.extend(
        [
            (PYTHON_GITIGNORE, format!("{GITIGNORE}/Python.gitignore")),
            (NODE_GITIGNORE, format!("{GITIGNORE}/Node.gitignore")),
            (HTML_SKELETON, format!("{H5BP}/index.html")),
            (CSS_SKELETON, format!("{H5BP}/css/style.css")),
            (NODE_PACKAGE_JSON, format!("{NODE_BOILERPLATE}/package.json")),
        ]
        .into_iter()
        .map(|(key, location)| (key.to_string(), location)),
    );

    sources
}
