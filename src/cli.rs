use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sprout",
    about = "Bootstrap a new Python, Flask, Node.js or static JavaScript project",
    version
)]
pub struct Cli {
    /// List the available templates and licenses
    #[arg(long)]
    pub list: bool,

    /// Name of the project directory to create
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project template (python, flask, javascript, node)
    #[arg(short, long)]
    pub template: Option<String>,

    /// License to embed as LICENSE (default: mit)
    #[arg(short, long)]
    pub license: Option<String>,

    /// Show the planned steps without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not fetch remote content; write built-in fallbacks instead
    #[arg(long)]
    pub offline: bool,

    /// Skip creating the Python virtualenv
    #[arg(long)]
    pub no_venv: bool,

    /// Remove the project directory again if a fatal step fails
    #[arg(long)]
    pub rollback: bool,

    /// Use this config file instead of ~/.config/sprout/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs for every step
    #[arg(short, long)]
    pub verbose: bool,
}
