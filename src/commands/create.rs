use console::style;
use miette::Result;
use sprout::error::SproutError;
use sprout::provision::{ContentOrigin, ProvisionReport};
use sprout::CreateOptions;

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let (name, template) = match (cli.name, cli.template) {
        (Some(name), Some(template)) => (name, template),
        (name, template) => {
            let missing: Vec<&str> = [("--name", name.is_none()), ("--template", template.is_none())]
                .into_iter()
                .filter_map(|(flag, absent)| absent.then_some(flag))
                .collect();
            return Err(SproutError::InvalidArguments {
                message: format!("missing {}", missing.join(" and ")),
            }
            .into());
        }
    };

    let options = CreateOptions {
        name,
        template,
        license: cli.license,
        offline: cli.offline,
        skip_environment: cli.no_venv,
        rollback_on_failure: cli.rollback,
        config_path: cli.config,
    };

    if cli.dry_run {
        let plan = sprout::plan(&options)?;

        println!(
            "\n{} Dry run \u{2014} {} project that would be created in {}:",
            style("==>").cyan().bold(),
            style(plan.template).bold(),
            style(plan.root.display()).cyan()
        );
        for step in plan.steps {
            println!("  {}", plan.describe(step));
        }
        println!(
            "\n{} Dry run \u{2014} nothing written.",
            style("\u{2139}").blue().bold()
        );
        return Ok(());
    }

    println!(
        "{} Creating {} project in {}",
        style("==>").cyan().bold(),
        style(&options.template).bold(),
        style(&options.name).cyan()
    );

    let report = sprout::create(options)?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &ProvisionReport) {
    for warning in &report.warnings {
        eprintln!(
            "{} {}",
            style("warning:").yellow().bold(),
            style(warning).yellow()
        );
    }

    let fallbacks = report
        .files
        .iter()
        .filter(|f| matches!(f.origin, ContentOrigin::Fallback { .. }))
        .count();

    println!(
        "\n{} Project created at {}",
        style("\u{2713}").green().bold(),
        style(report.root.display()).cyan()
    );
    println!(
        "  {} directories, {} files ({} fetched, {} from fallback)",
        report.directories.len(),
        report.files.len(),
        report.fetched_count(),
        fallbacks
    );
    if let Some(env) = &report.environment {
        println!("  virtualenv at {}", env.display());
    }
}
