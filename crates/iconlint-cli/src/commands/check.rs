//! Resource check command

use anyhow::{bail, Context, Result};
use iconlint_check::{Analyzer, IssueId, IssueRegistry, LintConfig, Report};
use iconlint_resource::{DirectoryProvider, ResourceSnapshot};
use std::path::Path;

pub struct CheckArgs {
    pub path: String,
    pub format: String,
    pub config: Option<String>,
    pub min_sdk: Option<u32>,
    pub no_abbreviate: bool,
    pub order: Option<String>,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
    pub only: Vec<String>,
    pub no_conventions: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        bail!("unknown format '{}'; valid values: text, json", args.format);
    }

    let project = Path::new(&args.path);
    let mut config = match &args.config {
        Some(file) => LintConfig::load_with(project, Some(Path::new(file)))
            .with_context(|| format!("loading {}", file))?,
        None => LintConfig::load(project)?,
    };
    apply_flags(&mut config, &args)?;

    let mut registry = config.registry();
    apply_issue_flags(&mut registry, &args)?;

    let provider = DirectoryProvider::for_project(project)?;
    let snapshot = ResourceSnapshot::load(&provider)?;
    tracing::info!(files = snapshot.file_count(), "loaded resources");

    let ignore = config.ignore_rules();
    let signals = config.signals();
    let diagnostics = Analyzer::new(&registry, &config.options)
        .with_ignore(&ignore)
        .with_signals(&signals)
        .analyze(&snapshot);
    let report = Report::new(diagnostics);

    if args.format == "json" {
        println!("{}", report.to_json()?);
    } else {
        let text = report.to_text();
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn apply_flags(config: &mut LintConfig, args: &CheckArgs) -> Result<()> {
    if args.min_sdk.is_some() {
        config.options.min_sdk = args.min_sdk;
    }
    if args.no_abbreviate {
        config.options.abbreviate = false;
    }
    if let Some(order) = &args.order {
        config.options.order = order.parse()?;
    }
    if args.no_conventions {
        config.naming_conventions = false;
    }
    Ok(())
}

fn parse_ids(ids: &[String]) -> Result<Vec<IssueId>> {
    ids.iter()
        .map(|id| id.parse::<IssueId>().map_err(Into::into))
        .collect()
}

fn apply_issue_flags(registry: &mut IssueRegistry, args: &CheckArgs) -> Result<()> {
    if !args.only.is_empty() {
        registry.enable_only(&parse_ids(&args.only)?);
    }
    for id in parse_ids(&args.enable)? {
        registry.set_enabled(id, true);
    }
    for id in parse_ids(&args.disable)? {
        registry.set_enabled(id, false);
    }
    Ok(())
}
