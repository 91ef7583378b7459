//! Issue listing command

use anyhow::Result;
use iconlint_check::{IssueId, IssueRegistry};

pub fn run(explain: Option<&str>) -> Result<()> {
    let registry = IssueRegistry::builtin();

    if let Some(id) = explain {
        let id: IssueId = id.parse()?;
        if let Some(issue) = registry.get(id) {
            println!("{}: {}", issue.id, issue.summary);
            println!();
            println!("Priority: {}/10", issue.priority);
            println!("Severity: {}", issue.default_severity.label());
            println!(
                "Enabled by default: {}",
                if issue.enabled_by_default { "yes" } else { "no" }
            );
            println!();
            println!("{}", issue.explanation);
        }
        return Ok(());
    }

    println!("{} issue(s):", registry.all().len());
    for issue in registry.all() {
        let marker = if issue.enabled_by_default { "" } else { " (off by default)" };
        println!(
            "  {:<26} {:>2}  {}{}",
            issue.id.as_str(),
            issue.priority,
            issue.summary,
            marker
        );
    }
    Ok(())
}
