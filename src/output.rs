//! Colored terminal output and summary formatting.
//!
//! The summary is the only line written to stdout. Everything else goes to
//! stderr and only in verbose mode.

use crate::config::Config;
use crate::workflows::{self, FileOutcome, FileReport};
use colored::Colorize;
use std::path::Path;

const PATCHED_PREFIX: &str = "Patched workflows to checkout ref:";
const NO_CHANGES: &str = "No workflow changes needed";

/// Plain summary line for a finished run.
#[must_use]
pub fn summary_message(branch: &str, any_changed: bool) -> String {
    if any_changed {
        format!("{PATCHED_PREFIX} {branch}")
    } else {
        NO_CHANGES.to_string()
    }
}

pub fn print_summary(reports: &[FileReport], branch: &str) {
    let any_changed = workflows::any_patched(reports);
    let message = summary_message(branch, any_changed);
    if any_changed {
        println!("{}", message.green());
    } else {
        println!("{}", message.dimmed());
    }
}

pub fn print_working_dir(path: &Path, config: &Config) {
    if !config.is_verbose() {
        return;
    }
    eprintln!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    );
}

/// Prints one status line per workflow file (verbose mode only).
pub fn print_file_report(config: &Config, report: &FileReport, root: &Path) {
    if !config.is_verbose() {
        return;
    }
    let name = report
        .path
        .strip_prefix(root)
        .unwrap_or(&report.path)
        .display()
        .to_string();

    match &report.outcome {
        FileOutcome::Missing => eprintln!("{} {}", "-".dimmed(), name.dimmed()),
        FileOutcome::Unchanged => eprintln!("{} {} unchanged", "=".cyan(), name.white()),
        FileOutcome::Patched { edits } => eprintln!(
            "{} {} {}",
            "✓".green(),
            name.white().bold(),
            format_edit_count(edits.len())
        ),
    }
}

fn format_edit_count(count: usize) -> String {
    if count == 1 {
        "(1 edit)".to_string()
    } else {
        format!("({count} edits)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use crate::patcher::RefEdit;
    use std::path::PathBuf;

    #[test]
    fn test_summary_message_names_branch_when_changed() {
        assert_eq!(
            summary_message("status-monitoring", true),
            "Patched workflows to checkout ref: status-monitoring"
        );
        assert_eq!(
            summary_message("status-monitoring", false),
            "No workflow changes needed"
        );
    }

    #[test]
    fn test_format_edit_count() {
        assert_eq!(format_edit_count(1), "(1 edit)");
        assert_eq!(format_edit_count(3), "(3 edits)");
    }

    #[test]
    fn test_print_file_report_handles_every_outcome() {
        // Smoke test: stderr output isn't captured, only check nothing panics.
        let config = Config {
            verbosity: Verbosity::Verbose,
        };
        let root = PathBuf::from("/repo");
        for outcome in [
            FileOutcome::Missing,
            FileOutcome::Unchanged,
            FileOutcome::Patched {
                edits: vec![RefEdit::Inserted { line: 2 }],
            },
        ] {
            let report = FileReport {
                path: root.join(".github/workflows/site.yml"),
                outcome,
            };
            print_file_report(&config, &report, &root);
            print_file_report(&Config::default(), &report, &root);
        }
    }
}
