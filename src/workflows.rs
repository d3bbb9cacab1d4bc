//! Driver that applies the patcher to the known workflow files.
//!
//! Files are handled one at a time in [`TARGET_WORKFLOWS`] order. A missing
//! file is skipped; any read or write failure aborts the run immediately and
//! leaves the files processed so far as they were written.

use crate::constants::{TARGET_WORKFLOWS, WORKFLOW_DIR};
use crate::patcher::{self, RefEdit};
use anyhow::Context;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Callback receiving one diagnostic line per event.
pub type PatchLogger = fn(&str);

pub fn verbose_logger(message: &str) {
    eprintln!("  {}", message.dimmed());
}

pub fn no_op_logger(_message: &str) {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Missing,
    Unchanged,
    Patched { edits: Vec<RefEdit> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    #[must_use]
    pub fn is_patched(&self) -> bool {
        matches!(self.outcome, FileOutcome::Patched { .. })
    }
}

/// Candidate workflow paths under `root`, in processing order.
#[must_use]
pub fn workflow_paths(root: &Path) -> Vec<PathBuf> {
    let dir = root.join(WORKFLOW_DIR);
    TARGET_WORKFLOWS.iter().map(|name| dir.join(name)).collect()
}

/// Patches a single workflow file in place.
pub fn patch_file(path: &Path, branch: &str, log: PatchLogger) -> anyhow::Result<FileOutcome> {
    if !path.exists() {
        log(&format!("{}: not found, skipping", path.display()));
        return Ok(FileOutcome::Missing);
    }

    let original = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let outcome = patcher::patch_checkout_ref(&original, branch);

    if !outcome.changed {
        log(&format!("{}: already up to date", path.display()));
        return Ok(FileOutcome::Unchanged);
    }

    std::fs::write(path, &outcome.text)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    for edit in &outcome.edits {
        log(&describe_edit(path, edit, branch));
    }
    Ok(FileOutcome::Patched {
        edits: outcome.edits,
    })
}

/// Patches every known workflow under `root`.
pub fn patch_workflows(
    root: &Path,
    branch: &str,
    log: PatchLogger,
) -> anyhow::Result<Vec<FileReport>> {
    workflow_paths(root)
        .into_iter()
        .map(|path| {
            let outcome = patch_file(&path, branch, log)?;
            Ok(FileReport { path, outcome })
        })
        .collect()
}

#[must_use]
pub fn any_patched(reports: &[FileReport]) -> bool {
    reports.iter().any(FileReport::is_patched)
}

fn describe_edit(path: &Path, edit: &RefEdit, branch: &str) -> String {
    match edit {
        RefEdit::Replaced { line, previous } => format!(
            "{}:{}: replaced `{}` with `ref: {}`",
            path.display(),
            line + 1,
            previous.trim(),
            branch
        ),
        RefEdit::Inserted { line } => {
            format!("{}:{}: inserted `ref: {}`", path.display(), line + 1, branch)
        }
    }
}
