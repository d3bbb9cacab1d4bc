//! Application-wide constants.
//!
//! Centralized defaults for the branch and the workflow files that get patched.

/// Branch checkout steps are pointed at when none is given.
pub const DEFAULT_BRANCH: &str = "status-monitoring";

/// Environment variable that overrides [`DEFAULT_BRANCH`].
pub const BRANCH_ENV_VAR: &str = "CHECKOUT_REF_BRANCH";

/// Directory holding the workflow definitions, relative to the repository root.
pub const WORKFLOW_DIR: &str = ".github/workflows";

/// Workflow files that are patched, in processing order.
/// Other workflows in the directory are never touched.
pub const TARGET_WORKFLOWS: [&str; 8] = [
    "graphs.yml",
    "response-time.yml",
    "setup.yml",
    "site.yml",
    "summary.yml",
    "update-template.yml",
    "updates.yml",
    "uptime.yml",
];

/// Returns the branch to patch in.
///
/// An explicit argument wins. Otherwise the CHECKOUT_REF_BRANCH environment
/// variable is used when set and non-empty, falling back to "status-monitoring".
///
/// Example: `CHECKOUT_REF_BRANCH=gh-pages patch-checkout-ref`
pub fn resolve_branch(arg: Option<String>) -> String {
    pick_branch(arg, std::env::var(BRANCH_ENV_VAR).ok())
}

fn pick_branch(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string())
}
