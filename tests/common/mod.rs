//! Test infrastructure for checkout-ref-patch integration tests.
#![allow(dead_code)]

use anyhow::Result;
use checkout_ref_patch::constants::WORKFLOW_DIR;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A checkout step with a token but no ref, in the shape the Upptime
/// workflows use.
pub const TOKEN_ONLY_WORKFLOW: &str = "\
name: Uptime CI
on:
  schedule:
    - cron: \"*/5 * * * *\"
jobs:
  release:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
        with:
          token: ${{ secrets.GH_PAT || github.token }}
      - name: Check endpoint status
        uses: upptime/uptime-monitor@v1.41.0
        with:
          command: \"update\"
";

/// A checkout step that already pins a ref.
pub const PINNED_REF_WORKFLOW: &str = "\
jobs:
  build:
    steps:
      - name: Checkout
        uses: actions/checkout@v4
        with:
          ref: master
          token: ${{ secrets.GH_PAT }}
";

/// A workflow without any checkout `with:` block.
pub const BARE_CHECKOUT_WORKFLOW: &str = "\
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
      - run: echo done
";

/// A temporary repository root containing a workflow directory.
/// Automatically cleaned up when dropped.
pub struct TestWorkspace {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestWorkspace {
    /// Creates an empty root with `.github/workflows` in place.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        std::fs::create_dir_all(path.join(WORKFLOW_DIR))?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workflow_path(&self, name: &str) -> PathBuf {
        self.path.join(WORKFLOW_DIR).join(name)
    }

    pub fn write_workflow(&self, name: &str, content: &str) -> Result<()> {
        std::fs::write(self.workflow_path(name), content)?;
        Ok(())
    }

    pub fn read_workflow(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.workflow_path(name))?)
    }
}
