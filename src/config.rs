//! Configuration types for CLI verbosity.

use crate::workflows::{self, PatchLogger};

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
}

impl Config {
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Returns the patch logger matching the verbosity settings.
    ///
    /// Config only picks the callback; the loggers themselves live next to
    /// the driver that calls them.
    #[must_use]
    pub fn patch_logger(&self) -> PatchLogger {
        if self.is_verbose() {
            workflows::verbose_logger
        } else {
            workflows::no_op_logger
        }
    }
}

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
