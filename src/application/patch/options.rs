//! Patch options

use std::path::PathBuf;

use crate::domain::rule::{SubstitutionRule, BUILTIN_TARGET};

/// Options for the patch command
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// File to patch
    pub target: PathBuf,
    /// Rule to apply
    pub rule: SubstitutionRule,
    /// Compute the result without writing it
    pub dry_run: bool,
}

impl Default for PatchOptions {
    /// The built-in rule applied to the built-in target
    fn default() -> Self {
        Self {
            target: PathBuf::from(BUILTIN_TARGET),
            rule: SubstitutionRule::builtin(),
            dry_run: false,
        }
    }
}

impl PatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target file
    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    /// Set substitution rule
    pub fn with_rule(mut self, rule: SubstitutionRule) -> Self {
        self.rule = rule;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
