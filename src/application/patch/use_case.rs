//! Patch Use Case
//!
//! Read → substitute → write, strictly in that order. Any failure aborts the
//! whole operation; nothing is retried.

use crate::domain::ports::TextStore;
use crate::error::PatchResult;

use super::options::PatchOptions;
use super::result::PatchOutcome;

/// Patch use case - applies a substitution rule to a single file
pub struct PatchUseCase<S>
where
    S: TextStore,
{
    store: S,
}

impl<S> PatchUseCase<S>
where
    S: TextStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Execute the patch.
    ///
    /// The file is rewritten even when the pattern does not occur, so a
    /// no-match run leaves identical bytes on disk.
    pub fn execute(&self, options: &PatchOptions) -> PatchResult<PatchOutcome> {
        let path = options.target.as_path();

        let original = self.store.read_text(path)?;
        let substitution = options.rule.apply(&original);

        tracing::info!(
            path = %path.display(),
            pattern = options.rule.pattern(),
            replacement = options.rule.replacement(),
            replacements = substitution.replacements,
            "applied substitution"
        );

        let written = if options.dry_run {
            tracing::debug!(path = %path.display(), "dry run, skipping write");
            false
        } else {
            self.store.write_text(path, &substitution.text)?;
            true
        };

        Ok(PatchOutcome {
            path: options.target.clone(),
            replacements: substitution.replacements,
            written,
            original,
            patched: substitution.text,
        })
    }
}
