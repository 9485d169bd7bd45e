//! Substitution Rule
//!
//! An immutable (match, replacement) pair applied with literal
//! replace-all semantics: non-overlapping, left to right, matched against the
//! original text only.

use crate::error::{PatchError, PatchResult};

/// File patched by the binary (relative to the working directory).
pub const BUILTIN_TARGET: &str = "src/pages/player/index.vue";

/// Literal the built-in rule searches for.
pub const BUILTIN_PATTERN: &str = "'/static/default_cover.png'";

/// Replacement for [`BUILTIN_PATTERN`]: an empty quoted string, so the patched
/// source keeps a valid string literal in place of the default cover path.
pub const BUILTIN_REPLACEMENT: &str = "''";

/// Literal substitution rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pattern: String,
    replacement: String,
}

/// Result of applying a rule to a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Text after substitution
    pub text: String,
    /// Number of occurrences replaced
    pub replacements: usize,
}

impl SubstitutionRule {
    /// Create a rule. Fails with [`PatchError::EmptyPattern`] when `pattern` is empty.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> PatchResult<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PatchError::EmptyPattern);
        }
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// The rule compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            pattern: BUILTIN_PATTERN.to_string(),
            replacement: BUILTIN_REPLACEMENT.to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Number of non-overlapping occurrences of the pattern in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        text.matches(self.pattern.as_str()).count()
    }

    /// Replace every non-overlapping occurrence of the pattern in `text`.
    pub fn apply(&self, text: &str) -> Substitution {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut replacements = 0;

        for (start, matched) in text.match_indices(self.pattern.as_str()) {
            out.push_str(&text[last..start]);
            out.push_str(&self.replacement);
            last = start + matched.len();
            replacements += 1;
        }
        out.push_str(&text[last..]);

        Substitution {
            text: out,
            replacements,
        }
    }
}
