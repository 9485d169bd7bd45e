//! Differ Domain Service
//!
//! Line diff between the original and patched document, used by the dry-run
//! preview.

use similar::{ChangeTag, TextDiff};

/// A single line of a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: DiffTag,
    /// 1-based line number in the original text
    pub old_line: Option<usize>,
    /// 1-based line number in the patched text
    pub new_line: Option<usize>,
    /// Line content, without its trailing newline
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Only insertions and deletions
    pub fn changed_lines(&self) -> Vec<&DiffLine> {
        self.lines
            .iter()
            .filter(|l| l.tag != DiffTag::Equal)
            .collect()
    }

    /// e.g. "+2, -2"
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    pub fn new() -> Self {
        Self
    }

    /// Line diff of `old` against `new`
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);
        let mut result = DiffResult::default();

        for change in text_diff.iter_all_changes() {
            let tag = DiffTag::from(change.tag());
            match tag {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }

            result.lines.push(DiffLine {
                tag,
                old_line: change.old_index().map(|i| i + 1),
                new_line: change.new_index().map(|i| i + 1),
                content: change.value().trim_end_matches(&['\r', '\n'][..]).to_string(),
            });
        }

        result
    }
}
