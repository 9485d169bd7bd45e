//! Patch command UI views

use std::path::Path;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use litpatch::domain::services::{DiffResult, DiffTag};
use litpatch::PatchOutcome;

/// Fixed confirmation printed after a successful write.
pub const SUCCESS_MESSAGE: &str = "Replacement complete!";

pub fn render_patch_header(
    target: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "litpatch (Dry Run)"
    } else {
        "litpatch"
    };
    format!(
        "{} {}\n  Target: {}\n",
        Icon::Patch.colored(supports_color, supports_unicode),
        ColoredText::info(title).bold().render(supports_color),
        target.display()
    )
}

/// Changed lines only, with their line numbers.
pub fn render_preview(path: &Path, diff: &DiffResult, supports_color: bool) -> String {
    if !diff.has_changes() {
        return format!(
            "{}\n",
            ColoredText::dim(format!("No changes to {}", path.display())).render(supports_color)
        );
    }

    let mut out = String::new();
    out.push_str(&format!("--- a/{}\n", path.display()));
    out.push_str(&format!("+++ b/{}\n", path.display()));
    out.push_str(&format!("@@ {} @@\n", diff.summary()));

    for line in diff.changed_lines() {
        let rendered = match line.tag {
            DiffTag::Delete => ColoredText::error(format!(
                "-{}: {}",
                line.old_line.unwrap_or_default(),
                line.content
            )),
            DiffTag::Insert => ColoredText::success(format!(
                "+{}: {}",
                line.new_line.unwrap_or_default(),
                line.content
            )),
            DiffTag::Equal => continue,
        };
        out.push_str(&rendered.render(supports_color));
        out.push('\n');
    }

    out
}

/// The success line is the same in every environment; only `-v` adds detail.
pub fn render_success(
    outcome: &PatchOutcome,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!("{}\n", SUCCESS_MESSAGE);
    if verbose > 0 {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(replacement_summary(outcome)).render(supports_color)
        ));
    }
    out
}

pub fn render_dry_run_notice(
    outcome: &PatchOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}, no changes written\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning("Dry run:").render(supports_color),
        replacement_summary(outcome)
    )
}

fn replacement_summary(outcome: &PatchOutcome) -> String {
    let noun = if outcome.replacements == 1 {
        "replacement"
    } else {
        "replacements"
    };
    format!(
        "{} {} in {}",
        outcome.replacements,
        noun,
        outcome.path.display()
    )
}
