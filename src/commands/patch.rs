//! Patch command handler
//!
//! Applies the substitution rule to the target file and reports the result.

use anyhow::{Context, Result};

use litpatch::{LocalFs, PatchError, PatchOptions, PatchUseCase};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, PatchEvent, StartEvent};
use crate::ui::views::patch::{
    render_dry_run_notice, render_patch_header, render_preview, render_success,
};

const COMMAND: &str = "patch";

/// Execute the patch command
pub fn cmd_patch(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose);
    let options = PatchOptions::default().with_dry_run(cli.dry_run);

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    } else if ui.verbose > 0 {
        print!(
            "{}",
            render_patch_header(&options.target, cli.dry_run, ui.color, ui.unicode)
        );
    }

    let outcome = PatchUseCase::new(LocalFs::new())
        .execute(&options)
        .or_else(|err| report_failure(&ui, err))
        .with_context(|| format!("failed to patch {}", options.target.display()))?;

    if ui.json {
        emit_event(&PatchEvent::from_outcome(&outcome, cli.dry_run))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    if cli.dry_run {
        print!("{}", render_preview(&outcome.path, &outcome.diff(), ui.color));
        print!("{}", render_dry_run_notice(&outcome, ui.color, ui.unicode));
    } else {
        print!(
            "{}",
            render_success(&outcome, ui.verbose, ui.color, ui.unicode)
        );
    }

    Ok(())
}

/// Emit the JSON error event, then hand the error back for propagation.
fn report_failure<T>(ui: &UiContext, err: PatchError) -> std::result::Result<T, PatchError> {
    tracing::debug!(kind = err.kind(), "patch failed");
    if ui.json {
        // Ignored: the patch error itself still propagates.
        let _ = emit_event(&ErrorEvent::from_error(COMMAND, &err));
    }
    Err(err)
}
