//! litpatch CLI - literal in-place text substitution
//!
//! Usage: litpatch [OPTIONS]
//!
//! With no arguments, replaces `'/static/default_cover.png'` with `''` in
//! `src/pages/player/index.vue` and prints a confirmation.

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    commands::patch::cmd_patch(&cli)
}
