use clap::Parser;

/// litpatch - strip the default cover image path from the player page
///
/// Replaces every `'/static/default_cover.png'` in `src/pages/player/index.vue`
/// with `''`. The file, match and replacement are fixed.
#[derive(Parser, Debug)]
#[command(name = "litpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show the change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
