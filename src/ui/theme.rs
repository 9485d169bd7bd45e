use crossterm::style::Color;

/// Design tokens for the litpatch CLI.
///
/// All colours and icons used by views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const PATCH: &str = "🩹";
}

pub mod icons_ascii {
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const PATCH: &str = "[PATCH]";
}
