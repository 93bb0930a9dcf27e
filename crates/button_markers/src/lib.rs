// crates/button_markers/src/lib.rs

//! Shared constants for the settings‑button removal tool‑chain.

/// Target file, relative to the directory the tool is run from.
pub const DEFAULT_TARGET_FILE: &str = "src/components/QuoteManagement.tsx";

/// Click‑handler call wired to the **Quote Settings** button.
pub const QUOTE_SETTINGS_HANDLER: &str = "setShowSettings(true)";

/// Click‑handler call wired to the **Email Settings** button.
pub const EMAIL_SETTINGS_HANDLER: &str = "setShowEmailSettings(true)";

/// Any line containing one of these substrings is dropped after the
/// span removal pass, whether or not it was part of a matched block.
pub const MARKER_SUBSTRINGS: [&str; 4] = [
    "Quote Settings",
    "Email Settings",
    QUOTE_SETTINGS_HANDLER,
    EMAIL_SETTINGS_HANDLER,
];

pub const SUCCESS_MESSAGE: &str = "Buttons removed successfully!";
