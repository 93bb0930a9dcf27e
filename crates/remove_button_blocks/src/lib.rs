// crates/remove_button_blocks/src/lib.rs

//! Span removal of `<button …>…</button>` blocks keyed on their click handler.
//!
//! A block is identified by an opening tag that carries exactly
//! `onClick={() => HANDLER}` before its first `>`; everything from `<button`
//! up to the nearest following `</button>` is deleted, newlines included.
//! Text sharing a line with the block (indentation, trailing markup) is left
//! in place for the line filter to deal with.

use button_markers::{EMAIL_SETTINGS_HANDLER, QUOTE_SETTINGS_HANDLER};
use once_cell::sync::Lazy;
use regex::Regex;

static QUOTE_SETTINGS_RE: Lazy<Regex> =
    Lazy::new(|| button_block_pattern(QUOTE_SETTINGS_HANDLER));

static EMAIL_SETTINGS_RE: Lazy<Regex> =
    Lazy::new(|| button_block_pattern(EMAIL_SETTINGS_HANDLER));

/// Outcome of a single span removal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRemoval {
    pub content: String,
    /// Number of button blocks deleted.
    pub removed: usize,
}

/// Builds the block pattern for `handler`, which is matched literally.
pub fn button_block_pattern(handler: &str) -> Regex {
    let pattern = format!(
        r"(?s)<button[^>]*onClick=\{{\(\) => {}\}}[^>]*>.*?</button>",
        regex::escape(handler)
    );
    // The handler is escaped, so the pattern is always valid.
    Regex::new(&pattern).unwrap()
}

/// Deletes every non‑overlapping match of `pattern` from `content`.
pub fn remove_button_blocks(content: &str, pattern: &Regex) -> BlockRemoval {
    let removed = pattern.find_iter(content).count();
    if removed == 0 {
        return BlockRemoval {
            content: content.to_string(),
            removed,
        };
    }
    log::debug!("removing {} block(s) matching {}", removed, pattern.as_str());
    BlockRemoval {
        content: pattern.replace_all(content, "").into_owned(),
        removed,
    }
}

/// Removes the buttons that open the quote settings panel.
pub fn remove_quote_settings_buttons(content: &str) -> BlockRemoval {
    remove_button_blocks(content, &QUOTE_SETTINGS_RE)
}

/// Removes the buttons that open the email settings panel.
pub fn remove_email_settings_buttons(content: &str) -> BlockRemoval {
    remove_button_blocks(content, &EMAIL_SETTINGS_RE)
}
