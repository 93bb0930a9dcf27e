// crates/remove_buttons/src/lib.rs

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use button_markers::MARKER_SUBSTRINGS;
use filter_marker_lines::filter_marker_lines;
use remove_button_blocks::{remove_email_settings_buttons, remove_quote_settings_buttons};

pub mod config;

/// What a removal pass did to the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Quote Settings button blocks removed.
    pub quote_blocks: usize,
    /// Email Settings button blocks removed.
    pub email_blocks: usize,
    /// Lines dropped by the marker filter.
    pub lines_dropped: usize,
    pub changed: bool,
}

impl RemovalReport {
    /// True when neither pass found anything to remove.
    pub fn is_noop(&self) -> bool {
        self.quote_blocks == 0 && self.email_blocks == 0 && self.lines_dropped == 0
    }
}

/// Removes both settings buttons from `content`, then drops any line still
/// mentioning them.
pub fn strip_settings_buttons(content: &str) -> (String, RemovalReport) {
    let quote = remove_quote_settings_buttons(content);
    let email = remove_email_settings_buttons(&quote.content);
    let filtered = filter_marker_lines(&email.content, &MARKER_SUBSTRINGS);

    let report = RemovalReport {
        quote_blocks: quote.removed,
        email_blocks: email.removed,
        lines_dropped: filtered.dropped,
        changed: filtered.content != content,
    };
    (filtered.content, report)
}

/// Rewrites `file_path` in place with both settings buttons removed.
///
/// The file is overwritten without a backup. When nothing matched, a warning
/// is logged and the file is rewritten unchanged, unless `strict` is set, in
/// which case an error is returned and the file is not touched.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF‑8 or written back, or
/// in strict mode when no button or marker line was found.
pub fn remove_buttons<P: AsRef<Path>>(file_path: P, strict: bool) -> Result<RemovalReport> {
    let path = file_path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;

    let (output, report) = strip_settings_buttons(&content);
    log::debug!(
        "{}: {} quote block(s), {} email block(s), {} marker line(s)",
        path.display(),
        report.quote_blocks,
        report.email_blocks,
        report.lines_dropped
    );

    if report.is_noop() {
        if strict {
            bail!(
                "No settings buttons or marker lines found in {}; file left untouched",
                path.display()
            );
        }
        log::warn!(
            "No settings buttons or marker lines found in {}; the markup may have changed shape",
            path.display()
        );
    }

    fs::write(path, output).with_context(|| format!("Error writing file {}", path.display()))?;
    Ok(report)
}
