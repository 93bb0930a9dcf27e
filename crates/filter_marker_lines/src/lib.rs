// crates/filter_marker_lines/src/lib.rs

/// Result of the line filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter {
    pub content: String,
    /// Number of lines dropped because they contained a marker.
    pub dropped: usize,
}

/// Drops every line of `content` that contains any of `markers` as a substring.
///
/// Lines are split on `\n` only and rejoined with `\n`, so a trailing newline
/// (which yields a final empty segment) survives, and a `\r` stays attached
/// to its line. When nothing is dropped the output equals the input byte for
/// byte.
pub fn filter_marker_lines(content: &str, markers: &[&str]) -> LineFilter {
    let mut kept = Vec::new();
    let mut dropped = 0;

    for line in content.split('\n') {
        if markers.iter().any(|marker| line.contains(marker)) {
            log::debug!("dropping marker line: {}", line.trim());
            dropped += 1;
            continue;
        }
        kept.push(line);
    }

    LineFilter {
        content: kept.join("\n"),
        dropped,
    }
}
