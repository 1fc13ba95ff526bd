//! Dropped Path Parsing
//!
//! Terminals deliver a file dragged onto the window as pasted text. Depending
//! on the terminal, that text is a bare path, a quoted path, a path with
//! backslash-escaped spaces, or a `file://` URI. Several files arrive
//! separated by newlines.

use std::path::PathBuf;

/// Parse pasted drop text into candidate paths, in order
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| PathBuf::from(normalize_dropped_path(line)))
        .collect()
}

fn normalize_dropped_path(raw: &str) -> String {
    let unquoted = strip_quotes(raw);

    if let Some(rest) = unquoted.strip_prefix("file://") {
        // file://localhost/path and file:///path
        let rest = rest.strip_prefix("localhost").unwrap_or(rest);
        return percent_decode(rest);
    }

    unescape_backslashes(unquoted)
}

fn strip_quotes(raw: &str) -> &str {
    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

fn unescape_backslashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn percent_decode(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}
