//! Turning dropped or pasted text into file paths.
//!
//! Dragging files onto a terminal makes the emulator paste their paths. The
//! formats differ: one path per line, shell-quoted words separated by spaces,
//! backslash-escaped spaces, or `file://` URIs with percent escapes. All of
//! them end up here.

use std::path::{Path, PathBuf};

/// Paths found in `text`, in the order they appear.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    parse_with(text, !cfg!(windows))
}

fn parse_with(text: &str, backslash_escapes: bool) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // An unquoted path containing spaces, typed or pasted as-is.
        if line.contains(' ') && Path::new(line).exists() {
            out.push(PathBuf::from(line));
            continue;
        }
        out.extend(
            split_words(line, backslash_escapes)
                .iter()
                .filter_map(|w| word_to_path(w)),
        );
    }
    out
}

/// Shell-like word splitting: whitespace separates words, quotes group them.
fn split_words(line: &str, backslash_escapes: bool) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut has_word = false;
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' if !in_double => {
                in_single = !in_single;
                has_word = true;
            }
            '"' if !in_single => {
                in_double = !in_double;
                has_word = true;
            }
            '\\' if backslash_escapes && !in_single => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    has_word = true;
                }
            }
            c if c.is_whitespace() && !in_single && !in_double => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}

fn word_to_path(word: &str) -> Option<PathBuf> {
    if word.is_empty() {
        return None;
    }
    let Some(rest) = word.strip_prefix("file://") else {
        return Some(PathBuf::from(word));
    };
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    let decoded = match urlencoding::decode(rest) {
        Ok(d) => d.into_owned(),
        Err(e) => {
            tracing::debug!("keeping undecodable uri {}: {}", word, e);
            rest.to_string()
        }
    };
    // file:///C:/x on Windows
    if cfg!(windows) {
        if let Some(stripped) = decoded.strip_prefix('/') {
            if stripped.as_bytes().get(1) == Some(&b':') {
                return Some(PathBuf::from(stripped));
            }
        }
    }
    Some(PathBuf::from(decoded))
}
