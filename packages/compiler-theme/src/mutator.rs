//! Scoped rewrite of the theme file's `classNames` literals.
//!
//! For each recognized component the mutator recomputes the target -> class
//! string map and splices it over the existing literal in
//! `<Kind>: <Kind>.extend({ ... classNames: { ... } })`, leaving every other
//! byte of the file untouched.

use std::ops::Range;

use indexmap::IndexMap;
use themeloom_parser::{aggregate, parse, ComponentDeclaration, ComponentKind, ParseError};
use thiserror::Error;

use crate::selector::style_rule_classes;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ThemeResult<T> = Result<T, ThemeError>;

/// Recompute every recognized component's class map and splice it over the
/// existing literal in `content`.
///
/// On any parse or serialization error the original text is returned
/// unchanged: a stale output file beats a destroyed one.
pub fn process_theme_content(content: &str) -> String {
    match try_process(content) {
        Ok(updated) => updated,
        Err(error) => {
            tracing::error!(%error, "failed to process theme content, leaving it unchanged");
            content.to_string()
        }
    }
}

fn try_process(content: &str) -> ThemeResult<String> {
    let declarations = parse(content)?;
    let components = aggregate(&declarations);
    rewrite_class_maps(content, &components)
}

/// Rewrite the class-map literal of each component in `components`.
///
/// A component with no matching literal in `content` is skipped with a
/// warning; text outside the matched spans is returned byte-identical.
pub fn rewrite_class_maps(
    content: &str,
    components: &[ComponentDeclaration],
) -> ThemeResult<String> {
    let mut updated = content.to_string();

    for component in components {
        let class_map = build_class_map(component);
        let literal = serde_json::to_string_pretty(&class_map)?;

        match find_class_map_span(&updated, component.component) {
            Some(span) => updated.replace_range(span, &literal),
            None => {
                tracing::warn!(
                    component = component.component.as_str(),
                    "no classNames literal found, skipping component"
                );
            }
        }
    }

    Ok(updated)
}

/// target -> resolved class string, insertion order = first-seen target order.
/// Later rules for an already-seen target append, they never overwrite, and
/// an empty fragment contributes no separator.
fn build_class_map(component: &ComponentDeclaration) -> IndexMap<String, String> {
    let mut class_map: IndexMap<String, String> = IndexMap::new();

    for rule in &component.styles {
        let fragment = style_rule_classes(rule);
        let entry = class_map.entry(rule.target.clone()).or_default();
        if fragment.is_empty() {
            continue;
        }
        if entry.is_empty() {
            *entry = fragment;
        } else {
            entry.push(' ');
            entry.push_str(&fragment);
        }
    }

    class_map
}

/// Locate the brace-delimited value of the `classNames` property inside
/// `<Kind>: <Kind>.extend(...)`. Returns the byte range of the `{ ... }`
/// literal, braces included.
///
/// The scan is anchored to the component name and walks the extend call with
/// a delimiter matcher that ignores braces inside strings and comments, so
/// nested objects and annotation comments cannot leak the match out of scope.
fn find_class_map_span(content: &str, kind: ComponentKind) -> Option<Range<usize>> {
    let name = kind.as_str();
    let bytes = content.as_bytes();
    let anchor = format!("{name}:");
    let extend = format!("{name}.extend(");

    let mut search_from = 0;
    while let Some(found) = content[search_from..].find(&anchor) {
        let anchor_start = search_from + found;
        search_from = anchor_start + anchor.len();

        // The anchor must be a standalone identifier, not a suffix of one.
        if anchor_start > 0 && is_identifier_byte(bytes[anchor_start - 1]) {
            continue;
        }

        let after_anchor = skip_whitespace(content, anchor_start + anchor.len());
        if !content[after_anchor..].starts_with(&extend) {
            continue;
        }

        let call_open = after_anchor + extend.len() - 1;
        let Some(call_close) = matching_delimiter(content, call_open) else {
            continue;
        };

        if let Some(span) = find_class_names_value(content, call_open + 1, call_close) {
            return Some(span);
        }
    }

    None
}

/// Find `classNames: { ... }` between `from` and `to` and return the span of
/// the object value.
fn find_class_names_value(content: &str, from: usize, to: usize) -> Option<Range<usize>> {
    const KEY: &str = "classNames";
    let bytes = content.as_bytes();

    let mut search_from = from;
    while let Some(found) = content[search_from..to].find(KEY) {
        let key_start = search_from + found;
        search_from = key_start + KEY.len();

        let boundary_before =
            key_start == 0 || !is_identifier_byte(bytes[key_start - 1]);
        let boundary_after = bytes
            .get(key_start + KEY.len())
            .map_or(true, |&b| !is_identifier_byte(b));
        if !boundary_before || !boundary_after {
            continue;
        }

        let after_key = skip_whitespace(content, key_start + KEY.len());
        if bytes.get(after_key) != Some(&b':') {
            continue;
        }
        let value_start = skip_whitespace(content, after_key + 1);
        if bytes.get(value_start) != Some(&b'{') {
            continue;
        }
        let value_end = matching_delimiter(content, value_start)?;
        return Some(value_start..value_end + 1);
    }

    None
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

fn skip_whitespace(content: &str, mut index: usize) -> usize {
    let bytes = content.as_bytes();
    while index < bytes.len() && bytes[index].is_ascii_whitespace() {
        index += 1;
    }
    index
}

/// Index of the delimiter closing the one at `open`, tracking string
/// literals, line comments, and block comments so their contents never
/// affect the depth count.
fn matching_delimiter(content: &str, open: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let (open_byte, close_byte) = match bytes.get(open)? {
        b'(' => (b'(', b')'),
        b'{' => (b'{', b'}'),
        b'[' => (b'[', b']'),
        _ => return None,
    };

    let mut depth = 0usize;
    let mut index = open;
    while index < bytes.len() {
        let byte = bytes[index];
        if byte == b'"' || byte == b'\'' || byte == b'`' {
            index = skip_string(bytes, index)?;
        } else if byte == b'/' && bytes.get(index + 1) == Some(&b'/') {
            while index < bytes.len() && bytes[index] != b'\n' {
                index += 1;
            }
        } else if byte == b'/' && bytes.get(index + 1) == Some(&b'*') {
            index = skip_block_comment(bytes, index)?;
        } else if byte == open_byte {
            depth += 1;
            index += 1;
        } else if byte == close_byte {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
            index += 1;
        } else {
            index += 1;
        }
    }

    None
}

/// Index just past the closing quote of the string starting at `start`.
fn skip_string(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut index = start + 1;
    while index < bytes.len() {
        if bytes[index] == b'\\' {
            index += 2;
        } else if bytes[index] == quote {
            return Some(index + 1);
        } else {
            index += 1;
        }
    }
    None
}

/// Index just past the `*/` closing the block comment starting at `start`.
fn skip_block_comment(bytes: &[u8], start: usize) -> Option<usize> {
    let mut index = start + 2;
    while index + 1 < bytes.len() {
        if bytes[index] == b'*' && bytes[index + 1] == b'/' {
            return Some(index + 2);
        }
        index += 1;
    }
    None
}
