//! Parser for theme annotation comments.
//!
//! Style rules live in doc comment blocks inside the theme source:
//! ```text
//! /**
//!  * @component Button
//!  * @props fullWidth | loading
//!  *
//!  * @target root @variant primary [ bg-red-500 text-xl ]
//!  */
//! ```

use crate::ast::{ComponentKind, StyleDeclaration};
use crate::error::{ParseError, ParseResult};

/// Scan every doc comment block in `content` and collect its style
/// declarations, in file order.
///
/// Blocks without an `@component` tag contribute nothing. Any grammar error
/// aborts the whole parse. A file with no blocks at all yields an empty list.
pub fn parse(content: &str) -> ParseResult<Vec<StyleDeclaration>> {
    let mut declarations = Vec::new();

    for block in extract_doc_comments(content) {
        parse_block(block, &mut declarations)?;
    }

    Ok(declarations)
}

/// Extract the inner text of every `/** ... */` block.
fn extract_doc_comments(content: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find("/**") {
        let after = &rest[start + 3..];
        match after.find("*/") {
            Some(end) => {
                blocks.push(&after[..end]);
                rest = &after[end + 2..];
            }
            // Unterminated block: nothing more to scan
            None => break,
        }
    }

    blocks
}

/// Remove the leading `*` decoration common to doc comment lines.
fn clean_line(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.trim_start(),
        None => trimmed,
    }
}

/// Split a directive line into its tag and the remainder.
fn split_tag(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with('@') {
        return None;
    }
    match line.find(char::is_whitespace) {
        Some(idx) => Some((&line[..idx], &line[idx..])),
        None => Some((line, "")),
    }
}

fn parse_block(block: &str, declarations: &mut Vec<StyleDeclaration>) -> ParseResult<()> {
    let mut component: Option<ComponentKind> = None;
    let mut props: Option<Vec<String>> = None;

    for raw_line in block.lines() {
        let line = clean_line(raw_line);
        let Some((tag, rest)) = split_tag(line) else {
            continue;
        };

        match tag {
            "@component" => {
                if component.is_some() {
                    return Err(ParseError::DuplicateComponent);
                }
                let name = rest.split_whitespace().next().unwrap_or("");
                component = Some(name.parse()?);
            }
            // Directives before @component in a block are ignored
            "@props" => {
                if component.is_some() {
                    props = Some(parse_props(rest));
                }
            }
            "@target" => {
                if let Some(kind) = component {
                    if let Some(declaration) = parse_target(kind, props.clone(), rest)? {
                        declarations.push(declaration);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// `@props fullWidth | loading | leftSection` -> ["fullWidth", "loading", "leftSection"]
fn parse_props(rest: &str) -> Vec<String> {
    rest.split('|')
        .map(str::trim)
        .filter(|prop| !prop.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the remainder of a `@target` line: the target name, an optional
/// run of condition directives, then the mandatory bracketed class list.
///
/// A bare `@target` with nothing after it is ignored; a target name with no
/// description is an error.
fn parse_target(
    component: ComponentKind,
    props: Option<Vec<String>>,
    rest: &str,
) -> ParseResult<Option<StyleDeclaration>> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    let Some((&target, description)) = parts.split_first() else {
        return Ok(None);
    };

    if description.is_empty() {
        return Err(ParseError::missing_description(target));
    }

    let mut variant: Option<String> = None;
    let mut size: Option<String> = None;
    let mut disabled = false;
    let mut active = false;
    let mut order: Option<String> = None;
    let mut index = 0;

    // Left-to-right condition scan; the first unrecognized token ends it.
    while index < description.len() {
        match description[index] {
            "@variant" => {
                let Some(value) = description.get(index + 1) else {
                    return Err(ParseError::missing_condition_value("@variant"));
                };
                variant = Some((*value).to_string());
                index += 2;
            }
            "@size" => {
                let Some(value) = description.get(index + 1) else {
                    return Err(ParseError::missing_condition_value("@size"));
                };
                size = Some((*value).to_string());
                index += 2;
            }
            "@disabled" => {
                disabled = true;
                index += 1;
            }
            "@active" => {
                active = true;
                index += 1;
            }
            "@order" => {
                order = description.get(index + 1).map(|value| (*value).to_string());
                index += 2;
            }
            _ => break,
        }
    }

    // Whatever is left has to be the bracket span.
    let remaining: &[&str] = description.get(index..).unwrap_or(&[]);
    if remaining.len() < 2
        || !remaining.first().is_some_and(|token| token.starts_with('['))
        || !remaining.last().is_some_and(|token| token.ends_with(']'))
    {
        return Err(ParseError::UnbracketedClassNames);
    }

    let joined = remaining.join(" ");
    let inner = &joined[1..joined.len() - 1];
    let class_names = inner.split_whitespace().map(str::to_string).collect();

    Ok(Some(StyleDeclaration {
        component,
        target: target.to_string(),
        props,
        variant,
        size,
        disabled,
        active,
        order,
        class_names,
    }))
}
