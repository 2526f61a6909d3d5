//! Docblock tag parsing.
//!
//! Splits a raw documentation comment into a summary and a sequence of tag
//! blocks, then parses each known tag into its structured form. A tag block
//! starts at a line beginning with `@`; following lines fold into it as
//! continuation text.

use crate::ast::{DefaultExpr, DocBlock, MethodParam, Tag, TypeExpr};
use crate::error::ParseError;
use crate::types::parse_type_expr;
use docgen_common::comments::doc_comment_content;

/// Parse a raw documentation comment into a [`DocBlock`].
///
/// Accepts the full `/** .. */` form or pre-stripped content. Malformed
/// syntax in any tag fails the whole block; error offsets point into the
/// stripped content.
pub fn parse_doc_block(raw: &str) -> Result<DocBlock, ParseError> {
    if raw.starts_with("/**") && !raw.trim_end().ends_with("*/") {
        return Err(ParseError::new("unterminated documentation comment", raw.len()));
    }
    let content = doc_comment_content(raw);

    let mut summary_lines: Vec<&str> = Vec::new();
    // (body, offset of the tag line within `content`)
    let mut blocks: Vec<(String, usize)> = Vec::new();
    let mut offset = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('@') {
            blocks.push((trimmed.to_string(), offset));
        } else if let Some((body, _)) = blocks.last_mut() {
            // Continuation line of the previous tag.
            if !trimmed.is_empty() {
                body.push(' ');
                body.push_str(trimmed);
            }
        } else {
            summary_lines.push(line);
        }
        offset += line.len() + 1;
    }

    let mut tags = Vec::with_capacity(blocks.len());
    for (body, at) in blocks {
        tags.push(parse_tag(&body, at)?);
    }

    Ok(DocBlock {
        summary: summary_lines.join("\n").trim().to_string(),
        tags,
        generics: None,
    })
}

fn parse_tag(body: &str, at: usize) -> Result<Tag, ParseError> {
    debug_assert!(body.starts_with('@'));
    let rest = &body[1..];
    let name_len = rest
        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-'))
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    let body = rest[name_len..].trim_start();

    match name.to_ascii_lowercase().as_str() {
        "param" => parse_param(body, at),
        "property" | "property-read" | "property-write" => parse_property(body, at),
        "return" | "returns" => parse_return(body, at),
        "throws" | "throw" => parse_throws(body, at),
        "var" => parse_var(body, at),
        "method" => parse_method(body, at),
        "template" => parse_template(body, at, false),
        "template-covariant" => parse_template(body, at, true),
        _ => Ok(Tag::Other {
            name: name.to_string(),
            body: body.to_string(),
        }),
    }
}

fn parse_param(body: &str, at: usize) -> Result<Tag, ParseError> {
    let (type_expr, rest) = take_optional_type(body, at)?;
    let (name, rest) = take_variable_name(rest);
    let (default, rest) = take_default(rest);
    Ok(Tag::Param {
        type_expr,
        name,
        default,
        description: non_empty(rest),
    })
}

fn parse_property(body: &str, at: usize) -> Result<Tag, ParseError> {
    let (type_expr, rest) = take_required_type(body, at)?;
    let (name, _) = take_variable_name(rest);
    Ok(Tag::Property { type_expr, name })
}

fn parse_return(body: &str, at: usize) -> Result<Tag, ParseError> {
    let (type_expr, rest) = take_required_type(body, at)?;
    Ok(Tag::Return {
        type_expr,
        description: non_empty(rest),
    })
}

fn parse_throws(body: &str, at: usize) -> Result<Tag, ParseError> {
    let (type_expr, _) = take_required_type(body, at)?;
    Ok(Tag::Throws { type_expr })
}

fn parse_var(body: &str, at: usize) -> Result<Tag, ParseError> {
    let (type_expr, rest) = take_required_type(body, at)?;
    let (name, _) = take_variable_name(rest);
    Ok(Tag::Var { type_expr, name })
}

fn parse_template(body: &str, at: usize, covariant: bool) -> Result<Tag, ParseError> {
    let body = body.trim_start();
    let name_len = body
        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
        .unwrap_or(body.len());
    if name_len == 0 {
        return Err(ParseError::new("@template expects a parameter name", at));
    }
    let name = body[..name_len].to_string();
    let mut rest = body[name_len..].trim_start();

    let mut bound = None;
    for marker in ["of", "as"] {
        if let Some(after) = rest.strip_prefix(marker) {
            if after.starts_with(char::is_whitespace) {
                let (bound_text, after_bound) = split_type_token(after.trim_start());
                bound = Some(parse_type_at(bound_text, at)?);
                rest = after_bound.trim_start();
                break;
            }
        }
    }

    Ok(Tag::Template {
        name,
        covariant,
        bound,
        description: non_empty(rest),
    })
}

/// `@method [static] [ReturnType] name(Type $param = default, ...)`
fn parse_method(body: &str, at: usize) -> Result<Tag, ParseError> {
    let mut rest = body.trim_start();
    let is_static = match rest.strip_prefix("static") {
        Some(after) if after.starts_with(char::is_whitespace) => {
            rest = after.trim_start();
            true
        }
        _ => false,
    };

    let (first, after_first) = split_type_token(rest);
    if first.is_empty() {
        return Err(ParseError::new("@method expects a signature", at));
    }

    // Either `ReturnType name(params)` or just `name(params)`; in the
    // latter case the token scanner has swallowed the parameter list into
    // the first token.
    let (return_type, signature) = match signature_start(after_first.trim_start()) {
        Some(_) => (Some(parse_type_at(first, at)?), after_first.trim_start()),
        None => (None, first),
    };

    let Some(paren) = signature_start(signature) else {
        return Err(ParseError::new("@method expects a parameter list", at));
    };
    let method_name = signature[..paren].to_string();
    let params_text = &signature[paren + 1..];
    let Some(close) = matching_paren(params_text) else {
        return Err(ParseError::new("unterminated @method parameter list", at));
    };
    let params = parse_method_params(&params_text[..close], at)?;

    Ok(Tag::Method {
        is_static,
        return_type,
        name: method_name,
        params,
    })
}

fn parse_method_params(text: &str, at: usize) -> Result<Vec<MethodParam>, ParseError> {
    let mut params = Vec::new();
    for piece in split_top_level(text, ',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let (type_expr, rest) = take_optional_type(piece, at)?;
        let (name, rest) = take_variable_name(rest);
        let Some(name) = name else {
            return Err(ParseError::new("@method parameter expects a $name", at));
        };
        let (default, _) = take_default(rest);
        params.push(MethodParam {
            type_expr,
            name,
            default,
        });
    }
    Ok(params)
}

// ---------------------------------------------------------------------------
// Token helpers
// ---------------------------------------------------------------------------

/// Leading type expression unless the text starts with a variable marker.
fn take_optional_type(text: &str, at: usize) -> Result<(Option<TypeExpr>, &str), ParseError> {
    let text = text.trim_start();
    if text.is_empty() || starts_variable(text) {
        return Ok((None, text));
    }
    let (token, rest) = split_type_token(text);
    Ok((Some(parse_type_at(token, at)?), rest))
}

fn take_required_type(text: &str, at: usize) -> Result<(TypeExpr, &str), ParseError> {
    let text = text.trim_start();
    let (token, rest) = split_type_token(text);
    if token.is_empty() {
        return Err(ParseError::new("expected a type expression", at));
    }
    Ok((parse_type_at(token, at)?, rest))
}

fn parse_type_at(text: &str, at: usize) -> Result<TypeExpr, ParseError> {
    parse_type_expr(text).map_err(|err| ParseError::new(err.message, at + err.offset))
}

/// `$name`, `&$name`, or `...$name`; returns the bare name.
fn take_variable_name(text: &str) -> (Option<String>, &str) {
    let text = text.trim_start();
    if !starts_variable(text) {
        return (None, text);
    }
    let stripped = text
        .trim_start_matches("...")
        .trim_start_matches('&')
        .trim_start_matches("...");
    let Some(stripped) = stripped.strip_prefix('$') else {
        return (None, text);
    };
    let name_len = stripped
        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
        .unwrap_or(stripped.len());
    if name_len == 0 {
        return (None, text);
    }
    (
        Some(stripped[..name_len].to_string()),
        stripped[name_len..].trim_start(),
    )
}

fn starts_variable(text: &str) -> bool {
    let head = text
        .trim_start_matches("...")
        .trim_start_matches('&')
        .trim_start_matches("...");
    head.starts_with('$')
}

/// `= <token>` - a class-constant fetch becomes `ClassConstFetch`, anything
/// else is kept as a raw literal.
fn take_default(text: &str) -> (Option<DefaultExpr>, &str) {
    let text = text.trim_start();
    let Some(after_eq) = text.strip_prefix('=') else {
        return (None, text);
    };
    let after_eq = after_eq.trim_start();
    let (token, rest) = split_value_token(after_eq);
    if token.is_empty() {
        return (None, rest);
    }
    let default = match token.rsplit_once("::") {
        Some((class, constant)) if is_const_name(constant) => DefaultExpr::ClassConstFetch {
            class: class.to_string(),
            constant: constant.to_string(),
            resolved: None,
        },
        _ => DefaultExpr::Literal(token.to_string()),
    };
    (Some(default), rest.trim_start())
}

fn is_const_name(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(ch) if ch.is_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// First whitespace-delimited type token, with two extensions: whitespace
/// inside brackets does not split, and a token ending in `:` keeps
/// consuming so `callable(int): int` stays one token.
fn split_type_token(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0usize;
    while pos < bytes.len() {
        let ch = bytes[pos];
        match ch {
            b'<' | b'(' | b'{' | b'[' => depth += 1,
            b'>' | b')' | b'}' | b']' => depth = depth.saturating_sub(1),
            ch if ch.is_ascii_whitespace() && depth == 0 => {
                if pos > 0 && bytes[pos - 1] == b':' {
                    // Callable return type follows; skip the gap and go on.
                    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                        pos += 1;
                    }
                    continue;
                }
                break;
            }
            _ => {}
        }
        pos += 1;
    }
    (&text[..pos], &text[pos..])
}

/// Value token for default expressions: quotes protect their content,
/// brackets nest, whitespace at depth zero ends the token.
fn split_value_token(text: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut end = text.len();
    for (idx, ch) in text.char_indices() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ch if ch.is_whitespace() && depth == 0 => {
                end = idx;
                break;
            }
            _ => {}
        }
    }
    (&text[..end], &text[end..])
}

/// Position of the `(` that opens a `name(params)` signature at the start
/// of `text`, if the prefix is a plain identifier.
fn signature_start(text: &str) -> Option<usize> {
    let paren = text.find('(')?;
    let name = &text[..paren];
    if name.is_empty() {
        return None;
    }
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }
    if chars.all(|ch| ch.is_alphanumeric() || ch == '_') {
        Some(paren)
    } else {
        None
    }
}

/// Byte index of the `)` matching an already-consumed `(`.
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split at `separator` occurrences outside any bracket pair.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' | '(' | '{' | '[' => depth += 1,
            '>' | ')' | '}' | ']' => depth = depth.saturating_sub(1),
            ch if ch == separator && depth == 0 => {
                pieces.push(&text[start..idx]);
                start = idx + separator.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_token_keeps_bracketed_whitespace_together() {
        let (token, rest) = split_type_token("array{0: int, name: string} rest");
        assert_eq!(token, "array{0: int, name: string}");
        assert_eq!(rest.trim(), "rest");
    }

    #[test]
    fn type_token_spans_callable_return() {
        let (token, rest) = split_type_token("callable(int): int getMapper()");
        assert_eq!(token, "callable(int): int");
        assert_eq!(rest.trim(), "getMapper()");
    }

    #[test]
    fn value_token_respects_quotes() {
        let (token, rest) = split_value_token("'a b' tail");
        assert_eq!(token, "'a b'");
        assert_eq!(rest.trim(), "tail");
    }
}
