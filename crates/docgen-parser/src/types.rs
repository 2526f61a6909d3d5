//! Recursive-descent parser for docblock type expressions.
//!
//! Grammar, loosest-binding first:
//!
//! ```text
//! union        := intersection ('|' intersection)*
//! intersection := postfix ('&' postfix)*
//! postfix      := atom ('[]')*
//! atom         := '?' postfix
//!               | '(' union ')'
//!               | name '(' params ')' (':' postfix)?   // callable
//!               | ('array'|'list') '{' shape-items '}' // array shape
//!               | name '<' union (',' union)* '>'      // generic
//!               | name
//! ```
//!
//! Names may carry a leading `\` (fully-qualified marker), `\`-separated
//! segments, and hyphens (`class-string`). `$this` is accepted as a name.

use crate::ast::{ArrayShapeItem, TypeExpr};
use crate::error::ParseError;

/// Parse a complete type expression. Trailing input is an error.
pub fn parse_type_expr(text: &str) -> Result<TypeExpr, ParseError> {
    let mut cursor = Cursor::new(text);
    cursor.skip_ws();
    let expr = cursor.parse_union()?;
    cursor.skip_ws();
    if !cursor.at_end() {
        return Err(cursor.error("unexpected trailing input in type expression"));
    }
    Ok(expr)
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Cursor<'a> {
        Cursor { text, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{expected}'")))
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.text[self.pos..].starts_with(prefix)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.pos)
    }

    fn parse_union(&mut self) -> Result<TypeExpr, ParseError> {
        let first = self.parse_intersection()?;
        self.skip_ws();
        if self.peek() != Some('|') {
            return Ok(first);
        }
        let mut members = vec![first];
        while {
            self.skip_ws();
            self.eat('|')
        } {
            self.skip_ws();
            members.push(self.parse_intersection()?);
        }
        Ok(TypeExpr::Union(members))
    }

    fn parse_intersection(&mut self) -> Result<TypeExpr, ParseError> {
        let first = self.parse_postfix()?;
        self.skip_ws();
        if self.peek() != Some('&') {
            return Ok(first);
        }
        let mut members = vec![first];
        while {
            self.skip_ws();
            self.eat('&')
        } {
            self.skip_ws();
            members.push(self.parse_postfix()?);
        }
        Ok(TypeExpr::Intersection(members))
    }

    fn parse_postfix(&mut self) -> Result<TypeExpr, ParseError> {
        let mut expr = self.parse_atom()?;
        while self.starts_with("[]") {
            self.pos += 2;
            expr = TypeExpr::Array(Box::new(expr));
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<TypeExpr, ParseError> {
        self.skip_ws();
        match self.peek() {
            Some('?') => {
                self.bump();
                let inner = self.parse_postfix()?;
                Ok(TypeExpr::Nullable(Box::new(inner)))
            }
            Some('(') => {
                self.bump();
                let inner = self.parse_union()?;
                self.skip_ws();
                self.expect(')')?;
                Ok(inner)
            }
            Some(ch) if is_name_start(ch) => {
                let name = self.parse_name()?;
                match self.peek() {
                    Some('(') => self.parse_callable(name),
                    Some('{') if matches!(name.as_str(), "array" | "list") => {
                        self.parse_array_shape()
                    }
                    Some('<') => self.parse_generic(name),
                    _ => Ok(TypeExpr::ident(name)),
                }
            }
            Some(_) => Err(self.error("expected a type expression")),
            None => Err(self.error("unexpected end of type expression")),
        }
    }

    /// `\`-qualified name with optional leading marker; hyphens are part of
    /// the name when followed by a letter (`class-string`).
    fn parse_name(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.eat('\\');
        loop {
            let seg_start = self.pos;
            if self.eat('$') {
                // `$this`
            }
            match self.peek() {
                Some(ch) if ch.is_alphabetic() || ch == '_' => {
                    self.bump();
                }
                _ => return Err(self.error("expected a name")),
            }
            loop {
                match self.peek() {
                    Some(ch) if ch.is_alphanumeric() || ch == '_' => {
                        self.bump();
                    }
                    Some('-')
                        if self.text[self.pos + 1..]
                            .chars()
                            .next()
                            .is_some_and(|ch| ch.is_alphabetic()) =>
                    {
                        self.bump();
                    }
                    _ => break,
                }
            }
            debug_assert!(self.pos > seg_start);
            // Another segment only if the backslash is followed by a name
            // start; a dangling `\` belongs to whoever comes after us.
            if self.peek() == Some('\\')
                && self.text[self.pos + 1..]
                    .chars()
                    .next()
                    .is_some_and(is_name_start)
            {
                self.bump();
            } else {
                break;
            }
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn parse_generic(&mut self, base: String) -> Result<TypeExpr, ParseError> {
        self.expect('<')?;
        let mut args = Vec::new();
        loop {
            self.skip_ws();
            args.push(self.parse_union()?);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.expect('>')?;
            break;
        }
        Ok(TypeExpr::Generic {
            base: Box::new(TypeExpr::ident(base)),
            args,
        })
    }

    fn parse_callable(&mut self, tag: String) -> Result<TypeExpr, ParseError> {
        self.expect('(')?;
        let mut params = Vec::new();
        self.skip_ws();
        if !self.eat(')') {
            loop {
                self.skip_ws();
                // Variadic marker on the last parameter.
                if self.starts_with("...") {
                    self.pos += 3;
                    self.skip_ws();
                }
                let mut param = self.parse_union()?;
                self.skip_ws();
                if self.starts_with("...") {
                    self.pos += 3;
                    param = TypeExpr::Array(Box::new(param));
                    self.skip_ws();
                }
                // Optional-parameter marker, no semantic weight here.
                self.eat('=');
                params.push(param);
                self.skip_ws();
                if self.eat(',') {
                    continue;
                }
                self.expect(')')?;
                break;
            }
        }
        let return_type = if {
            self.skip_ws();
            self.eat(':')
        } {
            self.skip_ws();
            Some(Box::new(self.parse_postfix()?))
        } else {
            None
        };
        Ok(TypeExpr::Callable {
            tag: Box::new(TypeExpr::ident(tag)),
            params,
            return_type,
        })
    }

    fn parse_array_shape(&mut self) -> Result<TypeExpr, ParseError> {
        self.expect('{')?;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.eat('}') {
                break;
            }
            items.push(self.parse_shape_item()?);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.expect('}')?;
            break;
        }
        Ok(TypeExpr::ArrayShape(items))
    }

    fn parse_shape_item(&mut self) -> Result<ArrayShapeItem, ParseError> {
        // Keys are plain words or integers followed by `:` or `?:`. Anything
        // else is a bare value type.
        let saved = self.pos;
        if let Some((key, optional)) = self.try_shape_key() {
            let value = self.parse_union()?;
            return Ok(ArrayShapeItem {
                key: Some(key),
                optional,
                value,
            });
        }
        self.pos = saved;
        let value = self.parse_union()?;
        Ok(ArrayShapeItem {
            key: None,
            optional: false,
            value,
        })
    }

    fn try_shape_key(&mut self) -> Option<(String, bool)> {
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if ch.is_alphanumeric() || ch == '_' || ch == '-') {
            self.bump();
        }
        if self.pos == start {
            return None;
        }
        let key = self.text[start..self.pos].to_string();
        let optional = self.eat('?');
        self.skip_ws();
        if self.eat(':') {
            self.skip_ws();
            Some((key, optional))
        } else {
            None
        }
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '\\' || ch == '$'
}
