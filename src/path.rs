// src/path.rs
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::{JsonGetError, Result};

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathElement {
    Key(String),  // foo
    Index(usize), // [0]
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Key(k) => write!(f, "/{k}"),
            PathElement::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<&str> for PathElement {
    fn from(key: &str) -> Self {
        PathElement::Key(key.to_string())
    }
}

impl From<String> for PathElement {
    fn from(key: String) -> Self {
        PathElement::Key(key)
    }
}

impl From<usize> for PathElement {
    fn from(index: usize) -> Self {
        PathElement::Index(index)
    }
}

/// A parsed path: the ordered steps from the root to the addressed value.
///
/// Accepted text forms:
///   ""  or "/"          the root itself
///   foo/bar[2][0]       leading slash optional
///   [1][0]/foo          bare indices only at the very start
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathElement>", into = "Vec<PathElement>")]
pub struct JsonPath {
    elements: Vec<PathElement>,
}

impl JsonPath {
    /// Build a path from elements. Keys must be non-empty and free of
    /// `/`, `[` and `]` so the rendered form parses back to the same path.
    pub fn new(elements: Vec<PathElement>) -> Result<Self> {
        let valid = elements.iter().all(|e| match e {
            PathElement::Key(k) => !k.is_empty() && !k.contains(['/', '[', ']']),
            PathElement::Index(_) => true,
        });
        if !valid {
            return Err(JsonGetError::Syntax {
                path: elements.iter().join(""),
            });
        }
        Ok(Self { elements })
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TryFrom<Vec<PathElement>> for JsonPath {
    type Error = JsonGetError;

    fn try_from(elements: Vec<PathElement>) -> Result<Self> {
        Self::new(elements)
    }
}

impl From<JsonPath> for Vec<PathElement> {
    fn from(path: JsonPath) -> Self {
        path.elements
    }
}

/// Renders with literal index values, e.g. `/foo[2]/bar`. The root renders empty.
impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements.iter().join(""))
    }
}

impl FromStr for JsonPath {
    type Err = JsonGetError;

    fn from_str(s: &str) -> Result<Self> {
        parse_path(s)
    }
}

/// Parse path text into its element sequence.
pub fn parse_path(path: &str) -> Result<JsonPath> {
    if path.is_empty() || path == "/" {
        return Ok(JsonPath::root());
    }
    parse_rooted(path).map_err(|ParseErr::InvalidSyntax(reason)| {
        tracing::debug!(path, reason, "rejected JSON path");
        JsonGetError::Syntax {
            path: path.to_string(),
        }
    })
}

#[derive(Debug)]
enum ParseErr {
    InvalidSyntax(&'static str),
}

fn parse_rooted(path: &str) -> std::result::Result<JsonPath, ParseErr> {
    let rooted: Cow<'_, str> = if path.starts_with(['/', '[']) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    };

    let mut segments = rooted.split('/');
    let mut elements = Vec::new();

    // Whatever precedes the first slash may only be bracketed indices.
    if let Some(head) = segments.next().filter(|s| !s.is_empty()) {
        let mut p = Parser::new(head);
        if p.parse_indexes(&mut elements)? == 0 || !p.eof() {
            return Err(ParseErr::InvalidSyntax("leading segment must be indices only"));
        }
    }

    for segment in segments {
        let mut p = Parser::new(segment);
        let name = p.parse_name()?;
        elements.push(PathElement::Key(name.to_string()));
        p.parse_indexes(&mut elements)?;
        if !p.eof() {
            return Err(ParseErr::InvalidSyntax("unexpected text after index"));
        }
    }
    Ok(JsonPath { elements })
}

/// Cursor over a single slash-free segment.
struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Non-empty run of characters up to the first bracket.
    fn parse_name(&mut self) -> std::result::Result<&'a str, ParseErr> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == '[' || c == ']' {
                break;
            }
            self.i += c.len_utf8();
        }
        if self.i == start {
            return Err(ParseErr::InvalidSyntax("name expected"));
        }
        Ok(&self.s[start..self.i])
    }

    /// Zero or more `[N]` groups; returns how many were read.
    fn parse_indexes(&mut self, out: &mut Vec<PathElement>) -> std::result::Result<usize, ParseErr> {
        let mut n = 0;
        while self.consume_char('[') {
            let index = self.parse_index()?;
            self.expect_close()?;
            out.push(PathElement::Index(index));
            n += 1;
        }
        Ok(n)
    }

    fn parse_index(&mut self) -> std::result::Result<usize, ParseErr> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else {
                break;
            }
        }
        if self.i == start {
            return Err(ParseErr::InvalidSyntax("index expected"));
        }
        // Only overflow can fail here; no array is that long anyway.
        Ok(self.s[start..self.i].parse::<usize>().unwrap_or(usize::MAX))
    }

    fn expect_close(&mut self) -> std::result::Result<(), ParseErr> {
        if self.consume_char(']') {
            Ok(())
        } else {
            Err(ParseErr::InvalidSyntax("expected ']'"))
        }
    }

    fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}
