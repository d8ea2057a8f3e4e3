//! Fragment parser — reads one generated search-index file into
//! [`IndexEntry`](crate::IndexEntry) records.
//!
//! The wire format is the array literal Doxygen emits under
//! `docs/html/search/`:
//!
//! ```text
//! var searchData=
//! [
//!   ['capture_13',['capture',['../classCamera.html#a813d…',1,'Camera']]],
//!   ['calib_0',['Calib',['../md_README.html',1,'']]]
//! ];
//! ```
//!
//! A record is `[key, [name, target…]]`; a target is `[url, flag, label]`.
//! The numeric flag is constant in generated output and is discarded here.
//! The first structural problem aborts the parse with a positioned
//! [`ParseError`] — a half-loaded static index is worthless.

use crate::error::{ParseError, ParseResult};
use crate::types::{IndexEntry, Target};

/// A parsed fragment: the JS variable name (kept for round-tripping) plus
/// its records in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub variable: String,
    pub entries: Vec<IndexEntry>,
}

/// Parse one fragment source file.
pub fn parse(source: &str) -> ParseResult<Fragment> {
    let mut cur = Cursor::new(source);

    cur.skip_ws();
    cur.expect_keyword("var")?;
    cur.skip_ws();
    let variable = cur.parse_ident()?;
    cur.skip_ws();
    cur.expect('=', "'='")?;
    cur.skip_ws();
    let entries = parse_records(&mut cur)?;
    cur.skip_ws();
    cur.eat(';');
    cur.skip_ws();
    if cur.peek().is_some() {
        return Err(cur.unexpected("end of input"));
    }

    Ok(Fragment { variable, entries })
}

// ---------------------------------------------------------------------------
// Grammar productions
// ---------------------------------------------------------------------------

fn parse_records(cur: &mut Cursor) -> ParseResult<Vec<IndexEntry>> {
    cur.expect('[', "'[' opening the record array")?;
    let mut entries = Vec::new();

    loop {
        cur.skip_ws();
        if cur.eat(']') {
            break;
        }
        entries.push(parse_record(cur)?);
        cur.skip_ws();
        if cur.eat(',') {
            continue;
        }
        cur.expect(']', "',' or ']' after a record")?;
        break;
    }

    Ok(entries)
}

fn parse_record(cur: &mut Cursor) -> ParseResult<IndexEntry> {
    let (line, col) = cur.position();
    cur.expect('[', "'[' opening a record")?;
    cur.skip_ws();

    if cur.peek() == Some(']') {
        return Err(ParseError::MissingField { line, col, what: "key" });
    }
    let key = cur.parse_string()?;

    cur.skip_ws();
    if cur.peek() == Some(']') {
        return Err(ParseError::MissingField { line, col, what: "payload" });
    }
    cur.expect(',', "',' after the record key")?;
    cur.skip_ws();

    cur.expect('[', "'[' opening the record payload")?;
    cur.skip_ws();
    if cur.peek() == Some(']') {
        return Err(ParseError::MissingField { line, col, what: "name" });
    }
    let name = cur.parse_string()?;

    let mut targets = Vec::new();
    loop {
        cur.skip_ws();
        if !cur.eat(',') {
            break;
        }
        cur.skip_ws();
        if cur.peek() == Some(']') {
            break; // trailing comma
        }
        targets.push(parse_target(cur)?);
    }
    cur.skip_ws();
    cur.expect(']', "']' closing the record payload")?;

    if targets.is_empty() {
        return Err(ParseError::MissingField { line, col, what: "targets" });
    }

    cur.skip_ws();
    cur.expect(']', "']' closing the record")?;

    Ok(IndexEntry { key, name, targets })
}

fn parse_target(cur: &mut Cursor) -> ParseResult<Target> {
    let (line, col) = cur.position();
    cur.expect('[', "'[' opening a target")?;
    cur.skip_ws();

    if cur.peek() == Some(']') {
        return Err(ParseError::MissingField { line, col, what: "target url" });
    }
    let url = cur.parse_string()?;

    cur.skip_ws();
    cur.expect(',', "',' after the target url")?;
    cur.skip_ws();
    cur.parse_integer()?;

    cur.skip_ws();
    if cur.peek() == Some(']') {
        return Err(ParseError::MissingField { line, col, what: "target label" });
    }
    cur.expect(',', "',' after the target flag")?;
    cur.skip_ws();
    let label = cur.parse_string()?;

    cur.skip_ws();
    cur.expect(']', "']' closing the target")?;

    Ok(Target { url, label })
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

struct Cursor<'src> {
    src: &'src str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'src> Cursor<'src> {
    fn new(src: &'src str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    fn position(&self) -> (u32, u32) {
        (self.line, self.col)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '\u{feff}' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, description: &'static str) -> ParseResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(description))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            line: self.line,
            col: self.col,
            expected,
            found: match self.peek() {
                Some(c) => format!("{c:?}"),
                None => "end of input".to_string(),
            },
        }
    }

    fn eof(&self, context: &'static str) -> ParseError {
        ParseError::UnexpectedEof { line: self.line, col: self.col, context }
    }

    fn parse_ident(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
            _ => return Err(self.unexpected("an identifier")),
        }
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                self.bump();
            } else {
                break;
            }
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> ParseResult<()> {
        let (line, col) = self.position();
        let ident = self.parse_ident()?;
        if ident == keyword {
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                line,
                col,
                expected: "keyword 'var'",
                found: format!("{ident:?}"),
            })
        }
    }

    /// Consume an integer literal. The value is not kept — the only number
    /// in the format is the constant target flag.
    fn parse_integer(&mut self) -> ParseResult<()> {
        self.eat('-');
        if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            return Err(self.unexpected("a number"));
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        Ok(())
    }

    /// Parse a single-quoted JS string literal with the escapes Doxygen can
    /// produce (`\'`, `\"`, `\\`, `\/`, `\n`, `\t`, `\uXXXX`).
    fn parse_string(&mut self) -> ParseResult<String> {
        self.expect('\'', "a string literal")?;
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.eof("a string literal"));
            };
            match c {
                '\'' => return Ok(out),
                '\\' => {
                    let (line, col) = self.position();
                    let Some(esc) = self.bump() else {
                        return Err(self.eof("an escape sequence"));
                    };
                    match esc {
                        '\'' | '"' | '\\' | '/' => out.push(esc),
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'u' => out.push(self.parse_unicode_escape(line, col)?),
                        other => {
                            return Err(ParseError::BadEscape { line, col, escape: other })
                        }
                    }
                }
                other => out.push(other),
            }
        }
    }

    fn parse_unicode_escape(&mut self, line: u32, col: u32) -> ParseResult<char> {
        let mut value: u32 = 0;
        for _ in 0..4 {
            let Some(c) = self.bump() else {
                return Err(self.eof("a unicode escape"));
            };
            let digit = c
                .to_digit(16)
                .ok_or(ParseError::BadUnicodeEscape { line, col })?;
            value = value * 16 + digit;
        }
        char::from_u32(value).ok_or(ParseError::BadUnicodeEscape { line, col })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
