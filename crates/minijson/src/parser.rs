//! Recursive-descent JSON parser.
//!
//! There is no separate tokenizer: the parser skips whitespace (space, tab,
//! CR, LF and NUL), looks at the next significant byte and dispatches on it.
//! Failures are sticky and first-failure-wins: once one is recorded, later
//! calls to `fail` leave it untouched and every enclosing array or object
//! aborts immediately.
//!
//! # Accepted subset
//!
//! - Numbers: optional `-` (a `+` right after it is skipped), digits, and an
//!   optional `.digits` fraction. No exponents. A fraction makes the value a
//!   [`Value::Double`], otherwise it is a [`Value::Int`].
//! - Strings: the bytes between the quotes are copied verbatim. Backslash
//!   escapes are not decoded, so `\n` stays two characters and `\"` ends the
//!   string at its quote.
//! - Containers: arrays and objects nest at most
//!   [`ParseConfig::max_depth`] levels. Duplicate object keys keep the last
//!   value.
//! - Trailing text after the first value is ignored unless
//!   [`ParseConfig::reject_trailing`] is set.

use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::error::{ParseError, Result};
use crate::value::{Object, Value};

/// Parse `text` into a [`Value`] using [`ParseConfig::default`].
///
/// ```
/// use minijson::{parse, Kind};
///
/// let value = parse(r#"{"a":[1,2.5,null]}"#).unwrap();
/// assert_eq!(value.kind(), Kind::Object);
/// assert_eq!(value.object_value()["a"].size(), 3);
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with_config(text, &ParseConfig::default())
}

/// Parse `text` into a [`Value`] with explicit limits.
pub fn parse_with_config(text: &str, config: &ParseConfig) -> Result<Value> {
    let mut parser = Parser::new(text, config);
    let value = parser.parse_value(0);
    if config.reject_trailing && !parser.failed() {
        parser.reject_trailing();
    }
    match parser.failure {
        Some(err) => {
            debug!(offset = err.offset, message = %err.message, "parse failed");
            Err(err)
        }
        None => Ok(value),
    }
}

/// Cursor over the source plus the first recorded failure.
struct Parser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    max_depth: usize,
    failure: Option<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, config: &ParseConfig) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            max_depth: config.effective_max_depth(),
            failure: None,
        }
    }

    fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Record a failure at the cursor (unless one is already recorded) and
    /// return a placeholder for the caller to propagate.
    fn fail<T: Default>(&mut self, message: impl Into<String>) -> T {
        if self.failure.is_none() {
            self.failure = Some(ParseError::new(self.pos, message));
        }
        T::default()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n' | 0)) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and consume the next byte, failing at end of input.
    fn next_token(&mut self) -> Option<u8> {
        self.skip_whitespace();
        match self.peek() {
            Some(b) => {
                self.pos += 1;
                Some(b)
            }
            None => self.fail("end of json"),
        }
    }

    /// The character starting at `offset`, for diagnostics.
    fn char_at(&self, offset: usize) -> char {
        self.source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// The character ending right before `offset`, for diagnostics.
    fn char_before(&self, offset: usize) -> char {
        self.source
            .get(..offset)
            .and_then(|head| head.chars().next_back())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Step back over the token just consumed and report it as unexpected.
    fn unexpected(&mut self, expected: &str) -> Value {
        self.pos -= 1;
        let got = self.char_at(self.pos);
        self.fail(format!("expect {expected}, got: {got:?}"))
    }

    fn parse_value(&mut self, depth: usize) -> Value {
        let Some(ch) = self.next_token() else {
            return Value::Null;
        };
        match ch {
            b'n' => self.expect_literal("null", Value::Null),
            b't' => self.expect_literal("true", Value::Bool(true)),
            b'f' => self.expect_literal("false", Value::Bool(false)),
            b'-' | b'0'..=b'9' => {
                self.pos -= 1;
                self.parse_number()
            }
            b'"' => {
                let s = self.parse_string();
                if self.failed() {
                    return Value::Null;
                }
                Value::String(s)
            }
            b'[' => self.parse_array(depth),
            b'{' => self.parse_object(depth),
            _ => {
                self.pos -= 1;
                let got = self.char_at(self.pos);
                self.fail(format!("unexpected character {got:?}"))
            }
        }
    }

    /// Match `literal` starting at the byte just consumed.
    fn expect_literal(&mut self, literal: &str, value: Value) -> Value {
        self.pos -= 1;
        let end = self.pos + literal.len();
        if self.bytes.get(self.pos..end) == Some(literal.as_bytes()) {
            self.pos = end;
            return value;
        }
        let actual_end = end.min(self.bytes.len());
        let actual = String::from_utf8_lossy(&self.bytes[self.pos..actual_end]).into_owned();
        self.fail(format!("expect {literal}, got: {actual}"))
    }

    fn eat_digits(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn number_error(&mut self) -> Value {
        let prev = self.char_before(self.pos);
        self.fail(format!("parse number error, got {prev}"))
    }

    fn parse_number(&mut self) -> Value {
        let start = self.pos;
        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }
        // A plus sign is tolerated and carries no meaning.
        if self.peek() == Some(b'+') {
            self.pos += 1;
        }
        let digits_start = self.pos;
        if !self.eat_digits() {
            return self.number_error();
        }
        let mut is_double = false;
        if self.peek() == Some(b'.') {
            is_double = true;
            self.pos += 1;
            if !self.eat_digits() {
                return self.number_error();
            }
        }

        let mut literal = String::with_capacity(self.pos - start);
        if negative {
            literal.push('-');
        }
        literal.push_str(&self.source[digits_start..self.pos]);

        if is_double {
            match literal.parse::<f64>() {
                Ok(f) => Value::Double(f),
                Err(_) => {
                    self.pos = start;
                    self.fail(format!("invalid number: {literal}"))
                }
            }
        } else {
            match literal.parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => {
                    self.pos = start;
                    self.fail(format!("number out of range: {literal}"))
                }
            }
        }
    }

    /// Copy bytes up to the next `"`. The cursor sits just past the opening
    /// quote on entry and just past the closing quote on success.
    fn parse_string(&mut self) -> String {
        let start = self.pos;
        match self.bytes[start..].iter().position(|&b| b == b'"') {
            Some(len) => {
                self.pos = start + len + 1;
                self.source[start..start + len].to_string()
            }
            None => {
                self.pos = start - 1;
                self.fail("unterminated string")
            }
        }
    }

    fn enter_container(&mut self, depth: usize) -> bool {
        if depth >= self.max_depth {
            trace!(depth, max_depth = self.max_depth, "depth ceiling reached");
            self.fail::<Value>("exceeded max depth");
            return false;
        }
        true
    }

    fn parse_array(&mut self, depth: usize) -> Value {
        if !self.enter_container(depth) {
            return Value::Null;
        }
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Value::Array(items);
        }
        loop {
            let item = self.parse_value(depth + 1);
            if self.failed() {
                return Value::Null;
            }
            items.push(item);
            match self.next_token() {
                Some(b',') => {}
                Some(b']') => break,
                Some(_) => return self.unexpected("',' or ']'"),
                None => return Value::Null,
            }
        }
        Value::Array(items)
    }

    fn parse_object(&mut self, depth: usize) -> Value {
        if !self.enter_container(depth) {
            return Value::Null;
        }
        let mut members = Object::new();
        let Some(mut ch) = self.next_token() else {
            return Value::Null;
        };
        if ch == b'}' {
            return Value::Object(members);
        }
        loop {
            if ch != b'"' {
                return self.unexpected("'\"'");
            }
            let key = self.parse_string();
            if self.failed() {
                return Value::Null;
            }
            match self.next_token() {
                Some(b':') => {}
                Some(_) => return self.unexpected("':'"),
                None => return Value::Null,
            }
            let value = self.parse_value(depth + 1);
            if self.failed() {
                return Value::Null;
            }
            members.insert(key, value);
            match self.next_token() {
                Some(b',') => {}
                Some(b'}') => break,
                Some(_) => return self.unexpected("',' or '}'"),
                None => return Value::Null,
            }
            ch = match self.next_token() {
                Some(c) => c,
                None => return Value::Null,
            };
        }
        Value::Object(members)
    }

    fn reject_trailing(&mut self) {
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            let got = self.char_at(self.pos);
            self.fail::<()>(format!("unexpected trailing character {got:?}"));
        }
    }
}
