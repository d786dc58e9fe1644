use std::str::FromStr;

use crate::error::{Error, Result};
use crate::resource::gltf::document::{Value, Warning};

/// Deepest array nesting accepted inside a free-form value.
pub const MAX_VALUE_DEPTH: usize = 64;

/// Character cursor over an in-memory glTF document.
///
/// Tracks a 1-based line counter and collects the non-fatal warnings raised
/// while skipping unsupported sections. Every fatal error is logged at the
/// point it is detected before being returned.
pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
    line: usize,
    origin: String,
    warnings: Vec<Warning>,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, origin: impl Into<String>) -> Self {
        Self {
            source: text.as_bytes(),
            position: 0,
            line: 1,
            origin: origin.into(),
            warnings: vec![],
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn current(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Logs `error` with the cursor's source name and hands it back.
    pub fn fail(&self, error: Error) -> Error {
        log::error!("{}: {error}", self.origin);
        error
    }

    fn bump(&mut self) -> Option<u8> {
        let character = self.current()?;
        self.position += 1;
        if character == b'\n' {
            self.line += 1;
        }
        Some(character)
    }

    fn end_of_input(&self) -> Error {
        self.fail(Error::UnexpectedEndOfInput { line: self.line })
    }

    fn unexpected(&self, expected: impl Into<String>, found: u8) -> Error {
        self.fail(Error::UnexpectedCharacter {
            line: self.line,
            expected: expected.into(),
            found: found as char,
        })
    }

    /// Advances past whitespace. Running out of input is an error since every
    /// caller is still waiting for a token.
    pub fn continue_whitespace(&mut self) -> Result<()> {
        while let Some(character) = self.current() {
            if !character.is_ascii_whitespace() {
                return Ok(());
            }
            self.bump();
        }

        Err(self.end_of_input())
    }

    fn next_token_start(&mut self) -> Result<u8> {
        self.continue_whitespace()?;
        match self.current() {
            Some(character) => Ok(character),
            None => Err(self.end_of_input()),
        }
    }

    pub fn expect(&mut self, literal: u8) -> Result<()> {
        let found = self.next_token_start()?;
        if found != literal {
            return Err(self.unexpected(format!("{:?}", literal as char), found));
        }
        self.bump();

        Ok(())
    }

    /// Consumes `literal` if it is the next token; leaves the cursor untouched
    /// apart from whitespace otherwise.
    pub fn accept(&mut self, literal: u8) -> Result<bool> {
        if self.next_token_start()? == literal {
            self.bump();
            return Ok(true);
        }

        Ok(false)
    }

    /// Separator check run after every field or element: `,` continues the
    /// enclosing loop, `closer` ends it.
    pub fn end_of_field(&mut self, closer: u8) -> Result<bool> {
        let found = self.next_token_start()?;
        if found == b',' {
            self.bump();
            Ok(true)
        } else if found == closer {
            self.bump();
            Ok(false)
        } else {
            Err(self.unexpected(format!("',' or {:?}", closer as char), found))
        }
    }

    pub fn get_string(&mut self) -> Result<String> {
        self.expect(b'"')?;
        self.string_body()
    }

    /// Reads a string if one starts here.
    pub fn try_string(&mut self) -> Result<Option<String>> {
        if self.next_token_start()? != b'"' {
            return Ok(None);
        }
        self.bump();

        self.string_body().map(Some)
    }

    fn string_body(&mut self) -> Result<String> {
        let mut content = Vec::new();
        loop {
            match self.bump() {
                Some(b'"') => break,
                Some(b'\\') => match self.bump() {
                    Some(escaped @ (b'"' | b'\\' | b'/')) => content.push(escaped),
                    Some(other) => content.extend_from_slice(&[b'\\', other]),
                    None => return Err(self.end_of_input()),
                },
                Some(character) => content.push(character),
                None => return Err(self.end_of_input()),
            }
        }

        Ok(String::from_utf8_lossy(&content).into_owned())
    }

    /// Reads a bare literal (number, `true`, `null`, ...) up to the next
    /// delimiter.
    fn bare_literal(&mut self) -> Result<String> {
        let start = self.position;
        while let Some(character) = self.current() {
            if character.is_ascii_whitespace() || matches!(character, b',' | b'}' | b']' | b':') {
                break;
            }
            self.bump();
        }

        if self.position == start {
            return match self.current() {
                Some(found) => Err(self.unexpected("a value", found)),
                None => Err(self.end_of_input()),
            };
        }

        Ok(String::from_utf8_lossy(&self.source[start..self.position]).into_owned())
    }

    /// Reads either a quoted string or a bare literal. Enum-like values are
    /// written both ways in the wild.
    pub fn get_token(&mut self) -> Result<String> {
        match self.try_string()? {
            Some(token) => Ok(token),
            None => self.bare_literal(),
        }
    }

    pub fn get_number<T: FromStr>(&mut self) -> Result<T> {
        self.next_token_start()?;
        let line = self.line;
        let text = self.bare_literal()?;
        match text.parse::<T>() {
            Ok(number) => Ok(number),
            Err(_) => Err(self.fail(Error::InvalidNumber { line, text })),
        }
    }

    pub fn get_boolean(&mut self) -> Result<bool> {
        let found = self.next_token_start()?;
        match self.bare_literal()?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(self.unexpected("true or false", found)),
        }
    }

    /// Reads `[ element, ... ]`, delegating each element to `read`.
    pub fn get_array<T, F>(&mut self, mut read: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        self.expect(b'[')?;
        let mut elements = vec![];
        if self.accept(b']')? {
            return Ok(elements);
        }

        loop {
            elements.push(read(self)?);
            if !self.end_of_field(b']')? {
                return Ok(elements);
            }
        }
    }

    /// Reads a free-form value. Objects are not representable and are skipped.
    pub fn get_value(&mut self, key: &str) -> Result<Value> {
        self.nested_value(key, 0)
    }

    fn nested_value(&mut self, key: &str, depth: usize) -> Result<Value> {
        match self.next_token_start()? {
            b'"' => Ok(Value::String(self.get_string()?)),
            b'[' if depth == MAX_VALUE_DEPTH => Err(self.fail(Error::ValueTooDeep {
                line: self.line,
                limit: MAX_VALUE_DEPTH,
            })),
            b'[' => Ok(Value::Array(
                self.get_array(|cursor| cursor.nested_value(key, depth + 1))?,
            )),
            b'{' => {
                self.skip_section(key)?;
                Ok(Value::Skipped)
            }
            found => {
                let line = self.line;
                let text = self.bare_literal()?;
                match text.as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    _ => match text.parse::<f64>() {
                        Ok(number) => Ok(Value::Number(number)),
                        Err(_) if found.is_ascii_digit() || found == b'-' => {
                            Err(self.fail(Error::InvalidNumber { line, text }))
                        }
                        Err(_) => Err(self.unexpected("a value", found)),
                    },
                }
            }
        }
    }

    /// Consumes whatever value starts here (a balanced `{...}`/`[...]` span, a
    /// string or a bare scalar) and records a warning naming `key`.
    pub fn skip_section(&mut self, key: &str) -> Result<()> {
        let first_line = self.line;
        match self.next_token_start()? {
            b'{' | b'[' => self.skip_balanced()?,
            b'"' => {
                self.get_string()?;
            }
            _ => {
                self.bare_literal()?;
            }
        }

        let warning = Warning {
            key: key.to_string(),
            first_line,
            last_line: self.line,
        };
        log::warn!("{}: {warning}", self.origin);
        self.warnings.push(warning);

        Ok(())
    }

    fn skip_balanced(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.bump() {
                Some(b'{' | b'[') => depth += 1,
                Some(b'}' | b']') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(b'"') => {
                    self.string_body()?;
                }
                Some(_) => {}
                None => return Err(self.end_of_input()),
            }
        }
    }
}
