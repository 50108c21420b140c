// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical text form.
//!
//! - Vectors, quaternions and colors: `(c0, c1, ..., cn)`.
//! - Matrices: `{` + one row tuple per line + `}`.
//!
//! Scalars print with Rust's shortest round-trip representation, so parsing
//! a printed finite value gives back the same bits. Formatter flags such as
//! precision are forwarded to every component (`{:.3}`).
//!
//! Parsing is the inverse and tolerates any whitespace around delimiters.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::color::Color;
use crate::matrix::{Matrix3x3, Matrix4x4};
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3, Vector4};

/// Failure to parse the canonical text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A delimiter was missing.
    #[error("expected `{expected}` at byte {offset}")]
    Expected {
        /// Delimiter that should have appeared.
        expected: char,
        /// Byte offset into the input.
        offset: usize,
    },
    /// A tuple had the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    Arity {
        /// Components required by the target type.
        expected: usize,
        /// Components present in the input.
        found: usize,
    },
    /// A component was not a valid number.
    #[error("invalid number `{text}`")]
    Number {
        /// Offending token.
        text: String,
    },
    /// Input continued after a complete value.
    #[error("unexpected trailing input at byte {offset}")]
    Trailing {
        /// Byte offset of the first trailing character.
        offset: usize,
    },
}

/// Writes `(c0, c1, ...)`, forwarding formatter flags to each component.
pub fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, components: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(c, f)?;
    }
    f.write_str(")")
}

/// Parses exactly one `(c0, ..., c{N-1})` tuple spanning the whole input.
pub fn parse_tuple<T: Scalar, const N: usize>(text: &str) -> Result<[T; N], ParseError> {
    let mut cursor = Cursor::new(text);
    let tuple = cursor.tuple()?;
    cursor.finish()?;
    Ok(tuple)
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_ws();
        self.rest().chars().next()
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected,
                offset: self.pos,
            })
        }
    }

    fn number<T: Scalar>(&mut self) -> Result<T, ParseError> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| c == ',' || c == ')' || c.is_whitespace())
            .unwrap_or(rest.len());
        let token = &rest[..len];
        self.pos += len;
        token.parse::<T>().map_err(|_| ParseError::Number {
            text: token.to_owned(),
        })
    }

    fn tuple<T: Scalar, const N: usize>(&mut self) -> Result<[T; N], ParseError> {
        self.expect('(')?;
        let mut out = [T::ZERO; N];
        let mut found = 0;
        if self.peek() != Some(')') {
            loop {
                let value = self.number::<T>()?;
                if let Some(slot) = out.get_mut(found) {
                    *slot = value;
                }
                found += 1;
                if self.peek() == Some(',') {
                    self.pos += 1;
                } else {
                    break;
                }
            }
        }
        self.expect(')')?;
        if found != N {
            return Err(ParseError::Arity { expected: N, found });
        }
        Ok(out)
    }

    fn rows<T: Scalar, const R: usize, const C: usize>(&mut self) -> Result<[[T; C]; R], ParseError> {
        self.expect('{')?;
        let mut rows = [[T::ZERO; C]; R];
        for row in &mut rows {
            *row = self.tuple()?;
        }
        self.expect('}')?;
        Ok(rows)
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(ParseError::Trailing { offset: self.pos }),
        }
    }
}

fn write_rows<T: fmt::Display, const C: usize>(
    f: &mut fmt::Formatter<'_>,
    rows: &[[T; C]],
) -> fmt::Result {
    f.write_str("{")?;
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        write_tuple(f, row)?;
    }
    f.write_str("}")
}

fn parse_rows<T: Scalar, const R: usize, const C: usize>(
    text: &str,
) -> Result<[[T; C]; R], ParseError> {
    let mut cursor = Cursor::new(text);
    let rows = cursor.rows()?;
    cursor.finish()?;
    Ok(rows)
}

macro_rules! impl_tuple_text {
    ($name:ident, $n:literal) => {
        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_tuple(f, &self.data)
            }
        }

        impl<T: Scalar> FromStr for $name<T> {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, ParseError> {
                parse_tuple::<T, $n>(s).map(|data| Self { data })
            }
        }
    };
}

impl_tuple_text!(Vector2, 2);
impl_tuple_text!(Vector3, 3);
impl_tuple_text!(Vector4, 4);
impl_tuple_text!(Quaternion, 4);
impl_tuple_text!(Color, 4);

impl<T: Scalar> fmt::Display for Matrix3x3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.rows)
    }
}

impl<T: Scalar> FromStr for Matrix3x3<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_rows::<T, 3, 3>(s).map(Self::new)
    }
}

impl<T: Scalar> fmt::Display for Matrix4x4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.rows)
    }
}

impl<T: Scalar> FromStr for Matrix4x4<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_rows::<T, 4, 4>(s).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reports_offsets() {
        assert_eq!(
            parse_tuple::<f32, 2>("  (1, 2"),
            Err(ParseError::Expected {
                expected: ')',
                offset: 7
            })
        );
        assert_eq!(
            parse_tuple::<f32, 2>("(1, 2) x"),
            Err(ParseError::Trailing { offset: 7 })
        );
    }

    #[test]
    fn empty_tuple_counts_zero_components() {
        assert_eq!(
            parse_tuple::<f32, 3>("()"),
            Err(ParseError::Arity {
                expected: 3,
                found: 0
            })
        );
    }
}
