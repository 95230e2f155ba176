// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use crate::format::{Pretty, Restore, RestoreCtx, RestoreError, RestoreFlags};

/// Charset that string literals carry when no introducer is written.
pub const DEFAULT_CHARSET: &str = "utf8mb4";

/// Literal values such as numbers and strings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum Value {
    Null,
    /// `TRUE` or `FALSE`
    Boolean(bool),
    Int(i64),
    Uint(u64),
    /// Rendered in exponent form, e.g. `1.5e+00`
    Float(f64),
    /// Exact numeric literal, kept as written
    Decimal(String),
    /// `'abc'`, optionally with a charset introducer such as `_latin1'abc'`
    String {
        value: String,
        charset: Option<String>,
    },
    /// `x'0aff'`
    HexLiteral(Vec<u8>),
    /// `b'101'`
    BitLiteral(Vec<u8>),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Value::String {
            value: value.into(),
            charset: None,
        }
    }

    /// The text of a string literal, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl Restore for Value {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if ctx.has_flag(RestoreFlags::LITERALS_AS_PLACEHOLDERS) && *self != Value::Null {
            return ctx.write_plain("?");
        }
        match self {
            Value::Null => ctx.write_keyword("NULL"),
            Value::Boolean(true) => ctx.write_keyword("TRUE"),
            Value::Boolean(false) => ctx.write_keyword("FALSE"),
            Value::Int(v) => ctx.write_plainf(format_args!("{v}")),
            Value::Uint(v) => ctx.write_plainf(format_args!("{v}")),
            Value::Float(v) => ctx.write_plain(&format_float(*v)?),
            Value::Decimal(v) => ctx.write_plain(v),
            Value::String { value, charset } => {
                if let Some(charset) = charset {
                    let skip = ctx.has_flag(RestoreFlags::STRING_WITHOUT_CHARSET)
                        || (ctx.has_flag(RestoreFlags::STRING_WITHOUT_DEFAULT_CHARSET)
                            && charset.eq_ignore_ascii_case(DEFAULT_CHARSET));
                    if !skip {
                        ctx.write_plain("_")?;
                        ctx.write_keyword(charset)?;
                    }
                }
                ctx.write_string(value)
            }
            Value::HexLiteral(bytes) => {
                let mut hex = String::with_capacity(bytes.len() * 2 + 3);
                hex.push_str("x'");
                for b in bytes {
                    write!(hex, "{b:02x}")?;
                }
                hex.push('\'');
                ctx.write_plain(&hex)
            }
            Value::BitLiteral(bytes) => ctx.write_plain(&bit_literal(bytes)),
        }
    }
}

impl Pretty for Value {}

/// Formats like Go's `strconv.FormatFloat(v, 'e', -1, 64)`: shortest
/// mantissa, signed exponent of at least two digits.
fn format_float(v: f64) -> Result<String, RestoreError> {
    if !v.is_finite() {
        return Err(RestoreError::malformed(format!(
            "float literal {v} has no SQL form"
        )));
    }
    let formatted = format!("{v:e}");
    let (mantissa, exponent) = formatted
        .split_once('e')
        .ok_or_else(|| RestoreError::malformed("float formatting lost its exponent"))?;
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    Ok(format!("{mantissa}e{sign}{digits:0>2}"))
}

/// `b'…'` with leading zero bits trimmed.
fn bit_literal(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for b in bytes {
        bits.push_str(&format!("{b:08b}"));
    }
    let trimmed = bits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() && !bytes.is_empty() {
        "0"
    } else {
        trimmed
    };
    format!("b'{trimmed}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_values() {
        let cases = [
            (Value::Null, "NULL"),
            (Value::Boolean(true), "TRUE"),
            (Value::Boolean(false), "FALSE"),
            (Value::Int(-12), "-12"),
            (Value::Uint(18446744073709551615), "18446744073709551615"),
            (Value::Float(1.5), "1.5e+00"),
            (Value::Float(0.000012345), "1.2345e-05"),
            (Value::Float(1e100), "1e+100"),
            (Value::Decimal("3.140".into()), "3.140"),
            (Value::string("it's"), "'it''s'"),
            (
                Value::String {
                    value: "abc".into(),
                    charset: Some("latin1".into()),
                },
                "_LATIN1'abc'",
            ),
            (Value::HexLiteral(vec![0x0a, 0xff]), "x'0aff'"),
            (Value::BitLiteral(vec![0x05]), "b'101'"),
            (Value::BitLiteral(vec![0x00]), "b'0'"),
            (Value::BitLiteral(vec![]), "b''"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_restored_sql().unwrap(), expected);
        }
    }

    #[test]
    fn charset_introducer_flags() {
        let value = Value::String {
            value: "x".into(),
            charset: Some("utf8mb4".into()),
        };
        let mut sql = String::new();
        let flags = RestoreFlags::DEFAULT | RestoreFlags::STRING_WITHOUT_DEFAULT_CHARSET;
        value.restore(&mut RestoreCtx::new(flags, &mut sql)).unwrap();
        assert_eq!(sql, "'x'");
    }

    #[test]
    fn non_finite_float_is_malformed() {
        let err = Value::Float(f64::NAN).to_restored_sql().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn placeholders() {
        let mut sql = String::new();
        let flags = RestoreFlags::DEFAULT | RestoreFlags::LITERALS_AS_PLACEHOLDERS;
        let mut ctx = RestoreCtx::new(flags, &mut sql);
        Value::string("secret").restore(&mut ctx).unwrap();
        Value::Null.restore(&mut ctx).unwrap();
        assert_eq!(sql, "?NULL");
    }
}
