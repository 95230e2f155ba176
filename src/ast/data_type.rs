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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use crate::ast::value::DEFAULT_CHARSET;
use crate::format::{Pretty, Restore, RestoreCtx, RestoreError};

/// Charset and collation name of raw bytes.
pub const CHARSET_BINARY: &str = "binary";

/// Column type names
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum TypeName {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,
    Char,
    VarChar,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,
    Bit,
    Json,
    Enum,
    Set,
    Geometry,
}

impl TypeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::TinyInt => "TINYINT",
            TypeName::SmallInt => "SMALLINT",
            TypeName::MediumInt => "MEDIUMINT",
            TypeName::Int => "INT",
            TypeName::BigInt => "BIGINT",
            TypeName::Float => "FLOAT",
            TypeName::Double => "DOUBLE",
            TypeName::Decimal => "DECIMAL",
            TypeName::Date => "DATE",
            TypeName::DateTime => "DATETIME",
            TypeName::Timestamp => "TIMESTAMP",
            TypeName::Time => "TIME",
            TypeName::Year => "YEAR",
            TypeName::Char => "CHAR",
            TypeName::VarChar => "VARCHAR",
            TypeName::Binary => "BINARY",
            TypeName::VarBinary => "VARBINARY",
            TypeName::TinyBlob => "TINYBLOB",
            TypeName::Blob => "BLOB",
            TypeName::MediumBlob => "MEDIUMBLOB",
            TypeName::LongBlob => "LONGBLOB",
            TypeName::TinyText => "TINYTEXT",
            TypeName::Text => "TEXT",
            TypeName::MediumText => "MEDIUMTEXT",
            TypeName::LongText => "LONGTEXT",
            TypeName::Bit => "BIT",
            TypeName::Json => "JSON",
            TypeName::Enum => "ENUM",
            TypeName::Set => "SET",
            TypeName::Geometry => "GEOMETRY",
        }
    }

    /// Character and blob types, the ones that accept a charset clause.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            TypeName::Char
                | TypeName::VarChar
                | TypeName::Binary
                | TypeName::VarBinary
                | TypeName::TinyBlob
                | TypeName::Blob
                | TypeName::MediumBlob
                | TypeName::LongBlob
                | TypeName::TinyText
                | TypeName::Text
                | TypeName::MediumText
                | TypeName::LongText
        )
    }
}

/// A column type with its attributes, e.g. `DECIMAL(10,2) UNSIGNED`.
///
/// `flen` and `decimal` are `None` when unspecified; unspecified values
/// are not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FieldType {
    pub tp: TypeName,
    pub flen: Option<u32>,
    pub decimal: Option<u32>,
    /// Members of `ENUM` and `SET`
    pub elems: Vec<String>,
    pub unsigned: bool,
    pub zerofill: bool,
    pub binary: bool,
    pub charset: Option<String>,
    pub collate: Option<String>,
}

impl FieldType {
    pub fn new(tp: TypeName) -> Self {
        Self {
            tp,
            flen: None,
            decimal: None,
            elems: vec![],
            unsigned: false,
            zerofill: false,
            binary: false,
            charset: None,
            collate: None,
        }
    }

    pub fn with_len(mut self, flen: u32) -> Self {
        self.flen = Some(flen);
        self
    }

    pub fn with_decimal(mut self, decimal: u32) -> Self {
        self.decimal = Some(decimal);
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn with_collate(mut self, collate: impl Into<String>) -> Self {
        self.collate = Some(collate.into());
        self
    }

    fn charset_is(&self, name: &str) -> bool {
        self.charset
            .as_deref()
            .is_some_and(|cs| cs.eq_ignore_ascii_case(name))
    }

    /// Renders the type as the target of `CAST(x AS …)` or `CONVERT(x, …)`.
    pub fn restore_as_cast_type(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self.tp {
            TypeName::Char | TypeName::VarChar | TypeName::Binary | TypeName::VarBinary => {
                if matches!(self.tp, TypeName::Binary | TypeName::VarBinary)
                    || self.charset_is(CHARSET_BINARY)
                {
                    ctx.write_keyword("BINARY")?;
                } else {
                    ctx.write_keyword("CHAR")?;
                }
                if let Some(flen) = self.flen {
                    ctx.write_plainf(format_args!("({flen})"))?;
                }
                if self.binary {
                    ctx.write_keyword(" BINARY")?;
                }
                if let Some(charset) = &self.charset {
                    if !self.charset_is(CHARSET_BINARY) && !self.charset_is(DEFAULT_CHARSET) {
                        ctx.write_keyword(" CHARSET ")?;
                        ctx.write_keyword(charset)?;
                    }
                }
            }
            TypeName::Date => ctx.write_keyword("DATE")?,
            TypeName::DateTime => {
                ctx.write_keyword("DATETIME")?;
                if let Some(decimal) = self.decimal.filter(|d| *d > 0) {
                    ctx.write_plainf(format_args!("({decimal})"))?;
                }
            }
            TypeName::Decimal => {
                ctx.write_keyword("DECIMAL")?;
                match (self.flen.filter(|f| *f > 0), self.decimal.filter(|d| *d > 0)) {
                    (Some(flen), Some(decimal)) => {
                        ctx.write_plainf(format_args!("({flen}, {decimal})"))?
                    }
                    (Some(flen), None) => ctx.write_plainf(format_args!("({flen})"))?,
                    _ => {}
                }
            }
            TypeName::Time => {
                ctx.write_keyword("TIME")?;
                if let Some(decimal) = self.decimal.filter(|d| *d > 0) {
                    ctx.write_plainf(format_args!("({decimal})"))?;
                }
            }
            TypeName::BigInt => {
                if self.unsigned {
                    ctx.write_keyword("UNSIGNED")?;
                } else {
                    ctx.write_keyword("SIGNED")?;
                }
            }
            TypeName::Json => ctx.write_keyword("JSON")?,
            TypeName::Double => ctx.write_keyword("DOUBLE")?,
            other => {
                return Err(RestoreError::unsupported(format!(
                    "CAST to {}",
                    other.as_str()
                )))
            }
        }
        Ok(())
    }
}

impl Restore for FieldType {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(self.tp.as_str())?;

        let (precision, scale) = match self.tp {
            TypeName::Enum | TypeName::Set => {
                ctx.write_plain("(")?;
                for (i, elem) in self.elems.iter().enumerate() {
                    if i != 0 {
                        ctx.write_plain(",")?;
                    }
                    ctx.write_string(elem)?;
                }
                ctx.write_plain(")")?;
                (None, None)
            }
            TypeName::Timestamp | TypeName::DateTime | TypeName::Time => (self.decimal, None),
            TypeName::Float | TypeName::Double | TypeName::Decimal => (self.flen, self.decimal),
            _ => (self.flen, None),
        };
        if let Some(precision) = precision {
            ctx.write_plainf(format_args!("({precision}"))?;
            if let Some(scale) = scale {
                ctx.write_plainf(format_args!(",{scale}"))?;
            }
            ctx.write_plain(")")?;
        }

        if self.unsigned {
            ctx.write_keyword(" UNSIGNED")?;
        }
        if self.zerofill {
            ctx.write_keyword(" ZEROFILL")?;
        }
        if self.binary && !self.charset_is(CHARSET_BINARY) {
            ctx.write_keyword(" BINARY")?;
        }
        if self.tp.is_textual() {
            if let Some(charset) = &self.charset {
                if !self.charset_is(CHARSET_BINARY) {
                    ctx.write_keyword(" CHARACTER SET ")?;
                    ctx.write_keyword(charset)?;
                }
            }
            if let Some(collate) = &self.collate {
                if !collate.eq_ignore_ascii_case(CHARSET_BINARY) {
                    ctx.write_keyword(" COLLATE ")?;
                    ctx.write_plain(collate)?;
                }
            }
        }
        Ok(())
    }
}

impl Pretty for FieldType {}
