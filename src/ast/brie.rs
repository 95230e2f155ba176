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

//! `BACKUP`, `RESTORE` and `IMPORT` statements.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{restore_names, Ident, TableName};
use crate::format::{restore_list, Pretty, Restore, RestoreCtx, RestoreError};

keyword_enum! {
    pub enum BrieKind {
        Backup = 0 => "BACKUP",
        Restore = 1 => "RESTORE",
        Import = 2 => "IMPORT",
    }
}

/// What a backup, restore or import covers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum BrieTarget {
    /// `TABLE t1, t2`
    Tables(Vec<TableName>),
    /// `DATABASE d1, d2`; an empty list is written `DATABASE *`.
    Databases(Vec<Ident>),
}

/// Options whose value is a string literal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum BrieTextOption {
    Snapshot,
    LastBackup,
    Backend,
    OnDuplicate,
    TikvImporter,
    CsvDelimiter,
    CsvNull,
    CsvSeparator,
}

impl BrieTextOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrieTextOption::Snapshot => "SNAPSHOT",
            BrieTextOption::LastBackup => "LAST_BACKUP",
            BrieTextOption::Backend => "BACKEND",
            BrieTextOption::OnDuplicate => "ON_DUPLICATE",
            BrieTextOption::TikvImporter => "TIKV_IMPORTER",
            BrieTextOption::CsvDelimiter => "CSV_DELIMITER",
            BrieTextOption::CsvNull => "CSV_NULL",
            BrieTextOption::CsvSeparator => "CSV_SEPARATOR",
        }
    }
}

/// Options whose value is a plain number
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum BrieNumberOption {
    Concurrency,
    Checksum,
    SendCredentials,
    Checkpoint,
    /// `SNAPSHOT = <tso>`
    SnapshotTso,
    /// `LAST_BACKUP = <tso>`
    LastBackupTso,
    Online,
    Analyze,
    SkipSchemaFiles,
    StrictFormat,
    CsvBackslashEscape,
    CsvNotNull,
    CsvTrimLastSeparators,
}

impl BrieNumberOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrieNumberOption::Concurrency => "CONCURRENCY",
            BrieNumberOption::Checksum => "CHECKSUM",
            BrieNumberOption::SendCredentials => "SEND_CREDENTIALS_TO_TIKV",
            BrieNumberOption::Checkpoint => "CHECKPOINT",
            BrieNumberOption::SnapshotTso => "SNAPSHOT",
            BrieNumberOption::LastBackupTso => "LAST_BACKUP",
            BrieNumberOption::Online => "ONLINE",
            BrieNumberOption::Analyze => "ANALYZE",
            BrieNumberOption::SkipSchemaFiles => "SKIP_SCHEMA_FILES",
            BrieNumberOption::StrictFormat => "STRICT_FORMAT",
            BrieNumberOption::CsvBackslashEscape => "CSV_BACKSLASH_ESCAPE",
            BrieNumberOption::CsvNotNull => "CSV_NOT_NULL",
            BrieNumberOption::CsvTrimLastSeparators => "CSV_TRIM_LAST_SEPARATORS",
        }
    }
}

/// A `NAME = value` option of a [`BrieStmt`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum BrieOption {
    /// Bytes per second, written `RATE_LIMIT = n MB/SECOND`
    RateLimit(u64),
    /// Nanoseconds, written `SNAPSHOT = n MICROSECOND AGO`
    SnapshotAgo(u64),
    /// `CSV_HEADER = COLUMNS` when `None`, else the number of header lines
    CsvHeader(Option<u64>),
    Text(BrieTextOption, String),
    Number(BrieNumberOption, u64),
}

impl Restore for BrieOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let name = match self {
            BrieOption::RateLimit(_) => "RATE_LIMIT",
            BrieOption::SnapshotAgo(_) => "SNAPSHOT",
            BrieOption::CsvHeader(_) => "CSV_HEADER",
            BrieOption::Text(option, _) => option.as_str(),
            BrieOption::Number(option, _) => option.as_str(),
        };
        ctx.write_keyword(name)?;
        ctx.write_plain(" = ")?;
        match self {
            BrieOption::RateLimit(bytes) => {
                ctx.write_plainf(format_args!("{} ", bytes / 1_048_576))?;
                ctx.write_keyword("MB")?;
                ctx.write_plain("/")?;
                ctx.write_keyword("SECOND")
            }
            BrieOption::SnapshotAgo(nanos) => {
                ctx.write_plainf(format_args!("{} ", nanos / 1000))?;
                ctx.write_keyword("MICROSECOND AGO")
            }
            BrieOption::CsvHeader(None) => ctx.write_keyword("COLUMNS"),
            BrieOption::CsvHeader(Some(lines)) => ctx.write_plainf(format_args!("{lines}")),
            BrieOption::Text(_, value) => ctx.write_string(value),
            BrieOption::Number(_, value) => ctx.write_plainf(format_args!("{value}")),
        }
    }
}

impl Pretty for BrieOption {}

/// `BACKUP DATABASE * TO 'local:///tmp/b' RATE_LIMIT = 120 MB/SECOND`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct BrieStmt {
    pub kind: BrieKind,
    pub target: BrieTarget,
    /// URL of the external storage
    pub storage: String,
    pub options: Vec<BrieOption>,
}

impl BrieStmt {
    pub fn new(kind: BrieKind, target: BrieTarget, storage: impl Into<String>) -> Self {
        BrieStmt {
            kind,
            target,
            storage: storage.into(),
            options: vec![],
        }
    }
}

impl Restore for BrieStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.kind.restore(ctx)?;
        match &self.target {
            BrieTarget::Tables(tables) if tables.is_empty() => {
                return Err(RestoreError::malformed(format!(
                    "{} TABLE without tables",
                    self.kind
                )));
            }
            BrieTarget::Tables(tables) => {
                ctx.write_keyword(" TABLE ")?;
                restore_list(ctx, tables, ", ", "BRIEStmt.Tables")?;
            }
            BrieTarget::Databases(schemas) if schemas.is_empty() => {
                ctx.write_keyword(" DATABASE")?;
                ctx.write_plain(" *")?;
            }
            BrieTarget::Databases(schemas) => {
                ctx.write_keyword(" DATABASE ")?;
                restore_names(ctx, schemas, ", ")?;
            }
        }
        ctx.write_keyword(match self.kind {
            BrieKind::Backup => " TO ",
            BrieKind::Restore | BrieKind::Import => " FROM ",
        })?;
        ctx.write_string(&self.storage)?;
        for option in &self.options {
            ctx.write_plain(" ")?;
            option.restore(ctx)?;
        }
        Ok(())
    }
}

impl Pretty for BrieStmt {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_everything() {
        let mut backup = BrieStmt::new(
            BrieKind::Backup,
            BrieTarget::Databases(vec![]),
            "local:///tmp/backup",
        );
        backup.options = vec![
            BrieOption::RateLimit(120 * 1_048_576),
            BrieOption::SnapshotAgo(36_000_000),
            BrieOption::Number(BrieNumberOption::Concurrency, 4),
        ];
        assert_eq!(
            backup.to_restored_sql().unwrap(),
            "BACKUP DATABASE * TO 'local:///tmp/backup' RATE_LIMIT = 120 MB/SECOND \
             SNAPSHOT = 36000 MICROSECOND AGO CONCURRENCY = 4"
        );
    }

    #[test]
    fn restore_and_import_read_from_storage() {
        let restore = BrieStmt::new(
            BrieKind::Restore,
            BrieTarget::Databases(vec!["d1".into(), "d2".into()]),
            "s3://bucket/prefix",
        );
        assert_eq!(
            restore.to_restored_sql().unwrap(),
            "RESTORE DATABASE d1, d2 FROM 's3://bucket/prefix'"
        );

        let mut import = BrieStmt::new(
            BrieKind::Import,
            BrieTarget::Tables(vec![TableName::qualified("db", "t")]),
            "local:///data",
        );
        import.options = vec![
            BrieOption::Text(BrieTextOption::Backend, "local".into()),
            BrieOption::CsvHeader(None),
            BrieOption::CsvHeader(Some(2)),
        ];
        assert_eq!(
            import.to_restored_sql().unwrap(),
            "IMPORT TABLE db.t FROM 'local:///data' BACKEND = 'local' CSV_HEADER = COLUMNS \
             CSV_HEADER = 2"
        );

        import.target = BrieTarget::Tables(vec![]);
        assert!(import.to_restored_sql().unwrap_err().is_malformed());
    }
}
