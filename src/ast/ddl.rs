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

//! AST types specific to CREATE/DROP/RENAME/TRUNCATE and the other schema
//! statements. `ALTER TABLE` lives in its own module.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{
    restore_names, ColumnName, Expr, FieldType, Ident, OnDuplicateKeyHandling,
    PartitionOptions, Query, TableName, UserIdentity,
};
use crate::format::{
    restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError,
};

/// `CHARACTER SET`, `COLLATE` or `ENCRYPTION` of a database
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum DatabaseOption {
    Charset(String),
    Collate(String),
    Encryption(String),
}

impl Restore for DatabaseOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            DatabaseOption::Charset(value) => {
                ctx.write_keyword("CHARACTER SET")?;
                ctx.write_plain(" = ")?;
                ctx.write_plain(value)
            }
            DatabaseOption::Collate(value) => {
                ctx.write_keyword("COLLATE")?;
                ctx.write_plain(" = ")?;
                ctx.write_plain(value)
            }
            DatabaseOption::Encryption(value) => {
                ctx.write_keyword("ENCRYPTION")?;
                ctx.write_plain(" = ")?;
                ctx.write_string(value)
            }
        }
    }
}

impl Pretty for DatabaseOption {}

fn restore_database_options(
    ctx: &mut RestoreCtx<'_>,
    options: &[DatabaseOption],
    what: &'static str,
) -> Result<(), RestoreError> {
    for (i, option) in options.iter().enumerate() {
        ctx.write_plain(" ")?;
        option.restore(ctx).annotate_with(|| format!("{what}[{i}]"))?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateDatabaseStmt {
    pub if_not_exists: bool,
    pub name: Ident,
    pub options: Vec<DatabaseOption>,
}

impl Restore for CreateDatabaseStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CREATE DATABASE ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(self.name.as_str())?;
        restore_database_options(ctx, &self.options, "CreateDatabaseStmt.Options")
    }
}

impl Pretty for CreateDatabaseStmt {}

/// `ALTER DATABASE [name] options`; without a name the default database
/// is altered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AlterDatabaseStmt {
    pub name: Option<Ident>,
    pub options: Vec<DatabaseOption>,
}

impl Restore for AlterDatabaseStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ALTER DATABASE")?;
        if let Some(name) = &self.name {
            ctx.write_plain(" ")?;
            ctx.write_name(name.as_str())?;
        }
        restore_database_options(ctx, &self.options, "AlterDatabaseStmt.Options")
    }
}

impl Pretty for AlterDatabaseStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropDatabaseStmt {
    pub if_exists: bool,
    pub name: Ident,
}

impl Restore for DropDatabaseStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DROP DATABASE ")?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        ctx.write_name(self.name.as_str())
    }
}

impl Pretty for DropDatabaseStmt {}

/// What an index part is built on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum IndexPart {
    Column(ColumnName),
    /// Functional key part, written inside parentheses
    Expr(Expr),
}

/// One key part of an index: `col(10)` or `(expr)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct IndexPartSpecification {
    pub part: IndexPart,
    pub length: Option<u64>,
}

impl IndexPartSpecification {
    pub fn column(name: impl Into<ColumnName>) -> Self {
        IndexPartSpecification {
            part: IndexPart::Column(name.into()),
            length: None,
        }
    }
}

impl Restore for IndexPartSpecification {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match &self.part {
            IndexPart::Column(column) => column
                .restore(ctx)
                .annotate("IndexPartSpecification.Column")?,
            IndexPart::Expr(expr) => {
                ctx.write_plain("(")?;
                expr.restore(ctx).annotate("IndexPartSpecification.Expr")?;
                ctx.write_plain(")")?;
            }
        }
        if let Some(length) = self.length.filter(|l| *l > 0) {
            ctx.write_plainf(format_args!("({length})"))?;
        }
        Ok(())
    }
}

impl Pretty for IndexPartSpecification {}

keyword_enum! {
    /// `MATCH` clause of a foreign key reference
    pub enum MatchType {
        Full = 1 => "FULL",
        Partial = 2 => "PARTIAL",
        Simple = 3 => "SIMPLE",
    }
}

keyword_enum! {
    /// Referential action of `ON DELETE` and `ON UPDATE`
    pub enum ReferOption {
        Restrict = 1 => "RESTRICT",
        Cascade = 2 => "CASCADE",
        SetNull = 3 => "SET NULL",
        NoAction = 4 => "NO ACTION",
        SetDefault = 5 => "SET DEFAULT",
    }
}

/// `REFERENCES t(a, b) [MATCH ...] [ON DELETE ...] [ON UPDATE ...]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ReferenceDef {
    pub table: TableName,
    pub parts: Vec<IndexPartSpecification>,
    pub match_type: Option<MatchType>,
    pub on_delete: Option<ReferOption>,
    pub on_update: Option<ReferOption>,
}

impl Restore for ReferenceDef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("REFERENCES ")?;
        self.table.restore(ctx).annotate("ReferenceDef.Table")?;
        ctx.write_plain("(")?;
        restore_list(ctx, &self.parts, ", ", "ReferenceDef.IndexPartSpecifications")?;
        ctx.write_plain(")")?;
        if let Some(match_type) = &self.match_type {
            ctx.write_keyword(" MATCH ")?;
            match_type.restore(ctx)?;
        }
        if let Some(action) = &self.on_delete {
            ctx.write_keyword(" ON DELETE ")?;
            action.restore(ctx)?;
        }
        if let Some(action) = &self.on_update {
            ctx.write_keyword(" ON UPDATE ")?;
            action.restore(ctx)?;
        }
        Ok(())
    }
}

impl Pretty for ReferenceDef {}

/// An attribute following the type of a column definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum ColumnOption {
    PrimaryKey,
    NotNull,
    AutoIncrement,
    DefaultValue(Expr),
    UniqueKey,
    Null,
    OnUpdate(Expr),
    /// Accepted by the grammar but never rendered
    Fulltext,
    Comment(Expr),
    Generated { expr: Expr, stored: bool },
    Reference(ReferenceDef),
    Collate(String),
    Check { expr: Expr, enforced: bool },
    ColumnFormat(String),
    Storage(String),
    /// `AUTO_RANDOM[(bits)]`
    AutoRandom(Option<u64>),
}

impl Restore for ColumnOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            ColumnOption::PrimaryKey => ctx.write_keyword("PRIMARY KEY"),
            ColumnOption::NotNull => ctx.write_keyword("NOT NULL"),
            ColumnOption::AutoIncrement => ctx.write_keyword("AUTO_INCREMENT"),
            ColumnOption::DefaultValue(expr) => {
                ctx.write_keyword("DEFAULT ")?;
                expr.restore(ctx).annotate("ColumnOption.Expr")
            }
            ColumnOption::UniqueKey => ctx.write_keyword("UNIQUE KEY"),
            ColumnOption::Null => ctx.write_keyword("NULL"),
            ColumnOption::OnUpdate(expr) => {
                ctx.write_keyword("ON UPDATE ")?;
                expr.restore(ctx).annotate("ColumnOption.Expr")
            }
            ColumnOption::Fulltext => Err(RestoreError::unsupported("column option FULLTEXT")),
            ColumnOption::Comment(expr) => {
                ctx.write_keyword("COMMENT ")?;
                expr.restore(ctx).annotate("ColumnOption.Expr")
            }
            ColumnOption::Generated { expr, stored } => {
                ctx.write_keyword("GENERATED ALWAYS AS")?;
                ctx.write_plain("(")?;
                expr.restore(ctx).annotate("ColumnOption.Expr")?;
                ctx.write_plain(")")?;
                ctx.write_keyword(if *stored { " STORED" } else { " VIRTUAL" })
            }
            ColumnOption::Reference(refer) => refer.restore(ctx).annotate("ColumnOption.Refer"),
            ColumnOption::Collate(collation) => {
                if collation.is_empty() {
                    return Err(RestoreError::malformed("empty COLLATE column option"));
                }
                ctx.write_keyword("COLLATE ")?;
                ctx.write_plain(collation)
            }
            ColumnOption::Check { expr, enforced } => {
                ctx.write_keyword("CHECK")?;
                ctx.write_plain("(")?;
                expr.restore(ctx).annotate("ColumnOption.Expr")?;
                ctx.write_plain(")")?;
                ctx.write_keyword(if *enforced { " ENFORCED" } else { " NOT ENFORCED" })
            }
            ColumnOption::ColumnFormat(format) => {
                ctx.write_keyword("COLUMN_FORMAT ")?;
                ctx.write_keyword(format)
            }
            ColumnOption::Storage(storage) => {
                ctx.write_keyword("STORAGE ")?;
                ctx.write_keyword(storage)
            }
            ColumnOption::AutoRandom(bits) => {
                ctx.write_keyword("AUTO_RANDOM")?;
                if let Some(bits) = bits {
                    ctx.write_plainf(format_args!("({bits})"))?;
                }
                Ok(())
            }
        }
    }
}

impl Pretty for ColumnOption {}

keyword_enum! {
    pub enum IndexType {
        BTree = 1 => "BTREE",
        Hash = 2 => "HASH",
        RTree = 3 => "RTREE",
    }
}

keyword_enum! {
    pub enum IndexVisibility {
        Visible = 1 => "VISIBLE",
        Invisible = 2 => "INVISIBLE",
    }
}

/// Options trailing an index definition, written space separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct IndexOption {
    pub key_block_size: u64,
    pub index_type: Option<IndexType>,
    pub parser_name: Option<Ident>,
    pub comment: String,
    pub visibility: Option<IndexVisibility>,
}

impl IndexOption {
    pub fn is_empty(&self) -> bool {
        *self == IndexOption::default()
    }
}

impl Restore for IndexOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let mut sep = "";
        if self.key_block_size > 0 {
            ctx.write_keyword("KEY_BLOCK_SIZE")?;
            ctx.write_plainf(format_args!("={}", self.key_block_size))?;
            sep = " ";
        }
        if let Some(index_type) = &self.index_type {
            ctx.write_plain(sep)?;
            ctx.write_keyword("USING ")?;
            index_type.restore(ctx)?;
            sep = " ";
        }
        if let Some(parser) = &self.parser_name {
            ctx.write_plain(sep)?;
            ctx.write_keyword("WITH PARSER ")?;
            ctx.write_name(parser.as_str())?;
            sep = " ";
        }
        if !self.comment.is_empty() {
            ctx.write_plain(sep)?;
            ctx.write_keyword("COMMENT ")?;
            ctx.write_string(&self.comment)?;
            sep = " ";
        }
        if let Some(visibility) = &self.visibility {
            ctx.write_plain(sep)?;
            visibility.restore(ctx)?;
        }
        Ok(())
    }
}

impl Pretty for IndexOption {}

keyword_enum! {
    pub enum ConstraintKind {
        PrimaryKey = 1 => "PRIMARY KEY",
        Key = 2 => "KEY",
        Index = 3 => "INDEX",
        Unique = 4 => "UNIQUE",
        UniqueKey = 5 => "UNIQUE KEY",
        UniqueIndex = 6 => "UNIQUE INDEX",
        Fulltext = 8 => "FULLTEXT",
        ForeignKey = 7 => "FOREIGN KEY",
        Check = 9 => "CHECK",
    }
}

/// A table level constraint or index definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub name: Option<Ident>,
    pub if_not_exists: bool,
    pub keys: Vec<IndexPartSpecification>,
    pub refer: Option<ReferenceDef>,
    pub option: Option<IndexOption>,
    /// Condition of a `CHECK` constraint
    pub expr: Option<Expr>,
    pub enforced: bool,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, keys: Vec<IndexPartSpecification>) -> Self {
        Constraint {
            kind,
            name: None,
            if_not_exists: false,
            keys,
            refer: None,
            option: None,
            expr: None,
            enforced: true,
        }
    }

    pub fn named(mut self, name: impl Into<Ident>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn restore_check(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(name) = &self.name {
            ctx.write_keyword("CONSTRAINT ")?;
            ctx.write_name(name.as_str())?;
            ctx.write_plain(" ")?;
        }
        let expr = self
            .expr
            .as_ref()
            .ok_or_else(|| RestoreError::malformed("CHECK constraint without condition"))?;
        ctx.write_keyword("CHECK")?;
        ctx.write_plain("(")?;
        expr.restore(ctx).annotate("Constraint.Expr")?;
        ctx.write_plain(") ")?;
        ctx.write_keyword(if self.enforced { "ENFORCED" } else { "NOT ENFORCED" })
    }
}

impl Restore for Constraint {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self.kind {
            ConstraintKind::Check => return self.restore_check(ctx),
            ConstraintKind::ForeignKey => {
                ctx.write_keyword("CONSTRAINT ")?;
                if let Some(name) = &self.name {
                    ctx.write_name(name.as_str())?;
                    ctx.write_plain(" ")?;
                }
                ctx.write_keyword("FOREIGN KEY ")?;
                if self.if_not_exists {
                    ctx.write_keyword("IF NOT EXISTS ")?;
                }
            }
            kind => {
                kind.restore(ctx)?;
                if self.if_not_exists && matches!(kind, ConstraintKind::Key | ConstraintKind::Index) {
                    ctx.write_keyword(" IF NOT EXISTS")?;
                }
                if let Some(name) = &self.name {
                    ctx.write_plain(" ")?;
                    ctx.write_name(name.as_str())?;
                }
            }
        }
        ctx.write_plain("(")?;
        restore_list(ctx, &self.keys, ", ", "Constraint.Keys")?;
        ctx.write_plain(")")?;
        if let Some(refer) = &self.refer {
            ctx.write_plain(" ")?;
            refer.restore(ctx).annotate("Constraint.Refer")?;
        }
        if let Some(option) = self.option.as_ref().filter(|o| !o.is_empty()) {
            ctx.write_plain(" ")?;
            option.restore(ctx).annotate("Constraint.Option")?;
        }
        Ok(())
    }
}

impl Pretty for Constraint {}

/// `name type options...` inside `CREATE TABLE` and `ALTER TABLE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ColumnDef {
    pub name: ColumnName,
    pub data_type: Option<FieldType>,
    pub options: Vec<ColumnOption>,
}

impl ColumnDef {
    pub fn new(name: impl Into<ColumnName>, data_type: FieldType) -> Self {
        ColumnDef {
            name: name.into(),
            data_type: Some(data_type),
            options: vec![],
        }
    }

    pub fn with_option(mut self, option: ColumnOption) -> Self {
        self.options.push(option);
        self
    }
}

impl Restore for ColumnDef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.name.restore(ctx).annotate("ColumnDef.Name")?;
        if let Some(data_type) = &self.data_type {
            ctx.write_plain(" ")?;
            data_type.restore(ctx).annotate("ColumnDef.Tp")?;
        }
        for (i, option) in self.options.iter().enumerate() {
            ctx.write_plain(" ")?;
            option
                .restore(ctx)
                .annotate_with(|| format!("ColumnDef.Options[{i}]"))?;
        }
        Ok(())
    }
}

impl Pretty for ColumnDef {}

/// `CREATE [TEMPORARY] TABLE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateTableStmt {
    pub temporary: bool,
    pub if_not_exists: bool,
    pub table: TableName,
    /// `CREATE TABLE t LIKE other`
    pub refer_table: Option<TableName>,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<Constraint>,
    pub options: Vec<TableOption>,
    pub partition: Option<PartitionOptions>,
    /// Duplicate handling of `CREATE TABLE ... [IGNORE|REPLACE] AS SELECT`
    pub on_duplicate: Option<OnDuplicateKeyHandling>,
    pub select: Option<Box<Query>>,
}

impl CreateTableStmt {
    pub fn new(table: TableName, columns: Vec<ColumnDef>) -> Self {
        CreateTableStmt {
            temporary: false,
            if_not_exists: false,
            table,
            refer_table: None,
            columns,
            constraints: vec![],
            options: vec![],
            partition: None,
            on_duplicate: None,
            select: None,
        }
    }

    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(if self.temporary {
            "CREATE TEMPORARY TABLE "
        } else {
            "CREATE TABLE "
        })?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        self.table.restore(ctx).annotate("CreateTableStmt.Table")?;
        if let Some(refer) = &self.refer_table {
            ctx.write_keyword(" LIKE ")?;
            refer.restore(ctx).annotate("CreateTableStmt.ReferTable")?;
        }
        Ok(())
    }

    fn restore_tail(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        for (i, option) in self.options.iter().enumerate() {
            ctx.write_plain(" ")?;
            option
                .restore(ctx)
                .annotate_with(|| format!("CreateTableStmt.Options[{i}]"))?;
        }
        Ok(())
    }

    fn restore_select(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(select) = &self.select {
            ctx.write_keyword(match self.on_duplicate {
                None => " AS ",
                Some(OnDuplicateKeyHandling::Ignore) => " IGNORE AS ",
                Some(OnDuplicateKeyHandling::Replace) => " REPLACE AS ",
            })?;
            select.restore(ctx).annotate("CreateTableStmt.Select")?;
        }
        Ok(())
    }
}

impl Restore for CreateTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        if !self.columns.is_empty() || !self.constraints.is_empty() {
            ctx.write_plain(" (")?;
            restore_list(ctx, &self.columns, ", ", "CreateTableStmt.Cols")?;
            if !self.columns.is_empty() && !self.constraints.is_empty() {
                ctx.write_plain(", ")?;
            }
            restore_list(ctx, &self.constraints, ", ", "CreateTableStmt.Constraints")?;
            ctx.write_plain(")")?;
        }
        self.restore_tail(ctx)?;
        if let Some(partition) = &self.partition {
            ctx.write_plain(" ")?;
            partition.restore(ctx).annotate("CreateTableStmt.Partition")?;
        }
        self.restore_select(ctx)
    }
}

impl Pretty for CreateTableStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        if !self.columns.is_empty() || !self.constraints.is_empty() {
            ctx.write_plain(" (")?;
            for (i, column) in self.columns.iter().enumerate() {
                if i != 0 {
                    ctx.write_plain(",")?;
                }
                ctx.write_newline(level + 1, indent, indent_char)?;
                column
                    .pretty(ctx, level + 1, indent, indent_char)
                    .annotate_with(|| format!("CreateTableStmt.Cols[{i}]"))?;
            }
            for (i, constraint) in self.constraints.iter().enumerate() {
                if i != 0 || !self.columns.is_empty() {
                    ctx.write_plain(",")?;
                }
                ctx.write_newline(level + 1, indent, indent_char)?;
                constraint
                    .pretty(ctx, level + 1, indent, indent_char)
                    .annotate_with(|| format!("CreateTableStmt.Constraints[{i}]"))?;
            }
            ctx.write_newline(level, indent, indent_char)?;
            ctx.write_plain(")")?;
        }
        self.restore_tail(ctx)?;
        if let Some(partition) = &self.partition {
            ctx.write_plain(" ")?;
            partition
                .pretty(ctx, level, indent, indent_char)
                .annotate("CreateTableStmt.Partition")?;
        }
        self.restore_select(ctx)
    }
}

/// `DROP [TEMPORARY] TABLE` or `DROP VIEW`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropTableStmt {
    pub is_view: bool,
    pub temporary: bool,
    pub if_exists: bool,
    pub tables: Vec<TableName>,
}

impl Restore for DropTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(match (self.is_view, self.temporary) {
            (true, _) => "DROP VIEW ",
            (false, true) => "DROP TEMPORARY TABLE ",
            (false, false) => "DROP TABLE ",
        })?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        restore_list(ctx, &self.tables, ", ", "DropTableStmt.Tables")
    }
}

impl Pretty for DropTableStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropSequenceStmt {
    pub if_exists: bool,
    pub sequences: Vec<TableName>,
}

impl Restore for DropSequenceStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DROP SEQUENCE ")?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        restore_list(ctx, &self.sequences, ", ", "DropSequenceStmt.Sequences")
    }
}

impl Pretty for DropSequenceStmt {}

/// `old TO new`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct TableToTable {
    pub old: TableName,
    pub new: TableName,
}

impl Restore for TableToTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.old.restore(ctx).annotate("TableToTable.OldTable")?;
        ctx.write_keyword(" TO ")?;
        self.new.restore(ctx).annotate("TableToTable.NewTable")
    }
}

impl Pretty for TableToTable {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RenameTableStmt {
    pub pairs: Vec<TableToTable>,
}

impl Restore for RenameTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("RENAME TABLE ")?;
        restore_list(ctx, &self.pairs, ", ", "RenameTableStmt.TableToTables")
    }
}

impl Pretty for RenameTableStmt {}

keyword_enum! {
    pub enum ViewAlgorithm {
        Undefined = 0 => "UNDEFINED",
        Merge = 1 => "MERGE",
        TempTable = 2 => "TEMPTABLE",
    }
}

keyword_enum! {
    pub enum ViewSecurity {
        Definer = 0 => "DEFINER",
        Invoker = 1 => "INVOKER",
    }
}

keyword_enum! {
    pub enum ViewCheckOption {
        Cascaded = 1 => "CASCADED",
        Local = 0 => "LOCAL",
    }
}

/// `CREATE [OR REPLACE] ALGORITHM = ... DEFINER = ... SQL SECURITY ... VIEW`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateViewStmt {
    pub or_replace: bool,
    pub algorithm: ViewAlgorithm,
    pub definer: UserIdentity,
    pub security: ViewSecurity,
    pub view_name: TableName,
    pub columns: Vec<Ident>,
    pub select: Box<Query>,
    /// `WITH ... CHECK OPTION`, written only for `LOCAL`
    pub check_option: ViewCheckOption,
}

impl CreateViewStmt {
    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CREATE ")?;
        if self.or_replace {
            ctx.write_keyword("OR REPLACE ")?;
        }
        ctx.write_keyword("ALGORITHM")?;
        ctx.write_plain(" = ")?;
        self.algorithm.restore(ctx)?;
        ctx.write_keyword(" DEFINER")?;
        ctx.write_plain(" = ")?;
        self.definer.restore(ctx).annotate("CreateViewStmt.Definer")?;
        ctx.write_keyword(" SQL SECURITY ")?;
        self.security.restore(ctx)?;
        ctx.write_keyword(" VIEW ")?;
        self.view_name.restore(ctx).annotate("CreateViewStmt.ViewName")?;
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            restore_names(ctx, &self.columns, ",")?;
            ctx.write_plain(")")?;
        }
        ctx.write_keyword(" AS ")
    }

    fn restore_check_option(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.check_option != ViewCheckOption::Cascaded {
            ctx.write_keyword(" WITH ")?;
            self.check_option.restore(ctx)?;
            ctx.write_keyword(" CHECK OPTION")?;
        }
        Ok(())
    }
}

impl Restore for CreateViewStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        self.select.restore(ctx).annotate("CreateViewStmt.Select")?;
        self.restore_check_option(ctx)
    }
}

impl Pretty for CreateViewStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        ctx.write_plain("\n")?;
        self.select
            .pretty(ctx, level, indent, indent_char)
            .annotate("CreateViewStmt.Select")?;
        self.restore_check_option(ctx)
    }
}

/// One option of `CREATE SEQUENCE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum SequenceOption {
    IncrementBy(i64),
    StartWith(i64),
    NoMinValue,
    MinValue(i64),
    NoMaxValue,
    MaxValue(i64),
    NoCache,
    Cache(i64),
    NoCycle,
    Cycle,
}

impl Restore for SequenceOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let (keyword, value) = match *self {
            SequenceOption::IncrementBy(v) => ("INCREMENT BY ", Some(v)),
            SequenceOption::StartWith(v) => ("START WITH ", Some(v)),
            SequenceOption::NoMinValue => ("NO MINVALUE", None),
            SequenceOption::MinValue(v) => ("MINVALUE ", Some(v)),
            SequenceOption::NoMaxValue => ("NO MAXVALUE", None),
            SequenceOption::MaxValue(v) => ("MAXVALUE ", Some(v)),
            SequenceOption::NoCache => ("NOCACHE", None),
            SequenceOption::Cache(v) => ("CACHE ", Some(v)),
            SequenceOption::NoCycle => ("NOCYCLE", None),
            SequenceOption::Cycle => ("CYCLE", None),
        };
        ctx.write_keyword(keyword)?;
        if let Some(value) = value {
            ctx.write_plainf(format_args!("{value}"))?;
        }
        Ok(())
    }
}

impl Pretty for SequenceOption {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateSequenceStmt {
    pub if_not_exists: bool,
    pub name: TableName,
    pub seq_options: Vec<SequenceOption>,
    pub table_options: Vec<TableOption>,
}

impl Restore for CreateSequenceStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CREATE SEQUENCE ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        self.name.restore(ctx).annotate("CreateSequenceStmt.Name")?;
        for (i, option) in self.seq_options.iter().enumerate() {
            ctx.write_plain(" ")?;
            option
                .restore(ctx)
                .annotate_with(|| format!("CreateSequenceStmt.SequenceOption[{i}]"))?;
        }
        for (i, option) in self.table_options.iter().enumerate() {
            ctx.write_plain(" ")?;
            option
                .restore(ctx)
                .annotate_with(|| format!("CreateSequenceStmt.TableOption[{i}]"))?;
        }
        Ok(())
    }
}

impl Pretty for CreateSequenceStmt {}

keyword_enum! {
    /// `ALGORITHM = ...` of index and table alterations
    pub enum AlgorithmType {
        Default = 0 => "DEFAULT",
        Copy = 1 => "COPY",
        Inplace = 2 => "INPLACE",
        Instant = 3 => "INSTANT",
    }
}

keyword_enum! {
    /// `LOCK = ...` of index and table alterations
    pub enum LockType {
        Default = 2 => "DEFAULT",
        None = 1 => "NONE",
        Shared = 3 => "SHARED",
        Exclusive = 4 => "EXCLUSIVE",
    }
}

/// `ALGORITHM = ... LOCK = ...` after `CREATE INDEX` and `DROP INDEX`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct IndexLockAndAlgorithm {
    pub algorithm: Option<AlgorithmType>,
    pub lock: Option<LockType>,
}

impl Restore for IndexLockAndAlgorithm {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let algorithm = self.algorithm.filter(|a| *a != AlgorithmType::Default);
        if let Some(algorithm) = algorithm {
            ctx.write_keyword("ALGORITHM")?;
            ctx.write_plain(" = ")?;
            algorithm.restore(ctx)?;
        }
        if let Some(lock) = self.lock.filter(|l| *l != LockType::Default) {
            if algorithm.is_some() {
                ctx.write_plain(" ")?;
            }
            ctx.write_keyword("LOCK")?;
            ctx.write_plain(" = ")?;
            lock.restore(ctx)?;
        }
        Ok(())
    }
}

impl Pretty for IndexLockAndAlgorithm {}

keyword_enum! {
    pub enum IndexKeyType {
        Unique = 1 => "UNIQUE",
        Spatial = 2 => "SPATIAL",
        FullText = 3 => "FULLTEXT",
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateIndexStmt {
    pub key_type: Option<IndexKeyType>,
    pub if_not_exists: bool,
    pub index_name: Ident,
    pub table: TableName,
    pub parts: Vec<IndexPartSpecification>,
    pub option: Option<IndexOption>,
    pub lock_alg: Option<IndexLockAndAlgorithm>,
}

impl Restore for CreateIndexStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CREATE ")?;
        if let Some(key_type) = &self.key_type {
            key_type.restore(ctx)?;
            ctx.write_plain(" ")?;
        }
        ctx.write_keyword("INDEX ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(self.index_name.as_str())?;
        ctx.write_keyword(" ON ")?;
        self.table.restore(ctx).annotate("CreateIndexStmt.Table")?;
        ctx.write_plain(" (")?;
        restore_list(ctx, &self.parts, ", ", "CreateIndexStmt.IndexPartSpecifications")?;
        ctx.write_plain(")")?;
        if let Some(option) = self.option.as_ref().filter(|o| !o.is_empty()) {
            ctx.write_plain(" ")?;
            option.restore(ctx).annotate("CreateIndexStmt.IndexOption")?;
        }
        if let Some(lock_alg) = &self.lock_alg {
            ctx.write_plain(" ")?;
            lock_alg.restore(ctx).annotate("CreateIndexStmt.LockAlg")?;
        }
        Ok(())
    }
}

impl Pretty for CreateIndexStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropIndexStmt {
    pub if_exists: bool,
    pub index_name: Ident,
    pub table: TableName,
    pub lock_alg: Option<IndexLockAndAlgorithm>,
}

impl Restore for DropIndexStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DROP INDEX ")?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        ctx.write_name(self.index_name.as_str())?;
        ctx.write_keyword(" ON ")?;
        self.table.restore(ctx).annotate("DropIndexStmt.Table")?;
        if let Some(lock_alg) = &self.lock_alg {
            ctx.write_plain(" ")?;
            lock_alg.restore(ctx).annotate("DropIndexStmt.LockAlg")?;
        }
        Ok(())
    }
}

impl Pretty for DropIndexStmt {}

keyword_enum! {
    pub enum TableLockType {
        Read = 1 => "READ",
        ReadLocal = 2 => "READ LOCAL",
        Write = 3 => "WRITE",
        WriteLocal = 4 => "WRITE LOCAL",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct TableLock {
    pub table: TableName,
    pub lock: TableLockType,
}

impl Restore for TableLock {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.table.restore(ctx).annotate("TableLock.Table")?;
        ctx.write_plain(" ")?;
        self.lock.restore(ctx)
    }
}

impl Pretty for TableLock {}

/// `LOCK TABLES t1 READ, t2 WRITE`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct LockTablesStmt {
    pub locks: Vec<TableLock>,
}

impl Restore for LockTablesStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("LOCK TABLES ")?;
        restore_list(ctx, &self.locks, ", ", "LockTablesStmt.TableLocks")
    }
}

impl Pretty for LockTablesStmt {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UnlockTablesStmt;

impl Restore for UnlockTablesStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("UNLOCK TABLES")
    }
}

impl Pretty for UnlockTablesStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct TruncateTableStmt {
    pub table: TableName,
}

impl Restore for TruncateTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("TRUNCATE TABLE ")?;
        self.table.restore(ctx).annotate("TruncateTableStmt.Table")
    }
}

impl Pretty for TruncateTableStmt {}

/// What `RECOVER TABLE` brings back
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum RecoverTarget {
    /// `BY JOB 42`
    Job(u64),
    /// `t [n]`, where `n` picks among several dropped tables with the same
    /// name
    Table { table: TableName, num: Option<u64> },
}

/// `RECOVER TABLE t` or `RECOVER TABLE BY JOB n`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RecoverTableStmt {
    pub target: RecoverTarget,
}

impl Restore for RecoverTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("RECOVER TABLE ")?;
        match &self.target {
            RecoverTarget::Job(id) => {
                ctx.write_keyword("BY JOB ")?;
                ctx.write_plainf(format_args!("{id}"))
            }
            RecoverTarget::Table { table, num } => {
                table.restore(ctx).annotate("RecoverTableStmt.Table")?;
                match num {
                    Some(num) if *num > 0 => ctx.write_plainf(format_args!(" {num}")),
                    _ => Ok(()),
                }
            }
        }
    }
}

impl Pretty for RecoverTableStmt {}

/// `FLASHBACK TABLE t [TO t2]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FlashBackTableStmt {
    pub table: TableName,
    pub new_name: Option<Ident>,
}

impl Restore for FlashBackTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("FLASHBACK TABLE ")?;
        self.table.restore(ctx).annotate("FlashBackTableStmt.Table")?;
        if let Some(name) = self.new_name.as_ref().filter(|n| !n.is_empty()) {
            ctx.write_keyword(" TO ")?;
            ctx.write_name(name.as_str())?;
        }
        Ok(())
    }
}

impl Pretty for FlashBackTableStmt {}

/// `ADMIN REPAIR TABLE t CREATE TABLE ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RepairTableStmt {
    pub table: TableName,
    pub create: Box<CreateTableStmt>,
}

impl Restore for RepairTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ADMIN REPAIR TABLE ")?;
        self.table.restore(ctx).annotate("RepairTableStmt.Table")?;
        ctx.write_plain(" ")?;
        self.create.restore(ctx).annotate("RepairTableStmt.CreateStmt")
    }
}

impl Pretty for RepairTableStmt {}

/// `ADMIN CLEANUP TABLE LOCK t1, t2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CleanupTableLockStmt {
    pub tables: Vec<TableName>,
}

impl Restore for CleanupTableLockStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.tables.is_empty() {
            return Err(RestoreError::malformed("ADMIN CLEANUP TABLE LOCK without tables"));
        }
        ctx.write_keyword("ADMIN CLEANUP TABLE LOCK ")?;
        restore_list(ctx, &self.tables, ", ", "CleanupTableLockStmt.Tables")
    }
}

impl Pretty for CleanupTableLockStmt {}

keyword_enum! {
    pub enum RowFormat {
        Default = 1 => "DEFAULT",
        Dynamic = 2 => "DYNAMIC",
        Fixed = 3 => "FIXED",
        Compressed = 4 => "COMPRESSED",
        Redundant = 5 => "REDUNDANT",
        Compact = 6 => "COMPACT",
        TokuDbDefault = 7 => "TOKUDB_DEFAULT",
        TokuDbFast = 8 => "TOKUDB_FAST",
        TokuDbSmall = 9 => "TOKUDB_SMALL",
        TokuDbZlib = 10 => "TOKUDB_ZLIB",
        TokuDbQuickLz = 11 => "TOKUDB_QUICKLZ",
        TokuDbLzma = 12 => "TOKUDB_LZMA",
        TokuDbSnappy = 13 => "TOKUDB_SNAPPY",
        TokuDbUncompressed = 14 => "TOKUDB_UNCOMPRESSED",
    }
}

/// A table option of `CREATE TABLE`, `ALTER TABLE` and partition
/// definitions.
///
/// `StatsPersistent` and `PackKeys` are accepted but only rendered as
/// `= DEFAULT` followed by a comment marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum TableOption {
    Engine(String),
    /// `None` for `CHARACTER SET DEFAULT`
    Charset {
        name: Option<String>,
        convert_to: bool,
    },
    Collate(String),
    AutoIncrement(u64),
    AutoIdCache(u64),
    AutoRandomBase(u64),
    Comment(String),
    AvgRowLength(u64),
    CheckSum(u64),
    Compression(String),
    Connection(String),
    Password(String),
    KeyBlockSize(u64),
    MaxRows(u64),
    MinRows(u64),
    DelayKeyWrite(u64),
    RowFormat(RowFormat),
    StatsPersistent,
    /// `None` for `DEFAULT`
    StatsAutoRecalc(Option<u64>),
    ShardRowId(u64),
    PreSplitRegion(u64),
    PackKeys,
    Tablespace(String),
    Nodegroup(u64),
    DataDirectory(String),
    IndexDirectory(String),
    StorageMedia(String),
    StatsSamplePages(Option<u64>),
    /// `None` for `SECONDARY_ENGINE = NULL`
    SecondaryEngine(Option<String>),
    InsertMethod(String),
    TableCheckSum(u64),
    Union(Vec<TableName>),
    Encryption(String),
}

impl TableOption {
    fn restore_number(ctx: &mut RestoreCtx<'_>, keyword: &str, value: u64) -> Result<(), RestoreError> {
        ctx.write_keyword(keyword)?;
        ctx.write_plainf(format_args!("= {value}"))
    }

    fn restore_string(ctx: &mut RestoreCtx<'_>, keyword: &str, value: &str) -> Result<(), RestoreError> {
        ctx.write_keyword(keyword)?;
        ctx.write_plain("= ")?;
        ctx.write_string(value)
    }

    fn restore_default_or(
        ctx: &mut RestoreCtx<'_>,
        keyword: &str,
        value: Option<u64>,
    ) -> Result<(), RestoreError> {
        ctx.write_keyword(keyword)?;
        ctx.write_plain("= ")?;
        match value {
            Some(value) => ctx.write_plainf(format_args!("{value}")),
            None => ctx.write_keyword("DEFAULT"),
        }
    }

    fn restore_unsupported(ctx: &mut RestoreCtx<'_>, keyword: &str, marker: &str) -> Result<(), RestoreError> {
        log::debug!("{} is rendered as a comment marker", keyword.trim_end());
        ctx.write_keyword(keyword)?;
        ctx.write_plain("= ")?;
        ctx.write_keyword("DEFAULT")?;
        ctx.write_plainf(format_args!(" /* {marker} is not supported */ "))
    }

    /// `[CONVERT TO] CHARACTER SET ...` without the leading `DEFAULT`, as
    /// written inside `ALTER TABLE`.
    pub(crate) fn restore_charset_name(
        ctx: &mut RestoreCtx<'_>,
        name: &Option<String>,
    ) -> Result<(), RestoreError> {
        match name {
            Some(name) => ctx.write_keyword(name),
            None => ctx.write_keyword("DEFAULT"),
        }
    }
}

impl Restore for TableOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            TableOption::Engine(engine) => {
                ctx.write_keyword("ENGINE ")?;
                ctx.write_plain("= ")?;
                if engine.is_empty() {
                    ctx.write_plain("''")
                } else {
                    ctx.write_plain(engine)
                }
            }
            TableOption::Charset { name, convert_to } => {
                if *convert_to {
                    ctx.write_keyword("CONVERT TO ")?;
                } else {
                    ctx.write_keyword("DEFAULT ")?;
                }
                ctx.write_keyword("CHARACTER SET ")?;
                if !*convert_to {
                    ctx.write_keyword("= ")?;
                }
                Self::restore_charset_name(ctx, name)
            }
            TableOption::Collate(collation) => {
                ctx.write_keyword("DEFAULT COLLATE ")?;
                ctx.write_plain("= ")?;
                ctx.write_keyword(collation)
            }
            TableOption::AutoIncrement(v) => Self::restore_number(ctx, "AUTO_INCREMENT ", *v),
            TableOption::AutoIdCache(v) => Self::restore_number(ctx, "AUTO_ID_CACHE ", *v),
            TableOption::AutoRandomBase(v) => Self::restore_number(ctx, "AUTO_RANDOM_BASE ", *v),
            TableOption::Comment(s) => Self::restore_string(ctx, "COMMENT ", s),
            TableOption::AvgRowLength(v) => Self::restore_number(ctx, "AVG_ROW_LENGTH ", *v),
            TableOption::CheckSum(v) => Self::restore_number(ctx, "CHECKSUM ", *v),
            TableOption::Compression(s) => Self::restore_string(ctx, "COMPRESSION ", s),
            TableOption::Connection(s) => Self::restore_string(ctx, "CONNECTION ", s),
            TableOption::Password(s) => Self::restore_string(ctx, "PASSWORD ", s),
            TableOption::KeyBlockSize(v) => Self::restore_number(ctx, "KEY_BLOCK_SIZE ", *v),
            TableOption::MaxRows(v) => Self::restore_number(ctx, "MAX_ROWS ", *v),
            TableOption::MinRows(v) => Self::restore_number(ctx, "MIN_ROWS ", *v),
            TableOption::DelayKeyWrite(v) => Self::restore_number(ctx, "DELAY_KEY_WRITE ", *v),
            TableOption::RowFormat(format) => {
                ctx.write_keyword("ROW_FORMAT ")?;
                ctx.write_plain("= ")?;
                format.restore(ctx)
            }
            TableOption::StatsPersistent => {
                Self::restore_unsupported(ctx, "STATS_PERSISTENT ", "TableOptionStatsPersistent")
            }
            TableOption::StatsAutoRecalc(v) => Self::restore_default_or(ctx, "STATS_AUTO_RECALC ", *v),
            TableOption::ShardRowId(v) => Self::restore_number(ctx, "SHARD_ROW_ID_BITS ", *v),
            TableOption::PreSplitRegion(v) => Self::restore_number(ctx, "PRE_SPLIT_REGIONS ", *v),
            TableOption::PackKeys => {
                Self::restore_unsupported(ctx, "PACK_KEYS ", "TableOptionPackKeys")
            }
            TableOption::Tablespace(name) => {
                ctx.write_keyword("TABLESPACE ")?;
                ctx.write_plain("= ")?;
                ctx.write_name(name)
            }
            TableOption::Nodegroup(v) => Self::restore_number(ctx, "NODEGROUP ", *v),
            TableOption::DataDirectory(s) => Self::restore_string(ctx, "DATA DIRECTORY ", s),
            TableOption::IndexDirectory(s) => Self::restore_string(ctx, "INDEX DIRECTORY ", s),
            TableOption::StorageMedia(media) => {
                ctx.write_keyword("STORAGE ")?;
                ctx.write_keyword(media)
            }
            TableOption::StatsSamplePages(v) => {
                Self::restore_default_or(ctx, "STATS_SAMPLE_PAGES ", *v)
            }
            TableOption::SecondaryEngine(Some(engine)) => {
                Self::restore_string(ctx, "SECONDARY_ENGINE ", engine)
            }
            TableOption::SecondaryEngine(None) => {
                ctx.write_keyword("SECONDARY_ENGINE ")?;
                ctx.write_plain("= ")?;
                ctx.write_keyword("NULL")
            }
            TableOption::InsertMethod(s) => Self::restore_string(ctx, "INSERT_METHOD ", s),
            TableOption::TableCheckSum(v) => Self::restore_number(ctx, "TABLE_CHECKSUM ", *v),
            TableOption::Union(tables) => {
                ctx.write_keyword("UNION ")?;
                ctx.write_plain("= (")?;
                restore_list(ctx, tables, ",", "TableOption.TableNames")?;
                ctx.write_plain(")")
            }
            TableOption::Encryption(s) => Self::restore_string(ctx, "ENCRYPTION ", s),
        }
    }
}

impl Pretty for TableOption {}
