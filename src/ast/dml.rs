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

//! Data modification statements: `INSERT`, `REPLACE`, `UPDATE`, `DELETE`,
//! `LOAD DATA` and `SPLIT TABLE`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::query::restore_hints;
use super::{
    restore_names, ColumnName, Expr, Ident, Join, Limit, OrderBy, Priority, Query,
    TableName, TableOptimizerHint, Variable,
};
use crate::format::{
    pretty_list, restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError,
    RestoreFlags,
};

/// `col=expr` in `SET` lists and `ON DUPLICATE KEY UPDATE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Assignment {
    pub column: ColumnName,
    pub expr: Expr,
}

impl Assignment {
    pub fn new(column: impl Into<ColumnName>, expr: Expr) -> Self {
        Assignment {
            column: column.into(),
            expr,
        }
    }
}

impl Restore for Assignment {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.column.restore(ctx).annotate("Assignment.Column")?;
        ctx.write_plain("=")?;
        self.expr.restore(ctx).annotate("Assignment.Expr")
    }
}

impl Pretty for Assignment {}

fn restore_priority(ctx: &mut RestoreCtx<'_>, priority: &Option<Priority>) -> Result<(), RestoreError> {
    if let Some(priority) = priority {
        priority.restore(ctx)?;
        ctx.write_plain(" ")?;
    }
    Ok(())
}

/// Where the rows of an `INSERT` come from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum InsertSource {
    /// `VALUES (1, 2), (3, 4)`
    Values(Vec<Vec<Expr>>),
    /// `INSERT ... SELECT ...`
    Select(Box<Query>),
    /// `INSERT ... SET a=1, b=2`
    Set(Vec<Assignment>),
}

/// `INSERT` or `REPLACE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct InsertStmt {
    pub is_replace: bool,
    pub hints: Vec<TableOptimizerHint>,
    pub priority: Option<Priority>,
    pub ignore: bool,
    pub table: TableName,
    pub partition_names: Vec<Ident>,
    pub columns: Vec<ColumnName>,
    pub source: InsertSource,
    pub on_duplicate: Vec<Assignment>,
}

impl InsertStmt {
    pub fn values(table: TableName, rows: Vec<Vec<Expr>>) -> Self {
        InsertStmt {
            is_replace: false,
            hints: vec![],
            priority: None,
            ignore: false,
            table,
            partition_names: vec![],
            columns: vec![],
            source: InsertSource::Values(rows),
            on_duplicate: vec![],
        }
    }

    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(if self.is_replace { "REPLACE " } else { "INSERT " })?;
        restore_hints(ctx, &self.hints)?;
        restore_priority(ctx, &self.priority)?;
        if self.ignore {
            ctx.write_keyword("IGNORE ")?;
        }
        ctx.write_keyword("INTO ")?;
        self.table.restore(ctx).annotate("InsertStmt.Table")?;
        if !self.partition_names.is_empty() {
            ctx.write_keyword(" PARTITION")?;
            ctx.write_plain("(")?;
            restore_names(ctx, &self.partition_names, ", ")?;
            ctx.write_plain(")")?;
        }
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            restore_list(ctx, &self.columns, ",", "InsertStmt.Columns")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }

    /// Rejects sources that would leave a dangling `VALUES` or `SET`.
    fn check_source(&self) -> Result<(), RestoreError> {
        match &self.source {
            InsertSource::Values(rows) if rows.is_empty() => {
                Err(RestoreError::malformed("INSERT without rows"))
            }
            InsertSource::Set(assignments) if assignments.is_empty() => {
                Err(RestoreError::malformed("INSERT ... SET without assignments"))
            }
            _ => Ok(()),
        }
    }

    fn restore_row(ctx: &mut RestoreCtx<'_>, i: usize, row: &[Expr]) -> Result<(), RestoreError> {
        ctx.write_plain("(")?;
        restore_list(ctx, row, ",", "InsertStmt.Lists")
            .annotate_with(|| format!("InsertStmt.Lists[{i}]"))?;
        ctx.write_plain(")")
    }
}

impl Restore for InsertStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.check_source()?;
        self.restore_head(ctx)?;
        match &self.source {
            InsertSource::Values(rows)
                if ctx.has_flag(RestoreFlags::LITERALS_AS_PLACEHOLDERS)
                    && rows.iter().flatten().all(Expr::is_constant) =>
            {
                ctx.write_keyword(" VALUES ")?;
                ctx.write_plain("(...)")?;
            }
            InsertSource::Values(rows) => {
                ctx.write_keyword(" VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i != 0 {
                        ctx.write_plain(",")?;
                    }
                    Self::restore_row(ctx, i, row)?;
                }
            }
            InsertSource::Select(query) => {
                ctx.write_plain(" ")?;
                query.restore(ctx).annotate("InsertStmt.Select")?;
            }
            InsertSource::Set(assignments) => {
                ctx.write_keyword(" SET ")?;
                restore_list(ctx, assignments, ", ", "InsertStmt.Setlist")?;
            }
        }
        if !self.on_duplicate.is_empty() {
            ctx.write_keyword(" ON DUPLICATE KEY UPDATE ")?;
            restore_list(ctx, &self.on_duplicate, ", ", "InsertStmt.OnDuplicate")?;
        }
        Ok(())
    }
}

impl Pretty for InsertStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        self.check_source()?;
        self.restore_head(ctx)?;
        match &self.source {
            InsertSource::Values(rows) => {
                ctx.write_keyword(" VALUES")?;
                ctx.write_plain("\n")?;
                for (i, row) in rows.iter().enumerate() {
                    if i != 0 {
                        ctx.write_plain(",\n")?;
                    }
                    Self::restore_row(ctx, i, row)?;
                }
            }
            InsertSource::Select(query) => {
                ctx.write_plain("\n")?;
                query
                    .pretty(ctx, level, indent, indent_char)
                    .annotate("InsertStmt.Select")?;
            }
            InsertSource::Set(assignments) => {
                ctx.write_plain("\n")?;
                ctx.write_keyword("SET")?;
                for (i, assignment) in assignments.iter().enumerate() {
                    if i != 0 {
                        ctx.write_plain(",")?;
                    }
                    ctx.write_newline(level + 1, indent, indent_char)?;
                    assignment
                        .pretty(ctx, level, indent, indent_char)
                        .annotate_with(|| format!("InsertStmt.Setlist[{i}]"))?;
                }
            }
        }
        if !self.on_duplicate.is_empty() {
            ctx.write_keyword(" ON DUPLICATE KEY UPDATE ")?;
            pretty_list(
                ctx,
                &self.on_duplicate,
                ",\n",
                (level, indent, indent_char),
                "InsertStmt.OnDuplicate",
            )?;
        }
        Ok(())
    }
}

/// Which tables a `DELETE` removes rows from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum DeleteTables {
    /// `DELETE FROM t ...`
    Single,
    /// `DELETE t1, t2 FROM t1 JOIN t2 ...`
    BeforeFrom(Vec<TableName>),
    /// `DELETE FROM t1, t2 USING t1 JOIN t2 ...`
    Using(Vec<TableName>),
}

/// `DELETE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DeleteStmt {
    pub hints: Vec<TableOptimizerHint>,
    pub priority: Option<Priority>,
    pub quick: bool,
    pub ignore: bool,
    pub tables: DeleteTables,
    pub table_refs: Join,
    pub selection: Option<Expr>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl DeleteStmt {
    fn restore_head(&self, ctx: &mut RestoreCtx<'_>, table_sep: &str) -> Result<(), RestoreError> {
        ctx.write_keyword("DELETE ")?;
        restore_hints(ctx, &self.hints)?;
        restore_priority(ctx, &self.priority)?;
        if self.quick {
            ctx.write_keyword("QUICK ")?;
        }
        if self.ignore {
            ctx.write_keyword("IGNORE ")?;
        }
        match &self.tables {
            DeleteTables::Single => ctx.write_keyword("FROM ")?,
            DeleteTables::BeforeFrom(tables) => {
                restore_list(ctx, tables, table_sep, "DeleteStmt.Tables")?;
                ctx.write_keyword(" FROM ")?;
            }
            DeleteTables::Using(tables) => {
                ctx.write_keyword("FROM ")?;
                restore_list(ctx, tables, table_sep, "DeleteStmt.Tables")?;
                ctx.write_keyword(" USING ")?;
            }
        }
        Ok(())
    }
}

impl Restore for DeleteStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_head(ctx, ", ")?;
        self.table_refs.restore(ctx).annotate("DeleteStmt.TableRefs")?;
        if let Some(selection) = &self.selection {
            ctx.write_keyword(" WHERE ")?;
            selection.restore(ctx).annotate("DeleteStmt.Where")?;
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain(" ")?;
            order_by.restore(ctx).annotate("DeleteStmt.Order")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx).annotate("DeleteStmt.Limit")?;
        }
        Ok(())
    }
}

impl Pretty for DeleteStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        let level = level + 1;
        self.restore_head(ctx, ",")?;
        self.table_refs
            .pretty(ctx, level, indent, indent_char)
            .annotate("DeleteStmt.TableRefs")?;
        if let Some(selection) = &self.selection {
            ctx.write_plain("\n")?;
            ctx.write_keyword("WHERE ")?;
            selection
                .pretty(ctx, level, indent, indent_char)
                .annotate("DeleteStmt.Where")?;
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain("\n")?;
            order_by.restore(ctx).annotate("DeleteStmt.Order")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain("\n")?;
            limit.restore(ctx).annotate("DeleteStmt.Limit")?;
        }
        Ok(())
    }
}

/// `UPDATE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UpdateStmt {
    pub hints: Vec<TableOptimizerHint>,
    pub priority: Option<Priority>,
    pub ignore: bool,
    pub table_refs: Join,
    pub assignments: Vec<Assignment>,
    pub selection: Option<Expr>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl UpdateStmt {
    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("UPDATE ")?;
        restore_hints(ctx, &self.hints)?;
        restore_priority(ctx, &self.priority)?;
        if self.ignore {
            ctx.write_keyword("IGNORE ")?;
        }
        Ok(())
    }
}

impl Restore for UpdateStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        self.table_refs.restore(ctx).annotate("UpdateStmt.TableRefs")?;
        ctx.write_keyword(" SET ")?;
        restore_list(ctx, &self.assignments, ", ", "UpdateStmt.List")?;
        if let Some(selection) = &self.selection {
            ctx.write_keyword(" WHERE ")?;
            selection.restore(ctx).annotate("UpdateStmt.Where")?;
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain(" ")?;
            order_by.restore(ctx).annotate("UpdateStmt.Order")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx).annotate("UpdateStmt.Limit")?;
        }
        Ok(())
    }
}

impl Pretty for UpdateStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        let level = level + 1;
        self.restore_head(ctx)?;
        self.table_refs
            .pretty(ctx, level, indent, indent_char)
            .annotate("UpdateStmt.TableRefs")?;
        ctx.write_plain("\n")?;
        ctx.write_keyword("SET")?;
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i != 0 {
                ctx.write_plain(",")?;
            }
            ctx.write_newline(level, indent, indent_char)?;
            assignment
                .pretty(ctx, level, indent, indent_char)
                .annotate_with(|| format!("UpdateStmt.List[{i}]"))?;
        }
        if let Some(selection) = &self.selection {
            ctx.write_plain("\n")?;
            ctx.write_keyword("WHERE ")?;
            selection
                .pretty(ctx, level, indent, indent_char)
                .annotate("UpdateStmt.Where")?;
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain("\n")?;
            order_by
                .pretty(ctx, level, indent, indent_char)
                .annotate("UpdateStmt.Order")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain("\n")?;
            limit
                .pretty(ctx, level, indent, indent_char)
                .annotate("UpdateStmt.Limit")?;
        }
        Ok(())
    }
}

/// `FIELDS TERMINATED BY ... ENCLOSED BY ... ESCAPED BY ...`
///
/// Defaults are a tab terminator, no enclosing character and a backslash
/// escape; the clause is only written when one of them differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FieldsClause {
    pub terminated: String,
    pub enclosed: Option<char>,
    pub opt_enclosed: bool,
    /// `None` for `ESCAPED BY ''`
    pub escaped: Option<char>,
}

impl Default for FieldsClause {
    fn default() -> Self {
        FieldsClause {
            terminated: "\t".to_string(),
            enclosed: None,
            opt_enclosed: false,
            escaped: Some('\\'),
        }
    }
}

impl Restore for FieldsClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if *self == FieldsClause::default() {
            return Ok(());
        }
        ctx.write_keyword(" FIELDS")?;
        if self.terminated != "\t" {
            ctx.write_keyword(" TERMINATED BY ")?;
            ctx.write_string(&self.terminated)?;
        }
        if let Some(enclosed) = self.enclosed {
            if self.opt_enclosed {
                ctx.write_keyword(" OPTIONALLY")?;
            }
            ctx.write_keyword(" ENCLOSED BY ")?;
            ctx.write_string(&enclosed.to_string())?;
        }
        match self.escaped {
            Some('\\') => {}
            Some(escaped) => {
                ctx.write_keyword(" ESCAPED BY ")?;
                ctx.write_string(&escaped.to_string())?;
            }
            None => {
                ctx.write_keyword(" ESCAPED BY ")?;
                ctx.write_plain("''")?;
            }
        }
        Ok(())
    }
}

impl Pretty for FieldsClause {}

/// `LINES STARTING BY ... TERMINATED BY ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct LinesClause {
    pub starting: String,
    pub terminated: String,
}

impl Default for LinesClause {
    fn default() -> Self {
        LinesClause {
            starting: String::new(),
            terminated: "\n".to_string(),
        }
    }
}

impl Restore for LinesClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if *self == LinesClause::default() {
            return Ok(());
        }
        ctx.write_keyword(" LINES")?;
        if !self.starting.is_empty() {
            ctx.write_keyword(" STARTING BY ")?;
            ctx.write_string(&self.starting)?;
        }
        if self.terminated != "\n" {
            ctx.write_keyword(" TERMINATED BY ")?;
            ctx.write_string(&self.terminated)?;
        }
        Ok(())
    }
}

impl Pretty for LinesClause {}

keyword_enum! {
    /// What `LOAD DATA` does with rows that collide on a unique key
    pub enum OnDuplicateKeyHandling {
        Replace = 2 => "REPLACE",
        Ignore = 1 => "IGNORE",
    }
}

/// Target of one loaded column: a table column or a user variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum ColumnOrUserVar {
    Column(ColumnName),
    UserVar(Variable),
}

impl Restore for ColumnOrUserVar {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            ColumnOrUserVar::Column(c) => c.restore(ctx),
            ColumnOrUserVar::UserVar(v) => v.restore(ctx),
        }
    }
}

impl Pretty for ColumnOrUserVar {}

/// `LOAD DATA [LOCAL] INFILE 'path' ... INTO TABLE t ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct LoadDataStmt {
    pub local: bool,
    pub path: String,
    pub on_duplicate: Option<OnDuplicateKeyHandling>,
    pub table: TableName,
    pub fields: Option<FieldsClause>,
    pub lines: Option<LinesClause>,
    pub ignore_lines: u64,
    pub columns: Vec<ColumnOrUserVar>,
    pub assignments: Vec<Assignment>,
}

impl Restore for LoadDataStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("LOAD DATA ")?;
        if self.local {
            ctx.write_keyword("LOCAL ")?;
        }
        ctx.write_keyword("INFILE ")?;
        ctx.write_string(&self.path)?;
        if let Some(on_duplicate) = &self.on_duplicate {
            ctx.write_plain(" ")?;
            on_duplicate.restore(ctx)?;
        }
        ctx.write_keyword(" INTO TABLE ")?;
        self.table.restore(ctx).annotate("LoadDataStmt.Table")?;
        if let Some(fields) = &self.fields {
            fields.restore(ctx).annotate("LoadDataStmt.FieldsInfo")?;
        }
        if let Some(lines) = &self.lines {
            lines.restore(ctx).annotate("LoadDataStmt.LinesInfo")?;
        }
        if self.ignore_lines != 0 {
            ctx.write_keyword(" IGNORE ")?;
            ctx.write_plainf(format_args!("{}", self.ignore_lines))?;
            ctx.write_keyword(" LINES")?;
        }
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            restore_list(ctx, &self.columns, ",", "LoadDataStmt.ColumnsAndUserVars")?;
            ctx.write_plain(")")?;
        }
        if !self.assignments.is_empty() {
            ctx.write_keyword(" SET")?;
            for (i, assignment) in self.assignments.iter().enumerate() {
                if i != 0 {
                    ctx.write_plain(",")?;
                }
                ctx.write_plain(" ")?;
                assignment
                    .restore(ctx)
                    .annotate_with(|| format!("LoadDataStmt.ColumnAssignments[{i}]"))?;
            }
        }
        Ok(())
    }
}

impl Pretty for LoadDataStmt {}

/// Where `SPLIT TABLE` cuts the key range
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum SplitOption {
    /// `BETWEEN (lower) AND (upper) REGIONS num`
    Between {
        lower: Vec<Expr>,
        upper: Vec<Expr>,
        num: u64,
    },
    /// `BY (v1),(v2)`
    By(Vec<Vec<Expr>>),
}

impl Restore for SplitOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            SplitOption::Between { lower, upper, num } => {
                ctx.write_keyword("BETWEEN ")?;
                ctx.write_plain("(")?;
                restore_list(ctx, lower, ",", "SplitOption.Lower")?;
                ctx.write_plain(")")?;
                ctx.write_keyword(" AND ")?;
                ctx.write_plain("(")?;
                restore_list(ctx, upper, ",", "SplitOption.Upper")?;
                ctx.write_plain(")")?;
                ctx.write_keyword(" REGIONS")?;
                ctx.write_plainf(format_args!(" {num}"))
            }
            SplitOption::By(rows) if rows.is_empty() => {
                Err(RestoreError::malformed("SPLIT ... BY without split points"))
            }
            SplitOption::By(rows) => {
                ctx.write_keyword("BY ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i != 0 {
                        ctx.write_plain(",")?;
                    }
                    ctx.write_plain("(")?;
                    restore_list(ctx, row, ",", "SplitOption.ValueLists")
                        .annotate_with(|| format!("SplitOption.ValueLists[{i}]"))?;
                    ctx.write_plain(")")?;
                }
                Ok(())
            }
        }
    }
}

impl Pretty for SplitOption {}

/// `SPLIT [REGION FOR] [PARTITION] TABLE t [PARTITION (p0)] [INDEX idx] <option>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SplitRegionStmt {
    pub region_for: bool,
    pub partition_syntax: bool,
    pub table: TableName,
    pub partition_names: Vec<Ident>,
    /// Splits the index instead of the row data when set.
    pub index: Option<Ident>,
    pub split: SplitOption,
}

impl SplitRegionStmt {
    pub fn new(table: TableName, split: SplitOption) -> Self {
        SplitRegionStmt {
            region_for: false,
            partition_syntax: false,
            table,
            partition_names: vec![],
            index: None,
            split,
        }
    }
}

impl Restore for SplitRegionStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SPLIT ")?;
        if self.region_for {
            ctx.write_keyword("REGION FOR ")?;
        }
        if self.partition_syntax {
            ctx.write_keyword("PARTITION ")?;
        }
        ctx.write_keyword("TABLE ")?;
        self.table.restore(ctx).annotate("SplitRegionStmt.Table")?;
        if !self.partition_names.is_empty() {
            ctx.write_keyword(" PARTITION")?;
            ctx.write_plain("(")?;
            restore_names(ctx, &self.partition_names, ", ")?;
            ctx.write_plain(")")?;
        }
        if let Some(index) = self.index.as_ref().filter(|i| !i.is_empty()) {
            ctx.write_keyword(" INDEX ")?;
            ctx.write_name(index.as_str())?;
        }
        ctx.write_plain(" ")?;
        self.split.restore(ctx).annotate("SplitRegionStmt.SplitOpt")
    }
}

impl Pretty for SplitRegionStmt {}
