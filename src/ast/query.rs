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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{restore_names, ColumnName, Expr, FieldsClause, Ident, LinesClause, TableName, TimeUnit};
use crate::format::{
    display, pretty_list, restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError,
};

/// A query that produces rows: a `SELECT` or a `UNION` of them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "Query"))]
pub enum Query {
    Select(Box<SelectStmt>),
    Union(Box<UnionStmt>),
}

impl From<SelectStmt> for Query {
    fn from(select: SelectStmt) -> Self {
        Query::Select(Box::new(select))
    }
}

impl From<UnionStmt> for Query {
    fn from(union: UnionStmt) -> Self {
        Query::Union(Box::new(union))
    }
}

impl Restore for Query {
    #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let _guard = ctx.enter_nested()?;
        let _scope = ctx.enter_subquery();
        match self {
            Query::Select(s) => s.restore(ctx),
            Query::Union(u) => u.restore(ctx),
        }
    }
}

impl Pretty for Query {
    #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        let _guard = ctx.enter_nested()?;
        let _scope = ctx.enter_subquery();
        match self {
            Query::Select(s) => s.pretty(ctx, level, indent, indent_char),
            Query::Union(u) => u.pretty(ctx, level, indent, indent_char),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display(self, f)
    }
}

keyword_enum! {
    /// Scheduling priority of a statement
    pub enum Priority {
        LowPriority = 1 => "LOW_PRIORITY",
        HighPriority = 2 => "HIGH_PRIORITY",
        Delayed = 3 => "DELAYED",
    }
}

keyword_enum! {
    /// Row locking clause at the end of a `SELECT`
    pub enum SelectLock {
        InShareMode = 2 => "IN SHARE MODE",
        ForUpdate = 1 => "FOR UPDATE",
        ForUpdateNoWait = 3 => "FOR UPDATE NOWAIT",
    }
}

/// `SELECT ...`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "SelectStmt"))]
pub struct SelectStmt {
    pub priority: Option<Priority>,
    pub sql_small_result: bool,
    pub sql_big_result: bool,
    pub sql_buffer_result: bool,
    pub sql_no_cache: bool,
    pub straight_join: bool,
    /// Optimizer hints written as `/*+ ... */`
    pub hints: Vec<TableOptimizerHint>,
    pub distinct: bool,
    pub fields: Vec<SelectItem>,
    pub from: Option<Join>,
    pub selection: Option<Expr>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expr>,
    /// Named windows of the `WINDOW` clause
    pub windows: Vec<WindowSpec>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
    pub lock: Option<SelectLock>,
    pub into: Option<SelectInto>,
    /// Parenthesized member of a `UNION`
    pub in_braces: bool,
    /// Joined to the previous `UNION` member with `UNION` rather than
    /// `UNION ALL`
    pub after_union_distinct: bool,
}

impl SelectStmt {
    fn restore_options(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(priority) = &self.priority {
            priority.restore(ctx)?;
            ctx.write_plain(" ")?;
        }
        if self.sql_small_result {
            ctx.write_keyword("SQL_SMALL_RESULT ")?;
        }
        if self.sql_big_result {
            ctx.write_keyword("SQL_BIG_RESULT ")?;
        }
        if self.sql_buffer_result {
            ctx.write_keyword("SQL_BUFFER_RESULT ")?;
        }
        if self.sql_no_cache {
            ctx.write_keyword("SQL_NO_CACHE ")?;
        }
        restore_hints(ctx, &self.hints)
    }

    fn restore_lock_and_into(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self.lock {
            Some(SelectLock::InShareMode) => {
                ctx.write_keyword(" LOCK ")?;
                SelectLock::InShareMode.restore(ctx)?;
            }
            Some(lock) => {
                ctx.write_plain(" ")?;
                lock.restore(ctx)?;
            }
            None => {}
        }
        if let Some(into) = &self.into {
            ctx.write_plain(" ")?;
            into.restore(ctx).annotate("SelectStmt.SelectIntoOpt")?;
        }
        Ok(())
    }
}

/// Writes `/*+ h1, h2*/ ` when there are hints.
pub(crate) fn restore_hints(
    ctx: &mut RestoreCtx<'_>,
    hints: &[TableOptimizerHint],
) -> Result<(), RestoreError> {
    if !hints.is_empty() {
        ctx.write_plain("/*+ ")?;
        restore_list(ctx, hints, ", ", "TableHints")?;
        ctx.write_plain("*/ ")?;
    }
    Ok(())
}

impl Restore for SelectStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SELECT ")?;
        self.restore_options(ctx)?;
        if self.distinct {
            ctx.write_keyword("DISTINCT ")?;
        }
        if self.straight_join {
            ctx.write_keyword("STRAIGHT_JOIN ")?;
        }
        restore_list(ctx, &self.fields, ", ", "SelectStmt.Fields")?;

        if let Some(from) = &self.from {
            ctx.write_keyword(" FROM ")?;
            from.restore(ctx).annotate("SelectStmt.From")?;
        }
        if let Some(selection) = &self.selection {
            if self.from.is_none() {
                ctx.write_keyword(" FROM DUAL")?;
            }
            ctx.write_keyword(" WHERE ")?;
            selection.restore(ctx).annotate("SelectStmt.Where")?;
        }
        if let Some(group_by) = &self.group_by {
            ctx.write_plain(" ")?;
            group_by.restore(ctx).annotate("SelectStmt.GroupBy")?;
        }
        if let Some(having) = &self.having {
            ctx.write_keyword(" HAVING ")?;
            having.restore(ctx).annotate("SelectStmt.Having")?;
        }
        if !self.windows.is_empty() {
            ctx.write_keyword(" WINDOW ")?;
            restore_list(ctx, &self.windows, ", ", "SelectStmt.WindowSpec")?;
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain(" ")?;
            order_by.restore(ctx).annotate("SelectStmt.OrderBy")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx).annotate("SelectStmt.Limit")?;
        }
        self.restore_lock_and_into(ctx)
    }
}

impl Pretty for SelectStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        let level = level + 1;
        let clause = level - 1;
        ctx.write_indent(clause, indent, indent_char)?;
        ctx.write_keyword("SELECT ")?;
        self.restore_options(ctx)?;

        ctx.write_newline(level, indent, indent_char)?;
        if self.distinct {
            ctx.write_keyword("DISTINCT ")?;
        }
        if self.straight_join {
            ctx.write_keyword("STRAIGHT_JOIN ")?;
        }
        for (i, field) in self.fields.iter().enumerate() {
            if i != 0 {
                ctx.write_plain(",")?;
                if i % 5 == 0 {
                    ctx.write_newline(level, indent, indent_char)?;
                }
            }
            field
                .pretty(ctx, level, indent, indent_char)
                .annotate_with(|| format!("SelectStmt.Fields[{i}]"))?;
        }

        if let Some(from) = &self.from {
            ctx.write_newline(clause, indent, indent_char)?;
            ctx.write_keyword("FROM ")?;
            from.pretty(ctx, level, indent, indent_char)
                .annotate("SelectStmt.From")?;
        }
        if let Some(selection) = &self.selection {
            if self.from.is_none() {
                ctx.write_newline(clause, indent, indent_char)?;
                ctx.write_keyword("FROM DUAL")?;
            }
            ctx.write_newline(clause, indent, indent_char)?;
            ctx.write_keyword("WHERE ")?;
            selection
                .pretty(ctx, level, indent, indent_char)
                .annotate("SelectStmt.Where")?;
        }
        if let Some(group_by) = &self.group_by {
            ctx.write_newline(clause, indent, indent_char)?;
            group_by
                .pretty(ctx, level, indent, indent_char)
                .annotate("SelectStmt.GroupBy")?;
        }
        if let Some(having) = &self.having {
            ctx.write_newline(clause, indent, indent_char)?;
            ctx.write_keyword("HAVING ")?;
            having
                .pretty(ctx, level, indent, indent_char)
                .annotate("SelectStmt.Having")?;
        }
        if !self.windows.is_empty() {
            ctx.write_newline(clause, indent, indent_char)?;
            ctx.write_keyword("WINDOW ")?;
            pretty_list(
                ctx,
                &self.windows,
                ",",
                (level, indent, indent_char),
                "SelectStmt.WindowSpec",
            )?;
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_newline(clause, indent, indent_char)?;
            order_by
                .pretty(ctx, level, indent, indent_char)
                .annotate("SelectStmt.OrderBy")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_newline(clause, indent, indent_char)?;
            limit
                .pretty(ctx, level, indent, indent_char)
                .annotate("SelectStmt.Limit")?;
        }
        self.restore_lock_and_into(ctx)
    }
}

/// `SELECT ... UNION [ALL] SELECT ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UnionStmt {
    pub selects: Vec<SelectStmt>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl UnionStmt {
    fn write_union_keyword(
        ctx: &mut RestoreCtx<'_>,
        select: &SelectStmt,
    ) -> Result<(), RestoreError> {
        ctx.write_keyword("UNION ")?;
        if !select.after_union_distinct {
            ctx.write_keyword("ALL ")?;
        }
        Ok(())
    }
}

impl Restore for UnionStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.selects.is_empty() {
            return Err(RestoreError::malformed("UNION without any SELECT"));
        }
        for (i, select) in self.selects.iter().enumerate() {
            if i != 0 {
                ctx.write_plain(" ")?;
                Self::write_union_keyword(ctx, select)?;
            }
            if select.in_braces {
                ctx.write_plain("(")?;
            }
            select
                .restore(ctx)
                .annotate_with(|| format!("UnionStmt.SelectList[{i}]"))?;
            if select.in_braces {
                ctx.write_plain(")")?;
            }
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain(" ")?;
            order_by.restore(ctx).annotate("UnionStmt.OrderBy")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx).annotate("UnionStmt.Limit")?;
        }
        Ok(())
    }
}

impl Pretty for UnionStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        if self.selects.is_empty() {
            return Err(RestoreError::malformed("UNION without any SELECT"));
        }
        for (i, select) in self.selects.iter().enumerate() {
            if i != 0 {
                ctx.write_plain("\n")?;
                Self::write_union_keyword(ctx, select)?;
                ctx.write_plain("\n")?;
            }
            if select.in_braces {
                ctx.write_plain("(")?;
            }
            select
                .pretty(ctx, level, indent, indent_char)
                .annotate_with(|| format!("UnionStmt.SelectList[{i}]"))?;
            if select.in_braces {
                ctx.write_plain(")")?;
            }
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain(" ")?;
            order_by
                .pretty(ctx, level, indent, indent_char)
                .annotate("UnionStmt.OrderBy")?;
        }
        if let Some(limit) = &self.limit {
            ctx.write_plain(" ")?;
            limit
                .pretty(ctx, level, indent, indent_char)
                .annotate("UnionStmt.Limit")?;
        }
        Ok(())
    }
}

/// One item of the comma-separated list following `SELECT`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum SelectItem {
    /// `*`, `t.*` or `db.t.*`
    Wildcard {
        schema: Option<Ident>,
        table: Option<Ident>,
    },
    /// An expression, optionally followed by `AS alias`
    Expr { expr: Expr, alias: Option<Ident> },
}

impl SelectItem {
    pub fn wildcard() -> Self {
        SelectItem::Wildcard {
            schema: None,
            table: None,
        }
    }

    pub fn expr(expr: Expr) -> Self {
        SelectItem::Expr { expr, alias: None }
    }
}

impl Restore for SelectItem {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            SelectItem::Wildcard { schema, table } => {
                for qualifier in [schema, table].into_iter().flatten() {
                    ctx.write_name(qualifier.as_str())?;
                    ctx.write_plain(".")?;
                }
                ctx.write_plain("*")
            }
            SelectItem::Expr { expr, alias } => {
                expr.restore(ctx).annotate("SelectField.Expr")?;
                if let Some(alias) = alias {
                    ctx.write_keyword(" AS ")?;
                    ctx.write_name(alias.as_str())?;
                }
                Ok(())
            }
        }
    }
}

impl Pretty for SelectItem {}

/// A join tree. A `FROM` clause with a single table is a join without a
/// right side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "Join"))]
pub struct Join {
    pub left: TableRef,
    pub right: Option<TableRef>,
    pub join_type: JoinType,
    pub natural: bool,
    pub straight: bool,
    pub on: Option<Expr>,
    pub using: Vec<ColumnName>,
}

impl Join {
    /// A `FROM` clause naming one table source.
    pub fn single(source: TableSource) -> Self {
        Join {
            left: TableRef::Source(source),
            right: None,
            join_type: JoinType::Cross,
            natural: false,
            straight: false,
            on: None,
            using: vec![],
        }
    }

    pub fn new(left: impl Into<TableRef>, join_type: JoinType, right: impl Into<TableRef>) -> Self {
        Join {
            left: left.into(),
            right: Some(right.into()),
            join_type,
            natural: false,
            straight: false,
            on: None,
            using: vec![],
        }
    }

    pub fn on(mut self, condition: Expr) -> Self {
        self.on = Some(condition);
        self
    }

    fn restore_using(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if !self.using.is_empty() {
            ctx.write_keyword(" USING ")?;
            ctx.write_plain("(")?;
            restore_list(ctx, &self.using, ",", "Join.Using")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

keyword_enum! {
    pub enum JoinType {
        Cross = 1 => "",
        Left = 2 => "LEFT",
        Right = 3 => "RIGHT",
    }
}

impl Restore for Join {
    #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let _guard = ctx.enter_nested()?;
        let parenthesized = ctx.join_level() != 0;
        if parenthesized {
            ctx.write_plain("(")?;
        }
        {
            let _join = ctx.enter_join();
            self.left.restore(ctx).annotate("Join.Left")?;
        }
        if let Some(right) = &self.right {
            if self.natural {
                ctx.write_keyword(" NATURAL")?;
            }
            if self.join_type != JoinType::Cross {
                ctx.write_plain(" ")?;
                self.join_type.restore(ctx)?;
            }
            ctx.write_keyword(if self.straight {
                " STRAIGHT_JOIN "
            } else {
                " JOIN "
            })?;
            {
                let _join = ctx.enter_join();
                right.restore(ctx).annotate("Join.Right")?;
            }
            if let Some(on) = &self.on {
                ctx.write_keyword(" ON ")?;
                on.restore(ctx).annotate("Join.On")?;
            }
            self.restore_using(ctx)?;
        }
        if parenthesized {
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Pretty for Join {
    #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        let _guard = ctx.enter_nested()?;
        let parenthesized = ctx.join_level() != 0;
        if parenthesized {
            ctx.write_plain("(")?;
        }
        {
            let _join = ctx.enter_join();
            self.left
                .pretty(ctx, level, indent, indent_char)
                .annotate("Join.Left")?;
        }
        if let Some(right) = &self.right {
            ctx.write_newline(level.saturating_sub(1), indent, indent_char)?;
            if self.natural {
                ctx.write_keyword("NATURAL ")?;
            }
            if self.join_type != JoinType::Cross {
                self.join_type.restore(ctx)?;
                ctx.write_plain(" ")?;
            }
            ctx.write_keyword(if self.straight {
                "STRAIGHT_JOIN "
            } else {
                "JOIN "
            })?;
            {
                let _join = ctx.enter_join();
                right
                    .pretty(ctx, level, indent, indent_char)
                    .annotate("Join.Right")?;
            }
            if let Some(on) = &self.on {
                ctx.write_newline(level, indent, indent_char)?;
                ctx.write_keyword("ON ")?;
                on.pretty(ctx, level, indent, indent_char)
                    .annotate("Join.On")?;
            }
            self.restore_using(ctx)?;
        }
        if parenthesized {
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

/// One side of a [`Join`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum TableRef {
    Source(TableSource),
    Join(Box<Join>),
}

impl From<TableSource> for TableRef {
    fn from(source: TableSource) -> Self {
        TableRef::Source(source)
    }
}

impl From<Join> for TableRef {
    fn from(join: Join) -> Self {
        TableRef::Join(Box::new(join))
    }
}

impl Restore for TableRef {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            TableRef::Source(s) => s.restore(ctx),
            TableRef::Join(j) => j.restore(ctx),
        }
    }
}

impl Pretty for TableRef {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        match self {
            TableRef::Source(s) => s.pretty(ctx, level, indent, indent_char),
            TableRef::Join(j) => j.pretty(ctx, level, indent, indent_char),
        }
    }
}

/// What a [`TableSource`] reads from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum TableFactor {
    Table(TableName),
    /// A derived table, always parenthesized
    Derived(Box<Query>),
}

/// A table or derived table with an optional alias.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "TableSource"))]
pub struct TableSource {
    pub source: TableFactor,
    pub alias: Option<Ident>,
}

impl TableSource {
    pub fn table(name: TableName) -> Self {
        TableSource {
            source: TableFactor::Table(name),
            alias: None,
        }
    }

    pub fn derived(query: impl Into<Query>, alias: impl Into<Ident>) -> Self {
        TableSource {
            source: TableFactor::Derived(Box::new(query.into())),
            alias: Some(alias.into()),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<Ident>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    fn restore_alias(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(alias) = &self.alias {
            ctx.write_keyword(" AS ")?;
            ctx.write_name(alias.as_str())?;
        }
        Ok(())
    }

    fn restore_table(&self, ctx: &mut RestoreCtx<'_>, table: &TableName) -> Result<(), RestoreError> {
        table.restore_name(ctx)?;
        table.restore_partitions(ctx)?;
        self.restore_alias(ctx)?;
        table.restore_index_hints(ctx).annotate("TableSource.Source")
    }
}

impl Restore for TableSource {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match &self.source {
            TableFactor::Table(table) => self.restore_table(ctx, table),
            TableFactor::Derived(query) => {
                ctx.write_plain("(")?;
                query.restore(ctx).annotate("TableSource.Source")?;
                ctx.write_plain(")")?;
                self.restore_alias(ctx)
            }
        }
    }
}

impl Pretty for TableSource {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        match &self.source {
            TableFactor::Table(table) => self.restore_table(ctx, table),
            TableFactor::Derived(query) => {
                ctx.write_plain("(\n")?;
                query
                    .pretty(ctx, level, indent, indent_char)
                    .annotate("TableSource.Source")?;
                ctx.write_newline(level.saturating_sub(1), indent, indent_char)?;
                ctx.write_plain(")")?;
                self.restore_alias(ctx)
            }
        }
    }
}

keyword_enum! {
    pub enum IndexHintType {
        Use = 1 => "USE INDEX",
        Ignore = 2 => "IGNORE INDEX",
        Force = 3 => "FORCE INDEX",
    }
}

keyword_enum! {
    pub enum IndexHintScope {
        Scan = 1 => "",
        Join = 2 => " FOR JOIN",
        OrderBy = 3 => " FOR ORDER BY",
        GroupBy = 4 => " FOR GROUP BY",
    }
}

/// `USE INDEX (a, b)`, `FORCE INDEX FOR JOIN (a)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct IndexHint {
    pub hint_type: IndexHintType,
    pub index_names: Vec<Ident>,
    pub scope: IndexHintScope,
}

impl Restore for IndexHint {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.hint_type.restore(ctx)?;
        self.scope.restore(ctx)?;
        ctx.write_plain(" (")?;
        restore_names(ctx, &self.index_names, ", ")?;
        ctx.write_plain(")")
    }
}

impl Pretty for IndexHint {}

/// A table named inside an optimizer hint, `db.t@qb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct HintTable {
    pub schema: Option<Ident>,
    pub table: Ident,
    pub qb_name: Option<Ident>,
}

impl HintTable {
    pub fn new(table: impl Into<Ident>) -> Self {
        HintTable {
            schema: None,
            table: table.into(),
            qb_name: None,
        }
    }
}

impl Restore for HintTable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(schema) = &self.schema {
            ctx.write_name(schema.as_str())?;
            ctx.write_plain(".")?;
        }
        ctx.write_name(self.table.as_str())?;
        if let Some(qb_name) = &self.qb_name {
            ctx.write_plain("@")?;
            ctx.write_name(qb_name.as_str())?;
        }
        Ok(())
    }
}

impl Pretty for HintTable {}

/// Arguments of an optimizer hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum HintArgs {
    None,
    /// `MAX_EXECUTION_TIME(1000)`
    Integer(u64),
    /// `MEMORY_QUOTA(1024 MB)`, written as is
    Text(String),
    /// `HASH_JOIN(t1, t2)`
    Tables(Vec<HintTable>),
    /// `USE_INDEX(t, idx1, idx2)`
    Index { table: HintTable, indexes: Vec<Ident> },
}

/// An optimizer hint inside `/*+ ... */`, e.g. `HASH_JOIN(@sel_1 t1, t2)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct TableOptimizerHint {
    pub name: Ident,
    /// Query block the hint applies to
    pub qb_name: Option<Ident>,
    pub args: HintArgs,
}

impl Restore for TableOptimizerHint {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(self.name.as_str())?;
        ctx.write_plain("(")?;
        if let Some(qb_name) = &self.qb_name {
            // QB_NAME(name) declares the block rather than referring to it
            if self.name.normalized() != "qb_name" {
                ctx.write_plain("@")?;
            }
            ctx.write_name(qb_name.as_str())?;
            if self.args != HintArgs::None {
                ctx.write_plain(" ")?;
            }
        }
        match &self.args {
            HintArgs::None => {}
            HintArgs::Integer(v) => ctx.write_plainf(format_args!("{v}"))?,
            HintArgs::Text(v) => ctx.write_plain(v)?,
            HintArgs::Tables(tables) => restore_list(ctx, tables, ", ", "TableOptimizerHint.Tables")?,
            HintArgs::Index { table, indexes } => {
                table.restore(ctx).annotate("TableOptimizerHint.Table")?;
                if !indexes.is_empty() {
                    ctx.write_plain(" ")?;
                    restore_names(ctx, indexes, ", ")?;
                }
            }
        }
        ctx.write_plain(")")
    }
}

impl Pretty for TableOptimizerHint {}

/// `expr [DESC]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ByItem {
    pub expr: Expr,
    pub desc: bool,
}

impl ByItem {
    pub fn new(expr: Expr) -> Self {
        ByItem { expr, desc: false }
    }

    pub fn desc(expr: Expr) -> Self {
        ByItem { expr, desc: true }
    }
}

impl Restore for ByItem {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.expr.restore(ctx).annotate("ByItem.Expr")?;
        if self.desc {
            ctx.write_keyword(" DESC")?;
        }
        Ok(())
    }
}

impl Pretty for ByItem {}

/// `GROUP BY a, b`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct GroupBy {
    pub items: Vec<ByItem>,
}

impl Restore for GroupBy {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("GROUP BY ")?;
        restore_list(ctx, &self.items, ", ", "GroupByClause.Items")
    }
}

impl Pretty for GroupBy {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        _level: usize,
        _indent: usize,
        _indent_char: &str,
    ) -> Result<(), RestoreError> {
        ctx.write_keyword("GROUP BY ")?;
        restore_list(ctx, &self.items, ",", "GroupByClause.Items")
    }
}

/// `ORDER BY a DESC, b`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct OrderBy {
    pub items: Vec<ByItem>,
}

impl Restore for OrderBy {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ORDER BY ")?;
        restore_list(ctx, &self.items, ", ", "OrderByClause.Items")
    }
}

impl Pretty for OrderBy {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        _level: usize,
        _indent: usize,
        _indent_char: &str,
    ) -> Result<(), RestoreError> {
        ctx.write_keyword("ORDER BY ")?;
        restore_list(ctx, &self.items, ",", "OrderByClause.Items")
    }
}

/// `LIMIT [offset,] count`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Limit {
    pub count: Expr,
    pub offset: Option<Expr>,
}

impl Restore for Limit {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("LIMIT ")?;
        if let Some(offset) = &self.offset {
            offset.restore(ctx).annotate("Limit.Offset")?;
            ctx.write_plain(",")?;
        }
        self.count.restore(ctx).annotate("Limit.Count")
    }
}

impl Pretty for Limit {}

/// A window definition, either named in a `WINDOW` clause or inline after
/// `OVER`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct WindowSpec {
    pub name: Option<Ident>,
    /// `OVER w` refers to a named window and has no body
    pub only_alias: bool,
    /// Window this one is based on
    pub reference: Option<Ident>,
    pub partition_by: Vec<ByItem>,
    pub order_by: Option<OrderBy>,
    pub frame: Option<FrameClause>,
}

impl Restore for WindowSpec {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(name) = &self.name {
            ctx.write_name(name.as_str())?;
            if self.only_alias {
                return Ok(());
            }
            ctx.write_keyword(" AS ")?;
        }
        ctx.write_plain("(")?;
        let mut sep = "";
        if let Some(reference) = &self.reference {
            ctx.write_name(reference.as_str())?;
            sep = " ";
        }
        if !self.partition_by.is_empty() {
            ctx.write_plain(sep)?;
            ctx.write_keyword("PARTITION BY ")?;
            restore_list(ctx, &self.partition_by, ", ", "WindowSpec.PartitionBy")?;
            sep = " ";
        }
        if let Some(order_by) = &self.order_by {
            ctx.write_plain(sep)?;
            order_by.restore(ctx).annotate("WindowSpec.OrderBy")?;
            sep = " ";
        }
        if let Some(frame) = &self.frame {
            ctx.write_plain(sep)?;
            frame.restore(ctx).annotate("WindowSpec.Frame")?;
        }
        ctx.write_plain(")")
    }
}

impl Pretty for WindowSpec {}

keyword_enum! {
    pub enum FrameUnits {
        Rows = 0 => "ROWS",
        Range = 1 => "RANGE",
    }
}

/// `ROWS BETWEEN <start> AND <end>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FrameClause {
    pub units: FrameUnits,
    pub start: FrameBound,
    pub end: FrameBound,
}

impl Restore for FrameClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.units.restore(ctx)?;
        ctx.write_keyword(" BETWEEN ")?;
        self.start.restore(ctx).annotate("FrameClause.Extent.Start")?;
        ctx.write_keyword(" AND ")?;
        self.end.restore(ctx).annotate("FrameClause.Extent.End")
    }
}

impl Pretty for FrameClause {}

/// An offset from the current row; `INTERVAL <expr> <unit>` when a unit is
/// given.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FrameOffset {
    pub expr: Box<Expr>,
    pub unit: Option<TimeUnit>,
}

/// One end of a window frame. A bound without an offset is `UNBOUNDED`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum FrameBound {
    CurrentRow,
    Preceding(Option<FrameOffset>),
    Following(Option<FrameOffset>),
}

impl Restore for FrameBound {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let (offset, direction) = match self {
            FrameBound::CurrentRow => return ctx.write_keyword("CURRENT ROW"),
            FrameBound::Preceding(offset) => (offset, " PRECEDING"),
            FrameBound::Following(offset) => (offset, " FOLLOWING"),
        };
        match offset {
            None => ctx.write_keyword("UNBOUNDED")?,
            Some(FrameOffset { expr, unit: None }) => {
                expr.restore(ctx).annotate("FrameBound.Expr")?
            }
            Some(FrameOffset {
                expr,
                unit: Some(unit),
            }) => {
                ctx.write_keyword("INTERVAL ")?;
                expr.restore(ctx).annotate("FrameBound.Expr")?;
                ctx.write_plain(" ")?;
                unit.restore(ctx)?;
            }
        }
        ctx.write_keyword(direction)
    }
}

impl Pretty for FrameBound {}

/// `INTO OUTFILE 'path' [FIELDS ...] [LINES ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SelectInto {
    pub file_name: String,
    pub fields: Option<FieldsClause>,
    pub lines: Option<LinesClause>,
}

impl Restore for SelectInto {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("INTO OUTFILE ")?;
        ctx.write_string(&self.file_name)?;
        if let Some(fields) = &self.fields {
            fields.restore(ctx).annotate("SelectIntoOption.FieldsInfo")?;
        }
        if let Some(lines) = &self.lines {
            lines.restore(ctx).annotate("SelectIntoOption.LinesInfo")?;
        }
        Ok(())
    }
}

impl Pretty for SelectInto {}
