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

//! `PARTITION BY` clauses and partition definitions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{ColumnName, Expr, Ident, TableOption, TimeUnit};
use crate::format::{restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError};

keyword_enum! {
    pub enum PartitionType {
        Range = 1 => "RANGE",
        Hash = 2 => "HASH",
        List = 3 => "LIST",
        Key = 4 => "KEY",
        SystemTime = 5 => "SYSTEM_TIME",
    }
}

/// How rows are assigned to partitions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct PartitionMethod {
    pub linear: bool,
    pub tp: PartitionType,
    /// Partitioning expression, or the interval of `SYSTEM_TIME`
    pub expr: Option<Expr>,
    /// Column list of `RANGE COLUMNS`, `LIST COLUMNS` and `KEY`
    pub columns: Vec<ColumnName>,
    /// Interval unit of `SYSTEM_TIME`
    pub unit: Option<TimeUnit>,
    pub limit: u64,
}

impl PartitionMethod {
    pub fn columns(tp: PartitionType, columns: Vec<ColumnName>) -> Self {
        PartitionMethod {
            linear: false,
            tp,
            expr: None,
            columns,
            unit: None,
            limit: 0,
        }
    }

    pub fn expr(tp: PartitionType, expr: Expr) -> Self {
        PartitionMethod {
            expr: Some(expr),
            ..PartitionMethod::columns(tp, vec![])
        }
    }
}

impl Restore for PartitionMethod {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.linear {
            ctx.write_keyword("LINEAR ")?;
        }
        self.tp.restore(ctx)?;
        match (&self.tp, &self.expr) {
            (PartitionType::SystemTime, Some(expr)) => {
                if let Some(unit) = &self.unit {
                    ctx.write_keyword(" INTERVAL ")?;
                    expr.restore(ctx).annotate("PartitionMethod.Expr")?;
                    ctx.write_plain(" ")?;
                    unit.restore(ctx)?;
                }
            }
            (PartitionType::SystemTime, None) => {}
            (_, Some(expr)) => {
                ctx.write_plain(" (")?;
                expr.restore(ctx).annotate("PartitionMethod.Expr")?;
                ctx.write_plain(")")?;
            }
            (tp, None) => {
                if matches!(tp, PartitionType::Range | PartitionType::List) {
                    ctx.write_keyword(" COLUMNS")?;
                }
                ctx.write_plain(" (")?;
                restore_list(ctx, &self.columns, ",", "PartitionMethod.ColumnNames")?;
                ctx.write_plain(")")?;
            }
        }
        if self.limit > 0 {
            ctx.write_keyword(" LIMIT ")?;
            ctx.write_plainf(format_args!("{}", self.limit))?;
        }
        Ok(())
    }
}

impl Pretty for PartitionMethod {}

/// `SUBPARTITION BY method [SUBPARTITIONS n]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SubPartitionMethod {
    pub method: PartitionMethod,
    pub num: u64,
}

/// Bounds of one partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum PartitionDefinitionClause {
    /// `HASH` and `KEY` partitions carry no bounds
    None,
    /// `VALUES LESS THAN (...)`
    LessThan(Vec<Expr>),
    /// `VALUES IN (...)`; every entry is one value or one tuple, an empty
    /// list is the `DEFAULT` partition
    In(Vec<Vec<Expr>>),
    /// `SYSTEM_TIME` partition, `CURRENT` when true
    History { current: bool },
}

impl Restore for PartitionDefinitionClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            PartitionDefinitionClause::None => Ok(()),
            PartitionDefinitionClause::LessThan(exprs) => {
                ctx.write_keyword(" VALUES LESS THAN ")?;
                ctx.write_plain("(")?;
                restore_list(ctx, exprs, ", ", "PartitionDefinitionClauseLessThan.Exprs")?;
                ctx.write_plain(")")
            }
            PartitionDefinitionClause::In(values) if values.is_empty() => {
                ctx.write_keyword(" DEFAULT")
            }
            PartitionDefinitionClause::In(values) => {
                ctx.write_keyword(" VALUES IN ")?;
                ctx.write_plain("(")?;
                for (i, tuple) in values.iter().enumerate() {
                    if i != 0 {
                        ctx.write_plain(", ")?;
                    }
                    match tuple.as_slice() {
                        [value] => value
                            .restore(ctx)
                            .annotate_with(|| format!("PartitionDefinitionClauseIn.Values[{i}]"))?,
                        values => {
                            ctx.write_plain("(")?;
                            restore_list(ctx, values, ", ", "PartitionDefinitionClauseIn.Values")
                                .annotate_with(|| format!("PartitionDefinitionClauseIn.Values[{i}]"))?;
                            ctx.write_plain(")")?;
                        }
                    }
                }
                ctx.write_plain(")")
            }
            PartitionDefinitionClause::History { current } => {
                ctx.write_keyword(if *current { " CURRENT" } else { " HISTORY" })
            }
        }
    }
}

impl Pretty for PartitionDefinitionClause {}

fn restore_options(
    ctx: &mut RestoreCtx<'_>,
    options: &[TableOption],
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
pub struct SubPartitionDefinition {
    pub name: Ident,
    pub options: Vec<TableOption>,
}

impl Restore for SubPartitionDefinition {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SUBPARTITION ")?;
        ctx.write_name(self.name.as_str())?;
        restore_options(ctx, &self.options, "SubPartitionDefinition.Options")
    }
}

impl Pretty for SubPartitionDefinition {}

/// `PARTITION name [bounds] [options] [(subpartitions)]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct PartitionDefinition {
    pub name: Ident,
    pub clause: PartitionDefinitionClause,
    pub options: Vec<TableOption>,
    pub sub: Vec<SubPartitionDefinition>,
}

impl PartitionDefinition {
    pub fn new(name: impl Into<Ident>, clause: PartitionDefinitionClause) -> Self {
        PartitionDefinition {
            name: name.into(),
            clause,
            options: vec![],
            sub: vec![],
        }
    }
}

impl Restore for PartitionDefinition {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("PARTITION ")?;
        ctx.write_name(self.name.as_str())?;
        self.clause
            .restore(ctx)
            .annotate("PartitionDefinition.Clause")?;
        restore_options(ctx, &self.options, "PartitionDefinition.Options")?;
        if !self.sub.is_empty() {
            ctx.write_plain(" (")?;
            restore_list(ctx, &self.sub, ",", "PartitionDefinition.Sub")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Pretty for PartitionDefinition {}

/// `PARTITION BY ...` of `CREATE TABLE` and `ALTER TABLE`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct PartitionOptions {
    pub method: PartitionMethod,
    /// `PARTITIONS n`, only written when no definitions are listed
    pub num: u64,
    pub sub: Option<SubPartitionMethod>,
    pub definitions: Vec<PartitionDefinition>,
}

impl PartitionOptions {
    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("PARTITION BY ")?;
        self.method.restore(ctx).annotate("PartitionOptions.PartitionMethod")?;
        if self.num > 0 && self.definitions.is_empty() {
            ctx.write_keyword(" PARTITIONS ")?;
            ctx.write_plainf(format_args!("{}", self.num))?;
        }
        if let Some(sub) = &self.sub {
            ctx.write_keyword(" SUBPARTITION BY ")?;
            sub.method.restore(ctx).annotate("PartitionOptions.Sub")?;
            if sub.num > 0 {
                ctx.write_keyword(" SUBPARTITIONS ")?;
                ctx.write_plainf(format_args!("{}", sub.num))?;
            }
        }
        Ok(())
    }
}

impl Restore for PartitionOptions {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        if !self.definitions.is_empty() {
            ctx.write_plain(" (")?;
            restore_list(ctx, &self.definitions, ",", "PartitionOptions.Definitions")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Pretty for PartitionOptions {
    /// Writes one partition definition per line.
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        if !self.definitions.is_empty() {
            ctx.write_plain(" (")?;
            for (i, definition) in self.definitions.iter().enumerate() {
                if i != 0 {
                    ctx.write_plain(",")?;
                }
                ctx.write_newline(level + 1, indent, indent_char)?;
                definition
                    .pretty(ctx, level + 1, indent, indent_char)
                    .annotate_with(|| format!("PartitionOptions.Definitions[{i}]"))?;
            }
            ctx.write_newline(level, indent, indent_char)?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_columns() -> PartitionOptions {
        PartitionOptions {
            method: PartitionMethod::columns(
                PartitionType::List,
                vec![ColumnName::new("a"), ColumnName::new("b")],
            ),
            num: 0,
            sub: None,
            definitions: vec![
                PartitionDefinition::new(
                    "p0",
                    PartitionDefinitionClause::In(vec![
                        vec![Expr::value(1), Expr::value(2)],
                        vec![Expr::value(3), Expr::value(2)],
                    ]),
                ),
                PartitionDefinition::new("p1", PartitionDefinitionClause::In(vec![])),
            ],
        }
    }

    #[test]
    fn list_columns_tuples() {
        assert_eq!(
            list_columns().to_restored_sql().unwrap(),
            "PARTITION BY LIST COLUMNS (a,b) (PARTITION p0 VALUES IN ((1, 2), (3, 2)),PARTITION p1 DEFAULT)"
        );
        assert_eq!(
            list_columns().to_pretty_sql(4, " ").unwrap(),
            "PARTITION BY LIST COLUMNS (a,b) (\n    PARTITION p0 VALUES IN ((1, 2), (3, 2)),\n    PARTITION p1 DEFAULT\n)"
        );
    }

    #[test]
    fn hash_partitions_count() {
        let mut method = PartitionMethod::expr(PartitionType::Hash, Expr::column("id"));
        method.linear = true;
        let options = PartitionOptions {
            method,
            num: 4,
            sub: None,
            definitions: vec![],
        };
        assert_eq!(
            options.to_restored_sql().unwrap(),
            "PARTITION BY LINEAR HASH (id) PARTITIONS 4"
        );
    }

    #[test]
    fn range_with_maxvalue_and_subpartitions() {
        let mut p = PartitionDefinition::new(
            "pmax",
            PartitionDefinitionClause::LessThan(vec![Expr::MaxValue]),
        );
        p.options = vec![TableOption::Comment("rest".into())];
        p.sub = vec![
            SubPartitionDefinition {
                name: "s0".into(),
                options: vec![],
            },
            SubPartitionDefinition {
                name: "s1".into(),
                options: vec![],
            },
        ];
        assert_eq!(
            p.to_restored_sql().unwrap(),
            "PARTITION pmax VALUES LESS THAN (MAXVALUE) COMMENT = 'rest' (SUBPARTITION s0,SUBPARTITION s1)"
        );
    }

    #[test]
    fn system_time_interval() {
        let method = PartitionMethod {
            unit: Some(TimeUnit::Day),
            ..PartitionMethod::expr(PartitionType::SystemTime, Expr::value(1))
        };
        assert_eq!(method.to_restored_sql().unwrap(), "SYSTEM_TIME INTERVAL 1 DAY");
    }
}
