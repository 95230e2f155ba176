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

//! SQL Abstract Syntax Tree (AST) types
//!
//! Every node implements [`Restore`] and [`Pretty`]; with the `visitor`
//! feature every node also implements [`Visit`] and [`VisitMut`].

mod alter_table;
mod brie;
mod data_type;
mod dcl;
mod ddl;
mod dml;
mod expression;
mod functions;
mod misc;
mod operator;
mod partition;
mod query;
mod statement;
mod stats;
mod value;
#[cfg(feature = "visitor")]
mod visitor;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

pub use self::alter_table::*;
pub use self::brie::*;
pub use self::data_type::{FieldType, TypeName, CHARSET_BINARY};
pub use self::dcl::*;
pub use self::ddl::*;
pub use self::dml::*;
pub use self::expression::*;
pub use self::functions::*;
pub use self::misc::*;
pub use self::operator::{BinaryOperator, UnaryOperator};
pub use self::partition::*;
pub use self::query::*;
pub use self::statement::Statement;
pub use self::stats::*;
pub use self::value::{Value, DEFAULT_CHARSET};
#[cfg(feature = "visitor")]
pub use self::visitor::{
    visit_columns, visit_expressions, visit_expressions_mut, visit_relations,
    visit_relations_mut, visit_statements, visit_statements_mut, Enter, Node, NodeMut, Visit,
    VisitMut, Visitor, VisitorMut,
};

use crate::format::{Annotate, Pretty, Restore, RestoreCtx, RestoreError};

/// An identifier, keeping the text as written and a lowercased form used
/// for comparisons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Ident {
    original: String,
    normalized: String,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        let original = value.into();
        let normalized = original.to_lowercase();
        Ident {
            original,
            normalized,
        }
    }

    /// The identifier as written.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The lowercased identifier.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Compares two identifiers ignoring case.
    pub fn matches(&self, other: &Ident) -> bool {
        self.normalized == other.normalized
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::new(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Ident::new(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Restore for Ident {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_name(&self.original)
    }
}

impl Pretty for Ident {}

/// A table reference such as `db.t PARTITION (p0) USE INDEX (idx)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "TableName"))]
pub struct TableName {
    pub schema: Option<Ident>,
    pub name: Ident,
    pub partition_names: Vec<Ident>,
    pub index_hints: Vec<IndexHint>,
}

impl TableName {
    pub fn new(name: impl Into<Ident>) -> Self {
        TableName {
            schema: None,
            name: name.into(),
            partition_names: vec![],
            index_hints: vec![],
        }
    }

    pub fn qualified(schema: impl Into<Ident>, name: impl Into<Ident>) -> Self {
        TableName {
            schema: Some(schema.into()),
            ..TableName::new(name)
        }
    }

    pub(crate) fn restore_name(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(schema) = &self.schema {
            ctx.write_name(schema.as_str())?;
            ctx.write_plain(".")?;
        }
        ctx.write_name(self.name.as_str())
    }

    pub(crate) fn restore_partitions(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if !self.partition_names.is_empty() {
            ctx.write_keyword(" PARTITION")?;
            ctx.write_plain("(")?;
            restore_names(ctx, &self.partition_names, ", ")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }

    pub(crate) fn restore_index_hints(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        for (i, hint) in self.index_hints.iter().enumerate() {
            ctx.write_plain(" ")?;
            hint.restore(ctx)
                .annotate_with(|| format!("TableName.IndexHints[{i}]"))?;
        }
        Ok(())
    }
}

impl Restore for TableName {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_name(ctx)?;
        self.restore_partitions(ctx)?;
        self.restore_index_hints(ctx)
    }
}

impl Pretty for TableName {}

/// A possibly qualified column reference, e.g. `db.t.c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "ColumnName"))]
pub struct ColumnName {
    pub schema: Option<Ident>,
    pub table: Option<Ident>,
    pub name: Ident,
}

impl ColumnName {
    pub fn new(name: impl Into<Ident>) -> Self {
        ColumnName {
            schema: None,
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<Ident>, name: impl Into<Ident>) -> Self {
        ColumnName {
            schema: None,
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for ColumnName {
    fn from(name: &str) -> Self {
        ColumnName::new(name)
    }
}

impl Restore for ColumnName {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        for qualifier in [&self.schema, &self.table].into_iter().flatten() {
            ctx.write_name(qualifier.as_str())?;
            ctx.write_plain(".")?;
        }
        ctx.write_name(self.name.as_str())
    }
}

impl Pretty for ColumnName {}

/// Writes identifiers joined by `sep`.
pub(crate) fn restore_names(
    ctx: &mut RestoreCtx<'_>,
    names: &[Ident],
    sep: &str,
) -> Result<(), RestoreError> {
    for (i, name) in names.iter().enumerate() {
        if i != 0 {
            ctx.write_plain(sep)?;
        }
        ctx.write_name(name.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_keeps_both_forms() {
        let ident = Ident::new("MyTable");
        assert_eq!(ident.as_str(), "MyTable");
        assert_eq!(ident.normalized(), "mytable");
        assert!(ident.matches(&Ident::new("MYTABLE")));
        assert_ne!(ident, Ident::new("MYTABLE"));
    }

    #[test]
    fn restore_qualified_names() {
        let column = ColumnName {
            schema: Some("db".into()),
            table: Some("t".into()),
            name: "select".into(),
        };
        assert_eq!(column.to_restored_sql().unwrap(), "db.t.`select`");

        let mut table = TableName::qualified("db", "t1");
        table.partition_names = vec!["p0".into(), "p1".into()];
        table.index_hints = vec![IndexHint {
            hint_type: IndexHintType::Use,
            index_names: vec!["idx_a".into()],
            scope: IndexHintScope::Join,
        }];
        assert_eq!(
            table.to_restored_sql().unwrap(),
            "db.t1 PARTITION(p0, p1) USE INDEX FOR JOIN (idx_a)"
        );
    }
}
