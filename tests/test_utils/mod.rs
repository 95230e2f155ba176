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

#![allow(dead_code)]

//! Tree builders shared by the integration tests. There is no parser in
//! this crate, so every test spells out the tree it renders.

use sqlrestore::ast::*;
use sqlrestore::format::{Pretty, Restore, RestoreOptions};

/// `FROM name`
pub fn table(name: &str) -> Join {
    Join::single(TableSource::table(TableName::new(name)))
}

pub fn col(name: &str) -> Expr {
    Expr::column(name)
}

pub fn qcol(table: &str, name: &str) -> Expr {
    Expr::Column(ColumnName::qualified(table, name))
}

pub fn eq(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOperator::Eq, right)
}

pub fn and(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOperator::And, right)
}

/// `SELECT <fields> [FROM <from>]`
pub fn select(fields: Vec<SelectItem>, from: Option<Join>) -> SelectStmt {
    SelectStmt {
        fields,
        from,
        ..Default::default()
    }
}

pub fn exprs(items: Vec<Expr>) -> Vec<SelectItem> {
    items.into_iter().map(SelectItem::expr).collect()
}

/// Restores `node` with the default flags, panicking with the breadcrumbs
/// on failure.
pub fn restore<T: Restore>(node: &T) -> String {
    match node.to_restored_sql() {
        Ok(sql) => sql,
        Err(e) => panic!("restore failed: {e} (at {:?})", e.breadcrumbs()),
    }
}

pub fn restore_with<T: Restore>(node: &T, options: &RestoreOptions) -> String {
    match node.to_restored_sql_with(options) {
        Ok(sql) => sql,
        Err(e) => panic!("restore failed: {e} (at {:?})", e.breadcrumbs()),
    }
}

pub fn pretty<T: Pretty>(node: &T, indent: usize) -> String {
    match node.to_pretty_sql(indent, " ") {
        Ok(sql) => sql,
        Err(e) => panic!("pretty failed: {e} (at {:?})", e.breadcrumbs()),
    }
}

/// Asserts that `stmt` restores to `expected`, and that doing it twice gives
/// the same bytes.
pub fn verified(stmt: impl Into<Statement>, expected: &str) -> Statement {
    let stmt = stmt.into();
    let first = restore(&stmt);
    pretty_assertions::assert_eq!(first, expected);
    pretty_assertions::assert_eq!(restore(&stmt), first);
    stmt
}
