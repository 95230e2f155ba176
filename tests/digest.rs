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

#![warn(clippy::all)]

mod test_utils;

use pretty_assertions::assert_eq;
use sqlrestore::ast::*;
use sqlrestore::digest::{digest, normalize};
use test_utils::*;

fn orders(status: &str, limit: i64) -> Statement {
    let mut stmt = select(vec![SelectItem::wildcard()], Some(table("Orders")));
    stmt.selection = Some(eq(col("Status"), Expr::value(status)));
    stmt.limit = Some(Limit {
        count: Expr::value(limit),
        offset: None,
    });
    Statement::from(stmt)
}

#[test]
fn literals_and_case_do_not_change_the_digest() {
    let a = orders("new", 10);
    let b = orders("shipped", 500);
    assert_eq!(
        normalize(&a).unwrap(),
        "select * from `orders` where `status` = ? limit ?"
    );
    assert_eq!(digest(&a).unwrap(), digest(&b).unwrap());

    let mut lower = select(vec![SelectItem::wildcard()], Some(table("orders")));
    lower.selection = Some(eq(col("status"), Expr::value("x")));
    lower.limit = Some(Limit {
        count: Expr::value(1),
        offset: None,
    });
    assert_eq!(digest(&Statement::from(lower)).unwrap(), digest(&a).unwrap());
}

#[test]
fn structure_changes_the_digest() {
    let base = orders("new", 10);
    let mut other_table = select(vec![SelectItem::wildcard()], Some(table("Invoices")));
    other_table.selection = Some(eq(col("Status"), Expr::value("new")));
    other_table.limit = Some(Limit {
        count: Expr::value(10),
        offset: None,
    });
    assert_ne!(
        digest(&base).unwrap().hash,
        digest(&Statement::from(other_table)).unwrap().hash
    );
}

#[test]
fn mixed_lists_keep_their_columns() {
    let mut stmt = select(exprs(vec![col("a")]), Some(table("t")));
    stmt.selection = Some(and(
        Expr::InList(InList {
            expr: Box::new(col("id")),
            list: vec![Expr::value(1), col("b")],
            negated: true,
        }),
        Expr::IsNull {
            expr: Box::new(col("c")),
            negated: false,
        },
    ));
    assert_eq!(
        normalize(&Statement::from(stmt)).unwrap(),
        "select `a` from `t` where `id` not in (?,`b`) and `c` is null"
    );
}

#[test]
fn subqueries_are_normalized_too() {
    let mut inner = select(exprs(vec![col("id")]), Some(table("u")));
    inner.selection = Some(eq(col("age"), Expr::value(30)));
    let stmt = select(
        vec![SelectItem::wildcard()],
        Some(Join::single(TableSource::derived(inner, "d"))),
    );
    assert_eq!(
        normalize(&Statement::from(stmt)).unwrap(),
        "select * from (select `id` from `u` where `age` = ?) as `d`"
    );
}

#[test]
fn digest_reports_restore_errors() {
    let broken = Statement::from(select(
        exprs(vec![Expr::Function(FuncCall::new("extract", vec![]))]),
        None,
    ));
    let err = digest(&broken).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.breadcrumbs(), vec!["SelectStmt.Fields[0]", "SelectField.Expr"]);
}
