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
//! Flat rendering of queries and data manipulation statements.

mod test_utils;

use pretty_assertions::assert_eq;
use sqlrestore::ast::*;
use sqlrestore::format::{Pretty, Restore, RestoreError, RestoreFlags, RestoreOptions};
use test_utils::*;

#[test]
fn restore_simple_select() {
    verified(
        select(
            vec![SelectItem::wildcard()],
            Some(table("b")),
        ),
        "SELECT * FROM b",
    );

    let mut stmt = select(vec![SelectItem::wildcard()], Some(table("b")));
    stmt.selection = Some(eq(col("id"), Expr::value(1)));
    verified(stmt, "SELECT * FROM b WHERE id=1");
}

#[test]
fn restore_select_clauses_in_order() {
    let mut stmt = select(exprs(vec![col("a"), qcol("t", "b")]), Some(table("t")));
    stmt.distinct = true;
    stmt.selection = Some(and(
        eq(col("a"), Expr::value("it's")),
        Expr::binary(col("b"), BinaryOperator::Gt, Expr::value(2)),
    ));
    stmt.group_by = Some(GroupBy {
        items: vec![ByItem::new(col("a"))],
    });
    stmt.having = Some(Expr::IsNull {
        expr: Box::new(col("b")),
        negated: true,
    });
    stmt.order_by = Some(OrderBy {
        items: vec![ByItem::desc(col("a")), ByItem::new(col("b"))],
    });
    stmt.limit = Some(Limit {
        count: Expr::value(10),
        offset: Some(Expr::value(5)),
    });
    stmt.lock = Some(SelectLock::ForUpdate);
    verified(
        stmt,
        "SELECT DISTINCT a, t.b FROM t WHERE a='it''s' AND b>2 GROUP BY a \
         HAVING b IS NOT NULL ORDER BY a DESC, b LIMIT 5,10 FOR UPDATE",
    );
}

#[test]
fn restore_union() {
    let first = select(exprs(vec![col("a")]), Some(table("t1")));
    let mut second = select(exprs(vec![col("a")]), Some(table("t2")));
    second.after_union_distinct = true;
    let mut third = select(exprs(vec![col("a")]), Some(table("t3")));
    third.in_braces = true;

    verified(
        UnionStmt {
            selects: vec![first, second, third],
            order_by: Some(OrderBy {
                items: vec![ByItem::new(col("a"))],
            }),
            limit: Some(Limit {
                count: Expr::value(10),
                offset: None,
            }),
        },
        "SELECT a FROM t1 UNION SELECT a FROM t2 UNION ALL (SELECT a FROM t3) ORDER BY a LIMIT 10",
    );
}

#[test]
fn restore_subqueries() {
    let inner = Query::from(select(exprs(vec![col("id")]), Some(table("u"))));
    let mut stmt = select(vec![SelectItem::wildcard()], Some(table("t")));
    stmt.selection = Some(and(
        Expr::InSubquery(InSubquery {
            expr: Box::new(col("uid")),
            subquery: Box::new(inner.clone()),
            negated: true,
        }),
        Expr::Exists(Exists {
            subquery: Box::new(Expr::Subquery(Box::new(inner.clone()))),
            negated: false,
        }),
    ));
    verified(
        stmt,
        "SELECT * FROM t WHERE uid NOT IN (SELECT id FROM u) AND EXISTS (SELECT id FROM u)",
    );

    let derived = TableSource::derived(inner, "d");
    verified(
        select(vec![SelectItem::wildcard()], Some(Join::single(derived))),
        "SELECT * FROM (SELECT id FROM u) AS d",
    );
}

#[test]
fn restore_joins() {
    let join = Join::new(
        Join::new(
            TableSource::table(TableName::new("a")),
            JoinType::Cross,
            TableSource::table(TableName::new("b")),
        ),
        JoinType::Left,
        TableSource::table(TableName::new("c")).with_alias("x"),
    )
    .on(eq(qcol("a", "id"), qcol("x", "id")));
    verified(
        select(vec![SelectItem::wildcard()], Some(join)),
        "SELECT * FROM (a JOIN b) LEFT JOIN c AS x ON a.id=x.id",
    );
}

#[test]
fn restore_group_concat_in_canonical_order() {
    let group_concat = Expr::Aggregate(AggregateFunc {
        name: "GROUP_CONCAT".into(),
        args: vec![col("v"), Expr::value(";")],
        distinct: true,
        order_by: Some(OrderBy {
            items: vec![ByItem::new(col("v"))],
        }),
    });
    verified(
        select(exprs(vec![group_concat]), Some(table("t"))),
        "SELECT GROUP_CONCAT(DISTINCT v ORDER BY v SEPARATOR ';') FROM t",
    );
}

#[test]
fn restore_insert_rows_in_order() {
    verified(
        InsertStmt::values(
            TableName::new("t1"),
            vec![vec![Expr::value(1), Expr::value(2)], vec![Expr::value(1)]],
        ),
        "INSERT INTO t1 VALUES (1,2),(1)",
    );

    let mut insert = InsertStmt::values(TableName::new("t"), vec![]);
    insert.is_replace = true;
    insert.columns = vec![ColumnName::new("a")];
    insert.source = InsertSource::Select(Box::new(Query::from(select(
        exprs(vec![col("a")]),
        Some(table("s")),
    ))));
    verified(insert, "REPLACE INTO t (a) SELECT a FROM s");
}

#[test]
fn insert_without_rows_is_malformed() {
    let empty_values = Statement::from(InsertStmt::values(TableName::new("t"), vec![]));
    let err = empty_values.to_restored_sql().unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.root_cause().to_string(), "malformed tree: INSERT without rows");
    assert!(empty_values.to_pretty_sql(4, " ").unwrap_err().is_malformed());

    let mut empty_set = InsertStmt::values(TableName::new("t"), vec![]);
    empty_set.source = InsertSource::Set(vec![]);
    let empty_set = Statement::from(empty_set);
    assert!(empty_set.to_restored_sql().unwrap_err().is_malformed());
    assert!(empty_set.to_pretty_sql(4, " ").unwrap_err().is_malformed());

    let mut one = InsertStmt::values(TableName::new("t"), vec![]);
    one.source = InsertSource::Set(vec![Assignment::new("a", Expr::value(1))]);
    verified(one, "INSERT INTO t SET a=1");
}

#[test]
fn restore_update_and_delete() {
    let update = UpdateStmt {
        hints: vec![],
        priority: Some(Priority::LowPriority),
        ignore: true,
        table_refs: table("t"),
        assignments: vec![
            Assignment::new("a", Expr::binary(col("a"), BinaryOperator::Plus, Expr::value(1))),
        ],
        selection: None,
        order_by: Some(OrderBy {
            items: vec![ByItem::new(col("id"))],
        }),
        limit: Some(Limit {
            count: Expr::value(1),
            offset: None,
        }),
    };
    verified(
        update,
        "UPDATE LOW_PRIORITY IGNORE t SET a=a+1 ORDER BY id LIMIT 1",
    );

    let delete = DeleteStmt {
        hints: vec![],
        priority: None,
        quick: false,
        ignore: false,
        tables: DeleteTables::Single,
        table_refs: table("t"),
        selection: Some(eq(col("id"), Expr::value(3))),
        order_by: None,
        limit: None,
    };
    verified(delete, "DELETE FROM t WHERE id=3");
}

#[test]
fn flags_control_casing_and_quoting() {
    let mut stmt = select(exprs(vec![col("Name")]), Some(table("Users")));
    stmt.selection = Some(eq(col("note"), Expr::value("a\\b")));
    let stmt = Statement::from(stmt);

    assert_eq!(restore(&stmt), r"SELECT Name FROM Users WHERE note='a\\b'");

    let options = RestoreOptions::new().with_flags(
        RestoreFlags::KEYWORD_LOWERCASE
            | RestoreFlags::NAME_UPPERCASE
            | RestoreFlags::NAME_DOUBLE_QUOTES
            | RestoreFlags::STRING_DOUBLE_QUOTES
            | RestoreFlags::SPACES_AROUND_BINARY_OPERATION,
    );
    assert_eq!(
        restore_with(&stmt, &options),
        r#"select "NAME" from "USERS" where "NOTE" = "a\b""#
    );
}

#[test]
fn reserved_names_are_quoted() {
    verified(
        select(exprs(vec![col("select"), col("my col")]), Some(table("t"))),
        "SELECT `select`, `my col` FROM t",
    );
}

#[test]
fn errors_carry_breadcrumbs() {
    let broken = Expr::Function(FuncCall::new("position", vec![Expr::value("a")]));
    let stmt = Statement::from(select(exprs(vec![col("a"), broken]), Some(table("t"))));
    let err = stmt.to_restored_sql().unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.breadcrumbs()[0], "SelectStmt.Fields[1]");
    assert!(err.to_string().starts_with("while restoring SelectStmt.Fields[1]: "));
}

#[test]
fn nesting_depth_is_bounded() {
    let mut expr = Expr::value(1);
    for _ in 0..300 {
        expr = Expr::nested(expr);
    }
    let stmt = Statement::from(select(exprs(vec![expr]), None));

    let err = stmt.to_restored_sql().unwrap_err();
    assert_eq!(
        err.root_cause(),
        &RestoreError::NestingTooDeep { limit: 256 }
    );

    let options = RestoreOptions::new().with_max_nesting_depth(1024);
    let sql = restore_with(&stmt, &options);
    assert!(sql.starts_with("SELECT (((("));
    assert!(sql.ends_with("1))))"));
}

#[test]
fn long_or_chains_count_every_operator() {
    let chain = |terms: usize| {
        let mut expr = eq(col("id"), Expr::value(0));
        for i in 1..terms {
            expr = Expr::binary(expr, BinaryOperator::Or, eq(col("id"), Expr::value(i as i64)));
        }
        let mut stmt = select(vec![SelectItem::wildcard()], Some(table("t")));
        stmt.selection = Some(expr);
        Statement::from(stmt)
    };

    let sql = restore(&chain(200));
    assert!(sql.starts_with("SELECT * FROM t WHERE id=0 OR id=1 OR "));
    assert!(sql.ends_with(" OR id=199"));

    let long = chain(300);
    assert_eq!(
        long.to_restored_sql().unwrap_err().root_cause(),
        &RestoreError::NestingTooDeep { limit: 256 }
    );
    let options = RestoreOptions::new().with_max_nesting_depth(1024);
    assert!(restore_with(&long, &options).ends_with(" OR id=299"));
}
