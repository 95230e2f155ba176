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
//! Indented rendering. Clause keywords start a line at the statement's
//! level and their bodies are indented one level deeper.

mod test_utils;

use pretty_assertions::assert_eq;
use sqlrestore::ast::*;
use sqlrestore::format::{Pretty, RestoreFlags, RestoreOptions};
use test_utils::*;

#[test]
fn test_pretty_print_select() {
    let mut stmt = select(exprs(vec![col("a"), col("b")]), Some(table("my_table")));
    stmt.selection = Some(and(
        eq(col("x"), Expr::value(1)),
        eq(col("y"), Expr::value(2)),
    ));
    assert_eq!(
        pretty(&Statement::from(stmt), 2),
        "SELECT \n  a,b\nFROM my_table\nWHERE x=1 AND y=2"
    );
}

#[test]
fn test_pretty_print_join() {
    let join = Join::new(
        TableSource::table(TableName::new("t1")),
        JoinType::Left,
        TableSource::table(TableName::new("t2")),
    )
    .on(eq(qcol("t1", "id"), qcol("t2", "id")));
    let mut stmt = select(vec![SelectItem::wildcard()], Some(join));
    stmt.selection = Some(Expr::binary(qcol("t1", "a"), BinaryOperator::Gt, Expr::value(1)));
    assert_eq!(
        pretty(&Statement::from(stmt), 2),
        "SELECT \n  *\nFROM t1\nLEFT JOIN t2\n  ON t1.id=t2.id\nWHERE t1.a>1"
    );
}

#[test]
fn test_pretty_print_subquery() {
    let inner = select(exprs(vec![col("a")]), Some(table("t")));
    let stmt = select(
        vec![SelectItem::wildcard()],
        Some(Join::single(TableSource::derived(inner, "sub"))),
    );
    assert_eq!(
        pretty(&Statement::from(stmt), 2),
        "SELECT \n  *\nFROM (\n  SELECT \n    a\n  FROM t\n) AS sub"
    );
}

#[test]
fn test_pretty_print_union() {
    let union = UnionStmt {
        selects: vec![
            select(exprs(vec![col("a")]), Some(table("t1"))),
            select(exprs(vec![col("a")]), Some(table("t2"))),
        ],
        order_by: None,
        limit: None,
    };
    assert_eq!(
        pretty(&Statement::from(union), 2),
        "SELECT \n  a\nFROM t1\nUNION ALL \nSELECT \n  a\nFROM t2"
    );
}

#[test]
fn test_pretty_print_insert_rows_on_own_lines() {
    let insert = InsertStmt::values(
        TableName::new("t1"),
        vec![vec![Expr::value(1), Expr::value(2)], vec![Expr::value(1)]],
    );
    assert_eq!(
        pretty(&Statement::from(insert), 4),
        "INSERT INTO t1 VALUES\n(1,2),\n(1)"
    );

    let mut insert = InsertStmt::values(TableName::new("t"), vec![]);
    insert.columns = vec![ColumnName::new("a")];
    insert.source = InsertSource::Select(Box::new(Query::from(select(
        exprs(vec![col("a")]),
        Some(table("s")),
    ))));
    assert_eq!(
        pretty(&Statement::from(insert), 2),
        "INSERT INTO t (a)\nSELECT \n  a\nFROM s"
    );
}

#[test]
fn test_pretty_print_partitions_one_per_line() {
    let mut create = CreateTableStmt::new(
        TableName::new("t"),
        vec![
            ColumnDef::new("a", FieldType::new(TypeName::Int)),
            ColumnDef::new("b", FieldType::new(TypeName::Int)),
        ],
    );
    create.partition = Some(PartitionOptions {
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
            PartitionDefinition::new(
                "p1",
                PartitionDefinitionClause::In(vec![vec![Expr::value(4), Expr::value(4)]]),
            ),
        ],
    });
    assert_eq!(
        pretty(&Statement::from(create), 4),
        r#"
CREATE TABLE t (
    a INT,
    b INT
) PARTITION BY LIST COLUMNS (a,b) (
    PARTITION p0 VALUES IN ((1, 2), (3, 2)),
    PARTITION p1 VALUES IN ((4, 4))
)
"#
        .trim()
    );
}

#[test]
fn test_pretty_print_view_and_tabs() {
    let view = CreateViewStmt {
        or_replace: false,
        algorithm: ViewAlgorithm::Undefined,
        definer: UserIdentity::current_user(),
        security: ViewSecurity::Definer,
        view_name: TableName::new("v"),
        columns: vec![],
        select: Box::new(Query::from(select(exprs(vec![col("a")]), Some(table("t"))))),
        check_option: ViewCheckOption::Cascaded,
    };
    let stmt = Statement::from(view);
    assert_eq!(
        stmt.to_pretty_sql(1, "\t").unwrap(),
        "CREATE ALGORITHM = UNDEFINED DEFINER = CURRENT_USER SQL SECURITY DEFINER VIEW v AS \
         \nSELECT \n\ta\nFROM t"
    );
}

#[test]
fn test_alternate_display_pretty_prints() {
    let update = UpdateStmt {
        hints: vec![],
        priority: None,
        ignore: false,
        table_refs: table("t"),
        assignments: vec![Assignment::new("a", Expr::value(1))],
        selection: None,
        order_by: None,
        limit: None,
    };
    let stmt = Statement::from(update);
    assert_eq!(format!("{stmt}"), "UPDATE t SET a=1");
    assert_eq!(format!("{stmt:#}"), "UPDATE t\nSET\n    a=1");
}

#[test]
fn test_pretty_and_restore_agree_on_leaves() {
    let exprs_only = select(
        exprs(vec![
            Expr::value("x"),
            Expr::Function(FuncCall::new("lower", vec![col("b")])),
        ]),
        None,
    );
    let stmt = Statement::from(exprs_only);
    let flat = restore(&stmt);
    let indented = pretty(&stmt, 2);
    assert_eq!(flat, "SELECT 'x', LOWER(b)");
    assert_eq!(indented, "SELECT \n  'x',LOWER(b)");
    let squeeze = |s: &str| s.split_whitespace().collect::<String>();
    assert_eq!(squeeze(&flat), squeeze(&indented));
}

#[test]
fn test_pretty_print_with_flags() {
    let mut stmt = select(exprs(vec![col("a")]), Some(table("order")));
    stmt.selection = Some(eq(col("b"), Expr::value("x")));
    let stmt = Statement::from(stmt);

    let options =
        RestoreOptions::new().with_flags(RestoreFlags::DEFAULT | RestoreFlags::NAME_BACK_QUOTES);
    assert_eq!(
        stmt.to_pretty_sql_with(2, " ", &options).unwrap(),
        "SELECT \n  `a`\nFROM `order`\nWHERE `b`='x'"
    );
    assert_eq!(
        stmt.to_pretty_sql(2, " ").unwrap(),
        "SELECT \n  a\nFROM `order`\nWHERE b='x'"
    );

    let shallow = RestoreOptions::new().with_max_nesting_depth(1);
    assert!(stmt.to_pretty_sql_with(2, " ", &shallow).is_err());
}
