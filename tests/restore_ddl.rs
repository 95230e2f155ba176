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
//! Flat rendering of schema statements.

mod test_utils;

use pretty_assertions::assert_eq;
use sqlrestore::ast::*;
use sqlrestore::format::Restore;
use test_utils::*;

fn int_column(name: &str) -> ColumnDef {
    ColumnDef::new(name, FieldType::new(TypeName::Int))
}

fn list_columns_partitions() -> PartitionOptions {
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
            PartitionDefinition::new(
                "p1",
                PartitionDefinitionClause::In(vec![vec![Expr::value(4), Expr::value(4)]]),
            ),
        ],
    }
}

#[test]
fn restore_create_table_with_list_columns_partitions() {
    let mut create = CreateTableStmt::new(
        TableName::new("t"),
        vec![int_column("a"), int_column("b")],
    );
    create.partition = Some(list_columns_partitions());
    verified(
        create,
        "CREATE TABLE t (a INT, b INT) PARTITION BY LIST COLUMNS (a,b) \
         (PARTITION p0 VALUES IN ((1, 2), (3, 2)),PARTITION p1 VALUES IN ((4, 4)))",
    );
}

#[test]
fn restore_create_table_like_and_as_select() {
    let mut like = CreateTableStmt::new(TableName::new("t2"), vec![]);
    like.if_not_exists = true;
    like.refer_table = Some(TableName::qualified("db", "t1"));
    verified(like, "CREATE TABLE IF NOT EXISTS t2 LIKE db.t1");

    let mut as_select = CreateTableStmt::new(TableName::new("t3"), vec![]);
    as_select.temporary = true;
    as_select.on_duplicate = Some(OnDuplicateKeyHandling::Replace);
    as_select.select = Some(Box::new(Query::from(select(
        vec![SelectItem::wildcard()],
        Some(table("t1")),
    ))));
    verified(
        as_select,
        "CREATE TEMPORARY TABLE t3 REPLACE AS SELECT * FROM t1",
    );
}

#[test]
fn restore_alter_table_separators() {
    let stmt = AlterTableStmt {
        table: TableName::new("t"),
        specs: vec![
            AlterTableSpec::AddColumns {
                if_not_exists: false,
                columns: vec![int_column("c"), int_column("d")],
                constraints: vec![],
                position: None,
            },
            AlterTableSpec::AddConstraint(
                Constraint::new(ConstraintKind::Index, vec![IndexPartSpecification::column("c")])
                    .named("idx_c"),
            ),
            AlterTableSpec::DropColumn {
                if_exists: true,
                column: ColumnName::new("e"),
            },
            AlterTableSpec::AddPartitions {
                if_not_exists: false,
                no_write_to_binlog: false,
                definitions: vec![PartitionDefinition::new(
                    "p9",
                    PartitionDefinitionClause::LessThan(vec![Expr::MaxValue]),
                )],
                num: 0,
            },
            AlterTableSpec::RemovePartitioning,
        ],
    };
    verified(
        stmt,
        "ALTER TABLE t ADD COLUMN (c INT, d INT), ADD INDEX idx_c(c), DROP COLUMN IF EXISTS e, \
         ADD PARTITION (PARTITION p9 VALUES LESS THAN (MAXVALUE)) REMOVE PARTITIONING",
    );
}

#[test]
fn restore_alter_table_failure_names_the_spec() {
    let stmt = Statement::from(AlterTableStmt {
        table: TableName::new("t"),
        specs: vec![
            AlterTableSpec::DropPrimaryKey,
            AlterTableSpec::Options(vec![]),
        ],
    });
    let err = stmt.to_restored_sql().unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.breadcrumbs(), vec!["AlterTableStmt.Specs[1]"]);
}

#[test]
fn restore_create_view() {
    let view = CreateViewStmt {
        or_replace: true,
        algorithm: ViewAlgorithm::Merge,
        definer: UserIdentity::current_user(),
        security: ViewSecurity::Invoker,
        view_name: TableName::new("v"),
        columns: vec!["x".into(), "y".into()],
        select: Box::new(Query::from(select(
            exprs(vec![col("a"), col("b")]),
            Some(table("t")),
        ))),
        check_option: ViewCheckOption::Local,
    };
    verified(
        view,
        "CREATE OR REPLACE ALGORITHM = MERGE DEFINER = CURRENT_USER SQL SECURITY INVOKER \
         VIEW v (x,y) AS SELECT a, b FROM t WITH LOCAL CHECK OPTION",
    );
}

#[test]
fn restore_table_maintenance() {
    verified(
        RenameTableStmt {
            pairs: vec![
                TableToTable {
                    old: TableName::new("a"),
                    new: TableName::new("b"),
                },
                TableToTable {
                    old: TableName::new("c"),
                    new: TableName::qualified("db", "d"),
                },
            ],
        },
        "RENAME TABLE a TO b, c TO db.d",
    );
    verified(
        TruncateTableStmt {
            table: TableName::new("t"),
        },
        "TRUNCATE TABLE t",
    );
    verified(
        LockTablesStmt {
            locks: vec![
                TableLock {
                    table: TableName::new("a"),
                    lock: TableLockType::Read,
                },
                TableLock {
                    table: TableName::new("b"),
                    lock: TableLockType::WriteLocal,
                },
            ],
        },
        "LOCK TABLES a READ, b WRITE LOCAL",
    );
    verified(UnlockTablesStmt, "UNLOCK TABLES");
    verified(
        DropIndexStmt {
            if_exists: true,
            index_name: "idx".into(),
            table: TableName::new("t"),
            lock_alg: None,
        },
        "DROP INDEX IF EXISTS idx ON t",
    );
    verified(
        DropDatabaseStmt {
            if_exists: false,
            name: "shop".into(),
        },
        "DROP DATABASE shop",
    );
}

#[test]
fn restore_statistics_statements() {
    let mut analyze = AnalyzeTableStmt::new(vec![TableName::new("t")]);
    analyze.options = vec![AnalyzeOpt {
        kind: AnalyzeOptionType::NumTopN,
        value: 20,
    }];
    verified(analyze, "ANALYZE TABLE t WITH 20 TOPN");
    verified(
        DropStatsStmt {
            table: TableName::new("t"),
        },
        "DROP STATS t",
    );
}
