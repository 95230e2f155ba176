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
//! Account, session and administrative statements, and the error surface
//! of [`Statement`].

mod test_utils;

use matches::assert_matches;
use pretty_assertions::assert_eq;
use sqlrestore::ast::*;
use sqlrestore::format::{Restore, RestoreError};
use test_utils::*;

fn select_from(name: &str) -> Statement {
    Statement::from(select(vec![SelectItem::wildcard()], Some(table(name))))
}

#[test]
fn restore_account_statements() {
    verified(
        CreateUserStmt {
            is_role: true,
            if_not_exists: false,
            specs: vec![UserSpec::new(UserIdentity::new("analyst", ""))],
            tls_options: vec![],
            resource_options: vec![],
            password_or_lock_options: vec![],
        },
        "CREATE ROLE analyst",
    );

    let grant = verified(
        GrantStmt {
            privs: vec![PrivElem::new(PrivilegeType::Select)],
            object_type: None,
            level: GrantLevel::Global,
            users: vec![UserSpec::new(UserIdentity::new("u1", "localhost"))],
            tls_options: vec![],
            with_grant: false,
        },
        "GRANT SELECT ON *.* TO u1@localhost",
    );
    assert_eq!(grant.kind(), "GrantStmt");

    verified(
        RevokeRoleStmt {
            roles: vec![RoleIdentity::new("r1", "")],
            users: vec![UserIdentity::new("u1", "%")],
        },
        "REVOKE r1 FROM u1@`%`",
    );
    verified(
        SetRoleStmt {
            option: Some(SetRoleOption::None),
            roles: vec![],
        },
        "SET ROLE NONE",
    );
}

#[test]
fn restore_session_statements() {
    verified(
        UseStmt {
            db_name: "shop".into(),
        },
        "USE shop",
    );
    verified(
        DoStmt {
            exprs: vec![Expr::value(1), Expr::binary(Expr::value(2), BinaryOperator::Plus, Expr::value(3))],
        },
        "DO 1, 2+3",
    );
    verified(
        SetStmt {
            variables: vec![VariableAssignment::system(
                "sql_mode",
                false,
                Expr::value(""),
            )],
        },
        "SET @@SESSION.sql_mode=''",
    );
    verified(BeginStmt::default(), "START TRANSACTION");
    verified(
        CommitStmt { completion: None },
        "COMMIT",
    );
    verified(
        KillStmt {
            query: false,
            connection_id: 42,
            tidb_extension: false,
        },
        "KILL 42",
    );
    verified(ShutdownStmt, "SHUTDOWN");
}

#[test]
fn restore_nested_statements() {
    let explain = verified(
        ExplainStmt::new(select_from("t")),
        "EXPLAIN FORMAT = 'row' SELECT * FROM t",
    );
    assert_eq!(explain.to_string(), "EXPLAIN FORMAT = 'row' SELECT * FROM t");

    verified(
        CreateBindingStmt {
            global: false,
            origin: Box::new(select_from("t")),
            hinted: Box::new(select_from("t")),
        },
        "CREATE SESSION BINDING FOR SELECT * FROM t USING SELECT * FROM t",
    );
    verified(
        DropBindingStmt {
            global: true,
            origin: Box::new(select_from("t")),
            hinted: Some(Box::new(select_from("t"))),
        },
        "DROP GLOBAL BINDING FOR SELECT * FROM t USING SELECT * FROM t",
    );
}

#[test]
fn restore_show_and_admin() {
    let mut show = ShowStmt::new(ShowKind::CreateTable);
    show.table = Some(TableName::qualified("db", "t"));
    verified(show, "SHOW CREATE TABLE db.t");

    verified(
        AdminStmt::CancelDdlJobs(vec![3]),
        "ADMIN CANCEL DDL JOBS 3",
    );
    verified(
        LoadStatsStmt {
            path: "/tmp/s.json".into(),
        },
        "LOAD STATS '/tmp/s.json'",
    );
}

#[test]
fn restore_table_recovery() {
    verified(
        RecoverTableStmt {
            target: RecoverTarget::Job(42),
        },
        "RECOVER TABLE BY JOB 42",
    );
    verified(
        RecoverTableStmt {
            target: RecoverTarget::Table {
                table: TableName::qualified("db", "t"),
                num: Some(2),
            },
        },
        "RECOVER TABLE db.t 2",
    );
    verified(
        FlashBackTableStmt {
            table: TableName::new("t"),
            new_name: Some("t_restored".into()),
        },
        "FLASHBACK TABLE t TO t_restored",
    );

    let create = CreateTableStmt::new(
        TableName::new("t"),
        vec![ColumnDef::new("a", FieldType::new(TypeName::Int))],
    );
    verified(
        RepairTableStmt {
            table: TableName::new("t"),
            create: Box::new(create),
        },
        "ADMIN REPAIR TABLE t CREATE TABLE t (a INT)",
    );

    verified(
        CleanupTableLockStmt {
            tables: vec![TableName::new("t1"), TableName::qualified("db", "t2")],
        },
        "ADMIN CLEANUP TABLE LOCK t1, db.t2",
    );
    let err = Statement::from(CleanupTableLockStmt { tables: vec![] })
        .to_restored_sql()
        .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn restore_cluster_statements() {
    let mut split = SplitRegionStmt::new(
        TableName::new("t"),
        SplitOption::Between {
            lower: vec![Expr::value(0)],
            upper: vec![Expr::value(100)],
            num: 4,
        },
    );
    split.index = Some("idx".into());
    verified(split, "SPLIT TABLE t INDEX idx BETWEEN (0) AND (100) REGIONS 4");

    let mut backup = BrieStmt::new(
        BrieKind::Backup,
        BrieTarget::Tables(vec![TableName::qualified("db", "t")]),
        "local:///tmp/b",
    );
    backup.options = vec![BrieOption::Text(
        BrieTextOption::Snapshot,
        "2020-03-01 00:00:00".into(),
    )];
    let stmt = verified(
        backup,
        "BACKUP TABLE db.t TO 'local:///tmp/b' SNAPSHOT = '2020-03-01 00:00:00'",
    );
    assert_eq!(stmt.kind(), "BRIEStmt");

    verified(
        BinlogStmt {
            event: "BINLOG_EVENT".into(),
        },
        "BINLOG 'BINLOG_EVENT'",
    );
    verified(
        CreateStatisticsStmt {
            if_not_exists: false,
            name: "s".into(),
            stats_type: StatsType::Cardinality,
            table: TableName::new("t"),
            columns: vec![ColumnName::new("a")],
        },
        "CREATE STATISTICS s (CARDINALITY) ON t(a)",
    );
    verified(DropStatisticsStmt { name: "s".into() }, "DROP STATISTICS s");
    verified(
        AlterInstanceStmt {
            reload_tls: true,
            no_rollback_on_error: false,
        },
        "ALTER INSTANCE RELOAD TLS",
    );
}

#[test]
fn trace_wraps_and_indents_its_statement() {
    let trace = Statement::from(TraceStmt::new(select_from("t")));
    assert_eq!(trace.kind(), "TraceStmt");
    assert_eq!(restore(&trace), "TRACE SELECT * FROM t");
    assert_eq!(pretty(&trace, 2), "TRACE SELECT \n  *\nFROM t");
}

#[test]
fn unsupported_nodes_fail_with_a_path() {
    let create = CreateTableStmt::new(
        TableName::new("t"),
        vec![
            ColumnDef::new("id", FieldType::new(TypeName::Int)),
            ColumnDef::new("body", FieldType::new(TypeName::Text))
                .with_option(ColumnOption::NotNull)
                .with_option(ColumnOption::Fulltext),
        ],
    );
    let err = Statement::from(create).to_restored_sql().unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(
        err.breadcrumbs(),
        vec!["CreateTableStmt.Cols[1]", "ColumnDef.Options[1]"]
    );
    assert_matches!(err.root_cause(), RestoreError::Unsupported(_));
}

#[test]
fn display_does_not_panic_on_failure() {
    use std::fmt::Write;

    let stmt = Statement::from(ShowStmt::new(ShowKind::CreateView));
    let mut out = String::new();
    assert!(write!(out, "{stmt}").is_err());
}

#[test]
fn unknown_codes_are_errors() {
    assert_eq!(ShowKind::try_from(11).unwrap(), ShowKind::CreateTable);
    assert_eq!(ShowKind::Imports.code(), 43);
    assert_matches!(
        PrivilegeType::try_from(10_000),
        Err(RestoreError::UnknownVariant {
            kind: "PrivilegeType",
            code: 10_000
        })
    );
    assert_eq!(
        PrivilegeType::try_from(1 << 15).unwrap(),
        PrivilegeType::Index
    );
    assert_eq!(
        JoinType::try_from(99).unwrap_err().to_string(),
        "unknown JoinType code 99"
    );
    assert_eq!(JoinType::try_from(1).unwrap(), JoinType::Cross);
    assert!(JoinType::try_from(0).is_err());
}

#[test]
fn index_hint_codes_start_at_one() {
    let decoded: Vec<_> = (1..=3)
        .map(|code| IndexHintType::try_from(code).unwrap().as_str())
        .collect();
    assert_eq!(decoded, vec!["USE INDEX", "IGNORE INDEX", "FORCE INDEX"]);
    assert!(IndexHintType::try_from(0).is_err());
    assert!(IndexHintType::try_from(4).is_err());

    assert_eq!(IndexHintScope::try_from(1).unwrap(), IndexHintScope::Scan);
    assert_eq!(
        IndexHintScope::try_from(4).unwrap(),
        IndexHintScope::GroupBy
    );
    assert_matches!(
        IndexHintScope::try_from(5),
        Err(RestoreError::UnknownVariant {
            kind: "IndexHintScope",
            code: 5
        })
    );
}
