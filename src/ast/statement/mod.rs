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

use super::*;
use crate::format::{display, Pretty, Restore, RestoreCtx, RestoreError};

/// Declares [`Statement`] with one variant per statement node, the
/// dispatching `Restore`/`Pretty` impls and a `From` conversion for every
/// node type.
macro_rules! statements {
    ($($(#[$doc:meta])* $variant:ident($node:ty) => $name:literal,)*) => {
        /// A top-level statement (SELECT, INSERT, CREATE, etc.)
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(
            feature = "visitor",
            derive(Visit, VisitMut),
            visit(with = "Statement")
        )]
        pub enum Statement {
            $($(#[$doc])* $variant($node),)*
        }

        impl Statement {
            /// Name of the statement node, e.g. `InsertStmt`.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Statement::$variant(_) => $name,)*
                }
            }
        }

        impl Restore for Statement {
            #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
            fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
                log::trace!("restoring {}", self.kind());
                match self {
                    $(Statement::$variant(stmt) => stmt.restore(ctx),)*
                }
            }
        }

        impl Pretty for Statement {
            #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
            fn pretty(
                &self,
                ctx: &mut RestoreCtx<'_>,
                level: usize,
                indent: usize,
                indent_char: &str,
            ) -> Result<(), RestoreError> {
                log::trace!("pretty printing {}", self.kind());
                match self {
                    $(Statement::$variant(stmt) => stmt.pretty(ctx, level, indent, indent_char),)*
                }
            }
        }

        $(
            impl From<$node> for Statement {
                fn from(stmt: $node) -> Self {
                    Statement::$variant(stmt)
                }
            }
        )*
    };
}

statements! {
    /// `SELECT` or `UNION`
    Query(Query) => "SelectStmt",
    Insert(InsertStmt) => "InsertStmt",
    Delete(DeleteStmt) => "DeleteStmt",
    Update(UpdateStmt) => "UpdateStmt",
    LoadData(LoadDataStmt) => "LoadDataStmt",
    SplitRegion(SplitRegionStmt) => "SplitRegionStmt",

    CreateDatabase(CreateDatabaseStmt) => "CreateDatabaseStmt",
    AlterDatabase(AlterDatabaseStmt) => "AlterDatabaseStmt",
    DropDatabase(DropDatabaseStmt) => "DropDatabaseStmt",
    CreateTable(CreateTableStmt) => "CreateTableStmt",
    AlterTable(AlterTableStmt) => "AlterTableStmt",
    /// `DROP TABLE` and `DROP VIEW`
    DropTable(DropTableStmt) => "DropTableStmt",
    RenameTable(RenameTableStmt) => "RenameTableStmt",
    TruncateTable(TruncateTableStmt) => "TruncateTableStmt",
    CreateView(CreateViewStmt) => "CreateViewStmt",
    CreateIndex(CreateIndexStmt) => "CreateIndexStmt",
    DropIndex(DropIndexStmt) => "DropIndexStmt",
    CreateSequence(CreateSequenceStmt) => "CreateSequenceStmt",
    DropSequence(DropSequenceStmt) => "DropSequenceStmt",
    LockTables(LockTablesStmt) => "LockTablesStmt",
    UnlockTables(UnlockTablesStmt) => "UnlockTablesStmt",
    CleanupTableLock(CleanupTableLockStmt) => "CleanupTableLockStmt",
    RecoverTable(RecoverTableStmt) => "RecoverTableStmt",
    FlashBackTable(FlashBackTableStmt) => "FlashBackTableStmt",
    RepairTable(RepairTableStmt) => "RepairTableStmt",

    CreateUser(CreateUserStmt) => "CreateUserStmt",
    AlterUser(AlterUserStmt) => "AlterUserStmt",
    DropUser(DropUserStmt) => "DropUserStmt",
    Grant(GrantStmt) => "GrantStmt",
    GrantRole(GrantRoleStmt) => "GrantRoleStmt",
    Revoke(RevokeStmt) => "RevokeStmt",
    RevokeRole(RevokeRoleStmt) => "RevokeRoleStmt",
    SetPassword(SetPwdStmt) => "SetPwdStmt",
    SetRole(SetRoleStmt) => "SetRoleStmt",
    SetDefaultRole(SetDefaultRoleStmt) => "SetDefaultRoleStmt",

    Explain(ExplainStmt) => "ExplainStmt",
    ExplainFor(ExplainForStmt) => "ExplainForStmt",
    Trace(TraceStmt) => "TraceStmt",
    Prepare(PrepareStmt) => "PrepareStmt",
    Execute(ExecuteStmt) => "ExecuteStmt",
    Deallocate(DeallocateStmt) => "DeallocateStmt",
    Begin(BeginStmt) => "BeginStmt",
    Commit(CommitStmt) => "CommitStmt",
    Rollback(RollbackStmt) => "RollbackStmt",
    Use(UseStmt) => "UseStmt",
    Set(SetStmt) => "SetStmt",
    SetConfig(SetConfigStmt) => "SetConfigStmt",
    Flush(FlushStmt) => "FlushStmt",
    Kill(KillStmt) => "KillStmt",
    Show(ShowStmt) => "ShowStmt",
    Do(DoStmt) => "DoStmt",
    Admin(AdminStmt) => "AdminStmt",
    Shutdown(ShutdownStmt) => "ShutdownStmt",
    AlterInstance(AlterInstanceStmt) => "AlterInstanceStmt",
    Binlog(BinlogStmt) => "BinlogStmt",
    Change(ChangeStmt) => "ChangeStmt",
    /// `BACKUP`, `RESTORE` or `IMPORT`
    Brie(BrieStmt) => "BRIEStmt",
    CreateBinding(CreateBindingStmt) => "CreateBindingStmt",
    DropBinding(DropBindingStmt) => "DropBindingStmt",
    IndexAdvise(IndexAdviseStmt) => "IndexAdviseStmt",

    AnalyzeTable(AnalyzeTableStmt) => "AnalyzeTableStmt",
    DropStats(DropStatsStmt) => "DropStatsStmt",
    LoadStats(LoadStatsStmt) => "LoadStatsStmt",
    CreateStatistics(CreateStatisticsStmt) => "CreateStatisticsStmt",
    DropStatistics(DropStatisticsStmt) => "DropStatisticsStmt",
}

impl From<SelectStmt> for Statement {
    fn from(select: SelectStmt) -> Self {
        Statement::Query(select.into())
    }
}

impl From<UnionStmt> for Statement {
    fn from(union: UnionStmt) -> Self {
        Statement::Query(union.into())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_both_renderings() {
        let stmt = Statement::from(UpdateStmt {
            hints: vec![],
            priority: None,
            ignore: false,
            table_refs: Join::single(TableSource::table(TableName::new("t"))),
            assignments: vec![Assignment::new("a", Expr::value(1))],
            selection: Some(Expr::binary(
                Expr::column("id"),
                BinaryOperator::Eq,
                Expr::value(3),
            )),
            order_by: None,
            limit: None,
        });
        assert_eq!(stmt.kind(), "UpdateStmt");
        assert_eq!(stmt.to_string(), "UPDATE t SET a=1 WHERE id=3");
        assert_eq!(format!("{stmt:#}"), "UPDATE t\nSET\n    a=1\nWHERE id=3");
    }

    #[test]
    fn errors_surface_through_the_statement() {
        let stmt = Statement::from(ShowStmt::new(ShowKind::CreateView));
        let err = stmt.to_restored_sql().unwrap_err();
        assert!(err.is_malformed());
    }
}
