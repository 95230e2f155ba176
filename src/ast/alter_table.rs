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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::{
    restore_names, AlgorithmType, ColumnDef, ColumnName, Constraint, Expr, Ident,
    IndexVisibility, LockType, PartitionDefinition, PartitionOptions, TableName, TableOption,
};
use crate::format::{restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError};

/// `FIRST` or `AFTER col` of an added or modified column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum ColumnPosition {
    First,
    After(ColumnName),
}

impl Restore for ColumnPosition {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            ColumnPosition::First => ctx.write_keyword("FIRST"),
            ColumnPosition::After(column) => {
                ctx.write_keyword("AFTER ")?;
                column.restore(ctx).annotate("ColumnPosition.RelativeColumn")
            }
        }
    }
}

impl Pretty for ColumnPosition {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AlterOrderItem {
    pub column: ColumnName,
    pub desc: bool,
}

impl Restore for AlterOrderItem {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.column.restore(ctx).annotate("AlterOrderItem.Column")?;
        if self.desc {
            ctx.write_keyword(" DESC")?;
        }
        Ok(())
    }
}

impl Pretty for AlterOrderItem {}

/// Partitions targeted by a partition maintenance spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum PartitionSelection {
    All,
    Names(Vec<Ident>),
}

impl Restore for PartitionSelection {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            PartitionSelection::All => ctx.write_keyword("ALL"),
            PartitionSelection::Names(names) => restore_names(ctx, names, ","),
        }
    }
}

impl Pretty for PartitionSelection {}

/// One alteration of `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum AlterTableSpec {
    SetTiFlashReplica {
        count: u64,
        labels: Vec<String>,
    },
    Options(Vec<TableOption>),
    /// `ADD COLUMN c ...` for one column without constraints, otherwise
    /// `ADD COLUMN (c1 ..., c2 ..., constraint)`
    AddColumns {
        if_not_exists: bool,
        columns: Vec<ColumnDef>,
        constraints: Vec<Constraint>,
        position: Option<ColumnPosition>,
    },
    AddConstraint(Constraint),
    DropColumn {
        if_exists: bool,
        column: ColumnName,
    },
    DropPrimaryKey,
    DropIndex {
        if_exists: bool,
        name: Ident,
    },
    DropForeignKey {
        if_exists: bool,
        name: Ident,
    },
    ModifyColumn {
        if_exists: bool,
        column: ColumnDef,
        position: Option<ColumnPosition>,
    },
    ChangeColumn {
        if_exists: bool,
        old: ColumnName,
        column: ColumnDef,
        position: Option<ColumnPosition>,
    },
    RenameColumn {
        old: ColumnName,
        new: ColumnName,
    },
    RenameTable(TableName),
    /// `ALTER COLUMN c SET DEFAULT v` or, without a value, `DROP DEFAULT`
    AlterColumn {
        column: ColumnName,
        default: Option<Expr>,
    },
    Lock(LockType),
    OrderByColumns(Vec<AlterOrderItem>),
    Algorithm(AlgorithmType),
    RenameIndex {
        from: Ident,
        to: Ident,
    },
    /// Rendered with a comment marker
    Force,
    AddPartitions {
        if_not_exists: bool,
        no_write_to_binlog: bool,
        definitions: Vec<PartitionDefinition>,
        /// `PARTITIONS n` when no definitions are given
        num: u64,
    },
    CoalescePartitions {
        no_write_to_binlog: bool,
        num: u64,
    },
    DropPartition {
        if_exists: bool,
        names: Vec<Ident>,
    },
    TruncatePartition(PartitionSelection),
    CheckPartition(PartitionSelection),
    OptimizePartition {
        no_write_to_binlog: bool,
        partitions: PartitionSelection,
    },
    RepairPartition {
        no_write_to_binlog: bool,
        partitions: PartitionSelection,
    },
    RebuildPartition {
        no_write_to_binlog: bool,
        partitions: PartitionSelection,
    },
    ImportPartitionTablespace(PartitionSelection),
    DiscardPartitionTablespace(PartitionSelection),
    Partition(PartitionOptions),
    EnableKeys,
    DisableKeys,
    RemovePartitioning,
    WithValidation,
    WithoutValidation,
    ReorganizePartition {
        no_write_to_binlog: bool,
        names: Vec<Ident>,
        definitions: Vec<PartitionDefinition>,
    },
    ExchangePartition {
        partition: Ident,
        table: TableName,
        with_validation: bool,
    },
    SecondaryLoad,
    SecondaryUnload,
    AlterCheck {
        name: Ident,
        enforced: bool,
    },
    DropCheck(Ident),
    ImportTablespace,
    DiscardTablespace,
    IndexVisibility {
        name: Ident,
        visibility: IndexVisibility,
    },
}

impl AlterTableSpec {
    /// Specs that follow the previous one after a bare space instead of
    /// `, `.
    fn is_space_separated(&self) -> bool {
        matches!(
            self,
            AlterTableSpec::Partition(_)
                | AlterTableSpec::RemovePartitioning
                | AlterTableSpec::ImportTablespace
                | AlterTableSpec::DiscardTablespace
        )
    }

    fn restore_options(ctx: &mut RestoreCtx<'_>, options: &[TableOption]) -> Result<(), RestoreError> {
        match options {
            [] => Err(RestoreError::malformed("ALTER TABLE option spec without options")),
            [TableOption::Charset { name, convert_to }, TableOption::Collate(collation)] => {
                if *convert_to {
                    ctx.write_keyword("CONVERT TO ")?;
                }
                ctx.write_keyword("CHARACTER SET ")?;
                TableOption::restore_charset_name(ctx, name)?;
                ctx.write_keyword(" COLLATE ")?;
                ctx.write_keyword(collation)
            }
            [TableOption::Charset {
                name: None,
                convert_to,
            }, ..] => {
                if *convert_to {
                    ctx.write_keyword("CONVERT TO ")?;
                }
                ctx.write_keyword("CHARACTER SET DEFAULT")
            }
            options => restore_list(ctx, options, ", ", "AlterTableSpec.Options"),
        }
    }

    fn restore_position(
        ctx: &mut RestoreCtx<'_>,
        position: &Option<ColumnPosition>,
    ) -> Result<(), RestoreError> {
        if let Some(position) = position {
            ctx.write_plain(" ")?;
            position.restore(ctx).annotate("AlterTableSpec.Position")?;
        }
        Ok(())
    }

    fn restore_maintenance(
        ctx: &mut RestoreCtx<'_>,
        keyword: &str,
        no_write_to_binlog: bool,
        partitions: &PartitionSelection,
    ) -> Result<(), RestoreError> {
        ctx.write_keyword(keyword)?;
        if no_write_to_binlog {
            ctx.write_keyword("NO_WRITE_TO_BINLOG ")?;
        }
        partitions.restore(ctx)
    }
}

impl Restore for AlterTableSpec {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            AlterTableSpec::SetTiFlashReplica { count, labels } => {
                ctx.write_keyword("SET TIFLASH REPLICA ")?;
                ctx.write_plainf(format_args!("{count}"))?;
                if !labels.is_empty() {
                    ctx.write_keyword(" LOCATION LABELS ")?;
                    for (i, label) in labels.iter().enumerate() {
                        if i != 0 {
                            ctx.write_plain(", ")?;
                        }
                        ctx.write_string(label)?;
                    }
                }
                Ok(())
            }
            AlterTableSpec::Options(options) => Self::restore_options(ctx, options),
            AlterTableSpec::AddColumns {
                if_not_exists,
                columns,
                constraints,
                position,
            } => {
                if columns.is_empty() && constraints.is_empty() {
                    return Err(RestoreError::malformed(
                        "ADD COLUMN without columns or constraints",
                    ));
                }
                ctx.write_keyword("ADD COLUMN ")?;
                if *if_not_exists {
                    ctx.write_keyword("IF NOT EXISTS ")?;
                }
                if let ([column], []) = (columns.as_slice(), constraints.as_slice()) {
                    column.restore(ctx).annotate("AlterTableSpec.NewColumns[0]")?;
                    return Self::restore_position(ctx, position);
                }
                ctx.write_plain("(")?;
                restore_list(ctx, columns, ", ", "AlterTableSpec.NewColumns")?;
                if !columns.is_empty() && !constraints.is_empty() {
                    ctx.write_plain(", ")?;
                }
                restore_list(ctx, constraints, ", ", "AlterTableSpec.NewConstraints")?;
                ctx.write_plain(")")
            }
            AlterTableSpec::AddConstraint(constraint) => {
                ctx.write_keyword("ADD ")?;
                constraint.restore(ctx).annotate("AlterTableSpec.Constraint")
            }
            AlterTableSpec::DropColumn { if_exists, column } => {
                ctx.write_keyword("DROP COLUMN ")?;
                if *if_exists {
                    ctx.write_keyword("IF EXISTS ")?;
                }
                column.restore(ctx).annotate("AlterTableSpec.OldColumnName")
            }
            AlterTableSpec::DropPrimaryKey => ctx.write_keyword("DROP PRIMARY KEY"),
            AlterTableSpec::DropIndex { if_exists, name } => {
                ctx.write_keyword("DROP INDEX ")?;
                if *if_exists {
                    ctx.write_keyword("IF EXISTS ")?;
                }
                ctx.write_name(name.as_str())
            }
            AlterTableSpec::DropForeignKey { if_exists, name } => {
                ctx.write_keyword("DROP FOREIGN KEY ")?;
                if *if_exists {
                    ctx.write_keyword("IF EXISTS ")?;
                }
                ctx.write_name(name.as_str())
            }
            AlterTableSpec::ModifyColumn {
                if_exists,
                column,
                position,
            } => {
                ctx.write_keyword("MODIFY COLUMN ")?;
                if *if_exists {
                    ctx.write_keyword("IF EXISTS ")?;
                }
                column.restore(ctx).annotate("AlterTableSpec.NewColumns[0]")?;
                Self::restore_position(ctx, position)
            }
            AlterTableSpec::ChangeColumn {
                if_exists,
                old,
                column,
                position,
            } => {
                ctx.write_keyword("CHANGE COLUMN ")?;
                if *if_exists {
                    ctx.write_keyword("IF EXISTS ")?;
                }
                old.restore(ctx).annotate("AlterTableSpec.OldColumnName")?;
                ctx.write_plain(" ")?;
                column.restore(ctx).annotate("AlterTableSpec.NewColumns[0]")?;
                Self::restore_position(ctx, position)
            }
            AlterTableSpec::RenameColumn { old, new } => {
                ctx.write_keyword("RENAME COLUMN ")?;
                old.restore(ctx).annotate("AlterTableSpec.OldColumnName")?;
                ctx.write_keyword(" TO ")?;
                new.restore(ctx).annotate("AlterTableSpec.NewColumnName")
            }
            AlterTableSpec::RenameTable(table) => {
                ctx.write_keyword("RENAME AS ")?;
                table.restore(ctx).annotate("AlterTableSpec.NewTable")
            }
            AlterTableSpec::AlterColumn { column, default } => {
                ctx.write_keyword("ALTER COLUMN ")?;
                column.restore(ctx).annotate("AlterTableSpec.NewColumns[0]")?;
                match default {
                    Some(value @ Expr::Value(_)) => {
                        ctx.write_keyword(" SET DEFAULT ")?;
                        value.restore(ctx).annotate("AlterTableSpec.NewColumns[0].Options[0].Expr")
                    }
                    Some(expr) => {
                        ctx.write_keyword(" SET DEFAULT ")?;
                        ctx.write_plain("(")?;
                        expr.restore(ctx)
                            .annotate("AlterTableSpec.NewColumns[0].Options[0].Expr")?;
                        ctx.write_plain(")")
                    }
                    None => ctx.write_keyword(" DROP DEFAULT"),
                }
            }
            AlterTableSpec::Lock(lock) => {
                ctx.write_keyword("LOCK ")?;
                ctx.write_plain("= ")?;
                lock.restore(ctx)
            }
            AlterTableSpec::OrderByColumns(items) => {
                ctx.write_keyword("ORDER BY ")?;
                restore_list(ctx, items, ",", "AlterTableSpec.OrderByList")
            }
            AlterTableSpec::Algorithm(algorithm) => {
                ctx.write_keyword("ALGORITHM ")?;
                ctx.write_plain("= ")?;
                algorithm.restore(ctx)
            }
            AlterTableSpec::RenameIndex { from, to } => {
                ctx.write_keyword("RENAME INDEX ")?;
                ctx.write_name(from.as_str())?;
                ctx.write_keyword(" TO ")?;
                ctx.write_name(to.as_str())
            }
            AlterTableSpec::Force => {
                log::debug!("ALTER TABLE FORCE is rendered as a comment marker");
                ctx.write_keyword("FORCE")?;
                ctx.write_plain(" /* AlterTableForce is not supported */ ")
            }
            AlterTableSpec::AddPartitions {
                if_not_exists,
                no_write_to_binlog,
                definitions,
                num,
            } => {
                ctx.write_keyword("ADD PARTITION")?;
                if *if_not_exists {
                    ctx.write_keyword(" IF NOT EXISTS")?;
                }
                if *no_write_to_binlog {
                    ctx.write_keyword(" NO_WRITE_TO_BINLOG")?;
                }
                if !definitions.is_empty() {
                    ctx.write_plain(" (")?;
                    restore_list(ctx, definitions, ", ", "AlterTableSpec.PartDefinitions")?;
                    ctx.write_plain(")")?;
                } else if *num != 0 {
                    ctx.write_keyword(" PARTITIONS ")?;
                    ctx.write_plainf(format_args!("{num}"))?;
                }
                Ok(())
            }
            AlterTableSpec::CoalescePartitions {
                no_write_to_binlog,
                num,
            } => {
                ctx.write_keyword("COALESCE PARTITION ")?;
                if *no_write_to_binlog {
                    ctx.write_keyword("NO_WRITE_TO_BINLOG ")?;
                }
                ctx.write_plainf(format_args!("{num}"))
            }
            AlterTableSpec::DropPartition { if_exists, names } => {
                ctx.write_keyword("DROP PARTITION ")?;
                if *if_exists {
                    ctx.write_keyword("IF EXISTS ")?;
                }
                restore_names(ctx, names, ",")
            }
            AlterTableSpec::TruncatePartition(partitions) => {
                Self::restore_maintenance(ctx, "TRUNCATE PARTITION ", false, partitions)
            }
            AlterTableSpec::CheckPartition(partitions) => {
                Self::restore_maintenance(ctx, "CHECK PARTITION ", false, partitions)
            }
            AlterTableSpec::OptimizePartition {
                no_write_to_binlog,
                partitions,
            } => Self::restore_maintenance(ctx, "OPTIMIZE PARTITION ", *no_write_to_binlog, partitions),
            AlterTableSpec::RepairPartition {
                no_write_to_binlog,
                partitions,
            } => Self::restore_maintenance(ctx, "REPAIR PARTITION ", *no_write_to_binlog, partitions),
            AlterTableSpec::RebuildPartition {
                no_write_to_binlog,
                partitions,
            } => Self::restore_maintenance(ctx, "REBUILD PARTITION ", *no_write_to_binlog, partitions),
            AlterTableSpec::ImportPartitionTablespace(partitions) => {
                Self::restore_maintenance(ctx, "IMPORT PARTITION ", false, partitions)?;
                ctx.write_keyword(" TABLESPACE")
            }
            AlterTableSpec::DiscardPartitionTablespace(partitions) => {
                Self::restore_maintenance(ctx, "DISCARD PARTITION ", false, partitions)?;
                ctx.write_keyword(" TABLESPACE")
            }
            AlterTableSpec::Partition(options) => {
                options.restore(ctx).annotate("AlterTableSpec.Partition")
            }
            AlterTableSpec::EnableKeys => ctx.write_keyword("ENABLE KEYS"),
            AlterTableSpec::DisableKeys => ctx.write_keyword("DISABLE KEYS"),
            AlterTableSpec::RemovePartitioning => ctx.write_keyword("REMOVE PARTITIONING"),
            AlterTableSpec::WithValidation => ctx.write_keyword("WITH VALIDATION"),
            AlterTableSpec::WithoutValidation => ctx.write_keyword("WITHOUT VALIDATION"),
            AlterTableSpec::ReorganizePartition {
                no_write_to_binlog,
                names,
                definitions,
            } => {
                ctx.write_keyword("REORGANIZE PARTITION")?;
                if *no_write_to_binlog {
                    ctx.write_keyword(" NO_WRITE_TO_BINLOG")?;
                }
                if !names.is_empty() {
                    ctx.write_plain(" ")?;
                    restore_names(ctx, names, ",")?;
                    ctx.write_keyword(" INTO ")?;
                    ctx.write_plain("(")?;
                    restore_list(ctx, definitions, ", ", "AlterTableSpec.PartDefinitions")?;
                    ctx.write_plain(")")?;
                }
                Ok(())
            }
            AlterTableSpec::ExchangePartition {
                partition,
                table,
                with_validation,
            } => {
                ctx.write_keyword("EXCHANGE PARTITION ")?;
                ctx.write_name(partition.as_str())?;
                ctx.write_keyword(" WITH TABLE ")?;
                table.restore(ctx).annotate("AlterTableSpec.NewTable")?;
                if !with_validation {
                    ctx.write_keyword(" WITHOUT VALIDATION")?;
                }
                Ok(())
            }
            AlterTableSpec::SecondaryLoad => ctx.write_keyword("SECONDARY_LOAD"),
            AlterTableSpec::SecondaryUnload => ctx.write_keyword("SECONDARY_UNLOAD"),
            AlterTableSpec::AlterCheck { name, enforced } => {
                ctx.write_keyword("ALTER CHECK ")?;
                ctx.write_name(name.as_str())?;
                if !enforced {
                    ctx.write_keyword(" NOT")?;
                }
                ctx.write_keyword(" ENFORCED")
            }
            AlterTableSpec::DropCheck(name) => {
                ctx.write_keyword("DROP CHECK ")?;
                ctx.write_name(name.as_str())
            }
            AlterTableSpec::ImportTablespace => ctx.write_keyword("IMPORT TABLESPACE"),
            AlterTableSpec::DiscardTablespace => ctx.write_keyword("DISCARD TABLESPACE"),
            AlterTableSpec::IndexVisibility { name, visibility } => {
                ctx.write_keyword("ALTER INDEX ")?;
                ctx.write_name(name.as_str())?;
                ctx.write_plain(" ")?;
                visibility.restore(ctx)
            }
        }
    }
}

impl Pretty for AlterTableSpec {}

/// `ALTER TABLE t spec, spec ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AlterTableStmt {
    pub table: TableName,
    pub specs: Vec<AlterTableSpec>,
}

impl Restore for AlterTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ALTER TABLE ")?;
        self.table.restore(ctx).annotate("AlterTableStmt.Table")?;
        for (i, spec) in self.specs.iter().enumerate() {
            if i == 0 || spec.is_space_separated() {
                ctx.write_plain(" ")?;
            } else {
                ctx.write_plain(", ")?;
            }
            spec.restore(ctx)
                .annotate_with(|| format!("AlterTableStmt.Specs[{i}]"))?;
        }
        Ok(())
    }
}

impl Pretty for AlterTableStmt {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        ConstraintKind, FieldType, IndexPartSpecification, PartitionDefinitionClause,
        PartitionMethod, PartitionType, TypeName,
    };

    fn alter(specs: Vec<AlterTableSpec>) -> String {
        AlterTableStmt {
            table: TableName::new("t"),
            specs,
        }
        .to_restored_sql()
        .unwrap()
    }

    #[test]
    fn single_column_add_with_position() {
        let sql = alter(vec![AlterTableSpec::AddColumns {
            if_not_exists: true,
            columns: vec![ColumnDef::new("c", FieldType::new(TypeName::Int))],
            constraints: vec![],
            position: Some(ColumnPosition::After("b".into())),
        }]);
        assert_eq!(sql, "ALTER TABLE t ADD COLUMN IF NOT EXISTS c INT AFTER b");
    }

    #[test]
    fn charset_and_collate_pair() {
        let sql = alter(vec![AlterTableSpec::Options(vec![
            TableOption::Charset {
                name: Some("utf8mb4".into()),
                convert_to: true,
            },
            TableOption::Collate("utf8mb4_bin".into()),
        ])]);
        assert_eq!(
            sql,
            "ALTER TABLE t CONVERT TO CHARACTER SET UTF8MB4 COLLATE UTF8MB4_BIN"
        );
        let sql = alter(vec![AlterTableSpec::Options(vec![TableOption::Charset {
            name: None,
            convert_to: false,
        }])]);
        assert_eq!(sql, "ALTER TABLE t CHARACTER SET DEFAULT");
    }

    #[test]
    fn empty_option_spec_is_malformed() {
        let err = AlterTableStmt {
            table: TableName::new("t"),
            specs: vec![AlterTableSpec::Options(vec![])],
        }
        .to_restored_sql()
        .unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.breadcrumbs(), vec!["AlterTableStmt.Specs[0]"]);
    }

    #[test]
    fn add_columns_needs_something_to_add() {
        let stmt = AlterTableStmt {
            table: TableName::new("t"),
            specs: vec![AlterTableSpec::AddColumns {
                if_not_exists: false,
                columns: vec![],
                constraints: vec![],
                position: None,
            }],
        };
        let err = stmt.to_restored_sql().unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.breadcrumbs(), vec!["AlterTableStmt.Specs[0]"]);
        assert!(stmt.to_pretty_sql(4, " ").unwrap_err().is_malformed());

        let sql = alter(vec![AlterTableSpec::AddColumns {
            if_not_exists: false,
            columns: vec![],
            constraints: vec![Constraint::new(
                ConstraintKind::Index,
                vec![IndexPartSpecification::column("a")],
            )],
            position: None,
        }]);
        assert_eq!(sql, "ALTER TABLE t ADD COLUMN (INDEX(a))");
    }

    #[test]
    fn partition_specs_use_bare_space() {
        let sql = alter(vec![
            AlterTableSpec::Options(vec![TableOption::Comment("c".into())]),
            AlterTableSpec::Partition(PartitionOptions {
                method: PartitionMethod::expr(PartitionType::Hash, Expr::column("id")),
                num: 2,
                sub: None,
                definitions: vec![],
            }),
            AlterTableSpec::RemovePartitioning,
        ]);
        assert_eq!(
            sql,
            "ALTER TABLE t COMMENT = 'c' PARTITION BY HASH (id) PARTITIONS 2 REMOVE PARTITIONING"
        );
    }

    #[test]
    fn mixed_specs_use_comma() {
        let sql = alter(vec![
            AlterTableSpec::AddConstraint(
                Constraint::new(ConstraintKind::Index, vec![IndexPartSpecification::column("a")])
                    .named("idx_a"),
            ),
            AlterTableSpec::AlterColumn {
                column: "b".into(),
                default: Some(Expr::value(1)),
            },
            AlterTableSpec::AlterColumn {
                column: "c".into(),
                default: None,
            },
            AlterTableSpec::Force,
            AlterTableSpec::AddPartitions {
                if_not_exists: false,
                no_write_to_binlog: false,
                definitions: vec![PartitionDefinition::new(
                    "p3",
                    PartitionDefinitionClause::LessThan(vec![Expr::value(30)]),
                )],
                num: 0,
            },
            AlterTableSpec::TruncatePartition(PartitionSelection::All),
        ]);
        assert_eq!(
            sql,
            "ALTER TABLE t ADD INDEX idx_a(a), ALTER COLUMN b SET DEFAULT 1, \
             ALTER COLUMN c DROP DEFAULT, FORCE /* AlterTableForce is not supported */ , \
             ADD PARTITION (PARTITION p3 VALUES LESS THAN (30)), TRUNCATE PARTITION ALL"
        );
    }
}
