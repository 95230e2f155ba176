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

//! Statistics maintenance statements.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{restore_names, ColumnName, Ident, TableName};
use crate::format::{restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError};

keyword_enum! {
    /// Tunable of `ANALYZE TABLE ... WITH n <option>`
    pub enum AnalyzeOptionType {
        NumBuckets = 0 => "BUCKETS",
        NumTopN = 1 => "TOPN",
        CmSketchDepth = 2 => "CMSKETCH DEPTH",
        CmSketchWidth = 3 => "CMSKETCH WIDTH",
        NumSamples = 4 => "SAMPLES",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AnalyzeOpt {
    pub kind: AnalyzeOptionType,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AnalyzeTableStmt {
    pub incremental: bool,
    pub tables: Vec<TableName>,
    pub partition_names: Vec<Ident>,
    /// `INDEX` was written, possibly with no index names
    pub index_flag: bool,
    pub index_names: Vec<Ident>,
    pub options: Vec<AnalyzeOpt>,
}

impl AnalyzeTableStmt {
    pub fn new(tables: Vec<TableName>) -> Self {
        Self {
            incremental: false,
            tables,
            partition_names: vec![],
            index_flag: false,
            index_names: vec![],
            options: vec![],
        }
    }
}

impl Restore for AnalyzeTableStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.incremental {
            ctx.write_keyword("ANALYZE INCREMENTAL TABLE ")?;
        } else {
            ctx.write_keyword("ANALYZE TABLE ")?;
        }
        restore_list(ctx, &self.tables, ",", "AnalyzeTableStmt.TableNames")?;
        if !self.partition_names.is_empty() {
            ctx.write_keyword(" PARTITION ")?;
            restore_names(ctx, &self.partition_names, ",")?;
        }
        if self.index_flag {
            ctx.write_keyword(" INDEX")?;
        }
        if !self.index_names.is_empty() {
            ctx.write_plain(" ")?;
            restore_names(ctx, &self.index_names, ",")?;
        }
        if !self.options.is_empty() {
            ctx.write_keyword(" WITH")?;
            for (i, opt) in self.options.iter().enumerate() {
                if i != 0 {
                    ctx.write_plain(",")?;
                }
                ctx.write_plainf(format_args!(" {} ", opt.value))?;
                opt.kind.restore(ctx)?;
            }
        }
        Ok(())
    }
}

impl Pretty for AnalyzeTableStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropStatsStmt {
    pub table: TableName,
}

impl Restore for DropStatsStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DROP STATS ")?;
        self.table.restore(ctx).annotate("DropStatsStmt.Table")
    }
}

impl Pretty for DropStatsStmt {}

/// `LOAD STATS 'path'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct LoadStatsStmt {
    pub path: String,
}

impl Restore for LoadStatsStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("LOAD STATS ")?;
        ctx.write_string(&self.path)
    }
}

impl Pretty for LoadStatsStmt {}

keyword_enum! {
    /// Kind of an extended statistics object
    pub enum StatsType {
        Cardinality = 0 => "CARDINALITY",
        Dependency = 1 => "DEPENDENCY",
        Correlation = 2 => "CORRELATION",
    }
}

/// `CREATE STATISTICS [IF NOT EXISTS] s (CARDINALITY) ON t(a, b)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateStatisticsStmt {
    pub if_not_exists: bool,
    pub name: Ident,
    pub stats_type: StatsType,
    pub table: TableName,
    pub columns: Vec<ColumnName>,
}

impl Restore for CreateStatisticsStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.columns.is_empty() {
            return Err(RestoreError::malformed("CREATE STATISTICS without columns"));
        }
        ctx.write_keyword("CREATE STATISTICS ")?;
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        ctx.write_name(self.name.as_str())?;
        ctx.write_plain(" (")?;
        self.stats_type.restore(ctx)?;
        ctx.write_plain(") ")?;
        ctx.write_keyword("ON ")?;
        self.table.restore(ctx).annotate("CreateStatisticsStmt.Table")?;
        ctx.write_plain("(")?;
        restore_list(ctx, &self.columns, ", ", "CreateStatisticsStmt.Columns")?;
        ctx.write_plain(")")
    }
}

impl Pretty for CreateStatisticsStmt {}

/// `DROP STATISTICS s`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropStatisticsStmt {
    pub name: Ident,
}

impl Restore for DropStatisticsStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DROP STATISTICS ")?;
        ctx.write_name(self.name.as_str())
    }
}

impl Pretty for DropStatisticsStmt {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_analyze_table() {
        let mut stmt = AnalyzeTableStmt::new(vec![TableName::new("t1"), TableName::new("t2")]);
        assert_eq!(stmt.to_restored_sql().unwrap(), "ANALYZE TABLE t1,t2");

        stmt.incremental = true;
        stmt.tables.truncate(1);
        stmt.partition_names = vec!["p0".into(), "p1".into()];
        stmt.index_flag = true;
        stmt.index_names = vec!["idx".into()];
        stmt.options = vec![
            AnalyzeOpt {
                kind: AnalyzeOptionType::NumBuckets,
                value: 10,
            },
            AnalyzeOpt {
                kind: AnalyzeOptionType::CmSketchDepth,
                value: 4,
            },
        ];
        assert_eq!(
            stmt.to_restored_sql().unwrap(),
            "ANALYZE INCREMENTAL TABLE t1 PARTITION p0,p1 INDEX idx WITH 10 BUCKETS, 4 CMSKETCH DEPTH"
        );
    }

    #[test]
    fn restore_stats_files() {
        let drop = DropStatsStmt {
            table: TableName::qualified("db", "t"),
        };
        assert_eq!(drop.to_restored_sql().unwrap(), "DROP STATS db.t");
        let load = LoadStatsStmt {
            path: "/tmp/stats.json".into(),
        };
        assert_eq!(load.to_restored_sql().unwrap(), "LOAD STATS '/tmp/stats.json'");
    }

    #[test]
    fn restore_extended_statistics() {
        let mut create = CreateStatisticsStmt {
            if_not_exists: true,
            name: "s1".into(),
            stats_type: StatsType::Correlation,
            table: TableName::new("t"),
            columns: vec![ColumnName::new("a"), ColumnName::new("b")],
        };
        assert_eq!(
            create.to_restored_sql().unwrap(),
            "CREATE STATISTICS IF NOT EXISTS s1 (CORRELATION) ON t(a, b)"
        );

        create.columns.clear();
        assert!(create.to_restored_sql().unwrap_err().is_malformed());

        let drop = DropStatisticsStmt { name: "s1".into() };
        assert_eq!(drop.to_restored_sql().unwrap(), "DROP STATISTICS s1");
    }
}
