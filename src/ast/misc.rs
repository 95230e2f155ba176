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

//! Session, transaction, `SHOW` and administrative statements.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{
    ColumnName, Expr, Ident, Limit, LinesClause, RoleIdentity, Statement, TableName, UserIdentity,
    Variable,
};
use crate::format::{restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError};

/// `EXPLAIN [ANALYZE | FORMAT = 'fmt'] <stmt>`, or `DESC t [col]` when the
/// explained statement is a `SHOW COLUMNS` on a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ExplainStmt {
    pub stmt: Box<Statement>,
    pub format: String,
    pub analyze: bool,
}

impl ExplainStmt {
    pub fn new(stmt: Statement) -> Self {
        Self {
            stmt: Box::new(stmt),
            format: "row".to_string(),
            analyze: false,
        }
    }

    fn restore_desc(&self, ctx: &mut RestoreCtx<'_>) -> Result<bool, RestoreError> {
        let Statement::Show(show) = self.stmt.as_ref() else {
            return Ok(false);
        };
        let Some(table) = &show.table else {
            return Ok(false);
        };
        if show.kind != ShowKind::Columns {
            return Ok(false);
        }
        ctx.write_keyword("DESC ")?;
        table.restore(ctx).annotate("ExplainStmt.Table")?;
        if let Some(column) = &show.column {
            ctx.write_plain(" ")?;
            column.restore(ctx).annotate("ExplainStmt.Column")?;
        }
        Ok(true)
    }

    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("EXPLAIN ")?;
        if self.analyze {
            ctx.write_keyword("ANALYZE ")
        } else {
            ctx.write_keyword("FORMAT ")?;
            ctx.write_plain("= ")?;
            ctx.write_string(&self.format)?;
            ctx.write_plain(" ")
        }
    }
}

impl Restore for ExplainStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.restore_desc(ctx)? {
            return Ok(());
        }
        self.restore_head(ctx)?;
        self.stmt.restore(ctx).annotate("ExplainStmt.Stmt")
    }
}

impl Pretty for ExplainStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        if self.restore_desc(ctx)? {
            return Ok(());
        }
        self.restore_head(ctx)?;
        self.stmt
            .pretty(ctx, level, indent, indent_char)
            .annotate("ExplainStmt.Stmt")
    }
}

/// `EXPLAIN FORMAT = 'fmt' FOR CONNECTION <id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ExplainForStmt {
    pub format: String,
    pub connection_id: u64,
}

impl Restore for ExplainForStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("EXPLAIN ")?;
        ctx.write_keyword("FORMAT ")?;
        ctx.write_plain("= ")?;
        ctx.write_string(&self.format)?;
        ctx.write_plain(" ")?;
        ctx.write_keyword("FOR ")?;
        ctx.write_keyword("CONNECTION ")?;
        ctx.write_plainf(format_args!("{}", self.connection_id))
    }
}

impl Pretty for ExplainForStmt {}

/// `TRACE [FORMAT = 'fmt'] <stmt>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct TraceStmt {
    pub stmt: Box<Statement>,
    /// `json` is the default and is not written.
    pub format: String,
}

impl TraceStmt {
    pub fn new(stmt: Statement) -> Self {
        Self {
            stmt: Box::new(stmt),
            format: "json".to_string(),
        }
    }

    fn restore_head(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("TRACE ")?;
        if self.format != "json" {
            ctx.write_keyword("FORMAT")?;
            ctx.write_plain(" = ")?;
            ctx.write_string(&self.format)?;
            ctx.write_plain(" ")?;
        }
        Ok(())
    }
}

impl Restore for TraceStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        self.stmt.restore(ctx).annotate("TraceStmt.Stmt")
    }
}

impl Pretty for TraceStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        self.restore_head(ctx)?;
        self.stmt
            .pretty(ctx, level, indent, indent_char)
            .annotate("TraceStmt.Stmt")
    }
}

/// Text of a prepared statement
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum PrepareSource {
    /// `FROM 'SELECT ?'`
    Text(String),
    /// `FROM @stmt_text`
    Variable(Variable),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct PrepareStmt {
    pub name: Ident,
    pub source: PrepareSource,
}

impl Restore for PrepareStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("PREPARE ")?;
        ctx.write_name(self.name.as_str())?;
        ctx.write_keyword(" FROM ")?;
        match &self.source {
            PrepareSource::Text(text) => ctx.write_string(text),
            PrepareSource::Variable(var) => var.restore(ctx).annotate("PrepareStmt.SQLVar"),
        }
    }
}

impl Pretty for PrepareStmt {}

/// `EXECUTE name [USING @a,@b]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ExecuteStmt {
    pub name: Ident,
    pub using: Vec<Expr>,
}

impl Restore for ExecuteStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("EXECUTE ")?;
        ctx.write_name(self.name.as_str())?;
        if !self.using.is_empty() {
            ctx.write_keyword(" USING ")?;
            restore_list(ctx, &self.using, ",", "ExecuteStmt.UsingVars")?;
        }
        Ok(())
    }
}

impl Pretty for ExecuteStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DeallocateStmt {
    pub name: Ident,
}

impl Restore for DeallocateStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DEALLOCATE PREPARE ")?;
        ctx.write_name(self.name.as_str())
    }
}

impl Pretty for DeallocateStmt {}

keyword_enum! {
    /// Transaction mode of `BEGIN`
    pub enum TxnMode {
        Pessimistic = 1 => "PESSIMISTIC",
        Optimistic = 2 => "OPTIMISTIC",
    }
}

/// Snapshot bound of a read-only transaction
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum TimestampBound {
    Strong,
    MaxStaleness(Expr),
    ExactStaleness(Expr),
    ReadTimestamp(Expr),
    MinReadTimestamp(Expr),
}

impl Restore for TimestampBound {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let (keyword, timestamp) = match self {
            TimestampBound::Strong => return ctx.write_keyword(" WITH TIMESTAMP BOUND STRONG"),
            TimestampBound::MaxStaleness(ts) => (" WITH TIMESTAMP BOUND MAX STALENESS ", ts),
            TimestampBound::ExactStaleness(ts) => (" WITH TIMESTAMP BOUND EXACT STALENESS ", ts),
            TimestampBound::ReadTimestamp(ts) => (" WITH TIMESTAMP BOUND READ TIMESTAMP ", ts),
            TimestampBound::MinReadTimestamp(ts) => {
                (" WITH TIMESTAMP BOUND MIN READ TIMESTAMP ", ts)
            }
        };
        ctx.write_keyword(keyword)?;
        timestamp.restore(ctx).annotate("BeginStmt.Bound.Timestamp")
    }
}

impl Pretty for TimestampBound {}

/// `BEGIN [PESSIMISTIC|OPTIMISTIC]` or `START TRANSACTION [READ ONLY ...]`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct BeginStmt {
    pub mode: Option<TxnMode>,
    pub read_only: bool,
    /// Only valid with `read_only`
    pub bound: Option<TimestampBound>,
}

impl Restore for BeginStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(mode) = self.mode {
            ctx.write_keyword("BEGIN ")?;
            return mode.restore(ctx);
        }
        if !self.read_only {
            if self.bound.is_some() {
                return Err(RestoreError::malformed(
                    "a timestamp bound needs START TRANSACTION READ ONLY",
                ));
            }
            return ctx.write_keyword("START TRANSACTION");
        }
        ctx.write_keyword("START TRANSACTION READ ONLY")?;
        if let Some(bound) = &self.bound {
            bound.restore(ctx)?;
        }
        Ok(())
    }
}

impl Pretty for BeginStmt {}

keyword_enum! {
    /// What happens after `COMMIT`/`ROLLBACK`
    pub enum CompletionType {
        Chain = 1 => "AND CHAIN",
        Release = 2 => "RELEASE",
    }
}

fn restore_completion(
    ctx: &mut RestoreCtx<'_>,
    completion: Option<CompletionType>,
) -> Result<(), RestoreError> {
    if let Some(completion) = completion {
        ctx.write_plain(" ")?;
        completion.restore(ctx)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CommitStmt {
    pub completion: Option<CompletionType>,
}

impl Restore for CommitStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("COMMIT")?;
        restore_completion(ctx, self.completion)
    }
}

impl Pretty for CommitStmt {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RollbackStmt {
    pub completion: Option<CompletionType>,
}

impl Restore for RollbackStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ROLLBACK")?;
        restore_completion(ctx, self.completion)
    }
}

impl Pretty for RollbackStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UseStmt {
    pub db_name: Ident,
}

impl Restore for UseStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("USE ")?;
        ctx.write_name(self.db_name.as_str())
    }
}

impl Pretty for UseStmt {}

/// Left-hand side of a `SET` assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum AssignmentTarget {
    /// `SET NAMES 'utf8mb4' [COLLATE ...]`
    Names,
    /// `SET CHARSET 'utf8mb4'`
    Charset,
    /// `@name=`
    User(String),
    /// `@@GLOBAL.name=` or `@@SESSION.name=`
    System { name: String, global: bool },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct VariableAssignment {
    pub target: AssignmentTarget,
    pub value: Expr,
    /// `COLLATE` following `SET NAMES`
    pub collate: Option<Expr>,
}

impl VariableAssignment {
    pub fn user(name: impl Into<String>, value: Expr) -> Self {
        Self {
            target: AssignmentTarget::User(name.into()),
            value,
            collate: None,
        }
    }

    pub fn system(name: impl Into<String>, global: bool, value: Expr) -> Self {
        Self {
            target: AssignmentTarget::System {
                name: name.into(),
                global,
            },
            value,
            collate: None,
        }
    }
}

impl Restore for VariableAssignment {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match &self.target {
            AssignmentTarget::Names => ctx.write_keyword("NAMES ")?,
            AssignmentTarget::Charset => ctx.write_keyword("CHARSET ")?,
            AssignmentTarget::User(name) => {
                ctx.write_keyword("@")?;
                ctx.write_name(name)?;
                ctx.write_plain("=")?;
            }
            AssignmentTarget::System { name, global } => {
                ctx.write_plain("@@")?;
                ctx.write_keyword(if *global { "GLOBAL" } else { "SESSION" })?;
                ctx.write_plain(".")?;
                ctx.write_name(name)?;
                ctx.write_plain("=")?;
            }
        }
        self.value
            .restore(ctx)
            .annotate("VariableAssignment.Value")?;
        if let Some(collate) = &self.collate {
            ctx.write_keyword(" COLLATE ")?;
            collate
                .restore(ctx)
                .annotate("VariableAssignment.ExtendValue")?;
        }
        Ok(())
    }
}

impl Pretty for VariableAssignment {}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SetStmt {
    pub variables: Vec<VariableAssignment>,
}

impl Restore for SetStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SET ")?;
        restore_list(ctx, &self.variables, ", ", "SetStmt.Variables")
    }
}

impl Pretty for SetStmt {}

/// Component or instance addressed by `SET CONFIG`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum ConfigTarget {
    /// A component type such as `TIKV` or `PD`
    Type(String),
    /// An address, e.g. `'127.0.0.1:20160'`
    Instance(String),
}

/// `SET CONFIG <target> name = value`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SetConfigStmt {
    pub target: ConfigTarget,
    pub name: String,
    pub value: Expr,
}

impl Restore for SetConfigStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SET CONFIG ")?;
        match &self.target {
            ConfigTarget::Type(tp) => ctx.write_keyword(tp)?,
            ConfigTarget::Instance(addr) => ctx.write_string(addr)?,
        }
        ctx.write_plain(" ")?;
        ctx.write_keyword(&self.name)?;
        ctx.write_plain(" = ")?;
        self.value.restore(ctx).annotate("SetConfigStmt.Value")
    }
}

impl Pretty for SetConfigStmt {}

keyword_enum! {
    /// Which logs `FLUSH ... LOGS` closes
    pub enum LogType {
        Default = 0 => "LOGS",
        Binary = 1 => "BINARY LOGS",
        Engine = 2 => "ENGINE LOGS",
        Error = 3 => "ERROR LOGS",
        General = 4 => "GENERAL LOGS",
        Slow = 5 => "SLOW LOGS",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum FlushTarget {
    Tables {
        tables: Vec<TableName>,
        read_lock: bool,
    },
    Privileges,
    Status,
    TidbPlugins(Vec<String>),
    Hosts,
    Logs(LogType),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FlushStmt {
    pub no_write_to_binlog: bool,
    pub target: FlushTarget,
}

/// Writes ` a, b, c` for a non-empty list of plain words.
fn restore_plain_list(ctx: &mut RestoreCtx<'_>, items: &[String]) -> Result<(), RestoreError> {
    for (i, item) in items.iter().enumerate() {
        ctx.write_plain(if i == 0 { " " } else { ", " })?;
        ctx.write_plain(item)?;
    }
    Ok(())
}

impl Restore for FlushStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("FLUSH ")?;
        if self.no_write_to_binlog {
            ctx.write_keyword("NO_WRITE_TO_BINLOG ")?;
        }
        match &self.target {
            FlushTarget::Tables { tables, read_lock } => {
                ctx.write_keyword("TABLES")?;
                if !tables.is_empty() {
                    ctx.write_plain(" ")?;
                    restore_list(ctx, tables, ", ", "FlushStmt.Tables")?;
                }
                if *read_lock {
                    ctx.write_keyword(" WITH READ LOCK")?;
                }
                Ok(())
            }
            FlushTarget::Privileges => ctx.write_keyword("PRIVILEGES"),
            FlushTarget::Status => ctx.write_keyword("STATUS"),
            FlushTarget::TidbPlugins(plugins) => {
                ctx.write_keyword("TIDB PLUGINS")?;
                restore_plain_list(ctx, plugins)
            }
            FlushTarget::Hosts => ctx.write_keyword("HOSTS"),
            FlushTarget::Logs(log_type) => log_type.restore(ctx),
        }
    }
}

impl Pretty for FlushStmt {}

/// `KILL [TIDB] [QUERY] <connection id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct KillStmt {
    pub query: bool,
    pub connection_id: u64,
    pub tidb_extension: bool,
}

impl Restore for KillStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("KILL")?;
        if self.tidb_extension {
            ctx.write_keyword(" TIDB")?;
        }
        if self.query {
            ctx.write_keyword(" QUERY")?;
        }
        ctx.write_plainf(format_args!(" {}", self.connection_id))
    }
}

impl Pretty for KillStmt {}

keyword_enum! {
    /// What a `SHOW` statement lists
    pub enum ShowKind {
        CreateTable = 11 => "CREATE TABLE",
        CreateView = 12 => "CREATE VIEW",
        CreateDatabase = 20 => "CREATE DATABASE",
        CreateSequence = 14 => "CREATE SEQUENCE",
        CreateUser = 13 => "CREATE USER",
        Grants = 15 => "GRANTS",
        MasterStatus = 30 => "MASTER STATUS",
        ProcessList = 19 => "PROCESSLIST",
        StatsMeta = 23 => "STATS_META",
        StatsHistograms = 24 => "STATS_HISTOGRAMS",
        StatsBuckets = 25 => "STATS_BUCKETS",
        StatsHealthy = 26 => "STATS_HEALTHY",
        Profiles = 29 => "PROFILES",
        Profile = 28 => "PROFILE",
        Privileges = 31 => "PRIVILEGES",
        Builtins = 39 => "BUILTINS",
        Engines = 1 => "ENGINES",
        Config = 21 => "CONFIG",
        Databases = 2 => "DATABASES",
        Charset = 7 => "CHARSET",
        Tables = 3 => "TABLES",
        OpenTables = 36 => "OPEN TABLES",
        TableStatus = 4 => "TABLE STATUS",
        Index = 18 => "INDEX",
        Columns = 5 => "COLUMNS",
        Warnings = 6 => "WARNINGS",
        Errors = 32 => "ERRORS",
        Variables = 8 => "VARIABLES",
        Status = 9 => "STATUS",
        Collation = 10 => "COLLATION",
        Triggers = 16 => "TRIGGERS",
        ProcedureStatus = 17 => "PROCEDURE STATUS",
        Events = 22 => "EVENTS",
        Plugins = 27 => "PLUGINS",
        Bindings = 33 => "BINDINGS",
        PumpStatus = 34 => "PUMP STATUS",
        DrainerStatus = 35 => "DRAINER STATUS",
        AnalyzeStatus = 37 => "ANALYZE STATUS",
        Regions = 38 => "REGIONS",
        TableNextRowId = 40 => "NEXT_ROW_ID",
        Backups = 41 => "BACKUPS",
        Restores = 42 => "RESTORES",
        Imports = 43 => "IMPORTS",
    }
}

keyword_enum! {
    /// Resource listed by `SHOW PROFILE`
    pub enum ProfileType {
        Cpu = 1 => "CPU",
        Memory = 2 => "MEMORY",
        BlockIo = 3 => "BLOCK IO",
        ContextSwitch = 4 => "CONTEXT SWITCHES",
        Ipc = 6 => "IPC",
        PageFaults = 5 => "PAGE FAULTS",
        Source = 8 => "SOURCE",
        Swaps = 7 => "SWAPS",
        All = 9 => "ALL",
    }
}

/// Trailing `LIKE 'pat'` or `WHERE expr` of a `SHOW`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum ShowFilter {
    Like(Expr),
    Where(Expr),
}

/// `SHOW ...`; which of the optional fields are read depends on `kind`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ShowStmt {
    pub kind: ShowKind,
    pub db_name: Option<Ident>,
    pub table: Option<TableName>,
    pub column: Option<ColumnName>,
    pub index_name: Option<Ident>,
    pub user: Option<UserIdentity>,
    pub roles: Vec<RoleIdentity>,
    pub full: bool,
    pub extended: bool,
    pub global_scope: bool,
    pub if_not_exists: bool,
    pub profile_types: Vec<ProfileType>,
    pub profile_query: Option<u64>,
    pub profile_limit: Option<Limit>,
    pub filter: Option<ShowFilter>,
}

impl ShowStmt {
    pub fn new(kind: ShowKind) -> Self {
        Self {
            kind,
            db_name: None,
            table: None,
            column: None,
            index_name: None,
            user: None,
            roles: vec![],
            full: false,
            extended: false,
            global_scope: false,
            if_not_exists: false,
            profile_types: vec![],
            profile_query: None,
            profile_limit: None,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: ShowFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    fn table(&self) -> Result<&TableName, RestoreError> {
        self.table.as_ref().ok_or_else(|| {
            RestoreError::malformed(format!("SHOW {} without a table", self.kind))
        })
    }

    fn restore_table(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.table()?.restore(ctx).annotate("ShowStmt.Table")
    }

    fn restore_full(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.full {
            ctx.write_keyword("FULL ")?;
        }
        Ok(())
    }

    fn restore_scope(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(if self.global_scope {
            "GLOBAL "
        } else {
            "SESSION "
        })
    }

    fn restore_db_name(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if let Some(db) = &self.db_name {
            ctx.write_keyword(" IN ")?;
            ctx.write_name(db.as_str())?;
        }
        Ok(())
    }

    fn restore_filter(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match &self.filter {
            Some(ShowFilter::Like(pattern)) => {
                ctx.write_keyword(" LIKE ")?;
                pattern.restore(ctx).annotate("ShowStmt.Pattern")
            }
            Some(ShowFilter::Where(selection)) => {
                ctx.write_keyword(" WHERE ")?;
                selection.restore(ctx).annotate("ShowStmt.Where")
            }
            None => Ok(()),
        }
    }

    fn restore_profile(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("PROFILE")?;
        for (i, tp) in self.profile_types.iter().enumerate() {
            if i != 0 {
                ctx.write_plain(",")?;
            }
            ctx.write_plain(" ")?;
            tp.restore(ctx)?;
        }
        if let Some(query) = self.profile_query {
            ctx.write_keyword(" FOR QUERY ")?;
            ctx.write_plainf(format_args!("{query}"))?;
        }
        if let Some(limit) = &self.profile_limit {
            ctx.write_plain(" ")?;
            limit.restore(ctx).annotate("ShowStmt.ShowProfileLimit")?;
        }
        Ok(())
    }

    /// Kinds that take an optional `LIKE`/`WHERE` filter.
    fn restore_filterable(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self.kind {
            ShowKind::Tables => {
                self.restore_full(ctx)?;
                ctx.write_keyword("TABLES")?;
                self.restore_db_name(ctx)?;
            }
            ShowKind::OpenTables
            | ShowKind::TableStatus
            | ShowKind::Triggers
            | ShowKind::Events => {
                self.kind.restore(ctx)?;
                self.restore_db_name(ctx)?;
            }
            ShowKind::Index => {
                ctx.write_keyword("INDEX IN ")?;
                self.restore_table(ctx)?;
            }
            ShowKind::Columns => {
                if self.extended {
                    ctx.write_keyword("EXTENDED ")?;
                }
                self.restore_full(ctx)?;
                ctx.write_keyword("COLUMNS")?;
                if self.table.is_some() {
                    ctx.write_keyword(" IN ")?;
                    self.restore_table(ctx)?;
                }
                self.restore_db_name(ctx)?;
            }
            ShowKind::Variables | ShowKind::Status | ShowKind::Bindings => {
                self.restore_scope(ctx)?;
                self.kind.restore(ctx)?;
            }
            ShowKind::Regions => {
                ctx.write_keyword("TABLE ")?;
                self.restore_table(ctx)?;
                if let Some(index) = &self.index_name {
                    ctx.write_keyword(" INDEX ")?;
                    ctx.write_name(index.as_str())?;
                }
                ctx.write_keyword(" REGIONS")?;
            }
            ShowKind::TableNextRowId => {
                ctx.write_keyword("TABLE ")?;
                self.restore_table(ctx)?;
                ctx.write_keyword(" NEXT_ROW_ID")?;
            }
            _ => self.kind.restore(ctx)?,
        }
        self.restore_filter(ctx)
    }
}

impl Restore for ShowStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SHOW ")?;
        match self.kind {
            ShowKind::CreateTable | ShowKind::CreateView | ShowKind::CreateSequence => {
                self.kind.restore(ctx)?;
                ctx.write_plain(" ")?;
                self.restore_table(ctx)
            }
            ShowKind::CreateDatabase => {
                ctx.write_keyword("CREATE DATABASE ")?;
                if self.if_not_exists {
                    ctx.write_keyword("IF NOT EXISTS ")?;
                }
                let db = self.db_name.as_ref().ok_or_else(|| {
                    RestoreError::malformed("SHOW CREATE DATABASE without a database")
                })?;
                ctx.write_name(db.as_str())
            }
            ShowKind::CreateUser => {
                ctx.write_keyword("CREATE USER ")?;
                let user = self
                    .user
                    .as_ref()
                    .ok_or_else(|| RestoreError::malformed("SHOW CREATE USER without a user"))?;
                user.restore(ctx).annotate("ShowStmt.User")
            }
            ShowKind::Grants => {
                ctx.write_keyword("GRANTS")?;
                if let Some(user) = &self.user {
                    ctx.write_keyword(" FOR ")?;
                    user.restore(ctx).annotate("ShowStmt.User")?;
                }
                if !self.roles.is_empty() {
                    ctx.write_keyword(" USING ")?;
                    restore_list(ctx, &self.roles, ", ", "ShowStmt.Roles")?;
                }
                Ok(())
            }
            ShowKind::MasterStatus
            | ShowKind::Profiles
            | ShowKind::Privileges
            | ShowKind::Builtins => self.kind.restore(ctx),
            ShowKind::ProcessList => {
                self.restore_full(ctx)?;
                ctx.write_keyword("PROCESSLIST")
            }
            ShowKind::StatsMeta
            | ShowKind::StatsHistograms
            | ShowKind::StatsBuckets
            | ShowKind::StatsHealthy => {
                self.kind.restore(ctx)?;
                self.restore_filter(ctx)
            }
            ShowKind::Profile => self.restore_profile(ctx),
            _ => self.restore_filterable(ctx),
        }
    }
}

impl Pretty for ShowStmt {}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DoStmt {
    pub exprs: Vec<Expr>,
}

impl Restore for DoStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DO ")?;
        restore_list(ctx, &self.exprs, ", ", "DoStmt.Exprs")
    }
}

impl Pretty for DoStmt {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct HandleRange {
    pub begin: i64,
    pub end: i64,
}

keyword_enum! {
    /// Which statements `ADMIN SHOW SLOW TOP` considers
    pub enum ShowSlowKind {
        Default = 0 => "",
        Internal = 1 => "INTERNAL",
        All = 2 => "ALL",
    }
}

/// `RECENT n` or `TOP [INTERNAL|ALL] n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum ShowSlow {
    Recent(u64),
    Top { kind: ShowSlowKind, count: u64 },
}

impl Restore for ShowSlow {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let count = match self {
            ShowSlow::Recent(count) => {
                ctx.write_keyword("RECENT ")?;
                count
            }
            ShowSlow::Top { kind, count } => {
                ctx.write_keyword("TOP ")?;
                if *kind != ShowSlowKind::Default {
                    kind.restore(ctx)?;
                    ctx.write_plain(" ")?;
                }
                count
            }
        };
        ctx.write_plainf(format_args!("{count}"))
    }
}

impl Pretty for ShowSlow {}

/// `ADMIN ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum AdminStmt {
    ShowDdl,
    ShowDdlJobs {
        job_number: Option<u64>,
        selection: Option<Expr>,
    },
    ShowNextRowId(Vec<TableName>),
    CheckTable(Vec<TableName>),
    CheckIndex {
        tables: Vec<TableName>,
        index: String,
    },
    RecoverIndex {
        tables: Vec<TableName>,
        index: String,
    },
    CleanupIndex {
        tables: Vec<TableName>,
        index: String,
    },
    CheckIndexRange {
        tables: Vec<TableName>,
        index: String,
        ranges: Vec<HandleRange>,
    },
    ChecksumTable(Vec<TableName>),
    CancelDdlJobs(Vec<i64>),
    ShowDdlJobQueries(Vec<i64>),
    ShowSlow(ShowSlow),
    ReloadExprPushdownBlacklist,
    ReloadOptRuleBlacklist,
    PluginsEnable(Vec<String>),
    PluginsDisable(Vec<String>),
    FlushBindings,
    CaptureBindings,
    EvolveBindings,
    ReloadBindings,
}

fn restore_job_ids(ctx: &mut RestoreCtx<'_>, ids: &[i64]) -> Result<(), RestoreError> {
    for (i, id) in ids.iter().enumerate() {
        if i != 0 {
            ctx.write_plain(", ")?;
        }
        ctx.write_plainf(format_args!("{id}"))?;
    }
    Ok(())
}

impl Restore for AdminStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        const TABLES: &str = "AdminStmt.Tables";
        ctx.write_keyword("ADMIN ")?;
        match self {
            AdminStmt::ShowDdl => ctx.write_keyword("SHOW DDL"),
            AdminStmt::ShowDdlJobs {
                job_number,
                selection,
            } => {
                ctx.write_keyword("SHOW DDL JOBS")?;
                if let Some(number) = job_number {
                    ctx.write_plainf(format_args!(" {number}"))?;
                }
                if let Some(selection) = selection {
                    ctx.write_keyword(" WHERE ")?;
                    selection.restore(ctx).annotate("AdminStmt.Where")?;
                }
                Ok(())
            }
            AdminStmt::ShowNextRowId(tables) => {
                ctx.write_keyword("SHOW ")?;
                restore_list(ctx, tables, ", ", TABLES)?;
                ctx.write_keyword(" NEXT_ROW_ID")
            }
            AdminStmt::CheckTable(tables) => {
                ctx.write_keyword("CHECK TABLE ")?;
                restore_list(ctx, tables, ", ", TABLES)
            }
            AdminStmt::CheckIndex { tables, index }
            | AdminStmt::RecoverIndex { tables, index }
            | AdminStmt::CleanupIndex { tables, index } => {
                ctx.write_keyword(match self {
                    AdminStmt::RecoverIndex { .. } => "RECOVER INDEX ",
                    AdminStmt::CleanupIndex { .. } => "CLEANUP INDEX ",
                    _ => "CHECK INDEX ",
                })?;
                restore_list(ctx, tables, ", ", TABLES)?;
                ctx.write_plainf(format_args!(" {index}"))
            }
            AdminStmt::CheckIndexRange {
                tables,
                index,
                ranges,
            } => {
                ctx.write_keyword("CHECK INDEX ")?;
                restore_list(ctx, tables, ", ", TABLES)?;
                ctx.write_plainf(format_args!(" {index}"))?;
                if !ranges.is_empty() {
                    ctx.write_plain(" ")?;
                    for (i, range) in ranges.iter().enumerate() {
                        if i != 0 {
                            ctx.write_plain(", ")?;
                        }
                        ctx.write_plainf(format_args!("({},{})", range.begin, range.end))?;
                    }
                }
                Ok(())
            }
            AdminStmt::ChecksumTable(tables) => {
                ctx.write_keyword("CHECKSUM TABLE ")?;
                restore_list(ctx, tables, ", ", TABLES)
            }
            AdminStmt::CancelDdlJobs(ids) => {
                ctx.write_keyword("CANCEL DDL JOBS ")?;
                restore_job_ids(ctx, ids)
            }
            AdminStmt::ShowDdlJobQueries(ids) => {
                ctx.write_keyword("SHOW DDL JOB QUERIES ")?;
                restore_job_ids(ctx, ids)
            }
            AdminStmt::ShowSlow(slow) => {
                ctx.write_keyword("SHOW SLOW ")?;
                slow.restore(ctx).annotate("AdminStmt.ShowSlow")
            }
            AdminStmt::ReloadExprPushdownBlacklist => {
                ctx.write_keyword("RELOAD EXPR_PUSHDOWN_BLACKLIST")
            }
            AdminStmt::ReloadOptRuleBlacklist => ctx.write_keyword("RELOAD OPT_RULE_BLACKLIST"),
            AdminStmt::PluginsEnable(plugins) => {
                ctx.write_keyword("PLUGINS ENABLE")?;
                restore_plain_list(ctx, plugins)
            }
            AdminStmt::PluginsDisable(plugins) => {
                ctx.write_keyword("PLUGINS DISABLE")?;
                restore_plain_list(ctx, plugins)
            }
            AdminStmt::FlushBindings => ctx.write_keyword("FLUSH BINDINGS"),
            AdminStmt::CaptureBindings => ctx.write_keyword("CAPTURE BINDINGS"),
            AdminStmt::EvolveBindings => ctx.write_keyword("EVOLVE BINDINGS"),
            AdminStmt::ReloadBindings => ctx.write_keyword("RELOAD BINDINGS"),
        }
    }
}

impl Pretty for AdminStmt {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ShutdownStmt;

impl Restore for ShutdownStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SHUTDOWN")
    }
}

impl Pretty for ShutdownStmt {}

/// `BINLOG 'base64 event'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct BinlogStmt {
    pub event: String,
}

impl Restore for BinlogStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("BINLOG ")?;
        ctx.write_string(&self.event)
    }
}

impl Pretty for BinlogStmt {}

/// `CHANGE PUMP TO NODE_STATE ='paused' FOR NODE_ID 'id'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ChangeStmt {
    /// `PUMP` or `DRAINER`
    pub node_type: String,
    pub state: String,
    pub node_id: String,
}

impl Restore for ChangeStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CHANGE ")?;
        ctx.write_keyword(&self.node_type)?;
        ctx.write_keyword(" TO NODE_STATE ")?;
        ctx.write_plain("=")?;
        ctx.write_string(&self.state)?;
        ctx.write_keyword(" FOR NODE_ID ")?;
        ctx.write_string(&self.node_id)
    }
}

impl Pretty for ChangeStmt {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AlterInstanceStmt {
    pub reload_tls: bool,
    pub no_rollback_on_error: bool,
}

impl Restore for AlterInstanceStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ALTER INSTANCE")?;
        if self.reload_tls {
            ctx.write_keyword(" RELOAD TLS")?;
        }
        if self.no_rollback_on_error {
            ctx.write_keyword(" NO ROLLBACK ON ERROR")?;
        }
        Ok(())
    }
}

impl Pretty for AlterInstanceStmt {}

fn restore_binding_scope(ctx: &mut RestoreCtx<'_>, global: bool) -> Result<(), RestoreError> {
    ctx.write_keyword(if global { "GLOBAL " } else { "SESSION " })?;
    ctx.write_keyword("BINDING FOR ")
}

/// `CREATE [GLOBAL|SESSION] BINDING FOR <stmt> USING <hinted stmt>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateBindingStmt {
    pub global: bool,
    pub origin: Box<Statement>,
    pub hinted: Box<Statement>,
}

impl Restore for CreateBindingStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CREATE ")?;
        restore_binding_scope(ctx, self.global)?;
        self.origin
            .restore(ctx)
            .annotate("CreateBindingStmt.OriginSel")?;
        ctx.write_keyword(" USING ")?;
        self.hinted
            .restore(ctx)
            .annotate("CreateBindingStmt.HintedSel")
    }
}

impl Pretty for CreateBindingStmt {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        ctx.write_keyword("CREATE ")?;
        restore_binding_scope(ctx, self.global)?;
        self.origin
            .pretty(ctx, level, indent, indent_char)
            .annotate("CreateBindingStmt.OriginSel")?;
        ctx.write_newline(level, indent, indent_char)?;
        ctx.write_keyword("USING ")?;
        self.hinted
            .pretty(ctx, level, indent, indent_char)
            .annotate("CreateBindingStmt.HintedSel")
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropBindingStmt {
    pub global: bool,
    pub origin: Box<Statement>,
    pub hinted: Option<Box<Statement>>,
}

impl Restore for DropBindingStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("DROP ")?;
        restore_binding_scope(ctx, self.global)?;
        self.origin
            .restore(ctx)
            .annotate("DropBindingStmt.OriginSel")?;
        if let Some(hinted) = &self.hinted {
            ctx.write_keyword(" USING ")?;
            hinted.restore(ctx).annotate("DropBindingStmt.HintedSel")?;
        }
        Ok(())
    }
}

impl Pretty for DropBindingStmt {}

/// `MAX_IDXNUM [PER_TABLE n] [PER_DB n]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct MaxIndexNumClause {
    pub per_table: Option<u64>,
    pub per_db: Option<u64>,
}

impl Restore for MaxIndexNumClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(" MAX_IDXNUM")?;
        if let Some(per_table) = self.per_table {
            ctx.write_keyword(" PER_TABLE ")?;
            ctx.write_plainf(format_args!("{per_table}"))?;
        }
        if let Some(per_db) = self.per_db {
            ctx.write_keyword(" PER_DB ")?;
            ctx.write_plainf(format_args!("{per_db}"))?;
        }
        Ok(())
    }
}

impl Pretty for MaxIndexNumClause {}

/// `INDEX ADVISE [LOCAL] INFILE 'path' ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct IndexAdviseStmt {
    pub local: bool,
    pub path: String,
    pub max_minutes: Option<u64>,
    pub max_index_num: Option<MaxIndexNumClause>,
    pub lines: LinesClause,
}

impl Restore for IndexAdviseStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("INDEX ADVISE ")?;
        if self.local {
            ctx.write_keyword("LOCAL ")?;
        }
        ctx.write_keyword("INFILE ")?;
        ctx.write_string(&self.path)?;
        if let Some(minutes) = self.max_minutes {
            ctx.write_keyword(" MAX_MINUTES ")?;
            ctx.write_plainf(format_args!("{minutes}"))?;
        }
        if let Some(max_index_num) = &self.max_index_num {
            max_index_num.restore(ctx)?;
        }
        self.lines.restore(ctx).annotate("IndexAdviseStmt.LinesInfo")
    }
}

impl Pretty for IndexAdviseStmt {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Query, SelectItem, SelectStmt, Value};

    fn select_one() -> Statement {
        Statement::Query(Query::from(SelectStmt {
            fields: vec![SelectItem::expr(Expr::value(1))],
            ..Default::default()
        }))
    }

    #[test]
    fn restore_explain_forms() {
        let explain = ExplainStmt::new(select_one());
        assert_eq!(
            explain.to_restored_sql().unwrap(),
            "EXPLAIN FORMAT = 'row' SELECT 1"
        );

        let mut show = ShowStmt::new(ShowKind::Columns);
        show.table = Some(TableName::new("t"));
        show.column = Some("c".into());
        let desc = ExplainStmt::new(Statement::Show(show));
        assert_eq!(desc.to_restored_sql().unwrap(), "DESC t c");

        let analyze = ExplainStmt {
            analyze: true,
            ..ExplainStmt::new(select_one())
        };
        assert_eq!(
            analyze.to_restored_sql().unwrap(),
            "EXPLAIN ANALYZE SELECT 1"
        );

        let for_conn = ExplainForStmt {
            format: "row".into(),
            connection_id: 123,
        };
        assert_eq!(
            for_conn.to_restored_sql().unwrap(),
            "EXPLAIN FORMAT = 'row' FOR CONNECTION 123"
        );
    }

    #[test]
    fn restore_prepared_statements() {
        let prepare = PrepareStmt {
            name: "s1".into(),
            source: PrepareSource::Text("SELECT ?".into()),
        };
        assert_eq!(
            prepare.to_restored_sql().unwrap(),
            "PREPARE s1 FROM 'SELECT ?'"
        );

        let execute = ExecuteStmt {
            name: "s1".into(),
            using: vec![
                Expr::Variable(Variable {
                    name: "a".into(),
                    is_system: false,
                    explicit_scope: None,
                    value: None,
                }),
                Expr::Variable(Variable {
                    name: "b".into(),
                    is_system: false,
                    explicit_scope: None,
                    value: None,
                }),
            ],
        };
        assert_eq!(execute.to_restored_sql().unwrap(), "EXECUTE s1 USING @a,@b");

        let deallocate = DeallocateStmt { name: "s1".into() };
        assert_eq!(
            deallocate.to_restored_sql().unwrap(),
            "DEALLOCATE PREPARE s1"
        );
    }

    #[test]
    fn restore_transactions() {
        assert_eq!(
            BeginStmt::default().to_restored_sql().unwrap(),
            "START TRANSACTION"
        );
        let pessimistic = BeginStmt {
            mode: Some(TxnMode::Pessimistic),
            ..Default::default()
        };
        assert_eq!(
            pessimistic.to_restored_sql().unwrap(),
            "BEGIN PESSIMISTIC"
        );
        let stale = BeginStmt {
            mode: None,
            read_only: true,
            bound: Some(TimestampBound::ExactStaleness(Expr::value("00:00:05"))),
        };
        assert_eq!(
            stale.to_restored_sql().unwrap(),
            "START TRANSACTION READ ONLY WITH TIMESTAMP BOUND EXACT STALENESS '00:00:05'"
        );
        let misplaced = BeginStmt {
            bound: Some(TimestampBound::Strong),
            ..Default::default()
        };
        assert!(misplaced.to_restored_sql().unwrap_err().is_malformed());

        let commit = CommitStmt {
            completion: Some(CompletionType::Chain),
        };
        assert_eq!(commit.to_restored_sql().unwrap(), "COMMIT AND CHAIN");
        let rollback = RollbackStmt {
            completion: Some(CompletionType::Release),
        };
        assert_eq!(rollback.to_restored_sql().unwrap(), "ROLLBACK RELEASE");
    }

    #[test]
    fn restore_set_variants() {
        let set = SetStmt {
            variables: vec![
                VariableAssignment::system("autocommit", true, Expr::value(1)),
                VariableAssignment::user("x", Expr::value("a")),
                VariableAssignment {
                    target: AssignmentTarget::Names,
                    value: Expr::value("utf8mb4"),
                    collate: Some(Expr::value("utf8mb4_bin")),
                },
            ],
        };
        assert_eq!(
            set.to_restored_sql().unwrap(),
            "SET @@GLOBAL.autocommit=1, @x='a', NAMES 'utf8mb4' COLLATE 'utf8mb4_bin'"
        );
    }

    #[test]
    fn restore_flush_and_kill() {
        let flush = FlushStmt {
            no_write_to_binlog: true,
            target: FlushTarget::Tables {
                tables: vec![TableName::new("t1"), TableName::new("t2")],
                read_lock: true,
            },
        };
        assert_eq!(
            flush.to_restored_sql().unwrap(),
            "FLUSH NO_WRITE_TO_BINLOG TABLES t1, t2 WITH READ LOCK"
        );
        let logs = FlushStmt {
            no_write_to_binlog: false,
            target: FlushTarget::Logs(LogType::Slow),
        };
        assert_eq!(logs.to_restored_sql().unwrap(), "FLUSH SLOW LOGS");

        let kill = KillStmt {
            query: true,
            connection_id: 7,
            tidb_extension: true,
        };
        assert_eq!(kill.to_restored_sql().unwrap(), "KILL TIDB QUERY 7");
    }

    #[test]
    fn restore_show_kinds() {
        let tables = ShowStmt {
            full: true,
            db_name: Some("db".into()),
            ..ShowStmt::new(ShowKind::Tables)
        }
        .with_filter(ShowFilter::Like(Expr::value("t%")));
        assert_eq!(
            tables.to_restored_sql().unwrap(),
            "SHOW FULL TABLES IN db LIKE 't%'"
        );

        let variables = ShowStmt {
            global_scope: true,
            ..ShowStmt::new(ShowKind::Variables)
        }
        .with_filter(ShowFilter::Where(Expr::binary(
            Expr::column("variable_name"),
            crate::ast::BinaryOperator::Eq,
            Expr::value("autocommit"),
        )));
        assert_eq!(
            variables.to_restored_sql().unwrap(),
            "SHOW GLOBAL VARIABLES WHERE variable_name='autocommit'"
        );

        let grants = ShowStmt {
            user: Some(UserIdentity::new("u1", "localhost")),
            roles: vec![RoleIdentity::new("r1", ""), RoleIdentity::new("r2", "")],
            ..ShowStmt::new(ShowKind::Grants)
        };
        assert_eq!(
            grants.to_restored_sql().unwrap(),
            "SHOW GRANTS FOR u1@localhost USING r1, r2"
        );

        let profile = ShowStmt {
            profile_types: vec![ProfileType::Cpu, ProfileType::BlockIo],
            profile_query: Some(2),
            profile_limit: Some(Limit {
                count: Expr::value(Value::Int(1)),
                offset: None,
            }),
            ..ShowStmt::new(ShowKind::Profile)
        };
        assert_eq!(
            profile.to_restored_sql().unwrap(),
            "SHOW PROFILE CPU, BLOCK IO FOR QUERY 2 LIMIT 1"
        );

        let regions = ShowStmt {
            table: Some(TableName::new("t")),
            index_name: Some("idx".into()),
            ..ShowStmt::new(ShowKind::Regions)
        };
        assert_eq!(
            regions.to_restored_sql().unwrap(),
            "SHOW TABLE t INDEX idx REGIONS"
        );
    }

    #[test]
    fn show_without_required_table_is_malformed() {
        let err = ShowStmt::new(ShowKind::CreateTable)
            .to_restored_sql()
            .unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "malformed tree: SHOW CREATE TABLE without a table"
        );
    }

    #[test]
    fn restore_admin() {
        let jobs = AdminStmt::ShowDdlJobs {
            job_number: Some(10),
            selection: None,
        };
        assert_eq!(jobs.to_restored_sql().unwrap(), "ADMIN SHOW DDL JOBS 10");

        let range = AdminStmt::CheckIndexRange {
            tables: vec![TableName::new("t")],
            index: "idx".into(),
            ranges: vec![
                HandleRange { begin: 1, end: 2 },
                HandleRange { begin: 5, end: 9 },
            ],
        };
        assert_eq!(
            range.to_restored_sql().unwrap(),
            "ADMIN CHECK INDEX t idx (1,2), (5,9)"
        );

        let slow = AdminStmt::ShowSlow(ShowSlow::Top {
            kind: ShowSlowKind::Internal,
            count: 3,
        });
        assert_eq!(
            slow.to_restored_sql().unwrap(),
            "ADMIN SHOW SLOW TOP INTERNAL 3"
        );

        let cancel = AdminStmt::CancelDdlJobs(vec![1, 2]);
        assert_eq!(cancel.to_restored_sql().unwrap(), "ADMIN CANCEL DDL JOBS 1, 2");

        let plugins = AdminStmt::PluginsEnable(vec!["audit".into(), "whitelist".into()]);
        assert_eq!(
            plugins.to_restored_sql().unwrap(),
            "ADMIN PLUGINS ENABLE audit, whitelist"
        );
    }

    #[test]
    fn restore_bindings_and_advise() {
        let binding = CreateBindingStmt {
            global: true,
            origin: Box::new(select_one()),
            hinted: Box::new(select_one()),
        };
        assert_eq!(
            binding.to_restored_sql().unwrap(),
            "CREATE GLOBAL BINDING FOR SELECT 1 USING SELECT 1"
        );

        let drop = DropBindingStmt {
            global: false,
            origin: Box::new(select_one()),
            hinted: None,
        };
        assert_eq!(
            drop.to_restored_sql().unwrap(),
            "DROP SESSION BINDING FOR SELECT 1"
        );

        let advise = IndexAdviseStmt {
            local: true,
            path: "/tmp/q.sql".into(),
            max_minutes: Some(3),
            max_index_num: Some(MaxIndexNumClause {
                per_table: Some(4),
                per_db: None,
            }),
            lines: LinesClause {
                starting: String::new(),
                terminated: ";".into(),
            },
        };
        assert_eq!(
            advise.to_restored_sql().unwrap(),
            "INDEX ADVISE LOCAL INFILE '/tmp/q.sql' MAX_MINUTES 3 MAX_IDXNUM PER_TABLE 4 \
             LINES TERMINATED BY ';'"
        );
        assert_eq!(ShutdownStmt.to_restored_sql().unwrap(), "SHUTDOWN");
    }

    #[test]
    fn trace_writes_non_default_format() {
        let mut trace = TraceStmt::new(select_one());
        assert_eq!(trace.to_restored_sql().unwrap(), "TRACE SELECT 1");
        trace.format = "row".into();
        assert_eq!(
            trace.to_restored_sql().unwrap(),
            "TRACE FORMAT = 'row' SELECT 1"
        );
    }

    #[test]
    fn restore_cluster_admin() {
        let by_type = SetConfigStmt {
            target: ConfigTarget::Type("tikv".into()),
            name: "split.qps-threshold".into(),
            value: Expr::value(1000),
        };
        assert_eq!(
            by_type.to_restored_sql().unwrap(),
            "SET CONFIG TIKV SPLIT.QPS-THRESHOLD = 1000"
        );
        let by_instance = SetConfigStmt {
            target: ConfigTarget::Instance("127.0.0.1:20160".into()),
            name: "log.level".into(),
            value: Expr::value("warn"),
        };
        assert_eq!(
            by_instance.to_restored_sql().unwrap(),
            "SET CONFIG '127.0.0.1:20160' LOG.LEVEL = 'warn'"
        );

        let change = ChangeStmt {
            node_type: "pump".into(),
            state: "paused".into(),
            node_id: "node-1".into(),
        };
        assert_eq!(
            change.to_restored_sql().unwrap(),
            "CHANGE PUMP TO NODE_STATE ='paused' FOR NODE_ID 'node-1'"
        );

        let alter = AlterInstanceStmt {
            reload_tls: true,
            no_rollback_on_error: true,
        };
        assert_eq!(
            alter.to_restored_sql().unwrap(),
            "ALTER INSTANCE RELOAD TLS NO ROLLBACK ON ERROR"
        );
        assert_eq!(
            AlterInstanceStmt::default().to_restored_sql().unwrap(),
            "ALTER INSTANCE"
        );
    }
}
