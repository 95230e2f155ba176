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

//! AST types for accounts, roles and privileges: `CREATE USER`, `GRANT`,
//! `REVOKE`, `SET ROLE` and friends.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::functions::keyword_enum;
use super::{ColumnName, Ident};
use crate::format::{restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError};

/// An account, `user@host` or `CURRENT_USER`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UserIdentity {
    pub username: String,
    pub hostname: String,
    pub current_user: bool,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            current_user: false,
        }
    }

    pub fn current_user() -> Self {
        Self {
            current_user: true,
            ..Default::default()
        }
    }
}

impl Restore for UserIdentity {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.current_user {
            return ctx.write_keyword("CURRENT_USER");
        }
        restore_account(ctx, &self.username, &self.hostname)
    }
}

impl Pretty for UserIdentity {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RoleIdentity {
    pub username: String,
    pub hostname: String,
}

impl RoleIdentity {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
        }
    }
}

impl Restore for RoleIdentity {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        restore_account(ctx, &self.username, &self.hostname)
    }
}

impl Pretty for RoleIdentity {}

fn restore_account(
    ctx: &mut RestoreCtx<'_>,
    username: &str,
    hostname: &str,
) -> Result<(), RestoreError> {
    ctx.write_name(username)?;
    if !hostname.is_empty() {
        ctx.write_plain("@")?;
        ctx.write_name(hostname)?;
    }
    Ok(())
}

/// `IDENTIFIED BY ...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum AuthOption {
    /// `IDENTIFIED BY 'secret'`
    AuthString(String),
    /// `IDENTIFIED BY PASSWORD '*hash'`
    HashString(String),
}

impl Restore for AuthOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("IDENTIFIED BY ")?;
        match self {
            AuthOption::AuthString(value) => ctx.write_string(value),
            AuthOption::HashString(value) => {
                ctx.write_keyword("PASSWORD ")?;
                ctx.write_string(value)
            }
        }
    }
}

impl Pretty for AuthOption {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UserSpec {
    pub user: UserIdentity,
    pub auth: Option<AuthOption>,
}

impl UserSpec {
    pub fn new(user: UserIdentity) -> Self {
        Self { user, auth: None }
    }
}

impl Restore for UserSpec {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.user.restore(ctx).annotate("UserSpec.User")?;
        if let Some(auth) = &self.auth {
            ctx.write_plain(" ")?;
            auth.restore(ctx).annotate("UserSpec.AuthOpt")?;
        }
        Ok(())
    }
}

impl Pretty for UserSpec {}

/// One item of a `REQUIRE` clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum TlsOption {
    None,
    Ssl,
    X509,
    Cipher(String),
    Issuer(String),
    San(String),
    Subject(String),
}

impl Restore for TlsOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let (keyword, value) = match self {
            TlsOption::None => return ctx.write_keyword("NONE"),
            TlsOption::Ssl => return ctx.write_keyword("SSL"),
            TlsOption::X509 => return ctx.write_keyword("X509"),
            TlsOption::Cipher(value) => ("CIPHER ", value),
            TlsOption::Issuer(value) => ("ISSUER ", value),
            TlsOption::San(value) => ("SAN ", value),
            TlsOption::Subject(value) => ("SUBJECT ", value),
        };
        ctx.write_keyword(keyword)?;
        ctx.write_string(value)
    }
}

impl Pretty for TlsOption {}

keyword_enum! {
    /// Per-account resource limit
    pub enum ResourceKind {
        MaxQueriesPerHour = 1 => "MAX_QUERIES_PER_HOUR",
        MaxUpdatesPerHour = 2 => "MAX_UPDATES_PER_HOUR",
        MaxConnectionsPerHour = 3 => "MAX_CONNECTIONS_PER_HOUR",
        MaxUserConnections = 4 => "MAX_USER_CONNECTIONS",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct ResourceOption {
    pub kind: ResourceKind,
    pub count: u64,
}

impl Restore for ResourceOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.kind.restore(ctx)?;
        ctx.write_plainf(format_args!(" {}", self.count))
    }
}

impl Pretty for ResourceOption {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum PasswordOrLockOption {
    PasswordExpire,
    PasswordExpireDefault,
    PasswordExpireNever,
    /// `PASSWORD EXPIRE INTERVAL n DAY`
    PasswordExpireInterval(u64),
    AccountLock,
    AccountUnlock,
}

impl Restore for PasswordOrLockOption {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            PasswordOrLockOption::PasswordExpire => ctx.write_keyword("PASSWORD EXPIRE"),
            PasswordOrLockOption::PasswordExpireDefault => {
                ctx.write_keyword("PASSWORD EXPIRE DEFAULT")
            }
            PasswordOrLockOption::PasswordExpireNever => ctx.write_keyword("PASSWORD EXPIRE NEVER"),
            PasswordOrLockOption::PasswordExpireInterval(days) => {
                ctx.write_keyword("PASSWORD EXPIRE INTERVAL")?;
                ctx.write_plainf(format_args!(" {days}"))?;
                ctx.write_keyword(" DAY")
            }
            PasswordOrLockOption::AccountLock => ctx.write_keyword("ACCOUNT LOCK"),
            PasswordOrLockOption::AccountUnlock => ctx.write_keyword("ACCOUNT UNLOCK"),
        }
    }
}

impl Pretty for PasswordOrLockOption {}

/// Writes the ` REQUIRE ... WITH ... ` tail shared by `CREATE USER` and
/// `ALTER USER`.
fn restore_account_options(
    ctx: &mut RestoreCtx<'_>,
    tls_options: &[TlsOption],
    resource_options: &[ResourceOption],
    password_or_lock_options: &[PasswordOrLockOption],
    node: &'static str,
) -> Result<(), RestoreError> {
    if !tls_options.is_empty() {
        ctx.write_keyword(" REQUIRE ")?;
        for (i, option) in tls_options.iter().enumerate() {
            if i != 0 {
                ctx.write_keyword(" AND ")?;
            }
            option
                .restore(ctx)
                .annotate_with(|| format!("{node}.TLSOptions[{i}]"))?;
        }
    }
    if !resource_options.is_empty() {
        ctx.write_keyword(" WITH")?;
    }
    for (i, option) in resource_options.iter().enumerate() {
        ctx.write_plain(" ")?;
        option
            .restore(ctx)
            .annotate_with(|| format!("{node}.ResourceOptions[{i}]"))?;
    }
    for (i, option) in password_or_lock_options.iter().enumerate() {
        ctx.write_plain(" ")?;
        option
            .restore(ctx)
            .annotate_with(|| format!("{node}.PasswordOrLockOptions[{i}]"))?;
    }
    Ok(())
}

/// `CREATE USER` or `CREATE ROLE`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CreateUserStmt {
    pub is_role: bool,
    pub if_not_exists: bool,
    pub specs: Vec<UserSpec>,
    pub tls_options: Vec<TlsOption>,
    pub resource_options: Vec<ResourceOption>,
    pub password_or_lock_options: Vec<PasswordOrLockOption>,
}

impl Restore for CreateUserStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.is_role {
            ctx.write_keyword("CREATE ROLE ")?;
        } else {
            ctx.write_keyword("CREATE USER ")?;
        }
        if self.if_not_exists {
            ctx.write_keyword("IF NOT EXISTS ")?;
        }
        restore_list(ctx, &self.specs, ", ", "CreateUserStmt.Specs")?;
        restore_account_options(
            ctx,
            &self.tls_options,
            &self.resource_options,
            &self.password_or_lock_options,
            "CreateUserStmt",
        )
    }
}

impl Pretty for CreateUserStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AlterUserStmt {
    pub if_exists: bool,
    /// `ALTER USER USER() IDENTIFIED BY ...`
    pub current_auth: Option<AuthOption>,
    pub specs: Vec<UserSpec>,
    pub tls_options: Vec<TlsOption>,
    pub resource_options: Vec<ResourceOption>,
    pub password_or_lock_options: Vec<PasswordOrLockOption>,
}

impl Restore for AlterUserStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("ALTER USER ")?;
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        if let Some(auth) = &self.current_auth {
            ctx.write_keyword("USER")?;
            ctx.write_plain("() ")?;
            auth.restore(ctx).annotate("AlterUserStmt.CurrentAuth")?;
        }
        restore_list(ctx, &self.specs, ", ", "AlterUserStmt.Specs")?;
        restore_account_options(
            ctx,
            &self.tls_options,
            &self.resource_options,
            &self.password_or_lock_options,
            "AlterUserStmt",
        )
    }
}

impl Pretty for AlterUserStmt {}

/// `DROP USER` or `DROP ROLE`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct DropUserStmt {
    pub if_exists: bool,
    pub is_role: bool,
    pub users: Vec<UserIdentity>,
}

impl Restore for DropUserStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.is_role {
            ctx.write_keyword("DROP ROLE ")?;
        } else {
            ctx.write_keyword("DROP USER ")?;
        }
        if self.if_exists {
            ctx.write_keyword("IF EXISTS ")?;
        }
        restore_list(ctx, &self.users, ", ", "DropUserStmt.UserList")
    }
}

impl Pretty for DropUserStmt {}

keyword_enum! {
    /// A privilege named in `GRANT`/`REVOKE`
    pub enum PrivilegeType {
        All = 1 << 32 => "ALL",
        Alter = 1 << 13 => "ALTER",
        AlterRoutine = 1 << 23 => "ALTER ROUTINE",
        Create = 1 => "CREATE",
        CreateRole = 1 << 18 => "CREATE ROLE",
        CreateRoutine = 1 << 22 => "CREATE ROUTINE",
        CreateTmpTable = 1 << 20 => "CREATE TEMPORARY TABLES",
        CreateUser = 1 << 7 => "CREATE USER",
        CreateView = 1 << 16 => "CREATE VIEW",
        Config = 1 << 28 => "CONFIG",
        Delete = 1 << 4 => "DELETE",
        Drop = 1 << 9 => "DROP",
        DropRole = 1 << 19 => "DROP ROLE",
        Event = 1 << 24 => "EVENT",
        Execute = 1 << 14 => "EXECUTE",
        File = 1 << 27 => "FILE",
        Grant = 1 << 11 => "GRANT OPTION",
        Index = 1 << 15 => "INDEX",
        Insert = 1 << 2 => "INSERT",
        LockTables = 1 << 21 => "LOCK TABLES",
        Process = 1 << 10 => "PROCESS",
        References = 1 << 12 => "REFERENCES",
        Reload = 1 << 26 => "RELOAD",
        ReplicationClient = 1 << 30 => "REPLICATION CLIENT",
        ReplicationSlave = 1 << 31 => "REPLICATION SLAVE",
        Select = 1 << 1 => "SELECT",
        ShowDb = 1 << 5 => "SHOW DATABASES",
        ShowView = 1 << 17 => "SHOW VIEW",
        Shutdown = 1 << 25 => "SHUTDOWN",
        Super = 1 << 6 => "SUPER",
        Trigger = 1 << 8 => "TRIGGER",
        Update = 1 << 3 => "UPDATE",
        Usage = 0 => "USAGE",
    }
}

/// A privilege with an optional column list, `SELECT (a,b)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct PrivElem {
    pub privilege: PrivilegeType,
    pub columns: Vec<ColumnName>,
}

impl PrivElem {
    pub fn new(privilege: PrivilegeType) -> Self {
        Self {
            privilege,
            columns: vec![],
        }
    }
}

impl Restore for PrivElem {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.privilege.restore(ctx)?;
        if !self.columns.is_empty() {
            ctx.write_plain(" (")?;
            restore_list(ctx, &self.columns, ",", "PrivElem.Cols")?;
            ctx.write_plain(")")?;
        }
        Ok(())
    }
}

impl Pretty for PrivElem {}

keyword_enum! {
    /// Object kind written before the grant level, `ON TABLE db.t`
    pub enum ObjectType {
        Table = 1 => "TABLE",
        Function = 2 => "FUNCTION",
        Procedure = 3 => "PROCEDURE",
    }
}

/// What a privilege applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum GrantLevel {
    /// `*.*`
    Global,
    /// `db.*`, or `*` for the current database
    Db(Option<Ident>),
    /// `db.t` or `t`
    Table { db: Option<Ident>, table: Ident },
}

impl Restore for GrantLevel {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self {
            GrantLevel::Global => ctx.write_plain("*.*"),
            GrantLevel::Db(None) => ctx.write_plain("*"),
            GrantLevel::Db(Some(db)) => {
                ctx.write_name(db.as_str())?;
                ctx.write_plain(".*")
            }
            GrantLevel::Table { db, table } => {
                if let Some(db) = db {
                    ctx.write_name(db.as_str())?;
                    ctx.write_plain(".")?;
                }
                ctx.write_name(table.as_str())
            }
        }
    }
}

impl Pretty for GrantLevel {}

fn restore_privilege_target(
    ctx: &mut RestoreCtx<'_>,
    privs: &[PrivElem],
    object_type: Option<ObjectType>,
    level: &GrantLevel,
    node: &'static str,
) -> Result<(), RestoreError> {
    for (i, priv_elem) in privs.iter().enumerate() {
        if i != 0 {
            ctx.write_plain(", ")?;
        }
        priv_elem
            .restore(ctx)
            .annotate_with(|| format!("{node}.Privs[{i}]"))?;
    }
    ctx.write_keyword(" ON ")?;
    if let Some(object_type) = object_type {
        object_type.restore(ctx)?;
        ctx.write_plain(" ")?;
    }
    level.restore(ctx).annotate_with(|| format!("{node}.Level"))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct GrantStmt {
    pub privs: Vec<PrivElem>,
    pub object_type: Option<ObjectType>,
    pub level: GrantLevel,
    pub users: Vec<UserSpec>,
    pub tls_options: Vec<TlsOption>,
    pub with_grant: bool,
}

impl Restore for GrantStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("GRANT ")?;
        restore_privilege_target(ctx, &self.privs, self.object_type, &self.level, "GrantStmt")?;
        ctx.write_keyword(" TO ")?;
        restore_list(ctx, &self.users, ", ", "GrantStmt.Users")?;
        if !self.tls_options.is_empty() {
            ctx.write_keyword(" REQUIRE ")?;
            for (i, option) in self.tls_options.iter().enumerate() {
                if i != 0 {
                    ctx.write_keyword(" AND ")?;
                }
                option
                    .restore(ctx)
                    .annotate_with(|| format!("GrantStmt.TLSOptions[{i}]"))?;
            }
        }
        if self.with_grant {
            ctx.write_keyword(" WITH GRANT OPTION")?;
        }
        Ok(())
    }
}

impl Pretty for GrantStmt {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RevokeStmt {
    pub privs: Vec<PrivElem>,
    pub object_type: Option<ObjectType>,
    pub level: GrantLevel,
    pub users: Vec<UserSpec>,
}

impl Restore for RevokeStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("REVOKE ")?;
        restore_privilege_target(ctx, &self.privs, self.object_type, &self.level, "RevokeStmt")?;
        ctx.write_keyword(" FROM ")?;
        restore_list(ctx, &self.users, ", ", "RevokeStmt.Users")
    }
}

impl Pretty for RevokeStmt {}

/// `GRANT role TO user`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct GrantRoleStmt {
    pub roles: Vec<RoleIdentity>,
    pub users: Vec<UserIdentity>,
}

impl Restore for GrantRoleStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("GRANT ")?;
        restore_list(ctx, &self.roles, ", ", "GrantRoleStmt.Roles")?;
        ctx.write_keyword(" TO ")?;
        restore_list(ctx, &self.users, ", ", "GrantRoleStmt.Users")
    }
}

impl Pretty for GrantRoleStmt {}

/// `REVOKE role FROM user`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct RevokeRoleStmt {
    pub roles: Vec<RoleIdentity>,
    pub users: Vec<UserIdentity>,
}

impl Restore for RevokeRoleStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("REVOKE ")?;
        restore_list(ctx, &self.roles, ", ", "RevokeRoleStmt.Roles")?;
        ctx.write_keyword(" FROM ")?;
        restore_list(ctx, &self.users, ", ", "RevokeRoleStmt.Users")
    }
}

impl Pretty for RevokeRoleStmt {}

/// `SET PASSWORD [FOR user]='secret'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SetPwdStmt {
    pub user: Option<UserIdentity>,
    pub password: String,
}

impl Restore for SetPwdStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SET PASSWORD")?;
        if let Some(user) = &self.user {
            ctx.write_keyword(" FOR ")?;
            user.restore(ctx).annotate("SetPwdStmt.User")?;
        }
        ctx.write_plain("=")?;
        ctx.write_string(&self.password)
    }
}

impl Pretty for SetPwdStmt {}

keyword_enum! {
    /// Role selector of `SET ROLE` / `SET DEFAULT ROLE`
    pub enum SetRoleOption {
        Default = 0 => "DEFAULT",
        None = 1 => "NONE",
        All = 2 => "ALL",
        AllExcept = 3 => "ALL EXCEPT",
    }
}

fn restore_role_list(
    ctx: &mut RestoreCtx<'_>,
    roles: &[RoleIdentity],
    what: &'static str,
) -> Result<(), RestoreError> {
    for (i, role) in roles.iter().enumerate() {
        ctx.write_plain(" ")?;
        role.restore(ctx).annotate_with(|| format!("{what}[{i}]"))?;
        if i != roles.len() - 1 {
            ctx.write_plain(",")?;
        }
    }
    Ok(())
}

/// `SET ROLE`; `option` is `None` when only a role list is given
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SetRoleStmt {
    pub option: Option<SetRoleOption>,
    pub roles: Vec<RoleIdentity>,
}

impl Restore for SetRoleStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SET ROLE")?;
        if let Some(option) = self.option {
            ctx.write_plain(" ")?;
            option.restore(ctx)?;
        }
        restore_role_list(ctx, &self.roles, "SetRoleStmt.RoleList")
    }
}

impl Pretty for SetRoleStmt {}

/// `SET DEFAULT ROLE ... TO user`; only `NONE` and `ALL` are valid options
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct SetDefaultRoleStmt {
    pub option: Option<SetRoleOption>,
    pub roles: Vec<RoleIdentity>,
    pub users: Vec<UserIdentity>,
}

impl Restore for SetDefaultRoleStmt {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("SET DEFAULT ROLE")?;
        match self.option {
            Some(option @ (SetRoleOption::None | SetRoleOption::All)) => {
                ctx.write_plain(" ")?;
                option.restore(ctx)?;
            }
            Some(option) => {
                return Err(RestoreError::malformed(format!(
                    "SET DEFAULT ROLE does not accept {option}"
                )))
            }
            None => {}
        }
        restore_role_list(ctx, &self.roles, "SetDefaultRoleStmt.RoleList")?;
        ctx.write_plain(" TO")?;
        for (i, user) in self.users.iter().enumerate() {
            ctx.write_plain(" ")?;
            user.restore(ctx)
                .annotate_with(|| format!("SetDefaultRoleStmt.UserList[{i}]"))?;
            if i != self.users.len() - 1 {
                ctx.write_plain(",")?;
            }
        }
        Ok(())
    }
}

impl Pretty for SetDefaultRoleStmt {}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserIdentity {
        UserIdentity::new(name, "%")
    }

    #[test]
    fn restore_identities() {
        assert_eq!(user("root").to_restored_sql().unwrap(), "root@`%`");
        assert_eq!(
            UserIdentity::new("app", "").to_restored_sql().unwrap(),
            "app"
        );
        assert_eq!(
            UserIdentity::current_user().to_restored_sql().unwrap(),
            "CURRENT_USER"
        );
        assert_eq!(
            RoleIdentity::new("r1", "localhost").to_restored_sql().unwrap(),
            "r1@localhost"
        );
    }

    #[test]
    fn restore_create_user_with_options() {
        let stmt = CreateUserStmt {
            is_role: false,
            if_not_exists: true,
            specs: vec![UserSpec {
                user: user("u1"),
                auth: Some(AuthOption::AuthString("pw".into())),
            }],
            tls_options: vec![TlsOption::Ssl, TlsOption::Cipher("AES".into())],
            resource_options: vec![ResourceOption {
                kind: ResourceKind::MaxQueriesPerHour,
                count: 10,
            }],
            password_or_lock_options: vec![
                PasswordOrLockOption::PasswordExpireInterval(30),
                PasswordOrLockOption::AccountLock,
            ],
        };
        assert_eq!(
            stmt.to_restored_sql().unwrap(),
            "CREATE USER IF NOT EXISTS u1@`%` IDENTIFIED BY 'pw' REQUIRE SSL AND CIPHER 'AES' \
             WITH MAX_QUERIES_PER_HOUR 10 PASSWORD EXPIRE INTERVAL 30 DAY ACCOUNT LOCK"
        );
    }

    #[test]
    fn restore_alter_and_drop_user() {
        let alter = AlterUserStmt {
            if_exists: true,
            current_auth: Some(AuthOption::HashString("*ABC".into())),
            specs: vec![],
            tls_options: vec![],
            resource_options: vec![],
            password_or_lock_options: vec![],
        };
        assert_eq!(
            alter.to_restored_sql().unwrap(),
            "ALTER USER IF EXISTS USER() IDENTIFIED BY PASSWORD '*ABC'"
        );

        let drop = DropUserStmt {
            if_exists: false,
            is_role: true,
            users: vec![user("r1"), user("r2")],
        };
        assert_eq!(drop.to_restored_sql().unwrap(), "DROP ROLE r1@`%`, r2@`%`");
    }

    #[test]
    fn restore_grant_and_revoke() {
        let grant = GrantStmt {
            privs: vec![
                PrivElem {
                    privilege: PrivilegeType::Select,
                    columns: vec!["a".into(), "b".into()],
                },
                PrivElem::new(PrivilegeType::Insert),
            ],
            object_type: Some(ObjectType::Table),
            level: GrantLevel::Table {
                db: Some("db".into()),
                table: "t".into(),
            },
            users: vec![UserSpec::new(user("u1"))],
            tls_options: vec![],
            with_grant: true,
        };
        assert_eq!(
            grant.to_restored_sql().unwrap(),
            "GRANT SELECT (a,b), INSERT ON TABLE db.t TO u1@`%` WITH GRANT OPTION"
        );

        let revoke = RevokeStmt {
            privs: vec![PrivElem::new(PrivilegeType::All)],
            object_type: None,
            level: GrantLevel::Db(Some("db".into())),
            users: vec![UserSpec::new(user("u1"))],
        };
        assert_eq!(
            revoke.to_restored_sql().unwrap(),
            "REVOKE ALL ON db.* FROM u1@`%`"
        );

        let role = GrantRoleStmt {
            roles: vec![RoleIdentity::new("r1", "")],
            users: vec![user("u1")],
        };
        assert_eq!(role.to_restored_sql().unwrap(), "GRANT r1 TO u1@`%`");
    }

    #[test]
    fn restore_roles_and_passwords() {
        let set_role = SetRoleStmt {
            option: Some(SetRoleOption::AllExcept),
            roles: vec![RoleIdentity::new("r1", ""), RoleIdentity::new("r2", "")],
        };
        assert_eq!(set_role.to_restored_sql().unwrap(), "SET ROLE ALL EXCEPT r1, r2");

        let default_role = SetDefaultRoleStmt {
            option: None,
            roles: vec![RoleIdentity::new("r1", "")],
            users: vec![user("u1"), user("u2")],
        };
        assert_eq!(
            default_role.to_restored_sql().unwrap(),
            "SET DEFAULT ROLE r1 TO u1@`%`, u2@`%`"
        );

        let invalid = SetDefaultRoleStmt {
            option: Some(SetRoleOption::Default),
            ..default_role
        };
        assert!(invalid.to_restored_sql().unwrap_err().is_malformed());

        let pwd = SetPwdStmt {
            user: Some(user("u1")),
            password: "secret".into(),
        };
        assert_eq!(
            pwd.to_restored_sql().unwrap(),
            "SET PASSWORD FOR u1@`%`='secret'"
        );
    }
}
