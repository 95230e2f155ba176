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

//! # SQL restore for Rust
//!
//! An abstract syntax tree for MySQL-compatible SQL that renders itself back
//! into SQL text, either flat ([`Restore`](format::Restore)) or indented
//! ([`Pretty`](format::Pretty)).
//!
//! ```
//! use sqlrestore::ast::*;
//! use sqlrestore::format::{Pretty, Restore, RestoreFlags, RestoreOptions};
//!
//! let stmt = Statement::from(SelectStmt {
//!     fields: vec![SelectItem::expr(Expr::column("a"))],
//!     from: Some(Join::single(TableSource::table(TableName::new("t")))),
//!     selection: Some(Expr::binary(Expr::column("b"), BinaryOperator::Eq, Expr::value(1))),
//!     ..Default::default()
//! });
//!
//! assert_eq!(stmt.to_restored_sql().unwrap(), "SELECT a FROM t WHERE b=1");
//! assert_eq!(stmt.to_pretty_sql(2, " ").unwrap(), "SELECT \n  a\nFROM t\nWHERE b=1");
//!
//! let options = RestoreOptions::new().with_flags(
//!     RestoreFlags::KEYWORD_LOWERCASE | RestoreFlags::NAME_BACK_QUOTES,
//! );
//! assert_eq!(
//!     stmt.to_restored_sql_with(&options).unwrap(),
//!     "select `a` from `t` where `b`=1"
//! );
//! ```
//!
//! Rendering never panics: an unsupported construct or an inconsistent tree
//! comes back as a [`RestoreError`](format::RestoreError) whose breadcrumbs
//! name the path from the failing node up to the statement.
//!
//! With the `visitor` feature (on by default) every tree can be walked and
//! rewritten, see [`ast::Visitor`]. [`digest`] computes literal-insensitive
//! fingerprints of statements.
//!
//! With the `serde` feature every node implements `Serialize` and
//! `Deserialize`.

#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::large_enum_variant)]

// Allow proc-macros to find this crate
extern crate self as sqlrestore;

pub mod ast;
pub mod digest;
pub mod format;
pub mod keywords;
