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

mod restore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::{
    AggregateFunc, BinaryOperator, Cast, ColumnName, FuncCall, GetFormatSelector, Query,
    TimeUnit, TrimDirection, UnaryOperator, Value, WindowFunc,
};

/// An SQL expression of any type.
///
/// Operator precedence is carried by the tree shape: the renderer never
/// adds parentheses on its own, so a parenthesized operand must be an
/// explicit [`Expr::Nested`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut), visit(with = "Expr"))]
pub enum Expr {
    /// A literal value, such as string, number or NULL
    Value(Value),
    /// A `?` parameter marker with its position in the statement
    ParamMarker(usize),
    /// Column reference, e.g. `t.c`
    Column(ColumnName),
    /// `<expr> [ NOT ] BETWEEN <low> AND <high>`
    Between(Between),
    /// Binary operation e.g. `1 + 1` or `foo > bar`
    BinaryOp(BinaryOp),
    /// Unary operation e.g. `NOT foo`
    UnaryOp(UnaryOp),
    /// `CASE [<operand>] WHEN <condition> THEN <result> ... [ELSE <result>] END`
    Case(Case),
    /// A parenthesized subquery `(SELECT ...)`
    Subquery(Box<Query>),
    /// `a > ALL (SELECT ...)`, `a = ANY (SELECT ...)`
    CompareSubquery(CompareSubquery),
    /// `DEFAULT` or `DEFAULT(col)`
    Default(Option<ColumnName>),
    /// `[ NOT ] EXISTS (SELECT ...)`
    Exists(Exists),
    /// `[ NOT ] IN (val1, val2, ...)`
    InList(InList),
    /// `[ NOT ] IN (SELECT ...)`
    InSubquery(InSubquery),
    /// `IS [ NOT ] NULL`
    IsNull { expr: Box<Expr>, negated: bool },
    /// `IS [ NOT ] TRUE` and `IS [ NOT ] FALSE`
    IsTruth {
        expr: Box<Expr>,
        negated: bool,
        value: bool,
    },
    /// `[ NOT ] LIKE <pattern> [ ESCAPE <char> ]`
    Like(Like),
    /// Nested expression e.g. `(foo > bar)` or `(1)`
    Nested(Box<Expr>),
    /// Positional reference in `GROUP BY 1`
    Position(usize),
    /// `[ NOT ] REGEXP <pattern>`
    Regexp(Regexp),
    /// `ROW(a, b)`
    Row(Vec<Expr>),
    /// `VALUES(col)` inside `ON DUPLICATE KEY UPDATE`
    Values(ColumnName),
    /// `@var`, `@@session.var`, `@var := expr`
    Variable(Variable),
    /// `MAXVALUE` in range partition bounds
    MaxValue,
    /// `MATCH (cols) AGAINST (expr [modifier])`
    MatchAgainst(MatchAgainst),
    /// `expr COLLATE collation`
    Collate { expr: Box<Expr>, collation: String },
    /// Scalar function call e.g. `LEFT(foo, 5)`
    Function(FuncCall),
    /// `CAST`, `CONVERT` and `BINARY`
    Cast(Cast),
    /// `BOTH`, `LEADING` or `TRAILING` inside `TRIM`
    TrimDirection(TrimDirection),
    /// Unit of an `INTERVAL` or `EXTRACT`
    TimeUnit(TimeUnit),
    /// First argument of `GET_FORMAT`
    GetFormatSelector(GetFormatSelector),
    /// Aggregate call such as `COUNT(DISTINCT a)`
    Aggregate(AggregateFunc),
    /// Window function call with its `OVER` clause
    Window(WindowFunc),
}

impl Expr {
    pub fn column(name: &str) -> Self {
        Expr::Column(ColumnName::new(name))
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Value(value.into())
    }

    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOperator, expr: Expr) -> Self {
        Expr::UnaryOp(UnaryOp {
            op,
            expr: Box::new(expr),
        })
    }

    pub fn nested(expr: Expr) -> Self {
        Expr::Nested(Box::new(expr))
    }

    /// Whether the expression is a literal or a parameter marker.
    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Value(_) | Expr::ParamMarker(_))
    }
}

/// `<expr> [ NOT ] BETWEEN <low> AND <high>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Between {
    pub expr: Box<Expr>,
    pub negated: bool,
    pub low: Box<Expr>,
    pub high: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct BinaryOp {
    pub left: Box<Expr>,
    pub op: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Case {
    pub operand: Option<Box<Expr>>,
    pub when_clauses: Vec<WhenClause>,
    pub else_result: Option<Box<Expr>>,
}

/// `WHEN <condition> THEN <result>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct WhenClause {
    pub condition: Expr,
    pub result: Expr,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct CompareSubquery {
    pub left: Box<Expr>,
    pub op: BinaryOperator,
    /// `ALL` when true, `ANY` otherwise
    pub all: bool,
    /// Usually an [`Expr::Subquery`]
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Exists {
    pub subquery: Box<Expr>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct InList {
    pub expr: Box<Expr>,
    pub list: Vec<Expr>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct InSubquery {
    pub expr: Box<Expr>,
    pub subquery: Box<Query>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Like {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub negated: bool,
    /// Written only when it differs from the default `\`.
    pub escape: char,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Regexp {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub negated: bool,
}

/// A user variable (`@name`) or a system variable (`@@[scope.]name`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Variable {
    pub name: String,
    pub is_system: bool,
    /// Scope written explicitly, `GLOBAL` when true
    pub explicit_scope: Option<bool>,
    /// Assigned value for `@name := expr`
    pub value: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct MatchAgainst {
    pub columns: Vec<ColumnName>,
    pub against: Box<Expr>,
    pub boolean_mode: bool,
    pub query_expansion: bool,
}
