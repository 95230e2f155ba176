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

//! Recursive visitors for ast Nodes. See [`Visitor`] for more details.

use crate::ast::{ColumnName, Expr, Join, Query, SelectStmt, Statement, TableName, TableSource};
use core::ops::ControlFlow;

/// A type that can be visited by a [`Visitor`]. See [`Visitor`] for
/// recursively visiting parsed SQL statements.
///
/// # Note
///
/// This trait should be automatically derived for sqlrestore AST nodes
/// using the [Visit](sqlrestore_derive::Visit) proc macro.
///
/// ```text
/// #[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
/// ```
pub trait Visit {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break>;
}

/// A type that can be visited by a [`VisitorMut`]. See [`VisitorMut`] for
/// recursively visiting and modifying statements.
///
/// # Note
///
/// This trait should be automatically derived for sqlrestore AST nodes
/// using the [VisitMut](sqlrestore_derive::VisitMut) proc macro.
pub trait VisitMut {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break>;
}

impl<T: Visit> Visit for Option<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        if let Some(s) = self {
            s.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Vec<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        for v in self {
            v.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Visit> Visit for Box<T> {
    fn visit<V: Visitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        T::visit(self, visitor)
    }
}

impl<T: VisitMut> VisitMut for Option<T> {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        if let Some(s) = self {
            s.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: VisitMut> VisitMut for Vec<T> {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        for v in self {
            v.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: VisitMut> VisitMut for Box<T> {
    fn visit<V: VisitorMut>(&mut self, visitor: &mut V) -> ControlFlow<V::Break> {
        T::visit(self, visitor)
    }
}

macro_rules! visit_noop {
    ($($t:ty),+) => {
        $(impl Visit for $t {
            fn visit<V: Visitor>(&self, _visitor: &mut V) -> ControlFlow<V::Break> {
               ControlFlow::Continue(())
            }
        })+
        $(impl VisitMut for $t {
            fn visit<V: VisitorMut>(&mut self, _visitor: &mut V) -> ControlFlow<V::Break> {
               ControlFlow::Continue(())
            }
        })+
    };
}

visit_noop!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f64, char, bool, String);

/// What to do after [`Visitor::enter`] returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enter {
    /// Walk the children, then call `leave`
    Descend,
    /// Go straight to `leave`
    SkipChildren,
}

/// A node as seen by [`Visitor::enter`] and [`Visitor::leave`]
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Statement(&'a Statement),
    Query(&'a Query),
    SelectStmt(&'a SelectStmt),
    Join(&'a Join),
    TableSource(&'a TableSource),
    TableName(&'a TableName),
    ColumnName(&'a ColumnName),
    Expr(&'a Expr),
}

/// A node as seen by [`VisitorMut::enter`] and [`VisitorMut::leave`].
///
/// Assigning through the reference replaces the node in its parent.
#[derive(Debug)]
pub enum NodeMut<'a> {
    Statement(&'a mut Statement),
    Query(&'a mut Query),
    SelectStmt(&'a mut SelectStmt),
    Join(&'a mut Join),
    TableSource(&'a mut TableSource),
    TableName(&'a mut TableName),
    ColumnName(&'a mut ColumnName),
    Expr(&'a mut Expr),
}

/// A visitor that can be used to walk an AST tree.
///
/// `enter` is invoked before a node's children and `leave` after them.
/// Returning [`Enter::SkipChildren`] from `enter` skips the children but
/// `leave` still runs. Returning [`ControlFlow::Break`] from either method
/// stops the walk and hands the value back to the caller.
///
/// # Example
/// ```
/// # use sqlrestore::ast::{Expr, Node, Statement, Visit, Visitor};
/// # use core::ops::ControlFlow;
/// // A structure that records the columns a statement reads
/// #[derive(Default)]
/// struct ColumnCollector {
///     columns: Vec<String>,
/// }
///
/// impl Visitor for ColumnCollector {
///     type Break = ();
///
///     fn leave(&mut self, node: Node<'_>) -> ControlFlow<()> {
///         if let Node::ColumnName(column) = node {
///             self.columns.push(column.name.to_string());
///         }
///         ControlFlow::Continue(())
///     }
/// }
///
/// let statement = Statement::from(sqlrestore::ast::SelectStmt {
///     fields: vec![sqlrestore::ast::SelectItem::expr(Expr::column("a"))],
///     ..Default::default()
/// });
/// let mut visitor = ColumnCollector::default();
/// statement.visit(&mut visitor);
/// assert_eq!(visitor.columns, vec!["a"]);
/// ```
pub trait Visitor {
    /// Type returned when the recursion returns early.
    type Break;

    /// Invoked for every node kind listed in [`Node`] before its children
    fn enter(&mut self, _node: Node<'_>) -> ControlFlow<Self::Break, Enter> {
        ControlFlow::Continue(Enter::Descend)
    }

    /// Invoked for every node kind listed in [`Node`] after its children
    fn leave(&mut self, _node: Node<'_>) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// A visitor that can be used to mutate an AST tree.
///
/// Same protocol as [`Visitor`]. A node replaced in `enter` has the new
/// value's children walked; a node replaced in `leave` is not walked again.
pub trait VisitorMut {
    /// Type returned when the recursion returns early.
    type Break;

    fn enter(&mut self, _node: NodeMut<'_>) -> ControlFlow<Self::Break, Enter> {
        ControlFlow::Continue(Enter::Descend)
    }

    fn leave(&mut self, _node: NodeMut<'_>) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

struct RelationVisitor<F>(F);

impl<E, F: FnMut(&TableName) -> ControlFlow<E>> Visitor for RelationVisitor<F> {
    type Break = E;

    fn enter(&mut self, node: Node<'_>) -> ControlFlow<E, Enter> {
        if let Node::TableName(table) = node {
            self.0(table)?;
        }
        ControlFlow::Continue(Enter::Descend)
    }
}

impl<E, F: FnMut(&mut TableName) -> ControlFlow<E>> VisitorMut for RelationVisitor<F> {
    type Break = E;

    fn leave(&mut self, node: NodeMut<'_>) -> ControlFlow<E> {
        if let NodeMut::TableName(table) = node {
            self.0(table)?;
        }
        ControlFlow::Continue(())
    }
}

/// Invokes the provided closure on all relations (e.g. table names) present in `v`
///
/// # Example
/// ```
/// # use sqlrestore::ast::{visit_relations, Join, SelectItem, SelectStmt, Statement, TableName, TableSource};
/// # use core::ops::ControlFlow;
/// let statement = Statement::from(SelectStmt {
///     fields: vec![SelectItem::wildcard()],
///     from: Some(Join::single(TableSource::table(TableName::new("foo")))),
///     ..Default::default()
/// });
/// let mut visited = vec![];
/// visit_relations(&statement, |relation| {
///     visited.push(relation.name.to_string());
///     ControlFlow::<()>::Continue(())
/// });
/// assert_eq!(visited, vec!["foo"]);
/// ```
pub fn visit_relations<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&TableName) -> ControlFlow<E>,
{
    let mut visitor = RelationVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

/// Invokes the provided closure with a mutable reference to all relations
/// (e.g. table names) present in `v`, after their children have been visited.
pub fn visit_relations_mut<V, E, F>(v: &mut V, f: F) -> ControlFlow<E>
where
    V: VisitMut,
    F: FnMut(&mut TableName) -> ControlFlow<E>,
{
    let mut visitor = RelationVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

struct ColumnVisitor<F>(F);

impl<E, F: FnMut(&ColumnName) -> ControlFlow<E>> Visitor for ColumnVisitor<F> {
    type Break = E;

    fn enter(&mut self, node: Node<'_>) -> ControlFlow<E, Enter> {
        if let Node::ColumnName(column) = node {
            self.0(column)?;
        }
        ControlFlow::Continue(Enter::Descend)
    }
}

/// Invokes the provided closure on all column references present in `v`
pub fn visit_columns<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&ColumnName) -> ControlFlow<E>,
{
    let mut visitor = ColumnVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

struct ExprVisitor<F>(F);

impl<E, F: FnMut(&Expr) -> ControlFlow<E>> Visitor for ExprVisitor<F> {
    type Break = E;

    fn enter(&mut self, node: Node<'_>) -> ControlFlow<E, Enter> {
        if let Node::Expr(expr) = node {
            self.0(expr)?;
        }
        ControlFlow::Continue(Enter::Descend)
    }
}

impl<E, F: FnMut(&mut Expr) -> ControlFlow<E>> VisitorMut for ExprVisitor<F> {
    type Break = E;

    fn leave(&mut self, node: NodeMut<'_>) -> ControlFlow<E> {
        if let NodeMut::Expr(expr) = node {
            self.0(expr)?;
        }
        ControlFlow::Continue(())
    }
}

/// Invokes the provided closure on all expressions (e.g. `1 + 2`) present in `v`
pub fn visit_expressions<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&Expr) -> ControlFlow<E>,
{
    let mut visitor = ExprVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

/// Invokes the provided closure iteratively with a mutable reference to all
/// expressions present in `v`, children first.
///
/// # Example
/// ```
/// # use sqlrestore::ast::{visit_expressions_mut, Expr, SelectItem, SelectStmt, Statement, Value};
/// # use sqlrestore::format::Restore;
/// # use core::ops::ControlFlow;
/// let mut statement = Statement::from(SelectStmt {
///     fields: vec![SelectItem::expr(Expr::value(1)), SelectItem::expr(Expr::column("a"))],
///     ..Default::default()
/// });
/// visit_expressions_mut(&mut statement, |expr| {
///     if let Expr::Value(Value::Int(n)) = expr {
///         let next = *n + 1;
///         *expr = Expr::value(next);
///     }
///     ControlFlow::<()>::Continue(())
/// });
/// assert_eq!(statement.to_restored_sql().unwrap(), "SELECT 2, a");
/// ```
pub fn visit_expressions_mut<V, E, F>(v: &mut V, f: F) -> ControlFlow<E>
where
    V: VisitMut,
    F: FnMut(&mut Expr) -> ControlFlow<E>,
{
    let mut visitor = ExprVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

struct StatementVisitor<F>(F);

impl<E, F: FnMut(&Statement) -> ControlFlow<E>> Visitor for StatementVisitor<F> {
    type Break = E;

    fn enter(&mut self, node: Node<'_>) -> ControlFlow<E, Enter> {
        if let Node::Statement(statement) = node {
            self.0(statement)?;
        }
        ControlFlow::Continue(Enter::Descend)
    }
}

impl<E, F: FnMut(&mut Statement) -> ControlFlow<E>> VisitorMut for StatementVisitor<F> {
    type Break = E;

    fn leave(&mut self, node: NodeMut<'_>) -> ControlFlow<E> {
        if let NodeMut::Statement(statement) = node {
            self.0(statement)?;
        }
        ControlFlow::Continue(())
    }
}

/// Invokes the provided closure on all statements (e.g. `SELECT`, `CREATE TABLE`)
/// present in `v`, including the ones nested in `EXPLAIN` or bindings
pub fn visit_statements<V, E, F>(v: &V, f: F) -> ControlFlow<E>
where
    V: Visit,
    F: FnMut(&Statement) -> ControlFlow<E>,
{
    let mut visitor = StatementVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}

/// Invokes the provided closure on all statements present in `v`, nested
/// statements first
pub fn visit_statements_mut<V, E, F>(v: &mut V, f: F) -> ControlFlow<E>
where
    V: VisitMut,
    F: FnMut(&mut Statement) -> ControlFlow<E>,
{
    let mut visitor = StatementVisitor(f);
    v.visit(&mut visitor)?;
    ControlFlow::Continue(())
}
