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

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Error returned by a failed restore or pretty call.
///
/// Errors raised deep in the tree are wrapped in [`RestoreError::Context`]
/// by every parent on the way up, so the message names the path of the
/// failing node, e.g.
/// `while restoring SelectStmt.Fields[2]: while restoring FuncCallExpr: ...`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The node is understood but deliberately not rendered.
    #[error("{0} is not supported")]
    Unsupported(Cow<'static, str>),
    /// A required child is missing or has the wrong shape.
    #[error("malformed tree: {0}")]
    Malformed(Cow<'static, str>),
    /// A raw kind code handed over by the parser has no known meaning.
    #[error("unknown {kind} code {code}")]
    UnknownVariant { kind: &'static str, code: u64 },
    #[error("nesting depth exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
    /// The output sink refused a write.
    #[error("failed to write to the output sink")]
    Write(#[from] fmt::Error),
    #[error("while restoring {context}: {source}")]
    Context {
        context: Cow<'static, str>,
        source: Box<RestoreError>,
    },
}

impl RestoreError {
    pub fn unsupported(what: impl Into<Cow<'static, str>>) -> Self {
        RestoreError::Unsupported(what.into())
    }

    pub fn malformed(what: impl Into<Cow<'static, str>>) -> Self {
        RestoreError::Malformed(what.into())
    }

    /// The innermost error, with every breadcrumb removed.
    pub fn root_cause(&self) -> &RestoreError {
        let mut err = self;
        while let RestoreError::Context { source, .. } = err {
            err = source;
        }
        err
    }

    /// Breadcrumbs from the outermost node to the failing one.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut err = self;
        while let RestoreError::Context { context, source } = err {
            path.push(context.as_ref());
            err = source;
        }
        path
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.root_cause(), RestoreError::Unsupported(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.root_cause(), RestoreError::Malformed(_))
    }
}

/// Adds a breadcrumb to a failed restore.
pub trait Annotate<T> {
    fn annotate(self, context: &'static str) -> Result<T, RestoreError>;

    /// Like [`Annotate::annotate`], building the breadcrumb only on failure.
    fn annotate_with<F>(self, context: F) -> Result<T, RestoreError>
    where
        F: FnOnce() -> String;
}

impl<T> Annotate<T> for Result<T, RestoreError> {
    fn annotate(self, context: &'static str) -> Result<T, RestoreError> {
        self.map_err(|source| RestoreError::Context {
            context: Cow::Borrowed(context),
            source: Box::new(source),
        })
    }

    fn annotate_with<F>(self, context: F) -> Result<T, RestoreError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| RestoreError::Context {
            context: Cow::Owned(context()),
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumbs_read_outside_in() {
        let inner: Result<(), RestoreError> =
            Err(RestoreError::unsupported("COLUMN OPTION FULLTEXT"));
        let err = inner
            .annotate("ColumnDef.Options[1]")
            .annotate_with(|| format!("CreateTableStmt.Cols[{}]", 0))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "while restoring CreateTableStmt.Cols[0]: while restoring ColumnDef.Options[1]: \
             COLUMN OPTION FULLTEXT is not supported"
        );
        assert_eq!(
            err.breadcrumbs(),
            vec!["CreateTableStmt.Cols[0]", "ColumnDef.Options[1]"]
        );
        assert!(err.is_unsupported());
        assert!(!err.is_malformed());
    }

    #[test]
    fn sink_errors_convert() {
        let err: RestoreError = fmt::Error.into();
        assert_eq!(err.root_cause(), &RestoreError::Write(fmt::Error));
    }
}
