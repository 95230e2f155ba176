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

//! Rendering of AST nodes back into SQL text.
//!
//! Two protocols share one [`RestoreCtx`]:
//!
//! * [`Restore`] writes a flat, single line rendering.
//! * [`Pretty`] writes an indented, multi-line rendering. Nodes without a
//!   layout of their own keep the provided [`Pretty::pretty`], which
//!   delegates to [`Restore::restore`].

use std::fmt::{self, Write};

mod error;
mod flags;
mod nesting;

pub use self::error::{Annotate, RestoreError};
pub use self::flags::{RestoreFlags, RestoreOptions, DEFAULT_MAX_NESTING_DEPTH};
pub use self::nesting::{DepthGuard, JoinLevelGuard};

use self::flags::Case;
use self::nesting::{JoinLevel, RecursionCounter};
use crate::keywords;

/// Per-call render state: the output sink, the flags and the scoped counters.
///
/// A context is created for one top-level call and must not be shared
/// between renders.
pub struct RestoreCtx<'a> {
    flags: RestoreFlags,
    out: &'a mut dyn Write,
    join_level: JoinLevel,
    recursion_counter: RecursionCounter,
}

impl<'a> RestoreCtx<'a> {
    pub fn new(flags: RestoreFlags, out: &'a mut dyn Write) -> Self {
        Self::with_options(&RestoreOptions::new().with_flags(flags), out)
    }

    pub fn with_options(options: &RestoreOptions, out: &'a mut dyn Write) -> Self {
        Self {
            flags: options.flags,
            out,
            join_level: JoinLevel::default(),
            recursion_counter: RecursionCounter::new(options.max_nesting_depth),
        }
    }

    pub fn flags(&self) -> RestoreFlags {
        self.flags
    }

    pub fn has_flag(&self, flag: RestoreFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Number of joins enclosing the node being rendered.
    pub fn join_level(&self) -> usize {
        self.join_level.get()
    }

    /// Enters a join side; the level drops back when the guard goes away.
    pub fn enter_join(&self) -> JoinLevelGuard {
        self.join_level.enter()
    }

    /// Enters a subquery, whose own joins start again from level zero.
    pub fn enter_subquery(&self) -> JoinLevelGuard {
        self.join_level.reset()
    }

    /// Takes one level of the nesting budget for the lifetime of the guard.
    pub fn enter_nested(&self) -> Result<DepthGuard, RestoreError> {
        self.recursion_counter.try_decrease()
    }

    /// Writes a keyword following the keyword casing flags.
    pub fn write_keyword(&mut self, keyword: &str) -> Result<(), RestoreError> {
        match self.flags.keyword_case() {
            Case::Upper => self.out.write_str(&keyword.to_uppercase())?,
            Case::Lower => self.out.write_str(&keyword.to_lowercase())?,
            Case::Unchanged => self.out.write_str(keyword)?,
        }
        Ok(())
    }

    /// Writes an identifier.
    ///
    /// With `NAME_BACK_QUOTES` or `NAME_DOUBLE_QUOTES` every name is quoted.
    /// Otherwise a name is wrapped in backquotes only when it could not be
    /// read back as a bare identifier.
    pub fn write_name(&mut self, name: &str) -> Result<(), RestoreError> {
        let cased = match self.flags.name_case() {
            Case::Upper => name.to_uppercase(),
            Case::Lower => name.to_lowercase(),
            Case::Unchanged => name.to_string(),
        };
        let quote = match self.flags.name_quote() {
            Some(quote) => Some(quote),
            None if needs_quotes(&cased) => Some('`'),
            None => None,
        };
        match quote {
            Some(quote) => {
                self.out.write_char(quote)?;
                write_doubling(&mut *self.out, &cased, quote)?;
                self.out.write_char(quote)?;
            }
            None => self.out.write_str(&cased)?,
        }
        Ok(())
    }

    /// Writes a string literal with its delimiters.
    pub fn write_string(&mut self, value: &str) -> Result<(), RestoreError> {
        let quote = self.flags.string_quote();
        self.out.write_char(quote)?;
        if self.has_flag(RestoreFlags::STRING_ESCAPE_BACKSLASH) {
            for c in value.chars() {
                match c {
                    '\\' => self.out.write_str("\\\\")?,
                    c if c == quote => {
                        self.out.write_char(c)?;
                        self.out.write_char(c)?;
                    }
                    c => self.out.write_char(c)?,
                }
            }
        } else {
            write_doubling(&mut *self.out, value, quote)?;
        }
        self.out.write_char(quote)?;
        Ok(())
    }

    pub fn write_plain(&mut self, text: &str) -> Result<(), RestoreError> {
        self.out.write_str(text)?;
        Ok(())
    }

    pub fn write_plainf(&mut self, args: fmt::Arguments<'_>) -> Result<(), RestoreError> {
        self.out.write_fmt(args)?;
        Ok(())
    }

    /// Writes `indent_char` repeated `level * indent` times.
    pub fn write_indent(
        &mut self,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        for _ in 0..level * indent {
            self.out.write_str(indent_char)?;
        }
        Ok(())
    }

    /// Writes a line break followed by the indentation of `level`.
    pub fn write_newline(
        &mut self,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        self.out.write_char('\n')?;
        self.write_indent(level, indent, indent_char)
    }
}

fn write_doubling(out: &mut dyn Write, text: &str, quote: char) -> fmt::Result {
    for c in text.chars() {
        out.write_char(c)?;
        if c == quote {
            out.write_char(c)?;
        }
    }
    Ok(())
}

fn needs_quotes(name: &str) -> bool {
    match name.chars().next() {
        None => true,
        Some(first) if first.is_ascii_digit() => true,
        Some(_) => {
            !name
                .chars()
                .all(|c| c == '_' || c == '$' || c.is_alphanumeric())
                || keywords::is_reserved(name)
        }
    }
}

/// Flat rendering of a node.
pub trait Restore {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError>;

    /// Restores into a new string with the default options.
    fn to_restored_sql(&self) -> Result<String, RestoreError> {
        self.to_restored_sql_with(&RestoreOptions::default())
    }

    fn to_restored_sql_with(&self, options: &RestoreOptions) -> Result<String, RestoreError> {
        let mut sql = String::new();
        {
            let mut ctx = RestoreCtx::with_options(options, &mut sql);
            self.restore(&mut ctx)?;
        }
        Ok(sql)
    }
}

/// Indented rendering of a node.
///
/// `level` is the current nesting depth (callers start at 0), `indent` the
/// width of one level and `indent_char` the padding unit.
pub trait Pretty: Restore {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        let _ = (level, indent, indent_char);
        self.restore(ctx)
    }

    /// Pretty prints into a new string with the default options.
    fn to_pretty_sql(&self, indent: usize, indent_char: &str) -> Result<String, RestoreError> {
        self.to_pretty_sql_with(indent, indent_char, &RestoreOptions::default())
    }

    fn to_pretty_sql_with(
        &self,
        indent: usize,
        indent_char: &str,
        options: &RestoreOptions,
    ) -> Result<String, RestoreError> {
        let mut sql = String::new();
        {
            let mut ctx = RestoreCtx::with_options(options, &mut sql);
            self.pretty(&mut ctx, 0, indent, indent_char)?;
        }
        Ok(sql)
    }
}

impl<T: Restore + ?Sized> Restore for Box<T> {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        (**self).restore(ctx)
    }
}

impl<T: Pretty + ?Sized> Pretty for Box<T> {
    fn pretty(
        &self,
        ctx: &mut RestoreCtx<'_>,
        level: usize,
        indent: usize,
        indent_char: &str,
    ) -> Result<(), RestoreError> {
        (**self).pretty(ctx, level, indent, indent_char)
    }
}

/// Restores `items` joined by `sep`, naming failures `what[i]`.
pub(crate) fn restore_list<T: Restore>(
    ctx: &mut RestoreCtx<'_>,
    items: &[T],
    sep: &str,
    what: &'static str,
) -> Result<(), RestoreError> {
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            ctx.write_plain(sep)?;
        }
        item.restore(ctx).annotate_with(|| format!("{what}[{i}]"))?;
    }
    Ok(())
}

/// Pretty prints `items` joined by `sep`, naming failures `what[i]`.
pub(crate) fn pretty_list<T: Pretty>(
    ctx: &mut RestoreCtx<'_>,
    items: &[T],
    sep: &str,
    (level, indent, indent_char): (usize, usize, &str),
    what: &'static str,
) -> Result<(), RestoreError> {
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            ctx.write_plain(sep)?;
        }
        item.pretty(ctx, level, indent, indent_char)
            .annotate_with(|| format!("{what}[{i}]"))?;
    }
    Ok(())
}

/// `{}` restores with the default flags, `{:#}` pretty prints with four spaces.
pub(crate) fn display<T: Pretty + ?Sized>(node: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let alternate = f.alternate();
    let mut ctx = RestoreCtx::new(RestoreFlags::DEFAULT, f);
    let result = if alternate {
        node.pretty(&mut ctx, 0, 4, " ")
    } else {
        node.restore(&mut ctx)
    };
    result.map_err(|err| {
        log::debug!("display failed: {err}");
        fmt::Error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(flags: RestoreFlags, f: impl FnOnce(&mut RestoreCtx<'_>) -> Result<(), RestoreError>) -> String {
        let mut sql = String::new();
        let mut ctx = RestoreCtx::new(flags, &mut sql);
        f(&mut ctx).unwrap();
        sql
    }

    #[test]
    fn keywords_follow_casing_flags() {
        let upper = render(RestoreFlags::DEFAULT, |ctx| ctx.write_keyword("select"));
        assert_eq!(upper, "SELECT");
        let lower = render(RestoreFlags::KEYWORD_LOWERCASE, |ctx| ctx.write_keyword("SELECT"));
        assert_eq!(lower, "select");
        let kept = render(RestoreFlags::empty(), |ctx| ctx.write_keyword("SeLeCt"));
        assert_eq!(kept, "SeLeCt");
    }

    #[test]
    fn names_are_quoted_only_when_needed() {
        let sql = render(RestoreFlags::DEFAULT, |ctx| {
            for name in ["id", "order", "my col", "1abc", "", "a`b", "测试", "$tmp"] {
                ctx.write_name(name)?;
                ctx.write_plain(" ")?;
            }
            Ok(())
        });
        assert_eq!(sql, "id `order` `my col` `1abc` `` `a``b` 测试 $tmp ");
    }

    #[test]
    fn names_quoted_by_flag() {
        let back = render(RestoreFlags::NAME_BACK_QUOTES, |ctx| ctx.write_name("a`b"));
        assert_eq!(back, "`a``b`");
        let double = render(RestoreFlags::NAME_DOUBLE_QUOTES | RestoreFlags::NAME_UPPERCASE, |ctx| {
            ctx.write_name("ab\"c")
        });
        assert_eq!(double, "\"AB\"\"C\"");
    }

    #[test]
    fn strings_escape_quote_and_backslash() {
        let sql = render(RestoreFlags::DEFAULT, |ctx| ctx.write_string(r"it's a \ test"));
        assert_eq!(sql, r"'it''s a \\ test'");
        let sql = render(RestoreFlags::STRING_DOUBLE_QUOTES, |ctx| ctx.write_string(r#"say "hi" \n"#));
        assert_eq!(sql, r#""say ""hi"" \n""#);
    }

    #[test]
    fn indentation() {
        let sql = render(RestoreFlags::DEFAULT, |ctx| {
            ctx.write_plain("a")?;
            ctx.write_newline(2, 2, " ")?;
            ctx.write_plain("b")?;
            ctx.write_newline(1, 1, "\t")?;
            ctx.write_plainf(format_args!("{}", 3))
        });
        assert_eq!(sql, "a\n    b\n\t3");
    }

    #[test]
    fn sink_failure_propagates() {
        struct Full;
        impl Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        let mut sink = Full;
        let mut ctx = RestoreCtx::new(RestoreFlags::DEFAULT, &mut sink);
        assert_eq!(
            ctx.write_keyword("SELECT").unwrap_err(),
            RestoreError::Write(fmt::Error)
        );
    }
}
