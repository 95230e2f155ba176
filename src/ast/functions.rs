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

//! Function call nodes: scalar calls with their special argument forms,
//! casts, aggregates and window functions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use super::{Expr, FieldType, Ident, OrderBy, Value, WindowSpec};
use crate::format::{restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError};

/// A scalar function call.
///
/// Some functions have a grammar of their own and are restored in that
/// form, e.g. `EXTRACT(DAY FROM d)` or `TRIM(LEADING 'x' FROM s)`. The
/// argument layout for those follows the parser:
///
/// * `convert`: `[expr, charset]`, where `charset` is a string literal
/// * `adddate`, `subdate`, `date_add`, `date_sub`: `[date, interval, unit]`
/// * `extract`: `[unit, expr]`
/// * `position`: `[needle, haystack]`
/// * `trim`: `[str]`, `[str, remstr]` or `[str, remstr, direction]`;
///   a `NULL` remstr is not written
/// * `weight_string`: `[expr]` or `[expr, 'CHAR' | 'BINARY', len]`
/// * `dateliteral`, `timeliteral`, `timestampliteral`: `[literal]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct FuncCall {
    pub name: Ident,
    pub args: Vec<Expr>,
}

impl FuncCall {
    pub fn new(name: impl Into<Ident>, args: Vec<Expr>) -> Self {
        FuncCall {
            name: name.into(),
            args,
        }
    }

    fn arg(&self, i: usize) -> Result<&Expr, RestoreError> {
        self.args.get(i).ok_or_else(|| {
            RestoreError::malformed(format!(
                "function {} is missing argument {}",
                self.name, i
            ))
        })
    }

    fn restore_arg(&self, ctx: &mut RestoreCtx<'_>, i: usize) -> Result<(), RestoreError> {
        self.arg(i)?
            .restore(ctx)
            .annotate_with(|| format!("FuncCallExpr.Args[{i}]"))
    }

    fn string_arg(&self, i: usize) -> Result<&str, RestoreError> {
        match self.arg(i)? {
            Expr::Value(v) => v.as_str().ok_or_else(|| {
                RestoreError::malformed(format!(
                    "argument {} of {} must be a string literal",
                    i, self.name
                ))
            }),
            _ => Err(RestoreError::malformed(format!(
                "argument {} of {} must be a string literal",
                i, self.name
            ))),
        }
    }
}

impl Restore for FuncCall {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let special_literal = match self.name.normalized() {
            "dateliteral" => Some("DATE "),
            "timeliteral" => Some("TIME "),
            "timestampliteral" => Some("TIMESTAMP "),
            _ => None,
        };
        if let Some(literal) = special_literal {
            ctx.write_keyword(literal)?;
            return self.restore_arg(ctx, 0);
        }

        ctx.write_keyword(self.name.as_str())?;
        ctx.write_plain("(")?;
        match self.name.normalized() {
            "convert" => {
                let charset = self.string_arg(1)?;
                self.restore_arg(ctx, 0)?;
                ctx.write_keyword(" USING ")?;
                ctx.write_keyword(charset)?;
            }
            "adddate" | "subdate" | "date_add" | "date_sub" => {
                self.restore_arg(ctx, 0)?;
                ctx.write_plain(", ")?;
                ctx.write_keyword("INTERVAL ")?;
                self.restore_arg(ctx, 1)?;
                ctx.write_plain(" ")?;
                self.restore_arg(ctx, 2)?;
            }
            "extract" => {
                self.restore_arg(ctx, 0)?;
                ctx.write_keyword(" FROM ")?;
                self.restore_arg(ctx, 1)?;
            }
            "position" => {
                self.restore_arg(ctx, 0)?;
                ctx.write_keyword(" IN ")?;
                self.restore_arg(ctx, 1)?;
            }
            "trim" => {
                if self.args.len() == 3 {
                    self.restore_arg(ctx, 2)?;
                    ctx.write_plain(" ")?;
                }
                if self.args.len() >= 2 {
                    if !matches!(self.arg(1)?, Expr::Value(Value::Null)) {
                        self.restore_arg(ctx, 1)?;
                        ctx.write_plain(" ")?;
                    }
                    ctx.write_keyword("FROM ")?;
                }
                self.restore_arg(ctx, 0)?;
            }
            "weight_string" => {
                self.restore_arg(ctx, 0)?;
                if self.args.len() == 3 {
                    ctx.write_keyword(" AS ")?;
                    ctx.write_keyword(self.string_arg(1)?)?;
                    ctx.write_plain("(")?;
                    self.restore_arg(ctx, 2)?;
                    ctx.write_plain(")")?;
                }
            }
            _ => restore_list(ctx, &self.args, ", ", "FuncCallExpr.Args")?,
        }
        ctx.write_plain(")")
    }
}

impl Pretty for FuncCall {}

/// How a [`Cast`] was spelled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum CastKind {
    /// `CAST(expr AS type)`
    Cast,
    /// `CONVERT(expr, type)`
    Convert,
    /// `BINARY expr`
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct Cast {
    pub kind: CastKind,
    pub expr: Box<Expr>,
    pub data_type: FieldType,
}

impl Restore for Cast {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        match self.kind {
            CastKind::Cast => {
                ctx.write_keyword("CAST")?;
                ctx.write_plain("(")?;
                self.expr.restore(ctx).annotate("FuncCastExpr.Expr")?;
                ctx.write_keyword(" AS ")?;
                self.data_type.restore_as_cast_type(ctx)?;
                ctx.write_plain(")")
            }
            CastKind::Convert => {
                ctx.write_keyword("CONVERT")?;
                ctx.write_plain("(")?;
                self.expr.restore(ctx).annotate("FuncCastExpr.Expr")?;
                ctx.write_plain(", ")?;
                self.data_type.restore_as_cast_type(ctx)?;
                ctx.write_plain(")")
            }
            CastKind::Binary => {
                ctx.write_keyword("BINARY ")?;
                self.expr.restore(ctx).annotate("FuncCastExpr.Expr")
            }
        }
    }
}

impl Pretty for Cast {}

/// Declares a keyword enum whose variants render as fixed text and can be
/// decoded from the parser's numeric codes.
///
/// Every variant carries its code explicitly. Codes follow the parser's
/// constants, so they may start at 0 or 1, skip values or be bit flags.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $code:expr => $text:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }

            /// The parser's numeric code for this variant.
            pub fn code(&self) -> u64 {
                match self {
                    $($name::$variant => $code),*
                }
            }
        }

        impl TryFrom<u64> for $name {
            type Error = RestoreError;

            fn try_from(code: u64) -> Result<Self, RestoreError> {
                const CODES: &[(u64, $name)] = &[$(($code, $name::$variant)),*];
                CODES
                    .iter()
                    .find(|(c, _)| *c == code)
                    .map(|(_, variant)| *variant)
                    .ok_or(RestoreError::UnknownVariant {
                        kind: stringify!($name),
                        code,
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Restore for $name {
            fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
                ctx.write_keyword(self.as_str())
            }
        }

        impl Pretty for $name {}
    };
}

pub(crate) use keyword_enum;

keyword_enum! {
    /// Direction of `TRIM`
    pub enum TrimDirection {
        Both = 1 => "BOTH",
        Leading = 2 => "LEADING",
        Trailing = 3 => "TRAILING",
    }
}

keyword_enum! {
    /// Unit of an interval, e.g. `DAY` in `INTERVAL 1 DAY`
    pub enum TimeUnit {
        Microsecond = 1 => "MICROSECOND",
        Second = 2 => "SECOND",
        Minute = 3 => "MINUTE",
        Hour = 4 => "HOUR",
        Day = 5 => "DAY",
        Week = 6 => "WEEK",
        Month = 7 => "MONTH",
        Quarter = 8 => "QUARTER",
        Year = 9 => "YEAR",
        SecondMicrosecond = 10 => "SECOND_MICROSECOND",
        MinuteMicrosecond = 11 => "MINUTE_MICROSECOND",
        MinuteSecond = 12 => "MINUTE_SECOND",
        HourMicrosecond = 13 => "HOUR_MICROSECOND",
        HourSecond = 14 => "HOUR_SECOND",
        HourMinute = 15 => "HOUR_MINUTE",
        DayMicrosecond = 16 => "DAY_MICROSECOND",
        DaySecond = 17 => "DAY_SECOND",
        DayMinute = 18 => "DAY_MINUTE",
        DayHour = 19 => "DAY_HOUR",
        YearMonth = 20 => "YEAR_MONTH",
    }
}

keyword_enum! {
    /// First argument of `GET_FORMAT`
    pub enum GetFormatSelector {
        Date = 1 => "DATE",
        Datetime = 2 => "DATETIME",
        Time = 3 => "TIME",
    }
}

/// An aggregate call, e.g. `SUM(DISTINCT a)` or
/// `GROUP_CONCAT(a ORDER BY a SEPARATOR ',')`.
///
/// For `group_concat` the last argument is the separator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct AggregateFunc {
    pub name: String,
    pub args: Vec<Expr>,
    pub distinct: bool,
    pub order_by: Option<OrderBy>,
}

impl Restore for AggregateFunc {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(&self.name)?;
        ctx.write_plain("(")?;
        if self.distinct {
            ctx.write_keyword("DISTINCT ")?;
        }
        if self.name.eq_ignore_ascii_case("group_concat") {
            let (separator, args) = self.args.split_last().ok_or_else(|| {
                RestoreError::malformed("GROUP_CONCAT without a separator argument")
            })?;
            restore_list(ctx, args, ", ", "AggregateFuncExpr.Args")?;
            if let Some(order_by) = &self.order_by {
                ctx.write_plain(" ")?;
                order_by.restore(ctx).annotate("AggregateFuncExpr.Order")?;
            }
            ctx.write_keyword(" SEPARATOR ")?;
            separator
                .restore(ctx)
                .annotate("AggregateFuncExpr.Separator")?;
        } else {
            restore_list(ctx, &self.args, ", ", "AggregateFuncExpr.Args")?;
        }
        ctx.write_plain(")")
    }
}

impl Pretty for AggregateFunc {}

/// A window function call, e.g. `ROW_NUMBER() OVER (PARTITION BY a)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub struct WindowFunc {
    pub name: String,
    pub args: Vec<Expr>,
    pub distinct: bool,
    pub from_last: bool,
    pub ignore_nulls: bool,
    pub spec: WindowSpec,
}

impl Restore for WindowFunc {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(&self.name)?;
        ctx.write_plain("(")?;
        if self.distinct && !self.args.is_empty() {
            ctx.write_keyword("DISTINCT ")?;
        }
        restore_list(ctx, &self.args, ", ", "WindowFuncExpr.Args")?;
        ctx.write_plain(")")?;
        if self.from_last {
            ctx.write_keyword(" FROM LAST")?;
        }
        if self.ignore_nulls {
            ctx.write_keyword(" IGNORE NULLS")?;
        }
        ctx.write_keyword(" OVER ")?;
        self.spec.restore(ctx).annotate("WindowFuncExpr.Spec")
    }
}

impl Pretty for WindowFunc {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ByItem, TypeName};

    fn call(name: &str, args: Vec<Expr>) -> Expr {
        Expr::Function(FuncCall::new(name, args))
    }

    #[test]
    fn special_argument_forms() {
        let expr = call(
            "date_add",
            vec![
                Expr::column("d"),
                Expr::value(1),
                Expr::TimeUnit(TimeUnit::Day),
            ],
        );
        assert_eq!(expr.to_string(), "DATE_ADD(d, INTERVAL 1 DAY)");

        let expr = call(
            "extract",
            vec![Expr::TimeUnit(TimeUnit::YearMonth), Expr::column("d")],
        );
        assert_eq!(expr.to_string(), "EXTRACT(YEAR_MONTH FROM d)");

        let expr = call("convert", vec![Expr::column("s"), Expr::value("utf8mb4")]);
        assert_eq!(expr.to_string(), "CONVERT(s USING UTF8MB4)");

        let expr = call("dateliteral", vec![Expr::value("2020-01-01")]);
        assert_eq!(expr.to_string(), "DATE '2020-01-01'");
    }

    #[test]
    fn trim_forms() {
        let expr = call(
            "trim",
            vec![
                Expr::column("s"),
                Expr::value("x"),
                Expr::TrimDirection(TrimDirection::Leading),
            ],
        );
        assert_eq!(expr.to_string(), "TRIM(LEADING 'x' FROM s)");

        let expr = call(
            "trim",
            vec![
                Expr::column("s"),
                Expr::Value(Value::Null),
                Expr::TrimDirection(TrimDirection::Both),
            ],
        );
        assert_eq!(expr.to_string(), "TRIM(BOTH FROM s)");

        assert_eq!(call("trim", vec![Expr::column("s")]).to_string(), "TRIM(s)");
    }

    #[test]
    fn missing_argument_is_malformed() {
        let err = call("position", vec![Expr::value("a")])
            .to_restored_sql()
            .unwrap_err();
        assert!(err.is_malformed());

        let err = call("convert", vec![Expr::column("s"), Expr::value(1)])
            .to_restored_sql()
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn casts() {
        let cast = Cast {
            kind: CastKind::Cast,
            expr: Box::new(Expr::column("a")),
            data_type: FieldType::new(TypeName::Decimal)
                .with_len(10)
                .with_decimal(2),
        };
        assert_eq!(Expr::Cast(cast.clone()).to_string(), "CAST(a AS DECIMAL(10, 2))");

        let binary = Cast {
            kind: CastKind::Binary,
            ..cast
        };
        assert_eq!(Expr::Cast(binary).to_string(), "BINARY a");
    }

    #[test]
    fn group_concat_canonical_order() {
        let expr = Expr::Aggregate(AggregateFunc {
            name: "GROUP_CONCAT".into(),
            args: vec![Expr::column("v"), Expr::value(";")],
            distinct: true,
            order_by: Some(OrderBy {
                items: vec![ByItem::new(Expr::column("v"))],
            }),
        });
        assert_eq!(
            expr.to_string(),
            "GROUP_CONCAT(DISTINCT v ORDER BY v SEPARATOR ';')"
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(TimeUnit::try_from(5).unwrap(), TimeUnit::Day);
        assert_eq!(TimeUnit::YearMonth.code(), 20);
        // 0 is the parser's "invalid unit"
        assert!(TimeUnit::try_from(0).is_err());
        assert_eq!(
            TrimDirection::try_from(7).unwrap_err(),
            RestoreError::UnknownVariant {
                kind: "TrimDirection",
                code: 7
            }
        );
    }
}
