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

use std::fmt;

use super::*;
use crate::format::{
    display, restore_list, Annotate, Pretty, Restore, RestoreCtx, RestoreError, RestoreFlags,
};

impl Restore for Expr {
    #[cfg_attr(feature = "recursive-protection", recursive::recursive)]
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let _guard = ctx.enter_nested()?;
        match self {
            Expr::Value(v) => v.restore(ctx),
            Expr::ParamMarker(_) => ctx.write_plain("?"),
            Expr::Column(c) => c.restore(ctx),
            Expr::Between(x) => x.restore(ctx),
            Expr::BinaryOp(x) => x.restore(ctx),
            Expr::UnaryOp(x) => x.restore(ctx),
            Expr::Case(x) => x.restore(ctx),
            Expr::Subquery(q) => {
                ctx.write_plain("(")?;
                q.restore(ctx).annotate("SubqueryExpr.Query")?;
                ctx.write_plain(")")
            }
            Expr::CompareSubquery(x) => x.restore(ctx),
            Expr::Default(name) => {
                ctx.write_keyword("DEFAULT")?;
                if let Some(name) = name {
                    ctx.write_plain("(")?;
                    name.restore(ctx).annotate("DefaultExpr.Name")?;
                    ctx.write_plain(")")?;
                }
                Ok(())
            }
            Expr::Exists(x) => x.restore(ctx),
            Expr::InList(x) => x.restore(ctx),
            Expr::InSubquery(x) => x.restore(ctx),
            Expr::IsNull { expr, negated } => {
                expr.restore(ctx).annotate("IsNullExpr")?;
                ctx.write_keyword(if *negated { " IS NOT NULL" } else { " IS NULL" })
            }
            Expr::IsTruth {
                expr,
                negated,
                value,
            } => {
                expr.restore(ctx).annotate("IsTruthExpr")?;
                ctx.write_keyword(if *negated { " IS NOT" } else { " IS" })?;
                ctx.write_keyword(if *value { " TRUE" } else { " FALSE" })
            }
            Expr::Like(x) => x.restore(ctx),
            Expr::Nested(expr) => {
                ctx.write_plain("(")?;
                expr.restore(ctx).annotate("ParenthesesExpr.Expr")?;
                ctx.write_plain(")")
            }
            Expr::Position(n) => ctx.write_plainf(format_args!("{n}")),
            Expr::Regexp(x) => x.restore(ctx),
            Expr::Row(values) => {
                ctx.write_keyword("ROW")?;
                ctx.write_plain("(")?;
                restore_list(ctx, values, ",", "RowExpr.Values")?;
                ctx.write_plain(")")
            }
            Expr::Values(column) => {
                ctx.write_keyword("VALUES")?;
                ctx.write_plain("(")?;
                column.restore(ctx).annotate("ValuesExpr.Column")?;
                ctx.write_plain(")")
            }
            Expr::Variable(x) => x.restore(ctx),
            Expr::MaxValue => ctx.write_keyword("MAXVALUE"),
            Expr::MatchAgainst(x) => x.restore(ctx),
            Expr::Collate { expr, collation } => {
                expr.restore(ctx).annotate("SetCollationExpr.Expr")?;
                ctx.write_keyword(" COLLATE ")?;
                ctx.write_plain(collation)
            }
            Expr::Function(x) => x.restore(ctx),
            Expr::Cast(x) => x.restore(ctx),
            Expr::TrimDirection(x) => x.restore(ctx),
            Expr::TimeUnit(x) => x.restore(ctx),
            Expr::GetFormatSelector(x) => x.restore(ctx),
            Expr::Aggregate(x) => x.restore(ctx),
            Expr::Window(x) => x.restore(ctx),
        }
    }
}

impl Pretty for Expr {}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        display(self, f)
    }
}

impl Restore for Between {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.expr.restore(ctx).annotate("BetweenExpr.Expr")?;
        ctx.write_keyword(if self.negated {
            " NOT BETWEEN "
        } else {
            " BETWEEN "
        })?;
        self.low.restore(ctx).annotate("BetweenExpr.Left")?;
        ctx.write_keyword(" AND ")?;
        self.high.restore(ctx).annotate("BetweenExpr.Right")
    }
}

impl Restore for BinaryOp {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.left.restore(ctx).annotate("BinaryOperationExpr.L")?;
        self.op
            .restore_spaced(ctx)
            .annotate("BinaryOperationExpr.Op")?;
        self.right.restore(ctx).annotate("BinaryOperationExpr.R")
    }
}

impl Restore for UnaryOp {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.op.restore(ctx)?;
        // `- -1` must not collapse into a `--` comment
        if self.op == UnaryOperator::Minus && starts_with_minus(&self.expr) {
            ctx.write_plain(" ")?;
        }
        self.expr.restore(ctx).annotate("UnaryOperationExpr.V")
    }
}

fn starts_with_minus(expr: &Expr) -> bool {
    match expr {
        Expr::UnaryOp(UnaryOp {
            op: UnaryOperator::Minus,
            ..
        }) => true,
        Expr::Value(Value::Int(v)) => *v < 0,
        Expr::Value(Value::Float(v)) => v.is_sign_negative(),
        Expr::Value(Value::Decimal(v)) => v.starts_with('-'),
        Expr::BinaryOp(BinaryOp { left, .. }) => starts_with_minus(left),
        _ => false,
    }
}

impl Restore for Case {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("CASE")?;
        if let Some(operand) = &self.operand {
            ctx.write_plain(" ")?;
            operand.restore(ctx).annotate("CaseExpr.Value")?;
        }
        for (i, clause) in self.when_clauses.iter().enumerate() {
            ctx.write_plain(" ")?;
            clause
                .restore(ctx)
                .annotate_with(|| format!("CaseExpr.WhenClauses[{i}]"))?;
        }
        if let Some(else_result) = &self.else_result {
            ctx.write_keyword(" ELSE ")?;
            else_result.restore(ctx).annotate("CaseExpr.ElseClause")?;
        }
        ctx.write_keyword(" END")
    }
}

impl Restore for WhenClause {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("WHEN ")?;
        self.condition.restore(ctx).annotate("WhenClauses.Expr")?;
        ctx.write_keyword(" THEN ")?;
        self.result.restore(ctx).annotate("WhenClauses.Result")
    }
}

impl Pretty for WhenClause {}

impl Restore for CompareSubquery {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.left.restore(ctx).annotate("CompareSubqueryExpr.L")?;
        self.op.restore_spaced(ctx)?;
        ctx.write_keyword(if self.all { "ALL " } else { "ANY " })?;
        self.right.restore(ctx).annotate("CompareSubqueryExpr.R")
    }
}

impl Restore for Exists {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(if self.negated {
            "NOT EXISTS "
        } else {
            "EXISTS "
        })?;
        self.subquery.restore(ctx).annotate("ExistsSubqueryExpr.Sel")
    }
}

impl Restore for InList {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.expr.restore(ctx).annotate("PatternInExpr.Expr")?;
        ctx.write_keyword(if self.negated { " NOT IN " } else { " IN " })?;
        if ctx.has_flag(RestoreFlags::LITERALS_AS_PLACEHOLDERS)
            && self.list.iter().all(Expr::is_constant)
        {
            return ctx.write_plain("(...)");
        }
        ctx.write_plain("(")?;
        restore_list(ctx, &self.list, ",", "PatternInExpr.List")?;
        ctx.write_plain(")")
    }
}

impl Restore for InSubquery {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.expr.restore(ctx).annotate("PatternInExpr.Expr")?;
        ctx.write_keyword(if self.negated { " NOT IN " } else { " IN " })?;
        ctx.write_plain("(")?;
        self.subquery.restore(ctx).annotate("PatternInExpr.Sel")?;
        ctx.write_plain(")")
    }
}

impl Restore for Like {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.expr.restore(ctx).annotate("PatternLikeExpr.Expr")?;
        ctx.write_keyword(if self.negated { " NOT LIKE " } else { " LIKE " })?;
        self.pattern.restore(ctx).annotate("PatternLikeExpr.Pattern")?;
        if self.escape != '\\' {
            ctx.write_keyword(" ESCAPE ")?;
            ctx.write_string(&self.escape.to_string())?;
        }
        Ok(())
    }
}

impl Restore for Regexp {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        self.expr.restore(ctx).annotate("PatternRegexpExpr.Expr")?;
        ctx.write_keyword(if self.negated {
            " NOT REGEXP "
        } else {
            " REGEXP "
        })?;
        self.pattern.restore(ctx).annotate("PatternRegexpExpr.Pattern")
    }
}

impl Restore for Variable {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        if self.is_system {
            ctx.write_plain("@@")?;
            if let Some(global) = self.explicit_scope {
                ctx.write_keyword(if global { "GLOBAL" } else { "SESSION" })?;
                ctx.write_plain(".")?;
            }
        } else {
            ctx.write_plain("@")?;
        }
        ctx.write_name(&self.name)?;
        if let Some(value) = &self.value {
            ctx.write_plain(":=")?;
            value.restore(ctx).annotate("VariableExpr.Value")?;
        }
        Ok(())
    }
}

impl Restore for MatchAgainst {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword("MATCH")?;
        ctx.write_plain(" (")?;
        restore_list(ctx, &self.columns, ",", "MatchAgainst.ColumnNames")?;
        ctx.write_plain(") ")?;
        ctx.write_keyword("AGAINST")?;
        ctx.write_plain(" (")?;
        self.against.restore(ctx).annotate("MatchAgainst.Against")?;
        match (self.boolean_mode, self.query_expansion) {
            (true, true) => {
                return Err(RestoreError::malformed(
                    "BOOLEAN MODE doesn't support QUERY EXPANSION",
                ))
            }
            (true, false) => ctx.write_keyword(" IN BOOLEAN MODE")?,
            (false, true) => ctx.write_keyword(" WITH QUERY EXPANSION")?,
            (false, false) => {}
        }
        ctx.write_plain(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ColumnName, Value};

    fn col(name: &str) -> Box<Expr> {
        Box::new(Expr::column(name))
    }

    #[test]
    fn between_and_in() {
        let expr = Expr::Between(Between {
            expr: col("a"),
            negated: true,
            low: Box::new(Expr::value(1)),
            high: Box::new(Expr::value(10)),
        });
        assert_eq!(expr.to_string(), "a NOT BETWEEN 1 AND 10");

        let expr = Expr::InList(InList {
            expr: col("a"),
            list: vec![Expr::value(1), Expr::value("x")],
            negated: false,
        });
        assert_eq!(expr.to_string(), "a IN (1,'x')");
    }

    #[test]
    fn case_with_operand() {
        let expr = Expr::Case(Case {
            operand: Some(col("a")),
            when_clauses: vec![WhenClause {
                condition: Expr::value(1),
                result: Expr::value("one"),
            }],
            else_result: Some(Box::new(Expr::Value(Value::Null))),
        });
        assert_eq!(expr.to_string(), "CASE a WHEN 1 THEN 'one' ELSE NULL END");
    }

    #[test]
    fn like_escape_only_when_not_default() {
        let mut like = Like {
            expr: col("a"),
            pattern: Box::new(Expr::value("%x")),
            negated: false,
            escape: '\\',
        };
        assert_eq!(Expr::Like(like.clone()).to_string(), "a LIKE '%x'");
        like.escape = '|';
        like.negated = true;
        assert_eq!(
            Expr::Like(like).to_string(),
            "a NOT LIKE '%x' ESCAPE '|'"
        );
    }

    #[test]
    fn double_minus_is_separated() {
        let expr = Expr::unary(UnaryOperator::Minus, Expr::value(-1));
        assert_eq!(expr.to_string(), "- -1");
        let expr = Expr::unary(UnaryOperator::Not, Expr::column("a"));
        assert_eq!(expr.to_string(), "NOT a");
    }

    #[test]
    fn variables() {
        let expr = Expr::Variable(Variable {
            name: "autocommit".into(),
            is_system: true,
            explicit_scope: Some(true),
            value: None,
        });
        assert_eq!(expr.to_string(), "@@GLOBAL.autocommit");
        let expr = Expr::Variable(Variable {
            name: "a".into(),
            is_system: false,
            explicit_scope: None,
            value: Some(Box::new(Expr::value(1))),
        });
        assert_eq!(expr.to_string(), "@a:=1");
    }

    #[test]
    fn match_against_modes() {
        let mut expr = MatchAgainst {
            columns: vec![ColumnName::new("a"), ColumnName::new("b")],
            against: Box::new(Expr::value("x")),
            boolean_mode: true,
            query_expansion: false,
        };
        assert_eq!(
            Expr::MatchAgainst(expr.clone()).to_string(),
            "MATCH (a,b) AGAINST ('x' IN BOOLEAN MODE)"
        );
        expr.query_expansion = true;
        let err = Expr::MatchAgainst(expr).to_restored_sql().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let mut expr = Expr::value(1);
        for _ in 0..40 {
            expr = Expr::nested(expr);
        }
        let options = crate::format::RestoreOptions::new().with_max_nesting_depth(16);
        let err = expr.to_restored_sql_with(&options).unwrap_err();
        assert_eq!(err.root_cause(), &RestoreError::NestingTooDeep { limit: 16 });
        assert!(expr.to_restored_sql().is_ok());
    }
}
