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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "visitor")]
use sqlrestore_derive::{Visit, VisitMut};

use crate::format::{Restore, RestoreCtx, RestoreError, RestoreFlags};

/// Unary operators
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum UnaryOperator {
    Plus,
    Minus,
    /// `NOT x`
    Not,
    /// `!x`
    LogicalNot,
    /// `~x`
    BitwiseNot,
}

impl UnaryOperator {
    /// The operator text, including the space that follows `NOT`.
    pub fn literal(&self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "NOT ",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::BitwiseNot => "~",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl Restore for UnaryOperator {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(self.literal())
    }
}

/// Binary operators
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visitor", derive(Visit, VisitMut))]
pub enum BinaryOperator {
    And,
    Or,
    Xor,
    ShiftLeft,
    ShiftRight,
    GtEq,
    LtEq,
    Eq,
    NotEq,
    Lt,
    Gt,
    Plus,
    Minus,
    BitwiseAnd,
    BitwiseOr,
    Modulo,
    BitwiseXor,
    Divide,
    Multiply,
    /// `DIV`
    IntDiv,
    /// `<=>`
    Spaceship,
}

impl BinaryOperator {
    pub fn literal(&self) -> &'static str {
        match self {
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Xor => "XOR",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::Modulo => "%",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::Divide => "/",
            BinaryOperator::Multiply => "*",
            BinaryOperator::IntDiv => "DIV",
            BinaryOperator::Spaceship => "<=>",
        }
    }

    /// Whether the operator is spelled as a keyword and so always needs
    /// spaces around it.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor | BinaryOperator::IntDiv
        )
    }

    /// Writes the operator, padded with spaces when it is a keyword or the
    /// context asks for spaces around binary operators.
    pub(crate) fn restore_spaced(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        let spaced =
            self.is_keyword() || ctx.has_flag(RestoreFlags::SPACES_AROUND_BINARY_OPERATION);
        if spaced {
            ctx.write_plain(" ")?;
        }
        self.restore(ctx)?;
        if spaced {
            ctx.write_plain(" ")?;
        }
        Ok(())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl Restore for BinaryOperator {
    fn restore(&self, ctx: &mut RestoreCtx<'_>) -> Result<(), RestoreError> {
        ctx.write_keyword(self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaced(op: BinaryOperator, flags: RestoreFlags) -> String {
        let mut sql = String::new();
        op.restore_spaced(&mut RestoreCtx::new(flags, &mut sql)).unwrap();
        sql
    }

    #[test]
    fn keyword_operators_are_always_spaced() {
        assert_eq!(spaced(BinaryOperator::And, RestoreFlags::DEFAULT), " AND ");
        assert_eq!(spaced(BinaryOperator::IntDiv, RestoreFlags::KEYWORD_LOWERCASE), " div ");
        assert_eq!(spaced(BinaryOperator::Eq, RestoreFlags::DEFAULT), "=");
        assert_eq!(
            spaced(
                BinaryOperator::Spaceship,
                RestoreFlags::DEFAULT | RestoreFlags::SPACES_AROUND_BINARY_OPERATION
            ),
            " <=> "
        );
    }

    #[test]
    fn unary_not_carries_its_space() {
        assert_eq!(UnaryOperator::Not.to_string(), "NOT ");
        assert_eq!(UnaryOperator::LogicalNot.to_restored_sql().unwrap(), "!");
    }
}
