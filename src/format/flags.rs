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

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Switches consulted by the write helpers of [`RestoreCtx`](super::RestoreCtx).
    ///
    /// Every flag changes exactly one rendering decision. When two flags of
    /// the same group are set (for example both keyword casings) the first
    /// listed one wins.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct RestoreFlags: u32 {
        /// Wrap string literals in `'`.
        const STRING_SINGLE_QUOTES = 1 << 0;
        /// Wrap string literals in `"`.
        const STRING_DOUBLE_QUOTES = 1 << 1;
        /// Escape `\` inside string literals.
        const STRING_ESCAPE_BACKSLASH = 1 << 2;
        const KEYWORD_UPPERCASE = 1 << 3;
        const KEYWORD_LOWERCASE = 1 << 4;
        const NAME_UPPERCASE = 1 << 5;
        const NAME_LOWERCASE = 1 << 6;
        /// Quote every identifier with `"`.
        const NAME_DOUBLE_QUOTES = 1 << 7;
        /// Quote every identifier with `` ` ``.
        const NAME_BACK_QUOTES = 1 << 8;
        /// Put a space on both sides of symbolic binary operators such as `=`.
        const SPACES_AROUND_BINARY_OPERATION = 1 << 9;
        /// Drop the `_charset` introducer of string literals.
        const STRING_WITHOUT_CHARSET = 1 << 10;
        /// Drop the `_charset` introducer only when it names the default charset.
        const STRING_WITHOUT_DEFAULT_CHARSET = 1 << 11;
        /// Render literal values as `?`.
        const LITERALS_AS_PLACEHOLDERS = 1 << 12;
    }
}

impl RestoreFlags {
    /// Flags used when nothing else is requested.
    pub const DEFAULT: RestoreFlags = RestoreFlags::STRING_SINGLE_QUOTES
        .union(RestoreFlags::STRING_ESCAPE_BACKSLASH)
        .union(RestoreFlags::KEYWORD_UPPERCASE);

    /// Flags used to compute the normalized text of a statement.
    pub const NORMALIZE: RestoreFlags = RestoreFlags::STRING_SINGLE_QUOTES
        .union(RestoreFlags::STRING_ESCAPE_BACKSLASH)
        .union(RestoreFlags::KEYWORD_LOWERCASE)
        .union(RestoreFlags::NAME_LOWERCASE)
        .union(RestoreFlags::NAME_BACK_QUOTES)
        .union(RestoreFlags::SPACES_AROUND_BINARY_OPERATION)
        .union(RestoreFlags::LITERALS_AS_PLACEHOLDERS);

    pub(crate) fn keyword_case(self) -> Case {
        if self.contains(RestoreFlags::KEYWORD_UPPERCASE) {
            Case::Upper
        } else if self.contains(RestoreFlags::KEYWORD_LOWERCASE) {
            Case::Lower
        } else {
            Case::Unchanged
        }
    }

    pub(crate) fn name_case(self) -> Case {
        if self.contains(RestoreFlags::NAME_UPPERCASE) {
            Case::Upper
        } else if self.contains(RestoreFlags::NAME_LOWERCASE) {
            Case::Lower
        } else {
            Case::Unchanged
        }
    }

    /// The character forced around every identifier, if any.
    pub(crate) fn name_quote(self) -> Option<char> {
        if self.contains(RestoreFlags::NAME_BACK_QUOTES) {
            Some('`')
        } else if self.contains(RestoreFlags::NAME_DOUBLE_QUOTES) {
            Some('"')
        } else {
            None
        }
    }

    pub(crate) fn string_quote(self) -> char {
        if self.contains(RestoreFlags::STRING_DOUBLE_QUOTES)
            && !self.contains(RestoreFlags::STRING_SINGLE_QUOTES)
        {
            '"'
        } else {
            '\''
        }
    }
}

impl Default for RestoreFlags {
    fn default() -> Self {
        RestoreFlags::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Case {
    Upper,
    Lower,
    Unchanged,
}

/// Default limit of nested expressions, queries and joins.
///
/// Every expression node takes one level, not only parentheses and
/// subqueries. A left-deep chain such as `a OR b OR c ...` uses one level
/// per operator, so a generated predicate with a few hundred terms needs
/// [`RestoreOptions::with_max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Options that tune a render call.
///
/// ```
/// # use sqlrestore::format::{RestoreFlags, RestoreOptions};
/// let options = RestoreOptions::new()
///     .with_flags(RestoreFlags::DEFAULT | RestoreFlags::NAME_BACK_QUOTES)
///     .with_max_nesting_depth(64);
/// assert_eq!(options.max_nesting_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestoreOptions {
    pub flags: RestoreFlags,
    /// Deeper trees are rejected with
    /// [`RestoreError::NestingTooDeep`](super::RestoreError::NestingTooDeep).
    pub max_nesting_depth: usize,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            flags: RestoreFlags::DEFAULT,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl RestoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: RestoreFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Raises or lowers the limit; see [`DEFAULT_MAX_NESTING_DEPTH`] for what
    /// counts as a level.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags() {
        let flags = RestoreFlags::default();
        assert!(flags.contains(RestoreFlags::KEYWORD_UPPERCASE));
        assert!(!flags.contains(RestoreFlags::NAME_BACK_QUOTES));
        assert_eq!(flags.keyword_case(), Case::Upper);
        assert_eq!(flags.name_case(), Case::Unchanged);
        assert_eq!(flags.name_quote(), None);
        assert_eq!(flags.string_quote(), '\'');
    }

    #[test]
    fn first_flag_of_a_group_wins() {
        let flags = RestoreFlags::KEYWORD_UPPERCASE
            | RestoreFlags::KEYWORD_LOWERCASE
            | RestoreFlags::NAME_BACK_QUOTES
            | RestoreFlags::NAME_DOUBLE_QUOTES;
        assert_eq!(flags.keyword_case(), Case::Upper);
        assert_eq!(flags.name_quote(), Some('`'));
        assert_eq!(RestoreFlags::STRING_DOUBLE_QUOTES.string_quote(), '"');
    }
}
