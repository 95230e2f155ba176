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

//! Reserved words of the MySQL-compatible grammar.
//!
//! The table is generated by `build.rs` from `src/keywords.txt`.

include!(concat!(env!("OUT_DIR"), "/keyword_gen.rs"));

/// Returns true when `word` can only be used as an identifier between quotes.
pub fn is_reserved(word: &str) -> bool {
    if word.bytes().any(|b| b.is_ascii_lowercase()) {
        RESERVED_KEYWORD_SET.contains(word.to_ascii_uppercase().as_str())
    } else {
        RESERVED_KEYWORD_SET.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keywords_are_sorted() {
        let mut sorted = RESERVED_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_KEYWORDS);
        for kw in RESERVED_KEYWORDS {
            assert!(RESERVED_KEYWORD_SET.contains(*kw));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(is_reserved("select"));
        assert!(is_reserved("Order"));
        assert!(is_reserved("KEY"));
        assert!(!is_reserved("id"));
        assert!(!is_reserved("users"));
    }
}
