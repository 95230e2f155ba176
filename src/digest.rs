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

//! Statement fingerprints.
//!
//! Two statements that differ only in literal values, keyword case or name
//! quoting share the same normalized text and therefore the same digest.

use std::fmt;

use sha2::{Digest as _, Sha256};

use crate::ast::Statement;
use crate::format::{Restore, RestoreError, RestoreFlags, RestoreOptions};

/// Normalized text of a statement together with its SHA-256 fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    pub normalized: String,
    /// Lowercase hex encoding of the SHA-256 of `normalized`
    pub hash: String,
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

/// Renders `stmt` in canonical form: lowercase keywords and names, every
/// name backquoted, literals replaced with `?`. Literal-only `IN` lists and
/// `VALUES` rows collapse to `(...)`.
pub fn normalize(stmt: &Statement) -> Result<String, RestoreError> {
    stmt.to_restored_sql_with(&RestoreOptions::new().with_flags(RestoreFlags::NORMALIZE))
}

/// Computes the normalized text of `stmt` and its fingerprint.
pub fn digest(stmt: &Statement) -> Result<Digest, RestoreError> {
    let normalized = normalize(stmt)?;
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    log::debug!("digest of {} is {hash}", stmt.kind());
    Ok(Digest { normalized, hash })
}
