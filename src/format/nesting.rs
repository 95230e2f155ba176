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

//! Scoped counters threaded through a render call.

use std::cell::Cell;
use std::rc::Rc;

use super::RestoreError;

/// Tracks how many nested nodes remain before a render is rejected.
///
/// Every call to [`RecursionCounter::try_decrease`] hands out a
/// [`DepthGuard`] that gives the level back when dropped, on success and on
/// early error returns alike.
#[derive(Debug)]
pub(crate) struct RecursionCounter {
    remaining_depth: Rc<Cell<usize>>,
    limit: usize,
}

impl RecursionCounter {
    pub fn new(limit: usize) -> Self {
        Self {
            remaining_depth: Rc::new(Cell::new(limit)),
            limit,
        }
    }

    pub fn try_decrease(&self) -> Result<DepthGuard, RestoreError> {
        let old_value = self.remaining_depth.get();
        if old_value == 0 {
            log::debug!("render rejected, nesting deeper than {}", self.limit);
            return Err(RestoreError::NestingTooDeep { limit: self.limit });
        }
        self.remaining_depth.set(old_value - 1);
        Ok(DepthGuard {
            remaining_depth: Rc::clone(&self.remaining_depth),
        })
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.remaining_depth.get()
    }
}

/// Returned by [`RecursionCounter::try_decrease`].
#[derive(Debug)]
pub struct DepthGuard {
    remaining_depth: Rc<Cell<usize>>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let old_value = self.remaining_depth.get();
        self.remaining_depth.set(old_value + 1);
    }
}

/// Current number of enclosing joins.
#[derive(Debug, Default)]
pub(crate) struct JoinLevel(Rc<Cell<usize>>);

impl JoinLevel {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn enter(&self) -> JoinLevelGuard {
        self.replace(self.get() + 1)
    }

    /// A subquery starts its own `FROM` clause at level zero.
    pub fn reset(&self) -> JoinLevelGuard {
        self.replace(0)
    }

    fn replace(&self, level: usize) -> JoinLevelGuard {
        let previous = self.0.replace(level);
        JoinLevelGuard {
            level: Rc::clone(&self.0),
            previous,
        }
    }
}

/// Returned by [`JoinLevel::enter`] and [`JoinLevel::reset`]; puts the
/// previous level back when dropped.
#[derive(Debug)]
pub struct JoinLevelGuard {
    level: Rc<Cell<usize>>,
    previous: usize,
}

impl Drop for JoinLevelGuard {
    fn drop(&mut self) {
        self.level.set(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_restore_on_drop() {
        let counter = RecursionCounter::new(2);
        {
            let _a = counter.try_decrease().unwrap();
            let _b = counter.try_decrease().unwrap();
            assert_eq!(counter.remaining(), 0);
            assert_eq!(
                counter.try_decrease().unwrap_err(),
                RestoreError::NestingTooDeep { limit: 2 }
            );
        }
        assert_eq!(counter.remaining(), 2);
    }

    #[test]
    fn join_level_survives_early_return() {
        fn fails(level: &JoinLevel) -> Result<(), RestoreError> {
            let _guard = level.enter();
            assert_eq!(level.get(), 1);
            Err(RestoreError::malformed("join without left side"))
        }

        let level = JoinLevel::default();
        assert!(fails(&level).is_err());
        assert_eq!(level.get(), 0);
    }

    #[test]
    fn reset_is_scoped() {
        let level = JoinLevel::default();
        let _outer = level.enter();
        let _inner = level.enter();
        {
            let _subquery = level.reset();
            assert_eq!(level.get(), 0);
            let _join = level.enter();
            assert_eq!(level.get(), 1);
        }
        assert_eq!(level.get(), 2);
    }
}
