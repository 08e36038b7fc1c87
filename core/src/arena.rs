//! Fixed-capacity arena for terms, values and environment cells.
//!
//! The arena is made of three independent pools, one per kind of node. Each
//! pool is a `bumpalo` region plus a counter of how many nodes it may still
//! hand out. Nodes are never freed one by one: the whole arena is released
//! when it is dropped, typically at the end of a run.
//!
//! Capacities are entity counts, not bytes. Backing memory grows on demand,
//! so a large capacity costs nothing until it is used.

use bumpalo::Bump;
use core::cell::Cell;
use core::fmt;

use crate::term::Term;
use crate::values::{Env, Value};

/// Default number of term nodes a run may allocate.
pub const DEFAULT_MAX_TERMS: usize = 10_000;

/// Default number of values a run may allocate.
pub const DEFAULT_MAX_VALUES: usize = 1_000_000;

/// Default number of environment cells a run may allocate.
pub const DEFAULT_MAX_ENV_CELLS: usize = 1_000_000;

/// The three pools an [`Arena`] is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Terms,
    Values,
    EnvCells,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Terms => write!(f, "term"),
            PoolKind::Values => write!(f, "value"),
            PoolKind::EnvCells => write!(f, "environment"),
        }
    }
}

/// A pool ran out of capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{pool} pool exhausted: all {capacity} slots are in use")]
pub struct AllocError {
    pub pool: PoolKind,
    pub capacity: usize,
}

/// Capacities of the three pools.
///
/// # Example
///
/// ```
/// use debruijn_core::arena::{Arena, ArenaOptions};
///
/// let arena = Arena::new(ArenaOptions {
///     max_terms: 64,
///     ..ArenaOptions::default()
/// });
/// assert_eq!(arena.usage().terms.capacity, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaOptions {
    /// Maximum number of term nodes.
    ///
    /// Default: 10 000
    pub max_terms: usize,

    /// Maximum number of values (numbers and closures).
    ///
    /// Default: 1 000 000
    pub max_values: usize,

    /// Maximum number of environment cells.
    ///
    /// Default: 1 000 000
    pub max_env_cells: usize,
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_MAX_TERMS,
            max_values: DEFAULT_MAX_VALUES,
            max_env_cells: DEFAULT_MAX_ENV_CELLS,
        }
    }
}

/// How much of one pool has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolUsage {
    pub allocated: usize,
    pub capacity: usize,
}

impl PoolUsage {
    pub fn remaining(&self) -> usize {
        self.capacity - self.allocated
    }
}

impl fmt::Display for PoolUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.allocated, self.capacity)
    }
}

/// Snapshot of all three pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaUsage {
    pub terms: PoolUsage,
    pub values: PoolUsage,
    pub env_cells: PoolUsage,
}

impl fmt::Display for ArenaUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "terms {}, values {}, environment cells {}",
            self.terms, self.values, self.env_cells
        )
    }
}

/// A bump region that refuses to hand out more than `capacity` nodes.
struct Pool {
    kind: PoolKind,
    bump: Bump,
    capacity: usize,
    allocated: Cell<usize>,
}

impl Pool {
    fn new(kind: PoolKind, capacity: usize) -> Self {
        Self {
            kind,
            bump: Bump::new(),
            capacity,
            allocated: Cell::new(0),
        }
    }

    fn alloc<T>(&self, node: T) -> Result<&T, AllocError> {
        let allocated = self.allocated.get();
        if allocated >= self.capacity {
            tracing::debug!(pool = %self.kind, capacity = self.capacity, "Arena pool exhausted");
            return Err(AllocError {
                pool: self.kind,
                capacity: self.capacity,
            });
        }
        self.allocated.set(allocated + 1);
        let node: &T = self.bump.alloc(node);
        Ok(node)
    }

    fn usage(&self) -> PoolUsage {
        PoolUsage {
            allocated: self.allocated.get(),
            capacity: self.capacity,
        }
    }
}

/// Storage for everything a run allocates.
///
/// Allocation takes `&self`, and every returned reference lives as long as
/// the borrow of the arena. The arena is single-threaded (`!Sync`).
pub struct Arena {
    terms: Pool,
    values: Pool,
    env_cells: Pool,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ArenaOptions::default())
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("usage", &self.usage())
            .finish()
    }
}

impl Arena {
    pub fn new(options: ArenaOptions) -> Self {
        Self {
            terms: Pool::new(PoolKind::Terms, options.max_terms),
            values: Pool::new(PoolKind::Values, options.max_values),
            env_cells: Pool::new(PoolKind::EnvCells, options.max_env_cells),
        }
    }

    /// Allocate a term node from the term pool.
    pub fn alloc_term<'a>(&'a self, term: Term<'a>) -> Result<&'a Term<'a>, AllocError> {
        self.terms.alloc(term)
    }

    /// Allocate a value from the value pool.
    pub fn alloc_value<'a>(&'a self, value: Value<'a>) -> Result<&'a Value<'a>, AllocError> {
        self.values.alloc(value)
    }

    /// Allocate an environment cell from the environment pool.
    ///
    /// Only non-empty cells need allocating; the empty environment is
    /// [`Env::empty`].
    pub fn alloc_env<'a>(&'a self, env: Env<'a>) -> Result<&'a Env<'a>, AllocError> {
        self.env_cells.alloc(env)
    }

    pub fn usage(&self) -> ArenaUsage {
        ArenaUsage {
            terms: self.terms.usage(),
            values: self.values.usage(),
            env_cells: self.env_cells.usage(),
        }
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;
