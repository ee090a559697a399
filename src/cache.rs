//! Operation caches for ZDD computations.
//!
//! Results of recursive operations are memoized by `(op, f, g, param)`.
//! The caches live as long as the manager and are only cleared by garbage
//! collection, since a reclaimed node id may later be reused for a
//! different family.

use std::collections::HashMap;

use num_bigint::BigUint;

use crate::reference::ZddId;

/// Cache key for recursive operations.
///
/// `param` carries the scalar argument of unary operations (a variable id
/// for `subset0`/`change`, a size bound for `permit_sym`, a level for
/// `hitting`); binary operations leave it at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub op: OpType,
    pub f: ZddId,
    pub g: ZddId,
    pub param: u32,
}

/// Operation types for caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Union,
    Intersection,
    Difference,
    Join,
    Meet,
    Subset0,
    Subset1,
    Change,
    Quotient,
    Restrict,
    Permit,
    PermitSym,
    Minimal,
    Maximal,
    Hitting,
    FlipAll,
}

impl CacheKey {
    /// Creates a key for a commutative operation, normalizing operand order.
    pub fn commutative(op: OpType, f: ZddId, g: ZddId) -> Self {
        let (f, g) = if f.raw() <= g.raw() { (f, g) } else { (g, f) };
        Self { op, f, g, param: 0 }
    }

    pub fn non_commutative(op: OpType, f: ZddId, g: ZddId) -> Self {
        Self { op, f, g, param: 0 }
    }

    /// Creates a key for a unary operation with a scalar parameter.
    pub fn unary(op: OpType, f: ZddId, param: u32) -> Self {
        Self {
            op,
            f,
            g: ZddId::ZERO,
            param,
        }
    }
}

/// Operation cache using HashMap.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    map: HashMap<CacheKey, ZddId>,
    hits: usize,
    misses: usize,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Looks up a cached result.
    pub fn get(&mut self, key: &CacheKey) -> Option<ZddId> {
        let result = self.map.get(key).copied();
        match result {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        result
    }

    pub fn insert(&mut self, key: CacheKey, value: ZddId) {
        self.map.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

/// Cache for member counts.
#[derive(Debug, Clone, Default)]
pub struct CountCache {
    map: HashMap<ZddId, BigUint>,
}

impl CountCache {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    pub fn get(&self, id: ZddId) -> Option<BigUint> {
        self.map.get(&id).cloned()
    }

    pub fn insert(&mut self, id: ZddId, count: BigUint) {
        self.map.insert(id, count);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
