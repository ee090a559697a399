//! Zero-Suppressed Decision Diagram (ZDD) manager.
//!
//! The manager is the node store of a session: it owns every node, keeps
//! them canonical through per-variable unique tables, tracks which roots are
//! held from the outside, and reclaims the rest on garbage collection.
//!
//! # Overview
//!
//! A node `(x, lo, hi)` stands for `F(lo) ∪ {S ∪ {x} | S ∈ F(hi)}`.
//! Nodes with `hi = ⊥` are never created (zero-suppression), and variables
//! strictly increase along every path. Together with hash-consing this makes
//! the representation canonical: equal families get identical [`ZddId`]s.
//!
//! # Quick Start
//!
//! ```
//! use digraph_zdd::zdd::ZddManager;
//! use num_bigint::BigUint;
//!
//! let mgr = ZddManager::new(3);
//!
//! let x1 = mgr.base(1); // {{1}}
//! let x2 = mgr.base(2); // {{2}}
//!
//! let union = mgr.union(x1, x2); // {{1}, {2}}
//! let joined = mgr.join(x1, x2); // {{1, 2}}
//!
//! assert_eq!(mgr.count(union), BigUint::from(2u32));
//! assert_eq!(mgr.count(joined), BigUint::from(1u32));
//! ```
//!
//! # Memory
//!
//! Ids handed out by the manager stay valid as long as they are reachable
//! from a [retained](ZddManager::retain) root. [`ZddManager::collect_garbage`]
//! frees everything else and clears the operation caches, so it must never
//! run while unretained intermediate results are still needed.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{debug, trace};
use num_bigint::BigUint;

use crate::cache::{Cache, CacheKey, CountCache, OpType};
use crate::config::ZddConfig;
use crate::error::{Error, Result};
use crate::node::ZddNode;
use crate::reference::ZddId;
use crate::subtable::Subtable;
use crate::types::{NodeId, Var};

/// The ZDD manager: owns all nodes and handles operations.
///
/// The number of variables is fixed at construction, matching the size of
/// the edge universe. All operations take `&self`; interior mutability keeps
/// handles cheap to share within a single thread.
///
/// # Terminal Semantics
///
/// - `ZddId::ZERO` (⊥): Empty family
/// - `ZddId::ONE` (⊤): Family containing only the empty set: {∅}
pub struct ZddManager {
    num_vars: u32,

    config: ZddConfig,

    /// Node storage. Index 0 = ZERO terminal, Index 1 = ONE terminal.
    nodes: RefCell<Vec<ZddNode>>,

    /// Unique tables, indexed by `var.index()`.
    subtables: RefCell<Vec<Subtable>>,

    /// Reclaimed slots available for reuse.
    free: RefCell<Vec<NodeId>>,

    /// External reference counts of retained roots.
    refs: RefCell<HashMap<ZddId, usize>>,

    cache: RefCell<Cache>,

    count_cache: RefCell<CountCache>,

    gc_threshold: Cell<usize>,
}

impl fmt::Debug for ZddManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZddManager")
            .field("num_vars", &self.num_vars)
            .field("num_nodes", &self.num_nodes())
            .field("retained", &self.refs.borrow().len())
            .field("cache_entries", &self.cache.borrow().len())
            .finish()
    }
}

impl ZddManager {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a manager for variables `1..=num_vars`.
    pub fn new(num_vars: usize) -> Self {
        Self::with_config(num_vars, ZddConfig::default())
    }

    pub fn with_config(num_vars: usize, config: ZddConfig) -> Self {
        assert!(num_vars < u32::MAX as usize - 1, "too many variables: {}", num_vars);

        let mut nodes = Vec::with_capacity(config.initial_capacity.max(2));
        nodes.push(ZddNode::default()); // ⊥
        nodes.push(ZddNode::default()); // ⊤

        let subtables = (1..=num_vars as u32)
            .map(|id| Subtable::with_bucket_bits(Var::new(id), config.bucket_bits))
            .collect();

        Self {
            num_vars: num_vars as u32,
            config,
            nodes: RefCell::new(nodes),
            subtables: RefCell::new(subtables),
            free: RefCell::new(Vec::new()),
            refs: RefCell::new(HashMap::new()),
            cache: RefCell::new(Cache::with_capacity(config.cache_capacity)),
            count_cache: RefCell::new(CountCache::new()),
            gc_threshold: Cell::new(config.gc_threshold),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars as usize
    }

    pub fn config(&self) -> &ZddConfig {
        &self.config
    }

    /// Iterates over all variables, top to bottom.
    pub fn vars(&self) -> impl DoubleEndedIterator<Item = Var> {
        (1..=self.num_vars).map(Var::new)
    }

    // ========================================================================
    // Node Construction
    // ========================================================================

    /// Creates or retrieves the node `(var, lo, hi)`.
    ///
    /// Applies zero-suppression: if `hi = ⊥`, returns `lo` instead.
    ///
    /// # Panics
    ///
    /// Panics if `var` is outside the universe or not strictly above the
    /// variable of a non-terminal child. Such a request can only come from a
    /// bug in a constructor, never from user input.
    pub fn get_node(&self, var: Var, lo: ZddId, hi: ZddId) -> ZddId {
        if hi.is_zero() {
            return lo;
        }
        if let Err(msg) = self.check_node(var, lo, hi) {
            panic!("get_node({}, {}, {}): {}", var, lo, hi, msg);
        }
        self.intern(var, lo, hi)
    }

    /// Checked variant of [`get_node`](Self::get_node) for untrusted input.
    pub fn try_get_node(&self, var: Var, lo: ZddId, hi: ZddId) -> Result<ZddId> {
        if hi.is_zero() {
            return Ok(lo);
        }
        self.check_node(var, lo, hi).map_err(Error::Malformed)?;
        Ok(self.intern(var, lo, hi))
    }

    fn check_node(&self, var: Var, lo: ZddId, hi: ZddId) -> std::result::Result<(), String> {
        if var.is_zero() || var.id() > self.num_vars {
            return Err(format!("variable {} outside of 1..={}", var, self.num_vars));
        }
        let nodes = self.nodes.borrow();
        for child in [lo, hi] {
            if child.is_terminal() {
                continue;
            }
            match nodes.get(child.index()) {
                Some(node) if !node.is_vacant() => {
                    if node.var <= var {
                        return Err(format!("child {} has variable {} not below {}", child, node.var, var));
                    }
                }
                _ => return Err(format!("child {} does not exist", child)),
            }
        }
        Ok(())
    }

    fn intern(&self, var: Var, lo: ZddId, hi: ZddId) -> ZddId {
        {
            let subtables = self.subtables.borrow();
            let nodes = self.nodes.borrow();
            if let Some(id) = subtables[var.index()].find(lo, hi, &nodes) {
                return ZddId::from_node(id);
            }
        }

        let node = ZddNode::new(var, lo, hi);
        let mut nodes = self.nodes.borrow_mut();
        let id = match self.free.borrow_mut().pop() {
            Some(id) => {
                nodes[id.index()] = node;
                id
            }
            None => {
                assert!(nodes.len() < NodeId::INVALID.index(), "node storage exhausted");
                let id = NodeId::new(nodes.len() as u32);
                nodes.push(node);
                id
            }
        };
        self.subtables.borrow_mut()[var.index()].insert(id, &mut nodes);
        trace!("new node {} = ({}, {}, {})", id, var, lo, hi);

        ZddId::from_node(id)
    }

    /// Access node data.
    pub fn node(&self, id: ZddId) -> ZddNode {
        debug_assert!(!id.is_terminal(), "terminal {} has no node data", id);
        self.nodes.borrow()[id.index()]
    }

    /// Top variable of `f`; terminals report the virtual variable below the
    /// last one.
    pub fn top_var(&self, f: ZddId) -> Var {
        if f.is_terminal() {
            Var::new(self.num_vars + 1)
        } else {
            self.node(f).var
        }
    }

    // ========================================================================
    // Reference Counting & Garbage Collection
    // ========================================================================

    /// Marks `f` as held from the outside.
    pub fn retain(&self, f: ZddId) {
        if !f.is_terminal() {
            *self.refs.borrow_mut().entry(f).or_insert(0) += 1;
        }
    }

    /// Drops one external reference to `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` is not retained.
    pub fn release(&self, f: ZddId) {
        if f.is_terminal() {
            return;
        }
        let mut refs = self.refs.borrow_mut();
        match refs.get_mut(&f) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                refs.remove(&f);
            }
            None => panic!("release of unretained node {}", f),
        }
    }

    /// Number of external references to `f`.
    pub fn ref_count(&self, f: ZddId) -> usize {
        self.refs.borrow().get(&f).copied().unwrap_or(0)
    }

    /// Frees every node unreachable from a retained root.
    ///
    /// Clears the operation caches. Returns the number of reclaimed nodes.
    pub fn collect_garbage(&self) -> usize {
        debug!("Collecting garbage...");

        self.clear_caches();

        let roots: Vec<ZddId> = self.refs.borrow().keys().copied().collect();
        let alive = self.descendants(roots);

        let mut nodes = self.nodes.borrow_mut();
        let mut free = self.free.borrow_mut();
        let mut reclaimed = 0;
        for subtable in self.subtables.borrow_mut().iter_mut() {
            for id in subtable.retain(&mut nodes, |id| alive.contains(&id)) {
                nodes[id.index()] = ZddNode::default();
                free.push(id);
                reclaimed += 1;
            }
        }

        debug!("Reclaimed {} nodes, {} alive", reclaimed, alive.len());
        reclaimed
    }

    /// Collects garbage if automatic collection is enabled and the store has
    /// grown past the current threshold.
    ///
    /// Must only be called between top-level operations.
    pub fn maybe_collect_garbage(&self) {
        if !self.config.gc_enabled || self.num_nodes() <= self.gc_threshold.get() {
            return;
        }
        self.collect_garbage();
        let live = self.num_nodes();
        self.gc_threshold.set(self.gc_threshold.get().max(2 * live));
    }

    /// All non-terminal nodes reachable from `roots`.
    fn descendants(&self, roots: impl IntoIterator<Item = ZddId>) -> HashSet<NodeId> {
        let mut visited = HashSet::new();
        let mut stack: Vec<ZddId> = roots.into_iter().collect();
        while let Some(f) = stack.pop() {
            if f.is_terminal() || !visited.insert(f.node_id()) {
                continue;
            }
            let node = self.node(f);
            stack.push(node.lo);
            stack.push(node.hi);
        }
        visited
    }

    // ========================================================================
    // Primitive Constructors
    // ========================================================================

    /// Creates a base set: `{{var}}`.
    pub fn base(&self, var: impl Into<Var>) -> ZddId {
        self.get_node(var.into(), ZddId::ZERO, ZddId::ONE)
    }

    /// Creates a singleton family: `{{v1, v2, ..., vn}}`.
    pub fn singleton(&self, vars: impl IntoIterator<Item = impl Into<Var>>) -> ZddId {
        let mut vars: Vec<Var> = vars.into_iter().map(|v| v.into()).collect();
        vars.sort_unstable();
        vars.dedup();

        let mut result = ZddId::ONE;
        for &var in vars.iter().rev() {
            result = self.get_node(var, ZddId::ZERO, result);
        }
        result
    }

    /// Creates the power set of the given variables.
    pub fn powerset(&self, vars: impl IntoIterator<Item = impl Into<Var>>) -> ZddId {
        let mut vars: Vec<Var> = vars.into_iter().map(|v| v.into()).collect();
        vars.sort_unstable();
        vars.dedup();

        let mut result = ZddId::ONE;
        for &var in vars.iter().rev() {
            result = self.get_node(var, result, result);
        }
        result
    }

    /// Power set of all variables from `var` to the bottom of the order.
    pub fn powerset_from(&self, var: Var) -> ZddId {
        self.powerset((var.id()..=self.num_vars).map(Var::new))
    }

    /// Power set of the whole universe.
    pub fn universe_powerset(&self) -> ZddId {
        self.powerset_from(Var::new(1))
    }

    // ========================================================================
    // Set-Theoretic Operations
    // ========================================================================

    /// Union: `F ∪ G`.
    pub fn union(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() {
            return g;
        }
        if g.is_zero() || f == g {
            return f;
        }

        let key = CacheKey::commutative(OpType::Union, f, g);
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let result = if f.is_one() {
            let g_node = self.node(g);
            let lo = self.union(ZddId::ONE, g_node.lo);
            self.get_node(g_node.var, lo, g_node.hi)
        } else if g.is_one() {
            let f_node = self.node(f);
            let lo = self.union(f_node.lo, ZddId::ONE);
            self.get_node(f_node.var, lo, f_node.hi)
        } else {
            let f_node = self.node(f);
            let g_node = self.node(g);
            match f_node.var.cmp(&g_node.var) {
                Ordering::Less => {
                    let lo = self.union(f_node.lo, g);
                    self.get_node(f_node.var, lo, f_node.hi)
                }
                Ordering::Greater => {
                    let lo = self.union(f, g_node.lo);
                    self.get_node(g_node.var, lo, g_node.hi)
                }
                Ordering::Equal => {
                    let lo = self.union(f_node.lo, g_node.lo);
                    let hi = self.union(f_node.hi, g_node.hi);
                    self.get_node(f_node.var, lo, hi)
                }
            }
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Intersection: `F ∩ G`.
    pub fn intersection(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() || g.is_zero() {
            return ZddId::ZERO;
        }
        if f == g {
            return f;
        }
        if f.is_one() {
            return if self.contains_empty(g) { ZddId::ONE } else { ZddId::ZERO };
        }
        if g.is_one() {
            return if self.contains_empty(f) { ZddId::ONE } else { ZddId::ZERO };
        }

        let key = CacheKey::commutative(OpType::Intersection, f, g);
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let g_node = self.node(g);
        let result = match f_node.var.cmp(&g_node.var) {
            Ordering::Less => self.intersection(f_node.lo, g),
            Ordering::Greater => self.intersection(f, g_node.lo),
            Ordering::Equal => {
                let lo = self.intersection(f_node.lo, g_node.lo);
                let hi = self.intersection(f_node.hi, g_node.hi);
                self.get_node(f_node.var, lo, hi)
            }
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Difference: `F \ G`.
    pub fn difference(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() || f == g {
            return ZddId::ZERO;
        }
        if g.is_zero() {
            return f;
        }
        if f.is_one() {
            return if self.contains_empty(g) { ZddId::ZERO } else { ZddId::ONE };
        }

        let key = CacheKey::non_commutative(OpType::Difference, f, g);
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let result = if g.is_one() {
            let lo = self.difference(f_node.lo, ZddId::ONE);
            self.get_node(f_node.var, lo, f_node.hi)
        } else {
            let g_node = self.node(g);
            match f_node.var.cmp(&g_node.var) {
                Ordering::Less => {
                    let lo = self.difference(f_node.lo, g);
                    self.get_node(f_node.var, lo, f_node.hi)
                }
                Ordering::Greater => self.difference(f, g_node.lo),
                Ordering::Equal => {
                    let lo = self.difference(f_node.lo, g_node.lo);
                    let hi = self.difference(f_node.hi, g_node.hi);
                    self.get_node(f_node.var, lo, hi)
                }
            }
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Symmetric difference: `F △ G`.
    pub fn symmetric_difference(&self, f: ZddId, g: ZddId) -> ZddId {
        let f_only = self.difference(f, g);
        let g_only = self.difference(g, f);
        self.union(f_only, g_only)
    }

    // ========================================================================
    // Variable-wise Operations
    // ========================================================================

    /// Subset0: members NOT containing `var`.
    pub fn subset0(&self, f: ZddId, var: Var) -> ZddId {
        if f.is_terminal() {
            return f;
        }

        let key = CacheKey::unary(OpType::Subset0, f, var.id());
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let result = match f_node.var.cmp(&var) {
            Ordering::Less => {
                let lo = self.subset0(f_node.lo, var);
                let hi = self.subset0(f_node.hi, var);
                self.get_node(f_node.var, lo, hi)
            }
            Ordering::Equal => f_node.lo,
            Ordering::Greater => f,
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Subset1: members containing `var`, with `var` removed from each.
    pub fn subset1(&self, f: ZddId, var: Var) -> ZddId {
        if f.is_terminal() {
            return ZddId::ZERO;
        }

        let key = CacheKey::unary(OpType::Subset1, f, var.id());
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let result = match f_node.var.cmp(&var) {
            Ordering::Less => {
                let lo = self.subset1(f_node.lo, var);
                let hi = self.subset1(f_node.hi, var);
                self.get_node(f_node.var, lo, hi)
            }
            Ordering::Equal => f_node.hi,
            Ordering::Greater => ZddId::ZERO,
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Change: toggle `var` in every member.
    pub fn change(&self, f: ZddId, var: Var) -> ZddId {
        if f.is_zero() {
            return ZddId::ZERO;
        }
        if f.is_one() {
            return self.base(var);
        }

        let key = CacheKey::unary(OpType::Change, f, var.id());
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let result = match f_node.var.cmp(&var) {
            Ordering::Less => {
                let lo = self.change(f_node.lo, var);
                let hi = self.change(f_node.hi, var);
                self.get_node(f_node.var, lo, hi)
            }
            Ordering::Equal => self.get_node(var, f_node.hi, f_node.lo),
            Ordering::Greater => self.get_node(var, ZddId::ZERO, f),
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Onset: members containing `var` (keeping `var`).
    pub fn onset(&self, f: ZddId, var: Var) -> ZddId {
        let s1 = self.subset1(f, var);
        self.change(s1, var)
    }

    /// Offset: members NOT containing `var` (same as subset0).
    pub fn offset(&self, f: ZddId, var: Var) -> ZddId {
        self.subset0(f, var)
    }

    /// Removes `var` from every member: `{S \ {var} | S ∈ F}`.
    pub fn erase(&self, f: ZddId, var: Var) -> ZddId {
        let without = self.subset0(f, var);
        let stripped = self.subset1(f, var);
        self.union(without, stripped)
    }

    // ========================================================================
    // Pairwise Operations
    // ========================================================================

    /// Join: `{S ∪ T | S ∈ F, T ∈ G}`.
    pub fn join(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() || g.is_zero() {
            return ZddId::ZERO;
        }
        if f.is_one() {
            return g;
        }
        if g.is_one() {
            return f;
        }

        let key = CacheKey::commutative(OpType::Join, f, g);
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let g_node = self.node(g);
        let result = match f_node.var.cmp(&g_node.var) {
            Ordering::Less => {
                let lo = self.join(f_node.lo, g);
                let hi = self.join(f_node.hi, g);
                self.get_node(f_node.var, lo, hi)
            }
            Ordering::Greater => {
                let lo = self.join(f, g_node.lo);
                let hi = self.join(f, g_node.hi);
                self.get_node(g_node.var, lo, hi)
            }
            Ordering::Equal => {
                let lo = self.join(f_node.lo, g_node.lo);
                let hi_lo = self.join(f_node.hi, g_node.lo);
                let lo_hi = self.join(f_node.lo, g_node.hi);
                let hi_hi = self.join(f_node.hi, g_node.hi);
                let hi = self.union(hi_lo, self.union(lo_hi, hi_hi));
                self.get_node(f_node.var, lo, hi)
            }
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    /// Meet: `{S ∩ T | S ∈ F, T ∈ G}`, the empty intersection included.
    pub fn meet(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() || g.is_zero() {
            return ZddId::ZERO;
        }
        if f.is_one() || g.is_one() {
            return ZddId::ONE;
        }

        let key = CacheKey::commutative(OpType::Meet, f, g);
        if let Some(result) = self.cache.borrow_mut().get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let g_node = self.node(g);
        let result = match f_node.var.cmp(&g_node.var) {
            // The top variable of f is absent from every member of g.
            Ordering::Less => self.meet(self.union(f_node.lo, f_node.hi), g),
            Ordering::Greater => self.meet(f, self.union(g_node.lo, g_node.hi)),
            Ordering::Equal => {
                let hi = self.meet(f_node.hi, g_node.hi);
                let lo_lo = self.meet(f_node.lo, g_node.lo);
                let lo_hi = self.meet(f_node.lo, g_node.hi);
                let hi_lo = self.meet(f_node.hi, g_node.lo);
                let lo = self.union(lo_lo, self.union(lo_hi, hi_lo));
                self.get_node(f_node.var, lo, hi)
            }
        };

        self.cache.borrow_mut().insert(key, result);
        result
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns true if the family contains the empty set.
    pub fn contains_empty(&self, f: ZddId) -> bool {
        let mut current = f;
        while !current.is_terminal() {
            current = self.node(current).lo;
        }
        current.is_one()
    }

    /// Returns true if the family contains exactly the given set.
    pub fn contains(&self, f: ZddId, set: &[Var]) -> bool {
        let mut sorted: Vec<Var> = set.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut current = f;
        let mut rest = sorted.as_slice();
        loop {
            let Some((&var, tail)) = rest.split_first() else {
                return self.contains_empty(current);
            };
            if current.is_terminal() {
                return false;
            }
            let node = self.node(current);
            match node.var.cmp(&var) {
                Ordering::Less => current = node.lo,
                Ordering::Equal => {
                    current = node.hi;
                    rest = tail;
                }
                Ordering::Greater => return false,
            }
        }
    }

    /// Counts the members of the family.
    pub fn count(&self, f: ZddId) -> BigUint {
        if f.is_zero() {
            return BigUint::from(0u32);
        }
        if f.is_one() {
            return BigUint::from(1u32);
        }
        if let Some(cached) = self.count_cache.borrow().get(f) {
            return cached;
        }

        let f_node = self.node(f);
        let count = self.count(f_node.lo) + self.count(f_node.hi);

        self.count_cache.borrow_mut().insert(f, count.clone());
        count
    }

    /// Number of distinct decision nodes reachable from `f`.
    pub fn node_count(&self, f: ZddId) -> usize {
        self.descendants([f]).len()
    }

    /// Number of live decision nodes in the store.
    pub fn num_nodes(&self) -> usize {
        self.nodes.borrow().len() - 2 - self.free.borrow().len()
    }

    // ========================================================================
    // Cache Management
    // ========================================================================

    pub(crate) fn cache_get(&self, key: &CacheKey) -> Option<ZddId> {
        self.cache.borrow_mut().get(key)
    }

    pub(crate) fn cache_put(&self, key: CacheKey, value: ZddId) {
        self.cache.borrow_mut().insert(key, value);
    }

    /// `(hits, misses)` of the operation cache.
    pub fn cache_stats(&self) -> (usize, usize) {
        let cache = self.cache.borrow();
        (cache.hits(), cache.misses())
    }

    /// Clears all caches.
    pub fn clear_caches(&self) {
        self.cache.borrow_mut().clear();
        self.count_cache.borrow_mut().clear();
    }
}
