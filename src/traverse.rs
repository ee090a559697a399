//! Weighted traversal and uniform sampling.
//!
//! [`WeightedSearch`] enumerates the members of a family in order of
//! non-increasing total weight. For every node it memoizes the best weight
//! any completion below it can still reach, and keeps a priority queue of
//! partial members ordered by `accumulated + best(node)`. Since that bound
//! is exact, the first completed member popped from the queue is always a
//! heaviest remaining one.
//!
//! Ties are broken lexicographically along the variable order: of two
//! members with equal weight, the one taking the earlier differing variable
//! comes first.
//!
//! The search holds no borrow of the manager between steps, so an owner can
//! suspend it and resume later as long as the root stays retained.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::trace;
use num_bigint::RandBigInt;
use rand::Rng;

use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

/// A partial member waiting in the queue.
#[derive(Debug, Clone)]
struct Candidate {
    /// Weight of the heaviest completion through this candidate.
    bound: f64,
    /// Weight of the variables taken so far.
    acc: f64,
    /// Branches taken from the root, `true` for hi.
    path: Vec<bool>,
    set: Vec<Var>,
    node: ZddId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: larger bound first, then the path taking hi earlier.
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Resumable best-first enumeration of a family by weight.
#[derive(Debug, Clone)]
pub struct WeightedSearch {
    /// Weight per variable, indexed by `var.index()`.
    weights: Vec<f64>,
    /// -1 when searching for the lightest members.
    sign: f64,
    best: HashMap<ZddId, f64>,
    queue: BinaryHeap<Candidate>,
}

impl WeightedSearch {
    /// Heaviest members of `root` first.
    pub fn max(mgr: &ZddManager, root: ZddId, weights: &[f64]) -> Self {
        assert_eq!(weights.len(), mgr.num_vars(), "one weight per variable");
        Self::start(mgr, root, weights.to_vec(), 1.0)
    }

    /// Lightest members of `root` first.
    pub fn min(mgr: &ZddManager, root: ZddId, weights: &[f64]) -> Self {
        assert_eq!(weights.len(), mgr.num_vars(), "one weight per variable");
        Self::start(mgr, root, weights.iter().map(|w| -w).collect(), -1.0)
    }

    fn start(mgr: &ZddManager, root: ZddId, weights: Vec<f64>, sign: f64) -> Self {
        let mut search = Self {
            weights,
            sign,
            best: HashMap::new(),
            queue: BinaryHeap::new(),
        };
        if !root.is_zero() {
            let bound = search.best(mgr, root);
            search.queue.push(Candidate {
                bound,
                acc: 0.0,
                path: Vec::new(),
                set: Vec::new(),
                node: root,
            });
        }
        search
    }

    /// Best weight reachable from `f` down to ⊤.
    fn best(&mut self, mgr: &ZddManager, f: ZddId) -> f64 {
        if f.is_zero() {
            return f64::NEG_INFINITY;
        }
        if f.is_one() {
            return 0.0;
        }
        if let Some(&b) = self.best.get(&f) {
            return b;
        }

        let node = mgr.node(f);
        let lo = self.best(mgr, node.lo);
        let hi = self.weights[node.var.index()] + self.best(mgr, node.hi);
        let b = lo.max(hi);
        self.best.insert(f, b);
        b
    }

    /// Next member together with its weight (in the caller's sign).
    pub fn next_weighted(&mut self, mgr: &ZddManager) -> Option<(Vec<Var>, f64)> {
        while let Some(cand) = self.queue.pop() {
            if cand.node.is_one() {
                trace!("yield {:?} with weight {}", cand.set, cand.acc);
                return Some((cand.set, self.sign * cand.acc));
            }

            let node = mgr.node(cand.node);
            if !node.lo.is_zero() {
                let mut path = cand.path.clone();
                path.push(false);
                let bound = cand.acc + self.best(mgr, node.lo);
                self.queue.push(Candidate {
                    bound,
                    acc: cand.acc,
                    path,
                    set: cand.set.clone(),
                    node: node.lo,
                });
            }

            let acc = cand.acc + self.weights[node.var.index()];
            let bound = acc + self.best(mgr, node.hi);
            let mut path = cand.path;
            path.push(true);
            let mut set = cand.set;
            set.push(node.var);
            self.queue.push(Candidate {
                bound,
                acc,
                path,
                set,
                node: node.hi,
            });
        }
        None
    }

    pub fn next(&mut self, mgr: &ZddManager) -> Option<Vec<Var>> {
        self.next_weighted(mgr).map(|(set, _)| set)
    }
}

/// Borrowing iterator over [`WeightedSearch`].
pub struct WeightedIter<'a> {
    mgr: &'a ZddManager,
    search: WeightedSearch,
}

impl Iterator for WeightedIter<'_> {
    type Item = Vec<Var>;

    fn next(&mut self) -> Option<Self::Item> {
        self.search.next(self.mgr)
    }
}

impl ZddManager {
    /// Members of `f` by non-increasing total weight.
    pub fn max_sets(&self, f: ZddId, weights: &[f64]) -> WeightedIter<'_> {
        WeightedIter {
            mgr: self,
            search: WeightedSearch::max(self, f, weights),
        }
    }

    /// Members of `f` by non-decreasing total weight.
    pub fn min_sets(&self, f: ZddId, weights: &[f64]) -> WeightedIter<'_> {
        WeightedIter {
            mgr: self,
            search: WeightedSearch::min(self, f, weights),
        }
    }

    /// Draws one member of `f` uniformly at random.
    ///
    /// Each branch is taken with probability proportional to the number of
    /// members below it.
    pub fn sample<R: Rng + ?Sized>(&self, f: ZddId, rng: &mut R) -> Option<Vec<Var>> {
        if f.is_zero() {
            return None;
        }

        let mut r = rng.gen_biguint_below(&self.count(f));
        let mut set = Vec::new();
        let mut current = f;
        while !current.is_terminal() {
            let node = self.node(current);
            let lo = self.count(node.lo);
            if r < lo {
                current = node.lo;
            } else {
                r -= lo;
                set.push(node.var);
                current = node.hi;
            }
        }
        debug_assert!(current.is_one());
        Some(set)
    }
}
