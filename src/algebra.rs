//! Derived family algebra.
//!
//! Everything here is built on the primitives of [`ZddManager`] and shares
//! its operation cache:
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`quotient`](ZddManager::quotient) `F / G` | `{H | ∀T ∈ G: H ∩ T = ∅, H ∪ T ∈ F}` |
//! | [`remainder`](ZddManager::remainder) `F % G` | `F \ (G ⊗ (F / G))` |
//! | [`invert`](ZddManager::invert) | power set of the universe minus `F` |
//! | [`flip_all`](ZddManager::flip_all) | every member with every variable toggled |
//! | [`permit`](ZddManager::permit) | members that are subsets of some member of `G` |
//! | [`restrict`](ZddManager::restrict) | members that are supersets of some member of `G` |
//! | [`minimal`](ZddManager::minimal) / [`maximal`](ZddManager::maximal) | inclusion-minimal / maximal members |
//! | [`hitting`](ZddManager::hitting) | all sets of variables meeting every member |
//! | [`permit_sym`](ZddManager::permit_sym) | members with at most `k` elements |

use std::collections::HashMap;

use crate::cache::{CacheKey, OpType};
use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

impl ZddManager {
    // ========================================================================
    // Division
    // ========================================================================

    /// Weak division `F / G`.
    ///
    /// # Panics
    ///
    /// Panics if `g` is the empty family.
    pub fn quotient(&self, f: ZddId, g: ZddId) -> ZddId {
        assert!(!g.is_zero(), "division by the empty family");
        if g.is_one() {
            return f;
        }
        if f == g {
            return ZddId::ONE;
        }
        if f.is_terminal() {
            return ZddId::ZERO;
        }

        let key = CacheKey::non_commutative(OpType::Quotient, f, g);
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let g_node = self.node(g);
        let x = g_node.var;
        let mut result = self.quotient(self.subset1(f, x), g_node.hi);
        if !result.is_zero() && !g_node.lo.is_zero() {
            let rest = self.quotient(self.subset0(f, x), g_node.lo);
            result = self.intersection(result, rest);
        }

        self.cache_put(key, result);
        result
    }

    /// Remainder of weak division: `F \ (G ⊗ (F / G))`.
    pub fn remainder(&self, f: ZddId, g: ZddId) -> ZddId {
        let q = self.quotient(f, g);
        self.difference(f, self.join(g, q))
    }

    // ========================================================================
    // Complements
    // ========================================================================

    /// All subsets of the universe that are NOT members of `f`.
    pub fn invert(&self, f: ZddId) -> ZddId {
        self.difference(self.universe_powerset(), f)
    }

    /// Replaces every member `S` with `U \ S`.
    pub fn flip_all(&self, f: ZddId) -> ZddId {
        self.flip_from(f, Var::new(1))
    }

    /// Flips all variables from `v` downwards; variables above `v` are
    /// already decided.
    fn flip_from(&self, f: ZddId, v: Var) -> ZddId {
        if f.is_zero() {
            return ZddId::ZERO;
        }
        if v.id() as usize > self.num_vars() {
            return f;
        }

        let key = CacheKey::unary(OpType::FlipAll, f, v.id());
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let result = if self.top_var(f) > v {
            let rest = self.flip_from(f, v.next());
            self.get_node(v, ZddId::ZERO, rest)
        } else {
            let node = self.node(f);
            let lo = self.flip_from(node.hi, v.next());
            let hi = self.flip_from(node.lo, v.next());
            self.get_node(v, lo, hi)
        };

        self.cache_put(key, result);
        result
    }

    // ========================================================================
    // Subset / Superset Filters
    // ========================================================================

    /// Members of `f` that are subsets of at least one member of `g`.
    pub fn permit(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() || g.is_zero() {
            return ZddId::ZERO;
        }
        if f == g || f.is_one() {
            return f;
        }
        if g.is_one() {
            return if self.contains_empty(f) { ZddId::ONE } else { ZddId::ZERO };
        }

        let key = CacheKey::non_commutative(OpType::Permit, f, g);
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let g_node = self.node(g);
        let result = if f_node.var < g_node.var {
            self.permit(f_node.lo, g)
        } else if f_node.var > g_node.var {
            self.permit(f, self.union(g_node.lo, g_node.hi))
        } else {
            let lo = self.permit(f_node.lo, self.union(g_node.lo, g_node.hi));
            let hi = self.permit(f_node.hi, g_node.hi);
            self.get_node(f_node.var, lo, hi)
        };

        self.cache_put(key, result);
        result
    }

    /// Members of `f` that are supersets of at least one member of `g`.
    pub fn restrict(&self, f: ZddId, g: ZddId) -> ZddId {
        if f.is_zero() || g.is_zero() {
            return ZddId::ZERO;
        }
        if f == g || self.contains_empty(g) {
            return f;
        }
        if f.is_one() {
            return ZddId::ZERO;
        }

        let key = CacheKey::non_commutative(OpType::Restrict, f, g);
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let f_node = self.node(f);
        let g_node = self.node(g);
        let result = if f_node.var < g_node.var {
            let lo = self.restrict(f_node.lo, g);
            let hi = self.restrict(f_node.hi, g);
            self.get_node(f_node.var, lo, hi)
        } else if f_node.var > g_node.var {
            self.restrict(f, g_node.lo)
        } else {
            let lo = self.restrict(f_node.lo, g_node.lo);
            let hi = self.restrict(f_node.hi, self.union(g_node.lo, g_node.hi));
            self.get_node(f_node.var, lo, hi)
        };

        self.cache_put(key, result);
        result
    }

    /// Members of `f` that are not subsets of any member of `g`.
    pub fn non_subsets(&self, f: ZddId, g: ZddId) -> ZddId {
        self.difference(f, self.permit(f, g))
    }

    /// Members of `f` that are not supersets of any member of `g`.
    pub fn non_supersets(&self, f: ZddId, g: ZddId) -> ZddId {
        self.difference(f, self.restrict(f, g))
    }

    /// Returns true if every member of `f` is a member of `g`.
    pub fn is_subset(&self, f: ZddId, g: ZddId) -> bool {
        self.difference(f, g).is_zero()
    }

    /// Returns true if `f` and `g` share no member.
    pub fn is_disjoint(&self, f: ZddId, g: ZddId) -> bool {
        self.intersection(f, g).is_zero()
    }

    // ========================================================================
    // Extremal Members
    // ========================================================================

    /// Members with no proper subset in the family.
    pub fn minimal(&self, f: ZddId) -> ZddId {
        if f.is_terminal() {
            return f;
        }

        let key = CacheKey::unary(OpType::Minimal, f, 0);
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let node = self.node(f);
        let lo = self.minimal(node.lo);
        let with = self.minimal(node.hi);
        let hi = self.non_supersets(with, lo);
        let result = self.get_node(node.var, lo, hi);

        self.cache_put(key, result);
        result
    }

    /// Members with no proper superset in the family.
    pub fn maximal(&self, f: ZddId) -> ZddId {
        if f.is_terminal() {
            return f;
        }

        let key = CacheKey::unary(OpType::Maximal, f, 0);
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let node = self.node(f);
        let hi = self.maximal(node.hi);
        let without = self.maximal(node.lo);
        let lo = self.non_subsets(without, hi);
        let result = self.get_node(node.var, lo, hi);

        self.cache_put(key, result);
        result
    }

    /// Hitting sets: every subset of the universe that intersects each
    /// member of `f`.
    ///
    /// A family containing ∅ has no hitting set; the empty family is hit by
    /// every subset.
    pub fn hitting(&self, f: ZddId) -> ZddId {
        self.hitting_from(f, Var::new(1))
    }

    fn hitting_from(&self, f: ZddId, v: Var) -> ZddId {
        if f.is_zero() {
            return self.powerset_from(v);
        }
        if self.contains_empty(f) {
            return ZddId::ZERO;
        }

        let key = CacheKey::unary(OpType::Hitting, f, v.id());
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let node = self.node(f);
        let x = node.var;
        // Without x, the remaining choice must hit the members with x too.
        let without = self.hitting_from(self.union(node.lo, node.hi), x.next());
        let with = self.hitting_from(node.lo, x.next());
        let mut result = self.get_node(x, without, with);
        for u in (v.id()..x.id()).rev() {
            result = self.get_node(Var::new(u), result, result);
        }

        self.cache_put(key, result);
        result
    }

    // ========================================================================
    // Cardinality Filters
    // ========================================================================

    /// Members with at most `k` elements.
    pub fn permit_sym(&self, f: ZddId, k: usize) -> ZddId {
        if k >= self.num_vars() {
            return f;
        }
        self.permit_sym_rec(f, k as u32)
    }

    fn permit_sym_rec(&self, f: ZddId, k: u32) -> ZddId {
        if f.is_terminal() {
            return f;
        }
        if k == 0 {
            return if self.contains_empty(f) { ZddId::ONE } else { ZddId::ZERO };
        }

        let key = CacheKey::unary(OpType::PermitSym, f, k);
        if let Some(result) = self.cache_get(&key) {
            return result;
        }

        let node = self.node(f);
        let lo = self.permit_sym_rec(node.lo, k);
        let hi = self.permit_sym_rec(node.hi, k - 1);
        let result = self.get_node(node.var, lo, hi);

        self.cache_put(key, result);
        result
    }

    /// Members with fewer than `k` elements.
    pub fn smaller(&self, f: ZddId, k: usize) -> ZddId {
        match k {
            0 => ZddId::ZERO,
            _ => self.permit_sym(f, k - 1),
        }
    }

    /// Members with more than `k` elements.
    pub fn larger(&self, f: ZddId, k: usize) -> ZddId {
        self.difference(f, self.permit_sym(f, k))
    }

    /// Members with exactly `k` elements.
    pub fn size_eq(&self, f: ZddId, k: usize) -> ZddId {
        let at_most = self.permit_sym(f, k);
        self.difference(at_most, self.smaller(f, k))
    }

    // ========================================================================
    // Probability
    // ========================================================================

    /// Probability that a random subset, taking each variable `x`
    /// independently with probability `probs[x.index()]`, is a member of `f`.
    pub fn probability(&self, f: ZddId, probs: &[f64]) -> f64 {
        assert_eq!(probs.len(), self.num_vars(), "one probability per variable");
        let mut memo = HashMap::new();
        self.absent_between(probs, Var::new(1), self.top_var(f)) * self.probability_rec(f, probs, &mut memo)
    }

    fn probability_rec(&self, f: ZddId, probs: &[f64], memo: &mut HashMap<ZddId, f64>) -> f64 {
        if f.is_zero() {
            return 0.0;
        }
        if f.is_one() {
            return 1.0;
        }
        if let Some(&p) = memo.get(&f) {
            return p;
        }

        let node = self.node(f);
        let p = probs[node.var.index()];
        let lo = (1.0 - p)
            * self.absent_between(probs, node.var.next(), self.top_var(node.lo))
            * self.probability_rec(node.lo, probs, memo);
        let hi = p
            * self.absent_between(probs, node.var.next(), self.top_var(node.hi))
            * self.probability_rec(node.hi, probs, memo);

        memo.insert(f, lo + hi);
        lo + hi
    }

    /// Probability that every variable in `from..to` is absent.
    fn absent_between(&self, probs: &[f64], from: Var, to: Var) -> f64 {
        (from.id()..to.id()).map(|id| 1.0 - probs[Var::new(id).index()]).product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(mgr: &ZddManager, sets: &[&[u32]]) -> ZddId {
        sets.iter()
            .fold(ZddId::ZERO, |acc, s| mgr.union(acc, mgr.singleton(s.iter().copied())))
    }

    /// `[g0, g1, g12, g123, g1234, g134, g14, g4]`
    fn u(mgr: &ZddManager) -> ZddId {
        family(mgr, &[&[], &[1], &[1, 2], &[1, 2, 3], &[1, 2, 3, 4], &[1, 3, 4], &[1, 4], &[4]])
    }

    /// `[g12, g14, g23, g34]`
    fn v(mgr: &ZddManager) -> ZddId {
        family(mgr, &[&[1, 2], &[1, 4], &[2, 3], &[3, 4]])
    }

    #[test]
    fn test_quotient_and_remainder() {
        let mgr = ZddManager::new(4);
        let g12 = family(&mgr, &[&[1, 2]]);

        assert_eq!(mgr.quotient(u(&mgr), g12), family(&mgr, &[&[], &[3], &[3, 4]]));
        assert_eq!(
            mgr.remainder(u(&mgr), g12),
            family(&mgr, &[&[], &[1], &[1, 3, 4], &[1, 4], &[4]])
        );
        assert_eq!(mgr.quotient(u(&mgr), ZddId::ONE), u(&mgr));
        assert_eq!(mgr.quotient(u(&mgr), u(&mgr)), ZddId::ONE);
    }

    #[test]
    fn test_division_identity() {
        let mgr = ZddManager::new(4);
        let (f, g) = (u(&mgr), v(&mgr));
        let q = mgr.quotient(f, g);
        assert!(mgr.is_subset(mgr.join(q, g), f));
        let r = mgr.remainder(f, g);
        assert_eq!(r, mgr.difference(f, mgr.join(q, g)));
    }

    #[test]
    #[should_panic(expected = "division by the empty family")]
    fn test_quotient_by_empty() {
        let mgr = ZddManager::new(2);
        mgr.quotient(mgr.base(1), ZddId::ZERO);
    }

    #[test]
    fn test_invert_and_flip_all() {
        let mgr = ZddManager::new(4);
        assert_eq!(
            mgr.invert(u(&mgr)),
            family(&mgr, &[&[1, 2, 4], &[1, 3], &[2], &[2, 3], &[2, 3, 4], &[2, 4], &[3], &[3, 4]])
        );
        assert_eq!(
            mgr.flip_all(u(&mgr)),
            family(&mgr, &[&[], &[1, 2, 3], &[1, 2, 3, 4], &[2], &[2, 3], &[2, 3, 4], &[3, 4], &[4]])
        );
        assert_eq!(mgr.flip_all(mgr.flip_all(v(&mgr))), v(&mgr));
    }

    #[test]
    fn test_de_morgan() {
        let mgr = ZddManager::new(4);
        let (a, b) = (u(&mgr), v(&mgr));
        assert_eq!(
            mgr.invert(mgr.union(a, b)),
            mgr.intersection(mgr.invert(a), mgr.invert(b))
        );
        assert_eq!(
            mgr.invert(mgr.intersection(a, b)),
            mgr.union(mgr.invert(a), mgr.invert(b))
        );
    }

    #[test]
    fn test_permit_and_restrict() {
        let mgr = ZddManager::new(4);
        let (a, b) = (u(&mgr), v(&mgr));
        assert_eq!(mgr.permit(a, b), family(&mgr, &[&[], &[1], &[1, 2], &[1, 4], &[4]]));
        assert_eq!(
            mgr.restrict(a, b),
            family(&mgr, &[&[1, 2], &[1, 2, 3], &[1, 2, 3, 4], &[1, 3, 4], &[1, 4]])
        );
        assert_eq!(mgr.non_subsets(a, b), family(&mgr, &[&[1, 2, 3], &[1, 2, 3, 4], &[1, 3, 4]]));
        assert_eq!(mgr.non_supersets(a, b), family(&mgr, &[&[], &[1], &[4]]));
    }

    #[test]
    fn test_join_and_meet() {
        let mgr = ZddManager::new(4);
        let (a, b) = (u(&mgr), v(&mgr));
        assert_eq!(
            mgr.join(a, b),
            family(
                &mgr,
                &[&[1, 2], &[1, 2, 3], &[1, 2, 4], &[1, 2, 3, 4], &[1, 3, 4], &[1, 4], &[2, 3], &[2, 3, 4], &[3, 4]]
            )
        );
        assert_eq!(
            mgr.meet(a, b),
            family(&mgr, &[&[], &[1], &[1, 2], &[1, 4], &[2], &[2, 3], &[3], &[3, 4], &[4]])
        );
    }

    #[test]
    fn test_minimal_maximal() {
        let mgr = ZddManager::new(4);
        let f = family(&mgr, &[&[1, 2], &[1, 2, 3], &[2, 3, 4]]);
        assert_eq!(mgr.minimal(f), family(&mgr, &[&[1, 2], &[2, 3, 4]]));
        assert_eq!(mgr.maximal(f), family(&mgr, &[&[1, 2, 3], &[2, 3, 4]]));

        let with_empty = mgr.union(f, ZddId::ONE);
        assert_eq!(mgr.minimal(with_empty), ZddId::ONE);
    }

    #[test]
    fn test_hitting() {
        let mgr = ZddManager::new(4);
        assert_eq!(
            mgr.hitting(v(&mgr)),
            family(&mgr, &[&[1, 2, 3], &[1, 2, 3, 4], &[1, 2, 4], &[1, 3], &[1, 3, 4], &[2, 3, 4], &[2, 4]])
        );
        assert_eq!(mgr.hitting(ZddId::ZERO), mgr.universe_powerset());
        assert_eq!(mgr.hitting(ZddId::ONE), ZddId::ZERO);
    }

    #[test]
    fn test_cardinality_filters() {
        let mgr = ZddManager::new(4);
        let f = u(&mgr);
        assert_eq!(mgr.smaller(f, 3), family(&mgr, &[&[], &[1], &[1, 2], &[1, 4], &[4]]));
        assert_eq!(mgr.larger(f, 3), family(&mgr, &[&[1, 2, 3, 4]]));
        assert_eq!(mgr.size_eq(f, 3), family(&mgr, &[&[1, 2, 3], &[1, 3, 4]]));
        assert_eq!(mgr.size_eq(f, 0), ZddId::ONE);
        assert_eq!(mgr.smaller(f, 0), ZddId::ZERO);
        assert_eq!(mgr.permit_sym(f, 10), f);
    }

    #[test]
    fn test_probability() {
        let mgr = ZddManager::new(3);
        let probs = [0.5, 0.25, 0.1];

        assert_eq!(mgr.probability(ZddId::ZERO, &probs), 0.0);
        let all = mgr.universe_powerset();
        assert!((mgr.probability(all, &probs) - 1.0).abs() < 1e-12);

        // P({∅}) = 0.5 * 0.75 * 0.9
        assert!((mgr.probability(ZddId::ONE, &probs) - 0.3375).abs() < 1e-12);

        // P({{2}}) = 0.5 * 0.25 * 0.9
        let x2 = mgr.base(2);
        assert!((mgr.probability(x2, &probs) - 0.1125).abs() < 1e-12);
    }

    #[test]
    fn test_subset_and_disjoint() {
        let mgr = ZddManager::new(4);
        let small = family(&mgr, &[&[], &[1, 2]]);
        assert!(mgr.is_subset(small, u(&mgr)));
        assert!(!mgr.is_subset(u(&mgr), small));
        assert!(mgr.is_disjoint(family(&mgr, &[&[2]]), u(&mgr)));
        assert!(!mgr.is_disjoint(v(&mgr), u(&mgr)));
    }
}
