//! Plain enumeration of the members of a family.

use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

/// Resumable enumeration of every member of a family, as variables in
/// increasing order.
///
/// Members without a variable are produced before members with it, so the
/// empty set (if present) always comes first. The walk keeps its own stack
/// and only needs the manager while stepping.
#[derive(Debug, Clone)]
pub struct SetWalk {
    /// Stack of (node, member prefix, lo branch already explored)
    stack: Vec<(ZddId, Vec<Var>, bool)>,
}

impl SetWalk {
    pub fn new(root: ZddId) -> Self {
        let mut stack = Vec::new();
        if !root.is_zero() {
            stack.push((root, Vec::new(), false));
        }
        Self { stack }
    }

    pub fn next(&mut self, mgr: &ZddManager) -> Option<Vec<Var>> {
        while let Some((id, prefix, lo_done)) = self.stack.pop() {
            if id.is_zero() {
                continue;
            }
            if id.is_one() {
                return Some(prefix);
            }

            let node = mgr.node(id);
            if !lo_done {
                self.stack.push((id, prefix.clone(), true));
                self.stack.push((node.lo, prefix, false));
            } else {
                let mut with = prefix;
                with.push(node.var);
                self.stack.push((node.hi, with, false));
            }
        }
        None
    }
}

/// Borrowing iterator over a [`SetWalk`].
pub struct SetIterator<'a> {
    mgr: &'a ZddManager,
    walk: SetWalk,
}

impl<'a> SetIterator<'a> {
    pub fn new(mgr: &'a ZddManager, root: ZddId) -> Self {
        Self {
            mgr,
            walk: SetWalk::new(root),
        }
    }
}

impl Iterator for SetIterator<'_> {
    type Item = Vec<Var>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next(self.mgr)
    }
}

impl ZddManager {
    /// Returns an iterator over all members of `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use digraph_zdd::zdd::ZddManager;
    ///
    /// let mgr = ZddManager::new(2);
    /// let ps = mgr.powerset([1u32, 2]);
    ///
    /// let sets: Vec<_> = mgr.iter_sets(ps).collect();
    /// assert_eq!(sets.len(), 4);
    /// ```
    pub fn iter_sets(&self, f: ZddId) -> SetIterator<'_> {
        SetIterator::new(self, f)
    }

    pub fn collect_sets(&self, f: ZddId) -> Vec<Vec<Var>> {
        self.iter_sets(f).collect()
    }

    /// Returns one member of `f`, preferring large ones, if non-empty.
    pub fn pick_one(&self, f: ZddId) -> Option<Vec<Var>> {
        if f.is_zero() {
            return None;
        }

        let mut result = Vec::new();
        let mut current = f;
        while !current.is_terminal() {
            let node = self.node(current);
            result.push(node.var);
            current = node.hi;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_empty() {
        let mgr = ZddManager::new(2);
        assert_eq!(mgr.iter_sets(ZddId::ZERO).count(), 0);
    }

    #[test]
    fn test_iter_one() {
        let mgr = ZddManager::new(2);
        let sets = mgr.collect_sets(ZddId::ONE);
        assert_eq!(sets, vec![Vec::<Var>::new()]);
    }

    #[test]
    fn test_iter_order() {
        let mgr = ZddManager::new(2);
        let ps = mgr.powerset([1u32, 2]);
        let sets = mgr.collect_sets(ps);
        assert_eq!(
            sets,
            vec![
                vec![],
                vec![Var::new(2)],
                vec![Var::new(1)],
                vec![Var::new(1), Var::new(2)],
            ]
        );
    }

    #[test]
    fn test_iter_matches_count() {
        let mgr = ZddManager::new(6);
        let f = mgr.union(mgr.powerset([1u32, 3, 5]), mgr.singleton([2u32, 4, 6]));
        assert_eq!(mgr.iter_sets(f).count(), 9);
        for set in mgr.iter_sets(f) {
            assert!(mgr.contains(f, &set));
        }
    }

    #[test]
    fn test_pick_one() {
        let mgr = ZddManager::new(3);
        assert!(mgr.pick_one(ZddId::ZERO).is_none());
        assert_eq!(mgr.pick_one(ZddId::ONE), Some(vec![]));

        let f = mgr.union(mgr.base(1), mgr.singleton([2u32, 3]));
        let picked = mgr.pick_one(f).unwrap();
        assert!(mgr.contains(f, &picked));
    }
}
