//! Single directed cycles.

use super::{FrontierManager, FrontierSpec, Mate, Step};

/// Edge sets forming exactly one simple directed cycle.
///
/// A self-loop is a cycle of length one and a pair of opposite edges a cycle
/// of length two. With `hamiltonian`, the cycle must pass through every
/// vertex of the universe.
#[derive(Debug)]
pub struct CycleSpec<'a> {
    fm: &'a FrontierManager,
    hamiltonian: bool,
}

impl<'a> CycleSpec<'a> {
    pub fn new(fm: &'a FrontierManager, hamiltonian: bool) -> Self {
        Self { fm, hamiltonian }
    }

    /// Whether closing the cycle at edge `index` completes a member.
    fn closes(&self, mate: &Mate, index: usize, label: u32) -> bool {
        if self.hamiltonian && !self.fm.all_entered(index) {
            return false;
        }
        self.fm.frontier(index).iter().all(|&s| {
            let (i, o) = (mate.indeg[s], mate.outdeg[s]);
            if self.hamiltonian {
                i == 1 && o == 1
            } else {
                i == o && (i == 0 || mate.comp[s] == label)
            }
        })
    }
}

impl FrontierSpec for CycleSpec<'_> {
    type State = Mate;

    fn root(&self) -> Option<Mate> {
        Some(Mate::new(self.fm.width()))
    }

    fn step(&self, state: &Mate, index: usize, take: bool) -> Step<Mate> {
        let mut mate = state.clone();
        let frontier = self.fm.frontier(index);

        if take {
            let e = self.fm.edge(index);
            let (s, t) = (e.source.slot, e.target.slot);
            if mate.outdeg[s] >= 1 || mate.indeg[t] >= 1 {
                return Step::Reject;
            }
            mate.outdeg[s] += 1;
            mate.indeg[t] += 1;

            if mate.same_component(s, t) {
                let label = mate.comp[s];
                return if self.closes(&mate, index, label) {
                    Step::Accept
                } else {
                    Step::Reject
                };
            }
            mate.merge(s, t, frontier);
        }

        for visit in self.fm.leaving(index) {
            let (i, o) = (mate.indeg[visit.slot], mate.outdeg[visit.slot]);
            let ok = if self.hamiltonian { i == 1 && o == 1 } else { i == o };
            if !ok {
                return Step::Reject;
            }
            mate.leave(visit.slot, frontier);
        }

        Step::Next(mate)
    }

    fn accepts(&self, _: &Mate) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;

    use crate::frontier::build;
    use crate::universe::Universe;
    use crate::zdd::ZddManager;

    fn count(edges: &[(u32, u32)], hamiltonian: bool) -> BigUint {
        let universe = Universe::new(edges.iter().copied()).unwrap();
        let fm = FrontierManager::new(&universe);
        let mgr = ZddManager::new(universe.len());
        mgr.count(build(&mgr, &CycleSpec::new(&fm, hamiltonian), None))
    }

    #[test]
    fn test_triangle_both_ways() {
        let edges = [(1, 2), (2, 3), (3, 1), (2, 1), (3, 2), (1, 3)];
        // Two 3-cycles and three 2-cycles.
        assert_eq!(count(&edges, false), BigUint::from(5u32));
        assert_eq!(count(&edges, true), BigUint::from(2u32));
    }

    #[test]
    fn test_self_loop() {
        assert_eq!(count(&[(1, 1)], false), BigUint::from(1u32));
        assert_eq!(count(&[(1, 1), (1, 2)], true), BigUint::from(0u32));
    }

    #[test]
    fn test_path_is_not_a_cycle() {
        assert_eq!(count(&[(1, 2), (2, 3)], false), BigUint::from(0u32));
    }

    #[test]
    fn test_disjoint_cycles_rejected() {
        // Two separate 2-cycles: each alone is a member, never both.
        let edges = [(1, 2), (2, 1), (3, 4), (4, 3)];
        assert_eq!(count(&edges, false), BigUint::from(2u32));
    }
}
