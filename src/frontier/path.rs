//! Directed s–t paths.

use super::{FrontierManager, FrontierSpec, Mate, Step};
use crate::universe::Vertex;

/// Edge sets forming one simple directed path from `s` to `t`.
///
/// With `hamiltonian`, the path visits every vertex of the universe.
#[derive(Debug)]
pub struct PathSpec<'a> {
    fm: &'a FrontierManager,
    s: Vertex,
    t: Vertex,
    hamiltonian: bool,
}

impl<'a> PathSpec<'a> {
    pub fn new(fm: &'a FrontierManager, s: Vertex, t: Vertex, hamiltonian: bool) -> Self {
        Self { fm, s, t, hamiltonian }
    }

    /// Allowed (in, out) degree of `v`.
    fn caps(&self, v: Vertex) -> (u32, u32) {
        if v == self.s {
            (0, 1)
        } else if v == self.t {
            (1, 0)
        } else {
            (1, 1)
        }
    }

    fn finished(&self, v: Vertex, indeg: u32, outdeg: u32) -> bool {
        if v == self.s || v == self.t {
            (indeg, outdeg) == self.caps(v)
        } else if self.hamiltonian {
            indeg == 1 && outdeg == 1
        } else {
            indeg == outdeg
        }
    }
}

impl FrontierSpec for PathSpec<'_> {
    type State = Mate;

    fn root(&self) -> Option<Mate> {
        if self.s == self.t {
            return None;
        }
        Some(Mate::new(self.fm.width()))
    }

    fn step(&self, state: &Mate, index: usize, take: bool) -> Step<Mate> {
        let mut mate = state.clone();
        let frontier = self.fm.frontier(index);

        if take {
            let e = self.fm.edge(index);
            let (s, t) = (e.source.slot, e.target.slot);
            if mate.outdeg[s] >= self.caps(e.source.vertex).1 || mate.indeg[t] >= self.caps(e.target.vertex).0 {
                return Step::Reject;
            }
            if mate.same_component(s, t) {
                return Step::Reject;
            }
            mate.outdeg[s] += 1;
            mate.indeg[t] += 1;
            mate.merge(s, t, frontier);
        }

        for visit in self.fm.leaving(index) {
            let slot = visit.slot;
            if !self.finished(visit.vertex, mate.indeg[slot], mate.outdeg[slot]) {
                return Step::Reject;
            }
            mate.leave(slot, frontier);
        }

        Step::Next(mate)
    }

    fn accepts(&self, _: &Mate) -> bool {
        true
    }
}
