//! Directed forests, optionally rooted at given vertices.

use std::collections::HashSet;

use super::{FrontierManager, FrontierSpec, Mate, Step};
use crate::universe::Vertex;

/// Edge sets with no undirected cycle and in-degree at most one everywhere.
///
/// With `roots`, every tree hangs from one of the roots: roots have no
/// incoming edge and at least one outgoing edge, and every other vertex
/// touched by an edge has exactly one parent. `spanning` additionally
/// requires every non-root vertex to have a parent.
///
/// Without roots any in-forest is accepted and `spanning` has no effect.
#[derive(Debug)]
pub struct ForestSpec<'a> {
    fm: &'a FrontierManager,
    roots: Option<HashSet<Vertex>>,
    spanning: bool,
}

impl<'a> ForestSpec<'a> {
    pub fn new(fm: &'a FrontierManager, roots: Option<&[Vertex]>, spanning: bool) -> Self {
        Self {
            fm,
            roots: roots.map(|r| r.iter().copied().collect()),
            spanning,
        }
    }

    fn finished(&self, roots: &HashSet<Vertex>, v: Vertex, indeg: u32, outdeg: u32) -> bool {
        if roots.contains(&v) {
            outdeg >= 1
        } else if self.spanning || indeg + outdeg > 0 {
            indeg == 1
        } else {
            true
        }
    }
}

impl FrontierSpec for ForestSpec<'_> {
    type State = Mate;

    fn root(&self) -> Option<Mate> {
        match &self.roots {
            Some(roots) if roots.is_empty() => None,
            _ => Some(Mate::new(self.fm.width())),
        }
    }

    fn step(&self, state: &Mate, index: usize, take: bool) -> Step<Mate> {
        let mut mate = state.clone();
        let frontier = self.fm.frontier(index);

        if take {
            let e = self.fm.edge(index);
            let (s, t) = (e.source.slot, e.target.slot);
            if mate.same_component(s, t) || mate.indeg[t] >= 1 {
                return Step::Reject;
            }
            mate.indeg[t] = 1;
            if let Some(roots) = &self.roots {
                if roots.contains(&e.target.vertex) {
                    return Step::Reject;
                }
                // Only "has a child" matters for the finishing check.
                mate.outdeg[s] = 1;
            }
            mate.merge(s, t, frontier);
        }

        for visit in self.fm.leaving(index) {
            if let Some(roots) = &self.roots {
                let slot = visit.slot;
                if !self.finished(roots, visit.vertex, mate.indeg[slot], mate.outdeg[slot]) {
                    return Step::Reject;
                }
            }
            mate.leave(visit.slot, frontier);
        }

        Step::Next(mate)
    }

    fn accepts(&self, _: &Mate) -> bool {
        true
    }
}
