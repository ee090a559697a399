//! Subgraphs with per-vertex degree bounds.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Range, RangeInclusive};

use super::{FrontierManager, FrontierSpec, Mate, Step};
use crate::universe::Vertex;

/// Allowed degrees `lo, lo + step, ...` up to `hi` inclusive.
///
/// ```
/// use digraph_zdd::frontier::DegreeRange;
///
/// let even = DegreeRange::new(0, 4).with_step(2);
/// assert!(even.contains(2));
/// assert!(!even.contains(3));
///
/// // Half-open ranges exclude their end.
/// assert_eq!(DegreeRange::from(1..2), DegreeRange::exactly(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegreeRange {
    lo: u32,
    hi: u32,
    step: u32,
}

impl DegreeRange {
    /// Degrees in `lo..=hi`.
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi, step: 1 }
    }

    pub const fn exactly(d: u32) -> Self {
        Self::new(d, d)
    }

    pub const fn at_least(lo: u32) -> Self {
        Self::new(lo, u32::MAX)
    }

    pub const fn at_most(hi: u32) -> Self {
        Self::new(0, hi)
    }

    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn with_step(mut self, step: u32) -> Self {
        assert!(step > 0, "degree step must be positive");
        self.step = step;
        self
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    pub fn contains(&self, d: u32) -> bool {
        self.lo <= d && d <= self.hi && (d - self.lo) % self.step == 0
    }
}

impl From<RangeInclusive<u32>> for DegreeRange {
    fn from(r: RangeInclusive<u32>) -> Self {
        DegreeRange::new(*r.start(), *r.end())
    }
}

impl From<Range<u32>> for DegreeRange {
    fn from(r: Range<u32>) -> Self {
        match r.end.checked_sub(1) {
            Some(hi) => DegreeRange::new(r.start, hi),
            // 0..0 admits nothing.
            None => DegreeRange::new(1, 0),
        }
    }
}

impl fmt::Display for DegreeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.lo, self.hi)?;
        if self.step != 1 {
            write!(f, " step {}", self.step)?;
        }
        Ok(())
    }
}

/// Edge sets whose in- and out-degrees lie within the given ranges.
///
/// Vertices without a range are unconstrained and their degrees are not
/// tracked at all.
#[derive(Debug)]
pub struct DegreeSpec<'a> {
    fm: &'a FrontierManager,
    indeg: HashMap<Vertex, DegreeRange>,
    outdeg: HashMap<Vertex, DegreeRange>,
}

impl<'a> DegreeSpec<'a> {
    pub fn new(
        fm: &'a FrontierManager,
        indeg: HashMap<Vertex, DegreeRange>,
        outdeg: HashMap<Vertex, DegreeRange>,
    ) -> Self {
        Self { fm, indeg, outdeg }
    }
}

/// Increments `count` if `v` is constrained; fails if that leaves the range.
fn bump(ranges: &HashMap<Vertex, DegreeRange>, v: Vertex, count: &mut u32) -> bool {
    match ranges.get(&v) {
        Some(range) => {
            match count.checked_add(1) {
                Some(d) if d <= range.hi() => {
                    *count = d;
                    true
                }
                _ => false,
            }
        }
        None => true,
    }
}

fn satisfied(ranges: &HashMap<Vertex, DegreeRange>, v: Vertex, count: u32) -> bool {
    ranges.get(&v).map_or(true, |range| range.contains(count))
}

impl FrontierSpec for DegreeSpec<'_> {
    type State = Mate;

    fn root(&self) -> Option<Mate> {
        Some(Mate::new(self.fm.width()))
    }

    fn step(&self, state: &Mate, index: usize, take: bool) -> Step<Mate> {
        let mut mate = state.clone();
        let frontier = self.fm.frontier(index);

        if take {
            let e = self.fm.edge(index);
            if !bump(&self.outdeg, e.source.vertex, &mut mate.outdeg[e.source.slot])
                || !bump(&self.indeg, e.target.vertex, &mut mate.indeg[e.target.slot])
            {
                return Step::Reject;
            }
        }

        for visit in self.fm.leaving(index) {
            let slot = visit.slot;
            if !satisfied(&self.indeg, visit.vertex, mate.indeg[slot])
                || !satisfied(&self.outdeg, visit.vertex, mate.outdeg[slot])
            {
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
