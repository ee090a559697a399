//! Frontier-based construction of structural graph families.
//!
//! Edges are decided one at a time in variable order. A [`FrontierSpec`]
//! describes a family as a transition system: a state summarizes the
//! decisions taken so far as far as the remaining edges can tell, and each
//! decision either moves to a new state, completes a member, or rejects the
//! prefix. [`build`] explores the states level by level, merging equal
//! states, and then assembles the diagram bottom-up through
//! [`ZddManager::get_node`], so the result is canonical.
//!
//! The [`FrontierManager`] precomputes, for every edge position, which
//! vertices enter and leave the frontier and which slot of the state arrays
//! each frontier vertex occupies. A vertex keeps its slot from its first to
//! its last incident edge; the slot is reset when the vertex leaves so that
//! states differing only in finished vertices coincide.

pub mod cycle;
pub mod degree;
pub mod forest;
pub mod path;

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::reference::ZddId;
use crate::types::Var;
use crate::universe::{Universe, Vertex};
use crate::zdd::ZddManager;

pub use self::cycle::CycleSpec;
pub use self::degree::{DegreeRange, DegreeSpec};
pub use self::forest::ForestSpec;
pub use self::path::PathSpec;

/// Outcome of deciding one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<S> {
    /// Continue with the next edge in this state.
    Next(S),
    /// The prefix is a complete member; every later edge must be absent.
    Accept,
    /// No member extends the prefix.
    Reject,
}

/// A family described as a transition system over the edge order.
pub trait FrontierSpec {
    type State: Clone + Eq + Hash;

    /// State before the first edge, or `None` if the family is empty.
    fn root(&self) -> Option<Self::State>;

    /// Decides edge `index` (0-based) in `state`.
    fn step(&self, state: &Self::State, index: usize, take: bool) -> Step<Self::State>;

    /// Whether a state that survived every edge is a member.
    fn accepts(&self, state: &Self::State) -> bool;
}

/// A vertex with its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub vertex: Vertex,
    pub slot: usize,
}

/// Endpoints of one edge with their slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSlots {
    pub source: Visit,
    pub target: Visit,
}

/// Frontier bookkeeping derived from the edge order of a universe.
#[derive(Debug, Clone)]
pub struct FrontierManager {
    edges: Vec<EdgeSlots>,
    /// Vertices whose last incident edge is this one.
    leaving: Vec<Vec<Visit>>,
    /// Slots of all vertices in the frontier while this edge is decided.
    frontier: Vec<Vec<usize>>,
    /// Index of the first edge by which every vertex has entered.
    all_entered: usize,
    width: usize,
}

impl FrontierManager {
    pub fn new(universe: &Universe) -> Self {
        let edges = universe.edges();
        let n = edges.len();

        let mut last: HashMap<Vertex, usize> = HashMap::new();
        for (i, e) in edges.iter().enumerate() {
            last.insert(e.source, i);
            last.insert(e.target, i);
        }

        let mut slot_of: HashMap<Vertex, usize> = HashMap::new();
        let mut free: Vec<usize> = Vec::new();
        let mut width = 0;
        let mut all_entered = 0;
        let mut active: Vec<Visit> = Vec::new();

        let mut slots = Vec::with_capacity(n);
        let mut leaving = Vec::with_capacity(n);
        let mut frontier = Vec::with_capacity(n);

        for (i, e) in edges.iter().enumerate() {
            for v in [e.source, e.target] {
                if slot_of.contains_key(&v) {
                    continue;
                }
                // Smallest free slot first, so the assignment is deterministic.
                free.sort_unstable_by(|a, b| b.cmp(a));
                let slot = free.pop().unwrap_or_else(|| {
                    width += 1;
                    width - 1
                });
                slot_of.insert(v, slot);
                active.push(Visit { vertex: v, slot });
                all_entered = i;
            }

            let visit = |v: Vertex| Visit {
                vertex: v,
                slot: slot_of[&v],
            };
            slots.push(EdgeSlots {
                source: visit(e.source),
                target: visit(e.target),
            });
            frontier.push(active.iter().map(|a| a.slot).collect());

            let mut gone = Vec::new();
            active.retain(|a| {
                if last[&a.vertex] == i {
                    gone.push(*a);
                    false
                } else {
                    true
                }
            });
            for g in &gone {
                free.push(g.slot);
            }
            leaving.push(gone);
        }

        assert!(u32::try_from(width).is_ok(), "frontier width {} exceeds slot labels", width);
        debug!("Frontier over {} edges, width {}", n, width);
        Self {
            edges: slots,
            leaving,
            frontier,
            all_entered,
            width,
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of slots a state needs.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn edge(&self, index: usize) -> EdgeSlots {
        self.edges[index]
    }

    pub fn leaving(&self, index: usize) -> &[Visit] {
        &self.leaving[index]
    }

    pub fn frontier(&self, index: usize) -> &[usize] {
        &self.frontier[index]
    }

    /// Whether every vertex has been seen by edge `index`.
    pub fn all_entered(&self, index: usize) -> bool {
        index >= self.all_entered
    }
}

/// Degree counters and component labels for the frontier slots.
///
/// A component is labelled by the smallest slot among its frontier members;
/// a free slot is labelled by itself and has zero degrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mate {
    pub indeg: Vec<u32>,
    pub outdeg: Vec<u32>,
    pub comp: Vec<u32>,
}

impl Mate {
    pub fn new(width: usize) -> Self {
        Self {
            indeg: vec![0; width],
            outdeg: vec![0; width],
            comp: (0..width).map(|slot| slot as u32).collect(),
        }
    }

    pub fn degree(&self, slot: usize) -> u32 {
        self.indeg[slot] + self.outdeg[slot]
    }

    pub fn same_component(&self, a: usize, b: usize) -> bool {
        self.comp[a] == self.comp[b]
    }

    /// Joins the components of slots `a` and `b`.
    pub fn merge(&mut self, a: usize, b: usize, frontier: &[usize]) {
        let (ca, cb) = (self.comp[a], self.comp[b]);
        if ca == cb {
            return;
        }
        let (keep, drop) = if ca < cb { (ca, cb) } else { (cb, ca) };
        for &s in frontier {
            if self.comp[s] == drop {
                self.comp[s] = keep;
            }
        }
    }

    /// Removes `slot` from the frontier and resets it.
    ///
    /// Returns true if its component has no frontier member left.
    pub fn leave(&mut self, slot: usize, frontier: &[usize]) -> bool {
        let label = self.comp[slot];
        let rest: Vec<usize> = frontier
            .iter()
            .copied()
            .filter(|&s| s != slot && self.comp[s] == label)
            .collect();

        if label as usize == slot {
            if let Some(&min) = rest.iter().min() {
                for &s in &rest {
                    self.comp[s] = min as u32;
                }
            }
        }

        self.indeg[slot] = 0;
        self.outdeg[slot] = 0;
        self.comp[slot] = slot as u32;
        rest.is_empty()
    }
}

/// Builds the family described by `spec`, restricted to members of `within`
/// when given.
pub fn build<S: FrontierSpec>(mgr: &ZddManager, spec: &S, within: Option<ZddId>) -> ZddId {
    let n = mgr.num_vars();
    let space = within.unwrap_or_else(|| mgr.universe_powerset());

    let Some(root) = spec.root() else {
        return ZddId::ZERO;
    };
    if space.is_zero() {
        return ZddId::ZERO;
    }
    if n == 0 {
        return if spec.accepts(&root) && space.is_one() {
            ZddId::ONE
        } else {
            ZddId::ZERO
        };
    }

    // Top-down: states per level, with the child of each decision.
    let mut levels: Vec<Vec<(S::State, ZddId)>> = vec![vec![(root, space)]];
    let mut children: Vec<Vec<(Child, Child)>> = Vec::with_capacity(n);

    for i in 0..n {
        let var = Var::from_index(i);
        let mut next: Vec<(S::State, ZddId)> = Vec::new();
        let mut seen: HashMap<(S::State, ZddId), usize> = HashMap::new();
        let mut arcs = Vec::with_capacity(levels[i].len());

        for (state, ss) in &levels[i] {
            let mut decide = |take: bool| -> Child {
                let sub = match space_child(mgr, *ss, var, take) {
                    Some(sub) if !sub.is_zero() => sub,
                    _ => return Child::Zero,
                };
                match spec.step(state, i, take) {
                    Step::Reject => Child::Zero,
                    Step::Accept => Child::terminal(mgr.contains_empty(sub)),
                    Step::Next(s) if i + 1 == n => Child::terminal(spec.accepts(&s) && sub.is_one()),
                    Step::Next(s) => {
                        let key = (s, sub);
                        let idx = *seen.entry(key.clone()).or_insert_with(|| {
                            next.push(key);
                            next.len() - 1
                        });
                        Child::Node(idx)
                    }
                }
            };
            let lo = decide(false);
            let hi = decide(true);
            arcs.push((lo, hi));
        }

        debug!("Frontier level {}: {} states", i, levels[i].len());
        children.push(arcs);
        if i + 1 < n {
            levels.push(next);
        }
    }

    // Bottom-up: one diagram node per state.
    let mut below: Vec<ZddId> = Vec::new();
    for i in (0..n).rev() {
        let var = Var::from_index(i);
        let resolve = |c: Child| match c {
            Child::Zero => ZddId::ZERO,
            Child::One => ZddId::ONE,
            Child::Node(idx) => below[idx],
        };
        let ids: Vec<ZddId> = children[i]
            .iter()
            .map(|&(lo, hi)| mgr.get_node(var, resolve(lo), resolve(hi)))
            .collect();
        below = ids;
    }

    debug_assert_eq!(below.len(), 1);
    below[0]
}

/// Target of a decision before the next level is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Child {
    Zero,
    One,
    Node(usize),
}

impl Child {
    fn terminal(accept: bool) -> Self {
        if accept {
            Child::One
        } else {
            Child::Zero
        }
    }
}

/// Follows the search space through the decision on `var`.
fn space_child(mgr: &ZddManager, ss: ZddId, var: Var, take: bool) -> Option<ZddId> {
    if ss.is_terminal() || mgr.top_var(ss) > var {
        return if take { None } else { Some(ss) };
    }
    let node = mgr.node(ss);
    Some(if take { node.hi } else { node.lo })
}
