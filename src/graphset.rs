//! Families of directed graphs over a session's edge universe.
//!
//! A [`Session`] ties a [`Universe`] to its own [`ZddManager`]; every
//! [`DiGraphSet`] belongs to exactly one session and keeps its diagram alive
//! by holding a reference on the root. Sets are immutable values for the
//! algebra, while the modifiers (`add`, `remove`, `flip`, ...) rebind the
//! handle to a new root.
//!
//! ```
//! use digraph_zdd::graphset::Session;
//! use digraph_zdd::universe::Universe;
//! use num_bigint::BigUint;
//!
//! let universe = Universe::new([(1, 2), (2, 1), (2, 3), (3, 1)]).unwrap();
//! let session = Session::new(universe);
//!
//! let cycles = session.directed_cycles();
//! assert_eq!(cycles.len(), BigUint::from(2u32));
//! assert!(cycles.contains(&[(1, 2), (2, 3), (3, 1)]).unwrap());
//! ```
//!
//! Automatic garbage collection runs only at the start of a top-level
//! operation, when every diagram still needed is held by some handle.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};
use std::path::Path;
use std::rc::Rc;

use log::debug;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::ZddConfig;
use crate::error::{Error, Result};
use crate::frontier::{self, CycleSpec, DegreeRange, DegreeSpec, ForestSpec, FrontierManager, PathSpec};
use crate::iter::SetWalk;
use crate::reference::ZddId;
use crate::traverse::WeightedSearch;
use crate::types::Var;
use crate::universe::{Edge, Universe, Vertex};
use crate::zdd::ZddManager;

/// A member of a family: its edges in variable order.
pub type Graph = Vec<(Vertex, Vertex)>;

/// Per-edge weights for weighted traversal.
pub type Weights = HashMap<(Vertex, Vertex), f64>;

struct SessionState {
    universe: Universe,
    frontier: FrontierManager,
    mgr: ZddManager,
}

/// A universe together with the node store of all its families.
#[derive(Clone)]
pub struct Session {
    state: Rc<SessionState>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("edges", &self.state.universe.len())
            .field("vertices", &self.state.universe.vertices().len())
            .field("mgr", &self.state.mgr)
            .finish()
    }
}

/// Structural families buildable by [`Session::build`].
#[derive(Debug, Clone, PartialEq)]
pub enum Family {
    /// Every subgraph.
    Graphs,
    /// Single directed cycles.
    Cycles { hamiltonian: bool },
    /// Directed paths from `s` to `t`.
    Paths { s: Vertex, t: Vertex, hamiltonian: bool },
    /// In-forests, rooted at `roots` when given.
    Forests { roots: Option<Vec<Vertex>>, spanning: bool },
    /// Trees hanging from `root`.
    Trees { root: Vertex, spanning: bool },
    /// Subgraphs with per-vertex in/out-degree ranges.
    Degrees {
        indeg: HashMap<Vertex, DegreeRange>,
        outdeg: HashMap<Vertex, DegreeRange>,
    },
}

impl Session {
    pub fn new(universe: Universe) -> Self {
        Self::with_config(universe, ZddConfig::default())
    }

    pub fn with_config(universe: Universe, config: ZddConfig) -> Self {
        let mgr = ZddManager::with_config(universe.len(), config);
        let frontier = FrontierManager::new(&universe);
        debug!("New session over {} edges", universe.len());
        Self {
            state: Rc::new(SessionState {
                universe,
                frontier,
                mgr,
            }),
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.state.universe
    }

    pub fn manager(&self) -> &ZddManager {
        &self.state.mgr
    }

    fn mgr(&self) -> &ZddManager {
        &self.state.mgr
    }

    /// Collects garbage if due. Every live diagram must be held by a handle.
    fn checkpoint(&self) {
        self.state.mgr.maybe_collect_garbage();
    }

    fn wrap(&self, root: ZddId) -> DiGraphSet {
        self.state.mgr.retain(root);
        DiGraphSet {
            session: self.clone(),
            root,
        }
    }

    fn same(&self, other: &Session) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn singleton(&self, graph: &[(Vertex, Vertex)]) -> Result<ZddId> {
        let vars = self.universe().vars_of(graph)?;
        Ok(self.mgr().singleton(vars))
    }

    // ─── Constructors ───

    /// The empty family.
    pub fn empty(&self) -> DiGraphSet {
        self.wrap(ZddId::ZERO)
    }

    /// Every subgraph of the universe.
    pub fn graphs(&self) -> DiGraphSet {
        self.checkpoint();
        self.wrap(self.mgr().universe_powerset())
    }

    /// Every subgraph containing all of `include` and none of `exclude`.
    pub fn graphs_with(&self, include: &[(Vertex, Vertex)], exclude: &[(Vertex, Vertex)]) -> Result<DiGraphSet> {
        let include = self.universe().vars_of(include)?;
        let exclude = self.universe().vars_of(exclude)?;
        self.checkpoint();

        let mgr = self.mgr();
        if include.iter().any(|v| exclude.contains(v)) {
            return Ok(self.empty());
        }
        let free = (1..=mgr.num_vars() as u32)
            .map(Var::new)
            .filter(|v| !include.contains(v) && !exclude.contains(v));
        let root = mgr.join(mgr.powerset(free), mgr.singleton(include));
        Ok(self.wrap(root))
    }

    /// The family of exactly the given graphs.
    pub fn from_graphs<G: AsRef<[(Vertex, Vertex)]>>(&self, graphs: impl IntoIterator<Item = G>) -> Result<DiGraphSet> {
        let members = graphs
            .into_iter()
            .map(|g| self.universe().vars_of(g.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.checkpoint();

        let mgr = self.mgr();
        let root = members
            .into_iter()
            .fold(ZddId::ZERO, |acc, vars| mgr.union(acc, mgr.singleton(vars)));
        Ok(self.wrap(root))
    }

    pub fn directed_cycles(&self) -> DiGraphSet {
        self.checkpoint();
        let spec = CycleSpec::new(&self.state.frontier, false);
        self.wrap(frontier::build(self.mgr(), &spec, None))
    }

    pub fn directed_hamiltonian_cycles(&self) -> DiGraphSet {
        self.checkpoint();
        let spec = CycleSpec::new(&self.state.frontier, true);
        self.wrap(frontier::build(self.mgr(), &spec, None))
    }

    /// Directed simple paths from `s` to `t`; empty when `s == t`.
    pub fn directed_st_paths(&self, s: Vertex, t: Vertex, hamiltonian: bool) -> Result<DiGraphSet> {
        self.build(&Family::Paths { s, t, hamiltonian }, None)
    }

    pub fn rooted_forests(&self, roots: Option<&[Vertex]>, spanning: bool) -> Result<DiGraphSet> {
        let roots = roots.map(<[Vertex]>::to_vec);
        self.build(&Family::Forests { roots, spanning }, None)
    }

    pub fn rooted_trees(&self, root: Vertex, spanning: bool) -> Result<DiGraphSet> {
        self.build(&Family::Trees { root, spanning }, None)
    }

    pub fn degree_constrained(
        &self,
        indeg: HashMap<Vertex, DegreeRange>,
        outdeg: HashMap<Vertex, DegreeRange>,
    ) -> Result<DiGraphSet> {
        self.build(&Family::Degrees { indeg, outdeg }, None)
    }

    /// Builds a structural family, restricted to members of `within` when
    /// given.
    ///
    /// # Panics
    ///
    /// Panics if `within` belongs to another session.
    pub fn build(&self, family: &Family, within: Option<&DiGraphSet>) -> Result<DiGraphSet> {
        if let Some(within) = within {
            assert!(self.same(&within.session), "sets belong to different sessions");
        }
        self.check_vertices(family)?;
        self.checkpoint();

        debug!("Building {:?}", family);
        let fm = &self.state.frontier;
        let mgr = self.mgr();
        let space = within.map(|w| w.root);
        let root = match family {
            Family::Graphs => space.unwrap_or_else(|| mgr.universe_powerset()),
            Family::Cycles { hamiltonian } => frontier::build(mgr, &CycleSpec::new(fm, *hamiltonian), space),
            Family::Paths { s, t, hamiltonian } => {
                frontier::build(mgr, &PathSpec::new(fm, *s, *t, *hamiltonian), space)
            }
            Family::Forests { roots, spanning } => {
                frontier::build(mgr, &ForestSpec::new(fm, roots.as_deref(), *spanning), space)
            }
            Family::Trees { root, spanning } => {
                frontier::build(mgr, &ForestSpec::new(fm, Some(std::slice::from_ref(root)), *spanning), space)
            }
            Family::Degrees { indeg, outdeg } => {
                let spec = DegreeSpec::new(fm, indeg.clone(), outdeg.clone());
                frontier::build(mgr, &spec, space)
            }
        };
        Ok(self.wrap(root))
    }

    fn check_vertices(&self, family: &Family) -> Result<()> {
        let universe = self.universe();
        match family {
            Family::Graphs | Family::Cycles { .. } => Ok(()),
            Family::Paths { s, t, .. } => {
                universe.check_vertex(*s)?;
                universe.check_vertex(*t)
            }
            Family::Forests { roots, .. } => roots
                .iter()
                .flatten()
                .try_for_each(|&v| universe.check_vertex(v)),
            Family::Trees { root, .. } => universe.check_vertex(*root),
            Family::Degrees { indeg, outdeg } => indeg
                .keys()
                .chain(outdeg.keys())
                .try_for_each(|&v| universe.check_vertex(v)),
        }
    }

    /// Parses a family written by [`DiGraphSet::dump`].
    pub fn load(&self, content: &str) -> Result<DiGraphSet> {
        self.checkpoint();
        let root = self.mgr().load(content)?;
        Ok(self.wrap(root))
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<DiGraphSet> {
        self.checkpoint();
        let root = self.mgr().load_file(path)?;
        Ok(self.wrap(root))
    }
}

/// What a filter refers to.
#[derive(Debug, Clone, Copy)]
pub enum Select<'a> {
    Edge(Vertex, Vertex),
    Vertex(Vertex),
    Graph(&'a [(Vertex, Vertex)]),
    Family(&'a DiGraphSet),
}

/// A family of directed graphs.
pub struct DiGraphSet {
    session: Session,
    root: ZddId,
}

impl Clone for DiGraphSet {
    fn clone(&self) -> Self {
        self.session.wrap(self.root)
    }
}

impl Drop for DiGraphSet {
    fn drop(&mut self) {
        self.session.mgr().release(self.root);
    }
}

impl PartialEq for DiGraphSet {
    fn eq(&self, other: &Self) -> bool {
        self.session.same(&other.session) && self.root == other.root
    }
}

impl Eq for DiGraphSet {}

impl Hash for DiGraphSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
    }
}

impl fmt::Debug for DiGraphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiGraphSet")
            .field("root", &self.root)
            .field("len", &self.len())
            .finish()
    }
}

impl DiGraphSet {
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Root of the underlying diagram.
    pub fn id(&self) -> ZddId {
        self.root
    }

    fn mgr(&self) -> &ZddManager {
        self.session.mgr()
    }

    fn universe(&self) -> &Universe {
        self.session.universe()
    }

    fn check(&self, other: &DiGraphSet) {
        assert!(self.session.same(&other.session), "sets belong to different sessions");
    }

    /// Rebinds this handle to `root`.
    fn replace(&mut self, root: ZddId) {
        self.mgr().retain(root);
        self.mgr().release(self.root);
        self.root = root;
    }

    fn combine(&self, other: &DiGraphSet, op: impl FnOnce(&ZddManager, ZddId, ZddId) -> ZddId) -> DiGraphSet {
        self.check(other);
        self.session.checkpoint();
        self.session.wrap(op(self.mgr(), self.root, other.root))
    }

    fn apply(&self, op: impl FnOnce(&ZddManager, ZddId) -> ZddId) -> DiGraphSet {
        self.session.checkpoint();
        self.session.wrap(op(self.mgr(), self.root))
    }

    // ─── Algebra ───

    pub fn union(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::union)
    }

    pub fn intersection(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::intersection)
    }

    pub fn difference(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::difference)
    }

    pub fn symmetric_difference(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::symmetric_difference)
    }

    /// `{g ∪ h}` over all pairs of members.
    pub fn join(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::join)
    }

    /// `{g ∩ h}` over all pairs of members.
    pub fn meet(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::meet)
    }

    /// Weak division: graphs `h`, disjoint from every member `d` of the
    /// divisor, such that `h ∪ d` is a member for all `d`.
    pub fn quotient(&self, divisor: &DiGraphSet) -> Result<DiGraphSet> {
        if divisor.root.is_zero() {
            return Err(Error::EmptyDivisor);
        }
        Ok(self.combine(divisor, ZddManager::quotient))
    }

    /// `self − (divisor ⊗ (self / divisor))`.
    pub fn remainder(&self, divisor: &DiGraphSet) -> Result<DiGraphSet> {
        if divisor.root.is_zero() {
            return Err(Error::EmptyDivisor);
        }
        Ok(self.combine(divisor, ZddManager::remainder))
    }

    /// Every subgraph of the universe that is not a member.
    pub fn complement(&self) -> DiGraphSet {
        self.apply(ZddManager::invert)
    }

    /// Replaces every member by the universe edges it lacks.
    pub fn flip_all(&self) -> DiGraphSet {
        self.apply(ZddManager::flip_all)
    }

    pub fn minimal(&self) -> DiGraphSet {
        self.apply(ZddManager::minimal)
    }

    pub fn maximal(&self) -> DiGraphSet {
        self.apply(ZddManager::maximal)
    }

    /// Blocking sets: every graph sharing an edge with each member.
    pub fn blocking(&self) -> DiGraphSet {
        self.apply(ZddManager::hitting)
    }

    /// Members with fewer than `k` edges.
    pub fn smaller(&self, k: usize) -> DiGraphSet {
        self.apply(|mgr, f| mgr.smaller(f, k))
    }

    /// Members with more than `k` edges.
    pub fn larger(&self, k: usize) -> DiGraphSet {
        self.apply(|mgr, f| mgr.larger(f, k))
    }

    /// Members with exactly `k` edges.
    pub fn graph_size(&self, k: usize) -> DiGraphSet {
        self.apply(|mgr, f| mgr.size_eq(f, k))
    }

    // ─── Filters ───

    /// Members containing the edge, touching the vertex, or being a
    /// supergraph of the graph (of some member of the family).
    pub fn including(&self, what: Select<'_>) -> Result<DiGraphSet> {
        let root = self.including_root(what)?;
        Ok(self.session.wrap(root))
    }

    fn including_root(&self, what: Select<'_>) -> Result<ZddId> {
        let mgr = self.mgr();
        let f = self.root;
        Ok(match what {
            Select::Edge(u, v) => {
                let var = self.universe().var_of(u, v)?;
                self.session.checkpoint();
                mgr.onset(f, var)
            }
            Select::Vertex(v) => {
                let vars = self.universe().incident(v)?;
                self.session.checkpoint();
                vars.iter()
                    .fold(ZddId::ZERO, |acc, &var| mgr.union(acc, mgr.onset(f, var)))
            }
            Select::Graph(graph) => {
                let g = self.session.singleton(graph)?;
                mgr.restrict(f, g)
            }
            Select::Family(other) => {
                self.check(other);
                self.session.checkpoint();
                mgr.restrict(f, other.root)
            }
        })
    }

    /// Members without the edge, not touching the vertex, or not being a
    /// supergraph of the graph (of any member of the family).
    pub fn excluding(&self, what: Select<'_>) -> Result<DiGraphSet> {
        let mgr = self.mgr();
        let root = match what {
            Select::Edge(u, v) => {
                let var = self.universe().var_of(u, v)?;
                self.session.checkpoint();
                mgr.offset(self.root, var)
            }
            Select::Vertex(_) => {
                let touching = self.including_root(what)?;
                mgr.difference(self.root, touching)
            }
            Select::Graph(graph) => {
                let g = self.session.singleton(graph)?;
                mgr.non_supersets(self.root, g)
            }
            Select::Family(other) => {
                self.check(other);
                self.session.checkpoint();
                mgr.non_supersets(self.root, other.root)
            }
        };
        Ok(self.session.wrap(root))
    }

    /// Members that are subgraphs of the graph (of some member of the
    /// family). An edge or a vertex stands for the graph of its edges.
    pub fn included(&self, what: Select<'_>) -> Result<DiGraphSet> {
        let mgr = self.mgr();
        let g = match what {
            Select::Edge(u, v) => mgr.base(self.universe().var_of(u, v)?),
            Select::Vertex(v) => {
                let vars = self.universe().incident(v)?;
                mgr.singleton(vars.iter().copied())
            }
            Select::Graph(graph) => self.session.singleton(graph)?,
            Select::Family(other) => {
                self.check(other);
                self.session.checkpoint();
                other.root
            }
        };
        Ok(self.session.wrap(mgr.permit(self.root, g)))
    }

    /// Members that are supergraphs of some member of `other`.
    pub fn supergraphs(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::restrict)
    }

    /// Members that are subgraphs of some member of `other`.
    pub fn subgraphs(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::permit)
    }

    pub fn non_supergraphs(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::non_supersets)
    }

    pub fn non_subgraphs(&self, other: &DiGraphSet) -> DiGraphSet {
        self.combine(other, ZddManager::non_subsets)
    }

    // ─── Comparisons ───

    pub fn is_subset(&self, other: &DiGraphSet) -> bool {
        self.check(other);
        self.mgr().is_subset(self.root, other.root)
    }

    pub fn is_superset(&self, other: &DiGraphSet) -> bool {
        other.is_subset(self)
    }

    pub fn is_proper_subset(&self, other: &DiGraphSet) -> bool {
        self.root != other.root && self.is_subset(other)
    }

    pub fn is_proper_superset(&self, other: &DiGraphSet) -> bool {
        other.is_proper_subset(self)
    }

    pub fn is_disjoint(&self, other: &DiGraphSet) -> bool {
        self.check(other);
        self.mgr().is_disjoint(self.root, other.root)
    }

    // ─── Queries ───

    /// Number of members.
    pub fn len(&self) -> BigUint {
        self.mgr().count(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_zero()
    }

    /// Number of diagram nodes.
    pub fn size(&self) -> usize {
        self.mgr().node_count(self.root)
    }

    pub fn contains(&self, graph: &[(Vertex, Vertex)]) -> Result<bool> {
        let vars = self.universe().vars_of(graph)?;
        Ok(self.mgr().contains(self.root, &vars))
    }

    /// Whether some member has the edge.
    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> Result<bool> {
        let var = self.universe().var_of(u, v)?;
        self.session.checkpoint();
        Ok(!self.mgr().subset1(self.root, var).is_zero())
    }

    /// Whether some member touches the vertex.
    pub fn contains_vertex(&self, v: Vertex) -> Result<bool> {
        Ok(!self.including_root(Select::Vertex(v))?.is_zero())
    }

    /// Some member, preferring larger ones.
    pub fn choice(&self) -> Result<Graph> {
        let vars = self.mgr().pick_one(self.root).ok_or(Error::EmptyFamily)?;
        Ok(self.universe().graph_of(&vars))
    }

    /// Probability that a random subgraph, with each edge present
    /// independently with probability `p(edge)`, is a member.
    pub fn probability(&self, p: impl Fn(&Edge) -> f64) -> f64 {
        let probs: Vec<f64> = self.universe().edges().iter().map(p).collect();
        self.mgr().probability(self.root, &probs)
    }

    // ─── Modifiers ───

    /// Adds a graph as a member.
    pub fn add(&mut self, graph: &[(Vertex, Vertex)]) -> Result<()> {
        let g = self.session.singleton(graph)?;
        let root = self.mgr().union(self.root, g);
        self.replace(root);
        Ok(())
    }

    /// Adds the edge to every member.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        let var = self.universe().var_of(u, v)?;
        self.session.checkpoint();
        let root = self.mgr().join(self.root, self.mgr().base(var));
        self.replace(root);
        Ok(())
    }

    /// Removes a member; fails with [`Error::NotFound`] if absent.
    pub fn remove(&mut self, graph: &[(Vertex, Vertex)]) -> Result<()> {
        if !self.contains(graph)? {
            return Err(Error::NotFound);
        }
        self.discard(graph)
    }

    /// Removes the edge from every member; fails with [`Error::NotFound`]
    /// if no member has it.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        if !self.contains_edge(u, v)? {
            return Err(Error::NotFound);
        }
        self.discard_edge(u, v)
    }

    /// Removes a member if present.
    pub fn discard(&mut self, graph: &[(Vertex, Vertex)]) -> Result<()> {
        let g = self.session.singleton(graph)?;
        let root = self.mgr().difference(self.root, g);
        self.replace(root);
        Ok(())
    }

    /// Removes the edge from every member that has it.
    pub fn discard_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        let var = self.universe().var_of(u, v)?;
        self.session.checkpoint();
        let root = self.mgr().erase(self.root, var);
        self.replace(root);
        Ok(())
    }

    /// Toggles the edge in every member.
    pub fn flip(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        let var = self.universe().var_of(u, v)?;
        self.session.checkpoint();
        let root = self.mgr().change(self.root, var);
        self.replace(root);
        Ok(())
    }

    /// Removes and returns some member.
    pub fn pop(&mut self) -> Result<Graph> {
        let graph = self.choice()?;
        self.discard(&graph)?;
        Ok(graph)
    }

    pub fn clear(&mut self) {
        self.replace(ZddId::ZERO);
    }

    // ─── Traversal ───

    /// Members in diagram order.
    pub fn iter(&self) -> Graphs {
        Graphs {
            set: self.clone(),
            walk: SetWalk::new(self.root),
        }
    }

    /// Members by non-increasing total weight.
    ///
    /// Edges missing from `weights` keep their universe weight (1.0 if none
    /// was declared).
    pub fn max_iter(&self, weights: Option<&Weights>) -> Result<WeightedGraphs> {
        let w = self.weights(weights)?;
        Ok(WeightedGraphs {
            set: self.clone(),
            search: WeightedSearch::max(self.mgr(), self.root, &w),
        })
    }

    /// Members by non-decreasing total weight.
    pub fn min_iter(&self, weights: Option<&Weights>) -> Result<WeightedGraphs> {
        let w = self.weights(weights)?;
        Ok(WeightedGraphs {
            set: self.clone(),
            search: WeightedSearch::min(self.mgr(), self.root, &w),
        })
    }

    fn weights(&self, overrides: Option<&Weights>) -> Result<Vec<f64>> {
        let mut w = self.universe().weights();
        for (&(u, v), &weight) in overrides.into_iter().flatten() {
            w[self.universe().var_of(u, v)?.index()] = weight;
        }
        Ok(w)
    }

    /// Uniformly random members without replacement.
    ///
    /// A `seed` makes the sequence reproducible.
    pub fn rand_iter(&self, seed: Option<u64>) -> RandomGraphs {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        RandomGraphs { rest: self.clone(), rng }
    }

    // ─── Serialization ───

    pub fn dump(&self) -> String {
        self.mgr().dump(self.root)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.mgr().save(self.root, path)
    }
}

/// Lists up to a line of members, lightest first.
impl fmt::Display for DiGraphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_CHARS: usize = 80;

        let n = self.universe().len();
        let weights: Vec<f64> = (1..=n)
            .map(|i| 1.0 + i as f64 / (n * n) as f64)
            .collect();
        let mut search = WeightedSearch::min(self.mgr(), self.root, &weights);

        let mut out = String::from("DiGraphSet([");
        let mut first = true;
        while let Some(vars) = search.next(self.mgr()) {
            if !first {
                out.push_str(", ");
            }
            first = false;

            let mut graph = self.universe().graph_of(&vars);
            graph.sort_unstable();
            let edges: Vec<String> = graph.iter().map(|(u, v)| format!("({}, {})", u, v)).collect();
            out.push('[');
            out.push_str(&edges.join(", "));
            out.push(']');

            if out.len() > MAX_CHARS - 2 {
                break;
            }
        }

        if out.len() <= MAX_CHARS - 2 {
            write!(f, "{}])", out)
        } else {
            write!(f, "{} ...", &out[..MAX_CHARS - 4])
        }
    }
}

impl BitOr for &DiGraphSet {
    type Output = DiGraphSet;

    fn bitor(self, rhs: &DiGraphSet) -> DiGraphSet {
        self.union(rhs)
    }
}

impl BitAnd for &DiGraphSet {
    type Output = DiGraphSet;

    fn bitand(self, rhs: &DiGraphSet) -> DiGraphSet {
        self.intersection(rhs)
    }
}

impl Sub for &DiGraphSet {
    type Output = DiGraphSet;

    fn sub(self, rhs: &DiGraphSet) -> DiGraphSet {
        self.difference(rhs)
    }
}

impl BitXor for &DiGraphSet {
    type Output = DiGraphSet;

    fn bitxor(self, rhs: &DiGraphSet) -> DiGraphSet {
        self.symmetric_difference(rhs)
    }
}

impl Not for &DiGraphSet {
    type Output = DiGraphSet;

    fn not(self) -> DiGraphSet {
        self.complement()
    }
}

/// Members of a family in diagram order.
pub struct Graphs {
    set: DiGraphSet,
    walk: SetWalk,
}

impl Iterator for Graphs {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        let vars = self.walk.next(self.set.mgr())?;
        Some(self.set.universe().graph_of(&vars))
    }
}

impl<'a> IntoIterator for &'a DiGraphSet {
    type Item = Graph;
    type IntoIter = Graphs;

    fn into_iter(self) -> Graphs {
        self.iter()
    }
}

/// Members of a family by weight.
pub struct WeightedGraphs {
    set: DiGraphSet,
    search: WeightedSearch,
}

impl WeightedGraphs {
    /// Next member with its total weight.
    pub fn next_weighted(&mut self) -> Option<(Graph, f64)> {
        let (vars, weight) = self.search.next_weighted(self.set.mgr())?;
        Some((self.set.universe().graph_of(&vars), weight))
    }
}

impl Iterator for WeightedGraphs {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        let vars = self.search.next(self.set.mgr())?;
        Some(self.set.universe().graph_of(&vars))
    }
}

/// Uniformly random members, each drawn once.
pub struct RandomGraphs {
    /// Members not drawn yet.
    rest: DiGraphSet,
    rng: ChaCha8Rng,
}

impl Iterator for RandomGraphs {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        self.rest.session.checkpoint();
        let mgr = self.rest.mgr();
        let vars = mgr.sample(self.rest.root, &mut self.rng)?;
        let root = mgr.difference(self.rest.root, mgr.singleton(vars.iter().copied()));
        let graph = self.rest.universe().graph_of(&vars);
        self.rest.replace(root);
        Some(graph)
    }
}
