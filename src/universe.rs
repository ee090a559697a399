//! The edge universe of a session.
//!
//! A [`Universe`] fixes the candidate edges and their order once. Edge `i`
//! (0-based, after ordering) is variable `i + 1` in every diagram of the
//! session, so the order chosen here is the variable order.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::types::Var;

/// Vertex label.
pub type Vertex = u32;

/// A directed edge `source → target`, optionally weighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: Option<f64>,
}

impl Edge {
    pub const fn new(source: Vertex, target: Vertex) -> Self {
        Self {
            source,
            target,
            weight: None,
        }
    }

    pub const fn weighted(source: Vertex, target: Vertex, weight: f64) -> Self {
        Self {
            source,
            target,
            weight: Some(weight),
        }
    }

    pub const fn key(&self) -> (Vertex, Vertex) {
        (self.source, self.target)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((source, target): (Vertex, Vertex)) -> Self {
        Edge::new(source, target)
    }
}

impl From<(Vertex, Vertex, f64)> for Edge {
    fn from((source, target, weight): (Vertex, Vertex, f64)) -> Self {
        Edge::weighted(source, target, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Chooses the variable order of a universe.
///
/// `order` must return a permutation of `0..edges.len()`: position `i` of the
/// result names the input edge that becomes variable `i + 1`. Anything else
/// is rejected with [`Error::InvalidOrdering`].
pub trait EdgeOrdering {
    fn order(&self, edges: &[Edge]) -> Vec<usize>;
}

/// Keeps the edges in the order they were declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsGiven;

impl EdgeOrdering for AsGiven {
    fn order(&self, edges: &[Edge]) -> Vec<usize> {
        (0..edges.len()).collect()
    }
}

impl<F> EdgeOrdering for F
where
    F: Fn(&[Edge]) -> Vec<usize>,
{
    fn order(&self, edges: &[Edge]) -> Vec<usize> {
        self(edges)
    }
}

/// Ordered set of candidate edges.
#[derive(Debug, Clone)]
pub struct Universe {
    /// Edges in variable order.
    edges: Vec<Edge>,
    index: HashMap<(Vertex, Vertex), usize>,
    /// Vertices by first appearance in the edge order.
    vertices: Vec<Vertex>,
    incident: HashMap<Vertex, Vec<Var>>,
}

impl Universe {
    /// Universe with edges in declaration order.
    ///
    /// ```
    /// use digraph_zdd::universe::Universe;
    ///
    /// let universe = Universe::new([(1, 2), (2, 1), (2, 3)]).unwrap();
    /// assert_eq!(universe.len(), 3);
    /// assert_eq!(universe.vertices(), &[1, 2, 3]);
    /// ```
    pub fn new(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        Self::with_ordering(edges, &AsGiven)
    }

    pub fn with_ordering(
        edges: impl IntoIterator<Item = impl Into<Edge>>,
        ordering: &impl EdgeOrdering,
    ) -> Result<Self> {
        let declared: Vec<Edge> = edges.into_iter().map(Into::into).collect();

        let order = ordering.order(&declared);
        check_permutation(&order, declared.len())?;
        let edges: Vec<Edge> = order.into_iter().map(|i| declared[i]).collect();

        let mut index = HashMap::with_capacity(edges.len());
        let mut vertices = Vec::new();
        let mut incident: HashMap<Vertex, Vec<Var>> = HashMap::new();
        for (i, edge) in edges.iter().enumerate() {
            if index.insert(edge.key(), i).is_some() {
                return Err(Error::DuplicateEdge(edge.source, edge.target));
            }
            let var = Var::from_index(i);
            for v in [edge.source, edge.target] {
                let list = incident.entry(v).or_insert_with(|| {
                    vertices.push(v);
                    Vec::new()
                });
                if list.last() != Some(&var) {
                    list.push(var);
                }
            }
        }

        debug!("Universe with {} edges over {} vertices", edges.len(), vertices.len());
        Ok(Self {
            edges,
            index,
            vertices,
            incident,
        })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in variable order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, var: Var) -> Edge {
        self.edges[var.index()]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.incident.contains_key(&v)
    }

    pub fn contains_edge(&self, source: Vertex, target: Vertex) -> bool {
        self.index.contains_key(&(source, target))
    }

    /// Variable of the edge `source → target`.
    pub fn var_of(&self, source: Vertex, target: Vertex) -> Result<Var> {
        self.index
            .get(&(source, target))
            .map(|&i| Var::from_index(i))
            .ok_or(Error::UnknownEdge(source, target))
    }

    /// Variables of a graph given as edge pairs, sorted and deduplicated.
    pub fn vars_of(&self, edges: &[(Vertex, Vertex)]) -> Result<Vec<Var>> {
        let mut vars = edges
            .iter()
            .map(|&(s, t)| self.var_of(s, t))
            .collect::<Result<Vec<_>>>()?;
        vars.sort_unstable();
        vars.dedup();
        Ok(vars)
    }

    /// Variables of all edges touching `v`, in order.
    pub fn incident(&self, v: Vertex) -> Result<&[Var]> {
        self.incident
            .get(&v)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownVertex(v))
    }

    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(v))
        }
    }

    /// Edge pairs of a member.
    pub fn graph_of(&self, vars: &[Var]) -> Vec<(Vertex, Vertex)> {
        vars.iter().map(|&var| self.edge(var).key()).collect()
    }

    /// Declared edge weights, 1.0 where none was given.
    pub fn weights(&self) -> Vec<f64> {
        self.edges.iter().map(|e| e.weight.unwrap_or(1.0)).collect()
    }
}

fn check_permutation(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(Error::InvalidOrdering(format!(
            "expected {} positions, got {}",
            n,
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &i in order {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => return Err(Error::InvalidOrdering(format!("position {} repeated", i))),
            None => return Err(Error::InvalidOrdering(format!("position {} out of range", i))),
        }
    }
    Ok(())
}
