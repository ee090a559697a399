//! # digraph-zdd: families of directed graphs as ZDDs
//!
//! **`digraph-zdd`** represents very large families of directed graphs over a
//! fixed set of candidate edges (the *universe*) as **Zero-suppressed
//! Decision Diagrams**. A family with billions of members often fits in a
//! few thousand nodes, and set algebra works directly on the compressed form.
//!
//! ## What is a ZDD?
//!
//! A ZDD is a rooted DAG over edge variables `1..=n`. Every path from the
//! root to the ⊤ terminal spells one member: the variables whose `hi` branch
//! is taken. Nodes whose `hi` branch leads to ⊥ are suppressed, which makes
//! sparse families (like "all Hamiltonian cycles") very compact. With a fixed
//! variable order, every family has exactly one diagram.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: all diagrams of a session live in one
//!   [`ZddManager`][crate::zdd::ZddManager], which hash-conses nodes and
//!   memoizes operations. Nodes are referred to by lightweight
//!   [`ZddId`][crate::reference::ZddId] handles.
//! - **Structural families**: directed cycles, Hamiltonian cycles, s-t paths,
//!   rooted forests and trees, and degree-constrained subgraphs are built
//!   edge by edge with the [`frontier`] method.
//! - **Rich algebra**: union, intersection, join, meet, division,
//!   sub/supergraph filters, minimal/maximal/blocking sets, size filters.
//! - **Traversal**: plain, weight-ordered and uniformly random enumeration.
//! - **Serialization**: a line-based text format, see [`io`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use digraph_zdd::graphset::{Select, Session};
//! use num_bigint::BigUint;
//! use digraph_zdd::universe::Universe;
//!
//! // 1. Fix the candidate edges.
//! let universe = Universe::new([(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
//! let session = Session::new(universe);
//!
//! // 2. Build families.
//! let paths = session.directed_st_paths(1, 4, false).unwrap();
//! assert_eq!(paths.len(), BigUint::from(2u32));
//!
//! // 3. Combine and filter them.
//! let via_2 = paths.including(Select::Vertex(2)).unwrap();
//! assert_eq!(via_2.iter().collect::<Vec<_>>(), vec![vec![(1, 2), (2, 4)]]);
//! ```
//!
//! ## Core Components
//!
//! - **[`graphset`]**: user-facing [`Session`][crate::graphset::Session] and
//!   [`DiGraphSet`][crate::graphset::DiGraphSet].
//! - **[`zdd`]**: the node store and the set-algebra kernel; [`algebra`],
//!   [`iter`], [`traverse`] and [`io`] extend it.
//! - **[`frontier`]**: frontier-based constructors.
//! - **[`universe`]**: edges, vertices, and the variable order.

pub mod algebra;
pub mod cache;
pub mod config;
pub mod error;
pub mod frontier;
pub mod graphset;
pub mod io;
pub mod iter;
pub mod node;
pub mod reference;
pub mod subtable;
pub mod traverse;
pub mod types;
pub mod universe;
pub mod zdd;

pub use crate::error::{Error, Result};
pub use crate::graphset::{DiGraphSet, Family, Graph, Select, Session};
pub use crate::universe::{Edge, Universe, Vertex};
