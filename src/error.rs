//! Error type for user-facing operations.
//!
//! Only mistakes in the caller's input are reported through [`Error`].
//! Broken diagram invariants are bugs and panic inside the node store.

use std::fmt;
use std::io;

use crate::universe::Vertex;

#[derive(Debug)]
pub enum Error {
    /// The edge is not part of the universe.
    UnknownEdge(Vertex, Vertex),
    /// No universe edge touches the vertex.
    UnknownVertex(Vertex),
    /// The graph (or edge) to remove is not present.
    NotFound,
    /// Popping from an empty family.
    EmptyFamily,
    /// Division by the empty family.
    EmptyDivisor,
    /// The same directed edge was declared twice.
    DuplicateEdge(Vertex, Vertex),
    /// An edge ordering did not return a permutation of the universe.
    InvalidOrdering(String),
    /// Serialized text could not be parsed.
    Parse(String),
    /// Serialized nodes violate the diagram invariants.
    Malformed(String),
    /// File I/O error.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEdge(u, v) => write!(f, "edge ({}, {}) is not in the universe", u, v),
            Error::UnknownVertex(v) => write!(f, "vertex {} is not in the universe", v),
            Error::NotFound => write!(f, "not found"),
            Error::EmptyFamily => write!(f, "family is empty"),
            Error::EmptyDivisor => write!(f, "division by the empty family"),
            Error::DuplicateEdge(u, v) => write!(f, "duplicate edge ({}, {})", u, v),
            Error::InvalidOrdering(msg) => write!(f, "invalid edge ordering: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Malformed(msg) => write!(f, "malformed diagram: {}", msg),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
