use std::fmt;

/// Slot of a node in the manager's node storage.
///
/// Slots 0 and 1 hold the ⊥ and ⊤ terminals; decision nodes start at 2.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// End-of-chain marker in the unique table.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A variable identifier (1-indexed).
///
/// Variable `i` stands for the `i`-th edge of the universe order, so the
/// variable order *is* the edge order: smaller ids sit closer to the root.
/// Id 0 is reserved for terminals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Var(u32);

impl Var {
    /// Special zero value (reserved, not a valid variable).
    pub const ZERO: Var = Var(0);

    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `id == 0`.
    pub const fn new(id: u32) -> Self {
        debug_assert!(id > 0, "Variable IDs must be >= 1");
        Var(id)
    }

    /// Variable for the edge at 0-based universe position `index`.
    pub const fn from_index(index: usize) -> Self {
        Var(index as u32 + 1)
    }

    pub const fn id(self) -> u32 {
        self.0
    }

    /// 0-based universe position of the edge this variable stands for.
    pub const fn index(self) -> usize {
        debug_assert!(self.0 > 0);
        (self.0 - 1) as usize
    }

    /// The variable immediately below this one in the order.
    pub const fn next(self) -> Var {
        Var(self.0 + 1)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<u32> for Var {
    fn from(id: u32) -> Self {
        Var::new(id)
    }
}
