use std::fmt;

use crate::types::NodeId;

/// Handle to a family of graphs inside a [`ZddManager`][crate::zdd::ZddManager].
///
/// There are no complement edges, so a `ZddId` is just the index of its root
/// node. Within one manager, equal ids mean equal families and vice versa.
///
/// The two terminals are the only families without a root node:
/// `ZddId::ZERO` (⊥) has no member at all and `ZddId::ONE` (⊤) has the empty
/// graph as its single member.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ZddId(u32);

impl ZddId {
    /// ⊥, the empty family.
    pub const ZERO: ZddId = ZddId(0);

    /// ⊤, the family `{∅}`.
    pub const ONE: ZddId = ZddId(1);

    /// Placeholder stored in vacant node slots.
    pub const INVALID: ZddId = ZddId(u32::MAX);

    pub const fn from_node(id: NodeId) -> Self {
        ZddId(id.raw())
    }

    pub const fn new(index: u32) -> Self {
        ZddId(index)
    }

    pub const fn node_id(self) -> NodeId {
        NodeId::new(self.0)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of the root node in the node storage.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for ZddId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ZddId::ZERO => f.write_str("⊥"),
            ZddId::ONE => f.write_str("⊤"),
            ZddId(i) => write!(f, "#{}", i),
        }
    }
}
