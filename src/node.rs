use crate::reference::ZddId;
use crate::types::{NodeId, Var};

/// A decision node of the diagram.
///
/// A node with variable `x` stands for the family
/// ```text
/// F(node) = F(lo) ∪ { S ∪ {x} | S ∈ F(hi) }
/// ```
/// i.e. `lo` holds the graphs without edge `x`, `hi` the graphs with it
/// (stored with `x` removed).
///
/// # Invariants
///
/// - `hi` is never `ZddId::ZERO` (zero-suppression).
/// - `var` is strictly smaller than the variable of any non-terminal child.
///
/// Slots reclaimed by garbage collection keep `var == Var::ZERO` until reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZddNode {
    pub var: Var,
    pub lo: ZddId,
    pub hi: ZddId,
    /// Next node in the unique-table collision chain (or the free list).
    pub next: NodeId,
}

impl Default for ZddNode {
    fn default() -> Self {
        Self {
            var: Var::ZERO,
            lo: ZddId::INVALID,
            hi: ZddId::INVALID,
            next: Self::NO_NEXT,
        }
    }
}

impl ZddNode {
    /// Sentinel value for end of hash collision chain.
    pub const NO_NEXT: NodeId = NodeId::INVALID;

    /// Creates a new decision node.
    ///
    /// # Panics
    ///
    /// Debug-panics if `hi == ZddId::ZERO`.
    pub fn new(var: Var, lo: ZddId, hi: ZddId) -> Self {
        debug_assert!(!hi.is_zero(), "ZDD node cannot have hi=ZERO (zero-suppression rule)");
        Self {
            var,
            lo,
            hi,
            next: Self::NO_NEXT,
        }
    }

    /// Returns true for terminal slots and slots on the free list.
    pub fn is_vacant(&self) -> bool {
        self.var.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = ZddNode::new(Var::new(1), ZddId::ZERO, ZddId::ONE);
        assert_eq!(node.var, Var::new(1));
        assert_eq!(node.lo, ZddId::ZERO);
        assert_eq!(node.hi, ZddId::ONE);
        assert!(!node.is_vacant());
        assert!(ZddNode::default().is_vacant());
    }

    #[test]
    fn test_node_equality() {
        let n1 = ZddNode::new(Var::new(1), ZddId::ZERO, ZddId::ONE);
        let n2 = ZddNode::new(Var::new(1), ZddId::ZERO, ZddId::ONE);
        let n3 = ZddNode::new(Var::new(2), ZddId::ZERO, ZddId::ONE);

        assert_eq!(n1, n2);
        assert_ne!(n1, n3);
    }
}
