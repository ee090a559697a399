//! Per-variable unique table with intrusive hashing.
//!
//! Collision chains are threaded through [`ZddNode::next`], the bucket array
//! only holds chain heads. The table doubles once the load factor exceeds 2.

use crate::node::ZddNode;
use crate::reference::ZddId;
use crate::types::{NodeId, Var};

/// A subtable storing the nodes of a single variable.
#[derive(Debug, Clone)]
pub struct Subtable {
    /// The variable for all nodes in this subtable.
    pub variable: Var,

    /// Heads of the collision chains; `ZddNode::NO_NEXT` marks an empty bucket.
    buckets: Vec<NodeId>,

    /// `bucket_index = hash & bitmask`.
    bitmask: u64,

    count: usize,
}

impl Subtable {
    /// Creates a subtable with `2^bits` buckets.
    pub fn with_bucket_bits(variable: Var, bits: usize) -> Self {
        let num_buckets = 1 << bits;
        Self {
            variable,
            buckets: vec![ZddNode::NO_NEXT; num_buckets],
            bitmask: (num_buckets - 1) as u64,
            count: 0,
        }
    }

    #[inline]
    fn bucket_index(&self, lo: ZddId, hi: ZddId) -> usize {
        (hash_children(lo, hi) & self.bitmask) as usize
    }

    /// Looks up the node with the given children.
    pub fn find(&self, lo: ZddId, hi: ZddId, nodes: &[ZddNode]) -> Option<NodeId> {
        let mut current = self.buckets[self.bucket_index(lo, hi)];
        while current != ZddNode::NO_NEXT {
            let node = &nodes[current.index()];
            if node.lo == lo && node.hi == hi {
                return Some(current);
            }
            current = node.next;
        }
        None
    }

    /// Inserts node `id` (already written to `nodes`) at the head of its chain.
    pub fn insert(&mut self, id: NodeId, nodes: &mut [ZddNode]) {
        if self.count >= 2 * self.buckets.len() {
            self.grow(nodes);
        }
        let node = nodes[id.index()];
        let bucket = self.bucket_index(node.lo, node.hi);
        nodes[id.index()].next = self.buckets[bucket];
        self.buckets[bucket] = id;
        self.count += 1;
    }

    /// Unlinks every node for which `keep` returns false.
    ///
    /// Returns the removed ids; their `next` fields are left dangling.
    pub fn retain(&mut self, nodes: &mut [ZddNode], mut keep: impl FnMut(NodeId) -> bool) -> Vec<NodeId> {
        let mut removed = Vec::new();
        for b in 0..self.buckets.len() {
            let mut current = self.buckets[b];
            let mut prev: Option<NodeId> = None;
            while current != ZddNode::NO_NEXT {
                let next = nodes[current.index()].next;
                if keep(current) {
                    prev = Some(current);
                } else {
                    match prev {
                        Some(p) => nodes[p.index()].next = next,
                        None => self.buckets[b] = next,
                    }
                    removed.push(current);
                    self.count -= 1;
                }
                current = next;
            }
        }
        removed
    }

    /// Doubles the bucket array and rehashes every chain.
    fn grow(&mut self, nodes: &mut [ZddNode]) {
        let new_len = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, vec![ZddNode::NO_NEXT; new_len]);
        self.bitmask = (new_len - 1) as u64;
        for head in old {
            let mut current = head;
            while current != ZddNode::NO_NEXT {
                let node = nodes[current.index()];
                let bucket = self.bucket_index(node.lo, node.hi);
                nodes[current.index()].next = self.buckets[bucket];
                self.buckets[bucket] = current;
                current = node.next;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}

/// FNV-1a style mixing of the (lo, hi) pair.
#[inline]
fn hash_children(lo: ZddId, hi: ZddId) -> u64 {
    let mut h = 14695981039346656037u64;
    h ^= lo.raw() as u64;
    h = h.wrapping_mul(1099511628211);
    h ^= hi.raw() as u64;
    h = h.wrapping_mul(1099511628211);
    h
}
